use blogdata_core::{Category, NewPost, Post, ValidationError, CLICKBAIT_PHRASES};

fn body() -> String {
    "a".repeat(250)
}

#[test]
fn top_secrets_fiction_post_is_accepted() {
    let draft = NewPost::new("Top 10 Secrets", body(), None, "Fiction").unwrap();
    assert_eq!(draft.category(), Category::Fiction);
    assert_eq!(draft.summary(), None);
}

#[test]
fn drama_category_is_rejected() {
    let err = NewPost::new("Top 10 Secrets", body(), None, "Drama").unwrap_err();
    assert_eq!(err, ValidationError::InvalidCategory("Drama".to_string()));
    assert_eq!(err.field(), "category");
}

#[test]
fn category_match_is_exact() {
    assert_eq!(Category::parse("Non-Fiction"), Ok(Category::NonFiction));
    for value in ["fiction", "Nonfiction", " Fiction", "Non Fiction", ""] {
        assert!(Category::parse(value).is_err(), "`{value}` should be rejected");
    }
}

#[test]
fn every_clickbait_phrase_is_accepted_alone() {
    for phrase in CLICKBAIT_PHRASES {
        let title = format!("Read this: {phrase}");
        assert!(
            NewPost::new(title, body(), None, "Non-Fiction").is_ok(),
            "phrase `{phrase}` should be accepted"
        );
    }
}

#[test]
fn title_without_phrase_or_blank_is_rejected() {
    assert_eq!(
        NewPost::new("A calm essay", body(), None, "Fiction").unwrap_err(),
        ValidationError::MissingClickbaitPhrase
    );
    assert_eq!(
        NewPost::new("", body(), None, "Fiction").unwrap_err(),
        ValidationError::EmptyPostTitle
    );
}

#[test]
fn content_and_summary_length_rules() {
    assert_eq!(
        NewPost::new("Top picks", "a".repeat(249), None, "Fiction").unwrap_err(),
        ValidationError::ContentTooShort { chars: 249 }
    );
    assert!(NewPost::new("Top picks", body(), Some("s".repeat(250)), "Fiction").is_ok());
    assert_eq!(
        NewPost::new("Top picks", body(), Some("s".repeat(251)), "Fiction").unwrap_err(),
        ValidationError::SummaryTooLong { chars: 251 }
    );
}

#[test]
fn payload_deserialization_reports_validation_message() {
    let err = serde_json::from_value::<NewPost>(serde_json::json!({
        "title": "Top 10 Secrets",
        "content": body(),
        "category": "Drama"
    }))
    .unwrap_err();
    assert!(
        err.to_string()
            .contains("Category 'Drama' is not valid. Must be 'Fiction' or 'Non-Fiction'."),
        "unexpected error: {err}"
    );
}

#[test]
fn post_setters_validate_and_display_renders_fields() {
    let mut post: Post = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "Guess Who",
        "content": body(),
        "summary": null,
        "category": "Non-Fiction",
        "created_at": 1_700_000_000_000_i64,
        "updated_at": null
    }))
    .unwrap();

    assert!(post.set_title("Plain").is_err());
    assert_eq!(post.title(), "Guess Who");
    assert!(post.set_content("short").is_err());
    assert!(post.set_summary(Some("x".repeat(251))).is_err());
    assert_eq!(post.summary(), None);
    assert!(post.set_category("Poetry").is_err());
    assert_eq!(post.category(), Category::NonFiction);

    post.set_summary(Some("short".to_string())).unwrap();
    post.set_category("Fiction").unwrap();
    assert_eq!(
        post.to_string(),
        format!("Post(id=1, title=Guess Who, content={}, summary=short)", body())
    );

    let json = serde_json::to_value(&post).unwrap();
    assert_eq!(json["category"], "Fiction");
}
