use blogdata_core::{Author, NewAuthor, ValidationError};

#[test]
fn new_author_accepts_valid_fields() {
    let draft = NewAuthor::new("Ada Lovelace", "5551234567").unwrap();
    assert_eq!(draft.name(), "Ada Lovelace");
    assert_eq!(draft.phone_number(), "5551234567");
}

#[test]
fn new_author_rejects_blank_name_before_phone() {
    let err = NewAuthor::new("   ", "bad").unwrap_err();
    assert_eq!(err, ValidationError::EmptyAuthorName);
    assert_eq!(err.field(), "name");
}

#[test]
fn new_author_rejects_malformed_phone_numbers() {
    for phone in ["555123456", "55512345678", "555-123-4567", "phone12345"] {
        let err = NewAuthor::new("Ada", phone).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhoneNumber, "phone `{phone}`");
    }
}

#[test]
fn payload_deserialization_runs_validators() {
    let draft: NewAuthor = serde_json::from_value(serde_json::json!({
        "name": "Grace Hopper",
        "phone_number": "5559876543"
    }))
    .unwrap();
    assert_eq!(draft.name(), "Grace Hopper");

    let err = serde_json::from_value::<NewAuthor>(serde_json::json!({
        "name": "Grace Hopper",
        "phone_number": "12345"
    }))
    .unwrap_err();
    assert!(
        err.to_string()
            .contains("Phone number must be exactly 10 digits."),
        "unexpected error: {err}"
    );
}

#[test]
fn record_setters_validate_and_keep_old_value_on_failure() {
    let mut author: Author = serde_json::from_value(serde_json::json!({
        "id": 7,
        "name": "Ada",
        "phone_number": "5551234567",
        "created_at": 1_700_000_000_000_i64,
        "updated_at": null
    }))
    .unwrap();

    assert_eq!(author.set_name(""), Err(ValidationError::EmptyAuthorName));
    assert_eq!(author.name(), "Ada");
    assert_eq!(
        author.set_phone_number("12"),
        Err(ValidationError::InvalidPhoneNumber)
    );
    assert_eq!(author.phone_number(), "5551234567");

    author.set_name("Ada King").unwrap();
    author.set_phone_number("5550001111").unwrap();
    assert_eq!(author.name(), "Ada King");
    assert_eq!(author.phone_number(), "5550001111");
}

#[test]
fn author_display_and_serialization() {
    let author: Author = serde_json::from_value(serde_json::json!({
        "id": 3,
        "name": "Ada",
        "phone_number": "5551234567",
        "created_at": 1_700_000_000_000_i64,
        "updated_at": 1_700_000_360_000_i64
    }))
    .unwrap();

    assert_eq!(author.to_string(), "Author(id=3, name=Ada)");
    assert_eq!(author.updated_at(), Some(1_700_000_360_000));

    let json = serde_json::to_value(&author).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["phone_number"], "5551234567");
    let decoded: Author = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, author);
}
