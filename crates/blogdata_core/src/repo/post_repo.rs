//! Post repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and category-filtered list APIs over `posts` storage.
//!
//! # Invariants
//! - Write paths re-run the Post field validators before SQL mutations.
//! - `category` is persisted as its exact label (`Fiction`/`Non-Fiction`).
//! - Read paths reject rows that violate the model instead of masking them.

use crate::model::post::{Category, NewPost, Post, PostId};
use crate::model::validation::{validate_post_content, validate_post_summary, validate_post_title};
use crate::repo::{push_pagination, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const POST_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    category,
    summary,
    created_at,
    updated_at
FROM posts";

/// Query options for listing posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostListQuery {
    pub category: Option<Category>,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for Post operations.
pub trait PostRepository {
    fn create_post(&self, post: &NewPost) -> RepoResult<PostId>;
    fn update_post(&self, post: &Post) -> RepoResult<()>;
    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>>;
    /// Lists posts ordered by id, optionally restricted to one category.
    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>>;
    fn delete_post(&self, id: PostId) -> RepoResult<()>;
}

/// SQLite-backed Post repository.
pub struct SqlitePostRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePostRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PostRepository for SqlitePostRepository<'_> {
    fn create_post(&self, post: &NewPost) -> RepoResult<PostId> {
        validate_post_title(post.title())?;
        validate_post_content(post.content())?;
        validate_post_summary(post.summary())?;

        self.conn.execute(
            "INSERT INTO posts (title, content, category, summary)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                post.title(),
                post.content(),
                post.category().as_str(),
                post.summary(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_post(&self, post: &Post) -> RepoResult<()> {
        validate_post_title(post.title())?;
        validate_post_content(post.content())?;
        validate_post_summary(post.summary())?;

        let changed = self.conn.execute(
            "UPDATE posts
             SET
                title = ?1,
                content = ?2,
                category = ?3,
                summary = ?4,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?5;",
            params![
                post.title(),
                post.content(),
                post.category().as_str(),
                post.summary(),
                post.id(),
            ],
        )?;

        if changed == 0 {
            return Err(not_found(post.id()));
        }

        Ok(())
    }

    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POST_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_post_row(row)?));
        }
        Ok(None)
    }

    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>> {
        let mut sql = format!("{POST_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(category) = query.category {
            sql.push_str(" AND category = ?");
            bind_values.push(Value::Text(category.as_str().to_string()));
        }

        sql.push_str(" ORDER BY id ASC");
        push_pagination(&mut sql, &mut bind_values, query.limit, query.offset);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut posts = Vec::new();

        while let Some(row) = rows.next()? {
            posts.push(parse_post_row(row)?);
        }

        Ok(posts)
    }

    fn delete_post(&self, id: PostId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM posts WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn parse_post_row(row: &Row<'_>) -> RepoResult<Post> {
    let id: PostId = row.get("id")?;
    let category_text: String = row.get("category")?;
    let draft = NewPost::new(
        row.get::<_, String>("title")?,
        row.get::<_, String>("content")?,
        row.get("summary")?,
        &category_text,
    )
    .map_err(|err| RepoError::InvalidData(format!("posts row {id}: {err}")))?;

    Ok(Post::from_storage(
        id,
        draft,
        row.get("created_at")?,
        row.get("updated_at")?,
    ))
}

fn not_found(id: PostId) -> RepoError {
    RepoError::NotFound { entity: "post", id }
}
