//! PostgreSQL implementation of PostRepository.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::postgres::PgConnection;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, PostId};
use crate::domain::post::{Post, PostContent, PostOrder, PostPatch, PostQuery};
use crate::ports::{DeleteResult, InsertOneResult, PostRepository, UpdateResult};

const SELECT_POSTS: &str = r#"
    SELECT id, post_title, description, organizer_email, deadline, volunteers_needed, extra
    FROM posts
    WHERE ($1::text IS NULL OR strpos(lower(post_title), lower($1)) > 0)
      AND ($2::text IS NULL OR organizer_email = $2)
"#;

/// PostgreSQL implementation of the PostRepository port.
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    /// Creates a new PostgresPostRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a post.
#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    post_title: String,
    description: Option<String>,
    organizer_email: String,
    deadline: Option<String>,
    volunteers_needed: i64,
    extra: Json<Map<String, Value>>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post::new(
            PostId::from_uuid(row.id),
            PostContent {
                title: row.post_title,
                description: row.description,
                organizer_email: row.organizer_email,
                deadline: row.deadline,
                volunteers_needed: row.volunteers_needed,
                extra: row.extra.0,
            },
        )
    }
}

/// Deadlines compare bytewise, matching `sort_by_deadline`.
fn order_clause(order: PostOrder) -> &'static str {
    match order {
        PostOrder::Insertion => "ORDER BY seq",
        PostOrder::DeadlineAscending => r#"ORDER BY deadline COLLATE "C" ASC NULLS FIRST, seq"#,
    }
}

/// Inserts `content` under `id`. Returns false if the id is already taken.
async fn insert_row(
    conn: &mut PgConnection,
    id: &PostId,
    content: &PostContent,
) -> Result<bool, DomainError> {
    let result = sqlx::query(
        r#"
        INSERT INTO posts (
            id, post_title, description, organizer_email, deadline, volunteers_needed, extra
        ) VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(id.as_uuid())
    .bind(&content.title)
    .bind(&content.description)
    .bind(&content.organizer_email)
    .bind(&content.deadline)
    .bind(content.volunteers_needed)
    .bind(Json(&content.extra))
    .execute(conn)
    .await
    .map_err(|e| DomainError::database("Failed to insert post", e))?;

    Ok(result.rows_affected() == 1)
}

/// Locks the row for `id`, merges `patch` and writes it back if it changed.
///
/// Returns `None` when no row matches.
async fn patch_locked_row(
    conn: &mut PgConnection,
    id: &PostId,
    patch: &PostPatch,
) -> Result<Option<UpdateResult>, DomainError> {
    let row: Option<PostRow> = sqlx::query_as(
        r#"
        SELECT id, post_title, description, organizer_email, deadline, volunteers_needed, extra
        FROM posts
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(id.as_uuid())
    .fetch_optional(&mut *conn)
    .await
    .map_err(|e| DomainError::database("Failed to load post for update", e))?;

    let Some(row) = row else {
        return Ok(None);
    };

    let mut post = Post::from(row);
    if !patch.apply_to(&mut post.content) {
        return Ok(Some(UpdateResult::matched(false)));
    }

    let content = &post.content;
    sqlx::query(
        r#"
        UPDATE posts SET
            post_title = $2,
            description = $3,
            organizer_email = $4,
            deadline = $5,
            volunteers_needed = $6,
            extra = $7
        WHERE id = $1
        "#,
    )
    .bind(id.as_uuid())
    .bind(&content.title)
    .bind(&content.description)
    .bind(&content.organizer_email)
    .bind(&content.deadline)
    .bind(content.volunteers_needed)
    .bind(Json(&content.extra))
    .execute(&mut *conn)
    .await
    .map_err(|e| DomainError::database("Failed to update post", e))?;

    Ok(Some(UpdateResult::matched(true)))
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, content: &PostContent) -> Result<InsertOneResult, DomainError> {
        let id = PostId::new();
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| DomainError::database("Failed to acquire connection", e))?;

        insert_row(&mut conn, &id, content).await?;
        Ok(InsertOneResult::new(*id.as_uuid()))
    }

    async fn find(&self, query: &PostQuery) -> Result<Vec<Post>, DomainError> {
        let sql = format!("{} {}", SELECT_POSTS, order_clause(query.order));

        let rows: Vec<PostRow> = sqlx::query_as(&sql)
            .bind(&query.title_contains)
            .bind(&query.organizer_email)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list posts", e))?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError> {
        let row: Option<PostRow> = sqlx::query_as(
            r#"
            SELECT id, post_title, description, organizer_email, deadline, volunteers_needed, extra
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find post", e))?;

        Ok(row.map(Post::from))
    }

    async fn update(
        &self,
        id: &PostId,
        patch: &PostPatch,
        upsert: bool,
    ) -> Result<UpdateResult, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let result = match patch_locked_row(&mut tx, id, patch).await? {
            Some(result) => result,
            None if !upsert => UpdateResult::unmatched(),
            None => {
                let content = patch.clone().into_content()?;
                if insert_row(&mut tx, id, &content).await? {
                    UpdateResult::upserted(*id.as_uuid())
                } else {
                    // Lost the race to a concurrent upsert of the same id.
                    patch_locked_row(&mut tx, id, patch)
                        .await?
                        .unwrap_or_else(UpdateResult::unmatched)
                }
            }
        };

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(result)
    }

    async fn delete(&self, id: &PostId) -> Result<DeleteResult, DomainError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete post", e))?;

        Ok(DeleteResult::new(result.rows_affected()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_converts_to_post_with_extra_fields() {
        let id = Uuid::new_v4();
        let mut extra = Map::new();
        extra.insert("location".to_string(), json!("Dhaka"));

        let post = Post::from(PostRow {
            id,
            post_title: "Cleanup".to_string(),
            description: None,
            organizer_email: "o@x.com".to_string(),
            deadline: Some("2024-06-01".to_string()),
            volunteers_needed: 4,
            extra: Json(extra),
        });

        assert_eq!(post.id, PostId::from_uuid(id));
        assert_eq!(post.content.volunteers_needed, 4);
        assert_eq!(post.content.extra.get("location"), Some(&json!("Dhaka")));
    }

    #[test]
    fn deadline_order_puts_missing_deadlines_first() {
        assert!(order_clause(PostOrder::DeadlineAscending).contains("NULLS FIRST"));
    }

    #[test]
    fn deadline_order_ignores_database_collation() {
        assert!(order_clause(PostOrder::DeadlineAscending).contains(r#"deadline COLLATE "C" ASC"#));
        assert_eq!(order_clause(PostOrder::Insertion), "ORDER BY seq");
    }

    #[test]
    fn search_filter_is_case_insensitive_substring() {
        assert!(SELECT_POSTS.contains("strpos(lower(post_title), lower($1))"));
    }
}
