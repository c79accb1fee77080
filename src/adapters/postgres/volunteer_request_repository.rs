//! PostgreSQL implementation of VolunteerRequestRepository.
//!
//! `apply` runs the request insert and the post counter decrement in one
//! transaction. Duplicate detection relies on the
//! `requests_volunteer_post_key` unique constraint, so two concurrent
//! identical applications serialize on the index and only one inserts.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, PostId, VolunteerRequestId};
use crate::domain::volunteer_request::{NewVolunteerRequest, VolunteerRequest};
use crate::ports::{ApplyOutcome, DeleteResult, InsertOneResult, VolunteerRequestRepository};

/// PostgreSQL implementation of the VolunteerRequestRepository port.
pub struct PostgresVolunteerRequestRepository {
    pool: PgPool,
}

impl PostgresVolunteerRequestRepository {
    /// Creates a new repository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a request.
#[derive(Debug, sqlx::FromRow)]
struct RequestRow {
    id: Uuid,
    volunteer_email: String,
    post_id: Uuid,
    extra: Json<Map<String, Value>>,
}

impl From<RequestRow> for VolunteerRequest {
    fn from(row: RequestRow) -> Self {
        let application =
            NewVolunteerRequest::new(row.volunteer_email, PostId::from_uuid(row.post_id))
                .with_extra(row.extra.0);
        VolunteerRequest::new(VolunteerRequestId::from_uuid(row.id), application)
    }
}

#[async_trait]
impl VolunteerRequestRepository for PostgresVolunteerRequestRepository {
    async fn apply(&self, request: &NewVolunteerRequest) -> Result<ApplyOutcome, DomainError> {
        let id = VolunteerRequestId::new();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO requests (id, volunteer_email, post_id, extra)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (volunteer_email, post_id) DO NOTHING
            "#,
        )
        .bind(id.as_uuid())
        .bind(&request.volunteer_email)
        .bind(request.post_id.as_uuid())
        .bind(Json(&request.extra))
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert request", e))?;

        if inserted.rows_affected() == 0 {
            // Dropping the transaction rolls it back.
            return Err(DomainError::duplicate_request());
        }

        let decremented = sqlx::query(
            "UPDATE posts SET volunteers_needed = volunteers_needed - 1 WHERE id = $1",
        )
        .bind(request.post_id.as_uuid())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to decrement volunteers_needed", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(ApplyOutcome {
            insert: InsertOneResult::new(*id.as_uuid()),
            slot_claimed: decremented.rows_affected() == 1,
        })
    }

    async fn find(
        &self,
        volunteer_email: Option<&str>,
    ) -> Result<Vec<VolunteerRequest>, DomainError> {
        let rows: Vec<RequestRow> = sqlx::query_as(
            r#"
            SELECT id, volunteer_email, post_id, extra
            FROM requests
            WHERE ($1::text IS NULL OR volunteer_email = $1)
            ORDER BY seq
            "#,
        )
        .bind(volunteer_email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list requests", e))?;

        Ok(rows.into_iter().map(VolunteerRequest::from).collect())
    }

    async fn delete(&self, id: &VolunteerRequestId) -> Result<DeleteResult, DomainError> {
        let result = sqlx::query("DELETE FROM requests WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete request", e))?;

        Ok(DeleteResult::new(result.rows_affected()))
    }
}
