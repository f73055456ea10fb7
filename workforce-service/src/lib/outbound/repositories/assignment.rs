use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::assignment::errors::AssignmentError;
use crate::domain::assignment::models::Assignment;
use crate::domain::assignment::models::AssignmentId;
use crate::domain::assignment::ports::AssignmentRepository;
use crate::domain::identity::models::IdentityId;

pub struct PostgresAssignmentRepository {
    pool: PgPool,
}

impl PostgresAssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AssignmentRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl From<AssignmentRow> for Assignment {
    fn from(row: AssignmentRow) -> Self {
        Self {
            id: AssignmentId(row.id),
            user_id: IdentityId(row.user_id),
            title: row.title,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl AssignmentRepository for PostgresAssignmentRepository {
    async fn create(&self, assignment: Assignment) -> Result<Assignment, AssignmentError> {
        sqlx::query(
            r#"
            INSERT INTO assignments (id, user_id, title, description, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(assignment.id.0)
        .bind(assignment.user_id.0)
        .bind(&assignment.title)
        .bind(&assignment.description)
        .bind(assignment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AssignmentError::DatabaseError(e.to_string()))?;

        Ok(assignment)
    }

    async fn list_all(&self) -> Result<Vec<Assignment>, AssignmentError> {
        let rows: Vec<AssignmentRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, title, description, created_at
            FROM assignments
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AssignmentError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Assignment::from).collect())
    }

    async fn find_by_user(
        &self,
        user_id: &IdentityId,
    ) -> Result<Vec<Assignment>, AssignmentError> {
        let rows: Vec<AssignmentRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, title, description, created_at
            FROM assignments
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AssignmentError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Assignment::from).collect())
    }
}
