//! PostgreSQL Repository Implementations

use auth::UserId;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::task::Task;
use crate::domain::repository::TaskRepository;
use crate::domain::sort::SortPolicy;
use crate::domain::value_object::task_id::TaskId;
use crate::error::TaskResult;

const TASK_COLUMNS: &str = r#"
    task_id,
    owner_id,
    title,
    description,
    due_date,
    fixed_due_date,
    priority,
    created_at,
    updated_at
"#;

/// PostgreSQL-backed task repository
#[derive(Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Task Repository Implementation
// ============================================================================

impl TaskRepository for PgTaskRepository {
    async fn insert(&self, task: &Task) -> TaskResult<()> {
        sqlx::query(
            r#"
            INSERT INTO tasks (
                task_id,
                owner_id,
                title,
                description,
                due_date,
                fixed_due_date,
                priority,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(task.task_id.as_uuid())
        .bind(task.owner_id.as_uuid())
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.due_date)
        .bind(&task.fixed_due_date)
        .bind(&task.priority)
        .bind(task.created_at)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_owner_and_id(
        &self,
        owner_id: &UserId,
        task_id: &TaskId,
    ) -> TaskResult<Option<Task>> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE task_id = $1 AND owner_id = $2");
        let row = sqlx::query_as::<_, TaskRow>(&sql)
            .bind(task_id.as_uuid())
            .bind(owner_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(TaskRow::into_task))
    }

    async fn list_by_owner(&self, owner_id: &UserId, sort: SortPolicy) -> TaskResult<Vec<Task>> {
        // The ORDER BY clause is one of a fixed set of literals.
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE owner_id = $1 ORDER BY {}",
            sort.sql_order_by()
        );
        let rows = sqlx::query_as::<_, TaskRow>(&sql)
            .bind(owner_id.as_uuid())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(TaskRow::into_task).collect())
    }

    async fn update(&self, task: &Task) -> TaskResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE tasks SET
                title = $3,
                description = $4,
                due_date = $5,
                fixed_due_date = $6,
                priority = $7,
                updated_at = $8
            WHERE task_id = $1 AND owner_id = $2
            "#,
        )
        .bind(task.task_id.as_uuid())
        .bind(task.owner_id.as_uuid())
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.due_date)
        .bind(&task.fixed_due_date)
        .bind(&task.priority)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn delete(&self, owner_id: &UserId, task_id: &TaskId) -> TaskResult<bool> {
        let deleted = sqlx::query("DELETE FROM tasks WHERE task_id = $1 AND owner_id = $2")
            .bind(task_id.as_uuid())
            .bind(owner_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct TaskRow {
    task_id: Uuid,
    owner_id: Uuid,
    title: String,
    description: String,
    due_date: String,
    fixed_due_date: Option<String>,
    priority: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TaskRow {
    fn into_task(self) -> Task {
        Task {
            task_id: TaskId::from_uuid(self.task_id),
            owner_id: UserId::from_uuid(self.owner_id),
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            fixed_due_date: self.fixed_due_date,
            priority: self.priority,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
