use crate::Result as DbErrorResult;
use crate::repositories::timestamp;

use pa_core::{Action, ActionFields};

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub(crate) const ACTION_COLUMNS: &str =
    "id, project_id, description, notes, completed, created_at, updated_at";

pub struct ActionRepository {
    pool: SqlitePool,
}

impl ActionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Action>> {
        let rows = sqlx::query(&format!("SELECT {ACTION_COLUMNS} FROM actions ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(action_from_row).collect()
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Action>> {
        let row = sqlx::query(&format!("SELECT {ACTION_COLUMNS} FROM actions WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(action_from_row).transpose()
    }

    /// Insert an action. Fails with `DbError::Constraint` when `project_id`
    /// does not reference an existing project.
    pub async fn create(&self, fields: &ActionFields) -> DbErrorResult<Action> {
        let now = Utc::now().timestamp();

        let row = sqlx::query(&format!(
            r#"
                INSERT INTO actions (project_id, description, notes, completed, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
                RETURNING {ACTION_COLUMNS}
            "#
        ))
        .bind(fields.project_id)
        .bind(&fields.description)
        .bind(&fields.notes)
        .bind(fields.completed)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        action_from_row(&row)
    }

    /// Replace every mutable column. Returns `None` if no action has this id.
    pub async fn update(&self, id: i64, fields: &ActionFields) -> DbErrorResult<Option<Action>> {
        let now = Utc::now().timestamp();

        let row = sqlx::query(&format!(
            r#"
                UPDATE actions
                SET project_id = ?, description = ?, notes = ?, completed = ?, updated_at = ?
                WHERE id = ?
                RETURNING {ACTION_COLUMNS}
            "#
        ))
        .bind(fields.project_id)
        .bind(&fields.description)
        .bind(&fields.notes)
        .bind(fields.completed)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(action_from_row).transpose()
    }

    pub async fn delete(&self, id: i64) -> DbErrorResult<Option<Action>> {
        let row = sqlx::query(&format!(
            "DELETE FROM actions WHERE id = ? RETURNING {ACTION_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(action_from_row).transpose()
    }
}

pub(crate) fn action_from_row(row: &SqliteRow) -> DbErrorResult<Action> {
    Ok(Action {
        id: row.try_get("id")?,
        project_id: row.try_get("project_id")?,
        description: row.try_get("description")?,
        notes: row.try_get("notes")?,
        completed: row.try_get("completed")?,
        created_at: timestamp(row.try_get("created_at")?, "actions.created_at")?,
        updated_at: timestamp(row.try_get("updated_at")?, "actions.updated_at")?,
    })
}
