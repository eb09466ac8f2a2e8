//! Project repository for CRUD operations on projects.
//!
//! Projects are hard-deleted. The `actions.project_id` foreign key cascades,
//! so deleting a project also deletes its actions.

use crate::Result as DbErrorResult;
use crate::repositories::action_repository::{ACTION_COLUMNS, action_from_row};
use crate::repositories::timestamp;

use pa_core::{Action, Project, ProjectFields};

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const PROJECT_COLUMNS: &str = "id, name, description, completed, created_at, updated_at";

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(project_from_row).collect()
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(project_from_row).transpose()
    }

    /// Insert a project and return it with its assigned id
    pub async fn create(&self, fields: &ProjectFields) -> DbErrorResult<Project> {
        let now = Utc::now().timestamp();

        let row = sqlx::query(&format!(
            r#"
                INSERT INTO projects (name, description, completed, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
                RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.completed)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        project_from_row(&row)
    }

    /// Replace every mutable column. Returns `None` if no project has this id.
    pub async fn update(&self, id: i64, fields: &ProjectFields) -> DbErrorResult<Option<Project>> {
        let now = Utc::now().timestamp();

        let row = sqlx::query(&format!(
            r#"
                UPDATE projects
                SET name = ?, description = ?, completed = ?, updated_at = ?
                WHERE id = ?
                RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.completed)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(project_from_row).transpose()
    }

    /// Delete a project, returning the removed row if it existed
    pub async fn delete(&self, id: i64) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(&format!(
            "DELETE FROM projects WHERE id = ? RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(project_from_row).transpose()
    }

    /// Actions owned by a project, oldest first. Does not check that the
    /// project exists.
    pub async fn find_actions(&self, project_id: i64) -> DbErrorResult<Vec<Action>> {
        let rows = sqlx::query(&format!(
            "SELECT {ACTION_COLUMNS} FROM actions WHERE project_id = ? ORDER BY id"
        ))
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(action_from_row).collect()
    }
}

fn project_from_row(row: &SqliteRow) -> DbErrorResult<Project> {
    Ok(Project {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        completed: row.try_get("completed")?,
        created_at: timestamp(row.try_get("created_at")?, "projects.created_at")?,
        updated_at: timestamp(row.try_get("updated_at")?, "projects.updated_at")?,
    })
}
