use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::OptionalExtension;
use shared_types::{
    CreateProjectRequest, Priority, Project, ProjectStatus, UpdateProjectRequest,
};

fn map_project(row: &rusqlite::Row<'_>) -> rusqlite::Result<Project> {
    let status: String = row.get(5)?;
    let priority: String = row.get(6)?;

    Ok(Project {
        id: row.get(0)?,
        user_id: row.get(1)?,
        client_id: row.get(2)?,
        name: row.get(3)?,
        description: row.get(4)?,
        status: ProjectStatus::from_str_or_default(&status),
        priority: Priority::from_str_or_default(&priority),
        budget: row.get(7)?,
        estimated_hours: row.get(8)?,
        start_date: row.get(9)?,
        end_date: row.get(10)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}

const PROJECT_COLUMNS: &str = "id, user_id, client_id, name, description, status, priority, \
     budget, estimated_hours, start_date, end_date, created_at, updated_at";

pub async fn insert_project(
    conn: AsyncDbConnection,
    user_id: i64,
    request: &CreateProjectRequest,
) -> Result<Project> {
    let conn = conn.lock().await;
    let now = chrono::Utc::now().timestamp();

    let status = request.status.unwrap_or(ProjectStatus::Planning);
    let priority = request.priority.unwrap_or(Priority::Medium);

    let id: i64 = conn.query_row(
        "INSERT INTO projects
         (user_id, client_id, name, description, status, priority, budget, estimated_hours,
          start_date, end_date, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING id",
        rusqlite::params![
            user_id,
            request.client_id,
            &request.name,
            request.description.as_ref(),
            status.as_str(),
            priority.as_str(),
            request.budget,
            request.estimated_hours,
            request.start_date.as_ref(),
            request.end_date.as_ref(),
            now,
            now
        ],
        |row| row.get(0),
    )?;

    Ok(Project {
        id,
        user_id,
        client_id: request.client_id,
        name: request.name.clone(),
        description: request.description.clone(),
        status,
        priority,
        budget: request.budget,
        estimated_hours: request.estimated_hours,
        start_date: request.start_date.clone(),
        end_date: request.end_date.clone(),
        created_at: now,
        updated_at: now,
    })
}

pub async fn get_project(
    conn: AsyncDbConnection,
    id: i64,
    user_id: i64,
) -> Result<Option<Project>> {
    let conn = conn.lock().await;

    let project = conn
        .query_row(
            &format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ? AND user_id = ?"),
            [id, user_id],
            map_project,
        )
        .optional()?;

    Ok(project)
}

pub async fn list_projects(conn: AsyncDbConnection, user_id: i64) -> Result<Vec<Project>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(&format!(
        "SELECT {PROJECT_COLUMNS} FROM projects WHERE user_id = ? ORDER BY created_at DESC"
    ))?;

    let projects = stmt
        .query_map([user_id], map_project)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(projects)
}

pub async fn update_project(
    conn: AsyncDbConnection,
    id: i64,
    user_id: i64,
    request: &UpdateProjectRequest,
) -> Result<Option<Project>> {
    {
        let conn = conn.lock().await;
        let now = chrono::Utc::now().timestamp();

        let mut updates = vec!["updated_at = ?".to_string()];
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(now)];

        if let Some(client_id) = request.client_id {
            updates.push("client_id = ?".to_string());
            params.push(Box::new(client_id));
        }
        if let Some(name) = &request.name {
            updates.push("name = ?".to_string());
            params.push(Box::new(name.clone()));
        }
        if let Some(description) = &request.description {
            updates.push("description = ?".to_string());
            params.push(Box::new(description.clone()));
        }
        if let Some(status) = request.status {
            updates.push("status = ?".to_string());
            params.push(Box::new(status.as_str()));
        }
        if let Some(priority) = request.priority {
            updates.push("priority = ?".to_string());
            params.push(Box::new(priority.as_str()));
        }
        if let Some(budget) = request.budget {
            updates.push("budget = ?".to_string());
            params.push(Box::new(budget));
        }
        if let Some(estimated_hours) = request.estimated_hours {
            updates.push("estimated_hours = ?".to_string());
            params.push(Box::new(estimated_hours));
        }
        if let Some(start_date) = &request.start_date {
            updates.push("start_date = ?".to_string());
            params.push(Box::new(start_date.clone()));
        }
        if let Some(end_date) = &request.end_date {
            updates.push("end_date = ?".to_string());
            params.push(Box::new(end_date.clone()));
        }

        params.push(Box::new(id));
        params.push(Box::new(user_id));

        let query = format!(
            "UPDATE projects SET {} WHERE id = ? AND user_id = ?",
            updates.join(", ")
        );
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        conn.execute(&query, params_refs.as_slice())?;
    }

    get_project(conn, id, user_id).await
}

/// Owner-scoped; a mismatched user_id affects zero rows and is not an error
pub async fn delete_project(conn: AsyncDbConnection, id: i64, user_id: i64) -> Result<()> {
    let conn = conn.lock().await;

    conn.execute(
        "DELETE FROM projects WHERE id = ? AND user_id = ?",
        [id, user_id],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scratch_database;

    #[tokio::test]
    async fn test_status_and_priority_survive_storage() {
        let (db, _dir) = scratch_database();
        let conn = db.async_connection.clone();

        let created = insert_project(
            conn.clone(),
            1,
            &CreateProjectRequest {
                client_id: None,
                name: "Warehouse retrofit".to_string(),
                description: None,
                status: Some(ProjectStatus::OnHold),
                priority: Some(Priority::Urgent),
                budget: Some(12_000.0),
                estimated_hours: None,
                start_date: None,
                end_date: None,
            },
        )
        .await
        .unwrap();

        let fetched = get_project(conn, created.id, 1).await.unwrap().unwrap();
        assert_eq!(fetched.status, ProjectStatus::OnHold);
        assert_eq!(fetched.priority, Priority::Urgent);
        assert_eq!(fetched.budget, Some(12_000.0));
    }

    #[tokio::test]
    async fn test_delete_scoped_by_owner_is_noop_for_stranger() {
        let (db, _dir) = scratch_database();
        let conn = db.async_connection.clone();

        let created = insert_project(
            conn.clone(),
            42,
            &CreateProjectRequest {
                client_id: None,
                name: "Quiet project".to_string(),
                description: None,
                status: None,
                priority: None,
                budget: None,
                estimated_hours: None,
                start_date: None,
                end_date: None,
            },
        )
        .await
        .unwrap();

        delete_project(conn.clone(), created.id, 99).await.unwrap();

        let still_there = get_project(conn, created.id, 42).await.unwrap();
        assert!(still_there.is_some());
    }
}
