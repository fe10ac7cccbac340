use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::OptionalExtension;
use shared_types::{CreateTaskRequest, Priority, Task, TaskStatus, UpdateTaskRequest};

fn map_task(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
    let status: String = row.get(5)?;
    let priority: String = row.get(6)?;

    Ok(Task {
        id: row.get(0)?,
        user_id: row.get(1)?,
        project_id: row.get(2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        status: TaskStatus::from_str_or_default(&status),
        priority: Priority::from_str_or_default(&priority),
        estimated_hours: row.get(7)?,
        due_date: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

const TASK_COLUMNS: &str = "id, user_id, project_id, title, description, status, priority, \
     estimated_hours, due_date, created_at, updated_at";

pub async fn insert_task(
    conn: AsyncDbConnection,
    user_id: i64,
    request: &CreateTaskRequest,
) -> Result<Task> {
    let conn = conn.lock().await;
    let now = chrono::Utc::now().timestamp();

    let status = request.status.unwrap_or(TaskStatus::Todo);
    let priority = request.priority.unwrap_or(Priority::Medium);

    let id: i64 = conn.query_row(
        "INSERT INTO tasks
         (user_id, project_id, title, description, status, priority, estimated_hours, due_date,
          created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING id",
        rusqlite::params![
            user_id,
            request.project_id,
            &request.title,
            request.description.as_ref(),
            status.as_str(),
            priority.as_str(),
            request.estimated_hours,
            request.due_date.as_ref(),
            now,
            now
        ],
        |row| row.get(0),
    )?;

    Ok(Task {
        id,
        user_id,
        project_id: request.project_id,
        title: request.title.clone(),
        description: request.description.clone(),
        status,
        priority,
        estimated_hours: request.estimated_hours,
        due_date: request.due_date.clone(),
        created_at: now,
        updated_at: now,
    })
}

pub async fn get_task(conn: AsyncDbConnection, id: i64, user_id: i64) -> Result<Option<Task>> {
    let conn = conn.lock().await;

    let task = conn
        .query_row(
            &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ? AND user_id = ?"),
            [id, user_id],
            map_task,
        )
        .optional()?;

    Ok(task)
}

pub async fn list_tasks(conn: AsyncDbConnection, user_id: i64) -> Result<Vec<Task>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(&format!(
        "SELECT {TASK_COLUMNS} FROM tasks WHERE user_id = ? ORDER BY created_at DESC"
    ))?;

    let tasks = stmt
        .query_map([user_id], map_task)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(tasks)
}

pub async fn list_project_tasks(
    conn: AsyncDbConnection,
    project_id: i64,
    user_id: i64,
) -> Result<Vec<Task>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(&format!(
        "SELECT {TASK_COLUMNS} FROM tasks
         WHERE project_id = ? AND user_id = ?
         ORDER BY created_at DESC"
    ))?;

    let tasks = stmt
        .query_map([project_id, user_id], map_task)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(tasks)
}

pub async fn update_task(
    conn: AsyncDbConnection,
    id: i64,
    user_id: i64,
    request: &UpdateTaskRequest,
) -> Result<Option<Task>> {
    {
        let conn = conn.lock().await;
        let now = chrono::Utc::now().timestamp();

        let mut updates = vec!["updated_at = ?".to_string()];
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(now)];

        if let Some(project_id) = request.project_id {
            updates.push("project_id = ?".to_string());
            params.push(Box::new(project_id));
        }
        if let Some(title) = &request.title {
            updates.push("title = ?".to_string());
            params.push(Box::new(title.clone()));
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
        if let Some(estimated_hours) = request.estimated_hours {
            updates.push("estimated_hours = ?".to_string());
            params.push(Box::new(estimated_hours));
        }
        if let Some(due_date) = &request.due_date {
            updates.push("due_date = ?".to_string());
            params.push(Box::new(due_date.clone()));
        }

        params.push(Box::new(id));
        params.push(Box::new(user_id));

        let query = format!(
            "UPDATE tasks SET {} WHERE id = ? AND user_id = ?",
            updates.join(", ")
        );
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        conn.execute(&query, params_refs.as_slice())?;
    }

    get_task(conn, id, user_id).await
}

pub async fn delete_task(conn: AsyncDbConnection, id: i64, user_id: i64) -> Result<()> {
    let conn = conn.lock().await;

    conn.execute(
        "DELETE FROM tasks WHERE id = ? AND user_id = ?",
        [id, user_id],
    )?;

    Ok(())
}
