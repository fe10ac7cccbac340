use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::OptionalExtension;
use shared_types::{CreateTimeEntryRequest, TimeEntry, UpdateTimeEntryRequest};

fn map_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<TimeEntry> {
    Ok(TimeEntry {
        id: row.get(0)?,
        user_id: row.get(1)?,
        project_id: row.get(2)?,
        task_id: row.get(3)?,
        description: row.get(4)?,
        hours: row.get(5)?,
        entry_date: row.get(6)?,
        billable: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

const ENTRY_COLUMNS: &str = "id, user_id, project_id, task_id, description, hours, entry_date, \
     billable, created_at, updated_at";

pub async fn insert_time_entry(
    conn: AsyncDbConnection,
    user_id: i64,
    request: &CreateTimeEntryRequest,
) -> Result<TimeEntry> {
    let conn = conn.lock().await;
    let now = chrono::Utc::now().timestamp();
    let billable = request.billable.unwrap_or(true);

    let id: i64 = conn.query_row(
        "INSERT INTO time_entries
         (user_id, project_id, task_id, description, hours, entry_date, billable,
          created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING id",
        rusqlite::params![
            user_id,
            request.project_id,
            request.task_id,
            request.description.as_ref(),
            request.hours,
            &request.entry_date,
            billable,
            now,
            now
        ],
        |row| row.get(0),
    )?;

    Ok(TimeEntry {
        id,
        user_id,
        project_id: request.project_id,
        task_id: request.task_id,
        description: request.description.clone(),
        hours: request.hours,
        entry_date: request.entry_date.clone(),
        billable,
        created_at: now,
        updated_at: now,
    })
}

pub async fn get_time_entry(
    conn: AsyncDbConnection,
    id: i64,
    user_id: i64,
) -> Result<Option<TimeEntry>> {
    let conn = conn.lock().await;

    let entry = conn
        .query_row(
            &format!("SELECT {ENTRY_COLUMNS} FROM time_entries WHERE id = ? AND user_id = ?"),
            [id, user_id],
            map_entry,
        )
        .optional()?;

    Ok(entry)
}

pub async fn list_time_entries(conn: AsyncDbConnection, user_id: i64) -> Result<Vec<TimeEntry>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(&format!(
        "SELECT {ENTRY_COLUMNS} FROM time_entries WHERE user_id = ? ORDER BY entry_date DESC"
    ))?;

    let entries = stmt
        .query_map([user_id], map_entry)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(entries)
}

pub async fn update_time_entry(
    conn: AsyncDbConnection,
    id: i64,
    user_id: i64,
    request: &UpdateTimeEntryRequest,
) -> Result<Option<TimeEntry>> {
    {
        let conn = conn.lock().await;
        let now = chrono::Utc::now().timestamp();

        let mut updates = vec!["updated_at = ?".to_string()];
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(now)];

        if let Some(project_id) = request.project_id {
            updates.push("project_id = ?".to_string());
            params.push(Box::new(project_id));
        }
        if let Some(task_id) = request.task_id {
            updates.push("task_id = ?".to_string());
            params.push(Box::new(task_id));
        }
        if let Some(description) = &request.description {
            updates.push("description = ?".to_string());
            params.push(Box::new(description.clone()));
        }
        if let Some(hours) = request.hours {
            updates.push("hours = ?".to_string());
            params.push(Box::new(hours));
        }
        if let Some(entry_date) = &request.entry_date {
            updates.push("entry_date = ?".to_string());
            params.push(Box::new(entry_date.clone()));
        }
        if let Some(billable) = request.billable {
            updates.push("billable = ?".to_string());
            params.push(Box::new(billable));
        }

        params.push(Box::new(id));
        params.push(Box::new(user_id));

        let query = format!(
            "UPDATE time_entries SET {} WHERE id = ? AND user_id = ?",
            updates.join(", ")
        );
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        conn.execute(&query, params_refs.as_slice())?;
    }

    get_time_entry(conn, id, user_id).await
}

pub async fn delete_time_entry(conn: AsyncDbConnection, id: i64, user_id: i64) -> Result<()> {
    let conn = conn.lock().await;

    conn.execute(
        "DELETE FROM time_entries WHERE id = ? AND user_id = ?",
        [id, user_id],
    )?;

    Ok(())
}
