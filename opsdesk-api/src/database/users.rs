use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::OptionalExtension;
use shared_types::{CreateUserRequest, UpdateUserRequest, User};

pub async fn insert_user(conn: AsyncDbConnection, request: &CreateUserRequest) -> Result<User> {
    let conn = conn.lock().await;
    let now = chrono::Utc::now().timestamp();

    let id: i64 = conn.query_row(
        "INSERT INTO users (email, display_name, created_at, updated_at)
         VALUES (?, ?, ?, ?)
         RETURNING id",
        rusqlite::params![&request.email, &request.display_name, now, now],
        |row| row.get(0),
    )?;

    Ok(User {
        id,
        email: request.email.clone(),
        display_name: request.display_name.clone(),
        created_at: now,
        updated_at: now,
    })
}

pub async fn get_user(conn: AsyncDbConnection, id: i64) -> Result<Option<User>> {
    let conn = conn.lock().await;

    let user = conn
        .query_row(
            "SELECT id, email, display_name, created_at, updated_at
             FROM users
             WHERE id = ?",
            [id],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    email: row.get(1)?,
                    display_name: row.get(2)?,
                    created_at: row.get(3)?,
                    updated_at: row.get(4)?,
                })
            },
        )
        .optional()?;

    Ok(user)
}

pub async fn list_users(conn: AsyncDbConnection) -> Result<Vec<User>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(
        "SELECT id, email, display_name, created_at, updated_at
         FROM users
         ORDER BY created_at DESC",
    )?;

    let users = stmt
        .query_map([], |row| {
            Ok(User {
                id: row.get(0)?,
                email: row.get(1)?,
                display_name: row.get(2)?,
                created_at: row.get(3)?,
                updated_at: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(users)
}

pub async fn update_user(
    conn: AsyncDbConnection,
    id: i64,
    request: &UpdateUserRequest,
) -> Result<Option<User>> {
    {
        let conn = conn.lock().await;
        let now = chrono::Utc::now().timestamp();

        let mut updates = vec!["updated_at = ?".to_string()];
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(now)];

        if let Some(email) = &request.email {
            updates.push("email = ?".to_string());
            params.push(Box::new(email.clone()));
        }
        if let Some(display_name) = &request.display_name {
            updates.push("display_name = ?".to_string());
            params.push(Box::new(display_name.clone()));
        }

        params.push(Box::new(id));

        let query = format!("UPDATE users SET {} WHERE id = ?", updates.join(", "));
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        conn.execute(&query, params_refs.as_slice())?;
    }

    get_user(conn, id).await
}

pub async fn delete_user(conn: AsyncDbConnection, id: i64) -> Result<()> {
    let conn = conn.lock().await;

    conn.execute("DELETE FROM users WHERE id = ?", [id])?;

    Ok(())
}
