use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::OptionalExtension;
use shared_types::{CreateEquipmentRequest, Equipment, EquipmentStatus, UpdateEquipmentRequest};

fn map_equipment(row: &rusqlite::Row<'_>) -> rusqlite::Result<Equipment> {
    let status: String = row.get(4)?;

    Ok(Equipment {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        serial_number: row.get(3)?,
        status: EquipmentStatus::from_str_or_default(&status),
        assigned_to: row.get(5)?,
        notes: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

const EQUIPMENT_COLUMNS: &str =
    "id, user_id, name, serial_number, status, assigned_to, notes, created_at, updated_at";

pub async fn insert_equipment(
    conn: AsyncDbConnection,
    user_id: i64,
    request: &CreateEquipmentRequest,
) -> Result<Equipment> {
    let conn = conn.lock().await;
    let now = chrono::Utc::now().timestamp();
    let status = request.status.unwrap_or(EquipmentStatus::Available);

    let id: i64 = conn.query_row(
        "INSERT INTO equipment
         (user_id, name, serial_number, status, assigned_to, notes, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING id",
        rusqlite::params![
            user_id,
            &request.name,
            request.serial_number.as_ref(),
            status.as_str(),
            request.assigned_to,
            request.notes.as_ref(),
            now,
            now
        ],
        |row| row.get(0),
    )?;

    Ok(Equipment {
        id,
        user_id,
        name: request.name.clone(),
        serial_number: request.serial_number.clone(),
        status,
        assigned_to: request.assigned_to,
        notes: request.notes.clone(),
        created_at: now,
        updated_at: now,
    })
}

pub async fn get_equipment(
    conn: AsyncDbConnection,
    id: i64,
    user_id: i64,
) -> Result<Option<Equipment>> {
    let conn = conn.lock().await;

    let equipment = conn
        .query_row(
            &format!("SELECT {EQUIPMENT_COLUMNS} FROM equipment WHERE id = ? AND user_id = ?"),
            [id, user_id],
            map_equipment,
        )
        .optional()?;

    Ok(equipment)
}

pub async fn list_equipment(conn: AsyncDbConnection, user_id: i64) -> Result<Vec<Equipment>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(&format!(
        "SELECT {EQUIPMENT_COLUMNS} FROM equipment WHERE user_id = ? ORDER BY created_at DESC"
    ))?;

    let equipment = stmt
        .query_map([user_id], map_equipment)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(equipment)
}

pub async fn update_equipment(
    conn: AsyncDbConnection,
    id: i64,
    user_id: i64,
    request: &UpdateEquipmentRequest,
) -> Result<Option<Equipment>> {
    {
        let conn = conn.lock().await;
        let now = chrono::Utc::now().timestamp();

        let mut updates = vec!["updated_at = ?".to_string()];
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(now)];

        if let Some(name) = &request.name {
            updates.push("name = ?".to_string());
            params.push(Box::new(name.clone()));
        }
        if let Some(serial_number) = &request.serial_number {
            updates.push("serial_number = ?".to_string());
            params.push(Box::new(serial_number.clone()));
        }
        if let Some(status) = request.status {
            updates.push("status = ?".to_string());
            params.push(Box::new(status.as_str()));
        }
        if let Some(assigned_to) = request.assigned_to {
            updates.push("assigned_to = ?".to_string());
            params.push(Box::new(assigned_to));
        }
        if let Some(notes) = &request.notes {
            updates.push("notes = ?".to_string());
            params.push(Box::new(notes.clone()));
        }

        params.push(Box::new(id));
        params.push(Box::new(user_id));

        let query = format!(
            "UPDATE equipment SET {} WHERE id = ? AND user_id = ?",
            updates.join(", ")
        );
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        conn.execute(&query, params_refs.as_slice())?;
    }

    get_equipment(conn, id, user_id).await
}

pub async fn delete_equipment(conn: AsyncDbConnection, id: i64, user_id: i64) -> Result<()> {
    let conn = conn.lock().await;

    conn.execute(
        "DELETE FROM equipment WHERE id = ? AND user_id = ?",
        [id, user_id],
    )?;

    Ok(())
}
