use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::OptionalExtension;
use shared_types::{CreateProjectPartRequest, ProjectPart, UpdateProjectPartRequest};

fn map_part(row: &rusqlite::Row<'_>) -> rusqlite::Result<ProjectPart> {
    Ok(ProjectPart {
        id: row.get(0)?,
        project_id: row.get(1)?,
        name: row.get(2)?,
        quantity: row.get(3)?,
        unit_cost: row.get(4)?,
        supplier: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

const PART_COLUMNS: &str =
    "id, project_id, name, quantity, unit_cost, supplier, created_at, updated_at";

pub async fn insert_part(
    conn: AsyncDbConnection,
    project_id: i64,
    request: &CreateProjectPartRequest,
) -> Result<ProjectPart> {
    let conn = conn.lock().await;
    let now = chrono::Utc::now().timestamp();

    let id: i64 = conn.query_row(
        "INSERT INTO project_parts
         (project_id, name, quantity, unit_cost, supplier, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         RETURNING id",
        rusqlite::params![
            project_id,
            &request.name,
            request.quantity,
            request.unit_cost,
            request.supplier.as_ref(),
            now,
            now
        ],
        |row| row.get(0),
    )?;

    Ok(ProjectPart {
        id,
        project_id,
        name: request.name.clone(),
        quantity: request.quantity,
        unit_cost: request.unit_cost,
        supplier: request.supplier.clone(),
        created_at: now,
        updated_at: now,
    })
}

pub async fn get_part(
    conn: AsyncDbConnection,
    id: i64,
    project_id: i64,
) -> Result<Option<ProjectPart>> {
    let conn = conn.lock().await;

    let part = conn
        .query_row(
            &format!("SELECT {PART_COLUMNS} FROM project_parts WHERE id = ? AND project_id = ?"),
            [id, project_id],
            map_part,
        )
        .optional()?;

    Ok(part)
}

pub async fn list_parts(conn: AsyncDbConnection, project_id: i64) -> Result<Vec<ProjectPart>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(&format!(
        "SELECT {PART_COLUMNS} FROM project_parts WHERE project_id = ? ORDER BY name"
    ))?;

    let parts = stmt
        .query_map([project_id], map_part)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(parts)
}

pub async fn update_part(
    conn: AsyncDbConnection,
    id: i64,
    project_id: i64,
    request: &UpdateProjectPartRequest,
) -> Result<Option<ProjectPart>> {
    {
        let conn = conn.lock().await;
        let now = chrono::Utc::now().timestamp();

        let mut updates = vec!["updated_at = ?".to_string()];
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(now)];

        if let Some(name) = &request.name {
            updates.push("name = ?".to_string());
            params.push(Box::new(name.clone()));
        }
        if let Some(quantity) = request.quantity {
            updates.push("quantity = ?".to_string());
            params.push(Box::new(quantity));
        }
        if let Some(unit_cost) = request.unit_cost {
            updates.push("unit_cost = ?".to_string());
            params.push(Box::new(unit_cost));
        }
        if let Some(supplier) = &request.supplier {
            updates.push("supplier = ?".to_string());
            params.push(Box::new(supplier.clone()));
        }

        params.push(Box::new(id));
        params.push(Box::new(project_id));

        let query = format!(
            "UPDATE project_parts SET {} WHERE id = ? AND project_id = ?",
            updates.join(", ")
        );
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        conn.execute(&query, params_refs.as_slice())?;
    }

    get_part(conn, id, project_id).await
}

pub async fn delete_part(conn: AsyncDbConnection, id: i64, project_id: i64) -> Result<()> {
    let conn = conn.lock().await;

    conn.execute(
        "DELETE FROM project_parts WHERE id = ? AND project_id = ?",
        [id, project_id],
    )?;

    Ok(())
}
