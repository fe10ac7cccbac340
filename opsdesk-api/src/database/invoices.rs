use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::OptionalExtension;
use shared_types::{
    CreateInvoiceRequest, Invoice, InvoiceLineItem, InvoiceStatus, UpdateInvoiceRequest,
};

fn map_invoice(row: &rusqlite::Row<'_>) -> rusqlite::Result<Invoice> {
    let status: String = row.get(4)?;
    let line_items_json: String = row.get(7)?;
    // Tolerate a corrupt column rather than failing the row read
    let line_items: Vec<InvoiceLineItem> =
        serde_json::from_str(&line_items_json).unwrap_or_default();

    Ok(Invoice {
        id: row.get(0)?,
        user_id: row.get(1)?,
        client_id: row.get(2)?,
        invoice_number: row.get(3)?,
        status: InvoiceStatus::from_str_or_default(&status),
        issue_date: row.get(5)?,
        due_date: row.get(6)?,
        line_items,
        tax_rate: row.get(8)?,
        notes: row.get(9)?,
        quickbooks_id: row.get(10)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}

const INVOICE_COLUMNS: &str = "id, user_id, client_id, invoice_number, status, issue_date, \
     due_date, line_items, tax_rate, notes, quickbooks_id, created_at, updated_at";

pub async fn insert_invoice(
    conn: AsyncDbConnection,
    user_id: i64,
    request: &CreateInvoiceRequest,
) -> Result<Invoice> {
    let conn = conn.lock().await;
    let now = chrono::Utc::now().timestamp();
    let tax_rate = request.tax_rate.unwrap_or(0.0);
    let line_items_json = serde_json::to_string(&request.line_items)?;

    let id: i64 = conn.query_row(
        "INSERT INTO invoices
         (user_id, client_id, invoice_number, status, issue_date, due_date, line_items,
          tax_rate, notes, created_at, updated_at)
         VALUES (?, ?, ?, 'draft', ?, ?, ?, ?, ?, ?, ?)
         RETURNING id",
        rusqlite::params![
            user_id,
            request.client_id,
            &request.invoice_number,
            request.issue_date.as_ref(),
            request.due_date.as_ref(),
            &line_items_json,
            tax_rate,
            request.notes.as_ref(),
            now,
            now
        ],
        |row| row.get(0),
    )?;

    Ok(Invoice {
        id,
        user_id,
        client_id: request.client_id,
        invoice_number: request.invoice_number.clone(),
        status: InvoiceStatus::Draft,
        issue_date: request.issue_date.clone(),
        due_date: request.due_date.clone(),
        line_items: request.line_items.clone(),
        tax_rate,
        notes: request.notes.clone(),
        quickbooks_id: None,
        created_at: now,
        updated_at: now,
    })
}

pub async fn get_invoice(
    conn: AsyncDbConnection,
    id: i64,
    user_id: i64,
) -> Result<Option<Invoice>> {
    let conn = conn.lock().await;

    let invoice = conn
        .query_row(
            &format!("SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = ? AND user_id = ?"),
            [id, user_id],
            map_invoice,
        )
        .optional()?;

    Ok(invoice)
}

pub async fn list_invoices(conn: AsyncDbConnection, user_id: i64) -> Result<Vec<Invoice>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(&format!(
        "SELECT {INVOICE_COLUMNS} FROM invoices WHERE user_id = ? ORDER BY created_at DESC"
    ))?;

    let invoices = stmt
        .query_map([user_id], map_invoice)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(invoices)
}

pub async fn update_invoice(
    conn: AsyncDbConnection,
    id: i64,
    user_id: i64,
    request: &UpdateInvoiceRequest,
) -> Result<Option<Invoice>> {
    {
        let conn = conn.lock().await;
        let now = chrono::Utc::now().timestamp();

        let mut updates = vec!["updated_at = ?".to_string()];
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(now)];

        if let Some(client_id) = request.client_id {
            updates.push("client_id = ?".to_string());
            params.push(Box::new(client_id));
        }
        if let Some(invoice_number) = &request.invoice_number {
            updates.push("invoice_number = ?".to_string());
            params.push(Box::new(invoice_number.clone()));
        }
        if let Some(status) = request.status {
            updates.push("status = ?".to_string());
            params.push(Box::new(status.as_str()));
        }
        if let Some(issue_date) = &request.issue_date {
            updates.push("issue_date = ?".to_string());
            params.push(Box::new(issue_date.clone()));
        }
        if let Some(due_date) = &request.due_date {
            updates.push("due_date = ?".to_string());
            params.push(Box::new(due_date.clone()));
        }
        if let Some(line_items) = &request.line_items {
            updates.push("line_items = ?".to_string());
            params.push(Box::new(serde_json::to_string(line_items)?));
        }
        if let Some(tax_rate) = request.tax_rate {
            updates.push("tax_rate = ?".to_string());
            params.push(Box::new(tax_rate));
        }
        if let Some(notes) = &request.notes {
            updates.push("notes = ?".to_string());
            params.push(Box::new(notes.clone()));
        }

        params.push(Box::new(id));
        params.push(Box::new(user_id));

        let query = format!(
            "UPDATE invoices SET {} WHERE id = ? AND user_id = ?",
            updates.join(", ")
        );
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        conn.execute(&query, params_refs.as_slice())?;
    }

    get_invoice(conn, id, user_id).await
}

/// Record the QuickBooks id assigned when the invoice was pushed upstream
pub async fn mark_invoice_synced(
    conn: AsyncDbConnection,
    id: i64,
    user_id: i64,
    quickbooks_id: &str,
) -> Result<Option<Invoice>> {
    {
        let conn = conn.lock().await;
        let now = chrono::Utc::now().timestamp();

        conn.execute(
            "UPDATE invoices SET quickbooks_id = ?, updated_at = ? WHERE id = ? AND user_id = ?",
            rusqlite::params![quickbooks_id, now, id, user_id],
        )?;
    }

    get_invoice(conn, id, user_id).await
}

pub async fn delete_invoice(conn: AsyncDbConnection, id: i64, user_id: i64) -> Result<()> {
    let conn = conn.lock().await;

    conn.execute(
        "DELETE FROM invoices WHERE id = ? AND user_id = ?",
        [id, user_id],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scratch_database;

    #[tokio::test]
    async fn test_line_items_round_trip_through_json_column() {
        let (db, _dir) = scratch_database();
        let conn = db.async_connection.clone();

        let created = insert_invoice(
            conn.clone(),
            1,
            &CreateInvoiceRequest {
                client_id: 3,
                invoice_number: "INV-0042".to_string(),
                issue_date: Some("2025-06-01".to_string()),
                due_date: Some("2025-07-01".to_string()),
                line_items: vec![
                    InvoiceLineItem {
                        description: "Design".to_string(),
                        quantity: 10.0,
                        unit_price: 120.0,
                    },
                    InvoiceLineItem {
                        description: "Install".to_string(),
                        quantity: 4.0,
                        unit_price: 95.0,
                    },
                ],
                tax_rate: Some(0.0825),
                notes: None,
            },
        )
        .await
        .unwrap();

        let fetched = get_invoice(conn.clone(), created.id, 1)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.line_items.len(), 2);
        assert_eq!(fetched.line_items[1].description, "Install");
        assert_eq!(fetched.status, InvoiceStatus::Draft);

        let synced = mark_invoice_synced(conn, created.id, 1, "qb-881")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(synced.quickbooks_id.as_deref(), Some("qb-881"));
        assert!(synced.updated_at >= created.updated_at);
    }
}
