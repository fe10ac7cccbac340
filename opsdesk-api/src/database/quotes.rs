use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::OptionalExtension;
use shared_types::{
    CreateQuoteRequest, InvoiceLineItem, Quote, QuoteStatus, UpdateQuoteRequest,
};

fn map_quote(row: &rusqlite::Row<'_>) -> rusqlite::Result<Quote> {
    let status: String = row.get(4)?;
    let line_items_json: String = row.get(6)?;
    let line_items: Vec<InvoiceLineItem> =
        serde_json::from_str(&line_items_json).unwrap_or_default();

    Ok(Quote {
        id: row.get(0)?,
        user_id: row.get(1)?,
        client_id: row.get(2)?,
        quote_number: row.get(3)?,
        status: QuoteStatus::from_str_or_default(&status),
        valid_until: row.get(5)?,
        line_items,
        tax_rate: row.get(7)?,
        notes: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

const QUOTE_COLUMNS: &str = "id, user_id, client_id, quote_number, status, valid_until, \
     line_items, tax_rate, notes, created_at, updated_at";

pub async fn insert_quote(
    conn: AsyncDbConnection,
    user_id: i64,
    request: &CreateQuoteRequest,
) -> Result<Quote> {
    let conn = conn.lock().await;
    let now = chrono::Utc::now().timestamp();
    let tax_rate = request.tax_rate.unwrap_or(0.0);
    let line_items_json = serde_json::to_string(&request.line_items)?;

    let id: i64 = conn.query_row(
        "INSERT INTO quotes
         (user_id, client_id, quote_number, status, valid_until, line_items, tax_rate, notes,
          created_at, updated_at)
         VALUES (?, ?, ?, 'draft', ?, ?, ?, ?, ?, ?)
         RETURNING id",
        rusqlite::params![
            user_id,
            request.client_id,
            &request.quote_number,
            request.valid_until.as_ref(),
            &line_items_json,
            tax_rate,
            request.notes.as_ref(),
            now,
            now
        ],
        |row| row.get(0),
    )?;

    Ok(Quote {
        id,
        user_id,
        client_id: request.client_id,
        quote_number: request.quote_number.clone(),
        status: QuoteStatus::Draft,
        valid_until: request.valid_until.clone(),
        line_items: request.line_items.clone(),
        tax_rate,
        notes: request.notes.clone(),
        created_at: now,
        updated_at: now,
    })
}

pub async fn get_quote(conn: AsyncDbConnection, id: i64, user_id: i64) -> Result<Option<Quote>> {
    let conn = conn.lock().await;

    let quote = conn
        .query_row(
            &format!("SELECT {QUOTE_COLUMNS} FROM quotes WHERE id = ? AND user_id = ?"),
            [id, user_id],
            map_quote,
        )
        .optional()?;

    Ok(quote)
}

pub async fn list_quotes(conn: AsyncDbConnection, user_id: i64) -> Result<Vec<Quote>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(&format!(
        "SELECT {QUOTE_COLUMNS} FROM quotes WHERE user_id = ? ORDER BY created_at DESC"
    ))?;

    let quotes = stmt
        .query_map([user_id], map_quote)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(quotes)
}

pub async fn update_quote(
    conn: AsyncDbConnection,
    id: i64,
    user_id: i64,
    request: &UpdateQuoteRequest,
) -> Result<Option<Quote>> {
    {
        let conn = conn.lock().await;
        let now = chrono::Utc::now().timestamp();

        let mut updates = vec!["updated_at = ?".to_string()];
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(now)];

        if let Some(client_id) = request.client_id {
            updates.push("client_id = ?".to_string());
            params.push(Box::new(client_id));
        }
        if let Some(quote_number) = &request.quote_number {
            updates.push("quote_number = ?".to_string());
            params.push(Box::new(quote_number.clone()));
        }
        if let Some(status) = request.status {
            updates.push("status = ?".to_string());
            params.push(Box::new(status.as_str()));
        }
        if let Some(valid_until) = &request.valid_until {
            updates.push("valid_until = ?".to_string());
            params.push(Box::new(valid_until.clone()));
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
            "UPDATE quotes SET {} WHERE id = ? AND user_id = ?",
            updates.join(", ")
        );
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        conn.execute(&query, params_refs.as_slice())?;
    }

    get_quote(conn, id, user_id).await
}

pub async fn delete_quote(conn: AsyncDbConnection, id: i64, user_id: i64) -> Result<()> {
    let conn = conn.lock().await;

    conn.execute(
        "DELETE FROM quotes WHERE id = ? AND user_id = ?",
        [id, user_id],
    )?;

    Ok(())
}
