use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::OptionalExtension;
use shared_types::{
    Client, ClientContact, CreateClientContactRequest, CreateClientRequest,
    UpdateClientContactRequest, UpdateClientRequest,
};

fn map_client(row: &rusqlite::Row<'_>) -> rusqlite::Result<Client> {
    Ok(Client {
        id: row.get(0)?,
        user_id: row.get(1)?,
        company_name: row.get(2)?,
        contact_name: row.get(3)?,
        email: row.get(4)?,
        phone: row.get(5)?,
        address: row.get(6)?,
        notes: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

fn map_contact(row: &rusqlite::Row<'_>) -> rusqlite::Result<ClientContact> {
    Ok(ClientContact {
        id: row.get(0)?,
        client_id: row.get(1)?,
        name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        role: row.get(5)?,
        is_primary: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

const CLIENT_COLUMNS: &str =
    "id, user_id, company_name, contact_name, email, phone, address, notes, created_at, updated_at";

const CONTACT_COLUMNS: &str =
    "id, client_id, name, email, phone, role, is_primary, created_at, updated_at";

pub async fn insert_client(
    conn: AsyncDbConnection,
    user_id: i64,
    request: &CreateClientRequest,
) -> Result<Client> {
    let conn = conn.lock().await;
    let now = chrono::Utc::now().timestamp();

    let id: i64 = conn.query_row(
        "INSERT INTO clients
         (user_id, company_name, contact_name, email, phone, address, notes, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING id",
        rusqlite::params![
            user_id,
            &request.company_name,
            request.contact_name.as_ref(),
            request.email.as_ref(),
            request.phone.as_ref(),
            request.address.as_ref(),
            request.notes.as_ref(),
            now,
            now
        ],
        |row| row.get(0),
    )?;

    Ok(Client {
        id,
        user_id,
        company_name: request.company_name.clone(),
        contact_name: request.contact_name.clone(),
        email: request.email.clone(),
        phone: request.phone.clone(),
        address: request.address.clone(),
        notes: request.notes.clone(),
        created_at: now,
        updated_at: now,
    })
}

pub async fn get_client(conn: AsyncDbConnection, id: i64, user_id: i64) -> Result<Option<Client>> {
    let conn = conn.lock().await;

    let client = conn
        .query_row(
            &format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE id = ? AND user_id = ?"),
            [id, user_id],
            map_client,
        )
        .optional()?;

    Ok(client)
}

pub async fn list_clients(conn: AsyncDbConnection, user_id: i64) -> Result<Vec<Client>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(&format!(
        "SELECT {CLIENT_COLUMNS} FROM clients WHERE user_id = ? ORDER BY created_at DESC"
    ))?;

    let clients = stmt
        .query_map([user_id], map_client)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(clients)
}

pub async fn update_client(
    conn: AsyncDbConnection,
    id: i64,
    user_id: i64,
    request: &UpdateClientRequest,
) -> Result<Option<Client>> {
    {
        let conn = conn.lock().await;
        let now = chrono::Utc::now().timestamp();

        let mut updates = vec!["updated_at = ?".to_string()];
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(now)];

        if let Some(company_name) = &request.company_name {
            updates.push("company_name = ?".to_string());
            params.push(Box::new(company_name.clone()));
        }
        if let Some(contact_name) = &request.contact_name {
            updates.push("contact_name = ?".to_string());
            params.push(Box::new(contact_name.clone()));
        }
        if let Some(email) = &request.email {
            updates.push("email = ?".to_string());
            params.push(Box::new(email.clone()));
        }
        if let Some(phone) = &request.phone {
            updates.push("phone = ?".to_string());
            params.push(Box::new(phone.clone()));
        }
        if let Some(address) = &request.address {
            updates.push("address = ?".to_string());
            params.push(Box::new(address.clone()));
        }
        if let Some(notes) = &request.notes {
            updates.push("notes = ?".to_string());
            params.push(Box::new(notes.clone()));
        }

        params.push(Box::new(id));
        params.push(Box::new(user_id));

        let query = format!(
            "UPDATE clients SET {} WHERE id = ? AND user_id = ?",
            updates.join(", ")
        );
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        conn.execute(&query, params_refs.as_slice())?;
    }

    get_client(conn, id, user_id).await
}

/// Owner-scoped; a mismatched user_id affects zero rows and is not an error
pub async fn delete_client(conn: AsyncDbConnection, id: i64, user_id: i64) -> Result<()> {
    let conn = conn.lock().await;

    conn.execute(
        "DELETE FROM clients WHERE id = ? AND user_id = ?",
        [id, user_id],
    )?;

    Ok(())
}

pub async fn insert_contact(
    conn: AsyncDbConnection,
    client_id: i64,
    request: &CreateClientContactRequest,
) -> Result<ClientContact> {
    let conn = conn.lock().await;
    let now = chrono::Utc::now().timestamp();

    let id: i64 = conn.query_row(
        "INSERT INTO client_contacts
         (client_id, name, email, phone, role, is_primary, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, false, ?, ?)
         RETURNING id",
        rusqlite::params![
            client_id,
            &request.name,
            request.email.as_ref(),
            request.phone.as_ref(),
            request.role.as_ref(),
            now,
            now
        ],
        |row| row.get(0),
    )?;

    Ok(ClientContact {
        id,
        client_id,
        name: request.name.clone(),
        email: request.email.clone(),
        phone: request.phone.clone(),
        role: request.role.clone(),
        is_primary: false,
        created_at: now,
        updated_at: now,
    })
}

pub async fn get_contact(
    conn: AsyncDbConnection,
    id: i64,
    client_id: i64,
) -> Result<Option<ClientContact>> {
    let conn = conn.lock().await;

    let contact = conn
        .query_row(
            &format!("SELECT {CONTACT_COLUMNS} FROM client_contacts WHERE id = ? AND client_id = ?"),
            [id, client_id],
            map_contact,
        )
        .optional()?;

    Ok(contact)
}

pub async fn list_contacts(conn: AsyncDbConnection, client_id: i64) -> Result<Vec<ClientContact>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(&format!(
        "SELECT {CONTACT_COLUMNS} FROM client_contacts
         WHERE client_id = ?
         ORDER BY is_primary DESC, name"
    ))?;

    let contacts = stmt
        .query_map([client_id], map_contact)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(contacts)
}

pub async fn update_contact(
    conn: AsyncDbConnection,
    id: i64,
    client_id: i64,
    request: &UpdateClientContactRequest,
) -> Result<Option<ClientContact>> {
    {
        let conn = conn.lock().await;
        let now = chrono::Utc::now().timestamp();

        let mut updates = vec!["updated_at = ?".to_string()];
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(now)];

        if let Some(name) = &request.name {
            updates.push("name = ?".to_string());
            params.push(Box::new(name.clone()));
        }
        if let Some(email) = &request.email {
            updates.push("email = ?".to_string());
            params.push(Box::new(email.clone()));
        }
        if let Some(phone) = &request.phone {
            updates.push("phone = ?".to_string());
            params.push(Box::new(phone.clone()));
        }
        if let Some(role) = &request.role {
            updates.push("role = ?".to_string());
            params.push(Box::new(role.clone()));
        }

        params.push(Box::new(id));
        params.push(Box::new(client_id));

        let query = format!(
            "UPDATE client_contacts SET {} WHERE id = ? AND client_id = ?",
            updates.join(", ")
        );
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        conn.execute(&query, params_refs.as_slice())?;
    }

    get_contact(conn, id, client_id).await
}

pub async fn delete_contact(conn: AsyncDbConnection, id: i64, client_id: i64) -> Result<()> {
    let conn = conn.lock().await;

    conn.execute(
        "DELETE FROM client_contacts WHERE id = ? AND client_id = ?",
        [id, client_id],
    )?;

    Ok(())
}

/// Clear the old primary, then mark the new one. Two statements, not a
/// transaction: a crash in between leaves the client with no primary
/// contact.
pub async fn set_primary_contact(
    conn: AsyncDbConnection,
    client_id: i64,
    contact_id: i64,
) -> Result<Option<ClientContact>> {
    {
        let conn = conn.lock().await;
        let now = chrono::Utc::now().timestamp();

        conn.execute(
            "UPDATE client_contacts SET is_primary = false, updated_at = ? WHERE client_id = ?",
            rusqlite::params![now, client_id],
        )?;

        conn.execute(
            "UPDATE client_contacts SET is_primary = true, updated_at = ?
             WHERE id = ? AND client_id = ?",
            rusqlite::params![now, contact_id, client_id],
        )?;
    }

    get_contact(conn, contact_id, client_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scratch_database;

    #[tokio::test]
    async fn test_client_crud_round_trip() {
        let (db, _dir) = scratch_database();
        let conn = db.async_connection.clone();

        let created = insert_client(
            conn.clone(),
            1,
            &CreateClientRequest {
                company_name: "Acme Fabrication".to_string(),
                contact_name: Some("Pat Doyle".to_string()),
                email: Some("pat@acme.test".to_string()),
                phone: None,
                address: None,
                notes: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(created.created_at, created.updated_at);

        let fetched = get_client(conn.clone(), created.id, 1).await.unwrap();
        assert_eq!(fetched.unwrap().company_name, "Acme Fabrication");

        let updated = update_client(
            conn.clone(),
            created.id,
            1,
            &UpdateClientRequest {
                company_name: None,
                contact_name: None,
                email: None,
                phone: Some("555-0100".to_string()),
                address: None,
                notes: None,
            },
        )
        .await
        .unwrap()
        .unwrap();

        // Partial update leaves untouched fields intact
        assert_eq!(updated.company_name, "Acme Fabrication");
        assert_eq!(updated.phone.as_deref(), Some("555-0100"));

        delete_client(conn.clone(), created.id, 1).await.unwrap();
        assert!(get_client(conn, created.id, 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_owner_mismatch_is_invisible() {
        let (db, _dir) = scratch_database();
        let conn = db.async_connection.clone();

        let created = insert_client(
            conn.clone(),
            7,
            &CreateClientRequest {
                company_name: "Northwind".to_string(),
                contact_name: None,
                email: None,
                phone: None,
                address: None,
                notes: None,
            },
        )
        .await
        .unwrap();

        // Wrong owner cannot read it
        assert!(get_client(conn.clone(), created.id, 8).await.unwrap().is_none());

        // Wrong owner delete is a no-op, the row survives
        delete_client(conn.clone(), created.id, 8).await.unwrap();
        assert!(get_client(conn, created.id, 7).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_set_primary_contact_moves_the_flag() {
        let (db, _dir) = scratch_database();
        let conn = db.async_connection.clone();

        let client = insert_client(
            conn.clone(),
            1,
            &CreateClientRequest {
                company_name: "Acme".to_string(),
                contact_name: None,
                email: None,
                phone: None,
                address: None,
                notes: None,
            },
        )
        .await
        .unwrap();

        let first = insert_contact(
            conn.clone(),
            client.id,
            &CreateClientContactRequest {
                name: "First".to_string(),
                email: None,
                phone: None,
                role: None,
            },
        )
        .await
        .unwrap();
        let second = insert_contact(
            conn.clone(),
            client.id,
            &CreateClientContactRequest {
                name: "Second".to_string(),
                email: None,
                phone: None,
                role: None,
            },
        )
        .await
        .unwrap();

        set_primary_contact(conn.clone(), client.id, first.id)
            .await
            .unwrap();
        let promoted = set_primary_contact(conn.clone(), client.id, second.id)
            .await
            .unwrap()
            .unwrap();
        assert!(promoted.is_primary);

        let contacts = list_contacts(conn, client.id).await.unwrap();
        let primaries: Vec<_> = contacts.iter().filter(|c| c.is_primary).collect();
        assert_eq!(primaries.len(), 1);
        assert_eq!(primaries[0].id, second.id);
    }
}
