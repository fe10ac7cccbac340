use rusqlite::Connection;

/// Bring the relational schema up to date. Every statement is idempotent.
pub fn run_migrations(conn: &Connection) -> anyhow::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email VARCHAR NOT NULL UNIQUE,
            display_name VARCHAR NOT NULL,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS clients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            company_name VARCHAR NOT NULL,
            contact_name VARCHAR,
            email VARCHAR,
            phone VARCHAR,
            address VARCHAR,
            notes VARCHAR,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS client_contacts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            client_id INTEGER NOT NULL,
            name VARCHAR NOT NULL,
            email VARCHAR,
            phone VARCHAR,
            role VARCHAR,
            is_primary BOOLEAN NOT NULL DEFAULT false,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL,
            FOREIGN KEY (client_id) REFERENCES clients (id) ON DELETE CASCADE
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            client_id INTEGER,
            name VARCHAR NOT NULL,
            description VARCHAR,
            status VARCHAR NOT NULL DEFAULT 'planning'
                CHECK (status IN ('planning', 'active', 'on_hold', 'completed')),
            priority VARCHAR NOT NULL DEFAULT 'medium'
                CHECK (priority IN ('low', 'medium', 'high', 'urgent')),
            budget REAL,
            estimated_hours REAL,
            start_date VARCHAR,
            end_date VARCHAR,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            project_id INTEGER,
            title VARCHAR NOT NULL,
            description VARCHAR,
            status VARCHAR NOT NULL DEFAULT 'todo'
                CHECK (status IN ('todo', 'in_progress', 'review', 'done')),
            priority VARCHAR NOT NULL DEFAULT 'medium'
                CHECK (priority IN ('low', 'medium', 'high', 'urgent')),
            estimated_hours REAL,
            due_date VARCHAR,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS time_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            project_id INTEGER,
            task_id INTEGER,
            description VARCHAR,
            hours REAL NOT NULL,
            entry_date VARCHAR NOT NULL,
            billable BOOLEAN NOT NULL DEFAULT true,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS invoices (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            client_id INTEGER NOT NULL,
            invoice_number VARCHAR NOT NULL,
            status VARCHAR NOT NULL DEFAULT 'draft'
                CHECK (status IN ('draft', 'sent', 'paid', 'overdue', 'cancelled')),
            issue_date VARCHAR,
            due_date VARCHAR,
            line_items VARCHAR NOT NULL DEFAULT '[]',
            tax_rate REAL NOT NULL DEFAULT 0,
            notes VARCHAR,
            quickbooks_id VARCHAR,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS quotes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            client_id INTEGER NOT NULL,
            quote_number VARCHAR NOT NULL,
            status VARCHAR NOT NULL DEFAULT 'draft'
                CHECK (status IN ('draft', 'sent', 'accepted', 'declined', 'expired')),
            valid_until VARCHAR,
            line_items VARCHAR NOT NULL DEFAULT '[]',
            tax_rate REAL NOT NULL DEFAULT 0,
            notes VARCHAR,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR NOT NULL,
            email VARCHAR NOT NULL UNIQUE,
            department VARCHAR,
            title VARCHAR,
            hourly_rate REAL,
            is_active BOOLEAN NOT NULL DEFAULT true,
            hired_on VARCHAR,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS equipment (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            name VARCHAR NOT NULL,
            serial_number VARCHAR,
            status VARCHAR NOT NULL DEFAULT 'available'
                CHECK (status IN ('available', 'assigned', 'maintenance', 'retired')),
            assigned_to INTEGER,
            notes VARCHAR,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS project_parts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id INTEGER NOT NULL,
            name VARCHAR NOT NULL,
            quantity REAL NOT NULL DEFAULT 1,
            unit_cost REAL NOT NULL DEFAULT 0,
            supplier VARCHAR,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL,
            FOREIGN KEY (project_id) REFERENCES projects (id) ON DELETE CASCADE
        )",
        [],
    )?;

    // Indexes for owner-scoped listing
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_clients_user ON clients(user_id, created_at)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_client_contacts_client
            ON client_contacts(client_id)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_projects_user ON projects(user_id, created_at)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_tasks_user ON tasks(user_id, created_at)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_time_entries_user
            ON time_entries(user_id, entry_date)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_invoices_user ON invoices(user_id, created_at)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_quotes_user ON quotes(user_id, created_at)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_equipment_user ON equipment(user_id, created_at)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_project_parts_project
            ON project_parts(project_id)",
        [],
    )?;

    Ok(())
}
