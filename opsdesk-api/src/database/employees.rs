use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::OptionalExtension;
use shared_types::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};

fn map_employee(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        department: row.get(3)?,
        title: row.get(4)?,
        hourly_rate: row.get(5)?,
        is_active: row.get(6)?,
        hired_on: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

const EMPLOYEE_COLUMNS: &str = "id, name, email, department, title, hourly_rate, is_active, \
     hired_on, created_at, updated_at";

pub async fn insert_employee(
    conn: AsyncDbConnection,
    request: &CreateEmployeeRequest,
) -> Result<Employee> {
    let conn = conn.lock().await;
    let now = chrono::Utc::now().timestamp();

    let id: i64 = conn.query_row(
        "INSERT INTO employees
         (name, email, department, title, hourly_rate, is_active, hired_on, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, true, ?, ?, ?)
         RETURNING id",
        rusqlite::params![
            &request.name,
            &request.email,
            request.department.as_ref(),
            request.title.as_ref(),
            request.hourly_rate,
            request.hired_on.as_ref(),
            now,
            now
        ],
        |row| row.get(0),
    )?;

    Ok(Employee {
        id,
        name: request.name.clone(),
        email: request.email.clone(),
        department: request.department.clone(),
        title: request.title.clone(),
        hourly_rate: request.hourly_rate,
        is_active: true,
        hired_on: request.hired_on.clone(),
        created_at: now,
        updated_at: now,
    })
}

pub async fn get_employee(conn: AsyncDbConnection, id: i64) -> Result<Option<Employee>> {
    let conn = conn.lock().await;

    let employee = conn
        .query_row(
            &format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?"),
            [id],
            map_employee,
        )
        .optional()?;

    Ok(employee)
}

pub async fn list_employees(
    conn: AsyncDbConnection,
    include_inactive: bool,
) -> Result<Vec<Employee>> {
    let conn = conn.lock().await;

    let query = if include_inactive {
        format!("SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY name")
    } else {
        format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE is_active = true ORDER BY name")
    };

    let mut stmt = conn.prepare(&query)?;

    let employees = stmt
        .query_map([], map_employee)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(employees)
}

/// Departments are the distinct non-null department values of active staff
pub async fn list_departments(conn: AsyncDbConnection) -> Result<Vec<String>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(
        "SELECT DISTINCT department FROM employees
         WHERE department IS NOT NULL AND is_active = true
         ORDER BY department",
    )?;

    let departments = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(departments)
}

pub async fn update_employee(
    conn: AsyncDbConnection,
    id: i64,
    request: &UpdateEmployeeRequest,
) -> Result<Option<Employee>> {
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
        if let Some(department) = &request.department {
            updates.push("department = ?".to_string());
            params.push(Box::new(department.clone()));
        }
        if let Some(title) = &request.title {
            updates.push("title = ?".to_string());
            params.push(Box::new(title.clone()));
        }
        if let Some(hourly_rate) = request.hourly_rate {
            updates.push("hourly_rate = ?".to_string());
            params.push(Box::new(hourly_rate));
        }
        if let Some(is_active) = request.is_active {
            updates.push("is_active = ?".to_string());
            params.push(Box::new(is_active));
        }
        if let Some(hired_on) = &request.hired_on {
            updates.push("hired_on = ?".to_string());
            params.push(Box::new(hired_on.clone()));
        }

        params.push(Box::new(id));

        let query = format!("UPDATE employees SET {} WHERE id = ?", updates.join(", "));
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        conn.execute(&query, params_refs.as_slice())?;
    }

    get_employee(conn, id).await
}

pub async fn delete_employee(conn: AsyncDbConnection, id: i64) -> Result<()> {
    let conn = conn.lock().await;

    conn.execute("DELETE FROM employees WHERE id = ?", [id])?;

    Ok(())
}
