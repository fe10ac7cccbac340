pub mod clients;
pub mod colors;
pub mod employees;
pub mod equipment;
pub mod invoices;
pub mod projects;
pub mod quotes;
pub mod tasks;
pub mod time_entries;
pub mod users;
pub mod workspaces;

use serde::Deserialize;

/// Owner scoping for tenant-owned entities. Authentication is handled
/// upstream; handlers only thread the id through to storage.
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct EmployeeListQuery {
    #[serde(default)]
    pub include_inactive: bool,
}
