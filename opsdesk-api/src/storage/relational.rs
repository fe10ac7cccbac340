//! Relational half of the façade: every method is one statement against
//! the rusqlite pool, owner-scoped where the entity has an owner. Errors
//! propagate unmodified; a mismatched owner on delete is a no-op.

use anyhow::Result;
use shared_types::{
    Client, ClientContact, CreateClientContactRequest, CreateClientRequest,
    CreateEmployeeRequest, CreateEquipmentRequest, CreateInvoiceRequest,
    CreateProjectPartRequest, CreateProjectRequest, CreateQuoteRequest, CreateTaskRequest,
    CreateTimeEntryRequest, CreateUserRequest, Employee, Equipment, Invoice, Project,
    ProjectPart, Quote, Task, TimeEntry, UpdateClientContactRequest, UpdateClientRequest,
    UpdateEmployeeRequest, UpdateEquipmentRequest, UpdateInvoiceRequest,
    UpdateProjectPartRequest, UpdateProjectRequest, UpdateQuoteRequest, UpdateTaskRequest,
    UpdateTimeEntryRequest, UpdateUserRequest, User,
};

use super::Storage;
use crate::database::{
    clients, employees, equipment, invoices, project_parts, projects, quotes, tasks,
    time_entries, users,
};

impl Storage {
    fn conn(&self) -> crate::database::AsyncDbConnection {
        self.db.async_connection.clone()
    }

    // Users

    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User> {
        users::insert_user(self.conn(), request).await
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<User>> {
        users::get_user(self.conn(), id).await
    }

    pub async fn get_users(&self) -> Result<Vec<User>> {
        users::list_users(self.conn()).await
    }

    pub async fn update_user(&self, id: i64, request: &UpdateUserRequest) -> Result<Option<User>> {
        users::update_user(self.conn(), id, request).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<()> {
        users::delete_user(self.conn(), id).await
    }

    // Clients

    pub async fn create_client(&self, user_id: i64, request: &CreateClientRequest) -> Result<Client> {
        clients::insert_client(self.conn(), user_id, request).await
    }

    pub async fn get_client(&self, id: i64, user_id: i64) -> Result<Option<Client>> {
        clients::get_client(self.conn(), id, user_id).await
    }

    pub async fn get_clients(&self, user_id: i64) -> Result<Vec<Client>> {
        clients::list_clients(self.conn(), user_id).await
    }

    pub async fn update_client(
        &self,
        id: i64,
        user_id: i64,
        request: &UpdateClientRequest,
    ) -> Result<Option<Client>> {
        clients::update_client(self.conn(), id, user_id, request).await
    }

    pub async fn delete_client(&self, id: i64, user_id: i64) -> Result<()> {
        clients::delete_client(self.conn(), id, user_id).await
    }

    // Client contacts

    pub async fn create_client_contact(
        &self,
        client_id: i64,
        request: &CreateClientContactRequest,
    ) -> Result<ClientContact> {
        clients::insert_contact(self.conn(), client_id, request).await
    }

    pub async fn get_client_contacts(&self, client_id: i64) -> Result<Vec<ClientContact>> {
        clients::list_contacts(self.conn(), client_id).await
    }

    pub async fn update_client_contact(
        &self,
        id: i64,
        client_id: i64,
        request: &UpdateClientContactRequest,
    ) -> Result<Option<ClientContact>> {
        clients::update_contact(self.conn(), id, client_id, request).await
    }

    pub async fn delete_client_contact(&self, id: i64, client_id: i64) -> Result<()> {
        clients::delete_contact(self.conn(), id, client_id).await
    }

    pub async fn set_primary_contact(
        &self,
        client_id: i64,
        contact_id: i64,
    ) -> Result<Option<ClientContact>> {
        clients::set_primary_contact(self.conn(), client_id, contact_id).await
    }

    // Projects

    pub async fn create_project(
        &self,
        user_id: i64,
        request: &CreateProjectRequest,
    ) -> Result<Project> {
        projects::insert_project(self.conn(), user_id, request).await
    }

    pub async fn get_project(&self, id: i64, user_id: i64) -> Result<Option<Project>> {
        projects::get_project(self.conn(), id, user_id).await
    }

    pub async fn get_projects(&self, user_id: i64) -> Result<Vec<Project>> {
        projects::list_projects(self.conn(), user_id).await
    }

    pub async fn update_project(
        &self,
        id: i64,
        user_id: i64,
        request: &UpdateProjectRequest,
    ) -> Result<Option<Project>> {
        projects::update_project(self.conn(), id, user_id, request).await
    }

    pub async fn delete_project(&self, id: i64, user_id: i64) -> Result<()> {
        projects::delete_project(self.conn(), id, user_id).await
    }

    // Project parts

    pub async fn create_project_part(
        &self,
        project_id: i64,
        request: &CreateProjectPartRequest,
    ) -> Result<ProjectPart> {
        project_parts::insert_part(self.conn(), project_id, request).await
    }

    pub async fn get_project_parts(&self, project_id: i64) -> Result<Vec<ProjectPart>> {
        project_parts::list_parts(self.conn(), project_id).await
    }

    pub async fn update_project_part(
        &self,
        id: i64,
        project_id: i64,
        request: &UpdateProjectPartRequest,
    ) -> Result<Option<ProjectPart>> {
        project_parts::update_part(self.conn(), id, project_id, request).await
    }

    pub async fn delete_project_part(&self, id: i64, project_id: i64) -> Result<()> {
        project_parts::delete_part(self.conn(), id, project_id).await
    }

    // Tasks

    pub async fn create_task(&self, user_id: i64, request: &CreateTaskRequest) -> Result<Task> {
        tasks::insert_task(self.conn(), user_id, request).await
    }

    pub async fn get_task(&self, id: i64, user_id: i64) -> Result<Option<Task>> {
        tasks::get_task(self.conn(), id, user_id).await
    }

    pub async fn get_tasks(&self, user_id: i64) -> Result<Vec<Task>> {
        tasks::list_tasks(self.conn(), user_id).await
    }

    pub async fn get_project_tasks(&self, project_id: i64, user_id: i64) -> Result<Vec<Task>> {
        tasks::list_project_tasks(self.conn(), project_id, user_id).await
    }

    pub async fn update_task(
        &self,
        id: i64,
        user_id: i64,
        request: &UpdateTaskRequest,
    ) -> Result<Option<Task>> {
        tasks::update_task(self.conn(), id, user_id, request).await
    }

    pub async fn delete_task(&self, id: i64, user_id: i64) -> Result<()> {
        tasks::delete_task(self.conn(), id, user_id).await
    }

    // Time entries

    pub async fn create_time_entry(
        &self,
        user_id: i64,
        request: &CreateTimeEntryRequest,
    ) -> Result<TimeEntry> {
        time_entries::insert_time_entry(self.conn(), user_id, request).await
    }

    pub async fn get_time_entry(&self, id: i64, user_id: i64) -> Result<Option<TimeEntry>> {
        time_entries::get_time_entry(self.conn(), id, user_id).await
    }

    pub async fn get_time_entries(&self, user_id: i64) -> Result<Vec<TimeEntry>> {
        time_entries::list_time_entries(self.conn(), user_id).await
    }

    pub async fn update_time_entry(
        &self,
        id: i64,
        user_id: i64,
        request: &UpdateTimeEntryRequest,
    ) -> Result<Option<TimeEntry>> {
        time_entries::update_time_entry(self.conn(), id, user_id, request).await
    }

    pub async fn delete_time_entry(&self, id: i64, user_id: i64) -> Result<()> {
        time_entries::delete_time_entry(self.conn(), id, user_id).await
    }

    // Invoices

    pub async fn create_invoice(
        &self,
        user_id: i64,
        request: &CreateInvoiceRequest,
    ) -> Result<Invoice> {
        invoices::insert_invoice(self.conn(), user_id, request).await
    }

    pub async fn get_invoice(&self, id: i64, user_id: i64) -> Result<Option<Invoice>> {
        invoices::get_invoice(self.conn(), id, user_id).await
    }

    pub async fn get_invoices(&self, user_id: i64) -> Result<Vec<Invoice>> {
        invoices::list_invoices(self.conn(), user_id).await
    }

    pub async fn update_invoice(
        &self,
        id: i64,
        user_id: i64,
        request: &UpdateInvoiceRequest,
    ) -> Result<Option<Invoice>> {
        invoices::update_invoice(self.conn(), id, user_id, request).await
    }

    pub async fn mark_invoice_synced(
        &self,
        id: i64,
        user_id: i64,
        quickbooks_id: &str,
    ) -> Result<Option<Invoice>> {
        invoices::mark_invoice_synced(self.conn(), id, user_id, quickbooks_id).await
    }

    pub async fn delete_invoice(&self, id: i64, user_id: i64) -> Result<()> {
        invoices::delete_invoice(self.conn(), id, user_id).await
    }

    // Quotes

    pub async fn create_quote(&self, user_id: i64, request: &CreateQuoteRequest) -> Result<Quote> {
        quotes::insert_quote(self.conn(), user_id, request).await
    }

    pub async fn get_quote(&self, id: i64, user_id: i64) -> Result<Option<Quote>> {
        quotes::get_quote(self.conn(), id, user_id).await
    }

    pub async fn get_quotes(&self, user_id: i64) -> Result<Vec<Quote>> {
        quotes::list_quotes(self.conn(), user_id).await
    }

    pub async fn update_quote(
        &self,
        id: i64,
        user_id: i64,
        request: &UpdateQuoteRequest,
    ) -> Result<Option<Quote>> {
        quotes::update_quote(self.conn(), id, user_id, request).await
    }

    pub async fn delete_quote(&self, id: i64, user_id: i64) -> Result<()> {
        quotes::delete_quote(self.conn(), id, user_id).await
    }

    // Employees

    pub async fn create_employee(&self, request: &CreateEmployeeRequest) -> Result<Employee> {
        employees::insert_employee(self.conn(), request).await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Option<Employee>> {
        employees::get_employee(self.conn(), id).await
    }

    pub async fn get_employees(&self, include_inactive: bool) -> Result<Vec<Employee>> {
        employees::list_employees(self.conn(), include_inactive).await
    }

    pub async fn get_departments(&self) -> Result<Vec<String>> {
        employees::list_departments(self.conn()).await
    }

    pub async fn update_employee(
        &self,
        id: i64,
        request: &UpdateEmployeeRequest,
    ) -> Result<Option<Employee>> {
        employees::update_employee(self.conn(), id, request).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<()> {
        employees::delete_employee(self.conn(), id).await
    }

    // Equipment

    pub async fn create_equipment(
        &self,
        user_id: i64,
        request: &CreateEquipmentRequest,
    ) -> Result<Equipment> {
        equipment::insert_equipment(self.conn(), user_id, request).await
    }

    pub async fn get_equipment(&self, id: i64, user_id: i64) -> Result<Option<Equipment>> {
        equipment::get_equipment(self.conn(), id, user_id).await
    }

    pub async fn get_equipment_list(&self, user_id: i64) -> Result<Vec<Equipment>> {
        equipment::list_equipment(self.conn(), user_id).await
    }

    pub async fn update_equipment(
        &self,
        id: i64,
        user_id: i64,
        request: &UpdateEquipmentRequest,
    ) -> Result<Option<Equipment>> {
        equipment::update_equipment(self.conn(), id, user_id, request).await
    }

    pub async fn delete_equipment(&self, id: i64, user_id: i64) -> Result<()> {
        equipment::delete_equipment(self.conn(), id, user_id).await
    }
}
