pub mod client;
pub mod colors;
pub mod employee;
pub mod equipment;
pub mod invoice;
pub mod part;
pub mod project;
pub mod quote;
pub mod task;
pub mod time_entry;
pub mod user;
pub mod validate;
pub mod workspace;

pub use client::{
    Client, ClientContact, ClientContactsResponse, ClientsResponse, CreateClientContactRequest,
    CreateClientRequest, UpdateClientContactRequest, UpdateClientRequest,
};
pub use colors::{
    CategoryColor, CategoryColorsResponse, CategoryPosition, CategoryPositionsResponse,
    PriorityColor, PriorityColorsResponse, SetCategoryColorRequest, SetCategoryPositionRequest,
    SetPriorityColorRequest, SetStatusColorRequest, StatusColor, StatusColorsResponse,
};
pub use employee::{
    CreateEmployeeRequest, DepartmentsResponse, Employee, EmployeesResponse,
    UpdateEmployeeRequest,
};
pub use equipment::{
    CreateEquipmentRequest, Equipment, EquipmentResponse, EquipmentStatus, UpdateEquipmentRequest,
};
pub use invoice::{
    CreateInvoiceRequest, Invoice, InvoiceLineItem, InvoiceStatus, InvoicesResponse,
    MarkInvoiceSyncedRequest, UpdateInvoiceRequest,
};
pub use part::{
    CreateProjectPartRequest, ProjectPart, ProjectPartsResponse, UpdateProjectPartRequest,
};
pub use project::{
    CreateProjectRequest, Priority, Project, ProjectStatus, ProjectsResponse,
    UpdateProjectRequest,
};
pub use quote::{CreateQuoteRequest, Quote, QuoteStatus, QuotesResponse, UpdateQuoteRequest};
pub use task::{CreateTaskRequest, Task, TaskStatus, TasksResponse, UpdateTaskRequest};
pub use time_entry::{
    CreateTimeEntryRequest, TimeEntriesResponse, TimeEntry, UpdateTimeEntryRequest,
};
pub use user::{CreateUserRequest, UpdateUserRequest, User, UsersResponse};
pub use validate::ValidationError;
pub use workspace::{
    CreateWorkspaceCategoryRequest, CreateWorkspaceProjectRequest, CreateWorkspaceRequest,
    CreateWorkspaceTaskRequest, UpdateWorkspaceCategoryRequest, UpdateWorkspaceProjectRequest,
    UpdateWorkspaceRequest, UpdateWorkspaceTaskRequest, Workspace, WorkspaceCategoriesResponse,
    WorkspaceCategory, WorkspaceProject, WorkspaceProjectsResponse, WorkspaceTask,
    WorkspaceTasksResponse, WorkspacesResponse,
};
