use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let mut types = Vec::new();

    // User types
    types.push(clean_type(User::export_to_string()?));
    types.push(clean_type(CreateUserRequest::export_to_string()?));
    types.push(clean_type(UpdateUserRequest::export_to_string()?));
    types.push(clean_type(UsersResponse::export_to_string()?));

    // Client types
    types.push(clean_type(Client::export_to_string()?));
    types.push(clean_type(ClientContact::export_to_string()?));
    types.push(clean_type(CreateClientRequest::export_to_string()?));
    types.push(clean_type(UpdateClientRequest::export_to_string()?));
    types.push(clean_type(CreateClientContactRequest::export_to_string()?));
    types.push(clean_type(UpdateClientContactRequest::export_to_string()?));
    types.push(clean_type(ClientsResponse::export_to_string()?));
    types.push(clean_type(ClientContactsResponse::export_to_string()?));

    // Project types
    types.push(clean_type(Project::export_to_string()?));
    types.push(clean_type(ProjectStatus::export_to_string()?));
    types.push(clean_type(Priority::export_to_string()?));
    types.push(clean_type(CreateProjectRequest::export_to_string()?));
    types.push(clean_type(UpdateProjectRequest::export_to_string()?));
    types.push(clean_type(ProjectsResponse::export_to_string()?));
    types.push(clean_type(ProjectPart::export_to_string()?));
    types.push(clean_type(CreateProjectPartRequest::export_to_string()?));
    types.push(clean_type(UpdateProjectPartRequest::export_to_string()?));
    types.push(clean_type(ProjectPartsResponse::export_to_string()?));

    // Task types
    types.push(clean_type(Task::export_to_string()?));
    types.push(clean_type(TaskStatus::export_to_string()?));
    types.push(clean_type(CreateTaskRequest::export_to_string()?));
    types.push(clean_type(UpdateTaskRequest::export_to_string()?));
    types.push(clean_type(TasksResponse::export_to_string()?));

    // Time entry types
    types.push(clean_type(TimeEntry::export_to_string()?));
    types.push(clean_type(CreateTimeEntryRequest::export_to_string()?));
    types.push(clean_type(UpdateTimeEntryRequest::export_to_string()?));
    types.push(clean_type(TimeEntriesResponse::export_to_string()?));

    // Accounting types
    types.push(clean_type(Invoice::export_to_string()?));
    types.push(clean_type(InvoiceStatus::export_to_string()?));
    types.push(clean_type(InvoiceLineItem::export_to_string()?));
    types.push(clean_type(CreateInvoiceRequest::export_to_string()?));
    types.push(clean_type(UpdateInvoiceRequest::export_to_string()?));
    types.push(clean_type(MarkInvoiceSyncedRequest::export_to_string()?));
    types.push(clean_type(InvoicesResponse::export_to_string()?));
    types.push(clean_type(Quote::export_to_string()?));
    types.push(clean_type(QuoteStatus::export_to_string()?));
    types.push(clean_type(CreateQuoteRequest::export_to_string()?));
    types.push(clean_type(UpdateQuoteRequest::export_to_string()?));
    types.push(clean_type(QuotesResponse::export_to_string()?));

    // Employee types
    types.push(clean_type(Employee::export_to_string()?));
    types.push(clean_type(CreateEmployeeRequest::export_to_string()?));
    types.push(clean_type(UpdateEmployeeRequest::export_to_string()?));
    types.push(clean_type(EmployeesResponse::export_to_string()?));
    types.push(clean_type(DepartmentsResponse::export_to_string()?));

    // Equipment types
    types.push(clean_type(Equipment::export_to_string()?));
    types.push(clean_type(EquipmentStatus::export_to_string()?));
    types.push(clean_type(CreateEquipmentRequest::export_to_string()?));
    types.push(clean_type(UpdateEquipmentRequest::export_to_string()?));
    types.push(clean_type(EquipmentResponse::export_to_string()?));

    // Workspace types
    types.push(clean_type(Workspace::export_to_string()?));
    types.push(clean_type(WorkspaceCategory::export_to_string()?));
    types.push(clean_type(WorkspaceProject::export_to_string()?));
    types.push(clean_type(WorkspaceTask::export_to_string()?));
    types.push(clean_type(CreateWorkspaceRequest::export_to_string()?));
    types.push(clean_type(UpdateWorkspaceRequest::export_to_string()?));
    types.push(clean_type(CreateWorkspaceCategoryRequest::export_to_string()?));
    types.push(clean_type(UpdateWorkspaceCategoryRequest::export_to_string()?));
    types.push(clean_type(CreateWorkspaceProjectRequest::export_to_string()?));
    types.push(clean_type(UpdateWorkspaceProjectRequest::export_to_string()?));
    types.push(clean_type(CreateWorkspaceTaskRequest::export_to_string()?));
    types.push(clean_type(UpdateWorkspaceTaskRequest::export_to_string()?));
    types.push(clean_type(WorkspacesResponse::export_to_string()?));
    types.push(clean_type(WorkspaceCategoriesResponse::export_to_string()?));
    types.push(clean_type(WorkspaceProjectsResponse::export_to_string()?));
    types.push(clean_type(WorkspaceTasksResponse::export_to_string()?));

    // Settings blob types
    types.push(clean_type(CategoryColor::export_to_string()?));
    types.push(clean_type(StatusColor::export_to_string()?));
    types.push(clean_type(PriorityColor::export_to_string()?));
    types.push(clean_type(CategoryPosition::export_to_string()?));
    types.push(clean_type(SetCategoryColorRequest::export_to_string()?));
    types.push(clean_type(SetStatusColorRequest::export_to_string()?));
    types.push(clean_type(SetPriorityColorRequest::export_to_string()?));
    types.push(clean_type(SetCategoryPositionRequest::export_to_string()?));
    types.push(clean_type(CategoryColorsResponse::export_to_string()?));
    types.push(clean_type(StatusColorsResponse::export_to_string()?));
    types.push(clean_type(PriorityColorsResponse::export_to_string()?));
    types.push(clean_type(CategoryPositionsResponse::export_to_string()?));

    let output_dir = Path::new("../gui/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    // Check if the type definition includes imports (like Task which imports Priority)
    let lines: Vec<&str> = type_def.lines().collect();
    let has_import = lines
        .iter()
        .any(|line| line.trim().starts_with("import type"));

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            // Keep import lines if they're part of a type definition
            if trimmed.starts_with("import type") {
                return has_import;
            }
            // Filter out the generated comment line
            !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .cloned()
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
