use thiserror::Error;

use crate::client::{CreateClientContactRequest, CreateClientRequest};
use crate::colors::{
    SetCategoryColorRequest, SetCategoryPositionRequest, SetPriorityColorRequest,
    SetStatusColorRequest,
};
use crate::employee::CreateEmployeeRequest;
use crate::equipment::CreateEquipmentRequest;
use crate::invoice::{CreateInvoiceRequest, InvoiceLineItem};
use crate::part::CreateProjectPartRequest;
use crate::project::CreateProjectRequest;
use crate::quote::CreateQuoteRequest;
use crate::task::CreateTaskRequest;
use crate::time_entry::CreateTimeEntryRequest;
use crate::user::CreateUserRequest;
use crate::workspace::{
    CreateWorkspaceCategoryRequest, CreateWorkspaceProjectRequest, CreateWorkspaceRequest,
    CreateWorkspaceTaskRequest,
};

/// Rejected at the API boundary before anything reaches storage
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("invalid color {0:?}: expected #rrggbb")]
    InvalidColor(String),
    #[error("{0} must not be negative")]
    NegativeAmount(&'static str),
}

fn non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

fn hex_color(value: &str) -> Result<(), ValidationError> {
    let ok = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !ok {
        return Err(ValidationError::InvalidColor(value.to_string()));
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value < 0.0 {
        return Err(ValidationError::NegativeAmount(field));
    }
    Ok(())
}

fn line_items_ok(items: &[InvoiceLineItem]) -> Result<(), ValidationError> {
    for item in items {
        non_empty("line item description", &item.description)?;
        non_negative("line item quantity", item.quantity)?;
        non_negative("line item unit price", item.unit_price)?;
    }
    Ok(())
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("email", &self.email)
    }
}

impl CreateClientRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("company name", &self.company_name)
    }
}

impl CreateClientContactRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("contact name", &self.name)
    }
}

impl CreateProjectRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("project name", &self.name)?;
        if let Some(budget) = self.budget {
            non_negative("budget", budget)?;
        }
        if let Some(hours) = self.estimated_hours {
            non_negative("estimated hours", hours)?;
        }
        Ok(())
    }
}

impl CreateTaskRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("task title", &self.title)
    }
}

impl CreateTimeEntryRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("entry date", &self.entry_date)?;
        non_negative("hours", self.hours)
    }
}

impl CreateInvoiceRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("invoice number", &self.invoice_number)?;
        line_items_ok(&self.line_items)?;
        if let Some(rate) = self.tax_rate {
            non_negative("tax rate", rate)?;
        }
        Ok(())
    }
}

impl CreateQuoteRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("quote number", &self.quote_number)?;
        line_items_ok(&self.line_items)?;
        if let Some(rate) = self.tax_rate {
            non_negative("tax rate", rate)?;
        }
        Ok(())
    }
}

impl CreateEmployeeRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("employee name", &self.name)?;
        non_empty("email", &self.email)?;
        if let Some(rate) = self.hourly_rate {
            non_negative("hourly rate", rate)?;
        }
        Ok(())
    }
}

impl CreateEquipmentRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("equipment name", &self.name)
    }
}

impl CreateProjectPartRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("part name", &self.name)?;
        non_negative("quantity", self.quantity)?;
        non_negative("unit cost", self.unit_cost)
    }
}

impl CreateWorkspaceRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("workspace name", &self.name)?;
        if let Some(color) = &self.color {
            hex_color(color)?;
        }
        Ok(())
    }
}

impl CreateWorkspaceCategoryRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("category name", &self.name)?;
        if let Some(color) = &self.color {
            hex_color(color)?;
        }
        Ok(())
    }
}

impl CreateWorkspaceProjectRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("project name", &self.name)
    }
}

impl CreateWorkspaceTaskRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("task title", &self.title)
    }
}

impl SetCategoryColorRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("category name", &self.category_name)?;
        hex_color(&self.color)
    }
}

impl SetStatusColorRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("status", &self.status)?;
        hex_color(&self.color)
    }
}

impl SetPriorityColorRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("priority", &self.priority)?;
        hex_color(&self.color)
    }
}

impl SetCategoryPositionRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("category name", &self.category_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_accepts_lower_and_upper() {
        assert!(hex_color("#112233").is_ok());
        assert!(hex_color("#AABBCC").is_ok());
    }

    #[test]
    fn test_hex_color_rejects_bad_input() {
        assert!(hex_color("112233").is_err());
        assert!(hex_color("#12345").is_err());
        assert!(hex_color("#11223g").is_err());
        assert!(hex_color("").is_err());
    }

    #[test]
    fn test_create_workspace_requires_name() {
        let request = CreateWorkspaceRequest {
            name: "   ".to_string(),
            description: None,
            color: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_invoice_rejects_negative_quantity() {
        let request = CreateInvoiceRequest {
            client_id: 1,
            invoice_number: "INV-001".to_string(),
            issue_date: None,
            due_date: None,
            line_items: vec![InvoiceLineItem {
                description: "Consulting".to_string(),
                quantity: -1.0,
                unit_price: 100.0,
            }],
            tax_rate: None,
            notes: None,
        };
        assert!(request.validate().is_err());
    }
}
