use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Invoice status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "sent" => InvoiceStatus::Sent,
            "paid" => InvoiceStatus::Paid,
            "overdue" => InvoiceStatus::Overdue,
            "cancelled" => InvoiceStatus::Cancelled,
            _ => InvoiceStatus::Draft,
        }
    }
}

/// One billed line; the full list is stored as a JSON column
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceLineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invoice {
    pub id: i64,
    pub user_id: i64,
    pub client_id: i64,
    pub invoice_number: String,
    pub status: InvoiceStatus,
    pub issue_date: Option<String>,
    pub due_date: Option<String>,
    pub line_items: Vec<InvoiceLineItem>,
    pub tax_rate: f64,
    pub notes: Option<String>,
    /// Set once the invoice has been pushed to QuickBooks
    pub quickbooks_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct CreateInvoiceRequest {
    pub client_id: i64,
    pub invoice_number: String,
    pub issue_date: Option<String>,
    pub due_date: Option<String>,
    pub line_items: Vec<InvoiceLineItem>,
    pub tax_rate: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct UpdateInvoiceRequest {
    pub client_id: Option<i64>,
    pub invoice_number: Option<String>,
    pub status: Option<InvoiceStatus>,
    pub issue_date: Option<String>,
    pub due_date: Option<String>,
    pub line_items: Option<Vec<InvoiceLineItem>>,
    pub tax_rate: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct MarkInvoiceSyncedRequest {
    pub quickbooks_id: String,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct InvoicesResponse {
    pub invoices: Vec<Invoice>,
}
