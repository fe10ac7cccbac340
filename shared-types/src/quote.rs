use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::invoice::InvoiceLineItem;

/// Quote status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Draft,
    Sent,
    Accepted,
    Declined,
    Expired,
}

impl QuoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Draft => "draft",
            QuoteStatus::Sent => "sent",
            QuoteStatus::Accepted => "accepted",
            QuoteStatus::Declined => "declined",
            QuoteStatus::Expired => "expired",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "sent" => QuoteStatus::Sent,
            "accepted" => QuoteStatus::Accepted,
            "declined" => QuoteStatus::Declined,
            "expired" => QuoteStatus::Expired,
            _ => QuoteStatus::Draft,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quote {
    pub id: i64,
    pub user_id: i64,
    pub client_id: i64,
    pub quote_number: String,
    pub status: QuoteStatus,
    pub valid_until: Option<String>,
    pub line_items: Vec<InvoiceLineItem>,
    pub tax_rate: f64,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct CreateQuoteRequest {
    pub client_id: i64,
    pub quote_number: String,
    pub valid_until: Option<String>,
    pub line_items: Vec<InvoiceLineItem>,
    pub tax_rate: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct UpdateQuoteRequest {
    pub client_id: Option<i64>,
    pub quote_number: Option<String>,
    pub status: Option<QuoteStatus>,
    pub valid_until: Option<String>,
    pub line_items: Option<Vec<InvoiceLineItem>>,
    pub tax_rate: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct QuotesResponse {
    pub quotes: Vec<Quote>,
}
