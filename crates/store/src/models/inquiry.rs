//! Customer inquiry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use aurum_core::{Email, InquiryId, InquiryStatus};

/// A customer inquiry submitted through the contact form. Inquiries are
/// append-only; only their status changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: InquiryId,
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub message: String,
    pub date: DateTime<Utc>,
    pub status: InquiryStatus,
}

/// Fields collected by the contact form; the store assigns the id,
/// timestamp, and initial status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInquiry {
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub message: String,
}
