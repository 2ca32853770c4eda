use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a Debt Collection Agent.
pub type AgentId = u32;

/// Every new case is routed to this agent until a real routing policy
/// exists.
pub const DEFAULT_AGENT_ID: AgentId = 1;

/// One overdue account under collection.
#[derive(Debug, Clone, Serialize)]
pub struct Case {
    pub id: u64,
    pub customer_name: String,
    pub amount: f64,
    pub days_overdue: u32,
    pub status: CaseStatus,
    pub resolved: bool,
    pub opened_on: NaiveDate,
}

impl Case {
    /// One-line rendering used on agent dashboards.
    pub fn display_line(&self) -> String {
        format!(
            "{} - ${:.2} ({} days overdue)",
            self.customer_name, self.amount, self.days_overdue
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Active,
    Resolved,
}

impl CaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Active => "active",
            CaseStatus::Resolved => "resolved",
        }
    }
}

/// Payload accepted when opening a new case.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseSubmission {
    pub customer_name: String,
    pub amount: f64,
    pub days_overdue: u32,
}

impl CaseSubmission {
    /// Rejects submissions before any state is touched. `days_overdue` is
    /// unsigned, so negatives never get this far.
    pub fn validate(&self) -> Result<(), CaseError> {
        if self.customer_name.trim().is_empty() {
            return Err(CaseError::EmptyCustomerName);
        }
        if self.amount.is_sign_negative() || !self.amount.is_finite() {
            return Err(CaseError::InvalidAmount {
                amount: self.amount,
            });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CaseError {
    #[error("customer_name must not be empty")]
    EmptyCustomerName,
    #[error("amount must be a non-negative finite number, got {amount}")]
    InvalidAmount { amount: f64 },
}
