pub mod domain;
pub mod service;
pub mod store;

pub use domain::{AgentId, Case, CaseError, CaseStatus, CaseSubmission, DEFAULT_AGENT_ID};
pub use service::{AgentDashboard, CaseService, CreatedCase, DashboardSummary, TOTAL_AGENTS};
pub use store::CaseStore;
