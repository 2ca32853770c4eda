use std::sync::Mutex;

use chrono::Local;
use serde::Serialize;
use tracing::info;

use super::domain::{AgentId, Case, CaseError, CaseStatus, CaseSubmission, DEFAULT_AGENT_ID};
use super::store::CaseStore;
use crate::scoring::{self, CaseAssessment};

/// Number of collection agents reported on the admin dashboard. There is no
/// agent registry yet; this mirrors the roster size the dashboard was built
/// for.
pub const TOTAL_AGENTS: u32 = 5;

/// Orchestrates case intake and the read-side dashboards.
///
/// The store is guarded as one unit: `create_case` counts, appends, and
/// assigns under a single lock so ids stay dense and consistent with the
/// store's length even under concurrent requests.
pub struct CaseService {
    store: Mutex<CaseStore>,
}

/// Outcome of opening a case: the stored record plus its heuristic scores.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedCase {
    pub case: Case,
    pub assessment: CaseAssessment,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DashboardSummary {
    pub total_agents: u32,
    pub active_cases: usize,
    pub resolved_today: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentDashboard {
    pub agent_id: AgentId,
    pub message: String,
    pub assigned_cases: Vec<String>,
}

impl CaseService {
    /// Takes ownership of a store built at startup. Tests hand in a fresh
    /// store each so they stay isolated.
    pub fn new(store: CaseStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Validates, stores, and assigns a new case to the default agent.
    /// Ids are dense 1-based sequence numbers in creation order.
    pub fn create_case(&self, submission: CaseSubmission) -> Result<CreatedCase, CaseError> {
        submission.validate()?;

        let assessment = scoring::assess(submission.amount, submission.days_overdue);

        let mut store = self.store.lock().expect("case store mutex poisoned");
        let case = Case {
            id: store.len() as u64 + 1,
            customer_name: submission.customer_name,
            amount: submission.amount,
            days_overdue: submission.days_overdue,
            status: CaseStatus::Active,
            resolved: false,
            opened_on: Local::now().date_naive(),
        };

        let index = store.append(case.clone());
        store.assign(DEFAULT_AGENT_ID, index);

        info!(
            case_id = case.id,
            agent_id = DEFAULT_AGENT_ID,
            priority = assessment.priority.label(),
            "case opened"
        );

        Ok(CreatedCase { case, assessment })
    }

    /// Admin dashboard counters. `active_cases` is the raw case count and
    /// `resolved_today` the resolved-flag count; neither filters by status
    /// date yet.
    pub fn dashboard_summary(&self) -> DashboardSummary {
        let store = self.store.lock().expect("case store mutex poisoned");
        let resolved = store.all().iter().filter(|case| case.resolved).count();

        DashboardSummary {
            total_agents: TOTAL_AGENTS,
            active_cases: store.len(),
            resolved_today: resolved,
        }
    }

    /// Per-agent dashboard. Agents with nothing assigned get a welcome and
    /// an empty case list.
    pub fn agent_dashboard(&self, agent_id: AgentId) -> AgentDashboard {
        let store = self.store.lock().expect("case store mutex poisoned");
        let assigned_cases = store
            .assignments_for(agent_id)
            .into_iter()
            .map(Case::display_line)
            .collect();

        AgentDashboard {
            agent_id,
            message: format!("Welcome, DCA Agent #{agent_id}"),
            assigned_cases,
        }
    }
}

impl Default for CaseService {
    fn default() -> Self {
        Self::new(CaseStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Priority;

    fn submission(name: &str, amount: f64, days_overdue: u32) -> CaseSubmission {
        CaseSubmission {
            customer_name: name.to_string(),
            amount,
            days_overdue,
        }
    }

    #[test]
    fn created_cases_get_dense_sequential_ids() {
        let service = CaseService::default();
        for expected in 1..=5u64 {
            let created = service
                .create_case(submission("Customer", 100.0, 1))
                .expect("case created");
            assert_eq!(created.case.id, expected);
        }
    }

    #[test]
    fn new_cases_start_active_and_unresolved() {
        let service = CaseService::default();
        let created = service
            .create_case(submission("Alice", 25_000.0, 45))
            .expect("case created");

        assert_eq!(created.case.status, CaseStatus::Active);
        assert!(!created.case.resolved);
        assert_eq!(created.assessment.priority, Priority::Medium);
    }

    #[test]
    fn rejected_submission_mutates_nothing() {
        let service = CaseService::default();
        assert!(service.create_case(submission("", 100.0, 1)).is_err());
        assert_eq!(service.dashboard_summary().active_cases, 0);
        assert!(service.agent_dashboard(DEFAULT_AGENT_ID).assigned_cases.is_empty());
    }

    #[test]
    fn dashboard_counts_track_creations() {
        let service = CaseService::default();
        service
            .create_case(submission("Alice", 100.0, 1))
            .expect("case created");
        service
            .create_case(submission("Bob", 200.0, 2))
            .expect("case created");

        let summary = service.dashboard_summary();
        assert_eq!(summary.total_agents, TOTAL_AGENTS);
        assert_eq!(summary.active_cases, 2);
        assert_eq!(summary.resolved_today, 0);
    }

    #[test]
    fn default_agent_sees_new_cases_in_order() {
        let service = CaseService::default();
        service
            .create_case(submission("Alice", 25_000.0, 45))
            .expect("case created");
        service
            .create_case(submission("Bob", 50.0, 3))
            .expect("case created");

        let dashboard = service.agent_dashboard(DEFAULT_AGENT_ID);
        assert_eq!(dashboard.agent_id, DEFAULT_AGENT_ID);
        assert_eq!(
            dashboard.assigned_cases,
            vec![
                "Alice - $25000.00 (45 days overdue)".to_string(),
                "Bob - $50.00 (3 days overdue)".to_string(),
            ]
        );
    }

    #[test]
    fn unknown_agent_dashboard_is_empty_not_an_error() {
        let service = CaseService::default();
        let dashboard = service.agent_dashboard(99);
        assert_eq!(dashboard.agent_id, 99);
        assert!(dashboard.assigned_cases.is_empty());
        assert!(dashboard.message.contains("#99"));
    }

    #[test]
    fn concurrent_submissions_keep_ids_dense() {
        use std::sync::Arc;

        let service = Arc::new(CaseService::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        service
                            .create_case(CaseSubmission {
                                customer_name: "Customer".to_string(),
                                amount: 10.0,
                                days_overdue: 1,
                            })
                            .expect("case created");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker finished");
        }

        let summary = service.dashboard_summary();
        assert_eq!(summary.active_cases, 200);
        assert_eq!(
            service.agent_dashboard(DEFAULT_AGENT_ID).assigned_cases.len(),
            200
        );
    }
}
