use std::collections::HashMap;

use super::domain::{AgentId, Case};

/// In-memory case list plus the agent assignment table.
///
/// Assignments hold indices into the case list rather than clones, so a
/// mutation of a case is visible through every agent view. The store does
/// no locking itself; [`CaseService`](super::service::CaseService) guards
/// it as a single unit.
#[derive(Debug, Default)]
pub struct CaseStore {
    cases: Vec<Case>,
    assignments: HashMap<AgentId, Vec<usize>>,
}

impl CaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a case and returns its index. Id uniqueness is the caller's
    /// contract; the store only preserves insertion order.
    pub fn append(&mut self, case: Case) -> usize {
        self.cases.push(case);
        self.cases.len() - 1
    }

    /// All cases in insertion order.
    pub fn all(&self) -> &[Case] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Appends a case index to the agent's list, creating the list on first
    /// assignment.
    pub fn assign(&mut self, agent_id: AgentId, case_index: usize) {
        self.assignments.entry(agent_id).or_default().push(case_index);
    }

    /// The agent's assigned cases in assignment order. Unknown agents get an
    /// empty list, not an error.
    pub fn assignments_for(&self, agent_id: AgentId) -> Vec<&Case> {
        self.assignments
            .get(&agent_id)
            .map(|indices| indices.iter().map(|&i| &self.cases[i]).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::domain::CaseStatus;
    use chrono::NaiveDate;

    fn case(id: u64, name: &str) -> Case {
        Case {
            id,
            customer_name: name.to_string(),
            amount: 1_000.0,
            days_overdue: 5,
            status: CaseStatus::Active,
            resolved: false,
            opened_on: NaiveDate::from_ymd_opt(2026, 8, 23).expect("valid date"),
        }
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut store = CaseStore::new();
        store.append(case(1, "Alice"));
        store.append(case(2, "Bob"));

        let names: Vec<_> = store
            .all()
            .iter()
            .map(|c| c.customer_name.as_str())
            .collect();
        assert_eq!(names, ["Alice", "Bob"]);
    }

    #[test]
    fn assignments_share_the_stored_case() {
        let mut store = CaseStore::new();
        let index = store.append(case(1, "Alice"));
        store.assign(7, index);

        let assigned = store.assignments_for(7);
        assert_eq!(assigned.len(), 1);
        // Same record as the store view, not a copy.
        assert!(std::ptr::eq(assigned[0], &store.all()[0]));
    }

    #[test]
    fn unknown_agent_resolves_to_empty_list() {
        let store = CaseStore::new();
        assert!(store.assignments_for(42).is_empty());
    }

    #[test]
    fn assignment_order_is_kept() {
        let mut store = CaseStore::new();
        let first = store.append(case(1, "Alice"));
        let second = store.append(case(2, "Bob"));
        store.assign(1, second);
        store.assign(1, first);

        let names: Vec<_> = store
            .assignments_for(1)
            .iter()
            .map(|c| c.customer_name.as_str())
            .collect();
        assert_eq!(names, ["Bob", "Alice"]);
    }
}
