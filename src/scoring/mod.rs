//! Heuristic scoring for collection cases.
//!
//! Every function here is a pure rule over the overdue amount and the number
//! of days overdue. Inputs are assumed non-negative; the service layer
//! rejects anything else before calling in.

use serde::Serialize;

/// Qualitative urgency tier for a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// The three heuristic metrics for a case, computed together at creation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CaseAssessment {
    pub priority: Priority,
    pub recovery_probability: u8,
    pub risk_score: u8,
}

pub fn assess(amount: f64, days_overdue: u32) -> CaseAssessment {
    CaseAssessment {
        priority: priority_of(amount, days_overdue),
        recovery_probability: recovery_probability(amount, days_overdue),
        risk_score: risk_score(amount, days_overdue),
    }
}

/// Priority tier. Tiers are checked high to low and the first match wins,
/// so a long-overdue small debt still ranks High.
pub fn priority_of(amount: f64, days_overdue: u32) -> Priority {
    if days_overdue > 60 || amount > 50_000.0 {
        Priority::High
    } else if days_overdue > 30 || amount > 20_000.0 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Estimated probability (in percent) of recovering the amount.
///
/// Starts at 80% and loses one point per two days overdue and one point per
/// 5000 of amount, clamped to [5, 95]. Divisions floor toward zero.
pub fn recovery_probability(amount: f64, days_overdue: u32) -> u8 {
    let base: i64 = 80;
    let penalty_days = i64::from(days_overdue / 2);
    let penalty_amount = (amount / 5_000.0).floor() as i64;
    let probability = base - penalty_days - penalty_amount;
    probability.clamp(5, 95) as u8
}

/// Additive risk score in [1, 10]: one point per 15 days overdue plus one
/// point per 10000 of amount on top of a base of 1, capped at 10.
pub fn risk_score(amount: f64, days_overdue: u32) -> u8 {
    let score = 1 + i64::from(days_overdue / 15) + (amount / 10_000.0).floor() as i64;
    score.min(10) as u8
}
