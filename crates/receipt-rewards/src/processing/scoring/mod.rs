mod rules;

use serde::Serialize;

use super::domain::Receipt;

/// Stateless engine applying the fixed rule set to a validated receipt.
///
/// Scoring is a pure function: the same receipt always yields the same
/// summary, and no rule consults previously accumulated points.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, receipt: &Receipt) -> ScoreSummary {
        let (components, total_points) = rules::score_receipt(receipt);
        ScoreSummary {
            total_points,
            components,
        }
    }
}

/// Rules contributing to a receipt's score, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleKind {
    RetailerName,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
}

/// Discrete contribution to a score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub rule: RuleKind,
    pub points: u64,
    pub note: String,
}

/// Scoring output: the composite points total and the per-rule trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub total_points: u64,
    pub components: Vec<ScoreComponent>,
}

impl ScoreSummary {
    /// Human-readable breakdown, one line per triggered rule, ending with
    /// the total.
    pub fn breakdown(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .components
            .iter()
            .map(|component| component.note.clone())
            .collect();
        lines.push(format!("Total: {} points", self.total_points));
        lines
    }
}
