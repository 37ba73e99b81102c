//! Focus-area ranking over per-category analyses.

use std::collections::BTreeMap;

use super::{CategoryAnalysis, FocusArea, Priority};
use crate::catalog::Category;

pub const MAX_FOCUS_AREAS: usize = 3;

/// Completeness below this adds an incompleteness bonus to the score.
const COMPLETENESS_BONUS_CUTOFF: f64 = 80.0;

fn priority_weight(priority: Priority) -> f64 {
    match priority {
        Priority::High => 3.0,
        Priority::Medium => 2.0,
        Priority::Low => 1.0,
    }
}

/// `2 × insights + incompleteness bonus + priority weight`.
pub fn focus_score(analysis: &CategoryAnalysis) -> f64 {
    let mut score = analysis.key_insights.len() as f64 * 2.0;
    if analysis.completeness < COMPLETENESS_BONUS_CUTOFF {
        score += (100.0 - analysis.completeness) / 10.0;
    }
    score + priority_weight(analysis.priority)
}

pub fn focus_reason(category: Category, analysis: &CategoryAnalysis) -> String {
    let title = category.title();
    if analysis.key_insights.is_empty() {
        format!("{title} needs attention - opportunity to develop this area further.")
    } else if analysis.completeness < 50.0 {
        format!(
            "{title} is partially explored - completing this assessment will provide valuable insights."
        )
    } else {
        format!("{title} shows strong foundation - ready for targeted development.")
    }
}

/// Top categories by focus score. Ties keep the fixed category order.
pub fn rank_focus_areas(priorities: &BTreeMap<Category, CategoryAnalysis>) -> Vec<FocusArea> {
    let mut scored: Vec<(Category, f64, &CategoryAnalysis)> = Category::ALL
        .iter()
        .filter_map(|c| priorities.get(c).map(|a| (*c, focus_score(a), a)))
        .collect();

    // stable: equal scores stay in category order
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored
        .into_iter()
        .take(MAX_FOCUS_AREAS)
        .map(|(category, _, analysis)| FocusArea {
            category,
            reason: focus_reason(category, analysis),
        })
        .collect()
}
