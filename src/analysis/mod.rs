//! Answer analysis: per-category scoring, themes, and focus areas.
//! Deterministic and side-effect free.

pub mod analyzer;
pub mod focus;
pub mod rules;
pub mod themes;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::answers::AnswerMap;
use crate::catalog::Category;

pub use analyzer::{CategoryAnalyzer, analyze_category};
pub use focus::{focus_score, rank_focus_areas};
pub use themes::{Theme, detect_themes};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn from_insight_count(count: usize) -> Self {
        if count >= 4 {
            Priority::High
        } else if count >= 2 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAnalysis {
    /// 0..=100
    pub completeness: f64,
    pub key_insights: Vec<String>,
    pub priority: Priority,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusArea {
    pub category: Category,
    pub reason: String,
}

/// Composite result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalAnalysis {
    pub themes: Vec<Theme>,
    /// Reserved; always empty.
    pub values: Vec<String>,
    /// One entry per category.
    pub priorities: BTreeMap<Category, CategoryAnalysis>,
    /// Reserved; always empty.
    pub conflicts: Vec<String>,
    pub focus_areas: Vec<FocusArea>,
}

impl GlobalAnalysis {
    pub fn category(&self, category: Category) -> Option<&CategoryAnalysis> {
        self.priorities.get(&category)
    }

    pub fn has_theme(&self, theme: Theme) -> bool {
        self.themes.contains(&theme)
    }

    pub fn is_focus(&self, category: Category) -> bool {
        self.focus_areas.iter().any(|f| f.category == category)
    }
}

/// Analyze a full answer map. Unknown ids and empty answers are ignored.
pub fn analyze_answers(answers: &AnswerMap) -> GlobalAnalysis {
    let priorities: BTreeMap<Category, CategoryAnalysis> = Category::ALL
        .iter()
        .map(|c| (*c, analyze_category(*c, &answers.for_category(*c))))
        .collect();

    let themes = detect_themes(answers);
    let focus_areas = rank_focus_areas(&priorities);

    tracing::debug!(
        answers = answers.len(),
        themes = ?themes,
        focus = ?focus_areas.iter().map(|f| f.category).collect::<Vec<_>>(),
        "analysis complete"
    );

    GlobalAnalysis {
        themes,
        values: Vec::new(),
        priorities,
        conflicts: Vec::new(),
        focus_areas,
    }
}
