//! Insight rule tables, keyed by question identifier.
//!
//! Each entry turns one answered question into at most one insight. The
//! tables are plain data; the analyzer only walks them.

use crate::answers::AnswerValue;
use crate::catalog::Question;

#[derive(Debug, Clone, Copy)]
pub enum InsightRule {
    /// Numeric answer compared against inclusive low/high cut points.
    /// `middle: None` means values strictly between the cuts emit nothing.
    Bands {
        low_max: f64,
        low: &'static str,
        high_min: f64,
        high: &'static str,
        middle: Option<&'static str>,
    },
    /// Fixed statement for any non-empty text answer.
    Stated(&'static str),
    /// `prefix` + the first `max_chars` characters of the answer + "...".
    Excerpt { prefix: &'static str, max_chars: usize },
    /// `prefix` + the chosen option's label. Values that are not an option,
    /// numbers included, are echoed as given.
    Choice { prefix: &'static str },
}

impl InsightRule {
    /// Insight for `answer`, or `None` when the rule does not fire or the
    /// answer has the wrong shape for it.
    pub fn apply(&self, question: &Question, answer: &AnswerValue) -> Option<String> {
        match *self {
            InsightRule::Bands {
                low_max,
                low,
                high_min,
                high,
                middle,
            } => {
                let n = answer.as_number()?;
                if n <= low_max {
                    Some(low.to_string())
                } else if n >= high_min {
                    Some(high.to_string())
                } else {
                    middle.map(str::to_string)
                }
            }
            InsightRule::Stated(text) => answer
                .as_text()
                .filter(|s| !s.is_empty())
                .map(|_| text.to_string()),
            InsightRule::Excerpt { prefix, max_chars } => {
                let text = answer.as_text().filter(|s| !s.is_empty())?;
                let excerpt: String = text.chars().take(max_chars).collect();
                Some(format!("{prefix}{excerpt}..."))
            }
            InsightRule::Choice { prefix } => match answer {
                AnswerValue::Text(value) if value.is_empty() => None,
                AnswerValue::Text(value) => {
                    let label = question.option_label(value).unwrap_or(value.as_str());
                    Some(format!("{prefix}{label}"))
                }
                AnswerValue::Number(_) => Some(format!("{prefix}{answer}")),
            },
        }
    }
}

pub type RuleTable = &'static [(&'static str, InsightRule)];

pub static TIME_RULES: RuleTable = &[
    (
        "time_2",
        InsightRule::Bands {
            low_max: 4.0,
            low: "Low control over daily schedule - opportunity for improvement",
            high_min: 8.0,
            high: "High control over time - good foundation for optimization",
            middle: None,
        },
    ),
    (
        "time_3",
        InsightRule::Excerpt {
            prefix: "Energy patterns: ",
            max_chars: 100,
        },
    ),
    (
        "time_4",
        InsightRule::Stated("Has a clear vision for ideal time allocation"),
    ),
];

pub static SOCIAL_RULES: RuleTable = &[
    (
        "social_1",
        InsightRule::Choice {
            prefix: "Preferred social style: ",
        },
    ),
    (
        "social_2",
        InsightRule::Bands {
            low_max: 30.0,
            low: "Highly social - thrives on connection with others",
            high_min: 70.0,
            high: "Values solitude - needs significant alone time",
            middle: Some("Balanced social needs - flexible between alone and social time"),
        },
    ),
    (
        "social_4",
        InsightRule::Stated("Values community contribution and connection"),
    ),
];

pub static MENTAL_RULES: RuleTable = &[
    (
        "mental_1",
        InsightRule::Stated("Clear understanding of fulfilling activities"),
    ),
    (
        "mental_2",
        InsightRule::Stated("Identified meaningful problems to solve"),
    ),
    (
        "mental_3",
        InsightRule::Choice {
            prefix: "Primary purpose driver: ",
        },
    ),
    (
        "mental_4",
        InsightRule::Stated("Has identified important life pursuits to explore"),
    ),
];

pub static PHYSICAL_RULES: RuleTable = &[
    (
        "physical_1",
        InsightRule::Stated("Has a clear vision for physical wellbeing"),
    ),
    (
        "physical_2",
        InsightRule::Choice {
            prefix: "Food relationship: ",
        },
    ),
    (
        "physical_3",
        InsightRule::Stated("Identified enjoyable movement and exercise preferences"),
    ),
    (
        "physical_5",
        InsightRule::Stated("Understands the importance of rest and recovery"),
    ),
];

pub static FINANCIAL_RULES: RuleTable = &[
    (
        "financial_1",
        InsightRule::Stated("Clear vision for how money should enable desired lifestyle"),
    ),
    (
        "financial_2",
        InsightRule::Choice {
            prefix: "Money mindset: ",
        },
    ),
    (
        "financial_3",
        InsightRule::Stated("Has thought about financial sufficiency"),
    ),
    (
        "financial_5",
        InsightRule::Choice {
            prefix: "Preferred earning approach: ",
        },
    ),
];
