//! Static category and question catalog.
//!
//! Everything here is fixed at compile time. Iteration order of
//! [`Category::ALL`] is the canonical ordering used by the analysis, the
//! ranker's tie-break, and the questionnaire cursor.

mod questions;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VisionGuideError;

/// One of the five fixed life domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Time,
    Social,
    Mental,
    Physical,
    Financial,
}

/// Display metadata for a category.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub summary: &'static str,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Time,
        Category::Social,
        Category::Mental,
        Category::Physical,
        Category::Financial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Time => "time",
            Category::Social => "social",
            Category::Mental => "mental",
            Category::Physical => "physical",
            Category::Financial => "financial",
        }
    }

    /// Position in the fixed category ordering.
    pub fn index(&self) -> usize {
        match self {
            Category::Time => 0,
            Category::Social => 1,
            Category::Mental => 2,
            Category::Physical => 3,
            Category::Financial => 4,
        }
    }

    pub fn info(&self) -> CategoryInfo {
        match self {
            Category::Time => CategoryInfo {
                title: "Time Wealth",
                description: "How you spend your time",
                icon: "⏰",
                summary: "Your relationship with time and how you choose to spend it",
            },
            Category::Social => CategoryInfo {
                title: "Social Wealth",
                description: "Who you spend time with",
                icon: "👥",
                summary: "The relationships and community connections in your life",
            },
            Category::Mental => CategoryInfo {
                title: "Mental Wealth",
                description: "Your life purpose and meaning",
                icon: "🧠",
                summary: "Your intellectual growth, purpose, and mental fulfillment",
            },
            Category::Physical => CategoryInfo {
                title: "Physical Wealth",
                description: "Diet, fitness, and health",
                icon: "💪",
                summary: "Your physical health, energy, and body relationship",
            },
            Category::Financial => CategoryInfo {
                title: "Financial Wealth",
                description: "Money needed for your desired lifestyle",
                icon: "💰",
                summary: "Your relationship with money and financial goals",
            },
        }
    }

    pub fn title(&self) -> &'static str {
        self.info().title
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = VisionGuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if let Some(found) = Category::ALL.iter().find(|c| c.as_str() == needle) {
            return Ok(*found);
        }

        let mut message = format!(
            "Unknown category: '{}'. Available categories: {}",
            s.trim(),
            Category::ALL.map(|c| c.as_str()).join(", ")
        );
        if let Some(closest) = closest_category(&needle) {
            message.push_str(&format!(". Did you mean '{}'?", closest));
        }
        Err(VisionGuideError::Validation { message })
    }
}

/// Closest category name by edit distance, if reasonably close.
fn closest_category(input: &str) -> Option<&'static str> {
    Category::ALL
        .iter()
        .map(|c| (c.as_str(), strsim::levenshtein(input, c.as_str())))
        .filter(|(_, distance)| *distance <= 3)
        .min_by_key(|(_, distance)| *distance)
        .map(|(name, _)| name)
}

/// A selectable option of a single-choice question.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Numeric range shared by rating scales and sliders.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scale {
    pub min: i32,
    pub max: i32,
    pub min_label: &'static str,
    pub max_label: &'static str,
}

impl Scale {
    pub fn contains(&self, value: f64) -> bool {
        value >= f64::from(self.min) && value <= f64::from(self.max)
    }
}

/// Input kind together with its type-specific schema.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    #[serde(rename = "multiple_choice")]
    SingleChoice { options: &'static [ChoiceOption] },
    #[serde(rename = "rating_scale")]
    NumericScale { scale: Scale },
    Slider { scale: Scale },
    #[serde(rename = "open_ended")]
    FreeText { placeholder: &'static str },
}

impl QuestionKind {
    pub fn name(&self) -> &'static str {
        match self {
            QuestionKind::SingleChoice { .. } => "multiple_choice",
            QuestionKind::NumericScale { .. } => "rating_scale",
            QuestionKind::Slider { .. } => "slider",
            QuestionKind::FreeText { .. } => "open_ended",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub category: Category,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub required: bool,
}

impl Question {
    /// Display label for a stored choice value, if this is a choice question
    /// and the value is one of its options.
    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        match self.kind {
            QuestionKind::SingleChoice { options } => options
                .iter()
                .find(|opt| opt.value == value)
                .map(|opt| opt.label),
            _ => None,
        }
    }
}

/// Ordered questions belonging to `category`.
pub fn questions_of(category: Category) -> &'static [Question] {
    match category {
        Category::Time => &questions::TIME,
        Category::Social => &questions::SOCIAL,
        Category::Mental => &questions::MENTAL,
        Category::Physical => &questions::PHYSICAL,
        Category::Financial => &questions::FINANCIAL,
    }
}

/// Every question, concatenated in fixed category order.
pub fn all_questions() -> Vec<&'static Question> {
    Category::ALL
        .iter()
        .flat_map(|c| questions_of(*c).iter())
        .collect()
}

/// Look up a question by identifier.
pub fn question(id: &str) -> Option<&'static Question> {
    Category::ALL
        .iter()
        .flat_map(|c| questions_of(*c).iter())
        .find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_has_five_questions() {
        for category in Category::ALL {
            let qs = questions_of(category);
            assert_eq!(qs.len(), 5, "{category}");
            assert!(qs.iter().all(|q| q.category == category));
        }
        assert_eq!(all_questions().len(), 25);
    }

    #[test]
    fn test_question_ids_unique_and_ordered() {
        let ids: Vec<&str> = all_questions().iter().map(|q| q.id).collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(ids.first(), Some(&"time_1"));
        assert_eq!(ids.last(), Some(&"financial_5"));
    }

    #[test]
    fn test_option_label_lookup() {
        let q = question("social_1").unwrap();
        assert_eq!(
            q.option_label("deep_few"),
            Some("A few deep, meaningful relationships")
        );
        assert_eq!(q.option_label("nope"), None);
        assert_eq!(question("time_3").unwrap().option_label("x"), None);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Physical".parse::<Category>().unwrap(), Category::Physical);
        let err = "socail".parse::<Category>().unwrap_err().to_string();
        assert!(err.contains("Did you mean 'social'"));
        let err = "zzzzzzzzzz".parse::<Category>().unwrap_err().to_string();
        assert!(!err.contains("Did you mean"));
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }
}
