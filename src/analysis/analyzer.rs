//! Per-category analyzers and the shared completeness/priority helpers.

use once_cell::sync::Lazy;

use super::rules::{self, RuleTable};
use super::{CategoryAnalysis, Priority};
use crate::answers::AnswerValue;
use crate::catalog::{self, Category, Question};

/// Common interface of the five category analyzers.
pub trait CategoryAnalyzer {
    fn category(&self) -> Category;

    /// Insight for one answered question, if any.
    fn insight(&self, question: &Question, answer: &AnswerValue) -> Option<String>;

    /// `answered` holds only answered questions, in catalog order. Entries
    /// belonging to another category are ignored.
    fn analyze(&self, answered: &[(&Question, &AnswerValue)]) -> CategoryAnalysis {
        let category = self.category();
        let own: Vec<&(&Question, &AnswerValue)> = answered
            .iter()
            .filter(|(q, _)| q.category == category)
            .collect();

        let key_insights: Vec<String> = own
            .iter()
            .filter_map(|(q, a)| self.insight(q, a))
            .collect();

        let priority = Priority::from_insight_count(key_insights.len());
        let summary = summarize(category, key_insights.len());

        CategoryAnalysis {
            completeness: completeness(own.len(), catalog::questions_of(category).len()),
            key_insights,
            priority,
            summary,
        }
    }
}

/// Analyzer backed by a rule table keyed by question id.
pub struct RuleTableAnalyzer {
    category: Category,
    rules: RuleTable,
}

impl CategoryAnalyzer for RuleTableAnalyzer {
    fn category(&self) -> Category {
        self.category
    }

    fn insight(&self, question: &Question, answer: &AnswerValue) -> Option<String> {
        self.rules
            .iter()
            .find(|(id, _)| *id == question.id)
            .and_then(|(_, rule)| rule.apply(question, answer))
    }
}

// Indexed by `Category::index`.
static ANALYZERS: Lazy<Vec<RuleTableAnalyzer>> = Lazy::new(|| {
    vec![
        RuleTableAnalyzer {
            category: Category::Time,
            rules: rules::TIME_RULES,
        },
        RuleTableAnalyzer {
            category: Category::Social,
            rules: rules::SOCIAL_RULES,
        },
        RuleTableAnalyzer {
            category: Category::Mental,
            rules: rules::MENTAL_RULES,
        },
        RuleTableAnalyzer {
            category: Category::Physical,
            rules: rules::PHYSICAL_RULES,
        },
        RuleTableAnalyzer {
            category: Category::Financial,
            rules: rules::FINANCIAL_RULES,
        },
    ]
});

pub fn analyzer_for(category: Category) -> &'static dyn CategoryAnalyzer {
    &ANALYZERS[category.index()]
}

/// Analyze one category given its answered questions.
pub fn analyze_category(
    category: Category,
    answered: &[(&Question, &AnswerValue)],
) -> CategoryAnalysis {
    analyzer_for(category).analyze(answered)
}

/// Percentage of answered questions; 0 when the category has no questions.
pub fn completeness(answered: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (answered.min(total) as f64 / total as f64) * 100.0
}

pub fn summarize(category: Category, insight_count: usize) -> String {
    let title = category.title();
    match insight_count {
        0 => format!("Your {title} area needs more exploration to develop a clear vision."),
        n if n >= 3 => format!(
            "You have a well-developed vision for your {title} with clear preferences and goals."
        ),
        _ => format!("Your {title} vision is emerging with some clear preferences identified."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerMap;

    #[test]
    fn test_completeness_guards_empty_category() {
        assert_eq!(completeness(0, 0), 0.0);
        assert_eq!(completeness(2, 5), 40.0);
        assert_eq!(completeness(5, 5), 100.0);
    }

    #[test]
    fn test_analyzer_registry_matches_category() {
        for category in Category::ALL {
            assert_eq!(analyzer_for(category).category(), category);
        }
    }

    #[test]
    fn test_unanswered_category_is_empty_and_low() {
        let analysis = analyze_category(Category::Mental, &[]);
        assert_eq!(analysis.completeness, 0.0);
        assert!(analysis.key_insights.is_empty());
        assert_eq!(analysis.priority, Priority::Low);
        assert_eq!(
            analysis.summary,
            "Your Mental Wealth area needs more exploration to develop a clear vision."
        );
    }

    #[test]
    fn test_insights_follow_question_order() {
        let mut answers = AnswerMap::new();
        answers.insert("physical_5", "long walks and early nights");
        answers.insert("physical_2", "mindful");
        answers.insert("physical_1", "strong and light");
        answers.insert("physical_3", "climbing");
        answers.insert("physical_4", 3);

        let analysis = analyze_category(
            Category::Physical,
            &answers.for_category(Category::Physical),
        );
        assert_eq!(analysis.completeness, 100.0);
        assert_eq!(
            analysis.key_insights,
            vec![
                "Has a clear vision for physical wellbeing",
                "Food relationship: Mindful, intentional nourishment",
                "Identified enjoyable movement and exercise preferences",
                "Understands the importance of rest and recovery",
            ]
        );
        assert_eq!(analysis.priority, Priority::High);
        assert!(analysis.summary.starts_with("You have a well-developed vision"));
    }

    #[test]
    fn test_other_category_entries_are_ignored() {
        let mut answers = AnswerMap::new();
        answers.insert("time_4", "four day week");
        let time = answers.for_category(Category::Time);
        let analysis = analyze_category(Category::Social, &time);
        assert_eq!(analysis.completeness, 0.0);
        assert!(analysis.key_insights.is_empty());
    }

    #[test]
    fn test_wrong_typed_answer_counts_but_emits_nothing() {
        let mut answers = AnswerMap::new();
        answers.insert("financial_1", 7);
        let analysis = analyze_category(
            Category::Financial,
            &answers.for_category(Category::Financial),
        );
        assert_eq!(analysis.completeness, 20.0);
        assert!(analysis.key_insights.is_empty());
    }

    #[test]
    fn test_summary_thresholds() {
        assert!(summarize(Category::Time, 1).contains("is emerging"));
        assert!(summarize(Category::Time, 2).contains("is emerging"));
        assert!(summarize(Category::Time, 3).contains("well-developed"));
    }
}
