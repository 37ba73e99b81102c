//! Cross-category theme detection by keyword frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::answers::AnswerMap;

/// Minimum combined keyword count for a theme to be reported.
pub const THEME_THRESHOLD: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Autonomy,
    Growth,
    Connection,
    Creativity,
    Service,
    Balance,
    Achievement,
}

impl Theme {
    /// Declared order; detection output follows it.
    pub const ALL: [Theme; 7] = [
        Theme::Autonomy,
        Theme::Growth,
        Theme::Connection,
        Theme::Creativity,
        Theme::Service,
        Theme::Balance,
        Theme::Achievement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Autonomy => "autonomy",
            Theme::Growth => "growth",
            Theme::Connection => "connection",
            Theme::Creativity => "creativity",
            Theme::Service => "service",
            Theme::Balance => "balance",
            Theme::Achievement => "achievement",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Theme::Autonomy => &["freedom", "independence", "control", "choice", "flexible"],
            Theme::Growth => &["learn", "grow", "develop", "improve", "challenge"],
            Theme::Connection => &["relationship", "family", "friends", "community", "connect"],
            Theme::Creativity => &["creative", "art", "express", "create", "innovate"],
            Theme::Service => &["help", "serve", "contribute", "impact", "difference"],
            Theme::Balance => &["balance", "harmony", "equilibrium", "moderation"],
            Theme::Achievement => &["success", "accomplish", "achieve", "excel", "win"],
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every answer's string form joined by spaces, lower-cased.
pub fn corpus(answers: &AnswerMap) -> String {
    answers
        .iter()
        .map(|(_, value)| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Occurrences of `needle` in `haystack`, overlapping matches included.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack
        .char_indices()
        .filter(|(i, _)| haystack[*i..].starts_with(needle))
        .count()
}

/// Combined keyword count for `theme` in an already lower-cased corpus.
pub fn theme_score(corpus: &str, theme: Theme) -> usize {
    theme
        .keywords()
        .iter()
        .map(|kw| count_occurrences(corpus, kw))
        .sum()
}

/// Themes whose keyword count reaches [`THEME_THRESHOLD`], in declared order.
pub fn detect_themes(answers: &AnswerMap) -> Vec<Theme> {
    let corpus = corpus(answers);
    Theme::ALL
        .into_iter()
        .filter(|theme| theme_score(&corpus, *theme) >= THEME_THRESHOLD)
        .collect()
}
