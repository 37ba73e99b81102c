//! Answer values and the question-id keyed answer map.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::{self, Category, Question, QuestionKind};

/// A single recorded answer. Choice and free-text answers are text, scale and
/// slider answers are numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
}

impl AnswerValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            AnswerValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Text(_) => None,
        }
    }

    /// An empty string counts as no answer. Whitespace is still an answer.
    pub fn is_blank(&self) -> bool {
        match self {
            AnswerValue::Text(s) => s.is_empty(),
            AnswerValue::Number(n) => n.is_nan(),
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Number(n) => write!(f, "{}", n),
            AnswerValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        AnswerValue::Text(s)
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        AnswerValue::Number(n)
    }
}

impl From<i32> for AnswerValue {
    fn from(n: i32) -> Self {
        AnswerValue::Number(f64::from(n))
    }
}

/// Mapping from question identifier to answer. Absent keys are unanswered.
///
/// Deserializing is lenient: JSON values that are neither strings nor numbers
/// are dropped with a warning instead of failing the whole map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Value>",
    into = "BTreeMap<String, AnswerValue>"
)]
pub struct AnswerMap {
    values: BTreeMap<String, AnswerValue>,
}

impl From<AnswerMap> for BTreeMap<String, AnswerValue> {
    fn from(map: AnswerMap) -> Self {
        map.values
    }
}

impl From<BTreeMap<String, Value>> for AnswerMap {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let mut values = BTreeMap::new();
        for (id, value) in raw {
            match value {
                Value::String(s) => {
                    values.insert(id, AnswerValue::Text(s));
                }
                Value::Number(n) => match n.as_f64() {
                    Some(n) => {
                        values.insert(id, AnswerValue::Number(n));
                    }
                    None => tracing::warn!("Dropping non-finite numeric answer for '{}'", id),
                },
                Value::Null => {}
                other => tracing::warn!(
                    "Dropping unsupported answer for '{}': {}",
                    id,
                    other
                ),
            }
        }
        Self { values }
    }
}

impl<K: Into<String>, V: Into<AnswerValue>> FromIterator<(K, V)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.values.insert(id.into(), value.into());
    }

    pub fn remove(&mut self, id: &str) -> Option<AnswerValue> {
        self.values.remove(id)
    }

    /// Raw lookup, empty answers included.
    pub fn get(&self, id: &str) -> Option<&AnswerValue> {
        self.values.get(id)
    }

    /// Lookup that treats empty answers as absent.
    pub fn answered(&self, id: &str) -> Option<&AnswerValue> {
        self.values.get(id).filter(|v| !v.is_blank())
    }

    pub fn is_answered(&self, id: &str) -> bool {
        self.answered(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.values.iter()
    }

    /// Answered questions of `category`, in the category's question order.
    /// Unknown ids and empty answers are left out.
    pub fn for_category(&self, category: Category) -> Vec<(&'static Question, &AnswerValue)> {
        catalog::questions_of(category)
            .iter()
            .filter_map(|q| self.answered(q.id).map(|a| (q, a)))
            .collect()
    }

    /// Problems a caller may want to surface. The analysis ignores all of
    /// these; they never affect its result.
    pub fn validation_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        for (id, value) in &self.values {
            let Some(question) = catalog::question(id) else {
                issues.push(format!("unknown question id '{}'", id));
                continue;
            };
            match (question.kind, value) {
                (QuestionKind::SingleChoice { .. }, AnswerValue::Text(s)) => {
                    if !s.is_empty() && question.option_label(s).is_none() {
                        issues.push(format!("'{}' is not an option of {}", s, id));
                    }
                }
                (QuestionKind::FreeText { .. }, AnswerValue::Text(_)) => {}
                (
                    QuestionKind::NumericScale { scale } | QuestionKind::Slider { scale },
                    AnswerValue::Number(n),
                ) => {
                    if !scale.contains(*n) {
                        issues.push(format!(
                            "{} is outside {}..={} for {}",
                            n, scale.min, scale.max, id
                        ));
                    }
                }
                (kind, _) => issues.push(format!(
                    "{} expects a {} answer",
                    id,
                    match kind {
                        QuestionKind::NumericScale { .. } | QuestionKind::Slider { .. } => "numeric",
                        _ => "text",
                    }
                )),
            }
        }
        issues
    }
}
