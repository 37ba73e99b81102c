//! Questionnaire session: an immutable cursor over the catalog plus answers.
//!
//! Every transition returns a new value; nothing is mutated in place.

use serde::{Deserialize, Serialize};

use crate::analysis::{GlobalAnalysis, analyze_answers};
use crate::answers::{AnswerMap, AnswerValue};
use crate::catalog::{self, Category, Question};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireSession {
    answers: AnswerMap,
    current_index: usize,
    is_complete: bool,
}

impl QuestionnaireSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from stored answers and cursor. Out-of-range cursors are
    /// clamped to the last question.
    pub fn resume(answers: AnswerMap, current_index: usize) -> Self {
        let last = total_questions().saturating_sub(1);
        Self {
            answers,
            current_index: current_index.min(last),
            is_complete: false,
        }
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn answer(&self, id: &str) -> Option<&AnswerValue> {
        self.answers.get(id)
    }

    pub fn with_answer(&self, id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        let mut answers = self.answers.clone();
        answers.insert(id, value);
        Self {
            answers,
            ..self.clone()
        }
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        catalog::all_questions().get(self.current_index).copied()
    }

    pub fn current_category(&self) -> Category {
        self.current_question()
            .map(|q| q.category)
            .unwrap_or(Category::Time)
    }

    pub fn current_category_index(&self) -> usize {
        self.current_category().index()
    }

    pub fn question_index_in_category(&self) -> usize {
        let before: usize = Category::ALL[..self.current_category_index()]
            .iter()
            .map(|c| catalog::questions_of(*c).len())
            .sum();
        self.current_index.saturating_sub(before)
    }

    /// Overall progress through the questionnaire, 0..=100.
    pub fn progress(&self) -> f64 {
        (self.current_index + 1) as f64 / total_questions() as f64 * 100.0
    }

    /// Progress within the current category, 0..=100.
    pub fn category_progress(&self) -> f64 {
        let in_category = catalog::questions_of(self.current_category()).len();
        (self.question_index_in_category() + 1) as f64 / in_category as f64 * 100.0
    }

    fn current_satisfied(&self) -> bool {
        match self.current_question() {
            Some(q) => !q.required || self.answers.is_answered(q.id),
            None => false,
        }
    }

    pub fn can_go_next(&self) -> bool {
        self.current_satisfied() && self.current_index + 1 < total_questions()
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Advance one question. On the last question, a satisfied answer
    /// completes the session instead.
    pub fn next(&self) -> Self {
        if self.can_go_next() {
            Self {
                current_index: self.current_index + 1,
                ..self.clone()
            }
        } else if self.current_index + 1 == total_questions() && self.current_satisfied() {
            Self {
                is_complete: true,
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }

    pub fn previous(&self) -> Self {
        if self.can_go_previous() {
            Self {
                current_index: self.current_index - 1,
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }

    /// Jump to `index`; out-of-range indices leave the session unchanged.
    pub fn go_to(&self, index: usize) -> Self {
        if index < total_questions() {
            Self {
                current_index: index,
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }

    /// Every question of `category` with its answer, `None` when unanswered.
    pub fn answers_by_category(&self, category: Category) -> Vec<(&'static str, Option<&AnswerValue>)> {
        catalog::questions_of(category)
            .iter()
            .map(|q| (q.id, self.answers.answered(q.id)))
            .collect()
    }

    pub fn is_category_complete(&self, category: Category) -> bool {
        catalog::questions_of(category)
            .iter()
            .all(|q| !q.required || self.answers.is_answered(q.id))
    }

    /// Run the analysis over this session's answers.
    pub fn analysis(&self) -> GlobalAnalysis {
        analyze_answers(&self.answers)
    }
}

fn total_questions() -> usize {
    Category::ALL
        .iter()
        .map(|c| catalog::questions_of(*c).len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(mut session: QuestionnaireSession, count: usize) -> QuestionnaireSession {
        for _ in 0..count {
            let q = session.current_question().unwrap();
            let value: AnswerValue = match q.kind {
                catalog::QuestionKind::FreeText { .. } => "something".into(),
                catalog::QuestionKind::SingleChoice { options } => options[0].value.into(),
                _ => 5.into(),
            };
            session = session.with_answer(q.id, value).next();
        }
        session
    }

    #[test]
    fn test_required_answer_gates_next() {
        let session = QuestionnaireSession::new();
        assert!(!session.can_go_next());
        assert_eq!(session.next().current_index(), 0);

        let session = session.with_answer("time_1", "mixed");
        assert!(session.can_go_next());
        assert_eq!(session.next().current_index(), 1);
    }

    #[test]
    fn test_empty_answer_does_not_satisfy_required() {
        let session = QuestionnaireSession::new().with_answer("time_1", "");
        assert!(!session.can_go_next());
        assert!(session.with_answer("time_1", " ").can_go_next());
    }

    #[test]
    fn test_category_boundaries() {
        let session = answer_all(QuestionnaireSession::new(), 5);
        assert_eq!(session.current_index(), 5);
        assert_eq!(session.current_category(), Category::Social);
        assert_eq!(session.question_index_in_category(), 0);
        assert_eq!(session.category_progress(), 20.0);
        assert!(session.is_category_complete(Category::Time));
        assert!(!session.is_category_complete(Category::Social));

        let back = session.previous();
        assert_eq!(back.current_category(), Category::Time);
        assert_eq!(back.question_index_in_category(), 4);
    }

    #[test]
    fn test_completion_on_last_question() {
        let session = answer_all(QuestionnaireSession::new(), 24);
        assert_eq!(session.current_index(), 24);
        assert!(!session.is_complete());
        assert!(!session.can_go_next());
        assert_eq!(session.progress(), 100.0);

        let done = answer_all(session, 1);
        assert!(done.is_complete());
        assert_eq!(done.current_index(), 24);
        assert!(
            Category::ALL
                .iter()
                .all(|c| done.is_category_complete(*c))
        );
    }

    #[test]
    fn test_go_to_and_previous_bounds() {
        let session = QuestionnaireSession::new();
        assert!(!session.can_go_previous());
        assert_eq!(session.previous(), session);
        assert_eq!(session.go_to(99), session);
        let jumped = session.go_to(12);
        assert_eq!(jumped.current_category(), Category::Mental);
        assert_eq!(jumped.question_index_in_category(), 2);
    }

    #[test]
    fn test_transitions_do_not_mutate_original() {
        let original = QuestionnaireSession::new();
        let _ = original.with_answer("time_1", "mixed").next();
        assert!(original.answers().is_empty());
        assert_eq!(original.current_index(), 0);
    }

    #[test]
    fn test_resume_clamps_cursor() {
        let session = QuestionnaireSession::resume(AnswerMap::new(), 400);
        assert_eq!(session.current_index(), 24);
    }

    #[test]
    fn test_answers_by_category_lists_every_question() {
        let session = QuestionnaireSession::new().with_answer("social_2", 40);
        let social = session.answers_by_category(Category::Social);
        assert_eq!(social.len(), 5);
        assert_eq!(social[1], ("social_2", Some(&AnswerValue::Number(40.0))));
        assert_eq!(social[0].1, None);
    }
}
