//! Prompt builders for the generation capability.

use serde_json::Value;

use crate::analysis::{FocusArea, Theme};
use crate::answers::AnswerMap;
use crate::catalog::Category;

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

pub fn follow_up_prompt(question: &str, answer: &str, context: &Value) -> String {
    format!(
        "User just answered this question: \"{question}\"\n\
         Their answer was: \"{answer}\"\n\n\
         Context: {context}\n\n\
         Generate 1-2 thoughtful follow-up questions that would help them go deeper into their \
         response or clarify their vision. Make the questions conversational and supportive."
    )
}

pub fn category_insights_prompt(category: Option<Category>, answers: &AnswerMap) -> String {
    match category {
        Some(category) => format!(
            "Analyze these answers for the {} wealth category and provide insights: {}",
            category,
            to_json(answers)
        ),
        None => format!(
            "Analyze these life vision answers and identify themes, values, and insights: {}",
            to_json(answers)
        ),
    }
}

pub fn recommendations_prompt(answers: &AnswerMap, focus_areas: &[FocusArea]) -> String {
    format!(
        "Based on these life vision answers: {}\n\
         And these focus areas: {}\n\n\
         Generate 3-5 specific, actionable recommendations for the next 90 days.\n\
         Make them concrete and tied to the user's specific responses.",
        to_json(answers),
        to_json(focus_areas)
    )
}

pub fn vision_statement_prompt(answers: &AnswerMap, themes: &[Theme]) -> String {
    format!(
        "Based on these comprehensive life vision answers: {}\n\
         And these identified themes: {}\n\n\
         Generate a compelling, personal life vision statement that:\n\
         1. Draws on all five wealth categories\n\
         2. Reflects the user's authentic voice and values\n\
         3. Is inspiring yet grounded in their specific responses\n\
         4. Is 2-3 paragraphs long\n\n\
         Make it feel personal and specific to their answers, not generic.",
        to_json(answers),
        to_json(themes)
    )
}
