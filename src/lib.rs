pub mod analysis;
pub mod answers;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generation;
pub mod report;
pub mod session;
pub mod storage;

pub use analysis::{GlobalAnalysis, analyze_answers};
pub use answers::{AnswerMap, AnswerValue};
pub use catalog::Category;
pub use error::{Result, VisionGuideError};

use std::path::Path;

/// Read an answers file: a JSON object of question id to string or number.
pub fn load_answers(path: &Path) -> Result<AnswerMap> {
    let content = std::fs::read_to_string(path).map_err(|e| VisionGuideError::Storage {
        message: format!("cannot read {}: {}", path.display(), e),
    })?;
    let answers: AnswerMap = serde_json::from_str(&content)?;
    for issue in answers.validation_issues() {
        tracing::warn!("{}: {}", path.display(), issue);
    }
    Ok(answers)
}
