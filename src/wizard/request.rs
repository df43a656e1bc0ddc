/// Generation request
///
/// The finalized payload handed to the exam-generation collaborator at
/// submit time. The wizard's responsibility ends here; whatever consumes
/// the request is outside the core.
use serde::Serialize;

use super::settings::Difficulty;

/// Finalized exam request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    /// Labels of selected subjects, in canonical catalog order
    pub subject_names: Vec<String>,

    /// Labels of selected question types, in canonical catalog order
    pub question_type_names: Vec<String>,

    /// Question count, already clamped to the valid range
    pub total_questions: u32,

    pub difficulty: Difficulty,

    /// Name of the attached reference file, if any
    pub attached_file_name: Option<String>,
}

impl GenerationRequest {
    /// Human-readable summary of the request
    pub fn summary(&self) -> String {
        format!(
            "Exam Generated!\n\n\
             Subjects: {}\n\
             Question Types: {}\n\
             Total Questions: {}\n\
             Difficulty: {}\n\
             Uploaded File: {}",
            self.subject_names.join(", "),
            self.question_type_names.join(", "),
            self.total_questions,
            self.difficulty,
            self.attached_file_name.as_deref().unwrap_or("None"),
        )
    }
}
