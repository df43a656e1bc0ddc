/// Event types for the application
///
/// Events represent things that have happened (past tense). The wizard is
/// single-threaded and synchronous, so events are plain values the
/// front-end constructs after applying a command, for status lines and
/// structured logging.
use crate::wizard::items::CollectionKind;
use crate::wizard::steps::WizardStep;

/// Application events
#[derive(Debug, Clone)]
pub enum WizardEvent {
    /// The step cursor moved
    StepChanged { from: WizardStep, to: WizardStep },

    /// An item's selection was toggled
    SelectionChanged {
        kind: CollectionKind,
        id: String,
        selected: bool,
    },

    /// A settings field was updated
    SettingsChanged { field: SettingsField },

    /// A reference file was attached
    FileAttached { name: String, size_bytes: u64 },

    /// A navigation attempt was blocked
    NavigationBlocked { reason: String },

    /// The generation request was delivered
    ExamGenerated {
        subject_count: usize,
        question_type_count: usize,
        total_questions: u32,
    },
}

/// Settings field that changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    TotalQuestions,
    Difficulty,
}

impl WizardEvent {
    /// Get a human-readable description of the event
    pub fn description(&self) -> String {
        match self {
            WizardEvent::StepChanged { to, .. } => {
                format!("Moved to step {}: {}", to.number(), to.title())
            }
            WizardEvent::SelectionChanged { kind, id, selected } => {
                if *selected {
                    format!("Selected {} '{}'", kind, id)
                } else {
                    format!("Deselected {} '{}'", kind, id)
                }
            }
            WizardEvent::SettingsChanged { field } => {
                format!("Settings changed: {:?}", field)
            }
            WizardEvent::FileAttached { name, .. } => {
                format!("Attached reference file: {}", name)
            }
            WizardEvent::NavigationBlocked { reason } => {
                format!("Navigation blocked: {}", reason)
            }
            WizardEvent::ExamGenerated {
                subject_count,
                question_type_count,
                total_questions,
            } => {
                format!(
                    "Generated exam request: {} subjects, {} question types, {} questions",
                    subject_count, question_type_count, total_questions
                )
            }
        }
    }
}
