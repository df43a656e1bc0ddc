/// Exam setup wizard module
///
/// Walks a user through three gated steps and produces a finalized
/// generation request at the end.
///
/// ## Architecture
///
/// ```text
/// WizardFlow
///   ├── WizardState (step cursor, collections, settings)
///   │     ├── ItemCollection (subjects)
///   │     ├── ItemCollection (question types)
///   │     └── ExamSettings (count, difficulty, attachment)
///   ├── WizardStep (enum of all steps)
///   └── GenerationRequest (built at submit time)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use smartbank_edu::wizard::{CollectionKind, WizardFlow};
///
/// let mut flow = WizardFlow::new();
/// flow.toggle(CollectionKind::Subjects, "math")?;
/// flow.advance();
/// flow.toggle(CollectionKind::QuestionTypes, "essay")?;
/// flow.advance();
/// let request = flow.submit(&mut sink)?;
/// ```
///
/// ## Steps
///
/// 1. **Subjects** - Choose which subjects the exam covers (at least one)
/// 2. **Questions** - Choose the question formats (at least one)
/// 3. **Generate** - Tune settings, attach a reference file, submit

pub mod flow;
pub mod items;
pub mod request;
pub mod settings;
pub mod state;
pub mod steps;

// Re-export commonly used types
pub use flow::{NavigationResult, WizardFlow};
pub use items::{CollectionKind, ItemCollection, SelectableItem};
pub use request::GenerationRequest;
pub use settings::{AttachedFile, Difficulty, ExamSettings, SettingsPatch};
pub use state::WizardState;
pub use steps::WizardStep;
