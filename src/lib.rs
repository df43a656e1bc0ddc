/// SmartBank EDU - exam setup wizard
///
/// A three-step wizard that collects subjects, question types, and exam
/// settings, then hands a finalized `GenerationRequest` to a
/// `GenerationSink` collaborator. The wizard core is UI-free and fully
/// exercisable from tests; the binary in `main.rs` drives it from a
/// terminal.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod generation;
pub mod wizard;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogEntry};
pub use commands::Command;
pub use config::Config;
pub use error::AppResult;
pub use events::{SettingsField, WizardEvent};
pub use generation::{ConsoleSink, GenerationSink, JsonSink};
pub use wizard::{
    AttachedFile, CollectionKind, Difficulty, ExamSettings, GenerationRequest, NavigationResult,
    SettingsPatch, WizardFlow, WizardState, WizardStep,
};
