use thiserror::Error;

/// Application-level errors using thiserror for structured error handling.
///
/// These errors represent domain-specific failures that can occur during
/// wizard operation. They provide context and can be chained with anyhow.

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("No {collection} entry matches id '{id}'")]
    ItemNotFound { collection: String, id: String },

    #[error("Exam can only be generated on the final step (currently on '{step}')")]
    NotOnGenerateStep { step: String },
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to load catalog from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save catalog to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Duplicate id '{id}' in {collection} catalog")]
    DuplicateId { collection: String, id: String },

    #[error("The {collection} catalog is empty")]
    EmptyCollection { collection: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save configuration to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to create config directory: {path}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Unknown difficulty '{0}' (expected easy, medium, or hard)")]
    UnknownDifficulty(String),

    #[error("'{0}' is not a valid question count")]
    InvalidQuestionCount(String),
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Empty input")]
    Empty,

    #[error("Unknown command '{0}' (type 'help' for the command list)")]
    Unknown(String),

    #[error("'{command}' requires an argument")]
    MissingArgument { command: &'static str },
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;
