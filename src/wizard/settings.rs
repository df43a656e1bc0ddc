/// Exam settings
///
/// Question count, difficulty, and the optional reference-file attachment.
/// The question count is kept inside [MIN_QUESTIONS, MAX_QUESTIONS] at all
/// times; raw input is clamped on the way in.
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Smallest allowed question count
pub const MIN_QUESTIONS: u32 = 5;

/// Largest allowed question count
pub const MAX_QUESTIONS: u32 = 100;

/// Question count used when nothing else is configured
pub const DEFAULT_QUESTIONS: u32 = 20;

/// Exam difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// All levels in ascending order
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = SettingsError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(SettingsError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Reference file attachment
///
/// Only the name and byte size are captured; file content is never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedFile {
    pub name: String,
    pub size_bytes: u64,
}

impl AttachedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Size in megabytes with two decimals, e.g. "0.20 MB"
    pub fn display_size(&self) -> String {
        let megabytes = self.size_bytes as f64 / 1024.0 / 1024.0;
        format!("{:.2} MB", megabytes)
    }
}

/// Partial settings update
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    /// Requested question count, clamped on merge
    pub total_questions: Option<i64>,
    pub difficulty: Option<Difficulty>,
}

/// Exam settings record
#[derive(Debug, Clone, PartialEq)]
pub struct ExamSettings {
    total_questions: u32,
    difficulty: Difficulty,
    attached_file: Option<AttachedFile>,
}

impl Default for ExamSettings {
    fn default() -> Self {
        Self {
            total_questions: DEFAULT_QUESTIONS,
            difficulty: Difficulty::default(),
            attached_file: None,
        }
    }
}

impl ExamSettings {
    /// Settings seeded from configured defaults
    pub fn with_defaults(total_questions: u32, difficulty: Difficulty) -> Self {
        Self {
            total_questions: clamp_questions(total_questions as i64),
            difficulty,
            attached_file: None,
        }
    }

    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn attached_file(&self) -> Option<&AttachedFile> {
        self.attached_file.as_ref()
    }

    /// Store a question count, clamping into [MIN_QUESTIONS, MAX_QUESTIONS].
    ///
    /// Returns the value actually stored.
    pub fn set_total_questions(&mut self, requested: i64) -> u32 {
        self.total_questions = clamp_questions(requested);
        self.total_questions
    }

    /// Parse and store a question count from raw text.
    ///
    /// Unparsable input keeps the last valid value and reports the error,
    /// rather than letting a non-number survive into the generation request.
    pub fn set_total_questions_raw(&mut self, raw: &str) -> Result<u32, SettingsError> {
        let requested: i64 = raw
            .trim()
            .parse()
            .map_err(|_| SettingsError::InvalidQuestionCount(raw.trim().to_string()))?;
        Ok(self.set_total_questions(requested))
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Merge a partial update into the settings
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(requested) = patch.total_questions {
            self.set_total_questions(requested);
        }
        if let Some(difficulty) = patch.difficulty {
            self.difficulty = difficulty;
        }
    }

    /// Replace the attached reference file.
    ///
    /// Only one file can be attached at a time; any previous attachment is
    /// dropped. Content is never inspected here.
    pub fn attach(&mut self, file: AttachedFile) {
        self.attached_file = Some(file);
    }

    /// Remove the attachment, if any
    pub fn detach(&mut self) -> Option<AttachedFile> {
        self.attached_file.take()
    }
}

fn clamp_questions(requested: i64) -> u32 {
    requested.clamp(MIN_QUESTIONS as i64, MAX_QUESTIONS as i64) as u32
}
