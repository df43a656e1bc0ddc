/// Command types for the application
///
/// Commands represent requests to perform actions (imperative). The
/// interactive loop parses each input line into one of these and applies
/// it to the wizard flow.
use std::path::PathBuf;

use crate::error::CommandError;

/// Application commands
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Toggle the item with the given id in the current step's collection
    Toggle { id: String },

    /// Move to the next step
    Next,

    /// Move to the previous step
    Back,

    /// Set the total question count (raw text, parsed and clamped later)
    SetQuestions { raw: String },

    /// Set the difficulty level (raw text, parsed later)
    SetDifficulty { raw: String },

    /// Attach a reference file by path
    Attach { path: PathBuf },

    /// Remove the attached reference file
    Detach,

    /// Print the current step and selections
    Show,

    /// Generate the exam from the current selections
    Generate,

    /// Print the command list
    Help,

    /// Quit the application
    Quit,
}

impl Command {
    /// Parse one input line into a command
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (trimmed, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "toggle" | "t" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument { command: "toggle" });
                }
                Ok(Command::Toggle {
                    id: rest.to_string(),
                })
            }
            "next" | "n" => Ok(Command::Next),
            "back" | "b" => Ok(Command::Back),
            "questions" | "q" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "questions",
                    });
                }
                Ok(Command::SetQuestions {
                    raw: rest.to_string(),
                })
            }
            "difficulty" | "d" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "difficulty",
                    });
                }
                Ok(Command::SetDifficulty {
                    raw: rest.to_string(),
                })
            }
            "attach" | "a" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument { command: "attach" });
                }
                Ok(Command::Attach {
                    path: PathBuf::from(rest),
                })
            }
            "detach" => Ok(Command::Detach),
            "show" | "s" => Ok(Command::Show),
            "generate" | "g" => Ok(Command::Generate),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }

    /// Get a human-readable description of the command
    pub fn description(&self) -> String {
        match self {
            Command::Toggle { id } => format!("Toggle '{}'", id),
            Command::Next => "Next step".to_string(),
            Command::Back => "Previous step".to_string(),
            Command::SetQuestions { raw } => format!("Set question count: {}", raw),
            Command::SetDifficulty { raw } => format!("Set difficulty: {}", raw),
            Command::Attach { path } => format!("Attach file: {}", path.display()),
            Command::Detach => "Detach file".to_string(),
            Command::Show => "Show current step".to_string(),
            Command::Generate => "Generate exam".to_string(),
            Command::Help => "Show help".to_string(),
            Command::Quit => "Quit application".to_string(),
        }
    }

    /// The command list shown by `help`
    pub fn help_text() -> &'static str {
        "Commands:\n\
         \x20 toggle <id>       select/deselect an item on the current step\n\
         \x20 next              advance to the next step\n\
         \x20 back              return to the previous step\n\
         \x20 questions <n>     set the total question count (5-100)\n\
         \x20 difficulty <d>    set the difficulty (easy, medium, hard)\n\
         \x20 attach <path>     attach a reference file\n\
         \x20 detach            remove the attached reference file\n\
         \x20 show              print the current step again\n\
         \x20 generate          generate the exam (final step only)\n\
         \x20 help              show this list\n\
         \x20 quit              exit"
    }
}
