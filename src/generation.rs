/// Generation boundary
///
/// The wizard hands its finalized request to a `GenerationSink` and is done.
/// What happens on the other side (a real generator, a display, a file) is
/// outside the core.
use std::io::Write;

use anyhow::Context;

use crate::error::AppResult;
use crate::wizard::request::GenerationRequest;

/// Collaborator that accepts one finalized generation request
pub trait GenerationSink {
    fn deliver(&mut self, request: &GenerationRequest) -> AppResult<()>;
}

/// Sink that prints the request summary to stdout
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl GenerationSink for ConsoleSink {
    fn deliver(&mut self, request: &GenerationRequest) -> AppResult<()> {
        println!("\n{}\n", request.summary());
        Ok(())
    }
}

/// Sink that writes the request as pretty JSON
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> GenerationSink for JsonSink<W> {
    fn deliver(&mut self, request: &GenerationRequest) -> AppResult<()> {
        let json = serde_json::to_string_pretty(request)
            .context("Failed to serialize generation request")?;
        writeln!(self.writer, "{json}").context("Failed to write generation request")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::settings::Difficulty;

    fn sample_request() -> GenerationRequest {
        GenerationRequest {
            subject_names: vec!["English".to_string()],
            question_type_names: vec!["Essay".to_string(), "Enumeration".to_string()],
            total_questions: 15,
            difficulty: Difficulty::Easy,
            attached_file_name: Some("notes.pdf".to_string()),
        }
    }

    #[test]
    fn test_json_sink_writes_request() {
        let mut sink = JsonSink::new(Vec::new());
        sink.deliver(&sample_request()).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["total_questions"], 15);
        assert_eq!(parsed["difficulty"], "easy");
        assert_eq!(parsed["attached_file_name"], "notes.pdf");
        assert_eq!(parsed["question_type_names"][1], "Enumeration");
    }

    #[test]
    fn test_console_sink_accepts_request() {
        let mut sink = ConsoleSink;
        assert!(sink.deliver(&sample_request()).is_ok());
    }
}
