/// Wizard flow management
///
/// Owns the wizard state and enforces the step sequence: forward moves are
/// gated on the current step's selection requirement, backward moves are
/// always allowed and never clear anything.
use anyhow::Context;

use super::items::CollectionKind;
use super::request::GenerationRequest;
use super::settings::{AttachedFile, SettingsPatch};
use super::state::WizardState;
use super::steps::WizardStep;
use crate::catalog::Catalog;
use crate::error::{AppResult, CatalogError, SettingsError, WizardError};
use crate::generation::GenerationSink;

/// Navigation result
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationResult {
    /// Navigation succeeded, now on new step
    Success(WizardStep),

    /// Navigation blocked (at boundary or gate not satisfied)
    Blocked { reason: String },
}

/// Wizard flow manager
pub struct WizardFlow {
    state: WizardState,
}

impl WizardFlow {
    /// Create a new wizard flow from the built-in catalog
    pub fn new() -> Self {
        Self {
            state: WizardState::new(),
        }
    }

    /// Create a flow from a specific catalog
    pub fn with_catalog(catalog: Catalog) -> Result<Self, CatalogError> {
        Ok(Self {
            state: WizardState::from_catalog(catalog)?,
        })
    }

    /// Create a flow from existing state
    pub fn from_state(state: WizardState) -> Self {
        Self { state }
    }

    /// Get current step
    pub fn current_step(&self) -> WizardStep {
        self.state.step()
    }

    /// Get wizard state
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Flip the selection on an item in the given collection.
    ///
    /// Returns the new selected state. Unknown ids leave the state
    /// untouched and surface as a reported condition, never a fault.
    pub fn toggle(&mut self, kind: CollectionKind, id: &str) -> Result<bool, WizardError> {
        self.state.collection_mut(kind).toggle(id)
    }

    /// Check whether the current step's gate is satisfied
    pub fn can_advance(&self) -> bool {
        self.state.can_advance()
    }

    /// Check if there is a step to go back to
    pub fn can_go_back(&self) -> bool {
        self.current_step().previous().is_some()
    }

    /// Move to the next step.
    ///
    /// Blocked without state change when the gate is unsatisfied or the
    /// wizard is already on the final step. Steps are never skipped.
    pub fn advance(&mut self) -> NavigationResult {
        let current = self.current_step();

        if !self.state.can_advance() {
            let reason = match current {
                WizardStep::Subjects => "Select at least one subject first".to_string(),
                WizardStep::Questions => "Select at least one question type first".to_string(),
                WizardStep::Generate => unreachable!("Generate step has no gate"),
            };
            return NavigationResult::Blocked { reason };
        }

        match current.next() {
            Some(next_step) => {
                self.state.set_step(next_step);
                NavigationResult::Success(next_step)
            }
            None => NavigationResult::Blocked {
                reason: "Already at the final step".to_string(),
            },
        }
    }

    /// Move to the previous step.
    ///
    /// Ungated; selections and settings survive backward navigation.
    pub fn retreat(&mut self) -> NavigationResult {
        match self.current_step().previous() {
            Some(prev_step) => {
                self.state.set_step(prev_step);
                NavigationResult::Success(prev_step)
            }
            None => NavigationResult::Blocked {
                reason: "Already at the first step".to_string(),
            },
        }
    }

    /// Merge a partial settings update
    pub fn update_settings(&mut self, patch: SettingsPatch) {
        self.state.settings_mut().merge(patch);
    }

    /// Store a question count from raw text, clamping into range.
    ///
    /// Unparsable input keeps the last valid value and reports the error.
    pub fn set_total_questions_raw(&mut self, raw: &str) -> Result<u32, SettingsError> {
        self.state.settings_mut().set_total_questions_raw(raw)
    }

    /// Replace the attached reference file
    pub fn attach_file(&mut self, file: AttachedFile) {
        self.state.settings_mut().attach(file);
    }

    /// Remove the attached reference file, if any
    pub fn detach_file(&mut self) -> Option<AttachedFile> {
        self.state.settings_mut().detach()
    }

    /// Build the generation request.
    ///
    /// Valid only on the final step; anywhere else this is a programmer
    /// error surfaced as `NotOnGenerateStep`.
    pub fn build_request(&self) -> Result<GenerationRequest, WizardError> {
        if self.current_step() != WizardStep::Generate {
            return Err(WizardError::NotOnGenerateStep {
                step: self.current_step().to_string(),
            });
        }

        let settings = self.state.settings();
        Ok(GenerationRequest {
            subject_names: self.state.selected_subject_labels(),
            question_type_names: self.state.selected_question_type_labels(),
            total_questions: settings.total_questions(),
            difficulty: settings.difficulty(),
            attached_file_name: settings.attached_file().map(|file| file.name.clone()),
        })
    }

    /// Build the generation request and hand it to the sink.
    ///
    /// Returns the request that was delivered.
    pub fn submit(&self, sink: &mut dyn GenerationSink) -> AppResult<GenerationRequest> {
        let request = self.build_request()?;
        sink.deliver(&request)
            .context("Exam generation sink rejected the request")?;
        Ok(request)
    }

    /// Return the wizard to its initial state
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for WizardFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::settings::Difficulty;

    /// Sink that records every delivered request
    #[derive(Default)]
    struct RecordingSink {
        delivered: Vec<GenerationRequest>,
    }

    impl GenerationSink for RecordingSink {
        fn deliver(&mut self, request: &GenerationRequest) -> AppResult<()> {
            self.delivered.push(request.clone());
            Ok(())
        }
    }

    fn flow_at_generate() -> WizardFlow {
        let mut flow = WizardFlow::new();
        flow.toggle(CollectionKind::Subjects, "math").unwrap();
        flow.advance();
        flow.toggle(CollectionKind::QuestionTypes, "essay").unwrap();
        flow.advance();
        flow
    }

    #[test]
    fn test_new_flow() {
        let flow = WizardFlow::new();
        assert_eq!(flow.current_step(), WizardStep::Subjects);
        assert!(!flow.can_advance());
        assert!(!flow.can_go_back());
    }

    #[test]
    fn test_advance_blocked_without_selection() {
        let mut flow = WizardFlow::new();

        let result = flow.advance();
        assert!(matches!(result, NavigationResult::Blocked { .. }));
        assert_eq!(flow.current_step(), WizardStep::Subjects);
    }

    #[test]
    fn test_advance_after_selection() {
        let mut flow = WizardFlow::new();
        flow.toggle(CollectionKind::Subjects, "math").unwrap();

        let result = flow.advance();
        assert_eq!(result, NavigationResult::Success(WizardStep::Questions));
        assert_eq!(flow.current_step(), WizardStep::Questions);
    }

    #[test]
    fn test_question_gate() {
        let mut flow = WizardFlow::new();
        flow.toggle(CollectionKind::Subjects, "math").unwrap();
        flow.advance();

        assert!(!flow.can_advance());
        assert!(matches!(flow.advance(), NavigationResult::Blocked { .. }));

        flow.toggle(CollectionKind::QuestionTypes, "essay").unwrap();
        assert!(flow.can_advance());
        assert_eq!(
            flow.advance(),
            NavigationResult::Success(WizardStep::Generate)
        );
    }

    #[test]
    fn test_advance_at_generate_is_noop() {
        let mut flow = flow_at_generate();

        let result = flow.advance();
        assert!(matches!(result, NavigationResult::Blocked { .. }));
        assert_eq!(flow.current_step(), WizardStep::Generate);
    }

    #[test]
    fn test_retreat_at_first_step_is_noop() {
        let mut flow = WizardFlow::new();

        let result = flow.retreat();
        assert!(matches!(result, NavigationResult::Blocked { .. }));
        assert_eq!(flow.current_step(), WizardStep::Subjects);
    }

    #[test]
    fn test_advance_retreat_round_trip() {
        let mut flow = WizardFlow::new();
        flow.toggle(CollectionKind::Subjects, "math").unwrap();
        flow.toggle(CollectionKind::Subjects, "science").unwrap();
        flow.set_total_questions_raw("35").unwrap();

        flow.advance();
        let result = flow.retreat();

        assert_eq!(result, NavigationResult::Success(WizardStep::Subjects));
        assert_eq!(
            flow.state().selected_subject_labels(),
            vec!["Mathematics".to_string(), "Science".to_string()]
        );
        assert_eq!(flow.state().settings().total_questions(), 35);
    }

    #[test]
    fn test_retreat_never_clears_selections() {
        let mut flow = flow_at_generate();

        flow.retreat();
        flow.retreat();

        assert_eq!(flow.current_step(), WizardStep::Subjects);
        assert!(flow.state().subjects().any_selected());
        assert!(flow.state().question_types().any_selected());
    }

    #[test]
    fn test_toggle_unknown_id_reported() {
        let mut flow = WizardFlow::new();
        let result = flow.toggle(CollectionKind::Subjects, "history");

        assert!(matches!(result, Err(WizardError::ItemNotFound { .. })));
        assert_eq!(flow.current_step(), WizardStep::Subjects);
    }

    #[test]
    fn test_build_request_outside_generate_fails() {
        let flow = WizardFlow::new();
        let result = flow.build_request();

        assert!(matches!(
            result,
            Err(WizardError::NotOnGenerateStep { .. })
        ));
    }

    #[test]
    fn test_submit_delivers_request() {
        let flow = flow_at_generate();
        let mut sink = RecordingSink::default();

        let request = flow.submit(&mut sink).unwrap();

        assert_eq!(sink.delivered.len(), 1);
        assert_eq!(sink.delivered[0], request);
        assert_eq!(request.subject_names, vec!["Mathematics".to_string()]);
        assert_eq!(request.question_type_names, vec!["Essay".to_string()]);
        assert_eq!(request.total_questions, 20);
        assert_eq!(request.difficulty, Difficulty::Medium);
        assert_eq!(request.attached_file_name, None);
    }

    #[test]
    fn test_submit_includes_attachment() {
        let mut flow = flow_at_generate();
        flow.attach_file(AttachedFile::new("notes.pdf", 204_800));

        let request = flow.build_request().unwrap();
        assert_eq!(request.attached_file_name.as_deref(), Some("notes.pdf"));
    }

    #[test]
    fn test_settings_patch() {
        let mut flow = WizardFlow::new();
        flow.update_settings(SettingsPatch {
            total_questions: Some(500),
            difficulty: Some(Difficulty::Hard),
        });

        assert_eq!(flow.state().settings().total_questions(), 100);
        assert_eq!(flow.state().settings().difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_reset() {
        let mut flow = flow_at_generate();
        flow.reset();

        assert_eq!(flow.current_step(), WizardStep::Subjects);
        assert!(!flow.state().subjects().any_selected());
        assert!(!flow.state().question_types().any_selected());
    }
}
