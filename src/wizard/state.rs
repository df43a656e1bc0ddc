/// Wizard state management
///
/// One value owns everything the wizard tracks: the step cursor, both
/// selectable-item collections, and the exam settings. Created once per
/// session and mutated in place; nothing is persisted.
use super::items::{CollectionKind, ItemCollection};
use super::settings::ExamSettings;
use super::steps::WizardStep;
use crate::catalog::Catalog;
use crate::error::CatalogError;

/// Wizard state
#[derive(Debug, Clone)]
pub struct WizardState {
    /// Current step
    step: WizardStep,

    /// Subjects offered for selection
    subjects: ItemCollection,

    /// Question types offered for selection
    question_types: ItemCollection,

    /// Exam settings
    settings: ExamSettings,
}

impl WizardState {
    /// Create a new wizard state from the built-in catalog
    pub fn new() -> Self {
        // The built-in catalog has unique ids, so this cannot fail.
        Self::from_catalog(Catalog::builtin()).unwrap_or_else(|e| {
            panic!("built-in catalog failed validation: {e}");
        })
    }

    /// Create a wizard state from a specific catalog
    pub fn from_catalog(catalog: Catalog) -> Result<Self, CatalogError> {
        let (subjects, question_types) = catalog.into_collections()?;
        Ok(Self {
            step: WizardStep::Subjects,
            subjects,
            question_types,
            settings: ExamSettings::default(),
        })
    }

    /// Get current step
    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub(crate) fn set_step(&mut self, step: WizardStep) {
        self.step = step;
    }

    pub fn subjects(&self) -> &ItemCollection {
        &self.subjects
    }

    pub fn question_types(&self) -> &ItemCollection {
        &self.question_types
    }

    /// Get the collection addressed by the given tag
    pub fn collection(&self, kind: CollectionKind) -> &ItemCollection {
        match kind {
            CollectionKind::Subjects => &self.subjects,
            CollectionKind::QuestionTypes => &self.question_types,
        }
    }

    pub(crate) fn collection_mut(&mut self, kind: CollectionKind) -> &mut ItemCollection {
        match kind {
            CollectionKind::Subjects => &mut self.subjects,
            CollectionKind::QuestionTypes => &mut self.question_types,
        }
    }

    pub fn settings(&self) -> &ExamSettings {
        &self.settings
    }

    pub(crate) fn settings_mut(&mut self) -> &mut ExamSettings {
        &mut self.settings
    }

    /// Check whether the current step's gate is satisfied.
    ///
    /// - `Subjects`: at least one subject selected
    /// - `Questions`: at least one question type selected
    /// - `Generate`: always true (terminal step)
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Subjects => self.subjects.any_selected(),
            WizardStep::Questions => self.question_types.any_selected(),
            WizardStep::Generate => true,
        }
    }

    /// Labels of selected subjects in canonical order
    pub fn selected_subject_labels(&self) -> Vec<String> {
        self.subjects.selected_labels()
    }

    /// Labels of selected question types in canonical order
    pub fn selected_question_type_labels(&self) -> Vec<String> {
        self.question_types.selected_labels()
    }

    /// Return the wizard to its initial state: first step, nothing
    /// selected, default settings.
    pub fn reset(&mut self) {
        self.step = WizardStep::Subjects;
        self.subjects.clear_selection();
        self.question_types.clear_selection();
        self.settings = ExamSettings::default();
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wizard_state() {
        let state = WizardState::new();
        assert_eq!(state.step(), WizardStep::Subjects);
        assert_eq!(state.subjects().items().len(), 3);
        assert_eq!(state.question_types().items().len(), 5);
        assert!(!state.can_advance());
        assert_eq!(state.settings().total_questions(), 20);
    }

    #[test]
    fn test_can_advance_gates() {
        let mut state = WizardState::new();

        // Subjects step: gated on subject selection.
        assert!(!state.can_advance());
        state
            .collection_mut(CollectionKind::Subjects)
            .toggle("math")
            .unwrap();
        assert!(state.can_advance());

        // Questions step: gated on question-type selection.
        state.set_step(WizardStep::Questions);
        assert!(!state.can_advance());
        state
            .collection_mut(CollectionKind::QuestionTypes)
            .toggle("essay")
            .unwrap();
        assert!(state.can_advance());

        // Generate step: always open.
        state.set_step(WizardStep::Generate);
        assert!(state.can_advance());
    }

    #[test]
    fn test_selected_labels() {
        let mut state = WizardState::new();
        state
            .collection_mut(CollectionKind::Subjects)
            .toggle("science")
            .unwrap();
        state
            .collection_mut(CollectionKind::Subjects)
            .toggle("math")
            .unwrap();

        assert_eq!(
            state.selected_subject_labels(),
            vec!["Mathematics".to_string(), "Science".to_string()]
        );
        assert!(state.selected_question_type_labels().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut state = WizardState::new();
        state
            .collection_mut(CollectionKind::Subjects)
            .toggle("math")
            .unwrap();
        state.set_step(WizardStep::Questions);
        state.settings_mut().set_total_questions(50);

        state.reset();

        assert_eq!(state.step(), WizardStep::Subjects);
        assert!(!state.subjects().any_selected());
        assert_eq!(state.settings().total_questions(), 20);
    }
}
