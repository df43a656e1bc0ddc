/// Wizard step definitions
///
/// Defines all steps in the exam setup flow.

/// Wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    /// Subject selection - Choose which subjects the exam covers
    Subjects,

    /// Question type selection - Choose the question formats
    Questions,

    /// Generation - Review selections, tune settings, generate the exam
    Generate,
}

impl WizardStep {
    /// Get step title
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Subjects => "Choose Your Subjects",
            WizardStep::Questions => "Select Question Types",
            WizardStep::Generate => "Generate Your Exam",
        }
    }

    /// Get step description
    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Subjects => {
                "Select the subjects you want to include in your exam. \
                 You can choose multiple subjects to create a comprehensive assessment."
            }
            WizardStep::Questions => {
                "Choose the types of questions you want to include in your exam. \
                 Different question types test different skills and knowledge areas."
            }
            WizardStep::Generate => {
                "Review your selections and customize your exam settings before generating."
            }
        }
    }

    /// Get step number (1-indexed)
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Subjects => 1,
            WizardStep::Questions => 2,
            WizardStep::Generate => 3,
        }
    }

    /// Get total number of steps
    pub fn total_steps() -> usize {
        3
    }

    /// Check if this is the first step
    pub fn is_first(&self) -> bool {
        matches!(self, WizardStep::Subjects)
    }

    /// Check if this is the last step
    pub fn is_last(&self) -> bool {
        matches!(self, WizardStep::Generate)
    }

    /// Get next step
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Subjects => Some(WizardStep::Questions),
            WizardStep::Questions => Some(WizardStep::Generate),
            WizardStep::Generate => None,
        }
    }

    /// Get previous step
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Subjects => None,
            WizardStep::Questions => Some(WizardStep::Subjects),
            WizardStep::Generate => Some(WizardStep::Questions),
        }
    }

    /// Get all steps in order
    pub fn all_steps() -> Vec<WizardStep> {
        vec![
            WizardStep::Subjects,
            WizardStep::Questions,
            WizardStep::Generate,
        ]
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::Subjects
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation() {
        let step = WizardStep::Subjects;
        assert!(step.is_first());
        assert!(!step.is_last());

        let next = step.next().unwrap();
        assert_eq!(next, WizardStep::Questions);

        let generate = WizardStep::Generate;
        assert!(generate.is_last());
        assert!(generate.next().is_none());
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(WizardStep::Subjects.number(), 1);
        assert_eq!(WizardStep::Generate.number(), 3);
        assert_eq!(WizardStep::total_steps(), 3);
    }

    #[test]
    fn test_all_steps() {
        let steps = WizardStep::all_steps();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0], WizardStep::Subjects);
        assert_eq!(steps[2], WizardStep::Generate);
    }

    #[test]
    fn test_previous_navigation() {
        let step = WizardStep::Questions;
        assert_eq!(step.previous(), Some(WizardStep::Subjects));

        let first = WizardStep::Subjects;
        assert_eq!(first.previous(), None);
    }

    #[test]
    fn test_no_step_is_skipped() {
        // Walking next() from the first step must visit every step in order.
        let mut visited = vec![WizardStep::Subjects];
        let mut current = WizardStep::Subjects;
        while let Some(next) = current.next() {
            visited.push(next);
            current = next;
        }
        assert_eq!(visited, WizardStep::all_steps());
    }
}
