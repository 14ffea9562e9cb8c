use crate::document::Document;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Lint warnings
// ---------------------------------------------------------------------------

/// Non-fatal completeness findings reported by `validate --strict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintWarning {
    pub section: String,
    pub message: String,
}

impl LintWarning {
    fn new(section: &str, message: &str) -> Self {
        Self {
            section: section.to_string(),
            message: message.to_string(),
        }
    }
}

impl Document {
    /// Completeness checks layered on top of `validate`. Never changes the
    /// outcome of `validate`.
    pub fn lint(&self) -> Vec<LintWarning> {
        let mut warnings = Vec::new();
        if self.user_stories.is_empty() {
            warnings.push(LintWarning::new("user_stories", "No user stories defined"));
        }
        if self.timeline.is_none() {
            warnings.push(LintWarning::new("timeline", "No timeline specified"));
        }
        if self.requirements.non_functional.is_empty() {
            warnings.push(LintWarning::new(
                "requirements.non_functional",
                "No non-functional requirements",
            ));
        }
        warnings
    }

    pub fn stats(&self) -> Stats {
        Stats {
            functional_requirements: self.requirements.functional.len(),
            non_functional_requirements: self.requirements.non_functional.len(),
            user_stories: self.user_stories.len(),
            business_goals: self.objectives.business_goals.len(),
            stakeholders: self.stakeholders.len(),
            milestones: self.timeline.as_ref().map(|t| t.milestones.len()),
        }
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub functional_requirements: usize,
    pub non_functional_requirements: usize,
    pub user_stories: usize,
    pub business_goals: usize,
    pub stakeholders: usize,
    /// `None` when the document has no timeline at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestones: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Milestone, NonFunctionalRequirement, Timeline, UserStory};
    use crate::templates::Template;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn bare_document_has_three_warnings() {
        let doc = Document::default();
        let warnings = doc.lint();
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().any(|w| w.message == "No timeline specified"));
    }

    #[test]
    fn complete_document_has_no_warnings() {
        let mut doc = Document::default();
        doc.user_stories.push(UserStory::default());
        doc.timeline = Some(Timeline::default());
        doc.requirements
            .non_functional
            .push(NonFunctionalRequirement::default());
        assert!(doc.lint().is_empty());
    }

    #[test]
    fn lint_does_not_affect_validate() {
        let doc = Template::Basic.build(today());
        assert!(!doc.lint().is_empty());
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn stats_count_sections() {
        let mut doc = Template::Feature.build(today());
        let stats = doc.stats();
        assert_eq!(stats.functional_requirements, 3);
        assert_eq!(stats.non_functional_requirements, 2);
        assert_eq!(stats.stakeholders, 2);
        assert_eq!(stats.milestones, Some(3));

        doc.timeline = None;
        assert_eq!(doc.stats().milestones, None);

        doc.timeline = Some(Timeline {
            milestones: vec![Milestone::default()],
            launch_date: None,
        });
        assert_eq!(doc.stats().milestones, Some(1));
    }
}
