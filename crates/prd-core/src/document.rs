//! The PRD document schema and its JSON codec.
//!
//! Optional scalars are `Option<String>` and optional records are
//! `Option<T>`; both are omitted from the JSON when unset, and empty text
//! counts as unset. Sequences are plain `Vec`s: optional ones are omitted
//! when empty, required ones are always written. An explicit `null` on any
//! non-optional field decodes to its zero value. Every struct carries `#[serde(default)]` so a missing
//! required field decodes to its zero value; `validate` is the only place
//! the invariants are checked.

use crate::error::{Result, ValidationError};
use crate::types::Status;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Non-optional fields decode an explicit `null` as their zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Optional text decodes `""` (and `null`) as unset.
fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    /// Calendar date, `YYYY-MM-DD`. Not checked by `validate`.
    #[serde(deserialize_with = "null_as_default")]
    pub created_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub owner: Owner,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub stakeholders: Vec<Stakeholder>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub priority: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub overview: Overview,
    #[serde(deserialize_with = "null_as_default")]
    pub objectives: Objectives,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub user_personas: Vec<UserPersona>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub user_stories: Vec<UserStory>,
    #[serde(deserialize_with = "null_as_default")]
    pub requirements: Requirements,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_specifications: Option<TechnicalSpecifications>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risks_and_assumptions: Option<RisksAndAssumptions>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub out_of_scope: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appendices: Option<Appendices>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Owner {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub team: Option<String>,
}

impl Owner {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            team: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stakeholder {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub email: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub team: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overview {
    #[serde(deserialize_with = "null_as_default")]
    pub problem_statement: String,
    #[serde(deserialize_with = "null_as_default")]
    pub solution_summary: String,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub target_audience: Option<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub market_context: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Objectives {
    #[serde(deserialize_with = "null_as_default")]
    pub business_goals: Vec<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub success_metrics: Vec<SuccessMetric>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub okrs: Vec<Okr>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuccessMetric {
    #[serde(deserialize_with = "null_as_default")]
    pub metric: String,
    #[serde(deserialize_with = "null_as_default")]
    pub target: String,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub measurement_method: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Okr {
    #[serde(deserialize_with = "null_as_default")]
    pub objective: String,
    #[serde(deserialize_with = "null_as_default")]
    pub key_results: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPersona {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub goals: Vec<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub pain_points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStory {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub story: String,
    #[serde(deserialize_with = "null_as_default")]
    pub acceptance_criteria: Vec<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub priority: Option<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub effort_estimate: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirements {
    #[serde(deserialize_with = "null_as_default")]
    pub functional: Vec<FunctionalRequirement>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub non_functional: Vec<NonFunctionalRequirement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionalRequirement {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub priority: Option<String>,
    /// IDs of other requirements. Not checked for existence.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl FunctionalRequirement {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NonFunctionalRequirement {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub acceptance_criteria: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalSpecifications {
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub architecture_overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology_stack: Option<TechnologyStack>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub api_specifications: Vec<ApiSpecification>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub security_considerations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnologyStack {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub frontend: Vec<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub backend: Vec<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub database: Vec<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub infrastructure: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSpecification {
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub endpoint: Option<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub method: Option<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub description: Option<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub request_format: Option<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub response_format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeline {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub milestones: Vec<Milestone>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub launch_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub target_date: String,
    /// Names of other milestones.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RisksAndAssumptions {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub risks: Vec<Risk>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub assumptions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Risk {
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub impact: String,
    #[serde(deserialize_with = "null_as_default")]
    pub probability: String,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub mitigation_strategy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appendices {
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub research_data: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub mockups_wireframes: Vec<MockupWireframe>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub related_documents: Vec<RelatedDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockupWireframe {
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub name: Option<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub url: Option<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedDocument {
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub title: Option<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "is_blank")]
    pub url: Option<String>,
    #[serde(
        rename = "type",
        deserialize_with = "empty_as_none",
        skip_serializing_if = "is_blank"
    )]
    pub doc_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

impl Document {
    /// Minimal draft with placeholder overview, goal and requirement text,
    /// for the non-interactive `create` path.
    pub fn scaffold(
        id: impl Into<String>,
        title: impl Into<String>,
        owner: Owner,
        today: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            version: "1.0.0".to_string(),
            created_date: format_date(today),
            owner,
            status: Status::Draft.to_string(),
            overview: Overview {
                problem_statement: "TODO: Define the problem this product/feature solves"
                    .to_string(),
                solution_summary: "TODO: Describe the proposed solution".to_string(),
                ..Default::default()
            },
            objectives: Objectives {
                business_goals: vec!["TODO: Add business goals".to_string()],
                ..Default::default()
            },
            requirements: Requirements {
                functional: vec![FunctionalRequirement::new(
                    "FR-001",
                    "TODO: Define functional requirements",
                )
                .with_priority("must_have")],
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Check the document invariants in a fixed order and report the first
    /// one that fails. Priority fields, emails and dates are not checked.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let required = [
            ("id", &self.id),
            ("title", &self.title),
            ("version", &self.version),
            ("owner.name", &self.owner.name),
            ("owner.email", &self.owner.email),
            ("overview.problem_statement", &self.overview.problem_statement),
            ("overview.solution_summary", &self.overview.solution_summary),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        if self.objectives.business_goals.is_empty() {
            return Err(ValidationError::EmptyCollection("objectives.business_goals"));
        }
        if self.requirements.functional.is_empty() {
            return Err(ValidationError::EmptyCollection("requirements.functional"));
        }
        if !Status::is_valid(&self.status) {
            return Err(ValidationError::InvalidStatus(self.status.clone()));
        }
        Ok(())
    }

    /// Two-space indented JSON in schema field order.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode without validating. Unknown keys are ignored.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Overwrite `path` with the JSON encoding. Does not validate or touch.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut data = self.to_json()?;
        data.push('\n');
        crate::io::atomic_write(path, data.as_bytes())
    }

    /// Stamp `last_updated` with the current time.
    pub fn touch(&mut self) {
        self.last_updated = Some(Utc::now());
    }

    pub fn status(&self) -> Result<Status> {
        self.status.parse()
    }

    pub fn milestones(&self) -> &[Milestone] {
        self.timeline
            .as_ref()
            .map(|t| t.milestones.as_slice())
            .unwrap_or(&[])
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn minimal() -> Document {
        Document {
            id: "PRD-1".to_string(),
            title: "X".to_string(),
            version: "1.0.0".to_string(),
            owner: Owner::new("A", "a@b.com"),
            status: "draft".to_string(),
            overview: Overview {
                problem_statement: "p".to_string(),
                solution_summary: "s".to_string(),
                ..Default::default()
            },
            objectives: Objectives {
                business_goals: vec!["g1".to_string()],
                ..Default::default()
            },
            requirements: Requirements {
                functional: vec![FunctionalRequirement::new("FR-001", "d")],
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn full() -> Document {
        let mut doc = minimal();
        doc.created_date = "2024-01-15".to_string();
        doc.priority = Some("high".to_string());
        doc.owner.team = Some("Platform".to_string());
        doc.stakeholders = vec![Stakeholder {
            name: "Lee".to_string(),
            email: Some("lee@example.com".to_string()),
            role: "approver".to_string(),
            team: None,
        }];
        doc.objectives.okrs = vec![Okr {
            objective: "Grow".to_string(),
            key_results: Vec::new(),
        }];
        doc.user_stories = vec![UserStory {
            id: "US-001".to_string(),
            story: "As a user".to_string(),
            ..Default::default()
        }];
        doc.technical_specifications = Some(TechnicalSpecifications {
            technology_stack: Some(TechnologyStack::default()),
            api_specifications: vec![ApiSpecification {
                endpoint: Some("/v1/items".to_string()),
                method: Some("GET".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        });
        doc.timeline = Some(Timeline::default());
        doc.appendices = Some(Appendices {
            related_documents: vec![RelatedDocument {
                title: Some("Spec".to_string()),
                doc_type: Some("technical_spec".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        });
        doc.touch();
        doc
    }

    #[test]
    fn minimal_document_validates() {
        assert_eq!(minimal().validate(), Ok(()));
    }

    #[test]
    fn validate_is_idempotent() {
        let mut doc = minimal();
        doc.title.clear();
        let first = doc.validate();
        let second = doc.validate();
        assert_eq!(first, second);
        assert!(first.is_err());
    }

    #[test]
    fn each_required_string_is_rejected_by_name() {
        type Clear = fn(&mut Document);
        let cases: [(&'static str, Clear); 7] = [
            ("id", |d| d.id.clear()),
            ("title", |d| d.title.clear()),
            ("version", |d| d.version.clear()),
            ("owner.name", |d| d.owner.name.clear()),
            ("owner.email", |d| d.owner.email.clear()),
            ("overview.problem_statement", |d| d.overview.problem_statement.clear()),
            ("overview.solution_summary", |d| d.overview.solution_summary.clear()),
        ];
        for (field, clear) in cases {
            let mut doc = minimal();
            clear(&mut doc);
            let err = doc.validate().unwrap_err();
            assert_eq!(err, ValidationError::MissingField(field));
            assert!(err.to_string().contains(field));
        }
    }

    #[test]
    fn reports_first_violation_only() {
        let mut doc = minimal();
        doc.title.clear();
        doc.status = "bogus".to_string();
        doc.requirements.functional.clear();
        assert_eq!(doc.validate(), Err(ValidationError::MissingField("title")));
    }

    #[test]
    fn empty_collections_are_rejected() {
        let mut doc = minimal();
        doc.objectives.business_goals.clear();
        assert_eq!(
            doc.validate(),
            Err(ValidationError::EmptyCollection("objectives.business_goals"))
        );

        let mut doc = minimal();
        doc.requirements.functional.clear();
        assert_eq!(
            doc.validate(),
            Err(ValidationError::EmptyCollection("requirements.functional"))
        );
    }

    #[test]
    fn status_enum_is_enforced() {
        let mut doc = minimal();
        doc.status = "invalid_status".to_string();
        let err = doc.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid status: invalid_status");

        for s in Status::all() {
            doc.status = s.to_string();
            assert!(doc.validate().is_ok(), "{s} should pass");
        }
    }

    #[test]
    fn priority_and_formats_are_not_checked() {
        let mut doc = minimal();
        doc.priority = Some("whenever".to_string());
        doc.owner.email = "not-an-email".to_string();
        doc.created_date = "last tuesday".to_string();
        doc.requirements.functional[0].priority = Some("p0".to_string());
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let doc = full();
        let back = Document::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn unset_optionals_are_omitted() {
        let json = minimal().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "priority",
            "last_updated",
            "stakeholders",
            "technical_specifications",
            "timeline",
            "out_of_scope",
            "appendices",
        ] {
            assert!(!obj.contains_key(key), "{key} should be omitted");
        }
        assert!(!value["owner"].as_object().unwrap().contains_key("team"));

        let back = Document::from_json(&json).unwrap();
        assert_eq!(back.priority, None);
    }

    #[test]
    fn required_fields_are_always_written() {
        let json = Document::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["id"], "");
        assert_eq!(value["status"], "");
        assert_eq!(value["objectives"]["business_goals"], serde_json::json!([]));
        assert_eq!(value["requirements"]["functional"], serde_json::json!([]));
        assert_eq!(value["overview"]["problem_statement"], "");
    }

    #[test]
    fn output_uses_two_space_indent_in_schema_order() {
        let json = minimal().to_json().unwrap();
        assert!(json.starts_with("{\n  \"id\": \"PRD-1\",\n  \"title\": \"X\","));
        let id = json.find("\"id\"").unwrap();
        let owner = json.find("\"owner\"").unwrap();
        let status = json.find("\"status\"").unwrap();
        let requirements = json.find("\"requirements\"").unwrap();
        assert!(id < owner && owner < status && status < requirements);
    }

    #[test]
    fn from_json_ignores_unknown_and_defaults_missing() {
        let doc = Document::from_json(
            r#"{"id":"PRD-9","extra":{"nested":true},"requirements":{"functional":null}}"#,
        )
        .unwrap();
        assert_eq!(doc.id, "PRD-9");
        assert_eq!(doc.title, "");
        assert!(doc.requirements.functional.is_empty());
        assert!(doc.timeline.is_none());
        assert!(doc.validate().is_err());
    }

    #[test]
    fn present_but_empty_record_survives_round_trip() {
        let mut doc = minimal();
        doc.risks_and_assumptions = Some(RisksAndAssumptions::default());
        let json = doc.to_json().unwrap();
        assert!(json.contains("\"risks_and_assumptions\": {}"));
        let back = Document::from_json(&json).unwrap();
        assert_eq!(back.risks_and_assumptions, Some(RisksAndAssumptions::default()));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Document::from_json("{ not json").unwrap_err();
        assert!(err.is_parse());
        let err = Document::from_json(r#"{"title": 42}"#).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = Document::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn save_into_missing_directory_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no/such/dir");
        let err = minimal().save(&missing.join("prd.json")).unwrap_err();
        assert!(err.is_io());
        assert!(!missing.exists());
    }

    #[test]
    fn empty_optional_text_is_dropped() {
        let doc = Document::from_json(
            r#"{"id":"PRD-2","priority":"","owner":{"name":"A","email":"a@b.com","team":""},
                "overview":{"problem_statement":"p","solution_summary":"s","target_audience":""}}"#,
        )
        .unwrap();
        assert_eq!(doc.priority, None);
        assert_eq!(doc.owner.team, None);
        assert_eq!(doc.overview.target_audience, None);

        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert!(value.get("priority").is_none());
        assert!(value["owner"].get("team").is_none());
        assert!(value["overview"].get("target_audience").is_none());
    }

    #[test]
    fn empty_optional_text_set_in_code_is_not_written() {
        let mut doc = minimal();
        doc.priority = Some(String::new());
        doc.requirements.functional[0].priority = Some(String::new());
        let json = doc.to_json().unwrap();
        assert!(!json.contains("\"priority\""));
    }

    #[test]
    fn null_on_required_fields_decodes_to_zero_values() {
        let doc = Document::from_json(
            r#"{"id":"PRD-3","title":null,"owner":null,"overview":null,
                "objectives":{"business_goals":null},"stakeholders":null,
                "requirements":{"functional":[{"id":"FR-001","description":null,"dependencies":null}]}}"#,
        )
        .unwrap();
        assert_eq!(doc.id, "PRD-3");
        assert_eq!(doc.title, "");
        assert_eq!(doc.owner, Owner::default());
        assert_eq!(doc.overview, Overview::default());
        assert!(doc.objectives.business_goals.is_empty());
        assert!(doc.stakeholders.is_empty());
        assert_eq!(doc.requirements.functional[0].description, "");
        assert!(doc.requirements.functional[0].dependencies.is_empty());
        assert_eq!(doc.validate(), Err(ValidationError::MissingField("title")));
    }

    #[test]
    fn touch_sets_last_updated_to_now() {
        let mut doc = minimal();
        assert!(doc.last_updated.is_none());
        doc.touch();
        let stamped = doc.last_updated.unwrap();
        let delta = Utc::now().signed_duration_since(stamped);
        assert!(delta.num_seconds().abs() < 5);
    }

    #[test]
    fn serialization_never_touches() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.json");
        let doc = minimal();
        doc.validate().unwrap();
        doc.save(&path).unwrap();
        assert!(doc.last_updated.is_none());
        assert!(Document::load(&path).unwrap().last_updated.is_none());
    }

    #[test]
    fn save_then_load_end_to_end() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prd.json");
        let doc = minimal();
        assert!(doc.validate().is_ok());
        doc.save(&path).unwrap();
        let loaded = Document::load(&path).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn accepts_timestamps_with_offsets() {
        let doc = Document::from_json(r#"{"last_updated":"2024-01-15T10:30:00-05:00"}"#).unwrap();
        let ts = doc.last_updated.unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-01-15T15:30:00+00:00");
    }

    #[test]
    fn scaffold_is_valid_draft() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let doc = Document::scaffold("PRD-1", "Checkout", Owner::new("A", "a@b.com"), today);
        assert_eq!(doc.created_date, "2024-03-01");
        assert_eq!(doc.status().unwrap(), Status::Draft);
        assert_eq!(doc.requirements.functional[0].priority.as_deref(), Some("must_have"));
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn related_document_type_key() {
        let json = full().to_json().unwrap();
        assert!(json.contains("\"type\": \"technical_spec\""));
    }
}
