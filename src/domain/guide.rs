use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::types::{
    CategoryId, GuideId, GuideTitle, ImageUrl, StepDescription, StepId, StepNumber,
};

/// One instructional unit within a guide.
///
/// Serialized field names follow the persisted wire shape. Fields this
/// application does not interpret (e.g. `"data-ai-hint"`) are collected into
/// `extra` and written back untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: StepId,
    pub step_number: StepNumber,
    pub description: StepDescription,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<ImageUrl>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Canonical guide record owning its ordered step sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    pub id: GuideId,
    pub title: GuideTitle,
    pub description: String,
    pub category_id: CategoryId,
    pub steps: Vec<Step>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Data required to create a new [`Guide`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewGuide {
    pub title: GuideTitle,
    pub description: String,
    pub category_id: CategoryId,
}

/// Data required to create a new [`Step`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewStep {
    pub description: StepDescription,
    pub hint: Option<String>,
    pub image_url: Option<ImageUrl>,
}

/// Partial update merged into an existing [`Guide`].
///
/// `None` fields are left untouched. The step sequence and timestamps are
/// never writable through this path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuideUpdate {
    pub title: Option<GuideTitle>,
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
}

/// Partial update merged into an existing [`Step`].
///
/// The outer `Option` marks whether a field was provided; for the optional
/// fields the inner `Option` carries the new value, with `Some(None)`
/// clearing it. `stepNumber` is never writable through this path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepUpdate {
    pub description: Option<StepDescription>,
    pub hint: Option<Option<String>>,
    pub image_url: Option<Option<ImageUrl>>,
}

impl Guide {
    /// Creates an empty guide with both timestamps set to now.
    pub fn new(data: NewGuide) -> Self {
        let now = Utc::now();
        Self {
            id: GuideId::generate(),
            title: data.title,
            description: data.description,
            category_id: data.category_id,
            steps: Vec::new(),
            created_at: now,
            updated_at: now,
            extra: Map::new(),
        }
    }

    /// Refreshes `updated_at`, keeping it monotonically non-decreasing.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }

    /// Merges a partial update into this guide.
    pub fn apply(&mut self, updates: GuideUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        if let Some(description) = updates.description {
            self.description = description;
        }
        if let Some(category_id) = updates.category_id {
            self.category_id = category_id;
        }
    }

    /// Finds a step by identifier.
    pub fn step_by_id(&self, step_id: &StepId) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == *step_id)
    }
}

impl Step {
    /// Creates a step at the given position, substituting the generated
    /// placeholder image when none is supplied.
    pub fn new(data: NewStep, step_number: StepNumber) -> Self {
        let image_url = data
            .image_url
            .or_else(|| Some(ImageUrl::placeholder_for(step_number)));
        Self {
            id: StepId::generate(),
            step_number,
            description: data.description,
            hint: data.hint,
            image_url,
            extra: Map::new(),
        }
    }

    /// Merges a partial update into this step.
    pub fn apply(&mut self, updates: StepUpdate) {
        if let Some(description) = updates.description {
            self.description = description;
        }
        if let Some(hint) = updates.hint {
            self.hint = hint;
        }
        if let Some(image_url) = updates.image_url {
            self.image_url = image_url;
        }
    }
}
