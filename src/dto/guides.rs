use chrono::{DateTime, Utc};

use crate::domain::category::Category;
use crate::domain::guide::{Guide, Step};

/// Preview image shown for a guide whose first step has no image.
pub const GUIDE_PREVIEW_PLACEHOLDER: &str = "https://placehold.co/600x400.png?text=Guide+Preview";

/// Display label for a guide whose category no longer resolves.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq)]
pub struct StepDto {
    pub id: String,
    pub step_number: u32,
    pub description: String,
    pub hint: Option<String>,
    pub image_url: Option<String>,
}

impl From<Step> for StepDto {
    fn from(value: Step) -> Self {
        Self {
            id: value.id.into_inner(),
            step_number: value.step_number.get(),
            description: value.description.into_inner(),
            hint: value.hint,
            image_url: value.image_url.map(|url| url.into_inner()),
        }
    }
}

/// Card-level projection of a guide for list views.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideSummaryDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category_name: String,
    pub preview_image_url: String,
    pub step_count: usize,
}

impl GuideSummaryDto {
    pub fn from_guide(guide: &Guide, category: Option<&Category>) -> Self {
        Self {
            id: guide.id.as_str().to_string(),
            title: guide.title.as_str().to_string(),
            description: guide.description.clone(),
            category_name: category_display_name(category),
            preview_image_url: guide
                .steps
                .first()
                .and_then(|step| step.image_url.clone())
                .map(|url| url.into_inner())
                .unwrap_or_else(|| GUIDE_PREVIEW_PLACEHOLDER.to_string()),
            step_count: guide.steps.len(),
        }
    }
}

/// Full projection of a guide for the edit and walkthrough views.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideDetailDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub steps: Vec<StepDto>,
}

impl GuideDetailDto {
    /// Builds the projection with steps sorted by their step number, the
    /// order the walkthrough presents them in.
    pub fn from_guide(guide: &Guide, category: Option<&Category>) -> Self {
        let mut steps: Vec<StepDto> = guide.steps.iter().cloned().map(StepDto::from).collect();
        steps.sort_by_key(|step| step.step_number);
        Self {
            id: guide.id.as_str().to_string(),
            title: guide.title.as_str().to_string(),
            description: guide.description.clone(),
            category_name: category_display_name(category),
            created_at: guide.created_at,
            updated_at: guide.updated_at,
            steps,
        }
    }
}

fn category_display_name(category: Option<&Category>) -> String {
    category
        .map(|c| c.name.as_str().to_string())
        .unwrap_or_else(|| UNCATEGORIZED_LABEL.to_string())
}
