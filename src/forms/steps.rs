use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::guide::{NewStep, StepUpdate};
use crate::domain::types::{
    GuideId, ImageUrl, MoveDirection, StepDescription, StepId, TypeConstraintError,
};
use crate::forms::normalize_optional;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddStepForm {
    #[validate(length(min = 1))]
    pub guide_id: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub hint: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddStepFormPayload {
    pub guide_id: GuideId,
    pub description: StepDescription,
    pub hint: Option<String>,
    pub image_url: Option<ImageUrl>,
}

impl AddStepFormPayload {
    pub fn into_new_step(self) -> (GuideId, NewStep) {
        (
            self.guide_id,
            NewStep {
                description: self.description,
                hint: self.hint,
                image_url: self.image_url,
            },
        )
    }
}

#[derive(Debug, Error)]
pub enum AddStepFormError {
    #[error("Add step form validation failed: {0}")]
    Validation(String),
    #[error("Add step form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddStepFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddStepFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddStepForm> for AddStepFormPayload {
    type Error = AddStepFormError;

    fn try_from(value: AddStepForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            guide_id: GuideId::new(value.guide_id)?,
            description: StepDescription::new(value.description)?,
            hint: normalize_optional(value.hint),
            image_url: normalize_optional(value.image_url)
                .map(ImageUrl::new)
                .transpose()?,
        })
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStepForm {
    #[validate(length(min = 1))]
    pub guide_id: String,
    #[validate(length(min = 1))]
    pub step_id: String,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub hint: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStepFormPayload {
    pub guide_id: GuideId,
    pub step_id: StepId,
    pub updates: StepUpdate,
}

#[derive(Debug, Error)]
pub enum UpdateStepFormError {
    #[error("Update step form validation failed: {0}")]
    Validation(String),
    #[error("Update step form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateStepFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateStepFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateStepForm> for UpdateStepFormPayload {
    type Error = UpdateStepFormError;

    fn try_from(value: UpdateStepForm) -> Result<Self, Self::Error> {
        value.validate()?;
        // Provided hint/image fields set-or-clear; absent fields stay untouched.
        let hint = value.hint.map(|hint| normalize_optional(Some(hint)));
        let image_url = value
            .image_url
            .map(|url| normalize_optional(Some(url)).map(ImageUrl::new).transpose())
            .transpose()?;
        Ok(Self {
            guide_id: GuideId::new(value.guide_id)?,
            step_id: StepId::new(value.step_id)?,
            updates: StepUpdate {
                description: value.description.map(StepDescription::new).transpose()?,
                hint,
                image_url,
            },
        })
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteStepForm {
    #[validate(length(min = 1))]
    pub guide_id: String,
    #[validate(length(min = 1))]
    pub step_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStepFormPayload {
    pub guide_id: GuideId,
    pub step_id: StepId,
}

#[derive(Debug, Error)]
pub enum DeleteStepFormError {
    #[error("Delete step form validation failed: {0}")]
    Validation(String),
    #[error("Delete step form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for DeleteStepFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for DeleteStepFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<DeleteStepForm> for DeleteStepFormPayload {
    type Error = DeleteStepFormError;

    fn try_from(value: DeleteStepForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            guide_id: GuideId::new(value.guide_id)?,
            step_id: StepId::new(value.step_id)?,
        })
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MoveStepForm {
    #[validate(length(min = 1))]
    pub guide_id: String,
    #[validate(length(min = 1))]
    pub step_id: String,
    #[validate(length(min = 1))]
    pub direction: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveStepFormPayload {
    pub guide_id: GuideId,
    pub step_id: StepId,
    pub direction: MoveDirection,
}

#[derive(Debug, Error)]
pub enum MoveStepFormError {
    #[error("Move step form validation failed: {0}")]
    Validation(String),
    #[error("Move step form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for MoveStepFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for MoveStepFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<MoveStepForm> for MoveStepFormPayload {
    type Error = MoveStepFormError;

    fn try_from(value: MoveStepForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            guide_id: GuideId::new(value.guide_id)?,
            step_id: StepId::new(value.step_id)?,
            direction: MoveDirection::try_from(value.direction)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_step_normalizes_blank_optional_fields() {
        let form = AddStepForm {
            guide_id: "guide1".to_string(),
            description: "Preheat the oven".to_string(),
            hint: Some("   ".to_string()),
            image_url: Some(String::new()),
        };
        let payload: AddStepFormPayload = form.try_into().unwrap();
        assert_eq!(payload.hint, None);
        assert_eq!(payload.image_url, None);
    }

    #[test]
    fn add_step_rejects_an_invalid_image_url() {
        let form = AddStepForm {
            guide_id: "guide1".to_string(),
            description: "Preheat the oven".to_string(),
            hint: None,
            image_url: Some("not a url".to_string()),
        };
        let payload: Result<AddStepFormPayload, _> = form.try_into();
        assert!(matches!(payload, Err(AddStepFormError::TypeConstraint(_))));
    }

    #[test]
    fn update_step_distinguishes_clearing_from_leaving_untouched() {
        let form = UpdateStepForm {
            guide_id: "guide1".to_string(),
            step_id: "step1".to_string(),
            description: None,
            hint: Some(String::new()),
            image_url: None,
        };
        let payload: UpdateStepFormPayload = form.try_into().unwrap();
        assert_eq!(payload.updates.hint, Some(None));
        assert_eq!(payload.updates.image_url, None);
    }

    #[test]
    fn move_step_parses_its_direction() {
        let form = MoveStepForm {
            guide_id: "guide1".to_string(),
            step_id: "step1".to_string(),
            direction: "down".to_string(),
        };
        let payload: MoveStepFormPayload = form.try_into().unwrap();
        assert_eq!(payload.direction, MoveDirection::Down);

        let form = MoveStepForm {
            guide_id: "guide1".to_string(),
            step_id: "step1".to_string(),
            direction: "sideways".to_string(),
        };
        let payload: Result<MoveStepFormPayload, _> = form.try_into();
        assert!(matches!(payload, Err(MoveStepFormError::TypeConstraint(_))));
    }
}
