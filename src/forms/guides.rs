use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::guide::{GuideUpdate, NewGuide};
use crate::domain::types::{CategoryId, GuideId, GuideTitle, TypeConstraintError};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddGuideForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1))]
    pub category_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddGuideFormPayload {
    pub title: GuideTitle,
    pub description: String,
    pub category_id: CategoryId,
}

impl AddGuideFormPayload {
    pub fn into_new_guide(self) -> NewGuide {
        NewGuide {
            title: self.title,
            description: self.description,
            category_id: self.category_id,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddGuideFormError {
    #[error("Add guide form validation failed: {0}")]
    Validation(String),
    #[error("Add guide form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddGuideFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddGuideFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddGuideForm> for AddGuideFormPayload {
    type Error = AddGuideFormError;

    fn try_from(value: AddGuideForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            title: GuideTitle::new(value.title)?,
            description: value.description,
            category_id: CategoryId::new(value.category_id)?,
        })
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuideForm {
    #[validate(length(min = 1))]
    pub guide_id: String,
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateGuideFormPayload {
    pub guide_id: GuideId,
    pub updates: GuideUpdate,
}

#[derive(Debug, Error)]
pub enum UpdateGuideFormError {
    #[error("Update guide form validation failed: {0}")]
    Validation(String),
    #[error("Update guide form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateGuideFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateGuideFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateGuideForm> for UpdateGuideFormPayload {
    type Error = UpdateGuideFormError;

    fn try_from(value: UpdateGuideForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            guide_id: GuideId::new(value.guide_id)?,
            updates: GuideUpdate {
                title: value.title.map(GuideTitle::new).transpose()?,
                description: value.description,
                category_id: value.category_id.map(CategoryId::new).transpose()?,
            },
        })
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteGuideForm {
    #[validate(length(min = 1))]
    pub guide_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteGuideFormPayload {
    pub guide_id: GuideId,
}

#[derive(Debug, Error)]
pub enum DeleteGuideFormError {
    #[error("Delete guide form validation failed: {0}")]
    Validation(String),
    #[error("Delete guide form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for DeleteGuideFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for DeleteGuideFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<DeleteGuideForm> for DeleteGuideFormPayload {
    type Error = DeleteGuideFormError;

    fn try_from(value: DeleteGuideForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            guide_id: GuideId::new(value.guide_id)?,
        })
    }
}
