//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service error types; these `From`
//! impls let callers funnel form, constraint and store failures into a
//! single `ServiceError` with `?`.

use crate::domain::types::TypeConstraintError;
use crate::forms::categories::{
    AddCategoryFormError, DeleteCategoryFormError, UpdateCategoryFormError,
};
use crate::forms::guides::{AddGuideFormError, DeleteGuideFormError, UpdateGuideFormError};
use crate::forms::steps::{
    AddStepFormError, DeleteStepFormError, MoveStepFormError, UpdateStepFormError,
};
use crate::services::ServiceError;
use crate::store::StoreError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<StoreError> for ServiceError {
    fn from(val: StoreError) -> Self {
        ServiceError::Conflict(val.to_string())
    }
}

impl From<AddGuideFormError> for ServiceError {
    fn from(val: AddGuideFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<UpdateGuideFormError> for ServiceError {
    fn from(val: UpdateGuideFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<DeleteGuideFormError> for ServiceError {
    fn from(val: DeleteGuideFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<AddStepFormError> for ServiceError {
    fn from(val: AddStepFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<UpdateStepFormError> for ServiceError {
    fn from(val: UpdateStepFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<DeleteStepFormError> for ServiceError {
    fn from(val: DeleteStepFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<MoveStepFormError> for ServiceError {
    fn from(val: MoveStepFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<AddCategoryFormError> for ServiceError {
    fn from(val: AddCategoryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<UpdateCategoryFormError> for ServiceError {
    fn from(val: UpdateCategoryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<DeleteCategoryFormError> for ServiceError {
    fn from(val: DeleteCategoryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
