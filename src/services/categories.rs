use crate::dto::categories::CategoryDto;
use crate::forms::categories::{
    AddCategoryFormPayload, DeleteCategoryFormPayload, UpdateCategoryFormPayload,
};
use crate::store::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

pub fn show_categories<R>(repo: &R) -> Vec<CategoryDto>
where
    R: CategoryReader,
{
    repo.categories()
        .iter()
        .cloned()
        .map(CategoryDto::from)
        .collect()
}

pub fn add_category<R>(payload: AddCategoryFormPayload, repo: &mut R) -> CategoryDto
where
    R: CategoryWriter,
{
    repo.add_category(payload.into_new_category()).into()
}

pub fn update_category<R>(payload: UpdateCategoryFormPayload, repo: &mut R) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    let (category_id, updates) = payload.into_update();
    if repo.get_category_by_id(&category_id).is_none() {
        return Err(ServiceError::NotFound);
    }
    repo.update_category(&category_id, updates);
    Ok(())
}

/// Deletes a category unless a guide still references it; the blocking
/// condition is surfaced so the caller can tell the user why.
pub fn delete_category<R>(payload: DeleteCategoryFormPayload, repo: &mut R) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    if repo.get_category_by_id(&payload.category_id).is_none() {
        return Err(ServiceError::NotFound);
    }
    repo.delete_category(&payload.category_id).map_err(|e| {
        log::warn!("Refused to delete category: {e}");
        e.into()
    })
}
