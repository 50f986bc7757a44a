use crate::domain::guide::Guide;
use crate::domain::types::GuideId;
use crate::dto::guides::{GuideDetailDto, GuideSummaryDto, StepDto};
use crate::forms::guides::{AddGuideFormPayload, DeleteGuideFormPayload, UpdateGuideFormPayload};
use crate::forms::steps::{
    AddStepFormPayload, DeleteStepFormPayload, MoveStepFormPayload, UpdateStepFormPayload,
};
use crate::store::{CategoryReader, GuideReader, GuideWriter};

use super::{ServiceError, ServiceResult};

/// Summary cards for the guide list view, newest-first.
pub fn show_guides<R>(repo: &R) -> Vec<GuideSummaryDto>
where
    R: GuideReader + CategoryReader,
{
    repo.guides()
        .iter()
        .map(|guide| GuideSummaryDto::from_guide(guide, repo.get_category_by_id(&guide.category_id)))
        .collect()
}

/// Full projection of one guide, steps sorted for presentation.
pub fn show_guide<R>(guide_id: &GuideId, repo: &R) -> ServiceResult<GuideDetailDto>
where
    R: GuideReader + CategoryReader,
{
    let guide = repo.get_guide_by_id(guide_id).ok_or(ServiceError::NotFound)?;
    Ok(GuideDetailDto::from_guide(
        guide,
        repo.get_category_by_id(&guide.category_id),
    ))
}

/// Creates a guide. The referenced category must exist at creation time;
/// later mutations do not re-validate it.
pub fn add_guide<R>(payload: AddGuideFormPayload, repo: &mut R) -> ServiceResult<Guide>
where
    R: GuideWriter + CategoryReader,
{
    if repo.get_category_by_id(&payload.category_id).is_none() {
        log::warn!("Rejected guide creation for unknown category {}", payload.category_id);
        return Err(ServiceError::NotFound);
    }
    Ok(repo.add_guide(payload.into_new_guide()))
}

pub fn update_guide<R>(payload: UpdateGuideFormPayload, repo: &mut R) -> ServiceResult<()>
where
    R: GuideReader + GuideWriter,
{
    let UpdateGuideFormPayload { guide_id, updates } = payload;
    if repo.get_guide_by_id(&guide_id).is_none() {
        return Err(ServiceError::NotFound);
    }
    repo.update_guide(&guide_id, updates);
    Ok(())
}

/// Deletes a guide and, implicitly, its steps. Idempotent.
pub fn delete_guide<R>(payload: DeleteGuideFormPayload, repo: &mut R) -> ServiceResult<()>
where
    R: GuideWriter,
{
    repo.delete_guide(&payload.guide_id);
    Ok(())
}

pub fn add_step<R>(payload: AddStepFormPayload, repo: &mut R) -> ServiceResult<StepDto>
where
    R: GuideWriter,
{
    let (guide_id, new_step) = payload.into_new_step();
    match repo.add_step(&guide_id, new_step) {
        Some(step) => Ok(step.into()),
        None => Err(ServiceError::NotFound),
    }
}

pub fn update_step<R>(payload: UpdateStepFormPayload, repo: &mut R) -> ServiceResult<()>
where
    R: GuideReader + GuideWriter,
{
    let UpdateStepFormPayload {
        guide_id,
        step_id,
        updates,
    } = payload;
    let found = repo
        .get_guide_by_id(&guide_id)
        .is_some_and(|guide| guide.step_by_id(&step_id).is_some());
    if !found {
        return Err(ServiceError::NotFound);
    }
    repo.update_step(&guide_id, &step_id, updates);
    Ok(())
}

/// Removes a step; the remaining steps are renumbered by the store. Idempotent.
pub fn delete_step<R>(payload: DeleteStepFormPayload, repo: &mut R) -> ServiceResult<()>
where
    R: GuideWriter,
{
    repo.delete_step(&payload.guide_id, &payload.step_id);
    Ok(())
}

/// Moves a step one position; boundary moves are accepted and do nothing.
pub fn move_step<R>(payload: MoveStepFormPayload, repo: &mut R) -> ServiceResult<()>
where
    R: GuideWriter,
{
    repo.reorder_steps(&payload.guide_id, &payload.step_id, payload.direction);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::NewCategory;
    use crate::domain::types::{CategoryId, CategoryName, GuideTitle, StepDescription, StepId};
    use crate::dto::guides::{GUIDE_PREVIEW_PLACEHOLDER, UNCATEGORIZED_LABEL};
    use crate::storage::memory::MemoryStorage;
    use crate::storage::{CATEGORIES_KEY, GUIDES_KEY};
    use crate::store::{CategoryWriter, GuideStore};

    fn empty_store() -> GuideStore<MemoryStorage> {
        GuideStore::open(
            MemoryStorage::new()
                .with_entry(GUIDES_KEY, "[]")
                .with_entry(CATEGORIES_KEY, "[]"),
        )
    }

    fn store_with_category(name: &str) -> (GuideStore<MemoryStorage>, CategoryId) {
        let mut store = empty_store();
        let category = store.add_category(NewCategory {
            name: CategoryName::new(name).unwrap(),
        });
        (store, category.id)
    }

    fn add_guide_payload(category_id: &CategoryId) -> AddGuideFormPayload {
        AddGuideFormPayload {
            title: GuideTitle::new("Bake a Cake").unwrap(),
            description: "A simple guide.".to_string(),
            category_id: category_id.clone(),
        }
    }

    fn step_payload(guide_id: &GuideId, description: &str) -> AddStepFormPayload {
        AddStepFormPayload {
            guide_id: guide_id.clone(),
            description: StepDescription::new(description).unwrap(),
            hint: None,
            image_url: None,
        }
    }

    #[test]
    fn add_guide_rejects_an_unknown_category() {
        let mut store = empty_store();
        let payload = add_guide_payload(&CategoryId::new("missing").unwrap());
        let err = add_guide(payload, &mut store).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
        assert!(store.guides().is_empty());
    }

    #[test]
    fn show_guides_resolves_category_names_and_previews() {
        let (mut store, category_id) = store_with_category("Cooking");
        let guide = add_guide(add_guide_payload(&category_id), &mut store).unwrap();

        let cards = show_guides(&store);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].category_name, "Cooking");
        assert_eq!(cards[0].preview_image_url, GUIDE_PREVIEW_PLACEHOLDER);

        add_step(step_payload(&guide.id, "Preheat the oven"), &mut store).unwrap();
        let cards = show_guides(&store);
        assert_eq!(
            cards[0].preview_image_url,
            "https://placehold.co/600x400.png?text=Step+1"
        );
    }

    #[test]
    fn show_guides_falls_back_to_an_uncategorized_label() {
        // A persisted guide may reference a category that no longer resolves.
        let storage = MemoryStorage::new()
            .with_entry(
                GUIDES_KEY,
                r#"[{"id":"g1","title":"Orphan","description":"","categoryId":"gone",
                    "steps":[],"createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}]"#,
            )
            .with_entry(CATEGORIES_KEY, "[]");
        let store = GuideStore::open(storage);

        let cards = show_guides(&store);
        assert_eq!(cards[0].category_name, UNCATEGORIZED_LABEL);
    }

    #[test]
    fn show_guide_sorts_steps_for_presentation() {
        let (mut store, category_id) = store_with_category("Cooking");
        let guide = add_guide(add_guide_payload(&category_id), &mut store).unwrap();
        add_step(step_payload(&guide.id, "one"), &mut store).unwrap();
        add_step(step_payload(&guide.id, "two"), &mut store).unwrap();

        let detail = show_guide(&guide.id, &store).unwrap();
        let numbers: Vec<u32> = detail.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, [1, 2]);
    }

    #[test]
    fn update_step_reports_a_missing_step() {
        let (mut store, category_id) = store_with_category("Cooking");
        let guide = add_guide(add_guide_payload(&category_id), &mut store).unwrap();

        let err = update_step(
            UpdateStepFormPayload {
                guide_id: guide.id.clone(),
                step_id: StepId::new("ghost").unwrap(),
                updates: Default::default(),
            },
            &mut store,
        )
        .unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }
}
