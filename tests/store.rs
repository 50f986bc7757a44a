use std::fs;

use guideflow::domain::guide::{Guide, NewStep};
use guideflow::domain::types::{CategoryId, MoveDirection, StepDescription};
use guideflow::forms::guides::{AddGuideForm, AddGuideFormPayload};
use guideflow::forms::steps::{AddStepForm, AddStepFormPayload};
use guideflow::services::guides::{add_guide, add_step, show_guides};
use guideflow::storage::{
    CATEGORIES_KEY, GUIDES_KEY, StateStorage, StorageError, load, LoadOutcome,
};
use guideflow::store::{
    CategoryReader, CategoryWriter, GuideReader, GuideStore, GuideWriter, StoreError,
};

mod common;

fn new_step(description: &str) -> NewStep {
    NewStep {
        description: StepDescription::new(description).expect("valid description"),
        hint: None,
        image_url: None,
    }
}

#[test]
fn first_run_hydrates_the_built_in_seed_data() {
    let test_dir = common::TestDir::new();
    let store = GuideStore::open(test_dir.storage());

    let names: Vec<&str> = store.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Cooking", "DIY Projects", "Tech Setup"]);

    assert_eq!(store.guides().len(), 1);
    let guide = &store.guides()[0];
    assert_eq!(guide.title.as_str(), "Bake a Cake");
    let numbers: Vec<u32> = guide.steps.iter().map(|s| s.step_number.get()).collect();
    assert_eq!(numbers, [1, 2, 3]);
}

#[test]
fn state_survives_across_store_sessions() {
    let test_dir = common::TestDir::new();

    let guide_id = {
        let mut store = GuideStore::open(test_dir.storage());
        let category_id = store.categories()[0].id.clone();
        let guide = add_guide(
            AddGuideFormPayload {
                title: "Fix a Bike Puncture".try_into().expect("valid title"),
                description: "Patch an inner tube at home.".to_string(),
                category_id,
            },
            &mut store,
        )
        .expect("guide should be created");
        store
            .add_step(&guide.id, new_step("Remove the wheel"))
            .expect("step should be created");
        guide.id
    };

    let reopened = GuideStore::open(test_dir.storage());
    let guide = reopened
        .get_guide_by_id(&guide_id)
        .expect("guide should survive a restart");
    assert_eq!(guide.title.as_str(), "Fix a Bike Puncture");
    assert_eq!(guide.steps.len(), 1);
    // Newest guide stays at the front.
    assert_eq!(reopened.guides()[0].id, guide_id);
}

#[test]
fn unknown_fields_survive_mutation_and_restart() {
    let test_dir = common::TestDir::new();

    {
        let mut store = GuideStore::open(test_dir.storage());
        let guide_id = store.guides()[0].id.clone();
        // Any guide mutation rewrites the whole namespace.
        store.add_step(&guide_id, new_step("Frost the cake"));
    }

    let raw = fs::read_to_string(test_dir.path().join("guides.json")).expect("guides.json exists");
    assert!(raw.contains("data-ai-hint"));
    assert!(raw.contains("oven kitchen"));
}

#[test]
fn persisted_guides_round_trip_structurally() {
    let test_dir = common::TestDir::new();
    let mut store = GuideStore::open(test_dir.storage());
    let guide_id = store.guides()[0].id.clone();
    store.add_step(
        &guide_id,
        NewStep {
            description: StepDescription::new("Serve").expect("valid description"),
            hint: Some("Let it cool first.".to_string()),
            image_url: None,
        },
    );

    let storage = test_dir.storage();
    match load::<_, Vec<Guide>>(&storage, GUIDES_KEY) {
        LoadOutcome::Loaded(guides) => {
            assert_eq!(
                guides,
                store.guides().to_vec(),
                "loaded guides should equal the in-memory collection"
            )
        }
        other => panic!("expected loaded guides, got {other:?}"),
    }
}

#[test]
fn deleting_and_reordering_steps_keeps_numbering_contiguous() {
    let test_dir = common::TestDir::new();
    let mut store = GuideStore::open(test_dir.storage());
    let guide_id = store.guides()[0].id.clone();
    let step2_id = store.guides()[0].steps[1].id.clone();

    store.delete_step(&guide_id, &step2_id);
    let numbers: Vec<u32> = store.guides()[0]
        .steps
        .iter()
        .map(|s| s.step_number.get())
        .collect();
    assert_eq!(numbers, [1, 2]);

    let replacement = store
        .add_step(&guide_id, new_step("Stir in the vanilla"))
        .expect("step should be created");
    assert_ne!(replacement.id, step2_id);
    assert_eq!(replacement.step_number.get(), 3);

    let first_id = store.guides()[0].steps[0].id.clone();
    store.reorder_steps(&guide_id, &first_id, MoveDirection::Down);
    let ids: Vec<String> = store.guides()[0]
        .steps
        .iter()
        .map(|s| s.id.as_str().to_string())
        .collect();
    assert_eq!(ids[1], first_id.as_str());
    let numbers: Vec<u32> = store.guides()[0]
        .steps
        .iter()
        .map(|s| s.step_number.get())
        .collect();
    assert_eq!(numbers, [1, 2, 3]);
}

#[test]
fn category_deletion_is_blocked_while_in_use_and_allowed_after() {
    let test_dir = common::TestDir::new();
    let mut store = GuideStore::open(test_dir.storage());

    // Seed guide references the Cooking category.
    let cooking_id = store.categories()[0].id.clone();
    let err = store
        .delete_category(&cooking_id)
        .expect_err("deletion should be blocked");
    assert_eq!(err, StoreError::CategoryInUse(cooking_id.clone()));
    assert_eq!(store.categories().len(), 3);

    let seed_guide_id = store.guides()[0].id.clone();
    store.delete_guide(&seed_guide_id);
    store
        .delete_category(&cooking_id)
        .expect("deletion should succeed once unreferenced");

    let reopened = GuideStore::open(test_dir.storage());
    assert!(reopened.get_category_by_id(&cooking_id).is_none());
    assert_eq!(reopened.categories().len(), 2);
}

#[test]
fn corrupt_guides_namespace_falls_back_to_seed_data() {
    let test_dir = common::TestDir::new();
    fs::create_dir_all(test_dir.path()).expect("data dir");
    fs::write(test_dir.path().join("guides.json"), "{definitely not json")
        .expect("should write corrupt blob");
    fs::write(test_dir.path().join("categories.json"), "[]").expect("should write categories");

    let store = GuideStore::open(test_dir.storage());
    assert_eq!(store.guides().len(), 1);
    assert_eq!(store.guides()[0].title.as_str(), "Bake a Cake");
    // The intact namespace is honored independently.
    assert!(store.categories().is_empty());
}

/// Storage whose writes always fail, for exercising the swallow policy.
struct BrokenWrites;

impl StateStorage for BrokenWrites {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }
}

#[test]
fn failed_saves_never_disturb_in_memory_state() {
    let mut store = GuideStore::open(BrokenWrites);
    let guide_id = store.guides()[0].id.clone();

    let step = store
        .add_step(&guide_id, new_step("Still works"))
        .expect("mutation should succeed despite the failing save");
    assert_eq!(step.step_number.get(), 4);
    assert_eq!(store.guides()[0].steps.len(), 4);
}

#[test]
fn forms_feed_services_end_to_end() {
    let test_dir = common::TestDir::new();
    let mut store = GuideStore::open(test_dir.storage());
    let category_id: CategoryId = store.categories()[2].id.clone();

    let payload: AddGuideFormPayload = AddGuideForm {
        title: "Set Up a Router".to_string(),
        description: String::new(),
        category_id: category_id.as_str().to_string(),
    }
    .try_into()
    .expect("form should validate");
    let guide = add_guide(payload, &mut store).expect("guide should be created");
    assert!(guide.steps.is_empty());
    assert_eq!(guide.created_at, guide.updated_at);

    let payload: AddStepFormPayload = AddStepForm {
        guide_id: guide.id.as_str().to_string(),
        description: "Plug in the router".to_string(),
        hint: Some(String::new()),
        image_url: None,
    }
    .try_into()
    .expect("form should validate");
    let step = add_step(payload, &mut store).expect("step should be created");
    assert_eq!(step.step_number, 1);
    assert_eq!(step.hint, None);
    assert_eq!(
        step.image_url.as_deref(),
        Some("https://placehold.co/600x400.png?text=Step+1")
    );

    let cards = show_guides(&store);
    assert_eq!(cards[0].title, "Set Up a Router");
    assert_eq!(cards[0].category_name, "Tech Setup");

    // Both namespaces are saved independently.
    assert!(test_dir.path().join("guides.json").exists());
    match load::<_, serde_json::Value>(&test_dir.storage(), CATEGORIES_KEY) {
        LoadOutcome::Loaded(value) => {
            assert_eq!(value.as_array().map(Vec::len), Some(3));
        }
        other => panic!("expected loaded categories, got {other:?}"),
    }
}
