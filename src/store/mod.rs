//! The guide store: sole owner and mutator of the guide/category collections.
//!
//! Reads and writes go through the reader/writer traits so service functions
//! can stay generic over the concrete store. Every mutation ends with a
//! fire-and-forget persist of the affected namespace; the `guides` and
//! `categories` namespaces are saved independently.

use thiserror::Error;

use crate::domain::category::{Category, CategoryUpdate, NewCategory};
use crate::domain::guide::{Guide, GuideUpdate, NewGuide, NewStep, Step, StepUpdate};
use crate::domain::types::{CategoryId, GuideId, MoveDirection, StepId, StepNumber};
use crate::seed;
use crate::storage::{self, CATEGORIES_KEY, GUIDES_KEY, LoadOutcome, StateStorage};

/// Errors surfaced by mutating store operations.
///
/// Not-found conditions are silent no-ops by contract; the in-use check on
/// category deletion is the one blocking condition reported to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The category is still assigned to at least one guide.
    #[error("category {0} is assigned to one or more guides")]
    CategoryInUse(CategoryId),
}

/// Read-only operations for guide entities.
pub trait GuideReader {
    /// All guides, newest-first.
    fn guides(&self) -> &[Guide];
    /// Retrieve a guide by its identifier.
    fn get_guide_by_id(&self, id: &GuideId) -> Option<&Guide>;
}

/// Write operations for guide entities and their steps.
pub trait GuideWriter {
    /// Create an empty guide and prepend it to the collection.
    fn add_guide(&mut self, data: NewGuide) -> Guide;
    /// Merge fields into the matching guide; no-op if not found.
    fn update_guide(&mut self, id: &GuideId, updates: GuideUpdate);
    /// Remove a guide and, implicitly, all of its steps; no-op if not found.
    fn delete_guide(&mut self, id: &GuideId);
    /// Append a step to a guide; returns `None` if the guide is missing.
    fn add_step(&mut self, guide_id: &GuideId, data: NewStep) -> Option<Step>;
    /// Merge fields into the matching step; no-op if either id is missing.
    fn update_step(&mut self, guide_id: &GuideId, step_id: &StepId, updates: StepUpdate);
    /// Remove a step and renumber the remainder; no-op if either id is missing.
    fn delete_step(&mut self, guide_id: &GuideId, step_id: &StepId);
    /// Swap a step with its immediate neighbor; no-op at either boundary.
    fn reorder_steps(&mut self, guide_id: &GuideId, step_id: &StepId, direction: MoveDirection);
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// All categories, newest-first.
    fn categories(&self) -> &[Category];
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: &CategoryId) -> Option<&Category>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Create a category and prepend it to the collection.
    fn add_category(&mut self, data: NewCategory) -> Category;
    /// Merge fields into the matching category; no-op if not found.
    fn update_category(&mut self, id: &CategoryId, updates: CategoryUpdate);
    /// Remove a category, refusing while any guide still references it.
    fn delete_category(&mut self, id: &CategoryId) -> Result<(), StoreError>;
}

/// In-memory owner of all guide/category state, backed by a storage adapter.
pub struct GuideStore<S: StateStorage> {
    storage: S,
    guides: Vec<Guide>,
    categories: Vec<Category>,
    loading: bool,
}

impl<S: StateStorage> GuideStore<S> {
    /// Constructs an un-hydrated store; call [`Self::hydrate`] once before
    /// serving reads.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            guides: Vec::new(),
            categories: Vec::new(),
            loading: true,
        }
    }

    /// Constructs and hydrates in one step.
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.hydrate();
        store
    }

    /// One-time load of both namespaces, substituting seed data for a
    /// namespace that was never saved or cannot be read. Repeat calls are
    /// no-ops.
    pub fn hydrate(&mut self) {
        if !self.loading {
            return;
        }
        let mut guides_seeded = false;
        self.guides = match storage::load(&self.storage, GUIDES_KEY) {
            LoadOutcome::Loaded(guides) => guides,
            LoadOutcome::Absent => {
                guides_seeded = true;
                seed::initial_guides()
            }
            LoadOutcome::Unreadable => {
                log::warn!("persisted guides are unreadable, falling back to seed data");
                guides_seeded = true;
                seed::initial_guides()
            }
        };
        let mut categories_seeded = false;
        self.categories = match storage::load(&self.storage, CATEGORIES_KEY) {
            LoadOutcome::Loaded(categories) => categories,
            LoadOutcome::Absent => {
                categories_seeded = true;
                seed::initial_categories()
            }
            LoadOutcome::Unreadable => {
                log::warn!("persisted categories are unreadable, falling back to seed data");
                categories_seeded = true;
                seed::initial_categories()
            }
        };
        self.loading = false;
        // Persist substituted seed data so the stored value wins from now on.
        if guides_seeded {
            self.persist_guides();
        }
        if categories_seeded {
            self.persist_categories();
        }
    }

    /// True only between construction and the one-time hydration.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Borrow the underlying storage adapter.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist_guides(&mut self) {
        storage::save(&mut self.storage, GUIDES_KEY, &self.guides);
    }

    fn persist_categories(&mut self) {
        storage::save(&mut self.storage, CATEGORIES_KEY, &self.categories);
    }
}

/// Rewrites `stepNumber` to the contiguous run `1..=N` in array order.
///
/// Must run after every structural change to a step sequence.
fn renumber(steps: &mut [Step]) {
    for (index, step) in steps.iter_mut().enumerate() {
        step.step_number = StepNumber::from_index(index);
    }
}

impl<S: StateStorage> GuideReader for GuideStore<S> {
    fn guides(&self) -> &[Guide] {
        &self.guides
    }

    fn get_guide_by_id(&self, id: &GuideId) -> Option<&Guide> {
        self.guides.iter().find(|g| g.id == *id)
    }
}

impl<S: StateStorage> GuideWriter for GuideStore<S> {
    fn add_guide(&mut self, data: NewGuide) -> Guide {
        let guide = Guide::new(data);
        self.guides.insert(0, guide.clone());
        self.persist_guides();
        guide
    }

    fn update_guide(&mut self, id: &GuideId, updates: GuideUpdate) {
        let mut changed = false;
        if let Some(guide) = self.guides.iter_mut().find(|g| g.id == *id) {
            guide.apply(updates);
            guide.touch();
            changed = true;
        }
        if changed {
            self.persist_guides();
        }
    }

    fn delete_guide(&mut self, id: &GuideId) {
        let before = self.guides.len();
        self.guides.retain(|g| g.id != *id);
        if self.guides.len() != before {
            self.persist_guides();
        }
    }

    fn add_step(&mut self, guide_id: &GuideId, data: NewStep) -> Option<Step> {
        let created = {
            let guide = self.guides.iter_mut().find(|g| g.id == *guide_id)?;
            // Next number is max+1 rather than count+1; renumbering on
            // delete keeps the sequence contiguous, so the two agree.
            let step_number = guide
                .steps
                .iter()
                .map(|s| s.step_number)
                .max()
                .map(StepNumber::succ)
                .unwrap_or(StepNumber::first());
            let step = Step::new(data, step_number);
            guide.steps.push(step.clone());
            guide.touch();
            step
        };
        self.persist_guides();
        Some(created)
    }

    fn update_step(&mut self, guide_id: &GuideId, step_id: &StepId, updates: StepUpdate) {
        let mut changed = false;
        if let Some(guide) = self.guides.iter_mut().find(|g| g.id == *guide_id) {
            if let Some(step) = guide.steps.iter_mut().find(|s| s.id == *step_id) {
                step.apply(updates);
                changed = true;
            }
            if changed {
                guide.touch();
            }
        }
        if changed {
            self.persist_guides();
        }
    }

    fn delete_step(&mut self, guide_id: &GuideId, step_id: &StepId) {
        let mut changed = false;
        if let Some(guide) = self.guides.iter_mut().find(|g| g.id == *guide_id) {
            let before = guide.steps.len();
            guide.steps.retain(|s| s.id != *step_id);
            if guide.steps.len() != before {
                renumber(&mut guide.steps);
                guide.touch();
                changed = true;
            }
        }
        if changed {
            self.persist_guides();
        }
    }

    fn reorder_steps(&mut self, guide_id: &GuideId, step_id: &StepId, direction: MoveDirection) {
        let mut changed = false;
        if let Some(guide) = self.guides.iter_mut().find(|g| g.id == *guide_id) {
            if let Some(index) = guide.steps.iter().position(|s| s.id == *step_id) {
                let target = match direction {
                    MoveDirection::Up if index > 0 => Some(index - 1),
                    MoveDirection::Down if index + 1 < guide.steps.len() => Some(index + 1),
                    MoveDirection::Up | MoveDirection::Down => None,
                };
                if let Some(target) = target {
                    guide.steps.swap(index, target);
                    renumber(&mut guide.steps);
                    guide.touch();
                    changed = true;
                }
            }
        }
        if changed {
            self.persist_guides();
        }
    }
}

impl<S: StateStorage> CategoryReader for GuideStore<S> {
    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn get_category_by_id(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == *id)
    }
}

impl<S: StateStorage> CategoryWriter for GuideStore<S> {
    fn add_category(&mut self, data: NewCategory) -> Category {
        let category = Category::new(data);
        self.categories.insert(0, category.clone());
        self.persist_categories();
        category
    }

    fn update_category(&mut self, id: &CategoryId, updates: CategoryUpdate) {
        let mut changed = false;
        if let Some(category) = self.categories.iter_mut().find(|c| c.id == *id) {
            category.apply(updates);
            changed = true;
        }
        if changed {
            self.persist_categories();
        }
    }

    fn delete_category(&mut self, id: &CategoryId) -> Result<(), StoreError> {
        if self.guides.iter().any(|g| g.category_id == *id) {
            return Err(StoreError::CategoryInUse(id.clone()));
        }
        let before = self.categories.len();
        self.categories.retain(|c| c.id != *id);
        if self.categories.len() != before {
            self.persist_categories();
        }
        Ok(())
    }
}
