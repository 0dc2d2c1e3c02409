//! Edit buffers for the dashboard's forms.
//!
//! Each editable entity has a `Draft` whose fields are all optional: `None`
//! means the field was never touched. A [`FormState`] pairs the last record
//! fetched from the server with the draft and answers whether a save is needed.

mod drafts;

pub use drafts::{CategoryDraft, MemberDraft, SalonProfileDraft, ServiceDraft};

use serde::Serialize;

/// An entity with a typed draft and an explicit diff against it
pub trait Editable: Clone {
    type Draft: Default + Clone + Serialize;

    /// Names of the draft fields whose value differs from `self`
    fn changed_fields(&self, draft: &Self::Draft) -> Vec<&'static str>;

    /// Copy of `self` with every set draft field applied
    fn apply(&self, draft: &Self::Draft) -> Self;
}

/// True when the draft holds a value different from the current one
pub(crate) fn differs<T: PartialEq>(draft: &Option<T>, current: &T) -> bool {
    matches!(draft, Some(value) if value != current)
}

/// Last-known-good record plus the working draft
#[derive(Debug, Clone)]
pub struct FormState<T: Editable> {
    baseline: T,
    draft: T::Draft,
}

impl<T: Editable> FormState<T> {
    pub fn new(baseline: T) -> Self {
        Self {
            baseline,
            draft: T::Draft::default(),
        }
    }

    pub fn baseline(&self) -> &T {
        &self.baseline
    }

    pub fn draft(&self) -> &T::Draft {
        &self.draft
    }

    /// Mutable access for field edits
    pub fn draft_mut(&mut self) -> &mut T::Draft {
        &mut self.draft
    }

    /// Whether any touched field differs from the baseline; gates Save/Cancel
    pub fn is_dirty(&self) -> bool {
        !self.changed_fields().is_empty()
    }

    pub fn changed_fields(&self) -> Vec<&'static str> {
        self.baseline.changed_fields(&self.draft)
    }

    /// Baseline with the draft applied, i.e. what a save would produce
    pub fn merged(&self) -> T {
        self.baseline.apply(&self.draft)
    }

    /// Throw away all edits
    pub fn reset(&mut self) {
        self.draft = T::Draft::default();
    }

    /// Adopt a freshly fetched record after a save and start a clean draft
    pub fn commit(&mut self, baseline: T) {
        self.baseline = baseline;
        self.reset();
    }
}
