//! View-model facade tying the store, form, and projection together.

use crate::chart::{self, ChartData};
use crate::error::{Result, TimelineError};
use crate::form::{Field, MilestoneForm};
use crate::model::Milestone;
use crate::storage::BlobStore;
use crate::store::MilestoneStore;

/// The planner surface: one store, one form, chart on demand.
///
/// Mirrors the user-visible behavior of the timeline page: field edits,
/// add/update submission, edit and cancel, per-row delete, and the chart
/// recomputed from whatever the list currently holds.
pub struct Planner<S: BlobStore> {
    store: MilestoneStore<S>,
    form: MilestoneForm,
}

impl<S: BlobStore> Planner<S> {
    /// Open a planner over `backend`, loading any persisted milestones.
    #[must_use]
    pub fn open(backend: S) -> Self {
        Self {
            store: MilestoneStore::open(backend),
            form: MilestoneForm::new(),
        }
    }

    /// Overwrite one draft field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Commit the draft through the form.
    ///
    /// # Errors
    ///
    /// Propagates validation and persistence errors; the draft is left
    /// intact so the caller can surface the error and the user can fix
    /// the input.
    pub fn submit(&mut self) -> Result<Milestone> {
        self.form.commit(&mut self.store)
    }

    /// Begin editing the milestone with `id`.
    ///
    /// # Errors
    ///
    /// Returns `MilestoneNotFound` for an unknown id.
    pub fn edit(&mut self, id: &str) -> Result<()> {
        let milestone = self
            .store
            .get(id)
            .ok_or_else(|| TimelineError::MilestoneNotFound { id: id.to_string() })?;
        self.form.begin_edit(milestone);
        Ok(())
    }

    /// Drop the edit target and reset the draft.
    pub fn cancel(&mut self) {
        self.form.cancel_edit();
    }

    /// Delete the milestone with `id`, clearing the edit target when the
    /// deleted record was being edited. Returns whether anything was
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the write-through fails.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let removed = self.store.delete(id)?;
        self.form.milestone_deleted(id);
        Ok(removed)
    }

    /// Current milestone list, insertion order.
    #[must_use]
    pub fn milestones(&self) -> &[Milestone] {
        self.store.list()
    }

    /// Chart projection of the current list.
    #[must_use]
    pub fn chart(&self) -> ChartData {
        chart::project(self.store.list())
    }

    /// Read access to the form state.
    #[must_use]
    pub fn form(&self) -> &MilestoneForm {
        &self.form
    }
}
