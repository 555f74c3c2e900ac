//! Form and edit state for the milestone entry surface.
//!
//! The form stages raw field text until commit; validation happens in the
//! store. An optional editing id distinguishes the two modes: absent means
//! a commit adds a new milestone, present means it rewrites that record.

use crate::date;
use crate::error::Result;
use crate::model::{Draft, Milestone};
use crate::storage::BlobStore;
use crate::store::MilestoneStore;

/// Timeline value the draft is seeded with.
pub const DEFAULT_TIMELINE: &str = "Career";

/// A form field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Timeline,
    Title,
    Start,
    End,
}

/// The two form modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Adding,
    Editing,
}

/// Staged draft values plus the optional edit target.
#[derive(Debug, Clone)]
pub struct MilestoneForm {
    draft: Draft,
    editing: Option<String>,
}

impl MilestoneForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            draft: seeded_draft(),
            editing: None,
        }
    }

    /// Current draft values.
    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Id of the milestone being edited, if any.
    #[must_use]
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        if self.editing.is_some() {
            FormMode::Editing
        } else {
            FormMode::Adding
        }
    }

    /// Overwrite one field. No validation happens here; bad input is only
    /// rejected at commit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Timeline => self.draft.timeline = value,
            Field::Title => self.draft.title = value,
            Field::Start => self.draft.start = value,
            Field::End => self.draft.end = value,
        }
    }

    /// Copy a milestone's values into the draft and make it the edit
    /// target. Calling this while already editing retargets; there is
    /// never more than one active edit target.
    pub fn begin_edit(&mut self, milestone: &Milestone) {
        self.draft = Draft {
            timeline: milestone.timeline.clone(),
            title: milestone.title.clone(),
            start: date::to_field(milestone.start),
            end: date::to_field(milestone.end),
        };
        self.editing = Some(milestone.id.clone());
    }

    /// Drop the edit target and reset the draft to its seeded state.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft = seeded_draft();
    }

    /// Commit the draft: update the edit target when one is set, add a new
    /// milestone otherwise.
    ///
    /// On success the title and date fields are cleared, the timeline
    /// value is kept for repeated entry, and the form returns to adding
    /// mode. On failure the draft and mode are left untouched.
    ///
    /// # Errors
    ///
    /// Propagates validation and persistence errors from the store.
    pub fn commit<S: BlobStore>(&mut self, store: &mut MilestoneStore<S>) -> Result<Milestone> {
        let committed = match self.editing.as_deref() {
            Some(id) => store.update(id, &self.draft)?,
            None => store.add(&self.draft)?,
        };

        self.editing = None;
        self.draft.title.clear();
        self.draft.start.clear();
        self.draft.end.clear();

        Ok(committed)
    }

    /// Forget the edit target if `id` was it. Called when a milestone is
    /// deleted out from under the form; the draft text is left as typed.
    pub fn milestone_deleted(&mut self, id: &str) {
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
    }
}

impl Default for MilestoneForm {
    fn default() -> Self {
        Self::new()
    }
}

fn seeded_draft() -> Draft {
    Draft {
        timeline: DEFAULT_TIMELINE.to_string(),
        ..Draft::default()
    }
}
