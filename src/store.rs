//! Milestone store with write-through persistence.
//!
//! The full CRUD API for milestones. Every successful mutation serializes
//! the whole list to JSON and writes it to the injected [`BlobStore`], so
//! the persisted blob and the in-memory state never diverge.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::date;
use crate::error::{Result, TimelineError};
use crate::model::{Draft, Milestone};
use crate::storage::{BlobStore, STORAGE_KEY};
use crate::util;

/// Ordered milestone list over an injected persistence backend.
pub struct MilestoneStore<S: BlobStore> {
    milestones: Vec<Milestone>,
    backend: S,
}

impl<S: BlobStore> MilestoneStore<S> {
    /// Open a store over `backend`, loading any previously persisted list.
    ///
    /// An absent, unreadable, or unparsable blob falls back to an empty
    /// list; loading never fails.
    #[must_use]
    pub fn open(backend: S) -> Self {
        let milestones = match backend.get(STORAGE_KEY) {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(list) => list,
                Err(e) => {
                    warn!("discarding unparsable milestone blob: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("could not read milestone blob: {e}");
                Vec::new()
            }
        };
        Self {
            milestones,
            backend,
        }
    }

    /// Validate a draft and append a new milestone with a fresh unique id.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an empty title, `InvalidDate` for a start
    /// or end matching neither accepted format, or a persistence error
    /// from the write-through. No mutation occurs on validation failure.
    pub fn add(&mut self, draft: &Draft) -> Result<Milestone> {
        let (start, end) = validate(draft)?;

        let id = util::generate_id(&draft.title, &draft.timeline, self.milestones.len(), |id| {
            self.milestones.iter().any(|m| m.id == id)
        });
        let milestone = Milestone {
            id,
            timeline: draft.timeline.clone(),
            title: draft.title.clone(),
            start,
            end,
        };

        self.milestones.push(milestone.clone());
        self.persist()?;
        Ok(milestone)
    }

    /// Replace the milestone with matching `id`, preserving its id and
    /// list position.
    ///
    /// # Errors
    ///
    /// Returns `MilestoneNotFound` if no record has `id`, validation
    /// errors as [`add`](Self::add) does, or a persistence error. No
    /// mutation occurs on any failure.
    pub fn update(&mut self, id: &str, draft: &Draft) -> Result<Milestone> {
        let (start, end) = validate(draft)?;

        let slot = self
            .milestones
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| TimelineError::MilestoneNotFound { id: id.to_string() })?;

        slot.timeline = draft.timeline.clone();
        slot.title = draft.title.clone();
        slot.start = start;
        slot.end = end;
        let updated = slot.clone();

        self.persist()?;
        Ok(updated)
    }

    /// Remove the milestone with matching `id`.
    ///
    /// Returns `Ok(false)` without touching persistence when the id is
    /// absent, so deleting twice is a no-op the second time.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the write-through fails.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.milestones.len();
        self.milestones.retain(|m| m.id != id);
        if self.milestones.len() == before {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    /// Look up a milestone by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    /// Current list, insertion order.
    #[must_use]
    pub fn list(&self) -> &[Milestone] {
        &self.milestones
    }

    /// Number of milestones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.milestones.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }

    fn persist(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.milestones)?;
        self.backend.set(STORAGE_KEY, &blob)?;
        debug!(count = self.milestones.len(), "persisted milestone list");
        Ok(())
    }
}

fn validate(draft: &Draft) -> Result<(NaiveDate, NaiveDate)> {
    if draft.title.trim().is_empty() {
        return Err(TimelineError::validation("title", "cannot be empty"));
    }
    let start = date::parse(&draft.start)?;
    let end = date::parse(&draft.end)?;
    Ok((start, end))
}
