//! Exclusive resource with an implicit FIFO wait list.
//!
//! A [`Facility`] is held by at most one entity. Seizing a busy facility
//! appends the caller to the wait list; releasing it hands ownership to the
//! head of that list. Waking the new holder is left to the caller, which
//! knows what event to schedule for it.

use std::collections::VecDeque;

use bevy_ecs::prelude::{Component, Entity};

use crate::error::FacilityError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeizeOutcome {
    Acquired,
    /// The facility is busy; the caller sits at `position` (0-based) in the wait list.
    Queued { position: usize },
}

#[derive(Debug, Clone, Default, Component)]
pub struct Facility {
    holder: Option<Entity>,
    waiters: VecDeque<Entity>,
}

impl Facility {
    pub fn is_busy(&self) -> bool {
        self.holder.is_some()
    }

    pub fn holder(&self) -> Option<Entity> {
        self.holder
    }

    pub fn queue_len(&self) -> usize {
        self.waiters.len()
    }

    pub fn seize(&mut self, owner: Entity) -> SeizeOutcome {
        match self.holder {
            None => {
                self.holder = Some(owner);
                SeizeOutcome::Acquired
            }
            Some(holder) if holder == owner => SeizeOutcome::Acquired,
            Some(_) => {
                if let Some(position) = self.waiters.iter().position(|w| *w == owner) {
                    return SeizeOutcome::Queued { position };
                }
                self.waiters.push_back(owner);
                SeizeOutcome::Queued {
                    position: self.waiters.len() - 1,
                }
            }
        }
    }

    /// Releases the facility held by `owner`.
    ///
    /// Returns the waiter that now holds the facility, if any.
    pub fn release(&mut self, owner: Entity) -> Result<Option<Entity>, FacilityError> {
        if self.holder != Some(owner) {
            return Err(FacilityError::NotHeld {
                requester: owner,
                holder: self.holder,
            });
        }
        self.holder = self.waiters.pop_front();
        Ok(self.holder)
    }
}
