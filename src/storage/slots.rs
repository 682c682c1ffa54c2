//! Growable slot array backing the tree

use super::{GrowthEvent, GrowthProfile};

/// Index-addressable array of optional slots
///
/// Capacity policy: a write to index `i` past the end first extends the
/// array to `max(2 * len, i + 1)` empty slots. Occupied slots keep their
/// index and value across growth.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlotArray<T> {
    /// Backing slots (`None` = empty)
    slots: Vec<Option<T>>,

    /// Growth profile (if enabled)
    profile: Option<GrowthProfile>,
}

impl<T> SlotArray<T> {
    /// Create storage with `initial_len` empty slots
    pub fn new(initial_len: usize, profile_enabled: bool) -> Self {
        let mut slots = Vec::with_capacity(initial_len);
        slots.resize_with(initial_len, || None);

        Self {
            slots,
            profile: if profile_enabled {
                Some(GrowthProfile {
                    max_len: initial_len,
                    timeline: Vec::new(),
                })
            } else {
                None
            },
        }
    }

    /// Number of addressable slots (occupied or not)
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no slot has been allocated yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// In bounds and holding a value
    #[inline]
    pub fn is_occupied(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    /// Value at `index`, if in bounds and occupied
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Mutable value at `index`, if in bounds and occupied
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Make `index` addressable, growing per the capacity policy
    pub fn ensure_index(&mut self, index: usize) {
        let old_len = self.slots.len();
        if index < old_len {
            return;
        }

        let new_len = (2 * old_len).max(index + 1);
        self.slots.resize_with(new_len, || None);
        tracing::debug!("slot storage grew {} -> {} for index {}", old_len, new_len, index);

        if let Some(ref mut p) = self.profile {
            p.max_len = p.max_len.max(new_len);
            p.timeline.push(GrowthEvent {
                requested_index: index,
                old_len,
                new_len,
            });
        }
    }

    /// Store `value` at `index`, growing first if needed
    ///
    /// Returns whatever the slot held before.
    pub fn insert(&mut self, index: usize, value: T) -> Option<T> {
        self.ensure_index(index);
        self.slots[index].replace(value)
    }

    /// Vacate `index`, returning its value
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Count occupied slots by scanning the whole array
    pub fn count_occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Growth profile, when enabled
    pub fn profile(&self) -> Option<&GrowthProfile> {
        self.profile.as_ref()
    }
}
