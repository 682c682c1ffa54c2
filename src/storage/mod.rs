//! Slot storage and growth accounting
//!
//! The tree keeps its nodes in a flat array of optional slots.
//! Growth doubles the array (or jumps straight to the requested index),
//! never moves an occupied slot, and never shrinks.

mod slots;

pub use slots::SlotArray;

/// A single storage growth, recorded when profiling is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GrowthEvent {
    /// Index whose write triggered the growth
    pub requested_index: usize,

    /// Slot count before growing
    pub old_len: usize,

    /// Slot count after growing
    pub new_len: usize,
}

impl GrowthEvent {
    /// Number of empty slots appended by this growth
    pub fn added(&self) -> usize {
        self.new_len - self.old_len
    }
}

/// Detailed growth profile (if enabled)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GrowthProfile {
    /// Largest slot count reached
    pub max_len: usize,

    /// Growth events in the order they happened
    pub timeline: Vec<GrowthEvent>,
}

impl GrowthProfile {
    /// Number of times storage was reallocated
    pub fn growth_count(&self) -> usize {
        self.timeline.len()
    }

    /// Verify every recorded growth followed `max(2 * len, index + 1)`
    pub fn follows_policy(&self) -> bool {
        self.timeline.iter().all(|event| {
            event.new_len == (2 * event.old_len).max(event.requested_index + 1)
        })
    }

    /// Generate report
    pub fn report(&self) -> String {
        let mut out = format!(
            "Max slots: {}\nGrowths: {}",
            self.max_len,
            self.growth_count()
        );
        for event in &self.timeline {
            out.push_str(&format!(
                "\n  index {}: {} -> {} (+{})",
                event.requested_index,
                event.old_len,
                event.new_len,
                event.added()
            ));
        }
        out
    }
}
