//! Celebration queue
//!
//! Newly-earned badges are shown to the user one at a time: the front badge
//! stays current until dismissed, then the next one advances.

use std::collections::VecDeque;

use crate::catalog::BadgeDefinition;

/// FIFO of badges awaiting their "newly earned" celebration
#[derive(Debug, Clone, Default)]
pub struct CelebrationQueue {
    pending: VecDeque<BadgeDefinition>,
}

impl CelebrationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue badges for celebration, preserving their order
    pub fn enqueue_all<I: IntoIterator<Item = BadgeDefinition>>(&mut self, badges: I) {
        self.pending.extend(badges);
    }

    /// The badge currently being celebrated, if any
    pub fn current(&self) -> Option<&BadgeDefinition> {
        self.pending.front()
    }

    /// Dismiss the current celebration and advance to the next
    pub fn dismiss(&mut self) -> Option<BadgeDefinition> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
