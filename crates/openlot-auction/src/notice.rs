//! Bounded log of auction lifecycle notices.
//!
//! The state machine appends a notice for every accepted deposit, completed
//! sale, and closure. Hosts poll or snapshot the log to drive their own
//! notification channels. Capacity is bounded: once full, the oldest
//! notices are evicted so a long-lived auction cannot grow without bound.

use std::collections::VecDeque;

use openlot_types::AuctionNotice;

/// Append-only, capacity-bounded buffer of [`AuctionNotice`] records.
#[derive(Debug)]
pub struct NoticeLog {
    notices: VecDeque<AuctionNotice>,
    capacity: usize,
}

impl NoticeLog {
    /// Create a log retaining at most `capacity` notices.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "NoticeLog capacity must be greater than zero");
        Self {
            notices: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Append a notice, evicting the oldest once at capacity.
    pub fn record(&mut self, notice: AuctionNotice) {
        if self.notices.len() >= self.capacity {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
    }

    /// Most recent notice, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&AuctionNotice> {
        self.notices.back()
    }

    /// Iterate notices oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &AuctionNotice> {
        self.notices.iter()
    }

    /// Number of retained notices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    /// Whether the log holds no notices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

impl Default for NoticeLog {
    fn default() -> Self {
        Self::new(openlot_types::constants::DEFAULT_NOTICE_CAPACITY)
    }
}
