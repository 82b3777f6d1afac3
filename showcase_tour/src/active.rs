// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Set of running tours, for dismissing all of them at once.
//!
//! Tours register themselves while they are alive and are held weakly, so the
//! set never keeps a tour alive. Dropping the returned [`Registration`] removes
//! the entry.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::error::ErrorSink;
use crate::tour::{Tour, TourObserver};

/// Something [`ActiveTours::dismiss_all`] can dismiss.
pub trait Dismiss {
    /// Dismiss without running completion callbacks. Must be idempotent.
    fn dismiss(&mut self);
}

impl<K, O, E> Dismiss for Tour<K, O, E>
where
    K: Clone + PartialEq + fmt::Debug,
    O: TourObserver<K>,
    E: ErrorSink,
{
    fn dismiss(&mut self) {
        Tour::dismiss(self);
    }
}

struct Entry {
    id: u64,
    tour: Weak<RefCell<dyn Dismiss>>,
}

type Entries = Rc<RefCell<Vec<Entry>>>;

/// Weak set of live tours.
///
/// Cheap to clone; clones share the same set.
#[derive(Clone, Default)]
pub struct ActiveTours {
    entries: Entries,
    next_id: Rc<Cell<u64>>,
}

impl fmt::Debug for ActiveTours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveTours")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl ActiveTours {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `tour` to the set until the returned guard is dropped.
    #[must_use = "dropping the registration removes the tour immediately"]
    pub fn register<T: Dismiss + 'static>(&self, tour: &Rc<RefCell<T>>) -> Registration {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        let strong: Rc<RefCell<dyn Dismiss>> = tour.clone();
        self.entries.borrow_mut().push(Entry {
            id,
            tour: Rc::downgrade(&strong),
        });
        Registration {
            id,
            entries: Rc::downgrade(&self.entries),
        }
    }

    /// Number of registered tours that are still alive.
    pub fn len(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.tour.strong_count() > 0)
            .count()
    }

    /// Returns true if no live tour is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dismiss every registered tour. Returns how many were dismissed.
    ///
    /// Entries whose tour was dropped are pruned. A tour that is currently
    /// borrowed (dismiss_all called from inside that tour's own callback) is
    /// skipped. Tours may register or unregister while this runs.
    pub fn dismiss_all(&self) -> usize {
        let live: Vec<Rc<RefCell<dyn Dismiss>>> = {
            let mut entries = self.entries.borrow_mut();
            entries.retain(|e| e.tour.strong_count() > 0);
            entries.iter().filter_map(|e| e.tour.upgrade()).collect()
        };
        let mut dismissed = 0;
        for tour in live {
            if let Ok(mut tour) = tour.try_borrow_mut() {
                tour.dismiss();
                dismissed += 1;
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(dismissed, "dismissed all tours");
        dismissed
    }
}

/// Keeps a tour in an [`ActiveTours`] set. Removes it when dropped.
#[derive(Debug)]
pub struct Registration {
    id: u64,
    entries: Weak<RefCell<Vec<Entry>>>,
}

impl Drop for Registration {
    fn drop(&mut self) {
        let Some(entries) = self.entries.upgrade() else {
            return;
        };
        // Skip rather than panic if dropped while the set is borrowed.
        if let Ok(mut entries) = entries.try_borrow_mut() {
            entries.retain(|e| e.id != self.id);
        }
    }
}
