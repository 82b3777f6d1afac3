// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element registry: stable identities to element handles.

use alloc::vec::Vec;

/// Handle of a registered element.
///
/// A small, copyable handle issued by [`ElementRegistry::register`].
/// It consists of a slot index and the registry generation it was issued in.
///
/// ## Semantics
///
/// - Registering the same identity twice yields the same handle.
/// - [`ElementRegistry::reset`] replaces the table in bulk and bumps the
///   generation; handles issued before the reset become stale and never alias
///   an element registered afterwards.
///
/// A handle says nothing about whether the element is currently mounted or
/// measured. That is answered by a [`LayoutSource`](crate::LayoutSource), which
/// may return `None` for any handle at any time.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementHandle(u32, u32);

impl ElementHandle {
    const fn new(slot: u32, generation: u32) -> Self {
        Self(slot, generation)
    }

    /// Slot index, stable for the life of the registry generation.
    pub const fn slot(self) -> usize {
        self.0 as usize
    }

    /// Generation the handle was issued in.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

/// Maps step identities to [`ElementHandle`]s.
///
/// Entries are appended and never removed individually; iteration follows
/// registration order. Lookups are linear, which suits tour-sized tables.
#[derive(Clone, Debug)]
pub struct ElementRegistry<K> {
    entries: Vec<K>,
    generation: u32,
}

impl<K> Default for ElementRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ElementRegistry<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            generation: 1,
        }
    }

    /// Number of registered identities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `handle` was issued by the current generation.
    pub fn is_alive(&self, handle: ElementHandle) -> bool {
        handle.1 == self.generation && handle.slot() < self.entries.len()
    }

    /// Identity bound to `handle`, or `None` if the handle is stale.
    pub fn identity(&self, handle: ElementHandle) -> Option<&K> {
        if handle.1 != self.generation {
            return None;
        }
        self.entries.get(handle.slot())
    }

    /// All live handles, in registration order.
    pub fn handles(&self) -> impl Iterator<Item = ElementHandle> + '_ {
        let generation = self.generation;
        (0..self.entries.len()).map(move |i| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementHandle uses 32-bit slots by design."
            )]
            ElementHandle::new(i as u32, generation)
        })
    }

    /// Drop every entry and invalidate all outstanding handles.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.generation = self.generation.wrapping_add(1);
    }
}

impl<K: PartialEq> ElementRegistry<K> {
    /// Register `identity`, returning its handle.
    ///
    /// Idempotent: an identity that is already registered keeps its handle.
    pub fn register(&mut self, identity: K) -> ElementHandle {
        if let Some(handle) = self.resolve(&identity) {
            return handle;
        }
        self.entries.push(identity);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ElementHandle uses 32-bit slots by design."
        )]
        ElementHandle::new((self.entries.len() - 1) as u32, self.generation)
    }

    /// Handle for `identity`, or `None` if it was never registered.
    pub fn resolve(&self, identity: &K) -> Option<ElementHandle> {
        let slot = self.entries.iter().position(|k| k == identity)?;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ElementHandle uses 32-bit slots by design."
        )]
        Some(ElementHandle::new(slot as u32, self.generation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn register_is_idempotent() {
        let mut reg = ElementRegistry::new();
        let a = reg.register("search");
        let b = reg.register("profile");
        assert_eq!(reg.register("search"), a);
        assert_ne!(a, b);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn resolve_absent_is_none() {
        let mut reg = ElementRegistry::new();
        let _ = reg.register(1_u32);
        assert!(reg.resolve(&2).is_none());
        assert_eq!(reg.identity(reg.resolve(&1).unwrap()), Some(&1));
    }

    #[test]
    fn handles_follow_registration_order() {
        let mut reg = ElementRegistry::new();
        let ids = ["c", "a", "b"];
        let handles: Vec<_> = ids.iter().map(|id| reg.register(*id)).collect();
        assert_eq!(reg.handles().collect::<Vec<_>>(), handles);
        let order: Vec<_> = reg.handles().filter_map(|h| reg.identity(h).copied()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn reset_invalidates_old_handles() {
        let mut reg = ElementRegistry::new();
        let old = reg.register("x");
        reg.reset();
        assert!(reg.is_empty());
        assert!(!reg.is_alive(old));
        assert_eq!(reg.identity(old), None);

        let new = reg.register("y");
        assert_eq!(new.slot(), old.slot());
        assert!(new.generation() > old.generation(), "generation must increase on reset");
        assert_eq!(reg.identity(old), None, "stale handle must not alias the new entry");
    }
}
