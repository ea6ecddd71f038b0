//! Name-keyed, priority-sorted callback chains.

use std::collections::HashMap;

/// A callback registered under a hook name.
pub(crate) struct Registration<F: ?Sized> {
    pub(crate) priority: i32,
    pub(crate) arity: usize,
    pub(crate) callback: Box<F>,
}

/// Map from hook name to its callback chain.
///
/// Chains are kept sorted on insertion: a new registration goes after every
/// existing registration with the same or lower priority, so iteration order
/// is (priority ascending, registration order ascending).
pub(crate) struct HookTable<F: ?Sized> {
    chains: HashMap<String, Vec<Registration<F>>>,
}

impl<F: ?Sized> HookTable<F> {
    pub(crate) fn new() -> Self {
        Self {
            chains: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, name: String, registration: Registration<F>) {
        let chain = self.chains.entry(name).or_default();
        let at = chain.partition_point(|r| r.priority <= registration.priority);
        chain.insert(at, registration);
    }

    /// Callbacks for `name` in execution order. Empty if nothing is registered.
    pub(crate) fn chain(&self, name: &str) -> &[Registration<F>] {
        self.chains.get(name).map_or(&[], Vec::as_slice)
    }

    /// Drop every registration for `name`, returning how many were removed.
    pub(crate) fn remove_all(&mut self, name: &str) -> usize {
        self.chains.remove(name).map_or(0, |chain| chain.len())
    }

    /// Drop the registrations for `name` at exactly `priority`.
    pub(crate) fn remove_priority(&mut self, name: &str, priority: i32) -> usize {
        let Some(chain) = self.chains.get_mut(name) else {
            return 0;
        };
        let before = chain.len();
        chain.retain(|r| r.priority != priority);
        let removed = before - chain.len();
        if chain.is_empty() {
            self.chains.remove(name);
        }
        removed
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.chains.keys().map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.chains.len()
    }
}
