//! The filter/action hook bus.

use std::any::{Any, type_name};
use std::fmt;

use crate::table::{HookTable, Registration};

/// Priority used when a caller has no ordering preference.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Arity used when a caller has no preference: filters see only the value,
/// actions see the context.
pub const DEFAULT_ARITY: usize = 1;

/// Boxed filter callback: receives the accumulated value, the scope and the
/// call-site context, and returns the next value.
pub type FilterFn<T, S, C> = Box<dyn Fn(T, &S, &C) -> T + Send + Sync>;

/// Boxed action callback: receives exclusive access to the scope and the
/// call-site context.
pub type ActionFn<S, C> = Box<dyn Fn(&mut S, &C) + Send + Sync>;

type ErasedFilter = dyn Any + Send + Sync;

/// Registry of named filter and action chains.
///
/// Registration needs `&mut self`; dispatch only needs `&self`. Build the bus
/// once during setup, then share it (e.g. behind an `Arc`) with every render.
/// Because chains cannot be mutated while they are being dispatched, the
/// "register during iteration" hazard is ruled out by the borrow checker.
///
/// # Arity
///
/// Each registration declares how many arguments it accepts, counting the
/// filtered value for filters. The context is all-or-nothing: filters with an
/// arity of at most one and actions with an arity of zero receive
/// `C::default()` instead of the call-site context.
///
/// # Value types
///
/// Filters under one name may be registered for any value type. Dispatch
/// with [`apply_filters`](Self::apply_filters) runs only the callbacks whose
/// value type matches and skips (with a warning) the rest.
pub struct HookBus<S, C> {
    filters: HookTable<ErasedFilter>,
    actions: HookTable<dyn Fn(&mut S, &C) + Send + Sync>,
}

impl<S, C> HookBus<S, C> {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            filters: HookTable::new(),
            actions: HookTable::new(),
        }
    }

    /// Register an action under `name`.
    pub fn add_action<F>(&mut self, name: impl Into<String>, callback: F, priority: i32, arity: usize)
    where
        F: Fn(&mut S, &C) + Send + Sync + 'static,
    {
        let name = name.into();
        tracing::debug!(hook = %name, priority, arity, "Registered action");
        self.actions.insert(
            name,
            Registration {
                priority,
                arity,
                callback: Box::new(callback),
            },
        );
    }

    /// Whether any action is registered under `name`.
    pub fn has_action(&self, name: &str) -> bool {
        !self.actions.chain(name).is_empty()
    }

    /// Number of actions registered under `name`.
    pub fn action_count(&self, name: &str) -> usize {
        self.actions.chain(name).len()
    }

    /// Remove every action registered under `name`.
    pub fn remove_all_actions(&mut self, name: &str) -> usize {
        let removed = self.actions.remove_all(name);
        tracing::debug!(hook = name, removed, "Removed actions");
        removed
    }

    /// Remove the actions registered under `name` at `priority`.
    pub fn remove_actions_at(&mut self, name: &str, priority: i32) -> usize {
        let removed = self.actions.remove_priority(name, priority);
        tracing::debug!(hook = name, priority, removed, "Removed actions");
        removed
    }

    /// Whether any filter is registered under `name`.
    pub fn has_filter(&self, name: &str) -> bool {
        !self.filters.chain(name).is_empty()
    }

    /// Number of filters registered under `name`, regardless of value type.
    pub fn filter_count(&self, name: &str) -> usize {
        self.filters.chain(name).len()
    }

    /// Remove every filter registered under `name`.
    pub fn remove_all_filters(&mut self, name: &str) -> usize {
        let removed = self.filters.remove_all(name);
        tracing::debug!(hook = name, removed, "Removed filters");
        removed
    }

    /// Remove the filters registered under `name` at `priority`.
    pub fn remove_filters_at(&mut self, name: &str, priority: i32) -> usize {
        let removed = self.filters.remove_priority(name, priority);
        tracing::debug!(hook = name, priority, removed, "Removed filters");
        removed
    }

    /// Remove every filter and every action registered under `name`.
    pub fn remove_all(&mut self, name: &str) -> usize {
        self.remove_all_filters(name) + self.remove_all_actions(name)
    }

    /// Names with at least one filter, in no particular order.
    pub fn filter_names(&self) -> impl Iterator<Item = &str> {
        self.filters.names()
    }

    /// Names with at least one action, in no particular order.
    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.names()
    }
}

impl<S: 'static, C: 'static> HookBus<S, C> {
    /// Register a filter for values of type `T` under `name`.
    pub fn add_filter<T, F>(&mut self, name: impl Into<String>, callback: F, priority: i32, arity: usize)
    where
        T: 'static,
        F: Fn(T, &S, &C) -> T + Send + Sync + 'static,
    {
        let name = name.into();
        tracing::debug!(
            hook = %name,
            priority,
            arity,
            value = type_name::<T>(),
            "Registered filter"
        );
        let callback: FilterFn<T, S, C> = Box::new(callback);
        self.filters.insert(
            name,
            Registration {
                priority,
                arity,
                callback: Box::new(callback),
            },
        );
    }
}

impl<S: 'static, C: Default + 'static> HookBus<S, C> {
    /// Fold `value` through every filter registered under `name`.
    ///
    /// Returns `value` unchanged when nothing is registered.
    pub fn apply_filters<T: 'static>(&self, name: &str, value: T, scope: &S, context: &C) -> T {
        let chain = self.filters.chain(name);
        if chain.is_empty() {
            return value;
        }

        let bare = C::default();
        chain.iter().fold(value, |acc, registration| {
            let Some(callback) = registration.callback.downcast_ref::<FilterFn<T, S, C>>() else {
                tracing::warn!(
                    hook = name,
                    expected = type_name::<T>(),
                    "Skipping filter registered for a different value type"
                );
                return acc;
            };
            let context = if registration.arity > 1 { context } else { &bare };
            callback(acc, scope, context)
        })
    }

    /// Run every action registered under `name`, in order.
    pub fn do_action(&self, name: &str, scope: &mut S, context: &C) {
        let chain = self.actions.chain(name);
        if chain.is_empty() {
            return;
        }

        let bare = C::default();
        for registration in chain {
            let context = if registration.arity > 0 { context } else { &bare };
            (registration.callback)(&mut *scope, context);
        }
    }
}

impl<S, C> Default for HookBus<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C> fmt::Debug for HookBus<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookBus")
            .field("filters", &self.filters.len())
            .field("actions", &self.actions.len())
            .finish()
    }
}
