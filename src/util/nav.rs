//! Replacing navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! A denied route must not stay in browser history, otherwise Back would
//! land the visitor on it again. Every redirect issued by the gate and the
//! login flow therefore replaces the current entry instead of pushing.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::cell::{Cell, RefCell};

use leptos_router::NavigateOptions;

/// Performs a route change that overwrites the current history entry.
pub trait Redirector {
    fn replace(&self, path: &str);
}

/// Options for a replacing router navigation.
#[must_use]
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Adapter over the router's `use_navigate` closure.
#[derive(Clone)]
pub struct RouterRedirector<F> {
    navigate: F,
}

impl<F> RouterRedirector<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Redirector for RouterRedirector<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn replace(&self, path: &str) {
        (self.navigate)(path, replace_options());
    }
}

/// In-memory browser history: a stack of entries and a cursor.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: RefCell<Vec<String>>,
    index: Cell<usize>,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self { entries: RefCell::new(vec![initial.to_owned()]), index: Cell::new(0) }
    }

    /// Current route.
    pub fn current(&self) -> String {
        self.entries.borrow()[self.index.get()].clone()
    }

    /// Push a new entry, discarding any forward entries.
    pub fn push(&self, path: &str) {
        let mut entries = self.entries.borrow_mut();
        let next = self.index.get() + 1;
        entries.truncate(next);
        entries.push(path.to_owned());
        self.index.set(next);
    }

    /// Step back one entry. Returns `false` at the start of history.
    pub fn back(&self) -> bool {
        match self.index.get().checked_sub(1) {
            Some(prev) => {
                self.index.set(prev);
                true
            }
            None => false,
        }
    }

    /// Entries up to and including the current one.
    pub fn reachable(&self) -> Vec<String> {
        self.entries.borrow()[..=self.index.get()].to_vec()
    }
}

impl Redirector for MemoryHistory {
    fn replace(&self, path: &str) {
        self.entries.borrow_mut()[self.index.get()] = path.to_owned();
    }
}
