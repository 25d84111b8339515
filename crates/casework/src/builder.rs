//! The ordered, append-only guard list builder.
//!
//! A [`GuardList`] accumulates guard entries in registration order and never
//! evaluates anything itself. Each append method consumes the builder and
//! returns it extended by one entry; [`GuardList::build`] consumes the
//! builder for good and snapshots the entries into an immutable
//! [`Dispatcher`].
//!
//! # Example
//!
//! ```
//! use casework::GuardList;
//!
//! let dispatcher = GuardList::new()
//!     .on(|n: &i32| println!("int: {n}"))
//!     .on_when(|s: &String| s.starts_with("foo"), |s: &String| {
//!         println!("foo message: {s}");
//!     })
//!     .on_equals(String::from("stop"), |_| println!("stopping"))
//!     .build()
//!     .expect("non-empty guard list");
//!
//! assert!(dispatcher.is_defined_at(&42));
//! ```

use crate::dispatcher::Dispatcher;
use crate::error::ConfigError;
use crate::guard::GuardEntry;
use crate::message::Message;

/// An ordered, append-only sequence of guard entries.
///
/// Registration order is evaluation order: the finalized dispatcher tests
/// guards first-to-last and stops at the first match. Because every append
/// consumes `self`, a builder can never alias a dispatcher it already
/// produced, and concurrent mutation of one builder is unrepresentable.
///
/// Catch-all guards added with [`on_any`](GuardList::on_any) match every
/// input, so by convention they go last; the dispatcher does not reorder or
/// special-case them.
#[derive(Default)]
pub struct GuardList {
    entries: Vec<GuardEntry>,
}

impl GuardList {
    /// Creates a new, empty guard list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a guard matching any input of type `M`.
    ///
    /// The handler receives the input narrowed to `M`.
    pub fn on<M, H>(mut self, handler: H) -> Self
    where
        M: Message,
        H: Fn(&M) + Send + Sync + 'static,
    {
        self.entries.push(GuardEntry::typed(handler));
        self
    }

    /// Appends a guard matching inputs of type `M` that satisfy `predicate`.
    ///
    /// The predicate is evaluated only after the type check succeeds, on the
    /// already narrowed value. Predicates should be side-effect-free: the
    /// dispatcher may re-evaluate them across
    /// [`is_defined_at`](Dispatcher::is_defined_at) and
    /// [`apply`](Dispatcher::apply) calls.
    pub fn on_when<M, P, H>(mut self, predicate: P, handler: H) -> Self
    where
        M: Message,
        P: Fn(&M) -> bool + Send + Sync + 'static,
        H: Fn(&M) + Send + Sync + 'static,
    {
        self.entries.push(GuardEntry::typed_when(predicate, handler));
        self
    }

    /// Appends a guard matching inputs equal to `value`.
    ///
    /// The match condition is value equality under `M`'s own `PartialEq`,
    /// not type compatibility alone.
    pub fn on_equals<M, H>(mut self, value: M, handler: H) -> Self
    where
        M: Message + PartialEq,
        H: Fn(&M) + Send + Sync + 'static,
    {
        self.entries.push(GuardEntry::equals(value, handler));
        self
    }

    /// Appends a catch-all guard. The handler receives the raw
    /// `&dyn Message`.
    pub fn on_any<H>(mut self, handler: H) -> Self
    where
        H: Fn(&dyn Message) + Send + Sync + 'static,
    {
        self.entries.push(GuardEntry::any(handler));
        self
    }

    /// Returns the number of registered guards.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no guards have been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finalizes the guard list into an immutable [`Dispatcher`].
    ///
    /// The dispatcher takes ownership of the entry snapshot; the builder is
    /// consumed and cannot influence the dispatcher afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyGuardList`] if no guard was registered. A
    /// dispatcher defined for no input at all is a configuration bug and is
    /// rejected eagerly rather than deferred to the first `apply`.
    pub fn build(self) -> Result<Dispatcher, ConfigError> {
        if self.entries.is_empty() {
            return Err(ConfigError::EmptyGuardList);
        }
        Ok(Dispatcher::from_entries(self.entries))
    }
}

impl std::fmt::Debug for GuardList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuardList")
            .field("guard_count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_empty_list_fails() {
        let err = GuardList::new().build().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyGuardList));
    }

    #[test]
    fn test_appends_preserve_count_and_order() {
        let list = GuardList::new()
            .on(|_: &i32| {})
            .on_when(|s: &String| s.is_empty(), |_: &String| {})
            .on_equals(7u8, |_: &u8| {})
            .on_any(|_| {});
        assert_eq!(list.len(), 4);
        assert!(!list.is_empty());

        let dispatcher = list.build().unwrap();
        assert_eq!(dispatcher.guard_count(), 4);
    }

    #[test]
    fn test_single_guard_builds() {
        let dispatcher = GuardList::new().on(|_: &i32| {}).build().unwrap();
        assert_eq!(dispatcher.guard_count(), 1);
    }
}
