//! The finalized, immutable matcher.
//!
//! A [`Dispatcher`] is produced by [`GuardList::build`](crate::GuardList::build)
//! and implements the partial-function contract over type-erased messages:
//! "is this input handleable?" ([`is_defined_at`](Dispatcher::is_defined_at))
//! and "invoke the handler for this input" ([`apply`](Dispatcher::apply)).
//!
//! Guards are tested in registration order and the first match wins; no
//! "most specific type" reordering is performed. Dispatch is a bounded,
//! synchronous scan with no suspension or I/O of its own.

use std::sync::Arc;

use tracing::{Level, debug, span, trace};

use crate::error::NoMatchFound;
use crate::guard::GuardEntry;
use crate::message::Message;

/// An immutable, ordered sequence of guards plus the matching algorithm.
///
/// # Thread Safety
///
/// The dispatcher holds no mutable state after construction. It is
/// `Send + Sync`, clones cheaply (the guard snapshot is shared via `Arc`),
/// and is safe for concurrent, repeated invocation from multiple threads.
#[derive(Clone)]
pub struct Dispatcher {
    entries: Arc<[GuardEntry]>,
}

impl Dispatcher {
    pub(crate) fn from_entries(entries: Vec<GuardEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// Returns `true` iff some guard, tested in registration order, matches
    /// the input.
    ///
    /// No handler runs. Predicates are expected to be side-effect-free; a
    /// predicate with side effects may be re-run by a subsequent
    /// [`apply`](Dispatcher::apply) on the same input.
    pub fn is_defined_at(&self, msg: &dyn Message) -> bool {
        self.entries.iter().any(|entry| entry.matches(msg))
    }

    /// Scans guards in registration order and invokes the handler of the
    /// first one whose match condition holds.
    ///
    /// Exactly one handler runs on success; guards after the selected one are
    /// never evaluated. Handler panics propagate to the caller unmodified;
    /// the dispatcher never catches or wraps them.
    ///
    /// # Errors
    ///
    /// Returns [`NoMatchFound`] when no guard matches. This signals "the
    /// dispatcher is not defined for this input" and is always recoverable;
    /// it is distinct from any failure inside a handler.
    pub fn apply(&self, msg: &dyn Message) -> Result<(), NoMatchFound> {
        let span = span!(Level::DEBUG, "apply", message_type = %msg.message_name());
        let _enter = span.enter();

        for (index, entry) in self.entries.iter().enumerate() {
            if entry.matches(msg) {
                debug!(
                    guard_index = index,
                    kind = ?entry.kind(),
                    "guard matched, invoking handler"
                );
                entry.call(msg);
                return Ok(());
            }
            trace!(guard_index = index, kind = ?entry.kind(), "guard did not match");
        }

        debug!("no guard matched");
        Err(NoMatchFound {
            message_type: msg.message_name(),
        })
    }

    /// Like [`apply`](Dispatcher::apply), but runs `fallback` on the input
    /// instead of failing when no guard matches.
    pub fn apply_or_else<F>(&self, msg: &dyn Message, fallback: F)
    where
        F: FnOnce(&dyn Message),
    {
        if self.apply(msg).is_err() {
            fallback(msg);
        }
    }

    /// Returns a dispatcher that tries `self`'s guards first, then `other`'s.
    ///
    /// Both operands are left usable; the result owns its own snapshot.
    pub fn or_else(&self, other: &Dispatcher) -> Dispatcher {
        let entries: Vec<GuardEntry> = self
            .entries
            .iter()
            .chain(other.entries.iter())
            .cloned()
            .collect();
        Dispatcher::from_entries(entries)
    }

    /// Returns the number of guards in this dispatcher.
    pub fn guard_count(&self) -> usize {
        self.entries.len()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("guard_count", &self.entries.len())
            .finish()
    }
}
