//! Guard entries: one registered (type, optional predicate, handler) case.
//!
//! A [`GuardEntry`] pairs a type-erased check closure with a type-erased
//! handler closure. The downcast happens inside both closures, so a predicate
//! or handler only ever sees a value already narrowed to its declared type.

use std::sync::Arc;

use crate::message::Message;

/// A type-erased check function deciding whether a guard applies to a message.
pub type CheckFn = Arc<dyn Fn(&dyn Message) -> bool + Send + Sync>;

/// A type-erased handler invocation.
pub type ActionFn = Arc<dyn Fn(&dyn Message) + Send + Sync>;

/// The kind of match condition a guard carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardKind {
    /// Matches iff the input downcasts to the declared type.
    Type,
    /// Type check plus a predicate on the narrowed value.
    TypeAndPredicate,
    /// Matches iff the input equals a stored literal of the declared type.
    Equals,
    /// Matches every input.
    Any,
}

/// One registered case in a guard list.
///
/// Entries clone cheaply; the check and action closures are shared via `Arc`.
#[derive(Clone)]
pub(crate) struct GuardEntry {
    kind: GuardKind,
    check: CheckFn,
    action: ActionFn,
}

impl GuardEntry {
    /// An entry matching any input that downcasts to `M`.
    pub(crate) fn typed<M, H>(handler: H) -> Self
    where
        M: Message,
        H: Fn(&M) + Send + Sync + 'static,
    {
        Self {
            kind: GuardKind::Type,
            check: Arc::new(|msg: &dyn Message| msg.as_any().downcast_ref::<M>().is_some()),
            action: Arc::new(move |msg: &dyn Message| {
                if let Some(m) = msg.as_any().downcast_ref::<M>() {
                    handler(m);
                }
            }),
        }
    }

    /// An entry matching inputs of type `M` that also satisfy `predicate`.
    ///
    /// The predicate runs only after the type check succeeds, on the already
    /// narrowed value.
    pub(crate) fn typed_when<M, P, H>(predicate: P, handler: H) -> Self
    where
        M: Message,
        P: Fn(&M) -> bool + Send + Sync + 'static,
        H: Fn(&M) + Send + Sync + 'static,
    {
        Self {
            kind: GuardKind::TypeAndPredicate,
            check: Arc::new(move |msg: &dyn Message| {
                msg.as_any()
                    .downcast_ref::<M>()
                    .is_some_and(|m| predicate(m))
            }),
            action: Arc::new(move |msg: &dyn Message| {
                if let Some(m) = msg.as_any().downcast_ref::<M>() {
                    handler(m);
                }
            }),
        }
    }

    /// An entry matching inputs equal to `target` under `PartialEq`.
    pub(crate) fn equals<M, H>(target: M, handler: H) -> Self
    where
        M: Message + PartialEq,
        H: Fn(&M) + Send + Sync + 'static,
    {
        let target = Arc::new(target);
        Self {
            kind: GuardKind::Equals,
            check: Arc::new(move |msg: &dyn Message| {
                msg.as_any().downcast_ref::<M>().is_some_and(|m| *m == *target)
            }),
            action: Arc::new(move |msg: &dyn Message| {
                if let Some(m) = msg.as_any().downcast_ref::<M>() {
                    handler(m);
                }
            }),
        }
    }

    /// An entry matching every input. The handler receives the raw
    /// `&dyn Message`.
    pub(crate) fn any<H>(handler: H) -> Self
    where
        H: Fn(&dyn Message) + Send + Sync + 'static,
    {
        Self {
            kind: GuardKind::Any,
            check: Arc::new(|_: &dyn Message| true),
            action: Arc::new(handler),
        }
    }

    /// Returns the kind of match condition this entry carries.
    pub(crate) fn kind(&self) -> GuardKind {
        self.kind
    }

    /// Evaluates the match condition against a message.
    pub(crate) fn matches(&self, msg: &dyn Message) -> bool {
        (self.check)(msg)
    }

    /// Invokes the handler. Callers must have established `matches` first.
    pub(crate) fn call(&self, msg: &dyn Message) {
        (self.action)(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_typed_entry_matches_exact_type_only() {
        let entry = GuardEntry::typed(|_: &i32| {});
        assert_eq!(entry.kind(), GuardKind::Type);
        assert!(entry.matches(&5i32));
        assert!(!entry.matches(&5i64));
        assert!(!entry.matches(&5.0f64));
    }

    #[test]
    fn test_predicate_runs_on_narrowed_value_only() {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        let entry = GuardEntry::typed_when(
            move |s: &String| {
                c.fetch_add(1, Ordering::SeqCst);
                s.starts_with("foo")
            },
            |_: &String| {},
        );

        // Wrong type never reaches the predicate.
        assert!(!entry.matches(&5i32));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(entry.matches(&String::from("foobar")));
        assert!(!entry.matches(&String::from("bar")));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_equals_entry_compares_value_not_just_type() {
        let entry = GuardEntry::equals(String::from("ping"), |_: &String| {});
        assert!(entry.matches(&String::from("ping")));
        assert!(!entry.matches(&String::from("pong")));
    }

    #[test]
    fn test_any_entry_matches_everything() {
        let entry = GuardEntry::any(|_| {});
        assert!(entry.matches(&1i32));
        assert!(entry.matches(&String::from("x")));
        assert!(entry.matches(&()));
    }
}
