//! Free-function entry points for starting a guard list.
//!
//! These mirror the methods on [`GuardList`] so a receive chain can start
//! directly from the first case:
//!
//! ```
//! use casework::on;
//!
//! let dispatcher = on(|n: &i32| println!("int: {n}"))
//!     .on(|s: &String| println!("string: {s}"))
//!     .build()
//!     .unwrap();
//!
//! assert!(dispatcher.is_defined_at(&7));
//! ```

use crate::builder::GuardList;
use crate::message::Message;

/// Starts a guard list with a guard matching any input of type `M`.
pub fn on<M, H>(handler: H) -> GuardList
where
    M: Message,
    H: Fn(&M) + Send + Sync + 'static,
{
    GuardList::new().on(handler)
}

/// Starts a guard list with a type-and-predicate guard.
pub fn on_when<M, P, H>(predicate: P, handler: H) -> GuardList
where
    M: Message,
    P: Fn(&M) -> bool + Send + Sync + 'static,
    H: Fn(&M) + Send + Sync + 'static,
{
    GuardList::new().on_when(predicate, handler)
}

/// Starts a guard list with a value-equality guard.
pub fn on_equals<M, H>(value: M, handler: H) -> GuardList
where
    M: Message + PartialEq,
    H: Fn(&M) + Send + Sync + 'static,
{
    GuardList::new().on_equals(value, handler)
}

/// Starts a guard list with a catch-all guard.
pub fn on_any<H>(handler: H) -> GuardList
where
    H: Fn(&dyn Message) + Send + Sync + 'static,
{
    GuardList::new().on_any(handler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_points_seed_one_guard() {
        assert_eq!(on(|_: &i32| {}).len(), 1);
        assert_eq!(on_when(|_: &i32| true, |_: &i32| {}).len(), 1);
        assert_eq!(on_equals(1u8, |_: &u8| {}).len(), 1);
        assert_eq!(on_any(|_| {}).len(), 1);
    }
}
