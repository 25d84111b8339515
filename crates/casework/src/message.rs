//! Type-erased message values for dispatch.
//!
//! This module provides the input side of the dispatch engine:
//!
//! - [`Message`] - Base trait for anything a dispatcher can examine
//! - [`BoxedMessage`] - Owned, cheaply clonable `Arc<dyn Message>` wrapper
//!
//! A dispatcher never knows the concrete type of its input up front; it
//! receives a `&dyn Message` and narrows it per guard via [`Any`]
//! downcasting. The blanket implementation below makes every
//! `Any + Send + Sync` value a `Message`, so plain integers, strings, and
//! user-defined structs are all dispatchable without opt-in.

use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;

// ============================================================================
// Core Message Trait
// ============================================================================

/// The base trait for values fed into a dispatcher.
///
/// Messages are type-erased using `dyn Message` and narrowed back to concrete
/// types with `as_any()`. The trait is implemented for every
/// `Any + Send + Sync` type via a blanket impl, so callers never implement it
/// by hand.
///
/// # Example
///
/// ```
/// use casework::Message;
///
/// fn describe(msg: &dyn Message) -> &'static str {
///     msg.message_name()
/// }
///
/// assert!(describe(&42).contains("i32"));
/// ```
pub trait Message: Any + Send + Sync {
    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns the Rust type name of this message, for diagnostics.
    fn message_name(&self) -> &'static str;
}

impl<T: Any + Send + Sync> Message for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn message_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

// ============================================================================
// Boxed Message
// ============================================================================

/// A type-erased container for messages that supports runtime downcasting.
///
/// `BoxedMessage` wraps any [`Message`] in an `Arc`, allowing it to be passed
/// through a message loop without knowing its concrete type. Cloning is cheap.
///
/// # Deref to the Message Trait
///
/// `BoxedMessage` implements `Deref<Target = dyn Message>`, so it can be
/// handed directly to [`Dispatcher::apply`](crate::Dispatcher::apply):
///
/// ```
/// use casework::{BoxedMessage, GuardList};
///
/// let dispatcher = GuardList::new()
///     .on(|_: &i32| {})
///     .build()
///     .unwrap();
///
/// let msg = BoxedMessage::new(7);
/// assert!(dispatcher.is_defined_at(&*msg));
/// ```
#[derive(Clone)]
pub struct BoxedMessage {
    inner: Arc<dyn Message>,
}

impl BoxedMessage {
    /// Creates a new `BoxedMessage` from any type implementing `Message`.
    pub fn new<M: Message>(message: M) -> Self {
        Self {
            inner: Arc::new(message),
        }
    }

    /// Returns the inner `Arc<dyn Message>`.
    pub fn inner(&self) -> &Arc<dyn Message> {
        &self.inner
    }

    /// Attempts to downcast to a concrete message type.
    pub fn downcast_ref<M: Message>(&self) -> Option<&M> {
        self.inner.as_any().downcast_ref()
    }

    /// Returns `true` if the contained message is of type `M`.
    pub fn is<M: Message>(&self) -> bool {
        self.downcast_ref::<M>().is_some()
    }
}

impl Deref for BoxedMessage {
    type Target = dyn Message;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

impl std::fmt::Debug for BoxedMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedMessage")
            .field("message_name", &self.message_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Ping {
        seq: u32,
    }

    #[test]
    fn test_downcast_to_concrete_type() {
        let msg = BoxedMessage::new(Ping { seq: 3 });
        assert!(msg.is::<Ping>());
        assert!(!msg.is::<String>());
        assert_eq!(msg.downcast_ref::<Ping>(), Some(&Ping { seq: 3 }));
    }

    #[test]
    fn test_message_name_reports_rust_type() {
        let msg = BoxedMessage::new(5i64);
        assert!(msg.message_name().contains("i64"));
        assert!(42i32.message_name().contains("i32"));
    }

    #[test]
    fn test_deref_reaches_trait_methods() {
        let msg = BoxedMessage::new(String::from("hello"));
        let erased: &dyn Message = &*msg;
        assert!(erased.as_any().downcast_ref::<String>().is_some());
    }
}
