//! Error types for the dispatch engine.
//!
//! The engine is a pure routing layer and never recovers errors locally.
//! Failures inside registered handlers are panics from the engine's point of
//! view and propagate to the caller unmodified; they are never caught or
//! wrapped here.

use thiserror::Error;

/// Returned by [`Dispatcher::apply`](crate::Dispatcher::apply) when no guard
/// matches the input.
///
/// This signals "the dispatcher is not defined for this input" and is always
/// recoverable by the caller; a message loop would typically route such
/// inputs to a dead-letter channel. It is distinct from any failure inside a
/// handler.
#[derive(Debug, Clone, Error)]
#[error("no guard matched message of type '{message_type}'")]
pub struct NoMatchFound {
    /// Rust type name of the rejected input.
    pub message_type: &'static str,
}

/// Errors raised at [`GuardList::build`](crate::GuardList::build) time for
/// invalid builder state.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// No guard was registered before `build()`.
    #[error("cannot build a dispatcher from an empty guard list")]
    EmptyGuardList,
}
