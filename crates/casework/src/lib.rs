//! # Casework
//!
//! An ordered type-and-predicate dispatch builder for type-erased messages.
//!
//! Casework lets a consumer (typically a message-processing loop) express a
//! sequence of typed case-handlers without language-level pattern matching
//! over open message sets. Guards are registered in order on a [`GuardList`],
//! finalized once into an immutable [`Dispatcher`], and the dispatcher routes
//! each input to the first guard whose match condition holds.
//!
//! ## Architecture
//!
//! Two components, composed linearly:
//!
//! - **[`GuardList`]** - an ordered, append-only builder of guard entries.
//!   It never evaluates anything.
//! - **[`Dispatcher`]** - the finalized, immutable matcher. It implements the
//!   partial-function contract: [`is_defined_at`](Dispatcher::is_defined_at)
//!   and [`apply`](Dispatcher::apply), failing with [`NoMatchFound`] outside
//!   its domain.
//!
//! ```text
//! ┌───────────┐  build()  ┌────────────┐  apply(msg)  ┌──────────┐
//! │ GuardList │──────────▶│ Dispatcher │─────────────▶│ handler  │
//! └───────────┘           └────────────┘              └──────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use casework::{GuardList, Message};
//!
//! let dispatcher = GuardList::new()
//!     .on(|n: &i32| println!("int: {n}"))
//!     .on_when(|s: &String| s.starts_with("foo"), |s: &String| {
//!         println!("foo message: {}", s.to_uppercase());
//!     })
//!     .on_any(|msg| println!("unhandled: {}", msg.message_name()))
//!     .build()
//!     .expect("at least one guard");
//!
//! assert!(dispatcher.is_defined_at(&5));
//! dispatcher.apply(&5).unwrap();
//! ```
//!
//! ## Matching Rules
//!
//! - Guard evaluation order is exactly registration order; the first match
//!   wins and no later guard is evaluated.
//! - Type guards match on the input's exact runtime type (`TypeId`); numeric
//!   types are never coerced, so an `i32` does not match an `f64` guard.
//! - Catch-all guards match everything and conventionally go last; their
//!   position is not special-cased.
//! - Handler panics propagate unmodified; [`NoMatchFound`] is reserved for
//!   "no guard matched".
//!
//! ## Thread Safety
//!
//! A [`Dispatcher`] holds no mutable state after construction and is safe to
//! invoke concurrently from multiple threads. The builder is consumed by each
//! append, so concurrent mutation of one builder is unrepresentable.

pub mod builder;
pub mod builders;
pub mod dispatcher;
pub mod error;
pub mod message;

mod guard;

pub use builder::GuardList;
pub use builders::{on, on_any, on_equals, on_when};
pub use dispatcher::Dispatcher;
pub use error::{ConfigError, NoMatchFound};
pub use message::{BoxedMessage, Message};
