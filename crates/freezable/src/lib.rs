#![forbid(unsafe_code)]
//! # Freezable - Runtime Freeze Capability
//!
//! Toggle a value between mutable and frozen at runtime. While frozen, every
//! guarded mutating operation fails fast with [`FrozenError`] before its body
//! runs; freezing and unfreezing themselves are always enabled and
//! idempotent.
//!
//! Embed a [`FreezeState`] field, implement [`Freezable`] by exposing it, and
//! guard mutating methods with [`Freezable::ensure_unfrozen`] (or route them
//! through [`guarded`]):
//!
//! ```
//! use freezable::{Freezable, FreezeState, FrozenError};
//!
//! #[derive(Default)]
//! struct Stack {
//!     state: FreezeState,
//!     data: Vec<i32>,
//! }
//!
//! impl Freezable for Stack {
//!     fn freeze_state(&self) -> &FreezeState { &self.state }
//!     fn freeze_state_mut(&mut self) -> &mut FreezeState { &mut self.state }
//! }
//!
//! impl Stack {
//!     /// Mutating: guarded.
//!     fn push(&mut self, x: i32) -> Result<(), FrozenError> {
//!         self.ensure_unfrozen("push")?;
//!         self.data.push(x);
//!         Ok(())
//!     }
//!
//!     /// Non-mutating: usable any time.
//!     fn top(&self) -> Option<&i32> {
//!         self.data.last()
//!     }
//! }
//!
//! let mut stack = Stack::default();
//! stack.push(1)?;
//!
//! stack.freeze();
//! assert!(stack.push(2).is_err());
//! assert_eq!(stack.top(), Some(&1));
//!
//! stack.unfreeze();
//! stack.push(2)?;
//! assert_eq!(stack.top(), Some(&2));
//! # Ok::<(), FrozenError>(())
//! ```
//!
//! For whole-object immutability over a region of code, [`Frozen`] turns the
//! runtime check into a compile-time guarantee.

pub mod error;
pub mod frozen;
pub mod guard;
pub mod prelude;
pub mod state;

pub use error::FrozenError;
pub use frozen::Frozen;
pub use guard::guarded;
pub use state::{FreezeState, Freezable};
