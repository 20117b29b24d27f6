//! Freezable prelude.
//!
//! Curated re-exports for composing the freeze capability without naming
//! individual modules.

pub use crate::error::FrozenError;
pub use crate::frozen::Frozen;
pub use crate::guard::guarded;
pub use crate::state::{FreezeState, Freezable};
