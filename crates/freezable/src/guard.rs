//! Check-then-call guard for mutating operations.
//!
//! The combinator here is the statically-typed replacement for decorating
//! individual methods: the caller names the operation, hands over the body as
//! a closure, and the guard either denies the call (body never runs) or runs
//! the body exactly once and passes its result through untouched.

use crate::error::FrozenError;
use crate::state::Freezable;

/// Run `body` against `target` unless `target` is frozen.
///
/// While frozen this fails with [`FrozenError`] carrying `operation`, and the
/// body is never invoked, so no partial mutation can occur. While unfrozen
/// the body runs exactly once with exclusive access to `target` and its
/// return value comes back unmodified.
///
/// A fallible body uses `R = Result<V, E>`; its error passes through inside
/// the outer `Ok`.
///
/// ```
/// use freezable::{guarded, Freezable, FreezeState, FrozenError};
///
/// struct Tally { state: FreezeState, total: i64 }
///
/// impl Freezable for Tally {
///     fn freeze_state(&self) -> &FreezeState { &self.state }
///     fn freeze_state_mut(&mut self) -> &mut FreezeState { &mut self.state }
/// }
///
/// let mut tally = Tally { state: FreezeState::new(), total: 0 };
/// guarded(&mut tally, "add", |t| t.total += 5)?;
/// assert_eq!(tally.total, 5);
///
/// tally.freeze();
/// assert!(guarded(&mut tally, "add", |t| t.total += 5).is_err());
/// assert_eq!(tally.total, 5);
/// # Ok::<(), FrozenError>(())
/// ```
pub fn guarded<T, R>(
    target: &mut T,
    operation: &str,
    body: impl FnOnce(&mut T) -> R,
) -> Result<R, FrozenError>
where
    T: Freezable + ?Sized,
{
    target.ensure_unfrozen(operation)?;
    Ok(body(target))
}
