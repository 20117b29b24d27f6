//! Freeze flag storage and the `Freezable` capability trait.

use tracing::debug;

use crate::error::FrozenError;

/// The freeze flag for a single value.
///
/// Embed one of these in any struct that should support freezing, then
/// implement [`Freezable`] by handing out references to it. The flag starts
/// unfrozen and has exactly two states; both transitions are idempotent and
/// never fail.
///
/// Deliberately not serializable: frozen state does not outlive the process.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FreezeState {
    frozen: bool,
}

impl FreezeState {
    /// Create an unfrozen state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the owning value frozen. No-op if already frozen.
    pub fn freeze(&mut self) {
        if !self.frozen {
            debug!("value frozen, guarded operations disabled");
        }
        self.frozen = true;
    }

    /// Mark the owning value unfrozen. No-op if already unfrozen.
    pub fn unfreeze(&mut self) {
        if self.frozen {
            debug!("value unfrozen, guarded operations re-enabled");
        }
        self.frozen = false;
    }

    /// Whether the owning value is currently frozen.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

/// Capability trait for values that can be frozen and unfrozen at runtime.
///
/// Implementors embed a [`FreezeState`] field and expose it through the two
/// required methods; everything else is provided. Mutating methods opt in to
/// the freeze check either by calling [`ensure_unfrozen`] at the top of their
/// body or by routing through [`guarded`].
///
/// `freeze`, `unfreeze`, and `is_frozen` are always enabled: freezing is
/// never itself disabled by freezing.
///
/// [`ensure_unfrozen`]: Freezable::ensure_unfrozen
/// [`guarded`]: crate::guard::guarded
pub trait Freezable {
    /// Shared access to the embedded freeze flag.
    fn freeze_state(&self) -> &FreezeState;

    /// Exclusive access to the embedded freeze flag.
    fn freeze_state_mut(&mut self) -> &mut FreezeState;

    /// Freeze this value. All guarded operations become disabled. Idempotent.
    fn freeze(&mut self) {
        self.freeze_state_mut().freeze();
    }

    /// Unfreeze this value. All guarded operations become re-enabled.
    /// Idempotent.
    fn unfreeze(&mut self) {
        self.freeze_state_mut().unfreeze();
    }

    /// Whether this value is currently frozen. Pure query, enabled in both
    /// states.
    fn is_frozen(&self) -> bool {
        self.freeze_state().is_frozen()
    }

    /// Guard prologue for a mutating operation.
    ///
    /// Call with `?` as the first statement of any method that mutates the
    /// value. Fails with [`FrozenError`] naming the operation while frozen,
    /// before any part of the operation body has run.
    fn ensure_unfrozen(&self, operation: &str) -> Result<(), FrozenError> {
        if self.is_frozen() {
            debug!(operation = operation, "operation denied: value is frozen");
            return Err(FrozenError::operation(operation));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        state: FreezeState,
        count: u32,
    }

    impl Counter {
        fn new() -> Self {
            Self {
                state: FreezeState::new(),
                count: 0,
            }
        }

        fn increment(&mut self) -> Result<u32, FrozenError> {
            self.ensure_unfrozen("increment")?;
            self.count += 1;
            Ok(self.count)
        }
    }

    impl Freezable for Counter {
        fn freeze_state(&self) -> &FreezeState {
            &self.state
        }

        fn freeze_state_mut(&mut self) -> &mut FreezeState {
            &mut self.state
        }
    }

    #[test]
    fn new_state_is_unfrozen() {
        assert!(!FreezeState::new().is_frozen());
        assert!(!FreezeState::default().is_frozen());
        assert!(!Counter::new().is_frozen());
    }

    #[test]
    fn toggling_is_idempotent() {
        let mut state = FreezeState::new();

        state.freeze();
        assert!(state.is_frozen());
        state.freeze();
        assert!(state.is_frozen());

        state.unfreeze();
        assert!(!state.is_frozen());
        state.unfreeze();
        assert!(!state.is_frozen());
    }

    #[test]
    fn repeated_cycles_keep_toggling() {
        let mut counter = Counter::new();
        for _ in 0..5 {
            counter.freeze();
            assert!(counter.is_frozen());
            counter.unfreeze();
            assert!(!counter.is_frozen());
        }
    }

    #[test]
    fn ensure_unfrozen_gates_mutation() {
        let mut counter = Counter::new();
        assert_eq!(counter.increment(), Ok(1));

        counter.freeze();
        let err = counter.increment().unwrap_err();
        assert_eq!(err.operation_name(), Some("increment"));
        assert_eq!(counter.count, 1);

        counter.unfreeze();
        assert_eq!(counter.increment(), Ok(2));
    }

    #[test]
    fn freeze_is_allowed_while_frozen() {
        let mut counter = Counter::new();
        counter.freeze();
        counter.freeze();
        counter.unfreeze();
        assert!(!counter.is_frozen());
    }
}
