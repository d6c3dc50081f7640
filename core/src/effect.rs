//! Side effect descriptions.
//!
//! Effects are values, not execution: the reducer returns them and the store
//! runtime carries them out. The desk needs exactly one kind of side effect —
//! publishing a change event to subscribers — so the enum is small.

/// A side effect requested by the reducer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect<Action> {
    /// No-op effect
    None,

    /// Broadcast an action (a change event) to store subscribers.
    ///
    /// Delivery is synchronous with respect to the mutation that produced
    /// it: the store publishes in the order mutations were applied.
    Publish(Action),
}

impl<Action> Effect<Action> {
    /// Returns the published action, if any
    #[must_use]
    pub const fn published(&self) -> Option<&Action> {
        match self {
            Self::None => None,
            Self::Publish(action) => Some(action),
        }
    }

    /// Whether this effect does nothing
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_extracts_action() {
        let effect = Effect::Publish(7);
        assert_eq!(effect.published(), Some(&7));
        assert!(!effect.is_none());
        assert!(Effect::<i32>::None.is_none());
    }
}
