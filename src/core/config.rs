//! Session configuration.
//!
//! `SessionConfig` collects the knobs a front-end can choose at startup:
//! - `hand_size`: cards dealt per side to each player
//! - `policy`: how repeated selections on one side behave
//! - `seed`: RNG seed for reproducible deals

use serde::{Deserialize, Deserializer, Serialize};

/// Cards dealt from each pool to every new player.
pub const DEFAULT_HAND_SIZE: usize = 2;

/// How a player's selection responds to further picks on the same side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// Picking the selected card again clears it.
    /// Picking another card from the hand replaces the selection.
    #[default]
    Reversible,
    /// The first pick on a side sticks until the session is reset.
    LockIn,
}

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Cards dealt per side to each new player (default: 2).
    /// Also the minimum each pool must hold for a player to join.
    /// Must be at least 1.
    #[serde(deserialize_with = "non_zero_hand_size")]
    pub hand_size: usize,

    /// Selection toggle strategy (default: `Reversible`).
    pub policy: SelectionPolicy,

    /// Random seed for draws.
    /// `None` seeds from entropy; the chosen seed is logged.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            policy: SelectionPolicy::default(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Use a different selection policy.
    #[must_use]
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use a fixed seed for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Deal `size` cards per side.
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self.validate();
        self
    }

    /// Check values that cannot be expressed in the field types.
    ///
    /// Panics if `hand_size` is zero.
    pub fn validate(&self) {
        assert!(self.hand_size > 0, "{}", HAND_SIZE_ERROR);
    }
}

const HAND_SIZE_ERROR: &str = "Hand size must be at least 1";

fn non_zero_hand_size<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let size = usize::deserialize(deserializer)?;
    if size == 0 {
        return Err(serde::de::Error::custom(HAND_SIZE_ERROR));
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.hand_size, 2);
        assert_eq!(config.policy, SelectionPolicy::Reversible);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::default()
            .with_policy(SelectionPolicy::LockIn)
            .with_seed(99)
            .with_hand_size(3);

        assert_eq!(config.policy, SelectionPolicy::LockIn);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.hand_size, 3);
    }

    #[test]
    #[should_panic(expected = "Hand size must be at least 1")]
    fn test_zero_hand_size_panics() {
        let _ = SessionConfig::default().with_hand_size(0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"policy":"LockIn"}"#).unwrap();

        assert_eq!(config.policy, SelectionPolicy::LockIn);
        assert_eq!(config.hand_size, DEFAULT_HAND_SIZE);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_zero_hand_size_rejected_from_json() {
        let err = serde_json::from_str::<SessionConfig>(r#"{"hand_size":0,"seed":1}"#).unwrap_err();
        assert!(err.to_string().contains("Hand size must be at least 1"));

        let config: SessionConfig = serde_json::from_str(r#"{"hand_size":3}"#).unwrap();
        assert_eq!(config.hand_size, 3);
    }

    #[test]
    #[should_panic(expected = "Hand size must be at least 1")]
    fn test_validate_catches_field_assignment() {
        let mut config = SessionConfig::default();
        config.hand_size = 0;
        config.validate();
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = SessionConfig::default().with_seed(12);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
