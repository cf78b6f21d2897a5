//! Configuration for the Contacts module.

use serde::{Deserialize, Serialize};

/// How the registry assigns ids to newly created contacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Strictly increasing decimal counter, never reused after deletions.
    #[default]
    Sequential,
    /// Single character `'0' + (live count + 1)`, as issued by the first
    /// version of the service. Can collide once contacts are deleted.
    Legacy,
}

/// Configuration for the Contacts module.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct ContactsConfig {
    /// Start with the two demo contacts (ids `1` and `2`).
    pub seed_demo_data: bool,

    /// Id assignment rule for created contacts.
    pub id_strategy: IdStrategy,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            id_strategy: IdStrategy::Sequential,
        }
    }
}
