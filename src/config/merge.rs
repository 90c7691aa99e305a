//! Override resolution
//!
//! Settings are merged in file order with two precedence classes:
//! - A setting whose tag is in the active override set always wins over
//!   untagged settings for the same key, wherever they appear in the file.
//! - Within a class, the last write in file order wins.
//!
//! Settings tagged with an inactive override are dropped.

use super::store::Store;
use crate::domain::{RawSetting, Value};
use std::collections::HashSet;

/// What the merger did with one setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Untagged setting written to the store.
    Applied,
    /// Active override written to the store; the key is now claimed.
    OverrideApplied,
    /// Untagged setting ignored because an active override claimed the key.
    ShadowedByOverride,
    /// Tagged with an override that is not active.
    InactiveOverride,
}

impl MergeOutcome {
    pub fn is_written(self) -> bool {
        matches!(self, MergeOutcome::Applied | MergeOutcome::OverrideApplied)
    }
}

/// Per-load merge state. Dropped once the store is handed out.
pub struct OverrideMerger<'a> {
    active: &'a HashSet<String>,
    claimed: HashSet<String>,
    store: Store,
}

impl<'a> OverrideMerger<'a> {
    pub fn new(active: &'a HashSet<String>) -> Self {
        Self { active, claimed: HashSet::new(), store: Store::default() }
    }

    pub fn apply(&mut self, setting: &RawSetting, value: Value) -> MergeOutcome {
        let qualified = setting.qualified_key();
        let is_override = setting.is_tagged() && self.active.contains(&setting.override_tag);

        let outcome = if is_override {
            self.claimed.insert(qualified);
            MergeOutcome::OverrideApplied
        } else if self.claimed.contains(&qualified) {
            return MergeOutcome::ShadowedByOverride;
        } else if setting.is_tagged() {
            return MergeOutcome::InactiveOverride;
        } else {
            MergeOutcome::Applied
        };

        self.store.insert(&setting.section, &setting.key, value);
        outcome
    }

    pub fn finish(self) -> Store {
        self.store
    }
}
