//! Allow-list loop table.
//!
//! Maps a trigger segment to the segments that may follow it without closing
//! the loop it opens. Any other identifier, including the trigger itself,
//! closes the current loop instance.

use std::sync::{Arc, LazyLock};

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Implementation guide the built-in table follows.
pub const ELIGIBILITY_VERSION: &str = "005010X279A1";

static ELIGIBILITY: LazyLock<Arc<LoopTable>> = LazyLock::new(|| {
    Arc::new(
        LoopTable::new(ELIGIBILITY_VERSION)
            .with_loop("EB", ["DTP", "AAA", "MSG", "LS", "REF"])
            .with_loop(
                "NM1",
                ["HL", "EB", "EQ", "REF", "N3", "N4", "PER", "DMG", "INS", "DTP"],
            )
            .with_loop("EQ", ["DTP"]),
    )
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopTable {
    version: String,
    loops: IndexMap<String, IndexSet<String>>,
}

impl Default for LoopTable {
    fn default() -> Self {
        ELIGIBILITY.as_ref().clone()
    }
}

impl LoopTable {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            loops: IndexMap::new(),
        }
    }

    /// The 270/271 eligibility table, shared.
    pub fn eligibility() -> Arc<LoopTable> {
        Arc::clone(&ELIGIBILITY)
    }

    pub fn with_loop<I, S>(mut self, trigger: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.loops
            .insert(trigger.into(), members.into_iter().map(Into::into).collect());
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_trigger(&self, id: &str) -> bool {
        self.loops.contains_key(id)
    }

    /// True when `id` may appear inside a loop opened by `trigger`.
    pub fn is_member(&self, trigger: &str, id: &str) -> bool {
        self.loops
            .get(trigger)
            .is_some_and(|members| members.contains(id))
    }

    pub fn members(&self, trigger: &str) -> Option<&IndexSet<String>> {
        self.loops.get(trigger)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.loops
            .iter()
            .map(|(trigger, members)| (trigger.as_str(), members))
    }

    pub fn len(&self) -> usize {
        self.loops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }
}
