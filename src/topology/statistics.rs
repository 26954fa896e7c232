// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are kept alongside each topology and incremented by the build
//! context as segments, junctions and elements are added.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(EnumCountMacro, EnumIter, Display, Debug, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    Lines,
    Junctions,
    Nodes,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub fn lines(&self) -> u64 {
        self.get(Counters::Lines)
    }

    pub fn junctions(&self) -> u64 {
        self.get(Counters::Junctions)
    }

    pub fn nodes(&self) -> u64 {
        self.get(Counters::Nodes)
    }
}

/// Serialized as `{"lines": n, "junctions": n, "nodes": n}`.
impl Serialize for Statistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Counters::COUNT))?;
        for counter in Counters::iter() {
            map.serialize_entry(&counter.to_string(), &self.get(counter))?;
        }
        map.end()
    }
}

/// Unknown keys are ignored and missing counters read as 0.
impl<'de> Deserialize<'de> for Statistics {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, u64>::deserialize(deserializer)?;
        let mut statistics = Statistics::new();
        for counter in Counters::iter() {
            if let Some(&value) = raw.get(&counter.to_string()) {
                statistics.stats[counter as usize] = value;
            }
        }
        Ok(statistics)
    }
}
