use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RaceResult {
    riders: BTreeMap<u32, String>,
}

impl RaceResult {
    pub fn from_finishing_order<I, S>(riders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_positions((1u32..).zip(riders))
    }

    pub fn from_positions<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        let riders = entries
            .into_iter()
            .map(|(position, rider)| (position, rider.into()))
            .collect();
        Self { riders }
    }

    pub fn get(&self, position: u32) -> Option<&str> {
        self.riders.get(&position).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.riders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.riders
            .iter()
            .map(|(position, rider)| (*position, rider.as_str()))
    }
}
