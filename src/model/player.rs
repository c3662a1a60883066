use serde::Serialize;

pub const WILDCARD_MIN: u32 = 5;
pub const WILDCARD_MAX: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct WildcardPosition(u32);

impl WildcardPosition {
    pub fn new(position: u32) -> Option<Self> {
        if (WILDCARD_MIN..=WILDCARD_MAX).contains(&position) {
            Some(Self(position))
        } else {
            None
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub first: String,
    pub second: String,
    pub third: String,
    pub wildcard_position: WildcardPosition,
    pub wildcard_rider: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub prediction: Prediction,
    pub score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, prediction: Prediction) -> Self {
        Self {
            name: name.into(),
            prediction,
            score: 0,
        }
    }

    pub fn wildcard_position(&self) -> WildcardPosition {
        self.prediction.wildcard_position
    }
}
