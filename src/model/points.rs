use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsTable {
    pub first: u32,
    pub second: u32,
    pub third: u32,
    pub wildcard: u32,
}

impl PointsTable {
    pub fn standard() -> Self {
        Self {
            first: 25,
            second: 23,
            third: 21,
            wildcard: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub first: bool,
    pub second: bool,
    pub third: bool,
    pub wildcard: bool,
    #[serde(skip)]
    pub table: PointsTable,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        let mut total = 0;
        if self.first {
            total += self.table.first;
        }
        if self.second {
            total += self.table.second;
        }
        if self.third {
            total += self.table.third;
        }
        if self.wildcard {
            total += self.table.wildcard;
        }
        total
    }
}
