use serde::{Deserialize, Serialize};
use std::fmt;

/// The four tracked city indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexName {
    Air,
    Water,
    Noise,
    Human,
}

impl IndexName {
    pub const ALL: [IndexName; 4] = [
        IndexName::Air,
        IndexName::Water,
        IndexName::Noise,
        IndexName::Human,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndexName::Air => "air",
            IndexName::Water => "water",
            IndexName::Noise => "noise",
            IndexName::Human => "human",
        }
    }

    /// Pollutant-style indices are worse when higher; human health is worse when lower.
    pub fn higher_is_worse(&self) -> bool {
        !matches!(self, IndexName::Human)
    }
}

impl fmt::Display for IndexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monthly samples of one index and its ideal reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSeries {
    pub actual: Vec<f64>,
    pub ideal: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexHistory {
    pub air: IndexSeries,
    pub water: IndexSeries,
    pub noise: IndexSeries,
    pub human: IndexSeries,
}

impl IndexHistory {
    pub fn get(&self, name: IndexName) -> &IndexSeries {
        match name {
            IndexName::Air => &self.air,
            IndexName::Water => &self.water,
            IndexName::Noise => &self.noise,
            IndexName::Human => &self.human,
        }
    }
}

impl Default for IndexHistory {
    fn default() -> Self {
        Self {
            air: IndexSeries {
                actual: vec![7.0, 8.0, 8.0, 9.0, 8.0, 7.0, 6.5],
                ideal: vec![5.0; 7],
            },
            water: IndexSeries {
                actual: vec![6.0, 6.0, 7.0, 6.0, 6.0, 5.0, 5.2],
                ideal: vec![5.0; 7],
            },
            noise: IndexSeries {
                actual: vec![4.0, 5.0, 5.0, 5.0, 4.0, 4.0, 3.8],
                ideal: vec![3.0; 7],
            },
            human: IndexSeries {
                actual: vec![62.0, 61.0, 60.0, 59.0, 58.0, 57.0, 58.5],
                ideal: vec![70.0; 7],
            },
        }
    }
}
