//! Drink history shown on the statistics tab
//!
//! There is no history pipeline yet; the tab reads from a `StatisticsSource`
//! and ships with a fixed mock.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkRecord {
    pub id: Uuid,
    pub day: String,
    pub amount: u32,
}

impl DrinkRecord {
    pub fn new(day: impl Into<String>, amount: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            day: day.into(),
            amount,
        }
    }

    /// Amount as shown in the list
    pub fn display_amount(&self) -> String {
        format!("{:.3} ml", self.amount as f64)
    }
}

/// Read-only source of drink records
pub trait StatisticsSource {
    fn records(&self) -> Vec<DrinkRecord>;
}

/// Placeholder records until real history exists
#[derive(Debug, Clone)]
pub struct MockStatistics {
    records: Vec<DrinkRecord>,
}

impl Default for MockStatistics {
    fn default() -> Self {
        Self {
            records: vec![DrinkRecord::new("Tuesday", 1), DrinkRecord::new("Monday", 2)],
        }
    }
}

impl StatisticsSource for MockStatistics {
    fn records(&self) -> Vec<DrinkRecord> {
        self.records.clone()
    }
}
