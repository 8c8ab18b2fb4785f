use serde::{Deserialize, Serialize};

use theater_core::{PlayId, ValueObject};

/// One performance on an invoice: which play, and how many attended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playId", alias = "playID")]
    pub play_id: PlayId,
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: PlayId, audience: u32) -> Self {
        Self { play_id, audience }
    }
}

impl ValueObject for Performance {}

/// Customer invoice. Performance order is statement line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    customer: String,
    #[serde(default)]
    performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn performances(&self) -> &[Performance] {
        &self.performances
    }
}
