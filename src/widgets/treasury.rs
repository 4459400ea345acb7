use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::storage::{Persisted, Storage};

/// Storage key for the treasury slot.
pub const TREASURY_KEY: &str = "ronin_treasury";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreasuryItem {
    pub id: String,
    pub name: String,
    pub cost: u32,
    pub saved: u32,
}

fn seed_items() -> Vec<TreasuryItem> {
    vec![
        TreasuryItem {
            id: Ulid::new().to_string(),
            name: "RTX 5090".to_string(),
            cost: 1600,
            saved: 400,
        },
        TreasuryItem {
            id: Ulid::new().to_string(),
            name: "Japan Trip".to_string(),
            cost: 5000,
            saved: 1200,
        },
    ]
}

/// Wishlist savings tracker. `saved` always stays within `0..=cost`.
pub struct Treasury {
    slot: Persisted<Vec<TreasuryItem>>,
}

impl Treasury {
    pub fn new(backend: Box<dyn Storage>) -> Self {
        Self {
            slot: Persisted::new(backend, TREASURY_KEY, seed_items()),
        }
    }

    pub fn items(&self) -> &[TreasuryItem] {
        self.slot.get()
    }

    pub fn add(&mut self, name: impl Into<String>, cost: u32) -> TreasuryItem {
        let item = TreasuryItem {
            id: Ulid::new().to_string(),
            name: name.into(),
            cost,
            saved: 0,
        };
        self.slot.update(|items| items.push(item.clone()));
        item
    }

    /// Move savings toward (or away from) an item, clamped to `0..=cost`.
    pub fn update_savings(&mut self, id: &str, delta: i64) {
        self.slot.update(|items| {
            if let Some(item) = items.iter_mut().find(|i| i.id == id) {
                let next = i64::from(item.saved) + delta;
                item.saved = next.clamp(0, i64::from(item.cost)) as u32;
            }
        });
    }

    pub fn delete(&mut self, id: &str) {
        self.slot.update(|items| items.retain(|i| i.id != id));
    }
}
