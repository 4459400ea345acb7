use serde::{Deserialize, Serialize};

use crate::storage::{Persisted, Storage};

/// Storage key for the memory card slot.
pub const MEMORY_KEY: &str = "ronin_memory";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryCardData {
    pub image: Option<String>,
    #[serde(default)]
    pub caption: String,
}

/// Single photo-and-caption card pinned to the dashboard.
pub struct MemoryCard {
    slot: Persisted<MemoryCardData>,
}

impl MemoryCard {
    pub fn new(backend: Box<dyn Storage>) -> Self {
        Self {
            slot: Persisted::new(backend, MEMORY_KEY, MemoryCardData::default()),
        }
    }

    pub fn data(&self) -> &MemoryCardData {
        self.slot.get()
    }

    pub fn set_image(&mut self, url: impl Into<String>) {
        self.slot.update(|d| d.image = Some(url.into()));
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.slot.update(|d| d.caption = caption.into());
    }

    pub fn clear(&mut self) {
        self.slot.set(MemoryCardData::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_empty_by_default() {
        let card = MemoryCard::new(Box::new(MemoryStorage::new()));
        assert_eq!(card.data().image, None);
        assert!(card.data().caption.is_empty());
    }

    #[test]
    fn test_set_and_clear() {
        let backend = MemoryStorage::new();
        let mut card = MemoryCard::new(Box::new(backend.clone()));
        card.set_image("https://example.com/sakura.jpg");
        card.set_caption("Hanami, spring 2024");

        let reopened = MemoryCard::new(Box::new(backend));
        assert_eq!(
            reopened.data().image.as_deref(),
            Some("https://example.com/sakura.jpg")
        );
        assert_eq!(reopened.data().caption, "Hanami, spring 2024");

        card.clear();
        assert_eq!(card.data(), &MemoryCardData::default());
    }
}
