use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::storage::{Persisted, Storage};

/// Storage key for the quest log slot.
pub const QUEST_LOG_KEY: &str = "ronin_quest_log";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    Main,
    Side,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestLogEntry {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: QuestKind,
    pub completed: bool,
}

fn seed_entries() -> Vec<QuestLogEntry> {
    vec![
        QuestLogEntry {
            id: Ulid::new().to_string(),
            title: "Complete Digital Ronin Dashboard".to_string(),
            kind: QuestKind::Main,
            completed: false,
        },
        QuestLogEntry {
            id: Ulid::new().to_string(),
            title: "Find all Korok seeds in TotK".to_string(),
            kind: QuestKind::Side,
            completed: false,
        },
    ]
}

/// Main/side quest tracker, separate from the aggregate document's quest
/// list. Seeds two entries on first use.
pub struct QuestLog {
    slot: Persisted<Vec<QuestLogEntry>>,
}

impl QuestLog {
    pub fn new(backend: Box<dyn Storage>) -> Self {
        Self {
            slot: Persisted::new(backend, QUEST_LOG_KEY, seed_entries()),
        }
    }

    pub fn entries(&self) -> &[QuestLogEntry] {
        self.slot.get()
    }

    pub fn add(&mut self, title: impl Into<String>, kind: QuestKind) -> QuestLogEntry {
        let entry = QuestLogEntry {
            id: Ulid::new().to_string(),
            title: title.into(),
            kind,
            completed: false,
        };
        self.slot.update(|entries| entries.push(entry.clone()));
        entry
    }

    pub fn toggle(&mut self, id: &str) {
        self.slot.update(|entries| {
            if let Some(entry) = entries.iter_mut().find(|e| e.id == id) {
                entry.completed = !entry.completed;
            }
        });
    }

    pub fn delete(&mut self, id: &str) {
        self.slot.update(|entries| entries.retain(|e| e.id != id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_seeds_on_first_use() {
        let log = QuestLog::new(Box::new(MemoryStorage::new()));
        assert_eq!(log.entries().len(), 2);
        assert_eq!(log.entries()[0].kind, QuestKind::Main);
        assert_eq!(log.entries()[1].kind, QuestKind::Side);
    }

    #[test]
    fn test_add_toggle_delete() {
        let mut log = QuestLog::new(Box::new(MemoryStorage::new()));
        let entry = log.add("Defeat the demon king", QuestKind::Main);
        assert_eq!(log.entries().len(), 3);

        log.toggle(&entry.id);
        assert!(log.entries().iter().find(|e| e.id == entry.id).unwrap().completed);

        // Toggling an unknown id changes nothing.
        let before: Vec<_> = log.entries().to_vec();
        log.toggle("nobody");
        assert_eq!(log.entries(), before.as_slice());

        log.delete(&entry.id);
        assert_eq!(log.entries().len(), 2);
    }

    #[test]
    fn test_stored_entries_win_over_seeds() {
        let backend = MemoryStorage::new();
        {
            let mut log = QuestLog::new(Box::new(backend.clone()));
            let seeded: Vec<_> = log.entries().iter().map(|e| e.id.clone()).collect();
            for id in seeded {
                log.delete(&id);
            }
        }
        let log = QuestLog::new(Box::new(backend));
        assert!(log.entries().is_empty());
    }
}
