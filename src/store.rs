//! Domain data store
//!
//! `RoninStore` owns the aggregate document and exposes one CRUD set per
//! entity list plus the two progress counters and the admin flag. Every
//! mutation updates the in-memory document and writes the whole document
//! through to storage.

use chrono::{NaiveDate, Utc};
use ulid::Ulid;

use crate::storage::{Persisted, Storage};
use crate::types::{
    Habit, LibraryItem, LibraryKind, LibraryStatus, Project, Quest, QuestCategory, RoninData,
};

/// Storage key for the aggregate document.
pub const DATA_STORE_KEY: &str = "dataStore";

/// Outcome of an update against an entity list. A missing id is a normal
/// outcome, not an error: the store deliberately no-ops rather than raising,
/// matching how the dashboard always behaved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum UpdateResult {
    Updated,
    NotFound,
}

impl UpdateResult {
    pub fn is_updated(self) -> bool {
        matches!(self, UpdateResult::Updated)
    }
}

/// Fields for a new project; the store assigns the id.
#[derive(Clone, Debug, Default)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub github: Option<String>,
    pub live: Option<String>,
    pub image_url: Option<String>,
}

/// Partial update of a project. `None` leaves the field alone.
#[derive(Clone, Debug, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tech: Option<Vec<String>>,
    pub github: Option<Option<String>>,
    pub live: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
}

#[derive(Clone, Debug)]
pub struct NewQuest {
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub category: QuestCategory,
}

#[derive(Clone, Debug, Default)]
pub struct QuestPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub category: Option<QuestCategory>,
}

#[derive(Clone, Debug)]
pub struct NewLibraryItem {
    pub title: String,
    pub kind: LibraryKind,
    pub status: LibraryStatus,
    pub cover_url: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LibraryItemPatch {
    pub title: Option<String>,
    pub status: Option<LibraryStatus>,
    pub cover_url: Option<Option<String>>,
}

pub struct RoninStore {
    slot: Persisted<RoninData>,
}

impl RoninStore {
    /// Load the aggregate document from `backend`, starting from the
    /// default document when nothing usable is stored.
    pub fn new(backend: Box<dyn Storage>) -> Self {
        Self {
            slot: Persisted::new(backend, DATA_STORE_KEY, RoninData::default()),
        }
    }

    fn fresh_id() -> String {
        Ulid::new().to_string()
    }

    pub fn data(&self) -> &RoninData {
        self.slot.get()
    }

    pub fn projects(&self) -> &[Project] {
        &self.slot.get().projects
    }

    pub fn quests(&self) -> &[Quest] {
        &self.slot.get().quests
    }

    pub fn habits(&self) -> &[Habit] {
        &self.slot.get().habits
    }

    pub fn library_items(&self) -> &[LibraryItem] {
        &self.slot.get().library_items
    }

    pub fn one_piece_episode(&self) -> u32 {
        self.slot.get().one_piece_episode
    }

    pub fn one_piece_chapter(&self) -> u32 {
        self.slot.get().one_piece_chapter
    }

    pub fn is_admin(&self) -> bool {
        self.slot.get().is_admin
    }

    pub fn toggle_admin(&mut self) {
        self.slot.update(|d| d.is_admin = !d.is_admin);
    }

    // Projects

    pub fn add_project(&mut self, new: NewProject) -> Project {
        let project = Project {
            id: Self::fresh_id(),
            title: new.title,
            description: new.description,
            tech: new.tech,
            github: new.github,
            live: new.live,
            image_url: new.image_url,
        };
        self.slot.update(|d| d.projects.push(project.clone()));
        project
    }

    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> UpdateResult {
        let Some(index) = self.slot.get().projects.iter().position(|p| p.id == id) else {
            return UpdateResult::NotFound;
        };
        self.slot.update(|d| {
            let p = &mut d.projects[index];
            if let Some(title) = patch.title {
                p.title = title;
            }
            if let Some(description) = patch.description {
                p.description = description;
            }
            if let Some(tech) = patch.tech {
                p.tech = tech;
            }
            if let Some(github) = patch.github {
                p.github = github;
            }
            if let Some(live) = patch.live {
                p.live = live;
            }
            if let Some(image_url) = patch.image_url {
                p.image_url = image_url;
            }
        });
        UpdateResult::Updated
    }

    pub fn delete_project(&mut self, id: &str) -> bool {
        let mut removed = false;
        self.slot.update(|d| {
            let before = d.projects.len();
            d.projects.retain(|p| p.id != id);
            removed = d.projects.len() != before;
        });
        removed
    }

    // Quests

    pub fn add_quest(&mut self, new: NewQuest) -> Quest {
        let quest = Quest {
            id: Self::fresh_id(),
            title: new.title,
            description: new.description,
            completed: new.completed,
            category: new.category,
            created_at: Utc::now().to_rfc3339(),
        };
        self.slot.update(|d| d.quests.push(quest.clone()));
        quest
    }

    pub fn update_quest(&mut self, id: &str, patch: QuestPatch) -> UpdateResult {
        let Some(index) = self.slot.get().quests.iter().position(|q| q.id == id) else {
            return UpdateResult::NotFound;
        };
        self.slot.update(|d| {
            let q = &mut d.quests[index];
            if let Some(title) = patch.title {
                q.title = title;
            }
            if let Some(description) = patch.description {
                q.description = description;
            }
            if let Some(completed) = patch.completed {
                q.completed = completed;
            }
            if let Some(category) = patch.category {
                q.category = category;
            }
        });
        UpdateResult::Updated
    }

    pub fn toggle_quest_complete(&mut self, id: &str) -> UpdateResult {
        let Some(index) = self.slot.get().quests.iter().position(|q| q.id == id) else {
            return UpdateResult::NotFound;
        };
        self.slot.update(|d| {
            let q = &mut d.quests[index];
            q.completed = !q.completed;
        });
        UpdateResult::Updated
    }

    pub fn delete_quest(&mut self, id: &str) -> bool {
        let mut removed = false;
        self.slot.update(|d| {
            let before = d.quests.len();
            d.quests.retain(|q| q.id != id);
            removed = d.quests.len() != before;
        });
        removed
    }

    // Habits

    pub fn add_habit(&mut self, name: impl Into<String>) -> Habit {
        let habit = Habit {
            id: Self::fresh_id(),
            name: name.into(),
            completed_days: Vec::new(),
        };
        self.slot.update(|d| d.habits.push(habit.clone()));
        habit
    }

    /// Toggle `date` in the habit's completed set: present comes out,
    /// absent goes in. Applying it twice restores the original set.
    pub fn toggle_habit_day(&mut self, habit_id: &str, date: NaiveDate) -> UpdateResult {
        let Some(index) = self.slot.get().habits.iter().position(|h| h.id == habit_id) else {
            return UpdateResult::NotFound;
        };
        self.slot.update(|d| {
            let days = &mut d.habits[index].completed_days;
            if let Some(pos) = days.iter().position(|&day| day == date) {
                days.remove(pos);
            } else {
                days.push(date);
            }
        });
        UpdateResult::Updated
    }

    pub fn delete_habit(&mut self, id: &str) -> bool {
        let mut removed = false;
        self.slot.update(|d| {
            let before = d.habits.len();
            d.habits.retain(|h| h.id != id);
            removed = d.habits.len() != before;
        });
        removed
    }

    // Library

    pub fn add_library_item(&mut self, new: NewLibraryItem) -> LibraryItem {
        let item = LibraryItem {
            id: Self::fresh_id(),
            title: new.title,
            kind: new.kind,
            status: new.status,
            cover_url: new.cover_url,
        };
        self.slot.update(|d| d.library_items.push(item.clone()));
        item
    }

    pub fn update_library_item(&mut self, id: &str, patch: LibraryItemPatch) -> UpdateResult {
        let Some(index) = self.slot.get().library_items.iter().position(|i| i.id == id) else {
            return UpdateResult::NotFound;
        };
        self.slot.update(|d| {
            let item = &mut d.library_items[index];
            if let Some(title) = patch.title {
                item.title = title;
            }
            if let Some(status) = patch.status {
                item.status = status;
            }
            if let Some(cover_url) = patch.cover_url {
                item.cover_url = cover_url;
            }
        });
        UpdateResult::Updated
    }

    pub fn delete_library_item(&mut self, id: &str) -> bool {
        let mut removed = false;
        self.slot.update(|d| {
            let before = d.library_items.len();
            d.library_items.retain(|i| i.id != id);
            removed = d.library_items.len() != before;
        });
        removed
    }

    // Progress counters. Direct sets; u32 keeps them non-negative.

    pub fn set_one_piece_episode(&mut self, episode: u32) {
        self.slot.update(|d| d.one_piece_episode = episode);
    }

    pub fn set_one_piece_chapter(&mut self, chapter: u32) {
        self.slot.update(|d| d.one_piece_chapter = chapter);
    }
}
