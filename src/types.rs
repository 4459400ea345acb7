use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestCategory {
    Gaming,
    Learning,
    Fitness,
    Creative,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub category: QuestCategory,
    pub created_at: String,
}

/// `completed_days` is a set: a date appears at most once, and toggling it
/// back out removes it. Order carries no meaning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub completed_days: Vec<NaiveDate>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryKind {
    Book,
    Movie,
}

/// Statuses for both kinds of library item. Books move through
/// to-read/reading/finished and movies through to-watch/watching/finished;
/// the store does not reject mismatched combinations, the widgets only ever
/// cycle within the right subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LibraryStatus {
    Reading,
    Watching,
    Finished,
    ToRead,
    ToWatch,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: LibraryKind,
    pub status: LibraryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

fn default_progress() -> u32 {
    1
}

/// The aggregate document behind the dashboard, persisted as one JSON blob.
///
/// Every field carries a serde default so a document written by an older,
/// smaller schema still loads: missing fields take their defaults instead
/// of failing the whole parse.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoninData {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub quests: Vec<Quest>,
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub library_items: Vec<LibraryItem>,
    #[serde(default = "default_progress")]
    pub one_piece_episode: u32,
    #[serde(default = "default_progress")]
    pub one_piece_chapter: u32,
    #[serde(default)]
    pub is_admin: bool,
}

impl Default for RoninData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            projects: Vec::new(),
            quests: Vec::new(),
            habits: Vec::new(),
            library_items: Vec::new(),
            one_piece_episode: 1,
            one_piece_chapter: 1,
            is_admin: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_merges_over_defaults() {
        // A document from before habits/library/counters existed.
        let old = r#"{"projects":[{"id":"p1","title":"Dojo","description":"training site","tech":["Rust"]}]}"#;
        let data: RoninData = serde_json::from_str(old).unwrap();
        assert_eq!(data.projects.len(), 1);
        assert!(data.habits.is_empty());
        assert!(data.library_items.is_empty());
        assert_eq!(data.one_piece_episode, 1);
        assert_eq!(data.one_piece_chapter, 1);
        assert_eq!(data.schema_version, SCHEMA_VERSION);
        assert!(!data.is_admin);
    }

    #[test]
    fn test_persisted_layout_is_camel_case() {
        let mut data = RoninData::default();
        data.library_items.push(LibraryItem {
            id: "l1".to_string(),
            title: "Vagabond".to_string(),
            kind: LibraryKind::Book,
            status: LibraryStatus::ToRead,
            cover_url: None,
        });
        let json = serde_json::to_value(&data).unwrap();
        assert!(json.get("libraryItems").is_some());
        assert!(json.get("onePieceEpisode").is_some());
        assert!(json.get("isAdmin").is_some());
        assert_eq!(json["libraryItems"][0]["type"], "book");
        assert_eq!(json["libraryItems"][0]["status"], "to-read");
    }

    #[test]
    fn test_habit_days_serialize_as_iso_dates() {
        let habit = Habit {
            id: "h1".to_string(),
            name: "train".to_string(),
            completed_days: vec![NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()],
        };
        let json = serde_json::to_value(&habit).unwrap();
        assert_eq!(json["completedDays"][0], "2024-01-15");
    }
}
