use serde::{Deserialize, Serialize};

use crate::storage::{Persisted, Storage};

/// Storage key for the log pose slot.
pub const LOG_POSE_KEY: &str = "ronin_log_pose";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Anime,
    Manga,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogPoseData {
    pub series: String,
    pub episode: u32,
    pub chapter: u32,
    #[serde(rename = "type")]
    pub kind: LogKind,
}

impl Default for LogPoseData {
    fn default() -> Self {
        Self {
            series: "One Piece".to_string(),
            episode: 1089,
            chapter: 1105,
            kind: LogKind::Manga,
        }
    }
}

/// Where-am-I tracker for a long-running series. Counters move by signed
/// steps and floor at zero.
pub struct LogPose {
    slot: Persisted<LogPoseData>,
}

impl LogPose {
    pub fn new(backend: Box<dyn Storage>) -> Self {
        Self {
            slot: Persisted::new(backend, LOG_POSE_KEY, LogPoseData::default()),
        }
    }

    pub fn data(&self) -> &LogPoseData {
        self.slot.get()
    }

    pub fn set_kind(&mut self, kind: LogKind) {
        self.slot.update(|d| d.kind = kind);
    }

    pub fn adjust_episode(&mut self, delta: i32) {
        self.slot
            .update(|d| d.episode = d.episode.saturating_add_signed(delta));
    }

    pub fn adjust_chapter(&mut self, delta: i32) {
        self.slot
            .update(|d| d.chapter = d.chapter.saturating_add_signed(delta));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_defaults() {
        let pose = LogPose::new(Box::new(MemoryStorage::new()));
        assert_eq!(pose.data().series, "One Piece");
        assert_eq!(pose.data().episode, 1089);
        assert_eq!(pose.data().chapter, 1105);
        assert_eq!(pose.data().kind, LogKind::Manga);
    }

    #[test]
    fn test_counters_floor_at_zero() {
        let mut pose = LogPose::new(Box::new(MemoryStorage::new()));
        pose.adjust_episode(-2000);
        assert_eq!(pose.data().episode, 0);
        pose.adjust_episode(3);
        assert_eq!(pose.data().episode, 3);
    }

    #[test]
    fn test_progress_persists() {
        let backend = MemoryStorage::new();
        {
            let mut pose = LogPose::new(Box::new(backend.clone()));
            pose.adjust_chapter(1);
            pose.set_kind(LogKind::Anime);
        }
        let pose = LogPose::new(Box::new(backend));
        assert_eq!(pose.data().chapter, 1106);
        assert_eq!(pose.data().kind, LogKind::Anime);
    }
}
