//! Standalone dashboard widgets
//!
//! Each widget owns a single keyed slot, independent of the aggregate
//! document: the log pose reading tracker, the quest log, the treasury
//! savings tracker, and the memory card.

pub mod log_pose;
pub mod memory;
pub mod quest_log;
pub mod treasury;

pub use log_pose::{LogKind, LogPose, LogPoseData};
pub use memory::{MemoryCard, MemoryCardData};
pub use quest_log::{QuestKind, QuestLog, QuestLogEntry};
pub use treasury::{Treasury, TreasuryItem};
