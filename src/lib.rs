//! ronin-desk
//!
//! The application logic behind the Digital Ronin portfolio dashboard:
//! keyed persistent storage, the aggregate data store with its CRUD
//! surface, the session gates, the standalone widget slots, and the
//! terminal command dispatcher. Everything is synchronous and local;
//! persistence is best-effort JSON under a per-user data directory.

pub mod cli;
pub mod error;
pub mod metadata;
pub mod session;
pub mod storage;
pub mod store;
pub mod terminal;
pub mod types;
pub mod widgets;

pub use error::{StorageError, StoreResult};
pub use session::{AdminGate, SessionGate};
pub use storage::{DisabledStorage, FileStorage, MemoryStorage, Persisted, Storage};
pub use store::{RoninStore, UpdateResult};
pub use types::RoninData;
