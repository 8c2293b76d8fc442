pub mod config;
pub mod models;
pub mod session;

mod storage;
pub use storage::Storage;

mod memory;
pub use memory::MemoryStorage;

mod file_store;
pub use file_store::FileStorage;

pub use config::AppConfig;
pub use models::UserInfo;
pub use session::{Session, SessionStore};
