//! Process-owned stores. Both are created once in `main` and shared with the
//! HTTP layer through `web::Data`.

pub mod activities;
pub mod chat;
pub mod ids;
pub mod models;

use std::sync::{Arc, Mutex};

pub use activities::ActivityStore;
pub use chat::{ChatStore, GREETING};
pub use models::*;

pub type ActivityPool = Arc<Mutex<ActivityStore>>;
pub type ChatPool = Arc<Mutex<ChatStore>>;

pub fn activity_pool() -> ActivityPool {
    Arc::new(Mutex::new(ActivityStore::new()))
}

pub fn chat_pool() -> ChatPool {
    Arc::new(Mutex::new(ChatStore::new()))
}
