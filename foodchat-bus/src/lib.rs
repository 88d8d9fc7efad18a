pub mod app_config;
pub mod bus;
pub mod events;

pub use bus::{ChatListener, EventBus};
pub use events::{ChatMessage, MessagePayload, SenderRole};
