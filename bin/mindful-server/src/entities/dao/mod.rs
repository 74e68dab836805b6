pub mod chat;
pub mod mood;
pub mod session;

pub use chat::{ChatMessage, Role};
pub use mood::{MoodEntry, NewMoodEntry};
pub use session::{ChatSession, NewChatSession};
