pub mod errors;
pub mod message;

pub use errors::{AppError, AppResult};
pub use message::{ChatAnswer, ChatRequest};
