#![forbid(unsafe_code)]

pub mod completion_service;
pub mod error;
pub mod progress_service;

pub use curriculum_core::Clock;

pub use completion_service::CompletionService;
pub use error::{CompletionServiceError, ProgressServiceError};
pub use progress_service::ProgressService;
