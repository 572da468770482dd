pub mod config;
pub mod error;
pub mod pipeline;
pub mod response;

pub use config::AppConfig;
pub use error::{ErrorKind, StoryError};
pub use pipeline::StoryPipeline;
pub use response::{ErrorResult, StoryResponse, SummaryResult};
