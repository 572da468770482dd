pub mod client;
pub mod memory;
pub mod resolver;
pub mod source;

pub use client::{WikipediaClient, ENGLISH_API_URL};
pub use memory::{MemorySource, SourceCall};
pub use resolver::{ambiguity_message, search_term, ResolveError, TitleResolver};
pub use source::{ArticleSource, LookupOutcome, ResolvedArticle};
