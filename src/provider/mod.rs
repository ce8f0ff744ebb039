pub mod dto;
pub mod helpers;
pub mod implementation;

use crate::error::Result;
use crate::tools::{Operation, TranslatedQuery};
use async_trait::async_trait;

pub use dto::{ExternalCallResult, Payload};
pub use implementation::ProcessProvider;

/// The external data-access collaborator. One call is one complete round
/// trip; implementations keep no per-query state between calls.
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn invoke(&self, operation: Operation, query: &TranslatedQuery)
        -> Result<ExternalCallResult>;
}
