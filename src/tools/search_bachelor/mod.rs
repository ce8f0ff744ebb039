pub mod dto;
pub mod handler;

pub use dto::{input_schema, BachelorSearchQuery, SearchBachelorProgramsInput};
pub use handler::translate;
