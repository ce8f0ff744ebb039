pub mod dto;
pub mod handler;

pub use dto::{input_schema, AtlasDetailsInput};
pub use handler::translate;
