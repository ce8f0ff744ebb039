pub mod dto;
pub mod handler;

pub use dto::{input_schema, AssociateSearchQuery, SearchAssociateProgramsInput};
pub use handler::translate;
