pub mod dto;
pub mod handler;

pub use dto::{input_schema, HealthCheckInput};
pub use handler::translate;
