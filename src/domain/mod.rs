pub mod article;
pub mod author;
pub mod deadline;
pub mod errors;

pub use deadline::Deadline;
