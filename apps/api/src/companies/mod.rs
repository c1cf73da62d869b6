pub mod handlers;
pub mod write;
