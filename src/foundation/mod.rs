pub mod arena;
pub mod core;
pub mod error;
