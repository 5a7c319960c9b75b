pub mod endpoint;
pub mod form;
