pub mod drag;
pub mod extent;
pub mod hover;
