pub mod ease;
pub mod inertia;
pub mod spring;
pub mod transition;
