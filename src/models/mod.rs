pub mod budget;
pub mod event;
