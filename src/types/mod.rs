pub mod catalog;
pub mod stage;
pub mod timer_state;
