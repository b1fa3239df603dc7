pub mod action_bar;
pub mod drop_zone;
pub mod file_input;
pub mod preview;
