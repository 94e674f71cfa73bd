pub mod cli;
pub mod gui;
