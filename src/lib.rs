pub mod config;
pub mod install;
pub mod launch;
pub mod pipeline;
pub mod progress;
pub mod remote;
pub mod stage;
pub mod status_ui;
