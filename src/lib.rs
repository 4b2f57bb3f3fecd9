pub mod app;
pub mod cache;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod fallback;
pub mod github;
pub mod logging;
pub mod model;
pub mod notify;
pub mod profile;
pub mod repos;
pub mod source;
pub mod streak;
pub mod tui;
pub mod util;
