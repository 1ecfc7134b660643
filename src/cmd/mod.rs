//! Command handlers for the advent CLI

pub mod all;
pub mod completions;
pub mod config;
pub mod list;
pub mod run;
pub mod ui;
