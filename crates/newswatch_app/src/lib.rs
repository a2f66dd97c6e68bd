//! Newswatch app: configuration, logging and the one-shot orchestrator.
pub mod config;
pub mod logging;
pub mod run;
