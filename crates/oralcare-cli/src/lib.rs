//! oralcare-cli library root.
//!
//! Exposes the session, command parser, page views and config so the
//! integration tests can drive a full questionnaire without a terminal.

pub mod commands;
pub mod config;
pub mod pages;
pub mod state;
