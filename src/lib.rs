//! Scaffolding for MERN role-based auth projects.
//!
//! The pipeline copies a template tree, asks for `.env` values, writes the
//! backend and web client env files and installs dependencies in both
//! sub-projects.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
