//! Runtime configuration

pub mod config;
