//! Shared types, errors and configuration helpers for the memo service.

pub mod config;
pub mod error;
pub mod types;
