//! Command handlers

pub mod book;
pub mod config;
pub mod export;
pub mod list;
pub mod note;
