// Core layer - shared types and configuration
pub mod core;

// Features layer - styles and picker sessions
pub mod features;

// UI components
pub mod message_components;

// Application layer
pub mod command_handler;
pub mod commands;

pub use core::Config;

pub use features::{
    plan, preview, render, PagePlan, SessionStore, Style, StyleCatalog, StyleError, StyledRequest,
};
