//! Command handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::SlashCommandHandler;

/// Maps command names to their handlers
#[derive(Clone, Default)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn SlashCommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry populated with every handler the bot ships
    pub fn with_handlers(handlers: Vec<Arc<dyn SlashCommandHandler>>) -> Self {
        let mut registry = Self::new();
        for handler in handlers {
            registry.register(handler);
        }
        registry
    }

    /// Register a handler under each of its declared command names
    pub fn register(&mut self, handler: Arc<dyn SlashCommandHandler>) {
        for name in handler.command_names() {
            self.handlers.insert(name, Arc::clone(&handler));
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn SlashCommandHandler>> {
        self.handlers.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered command names (not unique handlers)
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn command_names(&self) -> impl Iterator<Item = &&'static str> {
        self.handlers.keys()
    }
}
