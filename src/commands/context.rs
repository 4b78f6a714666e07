//! Shared context for command and component handlers
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Picker flow helpers shared by DMs, /style and component interactions
//! - 1.0.0: Initial implementation with catalog and session store

use serenity::builder::CreateComponents;
use std::sync::Arc;
use std::time::Instant;

use crate::features::sessions::{SessionStore, StyledRequest, UserKey};
use crate::features::styles::{
    build_back_to_styles, build_style_picker, format_styled_result, page_count, StyleCatalog,
};

/// Shared context for all handlers
///
/// Contains the read-only style catalog, the session store, the picker page
/// size and the bot start time for uptime reporting.
#[derive(Clone)]
pub struct CommandContext {
    pub catalog: Arc<StyleCatalog>,
    pub sessions: Arc<SessionStore>,
    pub styles_per_page: usize,
    pub start_time: Instant,
}

/// What to show after a style was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Rendered message, plus the page to return to
    Styled { message: String, page: usize },
    /// The style does not exist; user-visible explanation
    UnknownStyle(String),
    /// The user has no stored text
    NoSession,
}

/// Shown when a component is used without a stored text
pub const NO_SESSION_MESSAGE: &str = "Please send a text first!";

/// Longest text accepted for styling, in characters
pub const MAX_TEXT_CHARS: usize = 1000;

/// Reason a text cannot be styled, if any
pub fn check_text(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        Some("Please provide some text to style.".to_string())
    } else if text.chars().count() > MAX_TEXT_CHARS {
        Some(format!("Please keep your text under {MAX_TEXT_CHARS} characters."))
    } else {
        None
    }
}

impl CommandContext {
    pub fn new(catalog: Arc<StyleCatalog>, sessions: Arc<SessionStore>, styles_per_page: usize) -> Self {
        Self {
            catalog,
            sessions,
            styles_per_page,
            start_time: Instant::now(),
        }
    }

    /// Store `text` as the user's current request and build page 0 of the picker
    pub fn start_picker(&self, user: UserKey, text: &str) -> CreateComponents {
        let request = self.sessions.start(user, text);
        self.picker(&request.text, request.page)
    }

    pub fn picker(&self, text: &str, page: usize) -> CreateComponents {
        build_style_picker(&self.catalog, text, page, self.styles_per_page)
    }

    /// Page cursor from an interaction, with anything past the last page reset to 0
    pub fn clamp_page(&self, page: usize) -> usize {
        if page < page_count(self.catalog.len(), self.styles_per_page) {
            page
        } else {
            0
        }
    }

    /// Move the user's session to `page`, returning the updated request
    pub fn turn_page(&self, user: UserKey, page: usize) -> Option<StyledRequest> {
        self.sessions.set_page(user, self.clamp_page(page))
    }

    /// Render the user's stored text in `style_name`
    pub fn select_style(&self, user: UserKey, style_name: &str) -> SelectionOutcome {
        let Some(request) = self.sessions.get(user) else {
            return SelectionOutcome::NoSession;
        };

        match self.catalog.get_style(style_name) {
            Ok(style) => SelectionOutcome::Styled {
                message: format_styled_result(style_name, &style.apply(&request.text)),
                page: request.page,
            },
            Err(e) => SelectionOutcome::UnknownStyle(e.to_string()),
        }
    }

    pub fn back_to_styles(&self, page: usize) -> CreateComponents {
        build_back_to_styles(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_context() -> CommandContext {
        CommandContext::new(
            Arc::new(StyleCatalog::embedded().unwrap()),
            Arc::new(SessionStore::new(100, Duration::from_secs(3600))),
            25,
        )
    }

    #[test]
    fn test_command_context_clone() {
        // CommandContext should be Clone for sharing across handlers
        fn assert_clone<T: Clone>() {}
        assert_clone::<CommandContext>();
    }

    #[test]
    fn test_start_picker_stores_session() {
        let ctx = test_context();
        let _components = ctx.start_picker(42, "Hello");
        assert_eq!(
            ctx.sessions.get(42),
            Some(StyledRequest { text: "Hello".into(), page: 0 })
        );
    }

    #[test]
    fn test_select_style_renders_stored_text() {
        let ctx = test_context();
        ctx.start_picker(42, "Hi");
        assert_eq!(
            ctx.select_style(42, "bubble"),
            SelectionOutcome::Styled {
                message: "Here's your text in bubble style:\n\n`Ⓗⓘ`".to_string(),
                page: 0
            }
        );
    }

    #[test]
    fn test_select_style_keeps_page_for_back_button() {
        let ctx = test_context();
        ctx.start_picker(42, "Hi");
        ctx.turn_page(42, 1);
        match ctx.select_style(42, "regional") {
            SelectionOutcome::Styled { page, .. } => assert_eq!(page, 1),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_select_style_long_text_not_truncated() {
        let ctx = test_context();
        ctx.start_picker(42, &"a".repeat(600));
        match ctx.select_style(42, "bold") {
            SelectionOutcome::Styled { message, .. } => {
                assert!(!message.ends_with("...`"));
                assert_eq!(
                    message,
                    format!("Here's your text in bold style:\n\n`{}`", "𝐚".repeat(600))
                );
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_select_unknown_style() {
        let ctx = test_context();
        ctx.start_picker(42, "Hi");
        assert_eq!(
            ctx.select_style(42, "nonexistent-style"),
            SelectionOutcome::UnknownStyle("Style 'nonexistent-style' not found.".to_string())
        );
    }

    #[test]
    fn test_select_without_session() {
        let ctx = test_context();
        assert_eq!(ctx.select_style(7, "bold"), SelectionOutcome::NoSession);
        assert_eq!(ctx.turn_page(7, 1), None);
    }

    #[test]
    fn test_check_text() {
        assert_eq!(check_text("hello"), None);
        assert!(check_text("").is_some());
        assert!(check_text(" \n\t").is_some());
        assert!(check_text(&"x".repeat(MAX_TEXT_CHARS)).is_none());
        assert!(check_text(&"x".repeat(MAX_TEXT_CHARS + 1)).is_some());
    }

    #[test]
    fn test_clamp_page() {
        let ctx = test_context();
        let pages = page_count(ctx.catalog.len(), 25);
        assert_eq!(ctx.clamp_page(0), 0);
        assert_eq!(ctx.clamp_page(pages - 1), pages - 1);
        assert_eq!(ctx.clamp_page(pages), 0);
        assert_eq!(ctx.clamp_page(usize::MAX), 0);
    }

    #[test]
    fn test_turn_page_out_of_range_resets() {
        let ctx = test_context();
        ctx.start_picker(42, "Hi");
        assert_eq!(ctx.turn_page(42, 99).unwrap().page, 0);
        assert_eq!(ctx.turn_page(42, 1).unwrap().page, 1);
    }
}
