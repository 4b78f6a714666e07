//! # Style Picker Components
//!
//! Select menu and navigation buttons for choosing a style.

use serenity::builder::CreateComponents;
use serenity::model::application::component::ButtonStyle;

use super::catalog::StyleCatalog;
use super::pagination::plan;
use crate::core::{
    truncate_label, truncate_to_chars, LABEL_PREVIEW_CHARS, MESSAGE_LIMIT, OPTION_TEXT_LIMIT,
};

/// Component ID prefixes for routing
pub const STYLE_SELECT_ID: &str = "style_select";
pub const PAGE_PREFIX: &str = "page_";

/// Prompt sent alongside the picker
pub const PICKER_PROMPT: &str = "Choose a style:";

/// One entry of the style select menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    /// The user's text in this style, shortened for display
    pub label: String,
    /// Style name, returned by Discord when the option is chosen
    pub value: String,
    /// Alphabet preview of the style
    pub description: String,
}

/// Options for one page of the picker, in catalog order
pub fn picker_options(
    catalog: &StyleCatalog,
    text: &str,
    page: usize,
    page_size: usize,
) -> Vec<PickerOption> {
    let page_plan = plan(catalog.len(), page_size, page);

    catalog
        .styles()
        .skip(page_plan.start)
        .take(page_plan.range().len())
        .map(|style| {
            let styled = style.apply(text);
            let label = if styled.trim().is_empty() {
                style.name().to_string()
            } else {
                truncate_label(&styled, LABEL_PREVIEW_CHARS)
            };
            let description = truncate_label(&style.preview(), OPTION_TEXT_LIMIT / 2);
            PickerOption {
                label,
                value: style.name().to_string(),
                description,
            }
        })
        .collect()
}

/// Build the picker for `page`: a select menu with the page's styles, then a
/// Back/Next row when there is somewhere to go.
pub fn build_style_picker(
    catalog: &StyleCatalog,
    text: &str,
    page: usize,
    page_size: usize,
) -> CreateComponents {
    let mut components = CreateComponents::default();
    let page_plan = plan(catalog.len(), page_size, page);
    let options = picker_options(catalog, text, page, page_size);

    // Discord rejects a select menu without options
    if !page_plan.is_empty() {
        components.create_action_row(|row| {
            row.create_select_menu(|menu| {
                menu.custom_id(STYLE_SELECT_ID)
                    .placeholder(format!("Page {} of styles", page + 1))
                    .options(|opts| {
                        for option in &options {
                            opts.create_option(|o| {
                                o.label(&option.label)
                                    .value(&option.value)
                                    .description(&option.description)
                            });
                        }
                        opts
                    })
            })
        });
    }

    if page_plan.has_previous || page_plan.has_next {
        components.create_action_row(|row| {
            if page_plan.has_previous {
                row.create_button(|btn| {
                    btn.custom_id(format!("{}{}", PAGE_PREFIX, page - 1))
                        .label("⬅️ Back")
                        .style(ButtonStyle::Secondary)
                });
            }
            if page_plan.has_next {
                row.create_button(|btn| {
                    btn.custom_id(format!("{}{}", PAGE_PREFIX, page + 1))
                        .label("Next ➡️")
                        .style(ButtonStyle::Secondary)
                });
            }
            row
        });
    }

    components
}

/// Single button returning from a rendered result to the picker page
pub fn build_back_to_styles(page: usize) -> CreateComponents {
    let mut components = CreateComponents::default();
    components.create_action_row(|row| {
        row.create_button(|btn| {
            btn.custom_id(format!("{}{}", PAGE_PREFIX, page))
                .label("⬅️ Back to Styles")
                .style(ButtonStyle::Primary)
        })
    });
    components
}

/// Parse a `page_{n}` custom_id
pub fn parse_page_id(custom_id: &str) -> Option<usize> {
    custom_id.strip_prefix(PAGE_PREFIX)?.parse().ok()
}

/// Markdown message showing a rendered result, shortened to fit one message
pub fn format_styled_result(style_name: &str, styled: &str) -> String {
    let header = format!("Here's your text in {style_name} style:\n\n");
    let budget = MESSAGE_LIMIT.saturating_sub(header.chars().count() + 2);
    format!("{header}`{}`", truncate_to_chars(styled, budget))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StyleCatalog {
        StyleCatalog::embedded().unwrap()
    }

    #[test]
    fn test_parse_page_id() {
        assert_eq!(parse_page_id("page_0"), Some(0));
        assert_eq!(parse_page_id("page_12"), Some(12));
    }

    #[test]
    fn test_invalid_parse() {
        assert_eq!(parse_page_id("page_"), None);
        assert_eq!(parse_page_id("page_-1"), None);
        assert_eq!(parse_page_id("page_next"), None);
        assert_eq!(parse_page_id("style_select"), None);
    }

    #[test]
    fn test_first_page_options() {
        let catalog = catalog();
        let options = picker_options(&catalog, "Hello", 0, 25);
        assert_eq!(options.len(), 25);
        assert_eq!(options[0].value, "bold");
        assert_eq!(options[0].label, "𝐡𝐞𝐥𝐥𝐨");
        assert_eq!(options[0].description, truncate_label(&"𝐚𝐛𝐜𝐝𝐞𝐟𝐠𝐡𝐢𝐣𝐤𝐥𝐦𝐧𝐨𝐩𝐪𝐫𝐬𝐭𝐮𝐯𝐰𝐱𝐲𝐳", 50));
    }

    #[test]
    fn test_second_page_options() {
        let catalog = catalog();
        let names = catalog.list_style_names();
        let options = picker_options(&catalog, "Hello", 1, 25);
        assert_eq!(options.len(), catalog.len() - 25);
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, names[25..].to_vec());
    }

    #[test]
    fn test_long_text_label_truncated() {
        let catalog = catalog();
        let options = picker_options(&catalog, "a rather long message to style", 0, 25);
        for option in &options {
            assert!(option.label.chars().count() <= LABEL_PREVIEW_CHARS + 3);
        }
        let fullwidth = options.iter().find(|o| o.value == "fullwidth").unwrap();
        assert_eq!(fullwidth.label, "ａ ｒａｔｈｅｒ ｌｏｎｇ ｍｅｓｓａｇ...");
    }

    #[test]
    fn test_blank_text_falls_back_to_style_name() {
        let catalog = catalog();
        let options = picker_options(&catalog, "   ", 0, 25);
        assert_eq!(options[0].label, "bold");
    }

    #[test]
    fn test_descriptions_fit_discord_limit() {
        let catalog = catalog();
        for page in 0..2 {
            for option in picker_options(&catalog, "x", page, 25) {
                assert!(option.description.chars().count() <= OPTION_TEXT_LIMIT);
                assert!(option.label.chars().count() <= OPTION_TEXT_LIMIT);
            }
        }
    }

    #[test]
    fn test_build_style_picker_builds_successfully() {
        let catalog = catalog();
        // CreateComponents is opaque; building every page without panic is the check
        let _first = build_style_picker(&catalog, "Hello", 0, 25);
        let _last = build_style_picker(&catalog, "Hello", 1, 25);
    }

    #[test]
    fn test_build_style_picker_empty_catalog() {
        let empty = StyleCatalog::from_yaml_str("version: 1\nstyles: []\n").unwrap();
        let _components = build_style_picker(&empty, "Hello", 0, 25);
        assert!(picker_options(&empty, "Hello", 0, 25).is_empty());
    }

    #[test]
    fn test_build_back_to_styles() {
        let _components = build_back_to_styles(1);
    }

    #[test]
    fn test_format_styled_result() {
        assert_eq!(
            format_styled_result("bubble", "ⓗⓘ"),
            "Here's your text in bubble style:\n\n`ⓗⓘ`"
        );
    }

    #[test]
    fn test_format_styled_result_keeps_multibyte_text_under_limit() {
        // 1200 four-byte glyphs: over 2000 bytes, well under 2000 characters
        let styled = "𝐚".repeat(1200);
        let message = format_styled_result("bold", &styled);
        assert!(message.len() > MESSAGE_LIMIT);
        assert!(message.ends_with(&format!("{styled}`")));
    }

    #[test]
    fn test_format_styled_result_fits_one_message() {
        let styled = "🇦\u{200B}".repeat(1000);
        let message = format_styled_result("regional", &styled);
        assert_eq!(message.chars().count(), MESSAGE_LIMIT);
        assert!(message.ends_with("...`"));
    }
}
