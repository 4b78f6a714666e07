//! # Style Commands
//!
//! /style opens the style picker for a piece of text; /styles lists the catalog.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_style_command(), create_styles_command()]
}

fn create_style_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("style")
        .description("Render your text in a decorative style")
        .create_option(|option| {
            option
                .name("text")
                .description("The text to style")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .to_owned()
}

fn create_styles_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("styles")
        .description("List every available style with a preview")
        .to_owned()
}
