//! Utility slash commands: /start, /help, /ping, /status

use serenity::builder::CreateApplicationCommand;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    [
        ("start", "Show the welcome message"),
        ("help", "How to use the style bot"),
        ("ping", "Test bot responsiveness"),
        ("status", "Uptime, version and style count"),
    ]
    .into_iter()
    .map(|(name, description)| {
        CreateApplicationCommand::default()
            .name(name)
            .description(description)
            .to_owned()
    })
    .collect()
}
