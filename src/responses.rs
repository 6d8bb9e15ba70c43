//! User-facing text for toggles, help and image outcomes.

use crate::constants::COMMAND_PREFIX;
use crate::services::autopost::Toggle;
use crate::services::image::ImageOutcome;

pub const MISSING_QUERY: &str = "You need to say which image to get!";
pub const MISSING_QUESTION: &str =
    "The magic 8-ball does not understand what you want - you need to give it a question!";

pub const COOLDOWN: &str = "Don't spam so fast, I'm on cooldown.";
pub const REFUSED: &str = "No thanks, I don't feel like getting on a watchlist.";
pub const NOT_FOUND: &str = "No images found matching your request.";
pub const NO_EMBEDDABLE: &str = "No embeddable images were found matching your request.";

/// How the user invoked the bot; hints are phrased in the same form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStyle {
    Prefix,
    Slash,
}

impl CommandStyle {
    fn mention(self, command: &str) -> String {
        match self {
            Self::Prefix => format!("`{COMMAND_PREFIX}{command}`"),
            Self::Slash => format!("`/{command}`"),
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Self::Prefix => "type",
            Self::Slash => "use",
        }
    }
}

struct HelpEntry {
    usage: &'static str,
    description: &'static str,
}

const HELP_ENTRIES: &[HelpEntry] = &[
    HelpEntry {
        usage: "image [query]",
        description: "fetches a random image from google images of [query]",
    },
    HelpEntry {
        usage: "enableautoimages",
        description: "enables automatic images in the current channel",
    },
    HelpEntry {
        usage: "disableautoimages",
        description: "disables automatic images in the current channel",
    },
    HelpEntry {
        usage: "8ball [question]",
        description: "get the magic 8-ball's response to the [question]",
    },
    HelpEntry {
        usage: "help",
        description: "shows this list of commands",
    },
];

/// Confirmation for an enable/disable request, always ending with a hint for the inverse command.
pub fn toggle_message(enabled: bool, toggle: Toggle, style: CommandStyle) -> String {
    let (state, inverse_state, inverse) = if enabled {
        ("enabled", "disable", "disableautoimages")
    } else {
        ("disabled", "enable", "enableautoimages")
    };
    let headline = match toggle {
        Toggle::Changed => format!("Automatic images have been {state} in this channel."),
        Toggle::Unchanged => format!("Automatic images are already {state} in this channel."),
    };
    format!(
        "{headline}\n If you want to {inverse_state} automatic images in this channel, {} {}.",
        style.verb(),
        style.mention(inverse)
    )
}

/// Command list. `suggestion` phrases it as a correction for a mistyped command.
pub fn help_message(style: CommandStyle, suggestion: bool) -> String {
    let mut text = String::from(if suggestion {
        "Did you mean to type one of the following?"
    } else {
        "Here are all my commands:"
    });
    text.push_str("\n\n");
    let lines: Vec<String> = HELP_ENTRIES
        .iter()
        .map(|entry| {
            let usage = match style {
                CommandStyle::Prefix => format!("{COMMAND_PREFIX}{}", entry.usage),
                CommandStyle::Slash => format!("/{}", entry.usage),
            };
            format!("`{usage}` - {}", entry.description)
        })
        .collect();
    text.push_str(&lines.join("\n"));
    text
}

pub fn unsupported_command(name: &str) -> String {
    format!("Command is not supported: {name}")
}

/// Text for an outcome. For `Found` this is the bare URL, used when the image cannot be attached.
pub fn outcome_message(outcome: &ImageOutcome) -> String {
    match outcome {
        ImageOutcome::Found(url) => url.clone(),
        ImageOutcome::Refused => REFUSED.to_string(),
        ImageOutcome::Cooldown => COOLDOWN.to_string(),
        ImageOutcome::NotFound => NOT_FOUND.to_string(),
        ImageOutcome::NoEmbeddable => NO_EMBEDDABLE.to_string(),
        ImageOutcome::ProviderError(message) => {
            format!("There was an error requesting your image: {message}")
        }
    }
}
