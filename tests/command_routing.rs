//! Prefix parsing, command lookup, toggles and composed replies.
mod common;

use std::str::FromStr;

use common::capture_logs;
use image_bot::commands::autoimages::apply_toggle;
use image_bot::commands::help::all_command_names;
use image_bot::constants::COMMAND_PREFIX;
use image_bot::handler::{Command, Route, parse_prefixed, route};
use image_bot::responses::{CommandStyle, help_message, unsupported_command};
use image_bot::services::autopost::{AutoPostChannels, Toggle};
use serenity::model::id::ChannelId;

#[test]
fn prefixed_messages_split_on_first_space() {
    assert_eq!(
        parse_prefixed("!image  cute cats ", "!"),
        Some(("image", "cute cats"))
    );
    assert_eq!(
        parse_prefixed("!8ball will it rain", "!"),
        Some(("8ball", "will it rain"))
    );
    assert_eq!(
        parse_prefixed("!enableautoimages", "!"),
        Some(("enableautoimages", ""))
    );
    assert_eq!(parse_prefixed("!image    ", "!"), Some(("image", "")));
    assert_eq!(parse_prefixed("cats please", "!"), None);
    assert_eq!(parse_prefixed(" !image cats", "!"), None);
}

#[test]
fn command_names_map_case_sensitively() {
    let parse = |s: &str| Command::from_str(s).unwrap();
    assert_eq!(parse("image"), Command::Image);
    assert_eq!(parse("8ball"), Command::EightBall);
    assert_eq!(parse("enableautoimages"), Command::EnableAutoImages);
    assert_eq!(parse("disableautoimages"), Command::DisableAutoImages);
    assert_eq!(parse("help"), Command::Help);
    assert_eq!(parse("images"), Command::Suggest);
    assert_eq!(parse("getimage"), Command::Suggest);
    assert_eq!(parse("Image"), Command::Unknown);
    assert_eq!(parse("ping"), Command::Unknown);
    assert_eq!(parse(""), Command::Unknown);
}

#[tokio::test]
async fn enable_twice_reports_already_enabled_and_logs_once() {
    let (logs, _guard) = capture_logs();
    let channels = AutoPostChannels::new();
    let c1 = ChannelId::new(1);

    let first = apply_toggle(&channels, c1, "general", true, CommandStyle::Prefix).await;
    let second = apply_toggle(&channels, c1, "general", true, CommandStyle::Prefix).await;

    assert!(first.starts_with("Automatic images have been enabled in this channel."));
    assert!(first.contains("type `!disableautoimages`"));
    assert!(second.starts_with("Automatic images are already enabled in this channel."));
    assert!(second.contains("`!disableautoimages`"));
    assert!(channels.is_enabled(c1).await);
    assert_eq!(logs.contents().matches("Automatic images were enabled").count(), 1);
}

#[tokio::test]
async fn disable_is_symmetric_and_defaults_off() {
    let channels = AutoPostChannels::new();
    let c2 = ChannelId::new(2);

    assert!(!channels.is_enabled(c2).await);
    let text = apply_toggle(&channels, c2, "random", false, CommandStyle::Slash).await;
    assert!(text.starts_with("Automatic images are already disabled in this channel."));
    assert!(text.contains("use `/enableautoimages`"));

    assert_eq!(channels.set(c2, true).await, Toggle::Changed);
    let text = apply_toggle(&channels, c2, "random", false, CommandStyle::Slash).await;
    assert!(text.starts_with("Automatic images have been disabled in this channel."));
    assert!(!channels.is_enabled(c2).await);
}

#[tokio::test]
async fn toggles_are_per_channel() {
    let channels = AutoPostChannels::new();
    channels.set(ChannelId::new(10), true).await;
    assert!(channels.is_enabled(ChannelId::new(10)).await);
    assert!(!channels.is_enabled(ChannelId::new(11)).await);
}

#[test]
fn help_lists_every_command_once() {
    let names = all_command_names();
    let mut sorted = names.clone();
    sorted.sort();
    for w in sorted.windows(2) {
        assert_ne!(w[0], w[1], "Duplicate help command name: {}", w[0]);
    }

    let prefix_help = help_message(CommandStyle::Prefix, false);
    let slash_help = help_message(CommandStyle::Slash, false);
    assert!(prefix_help.starts_with("Here are all my commands:"));
    for name in names {
        assert!(prefix_help.contains(&format!("`!{name}")), "missing !{name}");
        assert!(slash_help.contains(&format!("`/{name}")), "missing /{name}");
    }
}

#[test]
fn mistyped_image_commands_get_a_suggestion() {
    let text = help_message(CommandStyle::Prefix, true);
    assert!(text.starts_with("Did you mean to type one of the following?"));
    assert!(text.contains("`!image [query]`"));
    assert_eq!(unsupported_command("ping"), "Command is not supported: ping");
}

#[test]
fn plain_text_in_auto_channel_becomes_a_query() {
    assert_eq!(
        route("fluffy cats", COMMAND_PREFIX, true),
        Route::AutoImage("fluffy cats")
    );
}

#[test]
fn plain_text_in_regular_channel_is_ignored() {
    assert_eq!(route("fluffy cats", COMMAND_PREFIX, false), Route::Ignore);
    assert_eq!(route("", COMMAND_PREFIX, true), Route::Ignore);
}

#[test]
fn unknown_prefixed_command_in_auto_channel_is_not_searched() {
    assert_eq!(route("!ping", COMMAND_PREFIX, true), Route::Ignore);
    assert_eq!(route("!Image cats", COMMAND_PREFIX, true), Route::Ignore);
}

#[test]
fn known_commands_route_the_same_in_any_channel() {
    for auto in [true, false] {
        assert_eq!(
            route("!image  red pandas ", COMMAND_PREFIX, auto),
            Route::Command(Command::Image, "red pandas")
        );
        assert_eq!(
            route("!8ball will it rain", COMMAND_PREFIX, auto),
            Route::Command(Command::EightBall, "will it rain")
        );
        assert_eq!(
            route("!images", COMMAND_PREFIX, auto),
            Route::Command(Command::Suggest, "")
        );
    }
}

#[tokio::test]
async fn enable_message_turns_on_auto_images_for_that_channel() {
    let channels = AutoPostChannels::new();
    let c1 = ChannelId::new(1);
    assert!(!channels.is_enabled(c1).await);

    let Route::Command(Command::EnableAutoImages, _) =
        route("!enableautoimages", COMMAND_PREFIX, channels.is_enabled(c1).await)
    else {
        panic!("expected the enable command");
    };
    let reply = apply_toggle(&channels, c1, "C1", true, CommandStyle::Prefix).await;

    assert!(channels.is_enabled(c1).await);
    assert!(reply.contains("`!disableautoimages`"));
    assert_eq!(
        route("hello there", COMMAND_PREFIX, channels.is_enabled(c1).await),
        Route::AutoImage("hello there")
    );
}
