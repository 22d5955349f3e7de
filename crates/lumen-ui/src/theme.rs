//! Theme system for Lumen applications.
//!
//! Provides 2 themes: Midnight and Daylight.

use std::str::FromStr;

use dioxus::prelude::*;
use thiserror::Error;

/// Global signal for the current theme. Set once at startup from the CLI;
/// themed components read it reactively.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(|| Theme::default());

/// Available themes for the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Midnight,
    Daylight,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Midnight => "midnight",
            Theme::Daylight => "daylight",
        }
    }

    /// Returns the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Midnight => "Midnight",
            Theme::Daylight => "Daylight",
        }
    }

    /// Returns all available themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Midnight, Theme::Daylight]
    }

    /// Colors handed to screens that style elements inline.
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Midnight => Palette {
                card_background: "#1c2333",
                primary_text: "#f5f7ff",
            },
            Theme::Daylight => Palette {
                card_background: "#ffffff",
                primary_text: "#1a1d29",
            },
        }
    }
}

/// Error returned when a theme name does not match any known theme.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme `{0}` (expected one of: midnight, daylight)")]
pub struct ThemeParseError(String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "midnight" => Ok(Theme::Midnight),
            "daylight" => Ok(Theme::Daylight),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Colors a theme exposes to screens.
///
/// Most styling lives in CSS keyed off the `data-theme` attribute; the
/// palette carries the handful of colors screens apply inline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Fill for raised cards.
    pub card_background: &'static str,
    /// Foreground for text and glyphs sitting on a card.
    pub primary_text: &'static str,
}

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}
