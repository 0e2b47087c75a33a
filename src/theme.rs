//! Resolved look of the prompt: glyphs, colours and limits

use crate::{Colour, Config, IconMode, Icons, Shell};
use serde::{Deserialize, Serialize};

/// Text and fill colour of one chip
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColourPair {
    pub background: Colour,
    pub text: Colour,
}

impl ColourPair {
    pub const fn new(background: u8, text: u8) -> Self {
        Self {
            background: Colour(background),
            text: Colour(text),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VcsColours {
    pub background_default: Colour,
    pub background_changes: Colour,
    pub text: Colour,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CwdColours {
    pub background: Colour,
    pub text: Colour,
    pub home_background: Colour,
    pub home_text: Colour,
}

impl CwdColours {
    pub fn normal(&self) -> ColourPair {
        ColourPair {
            background: self.background,
            text: self.text,
        }
    }

    pub fn home(&self) -> ColourPair {
        ColourPair {
            background: self.home_background,
            text: self.home_text,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colours {
    pub hg: VcsColours,
    pub git: VcsColours,
    pub cwd: CwdColours,
    pub virtualenv: ColourPair,
    pub returncode: ColourPair,
    pub lock: ColourPair,
    pub dollar: ColourPair,
    pub battery: ColourPair,
    pub hostname: ColourPair,
}

impl Default for Colours {
    fn default() -> Self {
        Self {
            hg: VcsColours {
                background_default: Colour(22),
                background_changes: Colour(64),
                text: Colour(251),
            },
            git: VcsColours {
                background_default: Colour(17),
                background_changes: Colour(21),
                text: Colour(251),
            },
            cwd: CwdColours {
                background: Colour(40),
                text: Colour(237),
                home_background: Colour(31),
                home_text: Colour(15),
            },
            virtualenv: ColourPair::new(35, 0),
            returncode: ColourPair::new(196, 16),
            lock: ColourPair::new(124, 254),
            dollar: ColourPair::new(240, 15),
            battery: ColourPair::new(196, 16),
            hostname: ColourPair::new(12, 16),
        }
    }
}

/// Segment weights used when the prompt is sorted by weight
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    pub virtualenv: i32,
    pub hostname: i32,
    pub cwd: i32,
    pub lock: i32,
    pub git: i32,
    pub hg: i32,
    pub returncode: i32,
    pub battery: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            virtualenv: 80,
            hostname: 70,
            cwd: 60,
            lock: 50,
            git: 40,
            hg: 30,
            returncode: 20,
            battery: 10,
        }
    }
}

/// How the hostname chip picks its background
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostnameColour {
    #[default]
    Fixed,
    Hash,
}

/// Immutable style shared by every block and the renderer
#[derive(Clone, Debug)]
pub struct Theme {
    pub shell: Shell,
    pub icons: Icons,
    pub colours: Colours,
    pub weights: Weights,
    pub cwd_max_length: usize,
    pub hostname_max_length: usize,
    pub hostname_colour: HostnameColour,
    pub show_username: bool,
    pub battery_warn: u8,
}

impl Theme {
    pub fn new(config: &Config, shell: Shell, mode: IconMode) -> Self {
        Self {
            shell,
            icons: config.icons.get(mode).clone(),
            colours: config.colours,
            weights: config.weights,
            cwd_max_length: config.cwd_max_length,
            hostname_max_length: config.hostname_max_length,
            hostname_colour: config.hostname_colour,
            show_username: config.show_username,
            battery_warn: config.battery_warn,
        }
    }

    pub fn dollar(&self) -> &str {
        self.icons.dollar.as_deref().unwrap_or(self.shell.dollar())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_picks_icon_set() {
        let config = Config::default();
        let plain = Theme::new(&config, Shell::Bash, IconMode::Plain);
        let fancy = Theme::new(&config, Shell::Bash, IconMode::Fancy);
        assert_eq!(plain.icons.separator_thin, "/");
        assert_eq!(fancy.icons.separator, "\u{e0b0}");
        assert_eq!(fancy.icons.ellipsis, plain.icons.ellipsis);
    }

    #[test]
    fn dollar_follows_shell_unless_overridden() {
        let mut config = Config::default();
        assert_eq!(Theme::new(&config, Shell::Bash, IconMode::Plain).dollar(), "\\$");
        assert_eq!(Theme::new(&config, Shell::Zsh, IconMode::Plain).dollar(), "%#");
        config.icons.plain.dollar = Some(">".into());
        assert_eq!(Theme::new(&config, Shell::Zsh, IconMode::Plain).dollar(), ">");
    }
}
