use crate::Error;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::str::FromStr;

const BEL: &str = "\x07";
const ESC: &str = "\x1b";

/// Index into the 256-colour terminal palette
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Colour(pub u8);

impl Colour {
    /// Stable colour for arbitrary text: sum of its bytes modulo the palette size
    pub fn of(what: &str) -> Self {
        Self(what.bytes().fold(0, u8::wrapping_add))
    }
}

/// Accepts both `31` and `"31"`; older config files store colours as strings.
impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Index(u8),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Index(index) => Ok(Self(index)),
            Raw::Text(text) => text.trim().parse().map(Self).map_err(|_| {
                de::Error::custom(format!("`{text}` is not a palette index (0-255)"))
            }),
        }
    }
}

/// Which half of a cell a colour escape paints
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Foreground,
    Background,
}

impl Layer {
    fn code(self) -> u8 {
        match self {
            Self::Foreground => 38,
            Self::Background => 48,
        }
    }
}

/// Target shell. Decides how escapes are wrapped so that line editing counts widths right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
}

impl FromStr for Shell {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "bash" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            other => Err(Error::UnsupportedShell(other.to_owned())),
        }
    }
}

impl Shell {
    pub fn colour(self, layer: Layer, colour: Colour) -> String {
        let (code, index) = (layer.code(), colour.0);
        match self {
            Self::Bash => format!("\\[\\e[{code:03};5;{index:03}m\\]"),
            Self::Zsh => format!("%{{{ESC}[{code};5;{index}m%}}"),
        }
    }

    pub fn foreground(self, colour: Colour) -> String {
        self.colour(Layer::Foreground, colour)
    }

    pub fn background(self, colour: Colour) -> String {
        self.colour(Layer::Background, colour)
    }

    pub fn reset(self) -> &'static str {
        match self {
            Self::Bash => "\\[\\e[0m\\]",
            Self::Zsh => "%{%k%f%}",
        }
    }

    /// Prompt character, `#` for root and `$` otherwise, expanded by the shell itself
    pub fn dollar(self) -> &'static str {
        match self {
            Self::Bash => "\\$",
            Self::Zsh => "%#",
        }
    }

    /// Sets terminal title to `user@host: cwd`
    pub fn title(self) -> String {
        match self {
            Self::Bash => "\\[\\e]0;\\u@\\h: \\w\\a\\]".to_owned(),
            Self::Zsh => format!("%{{{ESC}]0;%n@%m: %~{BEL}%}}"),
        }
    }

    /// Snippet which hooks `exec` into prompt updates
    pub fn hook(self, exec: &str) -> String {
        match self {
            Self::Bash => include_str!("shell/bash.sh"),
            Self::Zsh => include_str!("shell/zsh.sh"),
        }
        .replace("<exec>", exec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_colours_are_wrapped_and_padded() {
        assert_eq!(
            Shell::Bash.foreground(Colour(15)),
            "\\[\\e[038;5;015m\\]"
        );
        assert_eq!(
            Shell::Bash.background(Colour(237)),
            "\\[\\e[048;5;237m\\]"
        );
    }

    #[test]
    fn zsh_colours_use_literal_escape() {
        assert_eq!(Shell::Zsh.foreground(Colour(15)), "%{\x1b[38;5;15m%}");
        assert_eq!(Shell::Zsh.background(Colour(7)), "%{\x1b[48;5;7m%}");
        assert_eq!(Shell::Zsh.title(), "%{\x1b]0;%n@%m: %~\x07%}");
    }

    #[test]
    fn unknown_shell_is_rejected() {
        assert_eq!("bash".parse::<Shell>().unwrap(), Shell::Bash);
        assert_eq!("zsh".parse::<Shell>().unwrap(), Shell::Zsh);
        let err = "fish".parse::<Shell>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedShell(ref name) if name == "fish"));
    }

    #[test]
    fn colour_accepts_numbers_and_numeric_strings() {
        assert_eq!(serde_json::from_str::<Colour>("31").unwrap(), Colour(31));
        assert_eq!(serde_json::from_str::<Colour>("\"240\"").unwrap(), Colour(240));
        assert!(serde_json::from_str::<Colour>("\"blue\"").is_err());
        assert!(serde_json::from_str::<Colour>("256").is_err());
    }

    #[test]
    fn colour_of_text_is_byte_sum() {
        assert_eq!(Colour::of("ab"), Colour(b'a' + b'b'));
        assert_eq!(Colour::of("box"), Colour::of("box"));
        assert_eq!(Colour::of(""), Colour(0));
    }

    #[test]
    fn hook_mentions_executable() {
        let hook = Shell::Bash.hook("/usr/bin/powerline");
        assert!(hook.contains("\"/usr/bin/powerline\" bash"));
        assert!(hook.contains("PROMPT_COMMAND"));
        assert!(Shell::Zsh.hook("pl").contains("precmd"));
    }
}
