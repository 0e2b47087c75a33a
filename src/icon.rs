use serde::{Deserialize, Serialize};
use std::env;

/// Glyph set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconMode {
    /// Glyphs any font has
    Plain,
    /// Powerline glyphs from patched fonts
    Fancy,
}

impl IconMode {
    /// Detect icon mode from `POWERLINE_FANCY` environment variable
    ///
    /// | Environment              | Resulting IconMode |
    /// |--------------------------|--------------------|
    /// | unset, `` or `0`         | Plain              |
    /// | anything else            | Fancy              |
    pub fn from_env() -> Self {
        match env::var("POWERLINE_FANCY") {
            Ok(x) if !x.is_empty() && x != "0" => Self::Fancy,
            _ => Self::Plain,
        }
    }
}

/// Every glyph the prompt draws by itself
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icons {
    pub branch: String,
    pub detached: String,
    pub ahead: String,
    pub behind: String,
    pub phases: String,
    pub added: String,
    pub modified: String,
    pub renamed: String,
    pub untracked: String,
    pub removed: String,
    pub conflicted: String,
    pub read_only: String,
    pub ellipsis: String,
    pub separator: String,
    pub separator_thin: String,
    /// Overrides the shell's own prompt character
    pub dollar: Option<String>,
}

impl Icons {
    pub fn plain() -> Self {
        Self {
            branch: "\u{2607}".into(),
            detached: "\u{2702}".into(),
            ahead: "\u{21d1}".into(),
            behind: "\u{21d3}".into(),
            phases: "+".into(),
            added: "\u{2714}".into(),
            modified: "\u{270e}".into(),
            renamed: "\u{2608}".into(),
            untracked: "\u{2690}".into(),
            removed: "\u{2716}".into(),
            conflicted: "\u{203c}".into(),
            read_only: "\u{2297}".into(),
            ellipsis: "\u{2026}".into(),
            separator: String::new(),
            separator_thin: "/".into(),
            dollar: None,
        }
    }

    pub fn fancy() -> Self {
        Self {
            branch: "\u{e0a0}".into(),
            read_only: "\u{e0a2}".into(),
            separator: "\u{e0b0}".into(),
            separator_thin: "\u{e0b1}".into(),
            ..Self::plain()
        }
    }
}

/// Both glyph sets, so that the config file may tune either one
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconTables {
    pub plain: Icons,
    pub fancy: Icons,
}

impl Default for IconTables {
    fn default() -> Self {
        Self {
            plain: Icons::plain(),
            fancy: Icons::fancy(),
        }
    }
}

impl IconTables {
    pub fn get(&self, mode: IconMode) -> &Icons {
        match mode {
            IconMode::Plain => &self.plain,
            IconMode::Fancy => &self.fancy,
        }
    }
}
