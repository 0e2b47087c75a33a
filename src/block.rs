use crate::{Facts, Segment, Theme};

mod battery;
mod dollar;
mod hostname;
mod lock;
mod return_code;
mod vcs;
mod venv;
mod workdir;

pub use {
    battery::Battery,
    dollar::Dollar,
    hostname::Host,
    lock::ReadOnly,
    return_code::ReturnCode,
    vcs::{Vcs, VcsKind, VcsStatus},
    venv::VirtualEnv,
    workdir::{PathState, truncate},
};

/// Turns one fact into prompt chips. Pure: no probing happens here.
pub trait Block {
    fn segments(&self, theme: &Theme) -> Vec<Segment>;
}

impl<T: Block> Block for Option<T> {
    fn segments(&self, theme: &Theme) -> Vec<Segment> {
        self.as_ref()
            .map(|block| block.segments(theme))
            .unwrap_or_default()
    }
}

/// Information sources, in default left-to-right order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockType {
    VirtualEnv,
    Hostname,
    Cwd,
    ReadOnly,
    Git,
    Hg,
    ReturnCode,
    Battery,
    Dollar,
}

impl BlockType {
    pub const ALL: [Self; 9] = [
        Self::VirtualEnv,
        Self::Hostname,
        Self::Cwd,
        Self::ReadOnly,
        Self::Git,
        Self::Hg,
        Self::ReturnCode,
        Self::Battery,
        Self::Dollar,
    ];

    /// Probe the source and build its chips. Unavailable sources give nothing.
    pub fn create_from_env(self, facts: &dyn Facts, theme: &Theme) -> Vec<Segment> {
        match self {
            Self::VirtualEnv => facts.virtual_env().map(VirtualEnv).segments(theme),
            Self::Hostname => facts.host().segments(theme),
            Self::Cwd => facts.work_dir().segments(theme),
            Self::ReadOnly => ReadOnly(facts.read_only()).segments(theme),
            Self::Git => facts.git().map(Vcs::git).segments(theme),
            Self::Hg => facts.hg().map(Vcs::hg).segments(theme),
            Self::ReturnCode => ReturnCode(facts.return_code()).segments(theme),
            Self::Battery => facts.battery().segments(theme),
            Self::Dollar => Dollar.segments(theme),
        }
    }
}
