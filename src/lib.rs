//! Powerline-style prompt for bash and zsh
//!
//! This is a documentation for the library API; the `powerline` binary is what shells call.
//!
//! # Example
//!
//! ```no_run
//! use powerline::{Config, Environment, IconMode, Prompt, Shell, Theme};
//!
//! let config = Config::default();
//! let theme = Theme::new(&config, Shell::Bash, IconMode::Plain);
//! let env = Environment::from_env(0);
//! print!("{}", Prompt::new(&config, &theme).render(&env));
//! ```

mod error;
mod icon;
mod prompt;
mod render;
mod segment;
mod style;

/// Prompt building blocks
pub mod block;
/// User configuration
pub mod config;
/// Filesystem and system database probes
pub mod file;
/// Git working copy status
pub mod git;
/// Mercurial working copy status
pub mod hg;
/// Colours, weights and icons resolved for one render
pub mod theme;
/// Virtualenv naming
pub mod venv;

pub use crate::{
    block::{Battery, Block, BlockType, Host, PathState, VcsStatus},
    config::Config,
    error::{Error, Result},
    icon::{IconMode, IconTables, Icons},
    prompt::Prompt,
    render::{Line, escape, render},
    segment::{Part, Segment},
    style::{Colour, Layer, Shell},
    theme::{ColourPair, Theme},
};

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Everything a prompt can show, however it was found out
pub trait Facts {
    /// Current directory relative to home, `None` when it is unknown
    fn work_dir(&self) -> Option<PathState>;
    fn read_only(&self) -> bool;
    fn virtual_env(&self) -> Option<String>;
    /// Whether the shell was reached over SSH
    fn is_remote(&self) -> bool;
    fn host(&self) -> Option<Host>;
    fn git(&self) -> Option<VcsStatus>;
    fn hg(&self) -> Option<VcsStatus>;
    fn battery(&self) -> Option<Battery>;
    fn return_code(&self) -> i32;
    /// `TERM`, used to decide whether the title can be set
    fn term(&self) -> Option<&str>;
}

/// Facts of the running process, probed lazily from the environment and the system
#[derive(Debug)]
pub struct Environment {
    /// Exit status of the last command
    pub ret_code: i32,
    pub work_dir: Option<PathBuf>,
    pub home: Option<PathBuf>,
    pub virtual_env: Option<PathBuf>,
    pub ssh_client: bool,
    pub term: Option<String>,
    pub user: Option<String>,
}

impl Environment {
    /// Reads environment variables. Nothing slow happens until a fact is asked for.
    pub fn from_env(ret_code: i32) -> Self {
        Self::from_vars(ret_code, env::current_dir().ok(), |name| env::var_os(name))
    }

    /// Same as [`Environment::from_env`] with a custom variable lookup
    pub fn from_vars(
        ret_code: i32,
        work_dir: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<OsString>,
    ) -> Self {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let text = |name: &str| var(name).and_then(|value| value.into_string().ok());
        Self {
            ret_code,
            work_dir: work_dir.or_else(|| var("PWD").map(PathBuf::from)),
            home: var("HOME").map(PathBuf::from),
            virtual_env: var("VIRTUAL_ENV").map(PathBuf::from),
            // presence is enough, sshd may leave it empty
            ssh_client: lookup("SSH_CLIENT").is_some(),
            term: text("TERM"),
            user: text("USER"),
        }
    }
}

impl Facts for Environment {
    fn work_dir(&self) -> Option<PathState> {
        let work_dir = self.work_dir.as_deref()?;
        Some(PathState::new(work_dir, self.home.as_deref()))
    }

    fn read_only(&self) -> bool {
        self.work_dir.as_deref().is_some_and(file::is_read_only)
    }

    fn virtual_env(&self) -> Option<String> {
        venv::name(self.virtual_env.as_deref()?)
    }

    fn is_remote(&self) -> bool {
        self.ssh_client
    }

    fn host(&self) -> Option<Host> {
        Some(Host {
            hostname: file::hostname()?,
            username: self.user.clone().or_else(file::current_user),
        })
    }

    fn git(&self) -> Option<VcsStatus> {
        git::status(self.work_dir.as_deref()?)
    }

    fn hg(&self) -> Option<VcsStatus> {
        hg::status(self.work_dir.as_deref()?)
    }

    fn battery(&self) -> Option<Battery> {
        match file::battery_capacity(Path::new(file::BATTERY_CAPACITY)) {
            Ok(capacity) => Some(Battery { capacity }),
            Err(err) => {
                tracing::debug!("no battery: {err:#}");
                None
            }
        }
    }

    fn return_code(&self) -> i32 {
        self.ret_code
    }

    fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }
}
