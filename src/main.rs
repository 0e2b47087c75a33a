use argh::FromArgs;
use powerline::{Config, Environment, IconMode, Prompt, Result, Shell, Theme};
use std::{env, process::ExitCode};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// powerline-style prompt for bash and zsh
struct Arguments {
    #[argh(positional, greedy)]
    /// shell (`bash` or `zsh`), exit status of the last command, then `install` to print the
    /// shell hook; `version` alone prints the version
    args: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Version,
    Install(Shell),
    Render { shell: Shell, return_code: i32 },
}

impl Arguments {
    /// `powerline [shell] [return code] [install]`. The return code falls back to 0 and may be
    /// replaced by `install` altogether.
    fn command(&self) -> Result<Command> {
        let arg = |i: usize| self.args.get(i).map(String::as_str);

        let shell = match arg(0) {
            Some("version" | "build") => return Ok(Command::Version),
            Some(name) => name.parse()?,
            None => Shell::Bash,
        };
        if arg(1) == Some("install") || arg(2) == Some("install") {
            return Ok(Command::Install(shell));
        }
        let return_code = arg(1).and_then(|code| code.parse().ok()).unwrap_or(0);
        Ok(Command::Render { shell, return_code })
    }
}

/// `POWERLINE_LOG` takes `tracing` directives; silent unless set
fn init_logging() {
    let filter = EnvFilter::try_from_env("POWERLINE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let args: Arguments = argh::from_env();

    let (shell, return_code) = match args.command() {
        Ok(Command::Version) => {
            println!("powerline {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Ok(Command::Install(shell)) => {
            let exec = env::current_exe()
                .map(|path| path.to_string_lossy().into_owned())
                .unwrap_or_else(|_| "powerline".to_owned());
            println!("{}", shell.hook(&exec));
            return ExitCode::SUCCESS;
        }
        Ok(Command::Render { shell, return_code }) => (shell, return_code),
        Err(err) => {
            println!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            println!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let mode = IconMode::from_env();
    debug!(?shell, ?mode, "rendering");

    let theme = Theme::new(&config, shell, mode);
    let env = Environment::from_env(return_code);
    print!("{}", Prompt::new(&config, &theme).render(&env));
    ExitCode::SUCCESS
}
