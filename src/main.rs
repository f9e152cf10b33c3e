mod app;
mod command;
mod config;
mod consts;
mod game;
mod logo;
mod profile;
mod sound;
mod startup;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::util::Globals;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Arguments::from_env() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("snakelet: {e}");
            return ExitCode::from(2);
        }
    };
    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("snakelet: {e}");
            return ExitCode::from(2);
        }
    };
    let profile = config.load_profile();
    let globals = Globals {
        config,
        profile,
        save_warning: None,
    };
    let terminal = ratatui::init();
    let r = App::new(globals).run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
}

impl Arguments {
    /// Parse command-line arguments.  Returns `Ok(None)` if the program
    /// should exit without running the game (`--help`/`--version`).
    fn from_env() -> Result<Option<Arguments>, lexopt::Error> {
        let mut args = Arguments::default();
        let mut parser = Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => {
                    println!("Usage: snakelet [-c|--config <file>]");
                    println!();
                    println!("Options:");
                    println!("  -c, --config <file>  Read configuration from <file>");
                    println!("  -h, --help           Show this message and exit");
                    println!("  -V, --version        Show the program version and exit");
                    return Ok(None);
                }
                Arg::Short('V') | Arg::Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(args))
    }

    /// Load the configuration file named on the command line or, failing
    /// that, the one at the default path.  Only an explicitly named file is
    /// required to exist.
    fn load_config(&self) -> Result<Config, config::ConfigError> {
        match self.config {
            Some(ref path) => Config::load(path, false),
            None => Config::load(&Config::default_path()?, true),
        }
    }
}
