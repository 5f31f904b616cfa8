mod app;
mod command;
mod config;
mod consts;
mod game;
mod scores;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use crate::scores::{FileScores, ScoreBoard};
use anyhow::Context;
use lexopt::prelude::*;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e}");
            return ExitCode::from(2);
        }
    };
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("gridsnake: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let (config_path, allow_missing) = match args.config {
        Some(path) => (path, false),
        None => (Config::default_path()?, true),
    };
    let config = Config::load(&config_path, allow_missing)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    let scores = load_scores(&config);
    let game = Game::new(config.tempo, scores);
    let terminal = ratatui::init();
    let r = App::new(game).run(terminal);
    ratatui::restore();
    Ok(io_exit(r))
}

/// Open the score board named by the configuration.  When the stored scores
/// cannot be read, warn & carry on with a blank board rather than refuse to
/// start.
fn load_scores(config: &Config) -> Box<dyn ScoreBoard> {
    if !config.files.save_scores {
        return Box::new(FileScores::unsaved());
    }
    let Some(path) = config.scores_file() else {
        return Box::new(FileScores::unsaved());
    };
    match FileScores::load(path.clone()) {
        Ok(scores) => Box::new(scores),
        Err(e) => {
            eprintln!("gridsnake: {e}; starting with a blank score board");
            Box::new(FileScores::blank(path))
        }
    }
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
struct Args {
    config: Option<PathBuf>,
}

impl Args {
    /// Parse the command line.  Returns `Ok(None)` if the program should exit
    /// without playing (`--help` or `--version`).
    fn parse() -> Result<Option<Args>, lexopt::Error> {
        let mut args = Args::default();
        let mut parser = lexopt::Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Short('h') | Long("help") => {
                    println!("Usage: gridsnake [-c|--config <file>]");
                    println!();
                    println!("Play snake in your terminal");
                    println!();
                    println!("Options:");
                    println!("  -c, --config <file>  Read configuration from <file>");
                    println!("  -h, --help           Show this help and exit");
                    println!("  -V, --version        Show the program version and exit");
                    return Ok(None);
                }
                Short('V') | Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(args))
    }
}
