/*!
## Terminal host

Reads the program file, drives the runtime and performs the I/O
it asks for through `Event`s.
*/

use crate::mach::{Event, Runtime};
use crate::{error, lang::Error};
use ansi_term::Colour;
use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod input;
use input::{Input, Reply};

/// Exit status for every failure, including usage errors.
pub const EXIT_FAILURE: i32 = 255;

#[derive(Parser, Debug)]
#[command(name = "qu", version, about = "Run a qu program")]
pub struct Cli {
    /// Program to run; the file name must end in `.qu`
    pub file: PathBuf,

    /// Seed POKE with this value instead of the clock
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the numbered listing before running
    #[arg(long)]
    pub list: bool,

    /// Instructions executed between checks for CTRL-C
    #[arg(long, default_value_t = 5000)]
    pub cycles: usize,
}

pub fn main() {
    init_logging();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(EXIT_FAILURE);
            }
        },
    };
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "CTRL-C will not stop the program");
    }
    let code = match main_loop(&cli, interrupted) {
        Ok(code) => code,
        Err(error) => {
            report(&error);
            EXIT_FAILURE
        }
    };
    std::process::exit(code);
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("QU_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main_loop(cli: &Cli, interrupted: Arc<AtomicBool>) -> Result<i32, Error> {
    let source = load(&cli.file)?;
    let mut runtime = Runtime::default();
    if let Some(seed) = cli.seed {
        runtime.seed(seed);
    }
    runtime.load(source)?;
    let stdout = std::io::stdout();
    if cli.list {
        write!(stdout.lock(), "{}", runtime.program()).map_err(io_error)?;
    }
    let mut input = Input::new();
    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        }
        match runtime.execute(cli.cycles) {
            Event::Running => {}
            Event::Print(s) => {
                let mut out = stdout.lock();
                out.write_all(s.as_bytes()).map_err(io_error)?;
                out.flush().map_err(io_error)?;
            }
            Event::Input(prompt) => match input.read_line(&prompt).map_err(io_error)? {
                Reply::Line(string) => runtime.enter_input(&string),
                Reply::Eof => runtime.close_input(),
                Reply::Interrupt => runtime.interrupt(),
            },
            Event::Exit(n) => {
                debug!(exit = n, "exiting");
                return Ok(n as i32);
            }
            Event::Error(error) => return Err(error),
            Event::Stopped => return Ok(0),
        }
    }
}

/// Read a `.qu` program into lines.
pub fn load(filename: &Path) -> Result<Vec<String>, Error> {
    let name = filename.display().to_string();
    if filename.extension().and_then(|ext| ext.to_str()) != Some("qu") {
        return Err(error!(InvalidFileExtension; name));
    }
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            return Err(match error.kind() {
                ErrorKind::NotFound => error!(FileNotFound; name),
                _ => error!(InternalError; error.to_string()),
            })
        }
    };
    let mut lines = vec![];
    for line in reader.lines() {
        match line {
            Ok(line) => lines.push(line),
            Err(error) => return Err(error!(InternalError; error.to_string())),
        }
    }
    debug!(file = %name, lines = lines.len(), "read program");
    Ok(lines)
}

fn report(error: &Error) {
    eprintln!("{}", Colour::Red.bold().paint(format!("Error: {}", error)));
}

fn io_error(error: std::io::Error) -> Error {
    error!(InternalError; error.to_string())
}
