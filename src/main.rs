use anyhow::Result;
use clap::Parser;
use rview::config::HELP_MESSAGE;
use rview::frame::{CLEAR_SCREEN, CURSOR_HOME};
use rview::terminal::{self, RawTerminal};
use rview::{logging, Editor};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "rview", version, about = "Terminal file viewer")]
struct Args {
    /// File to view. Without it the viewer starts on an empty buffer.
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(err) = logging::init() {
        eprintln!("rview: logging disabled: {err:#}");
    }
    terminal::install_panic_hook();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            let mut stdout = io::stdout();
            let _ = stdout.write_all(&[CLEAR_SCREEN, CURSOR_HOME].concat());
            let _ = stdout.flush();
            eprintln!("rview: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// The raw terminal is dropped, restoring the original mode, before this
/// returns on any path.
fn run(args: &Args) -> Result<()> {
    let mut editor = Editor::new(RawTerminal::new()?)?;

    if let Some(path) = &args.file {
        editor.open(path)?;
    }

    editor.set_status_message(HELP_MESSAGE);
    editor.run()
}
