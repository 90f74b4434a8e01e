#![forbid(unsafe_code)]

//! Showcase binary entry point.

mod app;
mod chrome;
mod cli;
mod screens;
mod settings;
mod term;
mod theme;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::settings::SettingsStore;
use crate::term::TerminalSession;
use vitrine_core::event::Event;
use vitrine_render::Buffer;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() {
    init_tracing();
    let opts = cli::Opts::parse();

    if let Err(e) = run(&opts) {
        eprintln!("vitrine-showcase: {e}");
        std::process::exit(1);
    }
}

fn run(opts: &cli::Opts) -> io::Result<()> {
    let path = SettingsStore::default_path()
        .unwrap_or_else(|| PathBuf::from(".").join("vitrine-showcase.json"));
    let store = SettingsStore::load(path);
    let mut app = App::new(store, opts.start_screen);

    let session = TerminalSession::new(opts.mouse)?;
    let (mut width, mut height) = session.size()?;
    let mut buf = Buffer::new(width, height);
    let mut stdout = io::BufWriter::new(io::stdout());
    let mut dirty = true;

    while !app.should_quit() {
        if dirty {
            buf.resize(width, height);
            buf.clear();
            app.render(&mut buf);
            term::present(&mut stdout, &buf)?;
            stdout.flush()?;
            dirty = false;
        }

        if let Some(event) = session.next_event(POLL_INTERVAL)? {
            if let Event::Resize {
                width: w,
                height: h,
            } = event
            {
                width = w;
                height = h;
            }
            app.on_event(event);
            dirty = true;
        }
    }
    Ok(())
}

fn init_tracing() {
    // Diagnostics go to stderr; the alternate screen owns stdout.
    let filter = EnvFilter::try_from_env("VITRINE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
