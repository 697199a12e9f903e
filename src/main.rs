use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use hakos::app::{App, SessionOverrides};
use hakos::i18n::Language;
use hakos::prefs::Prefs;
use hakos::services::clock::SystemClock;
use hakos::services::{paths, tracing_setup};
use std::io::Write;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(name = "hakos", version, about = "Interactive portfolio shell")]
struct Args {
    /// UI language (fr or en), overriding the saved preference
    #[arg(long)]
    lang: Option<Language>,

    /// Replay the boot sequence even if it has already played
    #[arg(long, conflicts_with = "no_boot")]
    boot: bool,

    /// Skip the boot sequence
    #[arg(long)]
    no_boot: bool,

    /// Monochrome CRT palette
    #[arg(long)]
    crt: bool,

    /// Disable the terminal bell on unlocks
    #[arg(long)]
    mute: bool,

    /// Write the log somewhere other than the state directory
    #[arg(long, value_name = "PATH")]
    log_file: Option<std::path::PathBuf>,

    /// Print the state and log file locations and exit
    #[arg(long)]
    show_paths: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.show_paths {
        println!("state: {}", paths::state_dir().display());
        println!("prefs: {}", paths::prefs_path().display());
        println!("achievements: {}", paths::achievements_path().display());
        println!("log: {}", paths::log_path().display());
        return Ok(());
    }

    let log_path = args.log_file.clone().unwrap_or_else(paths::log_path);
    if let Err(e) = tracing_setup::init_global(&log_path) {
        eprintln!("warning: logging disabled: {e}");
    }

    let prefs_path = paths::prefs_path();
    let prefs = Prefs::load(&prefs_path);
    let overrides = SessionOverrides {
        language: args.lang,
        crt_mode: args.crt,
        mute: args.mute,
    };
    let show_boot = if args.no_boot {
        false
    } else {
        args.boot || !prefs.boot_played
    };

    let lang = args.lang.unwrap_or(prefs.language);
    tracing::info!(lang = lang.code(), show_boot, "Starting shell");

    let mut app = App::new(
        SystemClock::shared(),
        prefs,
        overrides,
        Some(prefs_path),
        Some(paths::achievements_path()),
        show_boot,
    );

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn run(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| hakos::view::draw(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(..) => {}
                _ => {}
            }
        }

        app.tick();

        if app.take_bell() {
            let mut stdout = std::io::stdout();
            let _ = stdout.write_all(b"\x07");
            let _ = stdout.flush();
        }
    }
    Ok(())
}
