use anyhow::{Context, Result};
use bone_run::app::App;
use bone_run::build_info;
use bone_run::config::AppConfig;
use bone_run::constants::INPUT_POLL_MS;
use bone_run::input::map_event;
use bone_run::ui::{self, theme::Theme};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Jump over the bones. Press Space, or just sit there and be bored.
#[derive(Debug, Parser)]
#[command(name = "bone-run", disable_version_flag = true)]
struct Args {
    /// Seed for bone generation (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme: light or dark
    #[arg(long)]
    theme: Option<Theme>,

    /// Config file (defaults to config.json in the platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Simulation ticks per second
    #[arg(long)]
    fps: Option<u32>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Print version information and exit
    #[arg(short = 'V', long)]
    version: bool,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            let mut builder =
                env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            builder
        }
        // The terminal is in raw mode; keep stderr quiet unless asked
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")),
    };
    builder.try_init().context("initializing logger")?;
    Ok(())
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    stdout
        .execute(EnterAlternateScreen)
        .context("entering alternate screen")?;
    stdout
        .execute(EnableMouseCapture)
        .context("enabling mouse capture")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("creating terminal")
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(DisableMouseCapture)?;
    stdout.execute(LeaveAlternateScreen)?;
    Ok(())
}

fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    app.start(Instant::now());
    let poll_cap = Duration::from_millis(INPUT_POLL_MS);

    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = app.driver.time_until_next(Instant::now()).min(poll_cap);
        if event::poll(timeout)? {
            let ev = event::read()?;
            if let Some(input) = map_event(&ev, app.is_editing()) {
                if let Some(command) = app.handle_input(input) {
                    log::debug!("command {:?}", command);
                }
            }
        }

        // Timer completion is logged by the timer itself
        app.on_frame(Instant::now());
    }

    log::info!(
        "exiting: phase={} score={}",
        app.game.phase().name(),
        app.game.score()
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("bone-run {}", build_info::version_line());
        return Ok(());
    }

    init_logging(args.log_file.as_ref())?;

    let mut config =
        AppConfig::load_or_default(args.config.as_deref()).context("loading configuration")?;
    if let Some(fps) = args.fps {
        config.fps = fps;
    }
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    config.validate().context("invalid configuration")?;

    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    log::info!(
        "starting bone-run {} (fps={}, theme={}, seed={:?})",
        build_info::version_line(),
        config.fps,
        config.theme.as_str(),
        args.seed
    );

    let mut app = App::from_config(&config, args.seed);

    // Put the terminal back before the panic message is printed
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app);
    app.shutdown();
    restore_terminal().context("restoring terminal")?;
    terminal.show_cursor()?;
    result
}
