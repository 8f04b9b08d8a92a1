mod config;
mod content;
mod error;
mod logging;
mod palette;
mod services;
mod ui;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Settings;
use crate::content::{Language, Route, TranslationTable};
use crate::error::Result;
use crate::palette::{PresetId, RootStyle, ThemeTool};
use crate::services::static_export::{export_site, ExportContext};
use crate::ui::app::App;
use crate::ui::theme::ColorMode;

#[derive(Debug, Parser)]
#[command(name = "baanrainaifun", version, about = "Baan Rai Nai Fun landing page in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// Initial language: en or th
    #[arg(long, global = true, value_parser = parse_language)]
    lang: Option<Language>,
    /// Increase logging verbosity
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Draw a single frame and print it as plain text
    Render {
        /// Path to render, with or without the base path
        #[arg(long, default_value = "/")]
        route: String,
        #[arg(long, default_value_t = 100)]
        width: u16,
        #[arg(long, default_value_t = 36)]
        height: u16,
        /// Show the color palette overlay open
        #[arg(long)]
        palette: bool,
    },
    /// Write the static site (index.html, index.th.html, 404.html)
    Export {
        /// Output directory, defaults to export.out_dir from settings
        #[arg(long)]
        out: Option<PathBuf>,
        /// Color preset applied before export
        #[arg(long, value_parser = parse_preset)]
        preset: Option<PresetId>,
    },
}

fn parse_language(s: &str) -> std::result::Result<Language, String> {
    Language::from_code(s).ok_or_else(|| format!("unsupported language '{}', expected en or th", s))
}

fn parse_preset(s: &str) -> std::result::Result<PresetId, String> {
    PresetId::from_id(s).ok_or_else(|| format!("unknown preset '{}', expected preset1 or preset2", s))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match Settings::log_dir() {
        Some(dir) => match logging::init(&dir, cli.verbose) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Warning: logging disabled: {}", e);
                None
            }
        },
        None => None,
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "exiting with error");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::load();
    if let Some(lang) = cli.lang {
        settings.default_language = lang;
    }
    let table = TranslationTable::load()?;

    match cli.command {
        None => run_interactive(settings, table),
        Some(Command::Render {
            route,
            width,
            height,
            palette,
        }) => {
            let mut app = App::new(settings, table, ColorMode::TrueColor);
            app.navigate(&route);
            if palette {
                app.open_palette();
            }
            print!("{}", ui::draw::render_to_string(&mut app, width, height)?);
            Ok(())
        }
        Some(Command::Export { out, preset }) => {
            let mut tool = ThemeTool::mount(RootStyle::new());
            if let Some(preset) = preset {
                tool.select_preset(preset);
            }
            let out_dir = out.unwrap_or_else(|| PathBuf::from(&settings.export.out_dir));
            let ctx = ExportContext {
                settings: &settings,
                table: &table,
                style: tool.surface(),
                image_base: settings.image_base(),
            };
            for path in export_site(&ctx, &out_dir)? {
                println!("{}", path.display());
            }
            Ok(())
        }
    }
}

fn run_interactive(settings: Settings, table: TranslationTable) -> Result<()> {
    let mut app = App::new(settings, table, ColorMode::detect());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    tracing::info!("interactive session started");

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, crossterm::cursor::Show)?;

    result.map_err(Into::into)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw::draw(f, app))?;

        // Each event is handled to completion before the next one is read
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(app, key.code, key.modifiers) {
                return Ok(());
            }
        }
    }
}

/// Routes one key press. Returns true when the app should quit.
fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    if modifiers.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('c') | KeyCode::Char('C')) {
        return true;
    }

    // The acknowledgement blocks everything until dismissed
    if app.alert.is_some() {
        app.dismiss_alert();
        return false;
    }

    if app.tool.is_open() && ui::palette_dev::handle_input(app, code, modifiers) {
        return false;
    }

    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char('l') | KeyCode::Char('L') => app.toggle_language(),
        KeyCode::Char('c') | KeyCode::Char('C') if app.palette_enabled() => app.tool.toggle_open(),
        KeyCode::Enter if app.route == Route::NotFound => {
            let home = app.settings.site.base_path.clone();
            app.navigate(&home);
        }
        _ => {}
    }
    false
}
