//! A tabbed TUI for picking an academic group from a cached catalog.
//!
//! Run the binary inside the `gpick` wrapper to launch the picker; picking
//! a group hands `/view?group=<name>` to the external schedule viewer.
//! Run with `--init-bash` to print the shell function for your `.bashrc`.

mod app;
mod catalog;
mod config;
mod shell;
mod ui;

use std::io::{self, stderr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    widgets::Paragraph,
    Terminal,
};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    idle::InactivityGuard,
    state::AppState,
};
use crate::catalog::store::{sync_age_label, FileCatalogStore};
use crate::shell::integration;
use crate::ui::{
    layout::AppLayout, panel::GroupGrid, spinner::LoadingIndicator, tabs::YearTabs, theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Tabbed academic-group picker")]
struct Cli {
    /// Catalog snapshot to read (defaults to the sync tool's cache path).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Idle seconds before redirecting home (0 disables; overrides config).
    #[arg(long)]
    idle_timeout: Option<u64>,

    /// Disable entrance animations.
    #[arg(long)]
    no_anim: bool,

    /// Print the bash shell function and exit.
    #[arg(long = "init-bash")]
    init_bash: bool,

    /// Print the zsh shell function and exit.
    #[arg(long = "init-zsh")]
    init_zsh: bool,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // stdout is reserved for the exit payload
        .init();

    let cli = Cli::parse();

    // ── shell-integration mode ────────────────────────────────
    if cli.init_bash {
        print!("{}", integration::bash_function());
        return Ok(());
    }
    if cli.init_zsh {
        print!("{}", integration::zsh_function());
        return Ok(());
    }

    // ── configuration and collaborators ───────────────────────
    let mut user_config = config::AppConfig::load();
    if let Some(secs) = cli.idle_timeout {
        user_config.idle_timeout_secs = secs;
    }
    if cli.no_anim {
        user_config.animations = false;
    }

    let store = FileCatalogStore::new(cli.catalog.unwrap_or_else(FileCatalogStore::default_path));
    let idle_secs = user_config.idle_timeout_secs;

    let mut state = AppState::new(user_config);
    state.sync_label = sync_age_label(store.synced_at());
    let mut guard = InactivityGuard::arm(Duration::from_secs(idle_secs));
    let mut idle_redirect = false;

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(Duration::from_millis(50));

    // ── event loop ────────────────────────────────────────────
    loop {
        // ── draw first ─────────────────────────────────────────
        // The first frame paints the loading indicator; the catalog read
        // is deferred below so it never blocks first paint.
        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area());

            if state.selection.loaded {
                frame.render_widget(
                    YearTabs {
                        active: state.selection.active_tab,
                        faint: state.reveal.panel_faint(),
                    },
                    layout.tabs_area,
                );
                frame.render_widget(
                    GroupGrid {
                        items: state.selection.visible_items(),
                        focused: state.focused,
                        reveal: &state.reveal,
                    },
                    layout.panel_area,
                );
            } else {
                frame.render_widget(
                    LoadingIndicator {
                        tick: state.spinner_tick,
                    },
                    layout.panel_area,
                );
            }

            let hint = state.config.status_bar_hint();
            let status = format!(" {} | {}", state.sync_label, hint);
            frame.render_widget(
                Paragraph::new(status).style(Theme::status_bar_style()),
                layout.status_area,
            );
        })?;

        // ── initial load AFTER first draw ─────────────────────
        // The snapshot is local and synchronous; loading it here keeps the
        // mount-to-ready transition a single, guarded step.
        if !state.selection.loaded {
            state.selection.initialize(&store);
            state.reveal.restart();
            state.clamp_focus();
            tracing::debug!(
                "catalog loaded from {:?}: {} groups visible on tab 0",
                store.path(),
                state.selection.visible_items().len()
            );
        }

        match events.recv().await {
            Some(AppEvent::Key(key)) => {
                guard.note_activity();
                handler::handle_key(&mut state, key);
            }
            Some(AppEvent::Mouse(mouse)) => {
                guard.note_activity();
                handler::handle_mouse(&mut state, mouse);
            }
            Some(AppEvent::Resize) => {}
            Some(AppEvent::Tick) => {
                state.spinner_tick = state.spinner_tick.wrapping_add(1);
                if state
                    .reveal
                    .is_animating(state.selection.visible_items().len())
                {
                    state.reveal.tick();
                }
                if guard.redirect_due() {
                    tracing::debug!("idle threshold reached, redirecting home");
                    idle_redirect = true;
                    state.should_quit = true;
                }
            }
            None => break,
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    integration::print_exit_payload(state.navigator.pending(), idle_redirect);

    Ok(())
}
