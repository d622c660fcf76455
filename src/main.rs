//! Terminal entry point: CLI parsing, terminal lifecycle, and the event loop.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use medidex::app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
use medidex::domain::{ProviderId, Result};
use medidex::observability::init_tracing;
use medidex::Config;

/// How long the loop waits for input before re-checking timers.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(name = "medidex", about = "Clinic doctor directory", version)]
struct Cli {
    /// Record to open on startup, as a `doc-<id>` fragment.
    #[arg(value_name = "FRAGMENT")]
    open: Option<String>,

    /// Path to a config file (default: XDG config dir).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to a providers JSON file (overrides the config).
    #[arg(long, value_name = "PATH")]
    dataset: Option<PathBuf>,

    /// Built-in theme name (overrides the config).
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Log filter directive, e.g. `debug` (overrides the config).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dataset) = &cli.dataset {
        config.dataset_path = Some(dataset.display().to_string());
    }
    if let Some(theme) = &cli.theme {
        config.theme_name = Some(theme.clone());
        config.theme_file = None;
    }
    if let Some(level) = &cli.log_level {
        config.trace_level = Some(level.clone());
    }

    init_tracing(&config);

    let mut state = medidex::initialize(&config)?;

    // Deep link: a stale or malformed fragment is ignored without comment.
    if let Some(fragment) = cli.open.as_deref() {
        match parse_fragment(fragment) {
            Some(id) => {
                handle_event(&mut state, Event::OpenDetailById(id))?;
            }
            None => tracing::debug!(fragment, "ignoring malformed fragment"),
        }
    }

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut state, config.debounce_ms());
    restore_terminal(&mut terminal)?;

    result
}

/// Parses a `doc-<id>` fragment, with or without a leading `#`.
fn parse_fragment(fragment: &str) -> Option<ProviderId> {
    fragment
        .trim_start_matches('#')
        .strip_prefix("doc-")?
        .parse()
        .ok()
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Restore the terminal before the default hook prints the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    debounce_ms: u64,
) -> Result<()> {
    let debounce = Duration::from_millis(debounce_ms);
    let mut filter_deadline: Option<Instant> = None;

    loop {
        terminal.draw(|frame| medidex::ui::render(frame, state))?;

        // Wake early enough to fire a pending filter deadline on time.
        let timeout = filter_deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .map_or(POLL_INTERVAL, |until| until.min(POLL_INTERVAL));

        let mut events = vec![];
        if event::poll(timeout)? {
            match event::read()? {
                event::Event::Key(key) => {
                    if let Some(ev) = map_key_event(state, key) {
                        events.push(ev);
                    }
                }
                event::Event::Mouse(mouse) => {
                    if let Some(ev) = map_mouse_event(state, mouse, terminal.get_frame().area()) {
                        events.push(ev);
                    }
                }
                _ => {}
            }
        }

        if filter_deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            filter_deadline = None;
            events.push(Event::FilterDeadline);
        }

        for ev in events {
            let (_, actions) = handle_event(state, ev)?;

            if state.filter_pending {
                filter_deadline = Some(Instant::now() + debounce);
            } else {
                filter_deadline = None;
            }

            for action in actions {
                match action {
                    Action::Quit => return Ok(()),
                    Action::OpenPhoneLink { uri } => open_phone_link(&uri),
                }
            }
        }
    }
}

/// Maps a raw key event to a semantic event, based on the current mode.
/// Popup keys take precedence over everything else while the popup is open.
fn map_key_event(state: &AppState, key: KeyEvent) -> Option<Event> {
    if state.popup.is_open() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Event::CloseDetail),
            KeyCode::Char('c') => Some(Event::CallSelected),
            _ => None,
        };
    }

    match state.input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(Event::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Event::KeyDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Event::KeyUp),
            KeyCode::Char('/') => Some(Event::SearchMode),
            KeyCode::Enter => Some(Event::OpenDetail),
            KeyCode::Tab | KeyCode::Char('f') => Some(Event::CycleSpecialty),
            KeyCode::BackTab | KeyCode::Char('F') => Some(Event::CycleSpecialtyBack),
            KeyCode::Char('t') => Some(Event::ToggleTeleFilter),
            KeyCode::Char('c') => Some(Event::CallSelected),
            KeyCode::Esc => Some(Event::Escape),
            _ => None,
        },
        InputMode::Search(SearchFocus::Typing) => match key.code {
            KeyCode::Esc => Some(Event::Escape),
            KeyCode::Enter => Some(Event::FocusResults),
            KeyCode::Backspace => Some(Event::Backspace),
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Event::KeyDown)
            }
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Event::KeyUp)
            }
            KeyCode::Down => Some(Event::KeyDown),
            KeyCode::Up => Some(Event::KeyUp),
            KeyCode::Char(c) => Some(Event::Char(c)),
            _ => None,
        },
        InputMode::Search(SearchFocus::Navigating) => match key.code {
            KeyCode::Esc => Some(Event::Escape),
            KeyCode::Char('q') => Some(Event::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Event::KeyDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Event::KeyUp),
            KeyCode::Char('/') => Some(Event::FocusSearchBar),
            KeyCode::Enter => Some(Event::OpenDetail),
            KeyCode::Char('t') => Some(Event::ToggleTeleFilter),
            KeyCode::Char('c') => Some(Event::CallSelected),
            _ => None,
        },
    }
}

/// Maps mouse input: scrolling navigates, and a click outside the open popup
/// dismisses it.
fn map_mouse_event(
    state: &AppState,
    mouse: MouseEvent,
    frame_area: ratatui::layout::Rect,
) -> Option<Event> {
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(Event::KeyDown),
        MouseEventKind::ScrollUp => Some(Event::KeyUp),
        MouseEventKind::Down(MouseButton::Left) if state.popup.is_open() => {
            let popup = medidex::ui::popup_area(frame_area);
            let inside = mouse.column >= popup.x
                && mouse.column < popup.x + popup.width
                && mouse.row >= popup.y
                && mouse.row < popup.y + popup.height;
            if inside {
                None
            } else {
                Some(Event::CloseDetail)
            }
        }
        _ => None,
    }
}

/// Hands a `tel:` URI to the desktop opener, best effort.
fn open_phone_link(uri: &str) {
    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(not(target_os = "macos"))]
    let opener = "xdg-open";

    match std::process::Command::new(opener)
        .arg(uri)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
    {
        Ok(_) => tracing::info!(uri, "opened phone link"),
        Err(e) => tracing::warn!(uri, error = %e, "failed to open phone link"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_parsing_accepts_doc_ids() {
        assert_eq!(parse_fragment("doc-3"), Some(3));
        assert_eq!(parse_fragment("#doc-12"), Some(12));
    }

    #[test]
    fn malformed_fragments_are_rejected() {
        assert_eq!(parse_fragment("doc-"), None);
        assert_eq!(parse_fragment("doc-x"), None);
        assert_eq!(parse_fragment("provider-3"), None);
        assert_eq!(parse_fragment(""), None);
    }
}
