use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::LibraryConfig;
use crate::organizer::Organizer;

use super::app::App;
use super::models::{Focus, PickerTarget};
use super::rendering::ui;

pub async fn run_tui(config: LibraryConfig) -> Result<()> {
    let organizer = Organizer::new(config)?;
    let mut app = App::new(organizer);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.clear_status_message_if_expired();

        terminal.draw(|f| ui(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Modal states first: the picker, then the help popup
        if app.picker.is_some() {
            match key.code {
                KeyCode::Esc => app.cancel_picker(),
                KeyCode::Enter => app.confirm_picker_selection(),
                KeyCode::Down | KeyCode::Char('j') => {
                    if let Some(picker) = app.picker.as_mut() {
                        picker.next();
                    }
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    if let Some(picker) = app.picker.as_mut() {
                        picker.previous();
                    }
                }
                _ => {}
            }
            continue;
        }

        if app.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::F(1)) {
                app.toggle_help();
            }
            continue;
        }

        match key.code {
            KeyCode::Esc => return Ok(()),
            KeyCode::Tab | KeyCode::Down => app.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
            KeyCode::F(1) => app.toggle_help(),
            KeyCode::Enter => handle_enter(app).await,
            KeyCode::Char(' ') => handle_toggle(app),
            KeyCode::Char(c) => {
                if app.focus == Focus::Url {
                    app.url_input.push(c);
                } else {
                    match c {
                        'q' => return Ok(()),
                        'h' => app.toggle_help(),
                        'p' => app.play_selected(),
                        _ => {}
                    }
                }
            }
            KeyCode::Backspace => {
                if app.focus == Focus::Url {
                    app.url_input.pop();
                }
            }
            _ => {}
        }
    }
}

async fn handle_enter(app: &mut App) {
    match app.focus {
        Focus::Url => app.focus_next(),
        Focus::ChooseFile => app.open_picker(PickerTarget::Primary),
        Focus::Play => app.play_selected(),
        Focus::Audio(_) | Focus::Subtitle(_) => handle_toggle(app),
        Focus::SubtitleFile(lang) => app.open_picker(PickerTarget::Subtitle(lang)),
        // Awaited inline: no further keys are dispatched until the
        // submission finishes, so at most one is ever in flight
        Focus::Submit => app.submit().await,
    }
}

fn handle_toggle(app: &mut App) {
    match app.focus {
        Focus::Audio(lang) => app.session.selections.toggle_audio(lang),
        Focus::Subtitle(lang) => app.session.selections.toggle_subtitle(lang),
        _ => {}
    }
}
