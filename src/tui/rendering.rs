use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::session::{AudioLang, SubtitleLang};

use super::app::App;
use super::models::{Focus, StatusKind};
use super::utils::centered_rect;

pub fn ui(f: &mut Frame, app: &App) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(14),
            Constraint::Length(3),
        ])
        .split(size);

    render_header(f, chunks[0], app);
    render_url_bar(f, chunks[1], app);
    render_form(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);

    if let Some(picker) = &app.picker {
        render_picker_popup(f, picker);
    }

    if app.show_help {
        render_help_popup(f);
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.shelved_count > 0 {
        format!("🎬 movieshelf - {} file(s) shelved this session", app.shelved_count)
    } else {
        "🎬 movieshelf".to_string()
    };

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_url_bar(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Url;
    let url = Paragraph::new(app.url_input.as_str())
        .style(focus_style(focused))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Browsed Page URL")
                .border_style(focus_border(focused)),
        );
    f.render_widget(url, area);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_file_column(f, columns[0], app);
    render_checkbox_column(f, columns[1], app);
    render_track_panel(f, columns[2], app);
}

fn render_file_column(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(area);

    let choose_focused = app.focus == Focus::ChooseFile;
    let choose = Paragraph::new("Choose File")
        .alignment(Alignment::Center)
        .style(focus_style(choose_focused))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_border(choose_focused)),
        );
    f.render_widget(choose, rows[0]);

    let play_focused = app.focus == Focus::Play;
    let play = Paragraph::new("▶ Play")
        .alignment(Alignment::Center)
        .style(if play_focused {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_border(play_focused)),
        );
    f.render_widget(play, rows[1]);

    let submit_focused = app.focus == Focus::Submit;
    let submit = Paragraph::new("Submit")
        .alignment(Alignment::Center)
        .style(if submit_focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_border(submit_focused)),
        );
    f.render_widget(submit, rows[2]);

    let file_name = app
        .session
        .primary_file
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "No file selected".to_string());

    let file_info = Paragraph::new(file_name)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Selected File")
                .border_style(Style::default().fg(Color::Blue)),
        );
    f.render_widget(file_info, rows[3]);
}

fn render_checkbox_column(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(5),
        ])
        .split(area);

    let audio_items: Vec<ListItem> = AudioLang::ALL
        .into_iter()
        .map(|lang| {
            let mark = if app.session.selections.audio_selected(lang) {
                "[x]"
            } else {
                "[ ]"
            };
            let focused = app.focus == Focus::Audio(lang);
            ListItem::new(Line::from(Span::styled(
                format!("{mark} {}", lang.label()),
                focus_style(focused),
            )))
        })
        .collect();

    let audio = List::new(audio_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Audio")
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(audio, rows[0]);

    let subtitle_items: Vec<ListItem> = SubtitleLang::ALL
        .into_iter()
        .map(|lang| {
            let mark = if app.session.selections.subtitle_selected(lang) {
                "[x]"
            } else {
                "[ ]"
            };
            let focused = app.focus == Focus::Subtitle(lang);
            ListItem::new(Line::from(Span::styled(
                format!("{mark} {}", lang.label()),
                focus_style(focused),
            )))
        })
        .collect();

    let subtitles = List::new(subtitle_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Subtitles")
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(subtitles, rows[1]);

    let slot_items: Vec<ListItem> = SubtitleLang::ALL
        .into_iter()
        .map(|lang| {
            let assigned = app
                .session
                .subtitle_files
                .get(&lang)
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "-".to_string());
            let focused = app.focus == Focus::SubtitleFile(lang);
            ListItem::new(Line::from(Span::styled(
                format!("{}: {assigned}", lang.label()),
                focus_style(focused),
            )))
        })
        .collect();

    let slots = List::new(slot_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Subtitle Files (Enter to pick)")
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(slots, rows[2]);
}

fn render_track_panel(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();

    match &app.track_report {
        Some(report) => {
            lines.push(Line::from(Span::styled(
                "Audio tracks:",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            if report.audio.is_empty() {
                lines.push(Line::from("  (none)"));
            }
            for track in &report.audio {
                let channels = track
                    .channels
                    .map(|c| format!("{c}ch"))
                    .unwrap_or_else(|| "?ch".to_string());
                let rate = track
                    .sample_rate
                    .map(|r| format!("{r} Hz"))
                    .unwrap_or_else(|| "? Hz".to_string());
                lines.push(Line::from(format!(
                    "  {} - {} {channels} {rate}",
                    track.language, track.format
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Subtitle tracks:",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            if report.subtitles.is_empty() {
                lines.push(Line::from("  (none)"));
            }
            for track in &report.subtitles {
                lines.push(Line::from(format!(
                    "  {} - {}",
                    track.language, track.format
                )));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Pick a file to see its tracks",
                Style::default().fg(Color::Gray),
            )));
        }
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Tracks")
                .border_style(Style::default().fg(Color::Blue)),
        );
    f.render_widget(panel, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let (text, color) = match &app.status_message {
        Some((StatusKind::Success, msg)) => (msg.clone(), Color::Green),
        Some((StatusKind::Error, msg)) => (msg.clone(), Color::Red),
        Some((StatusKind::Info, msg)) => (msg.clone(), Color::White),
        None => (
            "Tab/↑↓ move · Space toggles · Enter activates · F1 help · Esc quits".to_string(),
            Color::Gray,
        ),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, area);
}

fn render_picker_popup(f: &mut Frame, picker: &super::picker::FilePicker) {
    let popup_area = centered_rect(60, 60, f.area());

    let items: Vec<ListItem> = picker
        .entries
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            ListItem::new(Line::from(name))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(picker.title())
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    f.render_widget(Clear, popup_area);
    f.render_stateful_widget(list, popup_area, &mut picker.list_state.clone());
}

fn render_help_popup(f: &mut Frame) {
    let popup_area = centered_rect(60, 50, f.area());

    let help_text = vec![
        Line::from(Span::styled(
            "movieshelf - Help",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Navigation:"),
        Line::from("  Tab/↓    - Next field"),
        Line::from("  Shift-Tab/↑ - Previous field"),
        Line::from(""),
        Line::from("Actions:"),
        Line::from("  Enter    - Activate field (pick file, play, submit)"),
        Line::from("  Space    - Toggle checkbox"),
        Line::from("  p        - Play selected file"),
        Line::from("  F1/h     - Toggle this help"),
        Line::from("  Esc/q    - Quit (q types into the URL field)"),
        Line::from(""),
        Line::from("Flow:"),
        Line::from("• Browse the movie page, paste its URL up top"),
        Line::from("• Choose the file and any subtitle files"),
        Line::from("• Tick the language tags, then Submit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or h to close",
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}
