use std::time::{Duration, Instant};

use crate::inspector::{self, TrackReport};
use crate::organizer::Organizer;
use crate::player;
use crate::session::FormSession;

use super::models::{Focus, PickerTarget, StatusKind};
use super::picker::FilePicker;

const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(5);

pub struct App {
    pub organizer: Organizer,
    pub session: FormSession,
    pub url_input: String,
    pub focus: Focus,
    pub picker: Option<FilePicker>,
    pub track_report: Option<TrackReport>,
    pub show_help: bool,
    pub shelved_count: usize,
    pub status_message: Option<(StatusKind, String)>,
    pub status_message_time: Option<Instant>,
}

impl App {
    pub fn new(organizer: Organizer) -> Self {
        let url_input = organizer.config().start_url.clone();
        Self {
            organizer,
            session: FormSession::new(),
            url_input,
            focus: Focus::Url,
            picker: None,
            track_report: None,
            show_help: false,
            shelved_count: 0,
            status_message: None,
            status_message_time: None,
        }
    }

    pub fn set_status_message(&mut self, kind: StatusKind, message: String) {
        self.status_message = Some((kind, message));
        self.status_message_time = Some(Instant::now());
    }

    pub fn clear_status_message_if_expired(&mut self) {
        if let (Some(_), Some(time)) = (&self.status_message, self.status_message_time) {
            if time.elapsed() > STATUS_MESSAGE_TTL {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn open_picker(&mut self, target: PickerTarget) {
        match FilePicker::open(&self.organizer.config().inputs_dir, target) {
            Ok(picker) => self.picker = Some(picker),
            Err(e) => {
                log::error!("could not open file picker: {e}");
                self.set_status_message(
                    StatusKind::Error,
                    format!("Could not list inputs directory: {e}"),
                );
            }
        }
    }

    /// Applies the picker's highlighted entry to the form and closes the
    /// picker. An empty list behaves like a cancel.
    pub fn confirm_picker_selection(&mut self) {
        let Some(picker) = self.picker.take() else {
            return;
        };
        let Some(path) = picker.selected().cloned() else {
            return;
        };

        match picker.target {
            PickerTarget::Primary => {
                self.refresh_track_report(&path);
                self.session.set_primary_file(path);
            }
            PickerTarget::Subtitle(lang) => {
                self.session.set_subtitle_file(lang, path);
            }
        }
    }

    /// Closes the picker without touching the form, like a cancelled dialog.
    pub fn cancel_picker(&mut self) {
        self.picker = None;
    }

    /// Track layout is display-only; a probe failure just clears the panel.
    fn refresh_track_report(&mut self, path: &std::path::Path) {
        match inspector::inspect_tracks(path) {
            Ok(report) => self.track_report = Some(report),
            Err(e) => {
                log::warn!("track inspection failed for {}: {e}", path.display());
                self.track_report = None;
                self.set_status_message(StatusKind::Info, format!("No track info: {e}"));
            }
        }
    }

    pub fn play_selected(&mut self) {
        let Some(file) = self.session.primary_file.clone() else {
            self.set_status_message(StatusKind::Info, "No file selected".to_string());
            return;
        };

        if let Err(e) = player::launch_player(&file) {
            // Playback is a convenience; log it and move on
            log::error!("player launch failed: {e}");
            self.set_status_message(StatusKind::Error, format!("Player: {e}"));
        }
    }

    /// Runs one submission. Awaited inline by the event loop, so a second
    /// submit cannot start while this one is in flight.
    pub async fn submit(&mut self) {
        match self.organizer.submit(&self.session, &self.url_input).await {
            Ok(outcome) => {
                log::info!("shelved to {}", outcome.primary.display());
                self.set_status_message(
                    StatusKind::Success,
                    format!(
                        "Shelved to {} ({} subtitle(s))",
                        outcome.primary.display(),
                        outcome.subtitles.len()
                    ),
                );
                self.shelved_count += 1;
                self.reset_form();
            }
            Err(e) => {
                // Session untouched so the user can correct and resubmit
                log::warn!("submit failed: {e}");
                self.set_status_message(StatusKind::Error, format!("Submit failed: {e}"));
            }
        }
    }

    fn reset_form(&mut self) {
        self.session.reset();
        self.track_report = None;
        self.url_input = self.organizer.config().start_url.clone();
        self.focus = Focus::Url;
    }
}
