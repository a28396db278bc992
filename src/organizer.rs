use std::path::PathBuf;

use anyhow::Result;
use thiserror::Error;

use crate::config::LibraryConfig;
use crate::placement::{self, PlacementError};
use crate::resolver::{CatalogEntry, MetadataError, MetadataResolver};
use crate::session::{FormSession, SubtitleLang};

/// A failed submission. The session is left untouched so the user can fix
/// the input and try again; only the current submit is aborted.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("no file selected")]
    NoFileSelected,
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// What one successful submit did, for display.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub folder: PathBuf,
    pub primary: PathBuf,
    pub subtitles: Vec<(SubtitleLang, PathBuf)>,
}

/// Ties the resolver, sanitizer, and placement together for one submission.
#[derive(Debug)]
pub struct Organizer {
    config: LibraryConfig,
    resolver: MetadataResolver,
}

impl Organizer {
    pub fn new(config: LibraryConfig) -> Result<Self> {
        Ok(Self {
            config,
            resolver: MetadataResolver::new()?,
        })
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Resolves the browsed page and shelves the session's files. Reads the
    /// session without consuming it; the caller resets it on success.
    pub async fn submit(
        &self,
        session: &FormSession,
        current_url: &str,
    ) -> Result<SubmitOutcome, SubmitError> {
        if session.primary_file.is_none() {
            return Err(SubmitError::NoFileSelected);
        }

        let entry = self.resolver.resolve(current_url).await?;
        self.place_submission(session, &entry)
    }

    /// The filesystem half of a submit, with the catalog entry already
    /// resolved. Moves the primary file first, then each assigned subtitle.
    pub fn place_submission(
        &self,
        session: &FormSession,
        entry: &CatalogEntry,
    ) -> Result<SubmitOutcome, SubmitError> {
        let primary_source = session
            .primary_file
            .as_ref()
            .ok_or(SubmitError::NoFileSelected)?;

        let folder_token = entry.folder_token();
        let folder = self.config.movies_dir.join(&folder_token);
        let base = format!("{} - {}", folder_token, session.selections.tag_string());

        log::info!(
            "shelving {} into {}",
            primary_source.display(),
            folder.display()
        );

        let primary = placement::place_file(&folder, primary_source, &base)?;

        let mut subtitles = Vec::new();
        for (lang, source) in &session.subtitle_files {
            let placed = placement::place_subtitle(&folder, source, &base, lang.code())?;
            subtitles.push((*lang, placed));
        }

        Ok(SubmitOutcome {
            folder,
            primary,
            subtitles,
        })
    }
}
