use std::collections::BTreeMap;
use std::path::PathBuf;

/// Audio language tags offered by the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AudioLang {
    En,
    Sk,
    Cz,
}

impl AudioLang {
    pub const ALL: [AudioLang; 3] = [AudioLang::En, AudioLang::Sk, AudioLang::Cz];

    /// Checkbox label, also the token written into the output filename.
    pub fn label(self) -> &'static str {
        match self {
            AudioLang::En => "EN",
            AudioLang::Sk => "SK",
            AudioLang::Cz => "CZ",
        }
    }
}

/// Subtitle language tags offered by the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SubtitleLang {
    En,
    Sk,
    Cz,
}

impl SubtitleLang {
    pub const ALL: [SubtitleLang; 3] = [SubtitleLang::En, SubtitleLang::Sk, SubtitleLang::Cz];

    pub fn label(self) -> &'static str {
        match self {
            SubtitleLang::En => "ENtit",
            SubtitleLang::Sk => "SKtit",
            SubtitleLang::Cz => "CZtit",
        }
    }

    /// Extension code inserted before the subtitle's own extension,
    /// e.g. `en` in `Movie - EN ENtit.en.srt`.
    pub fn code(self) -> &'static str {
        match self {
            SubtitleLang::En => "en",
            SubtitleLang::Sk => "sk",
            SubtitleLang::Cz => "cz",
        }
    }
}

/// Checkbox state at submit time: a fixed record over the two tag sets
/// rather than anything dynamic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    audio: [bool; AudioLang::ALL.len()],
    subtitles: [bool; SubtitleLang::ALL.len()],
}

impl SelectionSet {
    pub fn toggle_audio(&mut self, lang: AudioLang) {
        self.audio[lang as usize] = !self.audio[lang as usize];
    }

    pub fn toggle_subtitle(&mut self, lang: SubtitleLang) {
        self.subtitles[lang as usize] = !self.subtitles[lang as usize];
    }

    pub fn audio_selected(&self, lang: AudioLang) -> bool {
        self.audio[lang as usize]
    }

    pub fn subtitle_selected(&self, lang: SubtitleLang) -> bool {
        self.subtitles[lang as usize]
    }

    pub fn selected_audio(&self) -> Vec<AudioLang> {
        AudioLang::ALL
            .into_iter()
            .filter(|lang| self.audio_selected(*lang))
            .collect()
    }

    pub fn selected_subtitles(&self) -> Vec<SubtitleLang> {
        SubtitleLang::ALL
            .into_iter()
            .filter(|lang| self.subtitle_selected(*lang))
            .collect()
    }

    /// Joined tag token inserted into the output filename: audio labels
    /// first, then subtitle labels, each in display order.
    pub fn tag_string(&self) -> String {
        let mut tags: Vec<&str> = self
            .selected_audio()
            .into_iter()
            .map(AudioLang::label)
            .collect();
        tags.extend(self.selected_subtitles().into_iter().map(SubtitleLang::label));
        tags.join(" ")
    }

    pub fn clear(&mut self) {
        *self = SelectionSet::default();
    }
}

/// One form session: the chosen primary file, subtitle files per language,
/// and the checkbox state. Lives from the first selection until the reset
/// after a successful submit.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    pub primary_file: Option<PathBuf>,
    pub subtitle_files: BTreeMap<SubtitleLang, PathBuf>,
    pub selections: SelectionSet,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_primary_file(&mut self, path: PathBuf) {
        self.primary_file = Some(path);
    }

    pub fn set_subtitle_file(&mut self, lang: SubtitleLang, path: PathBuf) {
        self.subtitle_files.insert(lang, path);
    }

    /// Back to the idle state, ready for the next movie.
    pub fn reset(&mut self) {
        self.primary_file = None;
        self.subtitle_files.clear();
        self.selections.clear();
    }
}
