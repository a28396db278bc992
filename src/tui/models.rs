use crate::session::{AudioLang, SubtitleLang};

/// Every focusable element of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Url,
    ChooseFile,
    Play,
    Audio(AudioLang),
    Subtitle(SubtitleLang),
    SubtitleFile(SubtitleLang),
    Submit,
}

impl Focus {
    pub const ORDER: [Focus; 13] = [
        Focus::Url,
        Focus::ChooseFile,
        Focus::Play,
        Focus::Audio(AudioLang::En),
        Focus::Audio(AudioLang::Sk),
        Focus::Audio(AudioLang::Cz),
        Focus::Subtitle(SubtitleLang::En),
        Focus::Subtitle(SubtitleLang::Sk),
        Focus::Subtitle(SubtitleLang::Cz),
        Focus::SubtitleFile(SubtitleLang::En),
        Focus::SubtitleFile(SubtitleLang::Sk),
        Focus::SubtitleFile(SubtitleLang::Cz),
        Focus::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        let i = self.position();
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Focus {
        let i = self.position();
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Which form slot a picker selection lands in. One picker serves both the
/// primary file and every subtitle slot; only the title and target differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    Primary,
    Subtitle(SubtitleLang),
}

impl PickerTarget {
    pub fn title(self) -> String {
        match self {
            PickerTarget::Primary => "Select File".to_string(),
            PickerTarget::Subtitle(lang) => format!("Select {} Subtitle", lang.label()),
        }
    }
}

/// Color class of the transient status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}
