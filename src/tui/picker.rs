use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::widgets::ListState;

use super::models::PickerTarget;

/// Modal file list over the inputs directory. Opened by the choose-file and
/// choose-subtitle actions; Esc cancels and leaves the previous selection
/// alone.
#[derive(Debug)]
pub struct FilePicker {
    pub target: PickerTarget,
    pub entries: Vec<PathBuf>,
    pub list_state: ListState,
}

impl FilePicker {
    pub fn open(inputs_dir: &Path, target: PickerTarget) -> io::Result<Self> {
        // Same behavior as the choose-file dialog: make sure the inputs
        // directory exists before listing it
        fs::create_dir_all(inputs_dir)?;

        let mut entries: Vec<PathBuf> = fs::read_dir(inputs_dir)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|ft| ft.is_file()).unwrap_or(false))
            .map(|entry| entry.path())
            .collect();
        entries.sort();

        let mut list_state = ListState::default();
        if !entries.is_empty() {
            list_state.select(Some(0));
        }

        Ok(Self {
            target,
            entries,
            list_state,
        })
    }

    pub fn title(&self) -> String {
        self.target.title()
    }

    pub fn selected(&self) -> Option<&PathBuf> {
        self.list_state.selected().and_then(|i| self.entries.get(i))
    }

    pub fn next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= self.entries.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.entries.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_lists_files_sorted_and_skips_directories() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("b.mkv"), b"x").unwrap();
        fs::write(temp.path().join("a.srt"), b"x").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();

        let picker = FilePicker::open(temp.path(), PickerTarget::Primary).unwrap();
        let names: Vec<_> = picker
            .entries
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.srt", "b.mkv"]);
        assert_eq!(picker.selected().unwrap().file_name().unwrap(), "a.srt");
    }

    #[test]
    fn test_open_creates_missing_inputs_directory() {
        let temp = tempfile::tempdir().unwrap();
        let inputs = temp.path().join("inputs");

        let picker = FilePicker::open(&inputs, PickerTarget::Primary).unwrap();
        assert!(inputs.is_dir());
        assert!(picker.entries.is_empty());
        assert!(picker.selected().is_none());
    }

    #[test]
    fn test_navigation_wraps() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("a"), b"x").unwrap();
        fs::write(temp.path().join("b"), b"x").unwrap();

        let mut picker = FilePicker::open(temp.path(), PickerTarget::Primary).unwrap();
        picker.previous();
        assert_eq!(picker.list_state.selected(), Some(1));
        picker.next();
        assert_eq!(picker.list_state.selected(), Some(0));
    }
}
