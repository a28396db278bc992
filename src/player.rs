use std::io;
use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Tried in order: PATH lookup first, then the usual install locations.
const PLAYER_CANDIDATES: &[&str] = &[
    "vlc",
    "/usr/bin/vlc",
    "/Applications/VLC.app/Contents/MacOS/VLC",
    r"C:\Program Files\VideoLAN\VLC\vlc.exe",
    r"C:\Program Files (x86)\VideoLAN\VLC\vlc.exe",
];

/// Launch failures are logged by the caller and otherwise ignored; playback
/// is a convenience, not part of the shelving flow.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("no media player found (tried {0:?})")]
    NotFound(&'static [&'static str]),
    #[error("failed to launch {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: io::Error,
    },
}

/// Hands the file to an external media player and returns immediately.
pub fn launch_player(file: &Path) -> Result<(), PlayerError> {
    for candidate in PLAYER_CANDIDATES {
        match Command::new(candidate).arg(file).spawn() {
            Ok(_) => {
                log::info!("playing {} with {candidate}", file.display());
                return Ok(());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(PlayerError::Spawn {
                    binary: candidate.to_string(),
                    source: e,
                });
            }
        }
    }

    Err(PlayerError::NotFound(PLAYER_CANDIDATES))
}
