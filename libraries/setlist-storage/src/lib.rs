//! Setlist - Playlist Files
//!
//! Saves and loads playlists as flat text, one entry per line:
//!
//! ```text
//! title,artist,album,duration,favorite,filePath
//! ```
//!
//! The engine never touches the file system; the front end calls
//! [`save_playlist`] and [`load_playlist`] explicitly.

mod error;
mod record;

pub use error::{Result, StorageError};
pub use record::{decode_line, encode_entry};

use setlist_playback::Entry;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write `entries` to `path` in order, replacing any existing file
///
/// Parent directories are created as needed. Returns the number of records
/// written.
pub fn save_playlist<'a, I>(path: &Path, entries: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Entry>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(path)?);
    let mut count = 0;
    for entry in entries {
        writeln!(out, "{}", encode_entry(entry))?;
        count += 1;
    }
    out.flush()?;

    tracing::info!("Saved {} entries to {}", count, path.display());
    Ok(count)
}

/// Read every record in `path`, in file order
///
/// Blank lines are skipped. The first malformed record aborts the load.
pub fn load_playlist(path: &Path) -> Result<Vec<Entry>> {
    let reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        entries.push(decode_line(line, index + 1)?);
    }

    tracing::info!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}
