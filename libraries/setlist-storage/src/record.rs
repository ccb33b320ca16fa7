//! Single-record codec
//!
//! One entry per line: `title,artist,album,duration,favorite,path` with
//! favorite written as `0` or `1`. There is no escaping. Decoding splits on the
//! first five commas only, so commas survive in the path but not elsewhere.

use crate::error::{Result, StorageError};
use setlist_playback::Entry;

const FIELD_COUNT: usize = 6;

/// Encode one entry without the trailing newline
pub fn encode_entry(entry: &Entry) -> String {
    format!(
        "{},{},{},{},{},{}",
        entry.title,
        entry.artist,
        entry.album,
        entry.duration_secs,
        u8::from(entry.favorite),
        entry.path
    )
}

/// Decode one record; `line_number` is 1-based and only used in errors
pub fn decode_line(line: &str, line_number: usize) -> Result<Entry> {
    let fields: Vec<&str> = line.splitn(FIELD_COUNT, ',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(StorageError::malformed(
            line_number,
            format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        ));
    }

    let duration_secs = fields[3].trim().parse::<u32>().map_err(|e| {
        StorageError::malformed(line_number, format!("invalid duration {:?}: {}", fields[3], e))
    })?;

    let favorite = match fields[4].trim() {
        "0" => false,
        "1" => true,
        other => {
            return Err(StorageError::malformed(
                line_number,
                format!("favorite must be 0 or 1, found {:?}", other),
            ))
        }
    };

    Ok(Entry::new(fields[0], fields[1], fields[2], duration_secs, fields[5]).with_favorite(favorite))
}
