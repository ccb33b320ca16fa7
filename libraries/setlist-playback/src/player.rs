//! Player seam
//!
//! The engine never decodes audio. On every play it hands the entry's path to
//! a [`Player`] and moves on without waiting for the outcome.

use std::io;

/// External playback collaborator
///
/// Implementations start playback of `path` somewhere else (a child process, a
/// platform media API) and return as soon as the request is issued. An error
/// only means the request could not be issued; the manager logs it and carries
/// on.
pub trait Player {
    fn request_playback(&mut self, path: &str) -> io::Result<()>;
}

/// Player that accepts every request and does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPlayer;

impl Player for NullPlayer {
    fn request_playback(&mut self, _path: &str) -> io::Result<()> {
        Ok(())
    }
}
