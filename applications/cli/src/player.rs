//! Player that launches an external program

use crate::config::PlayerSettings;
use setlist_playback::Player;
use std::io;
use std::process::{Child, Command, Stdio};
use std::thread;

/// Spawns `program args... path` for each playback request
///
/// The child is detached from the terminal. A background thread waits on it so
/// it is reaped once it exits; the request itself never blocks.
#[derive(Debug, Clone)]
pub struct ProcessPlayer {
    program: String,
    args: Vec<String>,
}

impl ProcessPlayer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_settings(settings: &PlayerSettings) -> Self {
        Self::new(settings.program.clone(), settings.args.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Player for ProcessPlayer {
    fn request_playback(&mut self, path: &str) -> io::Result<()> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        tracing::debug!(program = %self.program, pid = child.id(), path, "Spawned player");
        reap_in_background(child)
    }
}

fn reap_in_background(mut child: Child) -> io::Result<()> {
    let pid = child.id();
    thread::Builder::new()
        .name(format!("player-{}", pid))
        .spawn(move || match child.wait() {
            Ok(status) => tracing::debug!(pid, %status, "Player exited"),
            Err(e) => tracing::warn!(pid, "Failed to wait for player: {}", e),
        })?;
    Ok(())
}
