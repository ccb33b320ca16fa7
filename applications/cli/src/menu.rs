//! Numbered text menu
//!
//! Reads choices and field values line by line from any [`BufRead`] and writes
//! prompts and results to any [`Write`], so sessions can be scripted in tests.
//! Engine errors become status lines; only I/O failure on the terminal itself
//! ends the loop early.

use setlist_playback::{Entry, PlaybackError, PlaybackManager};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// One menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Modify,
    Display,
    Search,
    Sort,
    ToggleFavorite,
    TotalDuration,
    Play,
    Next,
    Previous,
    ToggleRepeat,
    ToggleShuffle,
    Save,
    ShowHistory,
    Exit,
}

impl Action {
    /// Every action in menu order, paired with its number
    pub const ALL: [(u32, Action, &'static str); 16] = [
        (1, Action::Add, "Add Song"),
        (2, Action::Remove, "Remove Song"),
        (3, Action::Modify, "Modify Song"),
        (4, Action::Display, "Display Songs"),
        (5, Action::Search, "Search Song"),
        (6, Action::Sort, "Sort Songs by Title"),
        (7, Action::ToggleFavorite, "Toggle Favorite"),
        (8, Action::TotalDuration, "Show Total Duration"),
        (9, Action::Play, "Play"),
        (10, Action::Next, "Next"),
        (11, Action::Previous, "Previous"),
        (12, Action::ToggleRepeat, "Toggle Repeat"),
        (13, Action::ToggleShuffle, "Toggle Shuffle"),
        (14, Action::Save, "Save Playlist"),
        (15, Action::ShowHistory, "Show History"),
        (0, Action::Exit, "Exit"),
    ];

    pub fn from_choice(choice: u32) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|(number, _, _)| *number == choice)
            .map(|(_, action, _)| *action)
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive session over one playlist
pub struct Menu<R, W> {
    manager: PlaybackManager,
    input: R,
    output: W,
    playlist_path: PathBuf,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(manager: PlaybackManager, input: R, output: W, playlist_path: PathBuf) -> Self {
        Self {
            manager,
            input,
            output,
            playlist_path,
        }
    }

    pub fn manager(&self) -> &PlaybackManager {
        &self.manager
    }

    pub fn into_manager(self) -> PlaybackManager {
        self.manager
    }

    /// Run until the user picks Exit or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;

            let flow = match self.prompt("Enter your choice: ")? {
                None => Flow::Exit,
                Some(line) => match line.trim().parse::<u32>().ok().and_then(Action::from_choice) {
                    Some(action) => self.dispatch(action)?,
                    None => {
                        writeln!(self.output, "Invalid choice.")?;
                        Flow::Continue
                    }
                },
            };

            for event in self.manager.drain_events() {
                tracing::debug!(?event, "Playback event");
            }

            if let Flow::Exit = flow {
                return writeln!(self.output, "Exiting...");
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- {} ---", self.manager.name())?;
        for (number, _, label) in Action::ALL {
            writeln!(self.output, "{}. {}", number, label)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, action: Action) -> io::Result<Flow> {
        match action {
            Action::Add => self.add(),
            Action::Remove => self.remove(),
            Action::Modify => self.modify(),
            Action::Display => self.display().map(|()| Flow::Continue),
            Action::Search => self.search(),
            Action::Sort => {
                self.manager.sort_by_title();
                writeln!(self.output, "Sorted by title.")?;
                Ok(Flow::Continue)
            }
            Action::ToggleFavorite => self.toggle_favorite(),
            Action::TotalDuration => {
                writeln!(
                    self.output,
                    "Total Duration: {} seconds",
                    self.manager.total_duration()
                )?;
                Ok(Flow::Continue)
            }
            Action::Play => self.navigate(PlaybackManager::play),
            Action::Next => self.navigate(PlaybackManager::next),
            Action::Previous => self.navigate(PlaybackManager::prev),
            Action::ToggleRepeat => {
                let enabled = !self.manager.is_repeat();
                self.manager.toggle_repeat(enabled);
                writeln!(self.output, "Repeat: {}", on_off(enabled))?;
                Ok(Flow::Continue)
            }
            Action::ToggleShuffle => {
                let enabled = !self.manager.is_shuffled();
                self.manager.toggle_shuffle(enabled);
                writeln!(self.output, "Shuffle: {}", on_off(enabled))?;
                Ok(Flow::Continue)
            }
            Action::Save => self.save().map(|()| Flow::Continue),
            Action::ShowHistory => self.show_history().map(|()| Flow::Continue),
            Action::Exit => Ok(Flow::Exit),
        }
    }

    // ===== Actions =====

    fn add(&mut self) -> io::Result<Flow> {
        let Some(entry) = self.read_entry()? else {
            return Ok(Flow::Exit);
        };
        writeln!(self.output, "Added: {}", entry.title)?;
        self.manager.add(entry);
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> io::Result<Flow> {
        let Some(title) = self.prompt("Enter title to remove: ")? else {
            return Ok(Flow::Exit);
        };
        match self.manager.remove(&title) {
            Ok(entry) => writeln!(self.output, "Removed: {}", entry.title)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn modify(&mut self) -> io::Result<Flow> {
        let Some(title) = self.prompt("Enter title to modify: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(favorite) = self.manager.find(&title).map(|entry| entry.favorite) else {
            writeln!(self.output, "{}", PlaybackError::NotFound(title))?;
            return Ok(Flow::Continue);
        };

        let Some(entry) = self.read_entry()? else {
            return Ok(Flow::Exit);
        };
        let new_title = entry.title.clone();
        match self.manager.modify(&title, entry.with_favorite(favorite)) {
            Ok(()) => writeln!(self.output, "Updated: {}", new_title)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn display(&mut self) -> io::Result<()> {
        if self.manager.is_empty() {
            return writeln!(self.output, "Playlist is empty.");
        }

        for view in self.manager.all() {
            let marker = if view.is_current { "--> " } else { "    " };
            let favorite = if view.entry.favorite { " [Favorite]" } else { "" };
            writeln!(
                self.output,
                "{}{} | {} | {} | {}s{}",
                marker,
                view.entry.title,
                view.entry.artist,
                view.entry.album,
                view.entry.duration_secs,
                favorite
            )?;
        }

        writeln!(
            self.output,
            "State: {} | Repeat: {} | Shuffle: {}",
            self.manager.state(),
            on_off(self.manager.is_repeat()),
            on_off(self.manager.is_shuffled())
        )
    }

    fn search(&mut self) -> io::Result<Flow> {
        let Some(query) = self.prompt("Enter title or artist to search: ")? else {
            return Ok(Flow::Exit);
        };

        let mut found = 0;
        for entry in self.manager.search(&query) {
            writeln!(self.output, "Found: {} by {}", entry.title, entry.artist)?;
            found += 1;
        }
        if found == 0 {
            writeln!(self.output, "No matches.")?;
        }
        Ok(Flow::Continue)
    }

    fn toggle_favorite(&mut self) -> io::Result<Flow> {
        let Some(title) = self.prompt("Enter title to toggle favorite: ")? else {
            return Ok(Flow::Exit);
        };
        match self.manager.toggle_favorite(&title) {
            Ok(true) => writeln!(self.output, "{} is now a favorite", title)?,
            Ok(false) => writeln!(self.output, "{} is no longer a favorite", title)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn navigate(
        &mut self,
        step: fn(&mut PlaybackManager) -> setlist_playback::Result<()>,
    ) -> io::Result<Flow> {
        match step(&mut self.manager) {
            Ok(()) => {
                if let Some(entry) = self.manager.current() {
                    writeln!(self.output, "Playing: {} by {}", entry.title, entry.artist)?;
                }
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> io::Result<()> {
        match setlist_storage::save_playlist(&self.playlist_path, self.manager.entries()) {
            Ok(count) => writeln!(
                self.output,
                "Saved {} entries to {}",
                count,
                self.playlist_path.display()
            ),
            Err(e) => {
                tracing::error!("Failed to save playlist: {}", e);
                writeln!(self.output, "Error: {}", e)
            }
        }
    }

    fn show_history(&mut self) -> io::Result<()> {
        let history = self.manager.history();
        if history.is_empty() {
            return writeln!(self.output, "History is empty.");
        }

        writeln!(self.output, "Recently played (oldest first):")?;
        for (index, entry) in history.iter().enumerate() {
            writeln!(self.output, "{}. {} by {}", index + 1, entry.title, entry.artist)?;
        }
        Ok(())
    }

    // ===== Input =====

    fn read_entry(&mut self) -> io::Result<Option<Entry>> {
        let Some(title) = self.prompt("Enter title: ")? else {
            return Ok(None);
        };
        let Some(artist) = self.prompt("Enter artist: ")? else {
            return Ok(None);
        };
        let Some(album) = self.prompt("Enter album: ")? else {
            return Ok(None);
        };
        let Some(duration) = self.prompt_duration()? else {
            return Ok(None);
        };
        let Some(path) = self.prompt("Enter file path: ")? else {
            return Ok(None);
        };
        Ok(Some(Entry::new(title, artist, album, duration, path)))
    }

    fn prompt_duration(&mut self) -> io::Result<Option<u32>> {
        loop {
            let Some(line) = self.prompt("Enter duration (in seconds): ")? else {
                return Ok(None);
            };
            match line.trim().parse::<u32>() {
                Ok(duration) => return Ok(Some(duration)),
                Err(_) => writeln!(self.output, "Please enter a whole number of seconds.")?,
            }
        }
    }

    /// Print `label` and read one line; `None` at end of input
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
