use crate::consts;
use crate::util::SaveError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Player state that outlives a single game session: the player's name, the
/// best score ever reached, and the leaderboard.  Stored as one JSON document
/// in the platform's local data directory.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Profile {
    pub(crate) username: String,
    pub(crate) high_score: u32,
    pub(crate) leaderboard: Leaderboard,
}

impl Default for Profile {
    fn default() -> Profile {
        Profile {
            username: String::from(consts::DEFAULT_USERNAME),
            high_score: 0,
            leaderboard: Leaderboard::default(),
        }
    }
}

impl Profile {
    /// Return the default profile file path
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("snakelet").join("profile.json"))
    }

    /// Read the profile from disk.  A missing file, an unreadable file, and
    /// a file that does not parse all fall back to the defaults; persistence
    /// problems never stop a game from starting.
    pub(crate) fn load(path: &Path) -> Profile {
        match fs_err::read(path) {
            Ok(src) => serde_json::from_slice(&src).unwrap_or_default(),
            Err(_) => Profile::default(),
        }
    }

    pub(crate) fn save(&self, path: &Path) -> Result<(), SaveError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(|e| SaveError::mkdir("profile", e))?;
        }
        let mut src =
            serde_json::to_string_pretty(self).map_err(|e| SaveError::serialize("profile", e))?;
        src.push('\n');
        fs_err::write(path, &src).map_err(|e| SaveError::write("profile", e))?;
        Ok(())
    }

    /// Raise the high score to `score` if it is a new record.  Returns
    /// whether it was; the stored value never decreases.
    pub(crate) fn update_high_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }

    /// Replace the username with `name`, trimmed.  A blank name keeps the
    /// current one.  Returns whether the username changed.
    pub(crate) fn set_username(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || name == self.username {
            return false;
        }
        self.username = String::from(name);
        true
    }
}

/// The best final scores seen across sessions, ordered best first
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct Leaderboard(Vec<LeaderboardEntry>);

impl Leaderboard {
    /// Insert a finished game's score, keeping the board sorted descending
    /// by score and truncated to
    /// [`LEADERBOARD_CAPACITY`][consts::LEADERBOARD_CAPACITY] entries.  On
    /// ties, earlier entries keep their place.
    pub(crate) fn record(&mut self, name: String, score: u32) {
        self.0.push(LeaderboardEntry { name, score });
        self.0.sort_by(|a, b| b.score.cmp(&a.score));
        self.0.truncate(consts::LEADERBOARD_CAPACITY);
    }

    pub(crate) fn entries(&self) -> &[LeaderboardEntry] {
        &self.0
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub(crate) struct LeaderboardEntry {
    pub(crate) name: String,
    pub(crate) score: u32,
}
