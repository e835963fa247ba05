use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use eyre::{Result, WrapErr};
use tabletime_core::models::player::Player;

/// Persists the chosen player identity across sessions: one nickname string
/// in a small file at a fixed path. Unreadable or unrecognized contents load
/// as "no identity selected" rather than erroring.
#[derive(Debug, Clone)]
pub struct IdentityStore {
    path: PathBuf,
}

impl IdentityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        IdentityStore { path: path.into() }
    }

    /// The previously chosen identity, if any.
    pub fn load(&self) -> Option<Player> {
        let contents = fs::read_to_string(&self.path).ok()?;
        Player::from_str(contents.trim()).ok()
    }

    /// Persists the identity, creating parent directories as needed.
    pub fn save(&self, player: Player) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .wrap_err("Failed to create identity storage directory")?;
        }
        fs::write(&self.path, player.nickname())
            .wrap_err("Failed to persist identity")?;
        Ok(())
    }

    /// Forgets the stored identity. Absence is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).wrap_err("Failed to clear stored identity"),
        }
    }
}
