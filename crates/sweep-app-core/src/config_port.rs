// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Prefs port shared across sweep tools.

use crate::config::{ConfigError, ConfigService, ConfigStore};
use crate::prefs::SimPrefs;

/// Key under which [`SimPrefs`] are stored.
pub const SIM_PREFS_KEY: &str = "sim";

/// Port for loading/saving simulation preferences.
pub trait PrefsPort {
    /// Load preferences; `Ok(None)` when nothing has been saved yet.
    fn load_prefs(&self) -> Result<Option<SimPrefs>, ConfigError>;
    /// Persist preferences.
    fn save_prefs(&self, prefs: &SimPrefs) -> Result<(), ConfigError>;

    /// Load preferences, writing the defaults first if none exist.
    fn load_or_init(&self) -> Result<SimPrefs, ConfigError> {
        if let Some(prefs) = self.load_prefs()? {
            return Ok(prefs);
        }
        let prefs = SimPrefs::default();
        self.save_prefs(&prefs)?;
        Ok(prefs)
    }
}

impl<S> PrefsPort for ConfigService<S>
where
    S: ConfigStore,
{
    fn load_prefs(&self) -> Result<Option<SimPrefs>, ConfigError> {
        self.load(SIM_PREFS_KEY)
    }

    fn save_prefs(&self, prefs: &SimPrefs) -> Result<(), ConfigError> {
        self.save(SIM_PREFS_KEY, prefs)
    }
}
