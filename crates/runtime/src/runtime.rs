//! Session loop and runtime configuration.
//!
//! [`Session`] is what a front end drives once per frame: it keeps the
//! monotonic clock, polls prompt deadlines, then applies at most one input.
//! [`RuntimeConfig`] gathers the process-level knobs (save location, data
//! directory, seed, clock resolution) from the environment.

use std::env;
use std::path::PathBuf;

use lokarta_content::{ContentBundle, ContentFactory, LoadResult, embedded_config};
use lokarta_core::{GameConfig, InputKey, Tick};

use crate::api::{Result, StepReport};
use crate::repository::{JsonFilePersistence, Persistence};
use crate::router::CommandRouter;

/// Owns the router and the tick counter for one play session.
pub struct Session<'e, P> {
    router: CommandRouter<'e, P>,
    clock: Tick,
}

impl<'e, P: Persistence> Session<'e, P> {
    pub fn new(router: CommandRouter<'e, P>) -> Self {
        let clock = router.state().clock;
        Self { router, clock }
    }

    /// One frame: deadlines first, then the input if there is one.
    ///
    /// `now` never moves the clock backwards. A deadline that fires in this
    /// frame is resolved before the input is looked at, so an input that
    /// arrives late for a timed prompt lands in whatever mode the timeout
    /// left behind.
    pub fn frame(&mut self, now: Tick, input: Option<InputKey>) -> Result<StepReport> {
        self.clock = self.clock.max(now);
        let mut report = self.router.tick(self.clock)?;
        if let Some(key) = input {
            report.merge(self.router.handle_input(key)?);
        }
        Ok(report)
    }

    pub fn clock(&self) -> Tick {
        self.clock
    }

    pub fn router(&self) -> &CommandRouter<'e, P> {
        &self.router
    }
}

/// Process-level configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Overrides the clock resolution from the balance config.
    pub ticks_per_second: Option<u64>,
    pub save_path: PathBuf,
    /// Content directory; the embedded data set is used when unset.
    pub data_dir: Option<PathBuf>,
    pub seed: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: None,
            save_path: default_save_path(),
            data_dir: None,
            seed: rand::random(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    ///
    /// - `LOKARTA_TICKS_PER_SECOND`: clock resolution
    /// - `LOKARTA_SAVE_PATH`: save file location
    /// - `LOKARTA_DATA_DIR`: content directory
    /// - `LOKARTA_SEED`: fixed session seed
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    /// Unparseable values are ignored.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(ticks) = read_var::<u64>(&var, "LOKARTA_TICKS_PER_SECOND") {
            config.ticks_per_second = Some(ticks.max(1));
        }
        if let Some(path) = var("LOKARTA_SAVE_PATH").filter(|p| !p.is_empty()) {
            config.save_path = PathBuf::from(path);
        }
        if let Some(dir) = var("LOKARTA_DATA_DIR").filter(|d| !d.is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(seed) = read_var::<u64>(&var, "LOKARTA_SEED") {
            config.seed = seed;
        }

        config
    }

    /// Applies the runtime overrides on top of a balance config.
    pub fn apply(&self, game: &mut GameConfig) {
        if let Some(ticks) = self.ticks_per_second {
            game.prompt.ticks_per_second = ticks;
        }
    }

    /// Loads content and balance config from `data_dir`, or the embedded set.
    pub fn load_content(&self) -> LoadResult<(ContentBundle, GameConfig)> {
        let (bundle, mut game) = match &self.data_dir {
            Some(dir) => {
                let factory = ContentFactory::new(dir);
                (factory.load_bundle()?, factory.load_config()?)
            }
            None => (ContentBundle::embedded()?, embedded_config()?),
        };
        self.apply(&mut game);
        tracing::info!(
            data_dir = ?self.data_dir,
            ticks_per_second = game.prompt.ticks_per_second,
            "content loaded"
        );
        Ok((bundle, game))
    }

    pub fn persistence(&self) -> JsonFilePersistence {
        JsonFilePersistence::new(&self.save_path)
    }
}

/// Platform data directory, falling back to `./save_data`.
fn default_save_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "lokarta")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
        .join("save.json")
}

fn read_var<T>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    var(key)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_overrides() {
        let config = RuntimeConfig::from_vars(vars(&[
            ("LOKARTA_TICKS_PER_SECOND", "30"),
            ("LOKARTA_SAVE_PATH", "/tmp/lokarta/save.json"),
            ("LOKARTA_DATA_DIR", "content"),
            ("LOKARTA_SEED", "42"),
        ]));
        assert_eq!(config.ticks_per_second, Some(30));
        assert_eq!(config.save_path, PathBuf::from("/tmp/lokarta/save.json"));
        assert_eq!(config.data_dir, Some(PathBuf::from("content")));
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn ignores_garbage() {
        let config = RuntimeConfig::from_vars(vars(&[
            ("LOKARTA_TICKS_PER_SECOND", "fast"),
            ("LOKARTA_SEED", "-1"),
            ("LOKARTA_DATA_DIR", ""),
        ]));
        assert_eq!(config.ticks_per_second, None);
        assert_eq!(config.data_dir, None);
        assert!(config.save_path.ends_with("save.json"));
    }

    #[test]
    fn apply_overrides_clock_resolution() {
        let config = RuntimeConfig {
            ticks_per_second: Some(60),
            ..RuntimeConfig::from_vars(vars(&[]))
        };
        let mut game = GameConfig::default();
        config.apply(&mut game);
        assert_eq!(game.prompt.ticks_per_second, 60);
        assert_eq!(game.prompt.ticks_for_secs(3), 180);
    }

    #[test]
    fn embedded_content_loads_without_data_dir() {
        let config = RuntimeConfig::from_vars(vars(&[("LOKARTA_TICKS_PER_SECOND", "20")]));
        let (_, game) = config.load_content().unwrap();
        assert_eq!(game.prompt.ticks_per_second, 20);
    }
}
