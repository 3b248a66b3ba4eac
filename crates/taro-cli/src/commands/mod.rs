pub mod catalog;
pub mod draw;
pub mod history;
pub mod read;
pub mod settings;
pub mod stats;

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use taro_client::{CardFormat, ClientConfig, HttpBackend, OfflineBackend, ReadingBackend};
use taro_core::{Reading, ReadingId};
use taro_store::{FileStore, ReadingStore, default_data_dir};

/// Shared state for every command.
pub struct Context {
    pub store: ReadingStore<FileStore>,
    api_url: Option<String>,
    offline: bool,
    names_only: bool,
}

impl Context {
    pub fn new(
        data_dir: Option<PathBuf>,
        api_url: Option<String>,
        offline: bool,
        names_only: bool,
    ) -> Self {
        let dir = data_dir.unwrap_or_else(default_data_dir);
        tracing::debug!(dir = %dir.display(), "using data directory");
        Self {
            store: ReadingStore::new(FileStore::new(dir)),
            api_url,
            offline,
            names_only,
        }
    }

    /// The backend selected by the global flags.
    pub fn backend(&self) -> Result<Box<dyn ReadingBackend>, String> {
        if self.offline {
            return Ok(Box::new(OfflineBackend::new()));
        }

        let mut config = ClientConfig::default();
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url.clone());
        }
        if self.names_only {
            config = config.with_card_format(CardFormat::NamesOnly);
        }
        let backend = HttpBackend::new(config).map_err(|e| e.to_string())?;
        Ok(Box::new(backend))
    }

    /// Find a saved reading by full id or unique id prefix.
    pub fn find_reading(&self, id: &str) -> Result<Reading, String> {
        let id = resolve_id(&self.store.all_readings(), id)?;
        self.store
            .reading(id)
            .ok_or_else(|| format!("no reading with id '{id}'"))
    }
}

/// Match `input` against reading ids, accepting any unambiguous prefix.
fn resolve_id(readings: &[Reading], input: &str) -> Result<ReadingId, String> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Err("reading id must not be empty".into());
    }
    if let Ok(id) = ReadingId::parse_str(&needle) {
        return Ok(id);
    }

    let matches: Vec<ReadingId> = readings
        .iter()
        .map(Reading::id)
        .filter(|id| id.to_string().starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(format!("no reading with id '{input}'")),
        _ => Err(format!(
            "id prefix '{input}' matches {} readings; use more characters",
            matches.len()
        )),
    }
}

/// Seeded RNG when a seed is given, entropy-seeded otherwise.
fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// System locale from the usual environment variables.
fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
}

/// First eight characters of an id, enough to address a reading.
fn short_id(id: ReadingId) -> String {
    id.to_string()[..8].to_string()
}
