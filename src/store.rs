use {
    anyhow::{Context, Result},
    serde::{Deserialize, Serialize},
    std::{
        collections::BTreeMap,
        path::{Path, PathBuf},
    },
};

/// One persisted custom command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCommand {
    pub cmd: String,
    pub desc: String,
}

/// namespace -> friendly phrase -> command.
pub type CustomMap = BTreeMap<String, BTreeMap<String, CustomCommand>>;

/// Durable storage for custom commands. Injected into dispatch so
/// tests can swap in an in-memory fake.
pub trait CustomStore {
    /// Reads the whole mapping. A missing or corrupt store reads as
    /// empty; corruption is never surfaced as an error.
    fn read(&self) -> CustomMap;

    /// Rewrites the whole mapping.
    fn write(&self, map: &CustomMap) -> Result<()>;

    /// Where the store lives on disk, if anywhere.
    fn location(&self) -> Option<&Path> {
        None
    }
}

/// Config directory, `~/.plainterm`.
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".plainterm")
}

/// JSON-file-backed store at `~/.plainterm/custom-commands.json`.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_location() -> Self {
        Self::new(config_dir().join("custom-commands.json"))
    }
}

impl CustomStore for JsonFileStore {
    fn read(&self) -> CustomMap {
        match std::fs::read_to_string(&self.path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => CustomMap::default(),
        }
    }

    fn write(&self, map: &CustomMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let data = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, data)
            .with_context(|| format!("Failed to write custom commands to: {}", self.path.display()))
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

/// In-memory store for tests.
#[cfg(test)]
pub struct MemStore(pub std::cell::RefCell<CustomMap>);

#[cfg(test)]
impl MemStore {
    pub fn empty() -> Self {
        Self(std::cell::RefCell::new(CustomMap::default()))
    }
}

#[cfg(test)]
impl CustomStore for MemStore {
    fn read(&self) -> CustomMap {
        self.0.borrow().clone()
    }

    fn write(&self, map: &CustomMap) -> Result<()> {
        *self.0.borrow_mut() = map.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("custom-commands.json"));
        assert!(store.read().is_empty());
    }

    #[test]
    fn corrupt_json_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom-commands.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(path);
        assert!(store.read().is_empty());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("custom-commands.json"));

        let mut map = CustomMap::default();
        map.entry("deploy".to_string()).or_default().insert(
            "push".to_string(),
            CustomCommand {
                cmd: "git push origin main && npm run build".to_string(),
                desc: "Custom: git push origin main && npm run build".to_string(),
            },
        );
        store.write(&map).unwrap();

        let read = store.read();
        assert_eq!(read, map);
        assert_eq!(
            read["deploy"]["push"].cmd,
            "git push origin main && npm run build"
        );
    }

    #[test]
    fn persisted_layout_is_namespace_keyed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom-commands.json");
        std::fs::write(
            &path,
            r#"{ "npm": { "quick test": { "cmd": "npm run test -- --watch", "desc": "Custom: npm run test -- --watch" } } }"#,
        )
        .unwrap();
        let store = JsonFileStore::new(path);
        let map = store.read();
        assert_eq!(map["npm"]["quick test"].cmd, "npm run test -- --watch");
    }
}
