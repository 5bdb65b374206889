//! Directory-backed map storage: one `<name>.json` file per map

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use painting::{map_from_json, map_to_json, CellMap, Persistence, PersistenceError};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `name`. Path separators are replaced so a name can
    /// never leave the directory.
    pub fn path_for(&self, name: &str) -> PathBuf {
        let file: String = name
            .chars()
            .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
            .collect();
        self.dir.join(format!("{}.json", file.trim_start_matches('.')))
    }
}

impl Persistence for FileStore {
    fn load(&self, name: &str) -> Result<(CellMap, String), PersistenceError> {
        let path = self.path_for(name);
        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(PersistenceError::NotFound(name.to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        let cells = map_from_json(&json)?;
        debug!("Loaded {} ({} cells)", path.display(), cells.len());
        Ok((cells, name.to_string()))
    }

    fn save(&mut self, name: &str, cells: &CellMap) -> Result<(), PersistenceError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(name);
        std::fs::write(&path, map_to_json(cells)?)?;
        debug!("Wrote {} ({} cells)", path.display(), cells.len());
        Ok(())
    }
}
