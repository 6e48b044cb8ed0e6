use crate::error::DutyError;
use crate::model::Roster;
use anyhow::Context;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Charge l'export JSON du tableau de garde.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster, DutyError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| DutyError::ReadRoster {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(|source| DutyError::ParseRoster {
        path: path.to_path_buf(),
        source,
    })
}

/// Destination des calendriers générés.
pub trait CalendarSink {
    /// Écrit `<stem>.ics` et renvoie l'emplacement effectif.
    fn write(&mut self, stem: &str, contents: &str) -> anyhow::Result<PathBuf>;
}

/// Écrit un fichier par calendrier dans un répertoire, de manière atomique.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Crée le répertoire au besoin.
    pub fn create<P: AsRef<Path>>(dir: P) -> anyhow::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CalendarSink for DirectorySink {
    fn write(&mut self, stem: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let path = self.dir.join(format!("{stem}.ics"));
        let mut tmp = NamedTempFile::new_in(&self.dir).with_context(|| "creating temp file")?;
        tmp.write_all(contents.as_bytes())?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// Garde les calendriers en mémoire (tests, aperçu).
#[derive(Debug, Default)]
pub struct MemorySink {
    pub files: BTreeMap<String, String>,
}

impl CalendarSink for MemorySink {
    fn write(&mut self, stem: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let name = format!("{stem}.ics");
        self.files.insert(name.clone(), contents.to_string());
        Ok(PathBuf::from(name))
    }
}
