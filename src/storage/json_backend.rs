use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use crate::{
    domain::MonthKey,
    store::MonthMap,
    utils::{backups_dir_in, ensure_dir, master_file_in, resolve_base, state_file_in},
};

use super::{Result, StoragePort};

const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";
const BACKUP_STEM: &str = "master_data";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

/// File-backed storage: one pretty-printed JSON blob for every month, a
/// small state file for the selection, timestamped backups before each
/// overwrite.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
    master_file: PathBuf,
    state_file: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>, retention: Option<usize>) -> Result<Self> {
        let app_root = resolve_base(root);
        ensure_dir(&app_root)?;
        let backups_dir = backups_dir_in(&app_root);
        ensure_dir(&backups_dir)?;
        let master_file = master_file_in(&app_root);
        let state_file = state_file_in(&app_root);
        Ok(Self {
            root: app_root,
            master_file,
            state_file,
            backups_dir,
            retention: retention.unwrap_or(DEFAULT_RETENTION).max(1),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None, None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn master_path(&self) -> &Path {
        &self.master_file
    }

    /// Backup file names, newest first.
    pub fn list_backups(&self) -> Result<Vec<String>> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            let file_name = match path.file_name().and_then(|stem| stem.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            entries.push(file_name);
        }
        entries.sort_by(|a, b| parse_backup_timestamp(b).cmp(&parse_backup_timestamp(a)));
        Ok(entries)
    }

    pub fn backup_path(&self, backup_name: &str) -> PathBuf {
        self.backups_dir.join(backup_name)
    }

    fn backup_existing_master(&self) -> Result<()> {
        if !self.master_file.exists() {
            return Ok(());
        }
        ensure_dir(&self.backups_dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let backup_name = format!("{}_{}.{}", BACKUP_STEM, timestamp, BACKUP_EXTENSION);
        let backup_path = self.backups_dir.join(&backup_name);
        fs::copy(&self.master_file, &backup_path)?;
        self.prune_backups()?;
        Ok(())
    }

    fn prune_backups(&self) -> Result<()> {
        let backups = self.list_backups()?;
        if backups.len() <= self.retention {
            return Ok(());
        }
        for entry in backups.iter().skip(self.retention) {
            let path = self.backup_path(entry);
            let _ = fs::remove_file(path);
        }
        Ok(())
    }

    fn read_state(&self) -> Result<StoreState> {
        if !self.state_file.exists() {
            return Ok(StoreState::default());
        }
        let data = fs::read_to_string(&self.state_file)?;
        match serde_json::from_str(&data) {
            Ok(state) => Ok(state),
            Err(error) => {
                warn!(path = %self.state_file.display(), %error, "state file unreadable, ignoring");
                Ok(StoreState::default())
            }
        }
    }
}

impl StoragePort for JsonStorage {
    fn load(&self) -> Result<Option<MonthMap>> {
        if !self.master_file.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.master_file)?;
        match serde_json::from_str(&data) {
            Ok(months) => Ok(Some(months)),
            Err(error) => {
                warn!(
                    path = %self.master_file.display(),
                    %error,
                    "master data unreadable, starting empty"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, months: &MonthMap) -> Result<()> {
        self.backup_existing_master()?;
        let json = serde_json::to_string_pretty(months)?;
        let tmp = tmp_path(&self.master_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.master_file)?;
        info!(months = months.len(), "master data saved");
        Ok(())
    }

    fn load_selection(&self) -> Result<Option<MonthKey>> {
        Ok(self.read_state()?.selected_month)
    }

    fn save_selection(&self, key: &MonthKey) -> Result<()> {
        let mut state = self.read_state()?;
        state.selected_month = Some(*key);
        let data = serde_json::to_string_pretty(&state)?;
        write_atomic(&self.state_file, &data)?;
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreState {
    selected_month: Option<MonthKey>,
}

fn parse_backup_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = name.split('_').collect();
    if parts.len() < 3 {
        return None;
    }
    let date_part = parts.get(parts.len() - 2)?;
    let time_part = parts.last()?;
    if !is_digits(date_part, 8) || !time_part.ends_with(".json") {
        return None;
    }
    let time_digits = &time_part[..time_part.len() - 5];
    if !is_digits(time_digits, 4) {
        return None;
    }
    let raw = format!("{}{}", date_part, time_digits);
    NaiveDateTime::parse_from_str(&raw, "%Y%m%d%H%M")
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
