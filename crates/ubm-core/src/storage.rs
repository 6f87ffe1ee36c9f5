//! JSON-file persistence for the bookmark store.
//!
//! The whole store is one pretty-printed `bookmarks.json` in the data
//! directory. Writers hold an exclusive `fs2` lock on `bookmarks.lock` for the
//! duration of a load-modify-save cycle; readers take a shared lock. Each save
//! goes to a temporary file that is synced and renamed over the target, so a
//! crash never leaves a half-written store behind.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind as IoErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use fs2::FileExt;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::types::{Bookmark, StoreData};
use crate::{Error, Result, path};

const STORE_FILENAME: &str = "bookmarks.json";
const LOCK_FILENAME: &str = "bookmarks.lock";
const BACKUP_STEM: &str = "bookmarks.backup";

/// Backup behaviour for [`Storage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageOptions {
    /// Copy the current store aside before each save.
    pub auto_backup: bool,
    /// Number of backup generations to keep (at least one).
    pub max_backups: usize,
}

impl Default for StorageOptions {
    fn default() -> Self {
        Self {
            auto_backup: true,
            max_backups: 5,
        }
    }
}

impl From<&Config> for StorageOptions {
    fn from(config: &Config) -> Self {
        Self {
            auto_backup: config.auto_backup,
            max_backups: config.max_backups,
        }
    }
}

/// Handle on the bookmark store in one data directory.
#[derive(Debug, Clone)]
pub struct Storage {
    data_dir: PathBuf,
    options: StorageOptions,
}

impl Storage {
    /// Open (creating if needed) the store rooted at `data_dir`.
    pub fn open(data_dir: impl Into<PathBuf>, options: StorageOptions) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)
            .map_err(|e| Error::Storage(format!("Failed to create data directory: {e}")))?;
        Ok(Self {
            data_dir,
            options: StorageOptions {
                max_backups: options.max_backups.max(1),
                ..options
            },
        })
    }

    /// Directory holding the store and its backups.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of `bookmarks.json`.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILENAME)
    }

    /// Path of the `index`-th backup generation (0 is the most recent).
    #[must_use]
    pub fn backup_path(&self, index: usize) -> PathBuf {
        if index == 0 {
            self.data_dir.join(format!("{BACKUP_STEM}.json"))
        } else {
            self.data_dir.join(format!("{BACKUP_STEM}.{index}.json"))
        }
    }

    /// Read the store; a missing file yields an empty store.
    pub fn load(&self) -> Result<StoreData> {
        let lock = self.lock_file()?;
        FileExt::lock_shared(&lock)
            .map_err(|e| Error::Storage(format!("Failed to lock store: {e}")))?;
        self.read_unlocked()
    }

    /// Persist `data`, stamping its `updated_at`.
    pub fn save(&self, data: &mut StoreData) -> Result<()> {
        let lock = self.lock_file()?;
        lock.lock_exclusive()
            .map_err(|e| Error::Storage(format!("Failed to lock store: {e}")))?;
        self.write_unlocked(data)
    }

    /// Load, mutate and save as one critical section.
    ///
    /// Nothing is written when `f` returns an error.
    pub fn update<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut StoreData) -> Result<T>,
    {
        let lock = self.lock_file()?;
        lock.lock_exclusive()
            .map_err(|e| Error::Storage(format!("Failed to lock store: {e}")))?;
        let mut data = self.read_unlocked()?;
        let value = f(&mut data)?;
        self.write_unlocked(&mut data)?;
        Ok(value)
    }

    /// Insert a bookmark and register its category.
    pub fn add_bookmark(&self, bookmark: Bookmark) -> Result<Bookmark> {
        path::validate(&bookmark.category)?;
        self.update(|data| {
            if let Some(existing) = data
                .bookmarks
                .iter()
                .find(|b| b.url == bookmark.url && b.category == bookmark.category)
            {
                return Err(Error::AlreadyExists(format!(
                    "'{}' is already bookmarked in {} as '{}'",
                    bookmark.url,
                    path::display(&bookmark.category),
                    existing.title
                )));
            }
            data.ensure_category(&bookmark.category);
            data.bookmarks.push(bookmark.clone());
            info!("added bookmark {} ({})", bookmark.title, bookmark.id);
            Ok(bookmark)
        })
    }

    /// Replace the stored bookmark that has the same id.
    pub fn update_bookmark(&self, bookmark: &Bookmark) -> Result<()> {
        path::validate(&bookmark.category)?;
        self.update(|data| {
            let slot = data
                .find_by_id_mut(&bookmark.id)
                .ok_or_else(|| Error::NotFound(format!("bookmark {}", bookmark.id)))?;
            *slot = bookmark.clone();
            data.ensure_category(&bookmark.category);
            info!("updated bookmark {}", bookmark.id);
            Ok(())
        })
    }

    /// Remove a bookmark by id, returning it.
    pub fn delete_bookmark(&self, id: &str) -> Result<Bookmark> {
        self.update(|data| {
            let idx = data
                .bookmarks
                .iter()
                .position(|b| b.id == id)
                .ok_or_else(|| Error::NotFound(format!("bookmark {id}")))?;
            let removed = data.bookmarks.remove(idx);
            info!("deleted bookmark {} ({id})", removed.title);
            Ok(removed)
        })
    }

    /// Fetch one bookmark by id.
    pub fn get_bookmark(&self, id: &str) -> Result<Bookmark> {
        self.load()?
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("bookmark {id}")))
    }

    /// Bookmarks filed exactly under `category`.
    pub fn bookmarks_in(&self, category: &str) -> Result<Vec<Bookmark>> {
        Ok(self.load()?.bookmarks_in(category).cloned().collect())
    }

    /// Bookmarks whose title, URL or description contains `query`.
    pub fn search(&self, query: &str) -> Result<Vec<Bookmark>> {
        let data = self.load()?;
        Ok(data
            .bookmarks
            .into_iter()
            .filter(|b| b.matches(query))
            .collect())
    }

    /// Register a new category path.
    pub fn add_category(&self, category: &str) -> Result<()> {
        path::validate(category)?;
        if category.is_empty() {
            return Err(Error::Invalid("category path cannot be empty".into()));
        }
        self.update(|data| {
            if data.has_category(category) {
                return Err(Error::AlreadyExists(format!("category '{category}'")));
            }
            data.ensure_category(category);
            info!("created category {category}");
            Ok(())
        })
    }

    /// Unregister an empty leaf category.
    ///
    /// A path that only exists as an ancestor of other categories is still a
    /// tree node, so it is refused for its subcategories, not reported missing.
    pub fn remove_category(&self, category: &str) -> Result<()> {
        self.update(|data| {
            if data.has_subcategories(category) {
                return Err(Error::Invalid(format!(
                    "category '{category}' has subcategories"
                )));
            }
            if !data.known_categories().iter().any(|c| c == category) {
                return Err(Error::NotFound(format!("category '{category}'")));
            }
            let direct = data.bookmarks_in(category).count();
            if direct > 0 {
                return Err(Error::Invalid(format!(
                    "category '{category}' still holds {direct} bookmark(s)"
                )));
            }
            data.categories.retain(|c| c != category);
            info!("deleted category {category}");
            Ok(())
        })
    }

    fn lock_file(&self) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(self.data_dir.join(LOCK_FILENAME))
            .map_err(|e| Error::Storage(format!("Failed to open lock file: {e}")))
    }

    fn read_unlocked(&self) -> Result<StoreData> {
        let path = self.store_path();
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == IoErrorKind::NotFound => {
                debug!("no store at {}, starting empty", path.display());
                return Ok(StoreData::default());
            },
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&json).map_err(|e| {
            Error::Serialization(format!("Failed to parse {}: {e}", path.display()))
        })
    }

    fn write_unlocked(&self, data: &mut StoreData) -> Result<()> {
        data.updated_at = Utc::now();
        let path = self.store_path();
        if self.options.auto_backup && path.exists() {
            self.rotate_backups()?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let tmp = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)?;
        let mut buf = BufWriter::new(tmp);
        serde_json::to_writer_pretty(&mut buf, data)?;
        buf.write_all(b"\n")?;
        buf.flush()?;
        let file = buf.into_inner().map_err(|e| Error::Io(e.into_error()))?;
        file.sync_all()?;
        drop(file);

        #[cfg(target_os = "windows")]
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| Error::Storage(format!("Failed to remove existing store: {e}")))?;
        }
        if let Err(err) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(Error::Storage(format!("Failed to commit store: {err}")));
        }

        debug!(
            "saved {} bookmarks, {} categories to {}",
            data.bookmarks.len(),
            data.categories.len(),
            path.display()
        );
        Ok(())
    }

    fn rotate_backups(&self) -> Result<()> {
        let oldest = self.options.max_backups - 1;
        for index in (1..=oldest).rev() {
            let from = self.backup_path(index - 1);
            if !from.exists() {
                continue;
            }
            let to = self.backup_path(index);
            if to.exists() {
                fs::remove_file(&to)?;
            }
            fs::rename(&from, &to)
                .map_err(|e| Error::Storage(format!("Failed to rotate backup: {e}")))?;
        }
        if let Err(err) = fs::copy(self.store_path(), self.backup_path(0)) {
            warn!("failed to back up store: {err}");
        }
        Ok(())
    }
}
