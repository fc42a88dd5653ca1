use crate::error::{LicsyncError, Result};
use crate::license::LicenseSource;
use reqwest::Url;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A license source that serves canned text and records what was requested.
pub(crate) struct StubSource {
    body: Option<String>,
    pub(crate) calls: Cell<usize>,
    pub(crate) last_url: RefCell<Option<String>>,
}

impl StubSource {
    pub(crate) fn serving(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            calls: Cell::new(0),
            last_url: RefCell::new(None),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            body: None,
            calls: Cell::new(0),
            last_url: RefCell::new(None),
        }
    }
}

impl LicenseSource for StubSource {
    fn fetch(&self, url: &Url) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        *self.last_url.borrow_mut() = Some(url.to_string());

        self.body
            .clone()
            .ok_or_else(|| LicsyncError::fetch(url.as_str(), "connection refused"))
    }
}

/// Canonical license document in the layout license repositories publish.
pub(crate) const CANONICAL_LICENSE: &str = "some-metadata\n---\n   Line one.\n   Line two.\n";

/// Create a project directory containing `licsync.yaml` with `config_yaml`.
pub(crate) fn create_test_project(config_yaml: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("licsync.yaml"), config_yaml).unwrap();
    temp_dir
}
