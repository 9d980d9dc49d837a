
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Config directory fixture: a temp dir exported as STAFF_CONFIG_DIR, with
/// every STAFF_* override cleared for the lifetime of the fixture.
pub(crate) struct ConfigDir {
    pub(crate) temp: TempDir,
    _guards: Vec<EnvGuard>,
}

impl ConfigDir {
    pub(crate) fn write_config(&self, contents: &str) {
        std::fs::write(self.temp.path().join(crate::CONFIG_FILENAME), contents).unwrap();
    }
}

pub(crate) fn setup_config_dir() -> ConfigDir {
    let temp = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set(crate::CONFIG_DIR_ENV, temp.path().to_str().unwrap()),
        EnvGuard::remove("STAFF_LOG_LEVEL"),
        EnvGuard::remove("STAFF_LOG_COLORED"),
        EnvGuard::remove("STAFF_LOG_FILE"),
        EnvGuard::remove("STAFF_OUTPUT_PRETTY"),
    ];
    ConfigDir {
        temp,
        _guards: guards,
    }
}
