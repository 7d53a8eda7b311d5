//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storecart_cache::{Cache, FileStore};
use storecart_core::cart::CartStore;
use storecart_observability::{LogFormat, LogLevel, SessionId, StructuredLogger};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the config was loaded from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Diagnostics logger.
    pub logger: StructuredLogger,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config_file(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        let min_level = if output.is_verbose() {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        };
        let format = if output.is_json() {
            LogFormat::Json
        } else {
            LogFormat::Human
        };
        let logger = StructuredLogger::new(SessionId::generate())
            .with_min_level(min_level)
            .with_format(format);

        if let Some(path) = &config_path {
            logger
                .debug_builder("config loaded")
                .field("path", path.display().to_string())
                .emit();
        }

        Ok(Self {
            config,
            config_path,
            output,
            logger,
            cwd,
        })
    }

    /// Path of the cart file.
    pub fn cart_file(&self) -> PathBuf {
        self.resolve_path(&self.config.cli.cart_file)
    }

    /// Open the cart with this context's output attached as notifier.
    pub fn open_cart(&self) -> Result<CartStore<FileStore>> {
        let path = self.cart_file();
        let store = FileStore::open(path.clone())
            .with_context(|| format!("Failed to open cart file: {}", path.display()))?;

        Ok(CartStore::open(
            Cache::new(store),
            self.config.shop.storage_key.as_str(),
            self.logger.for_component("cart"),
        )
        .with_notifier(self.output.clone()))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

/// Find a config file in `start` or any of its parents.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("storecart-cli-{}-{}", std::process::id(), name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_finds_config_in_parent() {
        let root = temp_dir("parent");
        let nested = root.join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join(".storecart.toml"), "currency = \"EUR\"\n").unwrap();

        assert_eq!(find_config_file(&nested), Some(root.join(".storecart.toml")));

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_prefers_toml_over_json() {
        let root = temp_dir("prefer");
        fs::write(root.join("storecart.json"), "{}").unwrap();
        fs::write(root.join("storecart.toml"), "").unwrap();

        assert_eq!(find_config_file(&root), Some(root.join("storecart.toml")));

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_resolve_keeps_absolute_paths() {
        let cwd = PathBuf::from("/work");
        assert_eq!(resolve(&cwd, "cart.json"), PathBuf::from("/work/cart.json"));
        assert_eq!(resolve(&cwd, "/tmp/cart.json"), PathBuf::from("/tmp/cart.json"));
    }
}
