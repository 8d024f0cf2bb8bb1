use crate::domain::errors::GuardError;
use crate::domain::models::ContentScanConfig;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

const MODULE_TYPE_HEADER: &str = "/** @type {import('tailwindcss').Config} */";

impl ContentScanConfig {
    /// Expands every content glob under `root`.
    ///
    /// Only regular files are returned, sorted and without duplicates (the
    /// `.html` globs may overlap when content and layouts share a tree).
    pub fn expand(&self, root: &Path) -> Result<Vec<PathBuf>, GuardError> {
        // Only the declared pattern may carry wildcards, never the root.
        let escaped_root = PathBuf::from(glob::Pattern::escape(&root.to_string_lossy()));
        let mut files = BTreeSet::new();
        for pattern in &self.content {
            let relative = pattern.trim_start_matches("./");
            let full = escaped_root.join(relative);
            let entries =
                glob::glob(&full.to_string_lossy()).map_err(|e| GuardError::InvalidPattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
            for entry in entries {
                match entry {
                    Ok(path) if path.is_file() => {
                        files.insert(path);
                    }
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!(
                            pattern = %pattern,
                            path = %e.path().display(),
                            error = %e.error(),
                            "skipping unreadable path"
                        );
                    }
                }
            }
        }
        tracing::debug!(root = %root.display(), matched = files.len(), "expanded content globs");
        Ok(files.into_iter().collect())
    }

    /// Renders the config as the CommonJS module the generator loads.
    pub fn render_module(&self) -> serde_json::Result<String> {
        Ok(format!(
            "{}\nmodule.exports = {};\n",
            MODULE_TYPE_HEADER,
            serde_json::to_string_pretty(self)?
        ))
    }
}

/// Writes the rendered module, creating parent directories as needed.
pub fn export_module(config: &ContentScanConfig, out: &Path) -> anyhow::Result<usize> {
    let rendered = config.render_module()?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, &rendered)?;
    tracing::debug!(path = %out.display(), "wrote generator config");
    Ok(rendered.len())
}
