use crate::domain::constants::CONFIG_FILE_NAME;
use crate::domain::errors::GuardError;
use crate::domain::models::{GuardConfig, GuardConfigFile};
use std::path::{Path, PathBuf};

/// Config file to read: the explicit one, or `<root>/css-guard.toml`.
pub fn config_path(root: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(p) => p.to_path_buf(),
        None => root.join(CONFIG_FILE_NAME),
    }
}

/// Layers the optional TOML file over the compiled-in defaults.
///
/// A missing default file yields the defaults. A missing explicit file or a
/// malformed one is an error.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<GuardConfig, GuardError> {
    let path = config_path(root, explicit);
    if !path.exists() {
        if explicit.is_some() {
            return Err(GuardError::InvalidConfig {
                path,
                message: "file does not exist".to_string(),
            });
        }
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(GuardConfig::default());
    }

    let raw = std::fs::read_to_string(&path)?;
    let file: GuardConfigFile = toml::from_str(&raw).map_err(|e| GuardError::InvalidConfig {
        path: path.clone(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), "loaded config file");

    let mut config = GuardConfig::default();
    if let Some(artifact) = file.artifact.path {
        config.artifact = artifact;
    }
    if let Some(max_kb) = file.budget.max_kb {
        config.budget.max_kb = max_kb;
    }
    if let Some(target_kb) = file.budget.target_kb {
        config.budget.target_kb = target_kb;
    }

    if !config.budget.thresholds_ordered() {
        tracing::warn!(
            max_kb = config.budget.max_kb,
            target_kb = config.budget.target_kb,
            "target limit is not below the hard limit; the size warning can never fire"
        );
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{config_path, load_config};
    use crate::domain::errors::GuardError;
    use crate::domain::models::{GuardConfig, SizeBudget};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_file() {
        let root = TempDir::new().expect("temp root");
        let config = load_config(root.path(), None).expect("defaults");
        assert_eq!(config, GuardConfig::default());
        assert_eq!(config.artifact, PathBuf::from("static/css/styles.css"));
        assert_eq!(
            config.budget,
            SizeBudget {
                max_kb: 15,
                target_kb: 12
            }
        );
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let root = TempDir::new().expect("temp root");
        fs::write(
            root.path().join("css-guard.toml"),
            "[budget]\ntarget_kb = 10\n",
        )
        .expect("write config");

        let config = load_config(root.path(), None).expect("config");
        assert_eq!(config.budget.max_kb, 15);
        assert_eq!(config.budget.target_kb, 10);
        assert_eq!(config.artifact, PathBuf::from("static/css/styles.css"));
    }

    #[test]
    fn misordered_thresholds_are_kept_as_written() {
        let root = TempDir::new().expect("temp root");
        fs::write(
            root.path().join("css-guard.toml"),
            "[budget]\nmax_kb = 10\ntarget_kb = 12\n",
        )
        .expect("write config");

        let config = load_config(root.path(), None).expect("config");
        assert_eq!(config.budget.max_kb, 10);
        assert_eq!(config.budget.target_kb, 12);
        assert!(!config.budget.thresholds_ordered());
    }

    #[test]
    fn huge_limit_loads_without_overflow() {
        let root = TempDir::new().expect("temp root");
        fs::write(
            root.path().join("css-guard.toml"),
            "[budget]\nmax_kb = 18014398509481984\n",
        )
        .expect("write config");

        let config = load_config(root.path(), None).expect("config");
        assert_eq!(config.budget.max_kb, 18_014_398_509_481_984);
        assert_eq!(config.budget.max_bytes(), u64::MAX);
    }

    #[test]
    fn malformed_file_is_invalid_config() {
        let root = TempDir::new().expect("temp root");
        fs::write(
            root.path().join("css-guard.toml"),
            "[budget]\nmax_kb = \"big\"\n",
        )
        .expect("write config");

        let err = load_config(root.path(), None).expect_err("must fail");
        assert!(matches!(err, GuardError::InvalidConfig { .. }));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let root = TempDir::new().expect("temp root");
        let missing = root.path().join("nope.toml");
        let err = load_config(root.path(), Some(&missing)).expect_err("must fail");
        assert_eq!(err.code(), "CONFIG_INVALID");
    }

    #[test]
    fn explicit_path_wins_over_root_default() {
        assert_eq!(
            config_path(Path::new("site"), Some(Path::new("ci/guard.toml"))),
            PathBuf::from("ci/guard.toml")
        );
        assert_eq!(
            config_path(Path::new("site"), None),
            PathBuf::from("site/css-guard.toml")
        );
    }
}
