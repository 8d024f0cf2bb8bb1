use crate::domain::constants::{
    BYTES_PER_KB, CONTENT_GLOBS, CSS_FILE, MAX_SIZE_KB, SANS_FONT_STACK, SANS_FONT_TOKEN,
    TARGET_SIZE_KB,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonError {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBudget {
    pub max_kb: u64,
    pub target_kb: u64,
}

impl Default for SizeBudget {
    fn default() -> Self {
        Self {
            max_kb: MAX_SIZE_KB,
            target_kb: TARGET_SIZE_KB,
        }
    }
}

impl SizeBudget {
    /// Saturates at `u64::MAX` for oversized limits read from the config file.
    pub fn max_bytes(&self) -> u64 {
        self.max_kb.saturating_mul(BYTES_PER_KB)
    }

    pub fn target_bytes(&self) -> u64 {
        self.target_kb.saturating_mul(BYTES_PER_KB)
    }

    /// False when the warning threshold can never fire before the hard limit.
    pub fn thresholds_ordered(&self) -> bool {
        self.max_kb > self.target_kb
    }
}

/// Effective settings after layering the optional config file over the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    pub artifact: PathBuf,
    pub budget: SizeBudget,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            artifact: PathBuf::from(CSS_FILE),
            budget: SizeBudget::default(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct GuardConfigFile {
    #[serde(default)]
    pub artifact: ArtifactSection,
    #[serde(default)]
    pub budget: BudgetSection,
}

#[derive(Debug, Deserialize, Default)]
pub struct ArtifactSection {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct BudgetSection {
    pub max_kb: Option<u64>,
    pub target_kb: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SizeMeasurement {
    pub file: String,
    pub path: String,
    pub size_bytes: u64,
    pub gzip_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Ok,
    Warn,
    Fail,
}

#[derive(Debug, Clone, Serialize)]
pub struct SizeReport {
    #[serde(flatten)]
    pub measurement: SizeMeasurement,
    pub target_kb: u64,
    pub max_kb: u64,
    pub status: BudgetStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub over_budget_bytes: Option<u64>,
    pub recommendations: Vec<String>,
}

impl SizeReport {
    pub fn passed(&self) -> bool {
        self.status != BudgetStatus::Fail
    }
}

/// Declaration consumed by the external utility-class generator.
/// Field names follow the generator's camelCase config keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentScanConfig {
    pub content: Vec<String>,
    pub theme: Theme,
    pub plugins: Vec<String>,
    pub future: FutureFlags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Theme {
    pub extend: ThemeExtension,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtension {
    pub font_family: BTreeMap<String, Vec<String>>,
}

/// Strict mode: only generate used classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureFlags {
    pub purge_layers_by_default: bool,
    pub remove_deprecated_gap_utilities: bool,
}

impl Default for ContentScanConfig {
    fn default() -> Self {
        let mut font_family = BTreeMap::new();
        font_family.insert(
            SANS_FONT_TOKEN.to_string(),
            SANS_FONT_STACK.iter().map(|f| f.to_string()).collect(),
        );
        Self {
            content: CONTENT_GLOBS.iter().map(|g| g.to_string()).collect(),
            theme: Theme {
                extend: ThemeExtension { font_family },
            },
            plugins: vec![],
            future: FutureFlags {
                purge_layers_by_default: true,
                remove_deprecated_gap_utilities: true,
            },
        }
    }
}

#[derive(Serialize)]
pub struct ExportReport {
    pub path: String,
    pub bytes: usize,
}
