//! Configuration structures for the processing pipeline.

use serde::{Deserialize, Serialize};

use super::record::DocumentType;

/// Known counterparties, in match priority order.
pub const DEFAULT_COMPANIES: [&str; 15] = [
    "COPERGAS",
    "AMBEV",
    "CBA",
    "CERVEJARIA",
    "DEXCO",
    "GERDAU",
    "INDORAMA",
    "INGREDION",
    "KLABIN",
    "MONDELEZ",
    "NISSIN",
    "VETRUS",
    "M DIAS BRANCO",
    "PETROBRAS",
    "GALP",
];

/// Main configuration for the ret pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RetConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Directory scan configuration.
    pub scan: ScanConfig,

    /// Output file configuration.
    pub output: OutputConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Company registry. Order matters: the first entry found in a file name wins.
    pub companies: Vec<String>,

    /// Reporting currency shown next to totals.
    pub currency: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            companies: DEFAULT_COMPANIES.iter().map(|c| c.to_string()).collect(),
            currency: "EUR".to_string(),
        }
    }
}

/// Directory scan configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Categories processed by a run. Documents classified as `Other` are always kept.
    pub enabled_types: Vec<DocumentType>,

    /// File extensions treated as documents (compared case-insensitively).
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            enabled_types: DocumentType::SELECTABLE.to_vec(),
            extensions: vec!["pdf".to_string()],
        }
    }
}

/// Output file names, relative to the processed root directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// SQLite database file.
    pub database_file: String,

    /// XLSX report file.
    pub report_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            database_file: "RET_dados.db".to_string(),
            report_file: "RET_Relatorio.xlsx".to_string(),
        }
    }
}

impl RetConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: RetConfig =
            serde_json::from_str(r#"{"scan": {"enabled_types": ["eat"]}}"#).unwrap();

        assert_eq!(config.scan.enabled_types, vec![DocumentType::Eat]);
        assert_eq!(config.scan.extensions, vec!["pdf".to_string()]);
        assert_eq!(config.extraction.companies.len(), DEFAULT_COMPANIES.len());
        assert_eq!(config.output.database_file, "RET_dados.db");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = RetConfig::default();
        config.extraction.companies = vec!["GALP".to_string()];
        config.save(&path).unwrap();

        let loaded = RetConfig::from_file(&path).unwrap();
        assert_eq!(loaded.extraction.companies, vec!["GALP".to_string()]);
    }
}
