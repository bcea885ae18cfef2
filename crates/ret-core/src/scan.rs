//! Recursive discovery of candidate documents.

use std::path::{Path, PathBuf};

use glob::{glob, Pattern};
use tracing::{debug, trace};

use crate::error::{Result, RetError};
use crate::models::config::ScanConfig;
use crate::models::record::DocumentType;

/// Check that `root` is usable before anything else happens.
pub fn validate_root(root: &Path) -> Result<()> {
    if root.as_os_str().is_empty() {
        return Err(RetError::Config("no root directory selected".to_string()));
    }
    if !root.is_dir() {
        return Err(RetError::Config(format!(
            "root directory not found: {}",
            root.display()
        )));
    }
    Ok(())
}

/// Whether a document of this type takes part in a run.
///
/// `Other` is always processed; the remaining types only when enabled.
pub fn is_enabled(document_type: DocumentType, enabled: &[DocumentType]) -> bool {
    document_type == DocumentType::Other || enabled.contains(&document_type)
}

/// Whether the file name ends in one of the document extensions.
pub fn has_document_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

/// List every document under `root`, recursively, in sorted depth-first order.
pub fn scan_documents(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>> {
    validate_root(root)?;

    let pattern = format!(
        "{}/**/*",
        Pattern::escape(&root.to_string_lossy()).trim_end_matches('/')
    );
    trace!("Scanning with pattern {}", pattern);

    let entries = glob(&pattern).map_err(|e| RetError::Scan(e.to_string()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .filter(|p| has_document_extension(p, &config.extensions))
        .filter(|p| is_enabled(DocumentType::classify(p), &config.enabled_types))
        .collect();
    files.sort();

    debug!("Found {} documents under {}", files.len(), root.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_scan_filters_extension_and_type() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "EAT/a.pdf");
        touch(root, "EAT/sub/b.PDF");
        touch(root, "EAT/notes.txt");
        touch(root, "Penalidades/c.pdf");
        touch(root, "TOP/d.pdf");
        touch(root, "Misc/e.pdf");

        let config = ScanConfig {
            enabled_types: vec![DocumentType::Eat],
            ..ScanConfig::default()
        };
        let files = scan_documents(root, &config).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();

        assert_eq!(names, vec!["EAT/a.pdf", "EAT/sub/b.PDF", "Misc/e.pdf"]);
    }

    #[test]
    fn test_scan_missing_root() {
        let err = scan_documents(Path::new("/nonexistent/ret-root"), &ScanConfig::default())
            .unwrap_err();
        assert!(matches!(err, RetError::Config(_)));
    }

    #[test]
    fn test_empty_root_is_config_error() {
        assert!(matches!(validate_root(Path::new("")), Err(RetError::Config(_))));
    }

    #[test]
    fn test_is_enabled() {
        assert!(is_enabled(DocumentType::Other, &[]));
        assert!(!is_enabled(DocumentType::Penalty, &[DocumentType::Eat]));
        assert!(is_enabled(DocumentType::Penalty, &DocumentType::SELECTABLE));
    }
}
