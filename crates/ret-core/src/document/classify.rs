//! Path and file-name classifiers.
//!
//! All matching is done on the upper-cased string, so `"eat"`, `"Eat"` and
//! `"EAT"` behave the same.

use std::path::Path;

use crate::models::record::{DocumentType, NoteKind, UNKNOWN_COMPANY};

impl DocumentType {
    /// Classify a document by substrings of its full path.
    ///
    /// Priority: `EAT`, then `PENALIDADE`, then `TOP`. The first hit wins.
    pub fn classify(path: &Path) -> Self {
        let upper = path.to_string_lossy().to_uppercase();

        if upper.contains("EAT") {
            DocumentType::Eat
        } else if upper.contains("PENALIDADE") {
            DocumentType::Penalty
        } else if upper.contains("TOP") {
            DocumentType::TakeoffPoint
        } else {
            DocumentType::Other
        }
    }
}

impl NoteKind {
    /// Classify a file name as a debit or credit note.
    ///
    /// Debit markers are checked first, so a name carrying both resolves to debit.
    pub fn classify(file_name: &str) -> Self {
        let upper = file_name.to_uppercase();

        if upper.contains("ND") || upper.contains("DEBITO") || upper.contains("DÉBITO") {
            NoteKind::Debit
        } else if upper.contains("NC") || upper.contains("CREDITO") || upper.contains("CRÉDITO") {
            NoteKind::Credit
        } else {
            NoteKind::Unknown
        }
    }
}

/// Find the first registry entry contained in the file name.
pub fn resolve_company<S: AsRef<str>>(file_name: &str, registry: &[S]) -> String {
    let upper = file_name.to_uppercase();

    registry
        .iter()
        .map(|c| c.as_ref())
        .find(|c| !c.is_empty() && upper.contains(&c.to_uppercase()))
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_COMPANY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::DEFAULT_COMPANIES;

    #[test]
    fn test_document_type_priority() {
        assert_eq!(DocumentType::classify(Path::new("RET/EAT/a.pdf")), DocumentType::Eat);
        assert_eq!(
            DocumentType::classify(Path::new("RET/TOP/Penalidades/EAT_x.pdf")),
            DocumentType::Eat
        );
        assert_eq!(
            DocumentType::classify(Path::new("RET/TOP/penalidade.pdf")),
            DocumentType::Penalty
        );
        assert_eq!(DocumentType::classify(Path::new("ret/top/x.pdf")), DocumentType::TakeoffPoint);
        assert_eq!(DocumentType::classify(Path::new("RET/outros/x.pdf")), DocumentType::Other);
    }

    #[test]
    fn test_document_type_matches_inside_words() {
        // "THEATRE" contains "EAT"
        assert_eq!(DocumentType::classify(Path::new("/home/theatre/x.pdf")), DocumentType::Eat);
        // "DESKTOP" contains "TOP"
        assert_eq!(DocumentType::classify(Path::new("/Desktop/x.pdf")), DocumentType::TakeoffPoint);
    }

    #[test]
    fn test_note_kind() {
        assert_eq!(NoteKind::classify("AMBEV_ND_123.pdf"), NoteKind::Debit);
        assert_eq!(NoteKind::classify("nota_debito.pdf"), NoteKind::Debit);
        assert_eq!(NoteKind::classify("nota_débito.pdf"), NoteKind::Debit);
        assert_eq!(NoteKind::classify("COPERGAS_NC_penalidade.pdf"), NoteKind::Credit);
        assert_eq!(NoteKind::classify("nota_crédito.pdf"), NoteKind::Credit);
        assert_eq!(NoteKind::classify("fatura.pdf"), NoteKind::Unknown);
    }

    #[test]
    fn test_note_kind_debit_wins() {
        assert_eq!(NoteKind::classify("ND_e_NC.pdf"), NoteKind::Debit);
        assert_eq!(NoteKind::classify("MONDELEZ_credito.pdf"), NoteKind::Debit);
    }

    #[test]
    fn test_resolve_company() {
        assert_eq!(resolve_company("copergas_nc.pdf", &DEFAULT_COMPANIES), "COPERGAS");
        assert_eq!(resolve_company("M Dias Branco ND.pdf", &DEFAULT_COMPANIES), "M DIAS BRANCO");
        assert_eq!(resolve_company("fatura.pdf", &DEFAULT_COMPANIES), UNKNOWN_COMPANY);
    }

    #[test]
    fn test_resolve_company_registry_order() {
        // Both CBA and CERVEJARIA appear; CBA comes first in the registry.
        assert_eq!(resolve_company("CERVEJARIA_CBA.pdf", &DEFAULT_COMPANIES), "CBA");

        let reversed = ["CERVEJARIA", "CBA"];
        assert_eq!(resolve_company("CERVEJARIA_CBA.pdf", &reversed), "CERVEJARIA");
    }
}
