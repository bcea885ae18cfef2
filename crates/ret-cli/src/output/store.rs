//! SQLite persistence of processed records.

use std::path::Path;

use rusqlite::{params, Connection};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use ret_core::Record;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS dados_ret (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tipo_encargo TEXT,
    empresa TEXT,
    nota_tipo TEXT,
    numero_nd TEXT,
    data_vencimento TEXT,
    valor_total REAL,
    quantidade REAL,
    valor_unitario REAL,
    arquivo TEXT,
    caminho TEXT,
    data_processamento TEXT
);
";

const INSERT: &str = "
INSERT INTO dados_ret (
    tipo_encargo, empresa, nota_tipo, numero_nd, data_vencimento,
    valor_total, quantidade, valor_unitario, arquivo, caminho, data_processamento
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
";

/// Append-only table of processed records.
///
/// Every save adds rows; earlier runs are never updated or removed.
pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    /// Open (or create) the database at `path` and ensure the table exists.
    pub fn open(path: &Path) -> rusqlite::Result<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> rusqlite::Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Insert all records in one transaction, stamped with `processed_at`.
    pub fn append(&mut self, records: &[Record], processed_at: &str) -> rusqlite::Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(INSERT)?;
            for record in records {
                stmt.execute(params![
                    record.document_type.label(),
                    record.company,
                    record.note_kind.label(),
                    record.note_number,
                    record.due_date,
                    to_real(record.total_value),
                    to_real(record.quantity),
                    to_real(record.unit_value),
                    record.file_name(),
                    record.source_path.to_string_lossy().into_owned(),
                    processed_at,
                ])?;
            }
        }
        tx.commit()?;

        debug!("Inserted {} rows into dados_ret", records.len());
        Ok(records.len())
    }

    pub fn count(&self) -> rusqlite::Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM dados_ret", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn to_real(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
