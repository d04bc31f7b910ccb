//! releve-finance: statement CSV reader and per-type summaries

pub mod statement;
pub mod summary;

pub use statement::{
    Imported, ImportedTransaction, RowPolicy, SkippedRow, StatementRow, normalize_row, normalize_rows,
    read_statement, read_statement_csv,
};
pub use summary::{Summary, Totals, TypeSummary};
