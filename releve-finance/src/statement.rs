//! Read bank statement CSV exports into normalized transactions.
//!
//! French banks export `;`-separated files, often Windows-1252 encoded, with a few
//! preamble lines before the header row:
//!
//!   Compte courant n° 01234567890;;;
//!   Date;Libellé;Débit euros;Crédit euros
//!   15/04/2013;PRLV EDF;45,30;
//!
//! Columns are found by header name: a date, a label, and either debit and/or
//! credit columns or a single signed amount column.

use anyhow::{Context, Result, bail};
use releve_core::{Currency, Normalizer, Transaction};
use serde::Serialize;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// One data row of a statement export, cells untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementRow {
    /// 1-based line in the source file
    pub line: u64,
    pub date: String,
    pub label: String,
    pub credit: String,
    pub debit: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    date: usize,
    label: usize,
    debit: Option<usize>,
    credit: Option<usize>,
    amount: Option<usize>,
}

impl Columns {
    /// `None` when the row is not a header (preamble or blank line).
    fn from_header(cells: &[String]) -> Option<Result<Self>> {
        let names: Vec<String> = cells.iter().map(|c| header_key(c)).collect();
        let find = |pred: fn(&str) -> bool| names.iter().position(|n| pred(n));

        let date = find(|n| n == "date" || n.starts_with("date "))?;
        let label = find(|n| {
            n.starts_with("libelle") || n == "label" || n == "description"
        })?;

        let cols = Columns {
            date,
            label,
            debit: find(|n| n.starts_with("debit")),
            credit: find(|n| n.starts_with("credit")),
            amount: find(|n| n.starts_with("montant") || n == "amount"),
        };
        if cols.debit.is_none() && cols.credit.is_none() && cols.amount.is_none() {
            return Some(Err(anyhow::anyhow!(
                "header has no debit, credit or amount column: {}",
                cells.join(" | ")
            )));
        }
        Some(Ok(cols))
    }

    fn row(&self, line: u64, cells: &[String]) -> StatementRow {
        let cell = |i: Option<usize>| {
            i.and_then(|i| cells.get(i))
                .map(|s| s.trim().to_string())
                .unwrap_or_default()
        };

        // a single amount column is signed, so it goes through the credit side
        let (credit, debit) = match (self.amount, self.credit, self.debit) {
            (Some(amount), None, None) => (cell(Some(amount)), String::new()),
            (_, credit, debit) => (cell(credit), cell(debit)),
        };

        StatementRow {
            line,
            date: cell(Some(self.date)),
            label: cell(Some(self.label)),
            credit,
            debit,
        }
    }
}

fn header_key(cell: &str) -> String {
    cell.trim()
        .to_lowercase()
        .replace(['é', 'è', 'ê'], "e")
}

/// Windows-1252 characters for bytes 0x80..=0x9F; the rest matches Latin-1.
/// Unassigned bytes keep their C1 control code.
const CP1252_HIGH: [char; 32] = [
    '€', '\u{81}', '‚', 'ƒ', '„', '…', '†', '‡', 'ˆ', '‰', 'Š', '‹', 'Œ', '\u{8d}', 'Ž', '\u{8f}',
    '\u{90}', '‘', '’', '“', '”', '•', '–', '—', '˜', '™', 'š', '›', 'œ', '\u{9d}', 'ž', 'Ÿ',
];

/// UTF-8 when valid, Windows-1252 otherwise
fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes
            .iter()
            .map(|&b| match b {
                0x80..=0x9f => CP1252_HIGH[usize::from(b - 0x80)],
                _ => char::from(b),
            })
            .collect(),
    }
}

/// Read statement rows from any reader.
/// Skips everything before the header row, and rows with an empty date.
pub fn read_statement<R: io::Read>(reader: R, delimiter: u8) -> Result<Vec<StatementRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut columns: Option<Columns> = None;
    let mut rows = Vec::new();

    for result in rdr.byte_records() {
        let record = result.context("reading statement CSV")?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let cells: Vec<String> = record.iter().map(decode).collect();

        let Some(cols) = columns else {
            if let Some(found) = Columns::from_header(&cells) {
                columns = Some(found.with_context(|| format!("line {line}"))?);
            }
            continue;
        };

        let row = cols.row(line, &cells);
        if row.date.is_empty() {
            continue;
        }
        rows.push(row);
    }

    if columns.is_none() {
        bail!("no header row with date and label columns found");
    }
    Ok(rows)
}

/// Read a statement export from disk.
pub fn read_statement_csv(path: impl AsRef<Path>, delimiter: u8) -> Result<Vec<StatementRow>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_statement(file, delimiter).with_context(|| format!("parsing {}", path.display()))
}

/// What to do with a row the normalizer rejects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// Record the row in [`Imported::skipped`] and go on
    #[default]
    Skip,
    /// Fail the whole import
    Abort,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportedTransaction {
    pub line: u64,
    pub currency: Currency,
    #[serde(flatten)]
    pub transaction: Transaction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct Imported {
    pub transactions: Vec<ImportedTransaction>,
    pub skipped: Vec<SkippedRow>,
}

impl Imported {
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().map(|t| &t.transaction)
    }
}

/// Normalize one row: date, label and amount.
pub fn normalize_row(row: &StatementRow, normalizer: &Normalizer<'_>) -> releve_core::Result<ImportedTransaction> {
    let mut transaction = normalizer.parse(row.date.as_str(), &row.label)?;
    transaction.set_amount(&row.credit, &row.debit)?;

    let money = if row.debit.is_empty() { &row.credit } else { &row.debit };
    Ok(ImportedTransaction {
        line: row.line,
        currency: Currency::from_text(money),
        transaction,
    })
}

/// Normalize all rows according to `policy`.
pub fn normalize_rows(rows: &[StatementRow], normalizer: &Normalizer<'_>, policy: RowPolicy) -> Result<Imported> {
    let mut imported = Imported::default();

    for row in rows {
        match normalize_row(row, normalizer) {
            Ok(txn) => imported.transactions.push(txn),
            Err(e) if policy == RowPolicy::Abort => {
                return Err(anyhow::Error::new(e).context(format!("line {}", row.line)));
            }
            Err(e) => {
                warn!(line = row.line, error = %e, "skipping statement row");
                imported.skipped.push(SkippedRow {
                    line: row.line,
                    reason: e.to_string(),
                });
            }
        }
    }

    debug!(
        parsed = imported.transactions.len(),
        skipped = imported.skipped.len(),
        "normalized statement rows"
    );
    Ok(imported)
}
