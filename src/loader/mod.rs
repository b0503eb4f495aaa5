//! Card database loading.
//!
//! The source is a tab-separated export: a header row naming the columns,
//! then one card per row. Rows that cannot become a card (no title,
//! duplicate title) are skipped with a warning; only a missing header row
//! is fatal.
//!
//! Logical columns: `Card Name`, `Type`, `Cost`, `Damage`, `Momentum`,
//! `Card Raw Game Text`, `Keywords` (comma-separated names), `Traits`
//! (comma-separated `Name` or `Name:Value`). Every column, those included,
//! is also preserved on the card after normalization.

pub mod keywords;

use log::warn;
use thiserror::Error;

use crate::cards::{Card, CardTable, CardType, ColumnValue, Keyword, Trait};

pub use keywords::parse_keyword_dictionary;

const COL_TITLE: &str = "Card Name";
const COL_TYPE: &str = "Type";
const COL_COST: &str = "Cost";
const COL_DAMAGE: &str = "Damage";
const COL_MOMENTUM: &str = "Momentum";
const COL_RAW_TEXT: &str = "Card Raw Game Text";
const COL_KEYWORDS: &str = "Keywords";
const COL_TRAITS: &str = "Traits";

/// Fatal load failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("card table input has no header row")]
    MissingHeader,
}

/// Per-row anomaly; the row is skipped, the load continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// Row with a blank `Card Name` cell.
    MissingTitle { line: usize },
    /// Row whose title is already in the table.
    DuplicateTitle { line: usize, title: String },
}

/// A loaded table plus the anomalies encountered.
#[derive(Debug, Default)]
pub struct TableLoad {
    pub table: CardTable,
    pub warnings: Vec<LoadWarning>,
}

/// Parse a tab-separated card database.
pub fn load_card_table(input: &str) -> Result<TableLoad, LoadError> {
    let mut lines = input
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .enumerate()
        .map(|(i, l)| (i + 1, l));

    let headers: Vec<&str> = loop {
        match lines.next() {
            None => return Err(LoadError::MissingHeader),
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((_, line)) => break line.split('\t').map(str::trim).collect(),
        }
    };

    let mut load = TableLoad::default();

    for (line_no, line) in lines {
        if line.trim().is_empty() {
            continue;
        }

        let cells: Vec<&str> = line.split('\t').collect();

        let title = cell(&headers, &cells, COL_TITLE).trim();
        if title.is_empty() {
            warn!("card table: row {line_no} has no title, skipping");
            load.warnings.push(LoadWarning::MissingTitle { line: line_no });
            continue;
        }

        let mut card = Card::new(title, CardType::from(cell(&headers, &cells, COL_TYPE)));
        card.cost = ColumnValue::parse(cell(&headers, &cells, COL_COST)).as_number();
        card.damage = ColumnValue::parse(cell(&headers, &cells, COL_DAMAGE)).as_number();
        card.momentum = ColumnValue::parse(cell(&headers, &cells, COL_MOMENTUM)).as_number();
        card.text.raw = cell(&headers, &cells, COL_RAW_TEXT).trim().to_string();
        card.text.keywords = parse_keywords(cell(&headers, &cells, COL_KEYWORDS));
        card.text.traits = parse_traits(cell(&headers, &cells, COL_TRAITS));

        for (header, value) in headers.iter().zip(cells.iter().copied()) {
            card.columns
                .insert((*header).to_string(), ColumnValue::parse(value));
        }

        if !load.table.insert(card) {
            warn!("card table: row {line_no} duplicates title {title:?}, skipping");
            load.warnings.push(LoadWarning::DuplicateTitle {
                line: line_no,
                title: title.to_string(),
            });
        }
    }

    Ok(load)
}

/// The cell under a named header, or `""` when the row is short or the
/// header is absent.
fn cell<'a>(headers: &[&str], cells: &[&'a str], name: &str) -> &'a str {
    headers
        .iter()
        .position(|h| *h == name)
        .and_then(|i| cells.get(i).copied())
        .unwrap_or("")
}

fn parse_keywords(cell: &str) -> smallvec::SmallVec<[Keyword; 4]> {
    cell.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Keyword::new)
        .collect()
}

fn parse_traits(cell: &str) -> smallvec::SmallVec<[Trait; 4]> {
    cell.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(':') {
            Some((name, value)) => Trait::new(name.trim()).with_value(value.trim()),
            None => Trait::new(entry),
        })
        .collect()
}
