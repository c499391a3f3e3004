//! Pair Tables
//!
//! `ExchangeTable` holds one exchange's pairs keyed by unified name;
//! `UnifiedTable` is the outer-joined result across all configured exchanges.

use std::collections::{BTreeMap, HashMap};

use crate::domain::pair::PairRecord;

/// Mapping from unified key (`base/quote`) to the exchange-specific symbol,
/// for exactly one exchange.
///
/// Built fresh from an adapter's record sequence on every load. If an
/// exchange lists the same base/quote combination under several symbols,
/// the last record wins (known limitation; the replacement is logged at
/// debug level).
#[derive(Debug, Clone)]
pub struct ExchangeTable {
    exchange: String,
    symbols: HashMap<String, String>,
}

impl ExchangeTable {
    /// Materialize an adapter's record sequence into a keyed table.
    pub fn from_records(exchange: &str, records: impl Iterator<Item = PairRecord>) -> Self {
        let mut symbols = HashMap::new();
        for record in records {
            let key = record.unified_key();
            if let Some(previous) = symbols.insert(key.clone(), record.symbol) {
                tracing::debug!(
                    "{}: duplicate pair {}, replacing symbol {}",
                    exchange,
                    key,
                    previous
                );
            }
        }
        Self {
            exchange: exchange.to_string(),
            symbols,
        }
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// The run's single output artifact: one row per unified pair name, one
/// optional symbol slot per configured exchange.
///
/// Columns follow join order (= configuration order); rows are sorted by
/// unified key, so repeated runs over identical listings produce identical
/// output. `None` in a slot means that exchange does not list the pair.
#[derive(Debug, Clone, Default)]
pub struct UnifiedTable {
    exchanges: Vec<String>,
    rows: BTreeMap<String, Vec<Option<String>>>,
}

impl UnifiedTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one exchange's table in via full outer join on the unified key.
    ///
    /// Keys only on one side keep the other side's slots `None`; keys on
    /// both sides merge. Appends one column, in call order.
    pub fn join(&mut self, table: ExchangeTable) {
        let column = self.exchanges.len();
        self.exchanges.push(table.exchange);
        for slots in self.rows.values_mut() {
            slots.push(None);
        }
        for (key, symbol) in table.symbols {
            let slots = self
                .rows
                .entry(key)
                .or_insert_with(|| vec![None; column + 1]);
            slots[column] = Some(symbol);
        }
    }

    /// Column names, in join order.
    pub fn exchanges(&self) -> &[String] {
        &self.exchanges
    }

    /// Rows in sorted unified-key order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Option<String>])> {
        self.rows
            .iter()
            .map(|(key, slots)| (key.as_str(), slots.as_slice()))
    }

    /// Slots for one unified key, in column order.
    pub fn get(&self, key: &str) -> Option<&[Option<String>]> {
        self.rows.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// (rows, columns) of the final table.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.exchanges.len())
    }
}
