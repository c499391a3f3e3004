//! Domain layer: pair records and the tables built from them.

pub mod pair;
pub mod table;

pub use pair::PairRecord;
pub use table::{ExchangeTable, UnifiedTable};
