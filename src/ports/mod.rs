//! Ports: trait boundaries between the aggregation core and the outside world.

pub mod exchange;
pub mod mocks;
pub mod sink;

pub use exchange::{PairIter, PairSource};
pub use sink::{SinkError, TableSink};
