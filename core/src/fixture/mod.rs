pub mod case;
pub mod table;

pub use case::{Fixture, SignalSpec};
pub use table::builtin_table;
