pub mod stats;

pub use stats::RmsMath;
