pub mod pulse;
pub mod sinusoid;

pub use pulse::PulseTrain;
pub use sinusoid::Sinusoid;
