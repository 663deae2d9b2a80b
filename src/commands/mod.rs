//! Command implementations

pub mod check;
pub mod simple;
pub mod simulate;

pub use check::{CheckResult, check_guess};
pub use simple::run_simple;
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
