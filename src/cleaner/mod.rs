pub mod engine;
pub mod remover;
pub mod report;

pub use engine::{run, CancelFlag, Engine, EngineState, RunOptions};
pub use remover::{RemovalMode, Remover};
pub use report::{Failure, Outcome, Report, Reporter};
