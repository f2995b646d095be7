pub mod rate_window_prune;
pub mod runner;

pub use rate_window_prune::RateWindowPruneJob;
pub use runner::JobRunner;
