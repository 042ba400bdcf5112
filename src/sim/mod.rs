pub mod config;
pub mod driver;
pub mod job;

pub use config::{ConfigError, Workload};
pub use driver::{Sim, SimReport};
pub use job::{ProcessRecord, ProcessSpec, bernoulli_jobs};
