use super::job::ProcessSpec;
use crate::core::Ticks;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A complete simulation input.
///
/// ```yaml
/// quantum: 2
/// queue-capacity: 10
/// processes:
///   - { priority: high, burst-time: 5, arrival-time: 0 }
///   - { priority: low, burst-time: 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Workload {
    pub quantum: Ticks,
    #[serde(default)]
    pub queue_capacity: Option<usize>,
    #[serde(default)]
    pub processes: Vec<ProcessSpec>,
}

impl Workload {
    pub fn new(quantum: Ticks, processes: Vec<ProcessSpec>) -> Self {
        Self {
            quantum,
            queue_capacity: None,
            processes,
        }
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
        let workload: Self = serde_yaml::from_reader(reader)?;
        workload.validate()?;
        Ok(workload)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ConfigError::Open(path.to_owned(), e))?;

        Self::from_reader(file)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quantum == 0 {
            return Err(ConfigError::ZeroQuantum);
        }

        if let Some(index) = self.processes.iter().position(|p| p.burst_time == 0) {
            return Err(ConfigError::ZeroBurst(index + 1));
        }

        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't open {}", .0.display())]
    Open(PathBuf, #[source] std::io::Error),

    #[error("invalid workload file")]
    Parse(#[from] serde_yaml::Error),

    #[error("time quantum must be positive")]
    ZeroQuantum,

    #[error("time quantum is required unless a workload file is given")]
    MissingQuantum,

    #[error("process P{0} has a zero burst time")]
    ZeroBurst(usize),

    #[error("invalid process '{0}', expected CLASS:BURST[:ARRIVAL]")]
    BadProcess(String),

    #[error("unknown priority class '{0}', expected high or low")]
    UnknownClass(String),
}
