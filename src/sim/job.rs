use super::config::ConfigError;
use crate::core::{PriorityClass, ProcessId, Ticks};
use rand::prelude::*;
use serde::Deserialize;
use std::str::FromStr;

/// One process as submitted, before an id is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProcessSpec {
    pub priority: PriorityClass,
    pub burst_time: Ticks,
    #[serde(default)]
    pub arrival_time: Ticks,
}

impl FromStr for PriorityClass {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" | "h" | "1" => Ok(Self::High),
            "low" | "l" | "2" => Ok(Self::Low),
            _ => Err(ConfigError::UnknownClass(s.to_owned())),
        }
    }
}

// CLASS:BURST[:ARRIVAL]
impl FromStr for ProcessSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ConfigError::BadProcess(s.to_owned());
        let mut fields = s.split(':');

        let priority: PriorityClass = fields.next().ok_or_else(bad)?.parse()?;
        let burst_time: Ticks = fields
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(bad)?;
        let arrival_time: Ticks = match fields.next() {
            Some(v) => v.parse().map_err(|_| bad())?,
            None => 0,
        };

        if fields.next().is_some() {
            return Err(bad());
        }

        Ok(Self {
            priority,
            burst_time,
            arrival_time,
        })
    }
}

/// Per-process outcome of a run. Clock values are the tick in which the
/// event was emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub id: ProcessId,
    pub spec: ProcessSpec,
    pub admitted: bool,
    pub first_dispatch: Option<Ticks>,
    pub completion: Option<Ticks>,
}

impl ProcessRecord {
    pub fn response_time(&self) -> Option<Ticks> {
        self.first_dispatch
            .map(|t| t.saturating_sub(self.spec.arrival_time))
    }

    pub fn turnaround_time(&self) -> Option<Ticks> {
        self.completion
            .map(|t| t.saturating_sub(self.spec.arrival_time))
    }
}

/// Bernoulli arrivals: at each of `ticks` ticks a process arrives with
/// probability `p_arrival`; it is high priority with probability `p_high` and
/// short with probability `p_short`.
pub fn bernoulli_jobs(
    ticks: Ticks,
    p_arrival: f64,
    p_high: f64,
    p_short: f64,
    short_ticks: Ticks,
    long_ticks: Ticks,
    seed: u64,
) -> Vec<ProcessSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut jobs = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let priority = if rng.random::<f64>() < p_high {
                PriorityClass::High
            } else {
                PriorityClass::Low
            };
            let burst_time = if rng.random::<f64>() < p_short {
                short_ticks
            } else {
                long_ticks
            };

            jobs.push(ProcessSpec {
                priority,
                burst_time,
                arrival_time: t,
            });
        }
    }

    jobs
}
