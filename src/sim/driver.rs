use super::{
    config::Workload,
    job::{ProcessRecord, ProcessSpec},
};
use crate::core::{MlqCore, Process, ProcessId, Ticks, Trace, TraceEvent};
use average::{Estimate, Mean};
use log::{info, warn};

pub struct Sim {
    pub core: MlqCore,
    // Indexed by id - 1
    pub jobs: Vec<ProcessRecord>,
    events: Vec<TraceEvent>,
    rejected: Vec<ProcessId>,
}

impl Sim {
    /// Assign ids in input order and admit every process to its queue.
    /// Processes that overflow a bounded queue are dropped and reported.
    pub fn new(specs: Vec<ProcessSpec>, quantum: Ticks, queue_capacity: Option<usize>) -> Self {
        let core = match queue_capacity {
            Some(capacity) => MlqCore::bounded(quantum, capacity),
            None => MlqCore::new(quantum),
        };

        let mut sim = Self {
            core,
            jobs: Vec::with_capacity(specs.len()),
            events: Vec::new(),
            rejected: Vec::new(),
        };

        for (index, spec) in specs.into_iter().enumerate() {
            let id = ProcessId::try_from(index + 1).expect("Too many processes for a ProcessId");
            let process = Process::new(id, spec.priority, spec.burst_time, spec.arrival_time);

            let admitted = match sim.core.admit(process) {
                Ok(()) => true,
                Err(e) => {
                    warn!("{e}");
                    sim.rejected.push(id);
                    false
                }
            };

            sim.jobs.push(ProcessRecord {
                id,
                spec,
                admitted,
                first_dispatch: None,
                completion: None,
            });
        }

        info!(
            "admitted {} processes ({} rejected), quantum {}",
            sim.jobs.len() - sim.rejected.len(),
            sim.rejected.len(),
            quantum
        );

        sim
    }

    pub fn from_workload(workload: &Workload) -> Self {
        Self::new(
            workload.processes.clone(),
            workload.quantum,
            workload.queue_capacity,
        )
    }

    /// Run one tick and return the events it produced. Does nothing once both
    /// queues are empty.
    pub fn step(&mut self) -> &[TraceEvent] {
        if self.all_jobs_completed() {
            return &[];
        }

        let now = self.core.now();
        let events = self.core.tick();

        for event in &events {
            let job = &mut self.jobs[event.process() as usize - 1];
            match event {
                TraceEvent::Executing { .. } => {
                    job.first_dispatch.get_or_insert(now);
                }
                TraceEvent::Completed { .. } => job.completion = Some(now),
            }
        }

        let start = self.events.len();
        self.events.extend(events);
        &self.events[start..]
    }

    pub fn all_jobs_completed(&self) -> bool {
        self.core.is_drained()
    }

    /// Run to completion. There is no tick limit: the clock eventually reaches
    /// every finite arrival time.
    pub fn run(mut self) -> SimReport {
        while !self.all_jobs_completed() {
            self.step();
        }
        self.into_report()
    }

    pub fn into_report(self) -> SimReport {
        info!(
            "finished at t={} after {} ticks of execution",
            self.core.now(),
            self.core.time_elapsed()
        );

        SimReport {
            trace: Trace {
                events: self.events,
                total_time_elapsed: self.core.time_elapsed(),
            },
            final_clock: self.core.now(),
            processes: self.jobs,
            rejected: self.rejected,
        }
    }

    pub fn jobs_map<T>(&self, f: impl Fn(&ProcessRecord) -> T) -> impl Iterator<Item = T> {
        self.jobs.iter().map(f)
    }
}

#[derive(Debug, Clone)]
pub struct SimReport {
    pub trace: Trace,
    // Value of the tick counter when both queues emptied
    pub final_clock: Ticks,
    pub processes: Vec<ProcessRecord>,
    pub rejected: Vec<ProcessId>,
}

impl SimReport {
    pub fn events(&self) -> &[TraceEvent] {
        &self.trace.events
    }

    pub fn total_time_elapsed(&self) -> Ticks {
        self.trace.total_time_elapsed
    }

    pub fn executed_time(&self, process: ProcessId) -> Ticks {
        self.trace.executed_time(process)
    }

    pub fn completion_order(&self) -> Vec<ProcessId> {
        self.trace.completion_order()
    }

    /// Mean of (first dispatch - arrival) over completed processes.
    pub fn mean_response_time(&self) -> Option<f64> {
        mean(self.processes.iter().filter_map(|p| p.response_time()))
    }

    pub fn mean_turnaround_time(&self) -> Option<f64> {
        mean(self.processes.iter().filter_map(|p| p.turnaround_time()))
    }
}

fn mean(iter: impl Iterator<Item = Ticks>) -> Option<f64> {
    let mean: Mean = iter.map(|t| t as f64).collect();
    if mean.is_empty() {
        None
    } else {
        Some(mean.estimate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PriorityClass, QueueLevel};

    fn spec(priority: PriorityClass, burst_time: Ticks, arrival_time: Ticks) -> ProcessSpec {
        ProcessSpec {
            priority,
            burst_time,
            arrival_time,
        }
    }

    #[test]
    fn ids_follow_input_order() {
        let sim = Sim::new(
            vec![
                spec(PriorityClass::Low, 1, 0),
                spec(PriorityClass::High, 1, 0),
                spec(PriorityClass::Low, 1, 0),
            ],
            2,
            None,
        );
        let ids: Vec<_> = sim.jobs_map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(sim.core.queue(QueueLevel::Q2).len(), 2);
        assert_eq!(sim.core.queue(QueueLevel::Q1).peek_front().map(|p| p.id), Some(2));
    }

    #[test]
    fn step_records_dispatch_and_completion_ticks() {
        let mut sim = Sim::new(
            vec![
                spec(PriorityClass::Low, 4, 0),
                spec(PriorityClass::High, 3, 2),
            ],
            2,
            None,
        );

        assert_eq!(sim.step().len(), 2);
        assert!(sim.step().is_empty());
        assert_eq!(sim.step().len(), 3);
        assert!(sim.all_jobs_completed());
        assert!(sim.step().is_empty());

        let report = sim.into_report();
        assert_eq!(report.final_clock, 3);
        assert_eq!(report.total_time_elapsed(), 7);
        assert_eq!(report.processes[0].first_dispatch, Some(0));
        assert_eq!(report.processes[0].completion, Some(0));
        assert_eq!(report.processes[1].response_time(), Some(0));
        assert_eq!(report.processes[1].turnaround_time(), Some(0));
        assert_eq!(report.mean_turnaround_time(), Some(0.0));
    }

    #[test]
    fn overflowed_processes_are_dropped_and_reported() {
        let report = Sim::new(
            vec![
                spec(PriorityClass::High, 2, 0),
                spec(PriorityClass::High, 2, 0),
                spec(PriorityClass::Low, 2, 0),
            ],
            1,
            Some(1),
        )
        .run();

        assert_eq!(report.rejected, vec![2]);
        assert!(!report.processes[1].admitted);
        assert_eq!(report.processes[1].completion, None);
        assert_eq!(report.completion_order(), vec![1, 3]);
        assert_eq!(report.executed_time(2), 0);
        assert_eq!(report.total_time_elapsed(), 4);
    }

    #[test]
    fn empty_workload() {
        let report = Sim::new(Vec::new(), 3, None).run();
        assert!(report.events().is_empty());
        assert_eq!(report.total_time_elapsed(), 0);
        assert_eq!(report.final_clock, 0);
        assert_eq!(report.mean_response_time(), None);
    }
}
