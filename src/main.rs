use clap::{ArgAction, Parser};
use log::{LevelFilter, error};
use mlq_sim::{
    ProcessSpec, Sim, TraceEvent, Workload,
    core::Ticks,
    sim::{ConfigError, bernoulli_jobs},
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

mod logger;

/// Simulate two-level MLQ scheduling: high priority processes are served
/// round-robin and always preempt low priority ones, which run FCFS.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML workload file
    #[arg(long, value_name = "FILE", conflicts_with_all = ["process", "random"])]
    config: Option<PathBuf>,

    /// Round-robin time quantum for the high priority queue
    #[arg(short, long, value_name = "TICKS")]
    quantum: Option<Ticks>,

    /// A process to schedule, may be repeated; CLASS is high or low (1 or 2)
    #[arg(short, long, value_name = "CLASS:BURST[:ARRIVAL]")]
    process: Vec<ProcessSpec>,

    /// Generate a random workload spanning this many ticks
    #[arg(long, value_name = "TICKS", conflicts_with = "process")]
    random: Option<Ticks>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Bound both queues to this many processes
    #[arg(long, value_name = "N")]
    capacity: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    logger::init(match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let mut msg = e.to_string();
            let mut src = e.source();

            while let Some(e) = src {
                msg.push_str(&format!(" -> {e}"));
                src = e.source();
            }

            error!("{msg}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), ConfigError> {
    let mut workload = match &args.config {
        Some(path) => Workload::from_path(path)?,
        None => {
            let quantum = args.quantum.ok_or(ConfigError::MissingQuantum)?;
            let processes = match args.random {
                Some(ticks) => bernoulli_jobs(ticks, 0.3, 0.5, 0.3, 2, 6, args.seed),
                None => args.process,
            };
            Workload::new(quantum, processes)
        }
    };

    // Command line overrides the file
    if let Some(quantum) = args.quantum {
        workload.quantum = quantum;
    }
    if args.capacity.is_some() {
        workload.queue_capacity = args.capacity;
    }
    workload.validate()?;

    let mut sim = Sim::from_workload(&workload);

    while !sim.all_jobs_completed() {
        let now = sim.core.now();
        for event in sim.step() {
            match *event {
                TraceEvent::Executing {
                    process,
                    queue,
                    duration,
                } => println!("t={now} Executing P{process} from {queue} for {duration} ticks"),
                TraceEvent::Completed { process } => println!("t={now} P{process} completed"),
            }
        }
    }

    let report = sim.into_report();

    for id in &report.rejected {
        println!("P{id} was dropped: queue full");
    }
    println!("Total time elapsed: {} ticks", report.total_time_elapsed());
    println!("Final clock: {}", report.final_clock);
    if let Some(avg) = report.mean_response_time() {
        println!("Average response time: {avg:.2} ticks");
    }
    if let Some(avg) = report.mean_turnaround_time() {
        println!("Average turnaround time: {avg:.2} ticks");
    }

    Ok(())
}
