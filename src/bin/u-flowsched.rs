//! Demo driver: solves the bundled sample instances and prints the results.
//!
//! `u-flowsched maxflow [-q N]` or `u-flowsched schedule [--rule ltf|fifo]`.
//! Set `U_FLOWSCHED_LOG=debug` to trace augmentations.

use std::process::ExitCode;

use clap::{Arg, ArgMatches, Command};
use u_flowsched::flow::EdmondsKarp;
use u_flowsched::scheduler::{CompletionScheduler, InputOrder};
use u_flowsched::{samples, Result};

fn make_parser() -> Command {
    Command::new("u-flowsched")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Max-flow and completion-time scheduling demos")
        .subcommand_required(true)
        .subcommand(
            Command::new("maxflow")
                .about("Solve the sample flow networks")
                .arg(
                    Arg::new("question")
                        .short('q')
                        .long("question")
                        .value_name("N")
                        .help("Only solve question N (1-4)")
                        .value_parser(clap::value_parser!(u64).range(1..=4)),
                ),
        )
        .subcommand(
            Command::new("schedule")
                .about("Sequence the sample triathlon contestants")
                .arg(
                    Arg::new("rule")
                        .short('r')
                        .long("rule")
                        .help("Sequencing rule")
                        .default_value("ltf")
                        .value_parser(["ltf", "fifo"]),
                ),
        )
}

fn run_maxflow(matches: &ArgMatches) -> Result<()> {
    let only = matches.get_one::<u64>("question").copied();
    let solver = EdmondsKarp::new();

    for (i, sample) in samples::coursework_networks()?.iter().enumerate() {
        if only.is_some_and(|q| q as usize != i + 1) {
            continue;
        }
        let result = solver.solve(&sample.network, sample.source, sample.sink)?;
        println!("== {} ==", sample.name);
        print!("{result}");
        println!("The maximum possible flow is: {}", result.total_flow());
        if let Some(cut) = result.min_cut() {
            let edges: Vec<String> = cut
                .edges
                .iter()
                .map(|e| format!("{} -> {}", e.from, e.to))
                .collect();
            println!("Minimum cut ({}): {}", cut.capacity, edges.join(", "));
        }
        println!();
    }
    Ok(())
}

fn run_schedule(matches: &ArgMatches) -> Result<()> {
    let scheduler = match matches.get_one::<String>("rule").map(String::as_str) {
        Some("fifo") => CompletionScheduler::new().with_rule(InputOrder),
        _ => CompletionScheduler::new(),
    };

    let schedule = scheduler.schedule(&samples::triathlon_jobs())?;
    println!("Sorted data ({}):", scheduler.rule_name());
    for c in &schedule.completions {
        println!(
            "  job {}: swim {}..{}, done at {}",
            c.job_id, c.stage1_start, c.stage1_end, c.completion
        );
    }
    println!("Total completion time: {}", schedule.makespan());
    if let Some(last) = schedule.critical_job() {
        println!("Last to finish: job {}", last.job_id);
    }
    Ok(())
}

fn main() -> ExitCode {
    if std::env::var("U_FLOWSCHED_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("U_FLOWSCHED_LOG")
            .write_style("U_FLOWSCHED_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let matches = make_parser().get_matches();
    let outcome = match matches.subcommand() {
        Some(("maxflow", sub)) => run_maxflow(sub),
        Some(("schedule", sub)) => run_schedule(sub),
        _ => Ok(()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
