use log::{debug, error, info};
use rust_indexed_heaps::lazy_heap::HeapBackend;
use rust_indexed_heaps::ordered_set::OrderedSetBackend;
use rust_indexed_heaps::scan::ScanBackend;
use rust_indexed_heaps::workload::{replay, Observation, Workload, WorkloadConfig};
use rust_indexed_heaps::{IndexedQueue, PriorityQueue};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use crate::args::{Arguments, BackendKind, DemoArguments, ReplayArguments, SubCommandEnum};

mod args;

const DEMO_WORDS: [(&str, i32); 4] = [("hello", 4), ("hi", 2), ("world", 5), ("c++", 3)];

fn run_demo<Q: IndexedQueue<String, i32>>(kind: BackendKind) {
    let words = DEMO_WORDS.iter().map(|&(word, count)| (word.to_string(), count));
    let mut queue: PriorityQueue<String, i32, Q> = PriorityQueue::from_pairs(words);
    queue.insert_or_update("hello".to_string(), 0);
    queue.insert_or_update("c".to_string(), 2);

    println!("[{}]", kind.name());
    while let Some((word, count)) = queue.pop() {
        println!("{word} {count}");
    }
}

fn demo(args: DemoArguments) {
    let kinds = match args.backend {
        Some(kind) => vec![kind],
        None => BackendKind::ALL.to_vec(),
    };
    for kind in kinds {
        match kind {
            BackendKind::Heap => run_demo::<HeapBackend<String, i32>>(kind),
            BackendKind::OrderedSet => run_demo::<OrderedSetBackend<String, i32>>(kind),
            BackendKind::Scan => run_demo::<ScanBackend<String, i32>>(kind),
        }
    }
}

type Observations = Vec<Observation<u32, u32>>;

fn time_replay<Q: IndexedQueue<u32, u32>>(
    initial: &[(u32, u32)],
    workload: &Workload,
) -> (Observations, Duration) {
    let start = Instant::now();
    let mut queue = Q::from_pairs(initial.iter().copied());
    let observations = replay(&mut queue, &workload.ops);
    (observations, start.elapsed())
}

fn replay_all(args: ReplayArguments) -> ExitCode {
    let config = WorkloadConfig {
        num_ops: args.ops,
        num_keys: args.keys,
        max_value: args.max_value,
        seed: args.seed,
    };
    let workload = Workload::generate(&config);
    let initial = Workload::initial_pairs(&config, args.initial);
    debug!("generated {} ops over {} keys", workload.ops.len(), config.num_keys);

    let mut results: Vec<(BackendKind, Observations)> = Vec::new();
    for kind in BackendKind::ALL {
        if kind == BackendKind::Scan && args.skip_scan {
            continue;
        }
        let (observations, elapsed) = match kind {
            BackendKind::Heap => time_replay::<HeapBackend<u32, u32>>(&initial, &workload),
            BackendKind::OrderedSet => {
                time_replay::<OrderedSetBackend<u32, u32>>(&initial, &workload)
            }
            BackendKind::Scan => time_replay::<ScanBackend<u32, u32>>(&initial, &workload),
        };
        println!("{}: {}ms", kind.name(), elapsed.as_millis());
        results.push((kind, observations));
    }

    let Some((reference_kind, reference)) = results.first() else {
        return ExitCode::SUCCESS;
    };
    let mut agree = true;
    for (kind, observations) in &results[1..] {
        match observations.iter().zip(reference).position(|(a, b)| a != b) {
            Some(index) => {
                error!(
                    "{} diverged from {} at op {index}: {:?} vs {:?}",
                    kind.name(),
                    reference_kind.name(),
                    observations[index],
                    reference[index]
                );
                agree = false;
            }
            None => info!("{} agrees with {}", kind.name(), reference_kind.name()),
        }
    }

    if agree {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> ExitCode {
    let args: Arguments = argh::from_env();
    let mut log_builder = env_logger::builder();
    if args.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
    debug!("arguments: {args:#?}");

    match args.cmd {
        SubCommandEnum::Demo(demo_args) => {
            demo(demo_args);
            ExitCode::SUCCESS
        }
        SubCommandEnum::Replay(replay_args) => replay_all(replay_args),
    }
}
