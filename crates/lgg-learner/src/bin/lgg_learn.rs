//! Command-line learner: runs a JSON learning task and prints the hypothesis

use std::env;

use lgg_learner::{
    load_task, HypothesisJson, ObservationOutcome, ReductionStrategy, Resolver, ResolverConfig,
    Taxonomy,
};
use tracing::{info, Level};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <task.json> [options]", args[0]);
        eprintln!("\nOptions:");
        eprintln!("  --reduce               Reduce the hypothesis after each generalization");
        eprintln!("  --fixed-point          Repeat reduction passes until nothing is removed");
        eprintln!("  --no-taxonomy          Ignore the isa facts of the task");
        eprintln!("  --json                 Print the result as JSON");
        eprintln!("  --verbose              Log every observation");
        std::process::exit(1);
    }

    let filename = &args[1];
    let mut config = ResolverConfig::default();
    let mut use_taxonomy = true;
    let mut json_output = false;
    let mut verbose = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--reduce" => config.reduce = true,
            "--fixed-point" => {
                config.reduce = true;
                config.reduction = ReductionStrategy::FixedPoint;
            }
            "--no-taxonomy" => use_taxonomy = false,
            "--json" => json_output = true,
            "--verbose" => verbose = true,
            _ => {
                eprintln!("Unknown option: {}", args[i]);
            }
        }
        i += 1;
    }

    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let task = match load_task(filename) {
        Ok(task) => task,
        Err(e) => {
            eprintln!("Error reading '{}': {}", filename, e);
            std::process::exit(1);
        }
    };
    let (facts, samples) = task.into_parts();

    let taxonomy = if use_taxonomy && !facts.is_empty() {
        match Taxonomy::from_facts(&facts) {
            Ok(taxonomy) => Some(taxonomy),
            Err(e) => {
                eprintln!("Taxonomy error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    let mut resolver = Resolver::new().with_config(config);
    resolver.set_taxonomy(taxonomy);
    info!(
        samples = samples.len(),
        taxonomy_edges = resolver.taxonomy().map_or(0, Taxonomy::len),
        reduce = resolver.config().reduce,
        "learning task loaded"
    );

    let mut outcomes = Vec::with_capacity(samples.len());
    for (idx, sample) in samples.into_iter().enumerate() {
        match resolver.observe(sample) {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => {
                eprintln!("Sample {}: {}", idx, e);
                std::process::exit(1);
            }
        }
    }

    if json_output {
        let result = HypothesisJson::new(resolver.hypothesis(), &outcomes);
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing result: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let changes = outcomes.iter().filter(|o| o.changed_hypothesis()).count();
    let ignored = outcomes
        .iter()
        .filter(|o| matches!(o, ObservationOutcome::IgnoredNegative))
        .count();
    println!(
        "Processed {} samples ({} negative ignored, {} hypothesis changes)",
        outcomes.len(),
        ignored,
        changes
    );
    match resolver.hypothesis() {
        Some(hypothesis) => println!("Hypothesis: {}", hypothesis),
        None => println!("No hypothesis: no positive sample seen"),
    }
}
