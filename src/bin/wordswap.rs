use std::env;
use std::io::{self, BufWriter};

use tracing_subscriber::EnvFilter;

use wordswap::{process, Diagnostics, PairMap, TracingDiagnostics};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut diag = TracingDiagnostics;

    let pairs = match args.len() {
        2 => {
            let pairs = PairMap::load(&args[1], &mut diag);
            tracing::info!("loaded {} change pairs from {}", pairs.len(), args[1]);
            pairs
        }
        1 => {
            println!("No change pairs given.");
            PairMap::new()
        }
        _ => {
            println!("Too many arguments given.");
            PairMap::new()
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = process(stdin.lock(), BufWriter::new(stdout.lock()), &pairs) {
        diag.report(&err);
    }
}
