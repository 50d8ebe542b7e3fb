use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use probeset::StringSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

const DEFAULT_CAPACITY: usize = 1 << 20;

#[derive(Parser, Debug)]
#[command(version, about = "Print unique lines, first occurrence wins", long_about = None)]
struct Args {
    /// Maximum number of distinct lines to track
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Input files; stdin when none are given
    paths: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let capacity = args.capacity.unwrap_or(DEFAULT_CAPACITY);
    let mut seen = StringSet::with_capacity(capacity);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut total = 0usize;
    if args.paths.is_empty() {
        let stdin = io::stdin();
        total += dedupe(&mut seen, stdin.lock(), &mut out, "<stdin>")?;
    } else {
        for path in &args.paths {
            let file = File::open(path).context(format!("failed to open {}", path))?;
            total += dedupe(&mut seen, BufReader::new(file), &mut out, path)?;
        }
    }
    out.flush()?;

    info!("{} lines read, {} unique", total, seen.len());
    Ok(())
}

fn dedupe<R: BufRead, W: Write>(
    seen: &mut StringSet,
    input: R,
    out: &mut W,
    name: &str,
) -> Result<usize> {
    let mut lines = 0usize;
    for line in input.lines() {
        let line = line.context(format!("failed to read {}", name))?;
        lines += 1;
        if seen.contains(&line) {
            continue;
        }
        writeln!(out, "{}", line)?;
        seen.insert(line)
            .context(format!("too many distinct lines (at {})", name))?;
    }
    debug!("{}: {} lines", name, lines);
    Ok(lines)
}
