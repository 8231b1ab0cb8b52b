use std::{
    fs::{self, File},
    io::BufWriter,
    path::PathBuf,
    process,
    time::Instant,
};

use clap::{ArgAction, Parser};
use log::{error, info, LevelFilter};

use wordfreq::{ranked, write_csv, Document, FrequencyMap, WordFreqError};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Times a sequential word count against chunked parallel counts.
#[derive(Parser, Debug)]
#[command(name = "wordfreq", version)]
struct Args {
    /// Input text document (UTF-8)
    #[arg(value_name = "PATH")]
    input: PathBuf,

    /// Chunk counts for the parallel pass, one run each
    #[arg(
        short,
        long = "chunks",
        value_name = "K",
        value_parser = parse_chunk_count,
        default_values_t = [5usize, 10]
    )]
    chunks: Vec<usize>,

    /// Print the N most frequent words
    #[arg(long, value_name = "N", default_value_t = 0)]
    top: usize,

    /// Write every word and its count to a CSV file
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Fail if a parallel count differs from the sequential one
    #[arg(long)]
    verify: bool,

    /// Raise log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_chunk_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("chunk count must be at least 1".to_string()),
        Ok(k) => Ok(k),
        Err(e) => Err(e.to_string()),
    }
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&args) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), WordFreqError> {
    let text = fs::read_to_string(&args.input).map_err(|source| WordFreqError::Read {
        path: args.input.clone(),
        source,
    })?;

    let start = Instant::now();
    let doc = Document::new(&text);
    info!("tokenized {} tokens in {:?}", doc.len(), start.elapsed());

    let start = Instant::now();
    let sequential = doc.count_sequential();
    let elapsed = start.elapsed();
    println!("sequential: {:?} ({} distinct)", elapsed, sequential.len());

    for &k in &args.chunks {
        let start = Instant::now();
        let parallel = doc.count_parallel(k)?;
        let elapsed = start.elapsed();
        println!("parallel, {k} chunks: {:?} ({} distinct)", elapsed, parallel.len());
        if args.verify && parallel != sequential {
            return Err(WordFreqError::Mismatch { chunk_count: k });
        }
    }

    report(args, &sequential)
}

fn report(args: &Args, counts: &FrequencyMap) -> Result<(), WordFreqError> {
    if args.top == 0 && args.csv.is_none() {
        return Ok(());
    }
    let entries = ranked(counts);
    for entry in entries.iter().take(args.top) {
        println!("{}\t{}", entry.word, entry.count);
    }
    if let Some(path) = &args.csv {
        let file = File::create(path).map_err(|source| WordFreqError::Write {
            path: path.clone(),
            source,
        })?;
        write_csv(BufWriter::new(file), &entries)?;
        info!("wrote {} rows to {}", entries.len(), path.display());
    }
    Ok(())
}
