use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use montage_reader::{
    BlockOutcome, DecodedBlock, EntryContent, LiveSetPage, MontageReader, BLOCK_SPECS,
};

#[derive(Parser, Debug)]
#[command(name = "montage-reader", version, about = "Prints the live sets of a Yamaha Montage file")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Block types to print (see below), followed by the Montage file
    #[arg(required = true, num_args = 1.., value_name = "ITEM... FILE")]
    args: Vec<String>,

    /// Log decoding details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn block_help() -> String {
    let mut help = String::from("Block types:\n");
    for spec in BLOCK_SPECS {
        help.push_str(&format!("   {}    {}\n", spec.abbrev, spec.name.to_lowercase()));
    }
    help.push_str("\nWith no block types, every block type is printed.");
    help
}

fn main() -> ExitCode {
    let matches = Cli::command().after_help(block_help()).get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // clap guarantees at least one argument; the last one is the file.
    let (file, items) = cli
        .args
        .split_last()
        .context("missing Montage file argument")?;
    let path = Path::new(file);

    let reader = MontageReader::open(path)?;
    let outcomes = reader
        .run(items)
        .with_context(|| format!("failed to decode {}", path.display()))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.clone());
    println!("{}\n", file_name);

    for outcome in &outcomes {
        match outcome {
            BlockOutcome::Decoded(block) => print_block(block),
            BlockOutcome::Skipped(reason) => println!("{}\n", reason),
        }
    }

    println!(
        "\n(Montage File v{}, montage-reader v{})\n",
        reader.version(),
        env!("CARGO_PKG_VERSION")
    );
    Ok(())
}

fn print_block(block: &DecodedBlock) {
    println!("{}", block.spec.name);
    for entry in &block.entries {
        match &entry.content {
            EntryContent::LiveSet(pages) => {
                println!("{}", entry.name);
                for page in pages {
                    print_page(page);
                }
            }
            EntryContent::Performance(perf) => println!("{} {}", entry.name, perf.data_len),
            EntryContent::Empty => println!("{}", entry.name),
        }
    }
}

fn print_page(page: &LiveSetPage) {
    println!("   {}", page.name);
    for slot in &page.slots {
        if slot.present {
            let raw = slot.raw();
            println!(
                "      {:5}{:3}: {:3} {:3} {:3} {:3} {:3}",
                slot.bank(),
                slot.program_number(),
                raw[0],
                raw[1],
                raw[2],
                raw[3],
                raw[4]
            );
        } else {
            println!("      ---");
        }
    }
}
