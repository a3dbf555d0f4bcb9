use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{error, info};
use preproinsulin::config::{DATA_DIR_ENV, DEFAULT_DATA_DIR, DEFAULT_RAW_INPUT, RAW_INPUT_ENV};
use preproinsulin::seq_analysis::protein::segments::PREPROINSULIN_LEN;
use preproinsulin::workspace::{self, CLEAN_FILE};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "insulin")]
#[command(version)]
#[command(about = "Clean, split, weigh and charge human preproinsulin", long_about = None)]
struct Cli {
    /// Data directory (falls back to INSULIN_DATA_DIR, then ./data)
    #[arg(long, value_name = "DIR", global = true, env = DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Strip NCBI markup from a raw record
    Clean {
        /// Raw record (falls back to INSULIN_RAW_INPUT, then ./preproinsulin_seq.txt)
        #[arg(short, long, value_name = "FILE", env = RAW_INPUT_ENV, default_value = DEFAULT_RAW_INPUT)]
        input: PathBuf,

        /// Expected residue count; a mismatch is only a warning
        #[arg(long, default_value_t = PREPROINSULIN_LEN)]
        expected_len: usize,
    },
    /// Split the cleaned precursor into leader, B-chain, C-peptide and A-chain
    Split {
        /// Print the segments without writing segment files
        #[arg(long, action = ArgAction::SetTrue)]
        no_write: bool,
    },
    /// Rough molecular weight of insulin (B + A)
    Weight,
    /// Net charge of insulin (B + A) over pH 0-14
    Charge,
    /// Run clean, split, weight and charge in sequence
    Run {
        /// Raw record (falls back to INSULIN_RAW_INPUT, then ./preproinsulin_seq.txt)
        #[arg(short, long, value_name = "FILE", env = RAW_INPUT_ENV, default_value = DEFAULT_RAW_INPUT)]
        input: PathBuf,
    },
    /// Remove generated *_seq_clean.txt files from the data directory
    Reset {
        /// Delete without asking
        #[arg(short, long, action = ArgAction::SetTrue, conflicts_with = "list")]
        force: bool,

        /// Only list what would be deleted
        #[arg(short, long, action = ArgAction::SetTrue)]
        list: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let data_dir = cli.data_dir;

    match cli.command {
        Commands::Clean {
            input,
            expected_len,
        } => {
            workspace::clean_file(&input, &data_dir.join(CLEAN_FILE), Some(expected_len))
                .context("clean stage failed")?;
        }
        Commands::Split { no_write } => {
            let out_dir = if no_write { None } else { Some(data_dir.as_path()) };
            let parts = workspace::split_file(&data_dir.join(CLEAN_FILE), out_dir)
                .context("split stage failed")?;
            match parts {
                Some(parts) if no_write => {
                    for (kind, seq) in parts.iter() {
                        println!("{:<9} {}", kind.to_string(), seq);
                    }
                }
                Some(_) => {}
                None => info!("no segment files written"),
            }
        }
        Commands::Weight => {
            let report = workspace::weight_report(&data_dir).context("weight stage failed")?;
            print!("{}", report);
        }
        Commands::Charge => {
            let table = workspace::charge_report(&data_dir).context("charge stage failed")?;
            print!("{}", table);
        }
        Commands::Run { input } => {
            match workspace::run_pipeline(&input, &data_dir).context("pipeline failed")? {
                Some(out) => {
                    print!("{}", out.weight);
                    print!("{}", out.charge);
                }
                None => error!("pipeline stopped at the split stage"),
            }
        }
        Commands::Reset { force, list } => reset(&data_dir, force, list)?,
    }
    Ok(())
}

fn reset(data_dir: &Path, force: bool, list: bool) -> Result<()> {
    let files = workspace::find_generated(data_dir)?;
    if files.is_empty() {
        println!("Workspace is already clean. No generated files found.");
        return Ok(());
    }
    println!("Generated sequence files (*{}):", workspace::GENERATED_SUFFIX);
    for file in &files {
        println!("  {} ({} bytes)", file.path.display(), file.size);
    }
    println!("Total items: {}", files.len());
    if list {
        println!("(use --force to delete without confirmation)");
        return Ok(());
    }
    if !force && !confirm("Delete these files? (y/n): ")? {
        println!("No changes made. Workspace unchanged.");
        return Ok(());
    }

    let (deleted, errors) = workspace::remove_generated(&files);
    for e in &errors {
        error!("{}", e);
    }
    println!("Successfully deleted {} item(s).", deleted);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
