//! Command-line surface of the protminer binary.
//!
//! Every subcommand is a thin dispatch onto the library: convert finished
//! HMMER searches into result tables, filter and sort saved tables, and
//! inspect query-membership sets and the biome vocabulary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use protminer::biome::BiomeHierarchy;
use protminer::hmmer::{attach_similarity, read_alignments, read_domtbl};
use protminer::table::{Filters, MembershipMatrix, ProteinTable};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert HMMER search output into a results table
    Convert {
        /// Path to the --domtblout domain table
        #[arg(short, long)]
        domtbl: PathBuf,

        /// Full search output with alignment blocks; adds similarity and
        /// identity columns
        #[arg(short, long)]
        alignments: Option<PathBuf>,

        /// Path to the output table
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Filter a results table with a JSON filter document
    Filter {
        /// Path to the results table
        #[arg(short, long)]
        input: PathBuf,

        /// Filter document: an inline JSON object or a path to one
        #[arg(short, long)]
        filters: String,

        /// Biome vocabulary as id<TAB>lineage lines; defaults to the
        /// built-in MGnify vocabulary
        #[arg(short, long)]
        biomes: Option<PathBuf>,

        /// Path to the output table; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Sort a results table by one or more columns
    Sort {
        /// Path to the results table
        #[arg(short, long)]
        input: PathBuf,

        /// Column to sort by; repeat for secondary keys
        #[arg(short, long, required = true)]
        by: Vec<String>,

        /// Sort in descending order
        #[arg(short, long)]
        descending: bool,

        /// Path to the output table; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect which combinations of queries hit which targets
    Sets {
        /// Path to the results table
        #[arg(short, long)]
        input: PathBuf,

        /// Extract the rows of one set, named either "query1∩query2" or by
        /// its binary set id; lists all sets when omitted
        #[arg(short, long)]
        name: Option<String>,

        /// Path to the output table; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the biome vocabulary
    Biomes {
        /// Only lineages at or below this colon-separated path
        #[arg(short, long)]
        prefix: Option<String>,

        /// Biome vocabulary as id<TAB>lineage lines; defaults to the
        /// built-in MGnify vocabulary
        #[arg(short, long)]
        table: Option<PathBuf>,
    },
}

/// Main entry point for CLI
pub fn run_cli(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert {
            domtbl,
            alignments,
            output,
        } => {
            let mut table = read_domtbl(&domtbl)?;
            info!("parsed {} domain hits from {}", table.len(), domtbl.display());
            if let Some(path) = alignments {
                let scores = read_alignments(&path)?;
                table = attach_similarity(&table, &scores)?;
                info!("attached alignment scores to {} rows", table.len());
            }
            table.save(&output)?;
            println!("Wrote {} rows to {}", table.len(), output.display());
        }

        Commands::Filter {
            input,
            filters,
            biomes,
            output,
        } => {
            let table = ProteinTable::load(&input)?;
            let filters = read_filters(&filters)?;
            let hierarchy = load_hierarchy(biomes.as_deref())?;
            let picked = table.pick(&filters, &hierarchy)?;
            info!("{} of {} rows match", picked.len(), table.len());
            write_table(&picked, output.as_deref())?;
        }

        Commands::Sort {
            input,
            by,
            descending,
            output,
        } => {
            let table = ProteinTable::load(&input)?;
            let columns: Vec<&str> = by.iter().map(String::as_str).collect();
            let sorted = table.sort(&columns, !descending)?;
            write_table(&sorted, output.as_deref())?;
        }

        Commands::Sets {
            input,
            name,
            output,
        } => {
            let table = ProteinTable::load(&input)?;
            match name {
                Some(name) => {
                    let subset = table.get_set(&name)?;
                    info!("{} rows in set {}", subset.len(), name);
                    write_table(&subset, output.as_deref())?;
                }
                None => {
                    let matrix = MembershipMatrix::from_table(&table)?;
                    for (readable, set_id) in matrix.set_mapping() {
                        println!("{}\t{}", set_id, readable);
                    }
                }
            }
        }

        Commands::Biomes { prefix, table } => {
            let hierarchy = load_hierarchy(table.as_deref())?;
            match prefix {
                Some(prefix) => {
                    let wanted = hierarchy.ids_matching_prefix(&prefix);
                    for (id, path) in hierarchy.iter() {
                        if wanted.contains(&id) {
                            println!("{}\t{}", id, path);
                        }
                    }
                }
                None => {
                    for (id, path) in hierarchy.iter() {
                        println!("{}\t{}", id, path);
                    }
                }
            }
        }
    }

    Ok(())
}

// An inline JSON object is accepted directly, anything else is a path.
fn read_filters(text: &str) -> Result<Filters> {
    let document = if text.trim_start().starts_with('{') {
        text.to_string()
    } else {
        std::fs::read_to_string(text)
            .with_context(|| format!("failed to read filter document {text}"))?
    };
    Filters::from_json(&document).context("invalid filter document")
}

fn load_hierarchy(path: Option<&Path>) -> Result<BiomeHierarchy> {
    match path {
        Some(path) => BiomeHierarchy::from_tsv_path(path),
        None => Ok(BiomeHierarchy::builtin()),
    }
}

fn write_table(table: &ProteinTable, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            table.save(path)?;
            println!("Wrote {} rows to {}", table.len(), path.display());
        }
        None => table.save_to_writer(std::io::stdout().lock())?,
    }
    Ok(())
}
