use clap::Args;

use crate::cli::{join_ids, target_json, target_label, target_row, IndexArgs, OutputFormat};
use crate::core::hash::fingerprint;

#[derive(Args)]
pub struct QueryArgs {
    #[command(flatten)]
    pub index: IndexArgs,

    /// Observed window, exactly as long as the index window
    #[arg(required = true)]
    pub sequence: String,
}

pub fn run(args: QueryArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (index, summary) = args.index.build_index()?;

    if verbose {
        eprintln!(
            "Indexed {} references into {} fingerprints",
            summary.registered, summary.fingerprints
        );
    }

    let bases = args.sequence.trim().as_bytes();
    if bases.len() != index.window_len() {
        anyhow::bail!(
            "Query window has {} bases but the index window is {}",
            bases.len(),
            index.window_len()
        );
    }

    let fp = fingerprint(bases);
    let matches = index.lookup(fp);

    match format {
        OutputFormat::Text => {
            println!("Fingerprint: {fp}");
            if matches.is_empty() {
                println!("No matching references");
            } else {
                println!("Matching references ({}):", matches.len());
                for &target in matches {
                    println!("  {}", target_row(&index, target));
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "sequence": args.sequence.trim(),
                "fingerprint": fp,
                "matches": matches
                    .iter()
                    .map(|&t| target_json(&index, t))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            let names: Vec<String> = matches.iter().map(|&t| target_label(&index, t)).collect();
            println!("fingerprint\tmatch_count\ttarget_ids\tmatches");
            println!(
                "{}\t{}\t{}\t{}",
                fp,
                matches.len(),
                join_ids(matches),
                names.join(",")
            );
        }
    }

    Ok(())
}
