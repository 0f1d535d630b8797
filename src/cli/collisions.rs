use clap::Args;

use crate::cli::{join_ids, target_json, target_label, target_row, IndexArgs, OutputFormat};
use crate::index::builder::BuildSummary;
use crate::index::registry::Collision;
use crate::index::store::MutationIndex;

#[derive(Args)]
pub struct CollisionsArgs {
    #[command(flatten)]
    pub index: IndexArgs,
}

pub fn run(args: CollisionsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (index, summary) = args.index.build_index()?;

    if verbose {
        eprintln!(
            "Indexed {} references ({} skipped) into {} fingerprints",
            summary.registered,
            summary.skipped.len(),
            summary.fingerprints
        );
    }

    let collisions = index.collisions();

    match format {
        OutputFormat::Text => print_text_collisions(&index, &summary, &collisions),
        OutputFormat::Json => print_json_collisions(&index, &summary, &collisions)?,
        OutputFormat::Tsv => print_tsv_collisions(&index, &collisions),
    }

    Ok(())
}

fn print_text_collisions(index: &MutationIndex, summary: &BuildSummary, collisions: &[Collision]) {
    println!("Fingerprint Collisions");
    println!("{}", "=".repeat(60));
    println!("\nReferences indexed: {}", summary.registered);
    if !summary.skipped.is_empty() {
        println!("References skipped (too short): {}", summary.skipped.len());
        for name in &summary.skipped {
            println!("  {name}");
        }
    }
    println!("Window length: {}", index.window_len());
    println!("Distinct fingerprints: {}", summary.fingerprints);
    println!("Shared fingerprints: {}", collisions.len());

    for collision in collisions {
        println!("\n{}", collision.fingerprint);
        for &target in &collision.targets {
            println!("  {}", target_row(index, target));
        }
    }
}

fn print_json_collisions(
    index: &MutationIndex,
    summary: &BuildSummary,
    collisions: &[Collision],
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "window": index.window_len(),
        "summary": summary,
        "collisions": collisions
            .iter()
            .map(|c| {
                serde_json::json!({
                    "fingerprint": c.fingerprint,
                    "targets": c.targets
                        .iter()
                        .map(|&t| target_json(index, t))
                        .collect::<Vec<_>>(),
                })
            })
            .collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_collisions(index: &MutationIndex, collisions: &[Collision]) {
    println!("fingerprint\ttarget_count\ttarget_ids\ttargets");
    for collision in collisions {
        let names: Vec<String> = collision
            .targets
            .iter()
            .map(|&t| target_label(index, t))
            .collect();
        println!(
            "{}\t{}\t{}\t{}",
            collision.fingerprint,
            collision.targets.len(),
            join_ids(&collision.targets),
            names.join(",")
        );
    }
}
