use clap::Args;

use crate::cli::{join_ids, target_json, target_label, IndexArgs, OutputFormat};
use crate::core::types::TargetId;
use crate::index::store::{variants, MutationIndex};
use crate::index::variant::{Edit, Variant};

#[derive(Args)]
pub struct VariantsArgs {
    #[command(flatten)]
    pub index: IndexArgs,

    /// Name of the reference to expand
    #[arg(short, long, required = true)]
    pub name: String,
}

pub fn run(args: VariantsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let references = args.index.load_references()?;
    let (position, reference) = references
        .iter()
        .enumerate()
        .find(|(_, r)| r.name == args.name)
        .ok_or_else(|| anyhow::anyhow!("Reference '{}' not found in input", args.name))?;

    // The builder numbers targets by input position
    let target = TargetId::new(position as u32);
    let (index, _) = args.index.build_from(&references);
    let (origin, variants) = variants(&reference.sequence, index.config())?;

    if verbose {
        eprintln!(
            "Reference {} ({}): {} variants",
            reference.name,
            target,
            variants.len()
        );
    }

    match format {
        OutputFormat::Text => print_text_variants(&index, target, origin, &variants),
        OutputFormat::Json => print_json_variants(&index, target, origin, &variants)?,
        OutputFormat::Tsv => print_tsv_variants(&index, target, &variants),
    }

    Ok(())
}

fn describe(edit: &Edit) -> String {
    match *edit {
        Edit::Substitution { position, base } => format!("sub {position}{base}"),
        Edit::DoubleSubstitution { first, second } => {
            format!("sub {}{} + {}{}", first.0, first.1, second.0, second.1)
        }
        Edit::Deletion { position } => format!("del {position}"),
        Edit::Insertion { position, base } => format!("ins {position}{base}"),
    }
}

/// Other targets sharing `fingerprint` with `target`
fn shared_with(index: &MutationIndex, target: TargetId, fingerprint: i64) -> Vec<TargetId> {
    index
        .lookup(fingerprint)
        .iter()
        .copied()
        .filter(|&t| t != target)
        .collect()
}

fn print_text_variants(
    index: &MutationIndex,
    target: TargetId,
    origin: i64,
    variants: &[Variant],
) {
    println!("Variants of {} ({})", target_label(index, target), target);
    println!("{}", "=".repeat(60));
    println!("\nOrigin fingerprint: {origin}");
    println!("Variants: {}\n", variants.len());

    for variant in variants {
        let shared: Vec<String> = shared_with(index, target, variant.fingerprint)
            .into_iter()
            .map(|t| format!("{} ({})", target_label(index, t), t))
            .collect();
        if shared.is_empty() {
            println!("{}\t{}", variant.fingerprint, describe(&variant.edit));
        } else {
            println!(
                "{}\t{}\tshared with {}",
                variant.fingerprint,
                describe(&variant.edit),
                shared.join(", ")
            );
        }
    }
}

fn print_json_variants(
    index: &MutationIndex,
    target: TargetId,
    origin: i64,
    variants: &[Variant],
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "target": target_json(index, target),
        "origin": origin,
        "variants": variants
            .iter()
            .map(|v| serde_json::json!({
                "fingerprint": v.fingerprint,
                "edit": v.edit,
                "shared_with": shared_with(index, target, v.fingerprint)
                    .into_iter()
                    .map(|t| target_json(index, t))
                    .collect::<Vec<_>>(),
            }))
            .collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_variants(index: &MutationIndex, target: TargetId, variants: &[Variant]) {
    println!("fingerprint\tedit\tshared_ids\tshared_with");
    for variant in variants {
        let shared = shared_with(index, target, variant.fingerprint);
        let names: Vec<String> = shared.iter().map(|&t| target_label(index, t)).collect();
        println!(
            "{}\t{}\t{}\t{}",
            variant.fingerprint,
            describe(&variant.edit),
            join_ids(&shared),
            names.join(",")
        );
    }
}
