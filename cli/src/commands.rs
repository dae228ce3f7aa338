//! Command handlers. Results go to stdout, diagnostics to the log.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use tombola_crypto::{derive_seed, generate_seed};
use tombola_export::{export_audit, export_positions, position_records, read_manifest, write_manifest};
use tombola_participants::load_participants_file;
use tombola_selection::{recommended_algorithm, verify_outcome, SelectionOutcome, SelectionSession, Verification};
use tombola_types::Seed;

use crate::config::TombolaConfig;

pub struct SelectRequest {
    pub seed: Seed,
    pub items_file: PathBuf,
    pub positions: Option<usize>,
    pub output: Option<PathBuf>,
}

pub fn seed_generate() -> anyhow::Result<()> {
    println!("{}", generate_seed());
    Ok(())
}

pub fn seed_derive(text: &[String]) -> anyhow::Result<()> {
    let parts: Vec<&[u8]> = text.iter().map(|t| t.as_bytes()).collect();
    println!("{}", derive_seed(&parts));
    Ok(())
}

pub fn seed_check(encoded: &str) -> anyhow::Result<()> {
    let seed = Seed::from_hex(encoded).context("invalid seed")?;
    println!("{seed}");
    Ok(())
}

pub fn select(config: &TombolaConfig, request: SelectRequest) -> anyhow::Result<()> {
    let participants = load_participants_file(&request.items_file, &config.fields)
        .with_context(|| format!("loading participants from {}", request.items_file.display()))?;
    let algorithm = config
        .algorithm
        .unwrap_or_else(|| recommended_algorithm(&participants));

    tracing::info!(
        algorithm = %algorithm,
        participants = participants.len(),
        start_counter = config.start_counter,
        "starting draw"
    );

    let mut session = SelectionSession::new(
        request.seed,
        config.start_counter,
        participants.clone(),
        algorithm,
    )?;
    match request.positions {
        Some(count) => {
            session.assign_positions(count)?;
        }
        None => session.assign_all()?,
    }
    let outcome = session.outcome();

    print_outcome(&outcome);

    if let Some(base) = &request.output {
        let records = position_records(&outcome, &participants, &config.fields)?;
        export_positions(base, &config.formats, &records)
            .with_context(|| format!("exporting positions to {}", base.display()))?;
        export_audit(base, &config.formats, &outcome.audit)
            .with_context(|| format!("exporting audit log to {}", base.display()))?;
        write_manifest(base, &outcome)
            .with_context(|| format!("writing manifest to {}", base.display()))?;
    }
    Ok(())
}

pub fn verify(config: &TombolaConfig, manifest: &Path, items_file: &Path) -> anyhow::Result<()> {
    let published =
        read_manifest(manifest).with_context(|| format!("reading {}", manifest.display()))?;
    let participants = load_participants_file(items_file, &config.fields)
        .with_context(|| format!("loading participants from {}", items_file.display()))?;

    match verify_outcome(&published, participants)? {
        Verification::Match => {
            println!(
                "match: {} positions, counter {} -> {}",
                published.placements.len(),
                published.start_counter,
                published.final_counter
            );
            Ok(())
        }
        Verification::Mismatch { field, detail } => {
            bail!("replay differs from manifest in {field}: {detail}")
        }
    }
}

fn print_outcome(outcome: &SelectionOutcome) {
    for placement in &outcome.placements {
        match placement.winning_ticket {
            Some(ticket) => println!(
                "{}\t{}\tweight={}\tticket={}",
                placement.position, placement.id, placement.weight, ticket
            ),
            None => println!(
                "{}\t{}\tweight={}",
                placement.position, placement.id, placement.weight
            ),
        }
    }
    tracing::info!(
        algorithm = %outcome.algorithm,
        positions = outcome.placements.len(),
        participants = outcome.participant_count,
        duplicate_draws = outcome.duplicate_draws(),
        final_counter = outcome.final_counter,
        "draw complete"
    );
}
