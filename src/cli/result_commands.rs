use crate::cli::context::{CLIContext, Results};
use crate::model::team_labels;
use crate::ops::{schedule_ops, GenerationOutcome};

pub fn generate(ctx: &mut CLIContext) {
    if ctx.members.is_empty() {
        println!("Add some members first.");
        return;
    }

    if !ctx.generator.has_results() {
        println!("Picking teams...");
    }

    let outcome = ctx.runtime.block_on(ctx.generator.generate(
        ctx.members.members(),
        ctx.group_size,
        || {
            let yes = ctx.confirm("Clear previous results and pick teams again? [y/N] ");
            if yes {
                println!("Picking teams...");
            }
            yes
        },
    ));

    match outcome {
        GenerationOutcome::Busy => println!("Still picking teams, please wait."),
        GenerationOutcome::Declined => println!("Kept previous results."),
        GenerationOutcome::Completed(generation) => {
            if !generation.persisted {
                println!("Warning: results could not be saved.");
            }
            ctx.results = Some(Results {
                snapshot: generation.snapshot,
                dropped: generation.dropped,
            });
            show(ctx);
        }
    }
}

pub fn show(ctx: &CLIContext) {
    let Some(results) = &ctx.results else {
        println!("No results yet. Use 'generate' to pick teams.");
        return;
    };
    let snapshot = &results.snapshot;

    println!();
    println!("RESULTS");
    if snapshot.teams.is_empty() {
        println!("  No full team could be formed.");
    }
    for (i, team) in snapshot.teams.iter().enumerate() {
        let names: Vec<String> = team
            .members
            .iter()
            .map(|m| if m.is_star { format!("{} *", m.name) } else { m.name.clone() })
            .collect();
        println!("  Team {}: {}", i + 1, names.join(" | "));
    }
    if !results.dropped.is_empty() {
        let names: Vec<&str> = results.dropped.iter().map(|m| m.name.as_str()).collect();
        println!("  Sitting out: {}", names.join(", "));
    }

    if !snapshot.rounds.is_empty() {
        println!();
        println!("SCHEDULE");
        let labels = team_labels(snapshot.teams.len());
        for (i, round) in snapshot.rounds.iter().enumerate() {
            println!("  Round {}", i + 1);
            for m in round {
                println!("    {} vs {}", m.home, m.away);
            }
            if let Some(bye) = schedule_ops::bye_for(round, &labels) {
                println!("    ({} rests)", bye);
            }
        }
    }

    let store = ctx.generator.store();
    if let Ok(Some(saved_at)) = store.storage().updated_at(store.key()) {
        println!();
        println!("Saved {}", saved_at.format("%Y-%m-%d %H:%M UTC"));
    }
    println!();
}

pub fn clear(ctx: &mut CLIContext) {
    if !ctx.generator.has_results() {
        println!("Nothing to clear.");
        return;
    }
    if !ctx.confirm("Delete saved results? [y/N] ") {
        return;
    }
    match ctx.generator.store().clear() {
        Ok(()) => {
            ctx.results = None;
            println!("Results cleared.");
        }
        Err(e) => ctx.print_error(&e),
    }
}
