pub mod context;
pub mod member_commands;
pub mod result_commands;

use tracing::info;

use crate::config::Config;
use crate::db::{SlotStorage, SnapshotStore, SqliteStorage};
use crate::error::PickerResult;
use crate::model::{MemberStore, Snapshot};
use crate::ops::Generator;
use context::{CLIContext, Results};

/// Run the interactive REPL.
pub fn run(config: &Config) -> PickerResult<()> {
    let db_path = config.db_path()?;
    let storage = SqliteStorage::open(&db_path)?;
    info!(path = %db_path.display(), "storage opened");

    let store = SnapshotStore::with_key(storage, config.slot.clone());
    let mut generator = Generator::new(store, config.delay());
    if let Some(seed) = config.seed {
        generator = generator.with_seed(seed);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let mut ctx = CLIContext::new(generator, runtime, config.size);
    restore(&mut ctx);

    println!("Team Picker");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    repl_loop(&mut ctx);
    Ok(())
}

/// Picks up members and results from the last saved draw.
fn restore(ctx: &mut CLIContext) {
    let (members, results) = restored_state(ctx.generator.store());
    if let Some(results) = &results {
        println!(
            "Loaded previous results: {} members, {} teams.",
            results.snapshot.members.len(),
            results.snapshot.teams.len()
        );
    }
    ctx.members = members;
    ctx.results = results;
}

/// Member list and results view as they stood after the last saved draw.
/// Nothing usable in the slot means an empty start.
pub fn restored_state<S: SlotStorage>(store: &SnapshotStore<S>) -> (MemberStore, Option<Results>) {
    match store.load() {
        Snapshot::Present(data) => (
            MemberStore::from_members(data.members.clone()),
            Some(Results {
                snapshot: data,
                dropped: Vec::new(),
            }),
        ),
        Snapshot::Empty => (MemberStore::new(), None),
    }
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            "members" | "list" | "ls" => member_commands::list(ctx),
            "add" => member_commands::add(ctx, args),
            "remove" | "rm" => member_commands::remove(ctx, args),
            "star" => member_commands::star(ctx, args),
            "size" => member_commands::size(ctx, args),

            "generate" | "go" => result_commands::generate(ctx),
            "results" | "show" => result_commands::show(ctx),
            "clear-results" => result_commands::clear(ctx),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  Members:
    add <a, b, c>           Add members (comma separated)
    members                 List members
    remove <name | #n>      Remove everyone with that name, or the nth member
    star <name | #n>        Toggle star on everyone with that name, or the nth member
    size [n]                Show or set members per team

  Teams:
    generate                Pick random teams and a round-robin schedule
    results                 Show the last result
    clear-results           Delete the saved result

  Other:
    help                    Show this help
    exit / quit / q         Exit

TIPS:
  - Starred members are spread out, at most one per team
  - Members who don't fit into a full team sit out"#);
}
