use std::io::{self, Write};

use tokio::runtime::Runtime;

use crate::db::SqliteStorage;
use crate::error::{PickerError, PickerResult};
use crate::model::{Member, MemberStore, SnapshotData};
use crate::ops::Generator;

/// Last draw shown in the results view.
pub struct Results {
    pub snapshot: SnapshotData,
    pub dropped: Vec<Member>,
}

pub struct CLIContext {
    pub generator: Generator<SqliteStorage>,
    pub runtime: Runtime,
    pub members: MemberStore,
    pub group_size: usize,
    pub results: Option<Results>,
}

/// Who a command is aimed at.
pub enum Target<'a> {
    Position(usize),
    Name(&'a str),
}

impl CLIContext {
    pub fn new(generator: Generator<SqliteStorage>, runtime: Runtime, group_size: usize) -> Self {
        Self {
            generator,
            runtime,
            members: MemberStore::new(),
            group_size,
            results: None,
        }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Yes/no question; anything but y/yes counts as no.
    pub fn confirm(&self, prompt: &str) -> bool {
        self.read_line(prompt)
            .map(|s| matches!(s.trim().to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false)
    }

    /// `#3` addresses the third listed member; anything else is a name.
    pub fn parse_target(args: &str) -> PickerResult<Target<'_>> {
        let args = args.trim();
        if args.is_empty() {
            return Err(PickerError::BlankField {
                field: "member".into(),
            });
        }
        match args.strip_prefix('#').map(|n| n.parse::<usize>()) {
            Some(Ok(position)) => Ok(Target::Position(position)),
            _ => Ok(Target::Name(args)),
        }
    }

    pub fn print_error(&self, e: &PickerError) {
        println!("Error: {}", e);
    }
}
