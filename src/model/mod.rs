pub mod ids;
pub mod member;
pub mod team;
pub mod schedule;
pub mod snapshot;

// Re-exports for convenience
pub use ids::Id;
pub use member::{Member, MemberStore};
pub use team::{team_label, team_labels, Team};
pub use schedule::{Match, Round};
pub use snapshot::{Snapshot, SnapshotData};
