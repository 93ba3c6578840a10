pub mod member_ops;
pub mod team_ops;
pub mod schedule_ops;
pub mod generation_ops;

pub use generation_ops::{Generation, GenerationOutcome, Generator};
pub use team_ops::Partition;
