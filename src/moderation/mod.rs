pub mod queue;

pub use queue::{ModerationError, ModerationQueue};
