//! Game session: the coordinator state machine and its cooperative timers.

pub mod builder;
pub mod clock;
pub mod coordinator;

pub use builder::GameBuilder;
pub use clock::{Countdown, GameClock};
pub use coordinator::{MatchCoordinator, Phase};
