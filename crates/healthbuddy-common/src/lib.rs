pub mod actions;
pub mod errors;
pub mod id;

pub use actions::Action;
pub use errors::{ConfigError, HealthBuddyError};
pub use id::{new_id, SessionId};

pub type Result<T> = std::result::Result<T, HealthBuddyError>;
