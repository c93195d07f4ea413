pub mod reactions;
pub mod users;

pub use reactions::ReactionCommandService;
pub use users::{CreateUserCommand, UserCommandService};
