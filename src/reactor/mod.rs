pub mod auto_reactor;
pub mod commands;
pub mod dispatcher;
pub mod filter;
pub mod reactable_message;
pub mod settings;
pub mod state;


// Re-export public API
pub use auto_reactor::AutoReactor;
pub use commands::Command;
pub use dispatcher::ReactionDispatcher;
pub use reactable_message::{MessageEventKind, ReactableMessage};
pub use state::ReactorState;
