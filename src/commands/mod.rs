//! Text commands for the assistant bot.
//!
//! - **parser**: verb vocabulary and whitespace tokenizing
//! - **handlers**: one function per verb, plus the error-to-message translation
//! - **help**: usage strings and the help screen
//! - **assistant**: dispatch of a raw line against the owned address book

pub mod assistant;
pub mod handlers;
pub mod help;
pub mod parser;

pub use assistant::{Assistant, Outcome};
pub use handlers::render_error;
pub use help::show_help;
pub use parser::{parse_input, Command};
