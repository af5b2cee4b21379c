pub mod args;
pub mod handler;

pub use args::Args;
pub use handler::CommandHandler;
