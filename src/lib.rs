pub mod cli;
pub mod page;
pub mod ui;

pub use cli::{Args, CommandHandler};
pub use page::{FetchError, Page, PageSource, WikipediaSource};
