use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "random-wiki")]
#[command(version)]
#[command(about = "Print the summary of a random Wikipedia page", long_about = None)]
pub struct Args {
    /// Language edition of Wikipedia
    #[arg(short, long, default_value = "en", value_name = "LANG")]
    pub language: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if self.language.trim().is_empty() {
            return Err("language code must not be empty".to_string());
        }
        Ok(())
    }
}
