use super::args::Args;
use crate::page::PageSource;
use crate::ui;
use colored::Colorize;
use std::io::Write;

/// Runs the fetch-and-print sequence against any `PageSource`.
pub struct CommandHandler {
    width: usize,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            width: ui::display_width(),
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn execute(
        &self,
        args: &Args,
        source: &dyn PageSource,
        out: &mut dyn Write,
    ) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        log::debug!("fetching random page for language edition '{}'", args.language);
        let page = source.fetch(&args.language)?;

        writeln!(out, "{}", page.title.green())?;
        writeln!(out, "{}", ui::fill(&page.extract, self.width))?;

        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{FetchError, Page};
    use clap::Parser;
    use std::cell::RefCell;

    struct FixedSource {
        page: Page,
    }

    impl PageSource for FixedSource {
        fn fetch(&self, _language: &str) -> Result<Page, FetchError> {
            Ok(self.page.clone())
        }
    }

    struct RecordingSource {
        requested: RefCell<Vec<String>>,
    }

    impl PageSource for RecordingSource {
        fn fetch(&self, language: &str) -> Result<Page, FetchError> {
            self.requested.borrow_mut().push(language.to_string());
            Ok(Page::new("Test", "A short summary."))
        }
    }

    struct FailingSource;

    impl PageSource for FailingSource {
        fn fetch(&self, _language: &str) -> Result<Page, FetchError> {
            Err(FetchError::Status(500))
        }
    }

    fn run(args: &[&str], source: &dyn PageSource) -> (anyhow::Result<()>, String) {
        colored::control::set_override(false);
        let args = Args::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let result = CommandHandler::new()
            .with_width(70)
            .execute(&args, source, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prints_title_then_extract() {
        let source = FixedSource {
            page: Page::new("Test", "A short summary."),
        };

        let (result, output) = run(&["random-wiki"], &source);

        assert!(result.is_ok());
        assert_eq!(output, "Test\nA short summary.\n");
    }

    #[test]
    fn test_output_is_deterministic_for_fixed_page() {
        let source = FixedSource {
            page: Page::new("Test", "A short summary."),
        };

        let (_, first) = run(&["random-wiki"], &source);
        let (_, second) = run(&["random-wiki"], &source);
        assert_eq!(first, second);
    }

    #[test]
    fn test_language_flag_reaches_source() {
        let source = RecordingSource {
            requested: RefCell::new(Vec::new()),
        };

        let (result, _) = run(&["random-wiki", "--language", "de"], &source);

        assert!(result.is_ok());
        assert_eq!(*source.requested.borrow(), vec!["de".to_string()]);
    }

    #[test]
    fn test_fetch_failure_writes_nothing() {
        let (result, output) = run(&["random-wiki"], &FailingSource);

        assert!(result.is_err());
        assert!(output.is_empty());
    }

    #[test]
    fn test_empty_language_fails_before_fetch() {
        let source = RecordingSource {
            requested: RefCell::new(Vec::new()),
        };

        let (result, _) = run(&["random-wiki", "-l", ""], &source);

        assert!(result.is_err());
        assert!(source.requested.borrow().is_empty());
    }

    #[test]
    fn test_long_extract_is_wrapped() {
        let extract = "word ".repeat(40);
        let source = FixedSource {
            page: Page::new("Test", extract.trim()),
        };

        let (_, output) = run(&["random-wiki"], &source);

        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("Test"));
        for line in lines {
            assert!(line.len() <= 70);
        }
    }
}
