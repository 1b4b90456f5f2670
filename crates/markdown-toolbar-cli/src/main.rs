//! Applies one toolbar command to a markdown file, acting as the host for the
//! engine: it reads a fresh snapshot, expands line-oriented selections,
//! writes the whole result back in one go and reports the new selection.

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use markdown_toolbar_config::Config;
use markdown_toolbar_engine::{
    ContextDetector, FormatCmd, FormattingResult, ListType, MarkdownContext, Span,
    byte_to_utf16, is_valid_url, line_range_for_selection, utf16_to_byte_clamped,
};
use std::{fs, path::PathBuf, process};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Command {
    Bold,
    Italic,
    Code,
    Strikethrough,
    Link,
    List,
    Task,
    /// Print the markdown context around the selection as JSON
    Detect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ListTypeArg {
    Bullet,
    Numbered,
}

impl From<ListTypeArg> for ListType {
    fn from(arg: ListTypeArg) -> Self {
        match arg {
            ListTypeArg::Bullet => ListType::Bullet,
            ListTypeArg::Numbered => ListType::Numbered,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "markdown-toolbar", version, about = "Toggle markdown formatting in a file")]
struct Cli {
    #[arg(value_enum)]
    command: Command,

    /// Markdown file to format in place
    file: PathBuf,

    /// Selection start offset
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Selection end offset (defaults to --start)
    #[arg(long)]
    end: Option<usize>,

    /// Link target for the `link` command
    #[arg(long)]
    url: Option<String>,

    /// List marker style (defaults to the configured type)
    #[arg(long, value_enum)]
    list_type: Option<ListTypeArg>,

    /// Interpret and report offsets as UTF-16 code units instead of bytes
    #[arg(long)]
    utf16: bool,

    /// Print the new text instead of writing the file
    #[arg(long)]
    dry_run: bool,

    /// Config file (defaults to ~/.config/markdown-toolbar/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug)]
enum Outcome {
    Context(MarkdownContext),
    Formatted {
        result: FormattingResult,
        /// Selection in the caller's units (bytes or UTF-16).
        selection: Span,
    },
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let dry_run = cli.dry_run;
    match run(&cli) {
        Ok(outcome) => report(&outcome, dry_run),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn report(outcome: &Outcome, dry_run: bool) {
    match outcome {
        Outcome::Context(ctx) => match serde_json::to_string_pretty(ctx) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error: {e}"),
        },
        Outcome::Formatted { result, selection } => {
            if dry_run {
                println!("{}", result.text);
            }
            println!("selection: {}..{}", selection.start, selection.end);
            if let Some(url) = &result.extracted_url {
                println!("removed link to {url}");
            }
        }
    }
}

fn command_for(cli: &Cli, config: &Config) -> Result<Option<FormatCmd>> {
    let cmd = match cli.command {
        Command::Bold => FormatCmd::Bold,
        Command::Italic => FormatCmd::Italic,
        Command::Code => FormatCmd::Code,
        Command::Strikethrough => FormatCmd::Strikethrough,
        Command::Link => {
            if let Some(url) = &cli.url
                && !is_valid_url(url)
            {
                bail!("invalid link target: {url:?}");
            }
            FormatCmd::Link {
                url: cli.url.clone(),
            }
        }
        Command::List => FormatCmd::List(
            cli.list_type
                .map(ListType::from)
                .unwrap_or(config.lists.default_type),
        ),
        Command::Task => FormatCmd::Task,
        Command::Detect => return Ok(None),
    };
    Ok(Some(cmd))
}

fn run(cli: &Cli) -> Result<Outcome> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;

    let end = cli.end.unwrap_or(cli.start);
    let (start, end) = if cli.utf16 {
        (
            utf16_to_byte_clamped(&text, cli.start),
            utf16_to_byte_clamped(&text, end),
        )
    } else {
        (cli.start, end)
    };

    let Some(cmd) = command_for(cli, &config)? else {
        return Ok(Outcome::Context(
            ContextDetector::new().detect(&text, start, end),
        ));
    };

    let (start, end) = match cmd {
        FormatCmd::List(_) | FormatCmd::Task => {
            let lines = line_range_for_selection(&text, start, end);
            (lines.start, lines.end)
        }
        _ => (start, end),
    };

    let result = config.formatter().apply(&cmd, &text, start, end);
    log::info!(
        "{:?} on {}: selection {start}..{end} -> {}..{}",
        cli.command,
        cli.file.display(),
        result.selection_start,
        result.selection_end
    );

    if !cli.dry_run {
        fs::write(&cli.file, &result.text)
            .with_context(|| format!("Failed to write {}", cli.file.display()))?;
    }

    let selection = if cli.utf16 {
        Span::new(
            byte_to_utf16(&result.text, result.selection_start)?,
            byte_to_utf16(&result.text, result.selection_end)?,
        )
    } else {
        result.selection()
    };

    Ok(Outcome::Formatted { result, selection })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    struct Fixture {
        dir: TempDir,
        file: PathBuf,
    }

    impl Fixture {
        fn new(content: &str) -> Self {
            let dir = TempDir::new().unwrap();
            let file = dir.path().join("note.md");
            fs::write(&file, content).unwrap();
            Self { dir, file }
        }

        fn cli(&self, args: &[&str]) -> Cli {
            let missing_config = self.dir.path().join("no-config.toml");
            let mut argv = vec!["markdown-toolbar".to_string()];
            argv.extend(args.iter().map(|a| a.to_string()));
            argv.push(self.file.display().to_string());
            argv.push("--config".to_string());
            argv.push(missing_config.display().to_string());
            Cli::try_parse_from(argv).unwrap()
        }

        fn content(&self) -> String {
            fs::read_to_string(&self.file).unwrap()
        }
    }

    fn selection(outcome: &Outcome) -> Span {
        match outcome {
            Outcome::Formatted { selection, .. } => *selection,
            Outcome::Context(_) => panic!("expected a formatting outcome"),
        }
    }

    #[test]
    fn bold_rewrites_file() {
        let fx = Fixture::new("hello world");
        let outcome = run(&fx.cli(&["bold", "--start", "0", "--end", "11"])).unwrap();
        assert_eq!(fx.content(), "**hello world**");
        assert_eq!(selection(&outcome), Span::new(2, 13));
    }

    #[test]
    fn dry_run_leaves_file_alone() {
        let fx = Fixture::new("hello");
        run(&fx.cli(&["code", "--start", "0", "--end", "5", "--dry-run"])).unwrap();
        assert_eq!(fx.content(), "hello");
    }

    #[test]
    fn list_expands_caret_to_line() {
        let fx = Fixture::new("one\ntwo\nthree");
        run(&fx.cli(&["list", "--start", "5", "--list-type", "numbered"])).unwrap();
        assert_eq!(fx.content(), "one\n1. two\nthree");
    }

    #[test]
    fn link_removal_reports_url() {
        let fx = Fixture::new("[GitHub](https://github.com)");
        let outcome = run(&fx.cli(&["link", "--start", "3"])).unwrap();
        assert_eq!(fx.content(), "GitHub");
        match outcome {
            Outcome::Formatted { result, .. } => {
                assert_eq!(result.extracted_url.as_deref(), Some("https://github.com"))
            }
            Outcome::Context(_) => panic!("expected a formatting outcome"),
        }
    }

    #[test]
    fn invalid_url_is_rejected() {
        let fx = Fixture::new("text");
        let err = run(&fx.cli(&["link", "--start", "0", "--end", "4", "--url", "?"])).unwrap_err();
        assert!(err.to_string().contains("invalid link target"));
        assert_eq!(fx.content(), "text");
    }

    #[test]
    fn utf16_offsets_round_trip() {
        // 🎉 is two UTF-16 units and four bytes
        let fx = Fixture::new("🎉 party");
        let outcome = run(&fx.cli(&["italic", "--start", "3", "--end", "8", "--utf16"])).unwrap();
        assert_eq!(fx.content(), "🎉 *party*");
        assert_eq!(selection(&outcome), Span::new(4, 9));
    }

    #[test]
    fn utf16_offset_inside_character_floors() {
        let fx = Fixture::new("🎉");
        let outcome = run(&fx.cli(&["bold", "--start", "1", "--utf16"])).unwrap();
        assert_eq!(fx.content(), "**bold text**🎉");
        assert_eq!(selection(&outcome), Span::new(2, 11));
    }

    #[test]
    fn utf16_end_past_text_is_clamped() {
        let fx = Fixture::new("[GitHub](https://github.com)");
        let args = ["link", "--start", "0", "--end", "29", "--utf16"];
        let outcome = run(&fx.cli(&args)).unwrap();
        assert_eq!(fx.content(), "GitHub");
        assert_eq!(selection(&outcome), Span::new(0, 6));
    }

    #[test]
    fn detect_reports_context() {
        let fx = Fixture::new("- **bold**");
        let outcome = run(&fx.cli(&["detect", "--start", "5"])).unwrap();
        match outcome {
            Outcome::Context(ctx) => {
                assert!(ctx.is_bold());
                assert!(ctx.is_list());
            }
            Outcome::Formatted { .. } => panic!("expected a context outcome"),
        }
    }

    #[test]
    fn configured_list_type_is_default() {
        let fx = Fixture::new("a\nb");
        let config_path = fx.dir.path().join("config.toml");
        fs::write(&config_path, "[lists]\ndefault_type = \"numbered\"\n").unwrap();

        let mut cli = fx.cli(&["list", "--start", "0", "--end", "3"]);
        cli.config = Some(config_path);
        run(&cli).unwrap();
        assert_eq!(fx.content(), "1. a\n2. b");
    }

    #[test]
    fn missing_file_is_an_error() {
        let fx = Fixture::new("");
        let mut cli = fx.cli(&["bold"]);
        cli.file = fx.dir.path().join("absent.md");
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
