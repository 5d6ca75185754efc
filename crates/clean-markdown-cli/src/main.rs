use anyhow::{Context, Result};
use clean_markdown_config::Config;
use clean_markdown_engine::{CleanOptions, clean};
use std::{
    env,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
enum UsageError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Option {0} requires a value")]
    MissingValue(&'static str),

    #[error("Invalid value for --tab-width: {0} (expected a whole number of at least 1)")]
    InvalidTabWidth(String),

    #[error("Only one input file may be given, got {0} and {1}")]
    ExtraInput(String, String),
}

/// Parsed command line. Flags only ever switch behaviour on; anything not
/// given falls back to the config file and then to the built-in defaults.
#[derive(Debug, Default, PartialEq)]
struct Args {
    preserve_blank_lines: bool,
    strip_code_blocks: bool,
    placeholder: Option<String>,
    strip_urls: bool,
    tab_width: Option<usize>,
    config: Option<PathBuf>,
    /// `None` or `-` reads stdin.
    input: Option<String>,
    help: bool,
}

impl Args {
    fn parse(argv: &[String]) -> Result<Self, UsageError> {
        let mut args = Args::default();
        let mut iter = argv.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => args.help = true,
                "--preserve-blank-lines" => args.preserve_blank_lines = true,
                "--strip-code-blocks" => args.strip_code_blocks = true,
                "--strip-urls" => args.strip_urls = true,
                "--placeholder" => {
                    let value = iter.next().ok_or(UsageError::MissingValue("--placeholder"))?;
                    args.placeholder = Some(value.clone());
                }
                "--tab-width" => {
                    let value = iter.next().ok_or(UsageError::MissingValue("--tab-width"))?;
                    match value.parse::<usize>() {
                        Ok(n) if n > 0 => args.tab_width = Some(n),
                        _ => return Err(UsageError::InvalidTabWidth(value.clone())),
                    }
                }
                "--config" => {
                    let value = iter.next().ok_or(UsageError::MissingValue("--config"))?;
                    args.config = Some(PathBuf::from(value));
                }
                opt if opt.starts_with("--") || (opt.starts_with('-') && opt != "-") => {
                    return Err(UsageError::UnknownOption(opt.to_string()));
                }
                path => {
                    if let Some(first) = args.input.take() {
                        return Err(UsageError::ExtraInput(first, path.to_string()));
                    }
                    args.input = Some(path.to_string());
                }
            }
        }

        Ok(args)
    }

    /// Layers the command-line flags over `base`.
    fn apply(&self, base: CleanOptions) -> CleanOptions {
        let mut options = base;
        options.preserve_blank_lines |= self.preserve_blank_lines;
        options.strip_code_blocks |= self.strip_code_blocks;
        options.strip_bare_urls |= self.strip_urls;
        if let Some(placeholder) = &self.placeholder {
            options.code_placeholder = placeholder.clone();
        }
        if let Some(tab_width) = self.tab_width {
            options.tab_width = tab_width;
        }
        options
    }
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [OPTIONS] [FILE|-]\n\
         \n\
         Strips Markdown formatting from FILE (or stdin) and prints plain text.\n\
         \n\
         Options:\n\
         \x20 --preserve-blank-lines  Keep every blank line\n\
         \x20 --strip-code-blocks     Replace code blocks with a placeholder\n\
         \x20 --placeholder TEXT      Placeholder for stripped code blocks\n\
         \x20 --strip-urls            Remove bare http(s) URLs from prose\n\
         \x20 --tab-width N           Columns per tab when measuring indentation\n\
         \x20 --config PATH           Config file (default: {})\n\
         \x20 -h, --help              Show this help",
        Config::config_path().display()
    )
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(explicit: Option<&Path>) -> Result<Option<Config>> {
    match explicit {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
            let config = Config::load_from_path(&path)?
                .with_context(|| format!("Config file not found: {}", path.display()))?;
            Ok(Some(config))
        }
        None => Ok(Config::load()?),
    }
}

fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {path}")),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map_or("clean-markdown", String::as_str);

    let args = match Args::parse(argv.get(1..).unwrap_or_default()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage(program));
            process::exit(2);
        }
    };

    if args.help {
        println!("{}", usage(program));
        return Ok(());
    }

    let config = load_config(args.config.as_deref())?;
    let options = args.apply(config.map(|c| c.options).unwrap_or_default());
    log::debug!("cleaning with {options:?}");

    let input = read_input(args.input.as_deref())?;
    let output = clean(&input, &options);

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    stdout.flush()?;
    Ok(())
}
