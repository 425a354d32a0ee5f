//! walkspec - inspect enumeration options and test wildcard patterns.
//!
//! Usage:
//!   walkspec show [--preset NAME | --options FILE]   Print an options set
//!   walkspec from-legacy <VALUE>                     Options for a legacy flag
//!   walkspec to-legacy [--preset NAME | --options FILE]
//!   walkspec match <PATTERN> <NAMES>...              Test names against a pattern
//!   walkspec --help                                  Show help

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result, bail};

use walkspec_core::{EnumerationOptions, MatchCasing, MatchType, Preset, SearchOption};
use walkspec_match::{EntryFilter, FileAttributes, translate_win32_expression};

#[derive(Parser)]
#[command(
    name = "walkspec",
    version,
    about = "Inspect directory enumeration options and wildcard matching",
    long_about = "walkspec shows what an enumeration options set contains, converts \
                  to and from the legacy recursion flag, and tests names against \
                  Simple or Win32 wildcard patterns."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Where an options set comes from. Defaults apply when neither is given.
#[derive(clap::Args)]
struct OptionsSource {
    /// Use a named preset (e.g. "compatible-safe-recursive")
    #[arg(short, long, conflicts_with = "options")]
    preset: Option<Preset>,

    /// Load options from a JSON file; missing fields take default values
    #[arg(short, long)]
    options: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Print an options set
    Show {
        #[command(flatten)]
        source: OptionsSource,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the options a legacy search option maps to
    FromLegacy {
        /// Flag value: 0, 1, "TopDirectoryOnly" or "AllDirectories"
        value: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the legacy search option closest to an options set
    ToLegacy {
        #[command(flatten)]
        source: OptionsSource,
    },

    /// Test names against a search pattern
    Match {
        /// Search pattern
        pattern: String,

        /// Names to test
        #[arg(required = true)]
        names: Vec<String>,

        #[command(flatten)]
        source: OptionsSource,

        /// Override the wildcard dialect
        #[arg(short = 't', long)]
        match_type: Option<MatchType>,

        /// Override the case rule
        #[arg(short, long)]
        casing: Option<MatchCasing>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Command::Show { source, format } => {
            let options = load_options(&source)?;
            print_options(&options, format)?;
        }
        Command::FromLegacy { value, format } => {
            let option = parse_search_option(&value)?;
            let options = EnumerationOptions::from_search_option(option);
            if matches!(format, OutputFormat::Text)
                && let Some(preset) = Preset::identify(options)
            {
                println!(" {option} -> {preset}");
            }
            print_options(options, format)?;
        }
        Command::ToLegacy { source } => {
            let options = load_options(&source)?;
            let option = options.search_option();
            println!("{option} ({})", i32::from(option));
        }
        Command::Match {
            pattern,
            names,
            source,
            match_type,
            casing,
        } => {
            let mut options = load_options(&source)?;
            if let Some(match_type) = match_type {
                options.match_type = match_type;
            }
            if let Some(casing) = casing {
                options.match_casing = casing;
            }
            run_match(&options, &pattern, &names);
        }
    }

    Ok(())
}

/// Resolve the options set named on the command line.
fn load_options(source: &OptionsSource) -> Result<EnumerationOptions> {
    if let Some(preset) = source.preset {
        return Ok(preset.options().clone());
    }
    match &source.options {
        Some(path) => read_options_file(path),
        None => Ok(EnumerationOptions::default()),
    }
}

fn read_options_file(path: &Path) -> Result<EnumerationOptions> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("Invalid options in {}", path.display()))
}

/// Parse a legacy flag from its integer value or its name.
fn parse_search_option(value: &str) -> Result<SearchOption> {
    if let Ok(raw) = value.parse::<i32>() {
        return SearchOption::try_from(raw).wrap_err("Unrecognized legacy flag");
    }
    match value.parse::<SearchOption>() {
        Ok(option) => Ok(option),
        Err(_) => bail!("Unrecognized legacy flag: {value}"),
    }
}

fn print_options(options: &EnumerationOptions, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", "─".repeat(50));
            println!(" {:<28} {}", "recurse_subdirectories", options.recurse_subdirectories);
            println!(" {:<28} {}", "ignore_inaccessible", options.ignore_inaccessible);
            println!(" {:<28} {}", "buffer_size_hint", options.buffer_size_hint);
            println!(
                " {:<28} {}",
                "attributes_to_skip",
                format_attributes(options.attributes_to_skip)
            );
            println!(" {:<28} {}", "match_type", options.match_type);
            println!(" {:<28} {}", "match_casing", options.match_casing);
            println!(
                " {:<28} {}",
                "max_recursion_depth",
                options.max_recursion_depth()
            );
            println!(
                " {:<28} {}",
                "return_special_directories", options.return_special_directories
            );
            println!("{}", "─".repeat(50));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(options)?);
        }
    }
    Ok(())
}

fn format_attributes(attributes: FileAttributes) -> String {
    if attributes.is_empty() {
        return "(none)".to_string();
    }
    attributes
        .iter_names()
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Report which names a pattern accepts under the given options.
fn run_match(options: &EnumerationOptions, pattern: &str, names: &[String]) {
    let filter = EntryFilter::new(options, pattern);

    if options.match_type == MatchType::Win32 {
        println!(" pattern: {pattern} (as {})", translate_win32_expression(pattern));
    } else {
        println!(" pattern: {pattern}");
    }
    println!(
        " dialect: {}, ignore case: {}",
        options.match_type,
        filter.ignore_case()
    );
    println!();

    for name in names {
        let marker = if filter.is_name_match(name) { "✓" } else { "✗" };
        println!("   {marker} {name}");
    }
}
