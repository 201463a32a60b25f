//! Callsign verbalization CLI
//!
//! Reads callsigns from stdin, one per line, and prints every spoken variant
//! as a line of space separated words.

use std::{
    collections::HashSet,
    fs,
    io::{self, BufRead, BufWriter, Write},
    path::PathBuf,
    str::FromStr,
};

use anyhow::{Context, Result};
use aviation_helper_rs::{
    AirlineTable,
    airlines::{TABLE_HEADER, parse_blacklist},
};
use callsign_expansion_rs::{CallsignExpander, ExpanderConfig, ExpansionLevel};
use clap::{Parser, Subcommand};
use log::{error, info};

/// Header line of callsign lists
const HEADER_TOKEN: &str = "callsigns";

/// Expand ATC callsigns into their spoken-word variants
#[derive(Parser)]
#[command(name = "callsign-verbalizer")]
#[command(about = "Expand ATC callsigns into their spoken-word variants", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Tab separated airline table (ICAO, airline, call-word, country)
    #[arg(long, env = "CALLSIGN_AIRLINE_TABLE", global = true)]
    airline_table: Option<PathBuf>,

    /// Configuration file path (RON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Expansion strategy: standard, special or full [default: standard]
    #[arg(long, value_parser = ExpansionLevel::from_str)]
    expansion_level: Option<ExpansionLevel>,

    /// Prefix every variant with the rule that produced it
    #[arg(long)]
    annotate: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Print the mapping of multi-word call-words to their underscore form
    Underscores {
        /// Call-words to leave out, one per line
        #[arg(long)]
        blacklist: Option<PathBuf>,
    },
    /// Print the airline table with call-word spellings folded per call-word
    Fold,
}

fn main() -> Result<()> {
    #[cfg(debug_assertions)]
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;

    let stdout = io::stdout().lock();
    match cli.command {
        Some(Command::Underscores { blacklist }) => {
            let blacklist = match blacklist {
                Some(path) => parse_blacklist(
                    &fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read blacklist {}", path.display()))?,
                ),
                None => HashSet::new(),
            };
            run_underscores(&load_airlines(&config)?, &blacklist, stdout)
        }
        Some(Command::Fold) => run_fold(&load_airlines(&config)?, stdout),
        None => {
            let expander = CallsignExpander::from_config(&config).with_context(|| {
                format!(
                    "Failed to load airline table {}",
                    config.airline_table.display()
                )
            })?;
            info!(
                "Loaded {} airline codes, expansion level {}",
                expander.airlines().len(),
                expander.level()
            );
            run_expand(&expander, cli.annotate, io::stdin().lock(), stdout)
        }
    }
}

fn load_airlines(config: &ExpanderConfig) -> Result<AirlineTable> {
    AirlineTable::load_from_file(&config.airline_table).with_context(|| {
        format!(
            "Failed to load airline table {}",
            config.airline_table.display()
        )
    })
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Command line flags override the config file, which overrides the defaults.
fn resolve_config(cli: &Cli) -> Result<ExpanderConfig> {
    let mut config = match &cli.config {
        Some(path) => ExpanderConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ExpanderConfig::default(),
    };
    if let Some(path) = &cli.airline_table {
        config.airline_table = path.clone();
    }
    if let Some(level) = cli.expansion_level {
        config.level = level;
    }
    Ok(config)
}

/// Expands one callsign per input line. Blank lines and the `callsigns`
/// header are skipped, a callsign that fails to expand is logged and skipped.
fn run_expand(
    expander: &CallsignExpander,
    annotate: bool,
    input: impl BufRead,
    out: impl Write,
) -> Result<()> {
    let mut out = BufWriter::new(out);
    let mut expanded = 0usize;
    let mut skipped = 0usize;

    for line in input.lines() {
        let line = line.context("Failed to read callsign")?;
        let callsign = line.trim();
        if callsign.is_empty() || callsign == HEADER_TOKEN {
            continue;
        }

        match expander.expand_annotated(callsign) {
            Ok(Some(variants)) => {
                for variant in variants {
                    if annotate {
                        writeln!(out, "{}\t{}", variant.origin, variant.words)?;
                    } else {
                        writeln!(out, "{}", variant.words)?;
                    }
                }
                expanded += 1;
            }
            Ok(None) => skipped += 1,
            Err(err) => {
                error!("Skipping callsign {callsign}: {err}");
                skipped += 1;
            }
        }
    }
    out.flush()?;

    info!("Expanded {expanded} callsigns, skipped {skipped}");
    Ok(())
}

fn run_underscores(
    airlines: &AirlineTable,
    blacklist: &HashSet<String>,
    out: impl Write,
) -> Result<()> {
    let mut out = BufWriter::new(out);
    for (callword, underscored) in airlines.underscore_mapping(blacklist) {
        writeln!(out, "{callword}\t{underscored}")?;
    }
    out.flush()?;
    Ok(())
}

fn run_fold(airlines: &AirlineTable, out: impl Write) -> Result<()> {
    let mut out = BufWriter::new(out);
    writeln!(out, "{TABLE_HEADER}")?;
    for entry in airlines.fold_callword_spellings() {
        writeln!(out, "{entry}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use super::*;

    const TABLE: &str = "ICAO\tAirline\tCallsign\tCountry\n\
        CSA\tCzech Airlines\tCzech Airlines\tCzech Republic\n\
        BAW\tBritish Airways\tSpeedbird\tUnited Kingdom\n\
        WZZ\tWizz Air\tWizz Air\tHungary\n\
        BEL\tBrussels Airlines\tBee-Line\tBelgium\n\
        XBL\tBee Line Cargo\tBee Line\n";

    fn airlines() -> AirlineTable {
        AirlineTable::load_airlines(TABLE.as_bytes()).unwrap()
    }

    fn expand_lines(input: &str, annotate: bool) -> String {
        let expander =
            CallsignExpander::with_table(Arc::new(airlines()), ExpansionLevel::Standard);
        let mut out = Vec::new();
        run_expand(&expander, annotate, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("expander.ron");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_expand_skips_header_and_blank_lines() {
        assert_eq!(
            expand_lines("callsigns\n\n   \nCSA1\n", false),
            "czech_airlines one\ncharlie sierra alfa one\n"
        );
    }

    #[test]
    fn test_expand_continues_after_bad_callsign() {
        assert_eq!(
            expand_lines("CSA1\nCSA1@\nZZZZZZZZ\nBAW12\n", false),
            "czech_airlines one\n\
             charlie sierra alfa one\n\
             speedbird one two\n\
             bravo alfa whiskey one two\n"
        );
    }

    #[test]
    fn test_expand_annotated() {
        assert_eq!(
            expand_lines("BAW12\n", true),
            "call-word-whole\tspeedbird one two\n\
             spelled\tbravo alfa whiskey one two\n"
        );
    }

    #[test]
    fn test_underscores_sorted_by_callword() {
        let blacklist = parse_blacklist("bee line\n");
        let mut out = Vec::new();
        run_underscores(&airlines(), &blacklist, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "czech airlines\tczech_airlines\nwizz air\twizz_air\n"
        );
    }

    #[test]
    fn test_fold_rewrites_spellings() {
        let mut out = Vec::new();
        run_fold(&airlines(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with(TABLE_HEADER));
        assert!(out.contains("XBL\tBee Line Cargo\tBee-Line\t\n"));
        assert_eq!(out.lines().count(), 6);
    }

    #[test]
    fn test_level_flag() {
        let cli = Cli::try_parse_from(["callsign-verbalizer", "--expansion-level", "special"])
            .unwrap();
        assert_eq!(cli.expansion_level, Some(ExpansionLevel::Special));
        assert!(
            Cli::try_parse_from(["callsign-verbalizer", "--expansion-level", "maximal"]).is_err()
        );
    }

    #[test]
    fn test_defaults_without_config() {
        let cli = Cli::try_parse_from(["callsign-verbalizer"]).unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.level, ExpansionLevel::Standard);
        assert_eq!(config.airline_table, ExpanderConfig::default().airline_table);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, r#"(airline_table: "table.tsv", level: full)"#);
        let cli =
            Cli::try_parse_from(["callsign-verbalizer", "-c", config_path.to_str().unwrap()])
                .unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.level, ExpansionLevel::Full);
        assert_eq!(config.airline_table, dir.path().join("table.tsv"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, r#"(airline_table: "table.tsv", level: full)"#);
        let cli = Cli::try_parse_from([
            "callsign-verbalizer",
            "--config",
            config_path.to_str().unwrap(),
            "--expansion-level",
            "standard",
            "--airline-table",
            "/data/other.tsv",
        ])
        .unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.level, ExpansionLevel::Standard);
        assert_eq!(config.airline_table, PathBuf::from("/data/other.tsv"));
    }
}
