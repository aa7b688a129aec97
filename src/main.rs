//! Command-line runner: reads robot commands from a file (or stdin) and prints every
//! `REPORT` to stdout.
//!
//! ```bash
//! $ printf 'PLACE 1,2,EAST\nMOVE\nMOVE\nLEFT\nMOVE\nREPORT\n' | toy-robot
//! 3,3,NORTH
//! ```
//!
//! Log output goes to stderr; set `RUST_LOG=debug` to see dropped commands.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use toy_robot::{ParseErrorPolicy, Simulator, SimulatorConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct CliArgs {
    /// Command file to read. Reads standard input when omitted or `-`.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
    /// Side length of the square table (overrides the config file).
    #[arg(
        long = "table-size",
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..=i32::MAX as i64)
    )]
    table_size: Option<u32>,
    /// TOML file with `tableSize` and `onParseError` settings.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Log and skip malformed lines instead of stopping at the first one.
    #[arg(long = "skip-invalid")]
    skip_invalid: bool,
}

impl CliArgs {
    /// Defaults, then the config file, then flags.
    fn load_config(&self) -> Result<SimulatorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("unable to read config file {}", path.display()))?;
                SimulatorConfig::from_toml_str(&text)
                    .with_context(|| format!("invalid config file {}", path.display()))?
            }
            None => SimulatorConfig::default(),
        };
        if let Some(size) = self.table_size {
            config.table_size = size;
        }
        if self.skip_invalid {
            config.on_parse_error = ParseErrorPolicy::Skip;
        }
        Ok(config)
    }

    /// The command file, or `None` for stdin.
    fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    fn open_input(&self) -> Result<(String, Box<dyn BufRead>)> {
        match self.input_path() {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("unable to read from file {}", path.display()))?;
                Ok((path.display().to_string(), Box::new(BufReader::new(file))))
            }
            None => Ok(("stdin".to_string(), Box::new(io::stdin().lock()))),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let mut simulator = Simulator::new(args.load_config()?)?;
    let (source, reader) = args.open_input()?;

    info!("reading robot commands from {source}");
    let mut stdout = io::stdout().lock();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("unable to read from {source}"))?;
        if let Some(report) = simulator.execute_line(idx + 1, &line)? {
            writeln!(stdout, "{report}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn config_file(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    fn parse_args(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("toy-robot").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = parse_args(&[]).load_config().unwrap();
        assert_eq!(config, SimulatorConfig::default());
    }

    #[test]
    fn test_config_file_beats_defaults() {
        let file = config_file("tableSize = 2\nonParseError = \"skip\"\n");
        let path = file.path().to_str().unwrap();

        let config = parse_args(&["--config", path]).load_config().unwrap();
        assert_eq!(config.table_size, 2);
        assert_eq!(config.on_parse_error, ParseErrorPolicy::Skip);
    }

    #[test]
    fn test_flags_beat_config_file() {
        let file = config_file("tableSize = 2\n");
        let path = file.path().to_str().unwrap();

        let config = parse_args(&["--config", path, "--table-size", "8", "--skip-invalid"])
            .load_config()
            .unwrap();
        assert_eq!(config.table_size, 8);
        assert_eq!(config.on_parse_error, ParseErrorPolicy::Skip);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = parse_args(&["--config", "/nonexistent/toy-robot.toml"]);
        assert!(args.load_config().is_err());
    }

    #[test]
    fn test_dash_and_missing_file_read_stdin() {
        assert_eq!(parse_args(&[]).input_path(), None);
        assert_eq!(parse_args(&["-"]).input_path(), None);
        assert_eq!(
            parse_args(&["commands.txt"]).input_path(),
            Some(Path::new("commands.txt"))
        );
    }

    #[test]
    fn test_zero_table_size_rejected() {
        assert!(CliArgs::try_parse_from(["toy-robot", "--table-size", "0"]).is_err());
    }
}
