use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tabson_core::previewer::{PreviewConfig, ShallowPreviewer};
use tabson_core::strings::printable_string;
use tabson_core::{Result as TabsonResult, Snapshot};
use tabson_protocol::ObjectIdAllocator;
use tabson_utils::{info, init_logging, init_logging_with_level, LogFormat, LogLevel};

/// Render Lua debugger value snapshots as inspector-protocol descriptors.
#[derive(Parser, Debug)]
#[command(name = "tabson")]
#[command(version)]
#[command(about = "Render Lua debugger value snapshots as inspector-protocol descriptors", long_about = None)]
struct Cli
{
    /// Log level (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// Print one RemoteObject per root node of a snapshot
    Render
    {
        /// Snapshot JSON file ("-" for stdin)
        snapshot: PathBuf,
        /// Print compact JSON instead of pretty-printed JSON
        #[arg(long, default_value_t = false)]
        compact: bool,
        /// Maximum properties in an object preview
        #[arg(long, default_value_t = PreviewConfig::default().max_object_properties)]
        max_properties: usize,
        /// Maximum elements in an array preview
        #[arg(long, default_value_t = PreviewConfig::default().max_array_items)]
        max_array_items: usize,
        /// Prefix of generated object ids
        #[arg(long, default_value = ObjectIdAllocator::DEFAULT_PREFIX)]
        id_prefix: String,
    },
    /// List the presentation shape of every table in a snapshot
    Classify
    {
        /// Snapshot JSON file ("-" for stdin)
        snapshot: PathBuf,
    },
    /// Show how raw string bytes (given as hex) would be displayed
    #[command(name = "string")]
    Bytes
    {
        /// Bytes in hex, e.g. 68656c6c6f or 0xff00
        hex: String,
    },
}

fn main()
{
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for command output
    let logging = match cli.log_level {
        Some(level) => init_logging_with_level(level, LogFormat::Pretty),
        None => init_logging(),
    };
    let guard = match logging {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    let code = match run_command(cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    // process::exit skips destructors; flush the log file first
    drop(guard);
    process::exit(code);
}

fn run_command(cli: Cli) -> Result<(), Box<dyn std::error::Error>>
{
    match cli.command {
        Commands::Render {
            snapshot,
            compact,
            max_properties,
            max_array_items,
            id_prefix,
        } => {
            let snapshot = load_snapshot(&snapshot)?;
            let previewer = ShallowPreviewer::new(PreviewConfig {
                max_object_properties: max_properties,
                max_array_items,
            });
            let mut ids = ObjectIdAllocator::with_prefix(id_prefix);

            let objects = snapshot.render_all(&previewer, &mut ids)?;
            info!(nodes = objects.len(), ids = ids.allocated(), "rendered snapshot");

            let json = if compact {
                serde_json::to_string(&objects)?
            } else {
                serde_json::to_string_pretty(&objects)?
            };
            println!("{json}");
            Ok(())
        }
        Commands::Classify { snapshot } => {
            let snapshot = load_snapshot(&snapshot)?;
            for (index, shape, len) in snapshot.table_shapes() {
                println!("{index} {shape} ({len} items)");
            }
            Ok(())
        }
        Commands::Bytes { hex } => {
            let bytes = decode_hex(&hex)?;
            println!("{}", printable_string(&bytes));
            Ok(())
        }
    }
}

fn load_snapshot(path: &Path) -> TabsonResult<Snapshot>
{
    if path == Path::new("-") {
        info!("Reading snapshot from stdin");
        return Snapshot::from_reader(io::stdin().lock());
    }
    info!("Reading snapshot from {}", path.display());
    Snapshot::from_reader(BufReader::new(File::open(path)?))
}

/// Parse a hex string, ignoring whitespace and an optional `0x` prefix.
fn decode_hex(input: &str) -> Result<Vec<u8>, hex::FromHexError>
{
    let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(digits.strip_prefix("0x").unwrap_or(&digits))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_decode_hex()
    {
        assert_eq!(decode_hex("68656c6c6f").unwrap(), b"hello");
        assert_eq!(decode_hex("0xFF00").unwrap(), vec![0xff, 0x00]);
        assert_eq!(decode_hex("de ad").unwrap(), vec![0xde, 0xad]);
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_hex_rejects_bad_input()
    {
        assert!(decode_hex("abc").is_err());
        assert!(decode_hex("zz").is_err());
        assert!(decode_hex("é1").is_err());
        assert_eq!(decode_hex("abc"), Err(hex::FromHexError::OddLength));
        assert!(matches!(
            decode_hex("0xzz"),
            Err(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 })
        ));
    }

    #[test]
    fn test_cli_parses_render_flags()
    {
        let cli = Cli::try_parse_from(["tabson", "render", "snap.json", "--compact", "--max-properties", "3"]).unwrap();
        match cli.command {
            Commands::Render {
                compact,
                max_properties,
                max_array_items,
                id_prefix,
                ..
            } => {
                assert!(compact);
                assert_eq!(max_properties, 3);
                assert_eq!(max_array_items, 100);
                assert_eq!(id_prefix, "tabson:");
            }
            _ => panic!("Expected render command"),
        }
    }

    #[test]
    fn test_cli_parses_log_level()
    {
        let cli = Cli::try_parse_from(["tabson", "--log-level", "debug", "string", "ff"]).unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn test_cli_verifies()
    {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
