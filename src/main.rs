//! Hashids CLI
//!
//! Encode integer ids into short salted strings and decode them back.
//!
//! # Commands
//!
//! - `encode` - Encode one or more numbers
//! - `decode` - Decode a hash back into numbers
//! - `encode-hex` / `decode-hex` - Same, for hex strings
//! - `init-config` - Write the current settings to the config file
//! - `show-config` - Print the effective settings
//! - `benchmark` - Run performance benchmark

use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use std::path::PathBuf;
use std::time::Instant;

use hashids::config::{default_config_path, ensure_config_dir};
use hashids::{BigUint, Config, HashId};

#[derive(Parser)]
#[command(name = "hashids")]
#[command(author = "Cyberia")]
#[command(version = "0.1.0")]
#[command(about = "Obfuscate integer ids as short, salted, reversible strings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Salt (overrides config file and HASHIDS_SALT)
    #[arg(long, global = true)]
    salt: Option<String>,

    /// Alphabet, at least 16 unique characters
    #[arg(long, global = true)]
    alphabet: Option<String>,

    /// Minimum hash length
    #[arg(long, global = true)]
    min_length: Option<usize>,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode numbers into a hash
    Encode {
        /// Non-negative integers of any size
        #[arg(required = true)]
        numbers: Vec<String>,
    },

    /// Decode a hash into numbers
    Decode {
        /// The hash to decode
        hash: String,
    },

    /// Encode a hex string into a hash
    EncodeHex {
        /// Hex digits, any case
        hex: String,
    },

    /// Decode a hash produced by encode-hex
    DecodeHex {
        /// The hash to decode
        hash: String,
    },

    /// Write the effective settings to the config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective settings and derived character sets
    ShowConfig,

    /// Run performance benchmark
    Benchmark {
        /// Number of encode/decode round trips
        #[arg(short, long, default_value = "100000")]
        count: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let result = resolve_config(&cli).and_then(|(config, path)| match &cli.command {
        Commands::Encode { numbers } => cmd_encode(&config, numbers),
        Commands::Decode { hash } => cmd_decode(&config, hash),
        Commands::EncodeHex { hex } => cmd_encode_hex(&config, hex),
        Commands::DecodeHex { hash } => cmd_decode_hex(&config, hash),
        Commands::InitConfig { force } => cmd_init_config(&config, path, *force),
        Commands::ShowConfig => cmd_show_config(&config),
        Commands::Benchmark { count } => cmd_benchmark(&config, *count),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Layer config file, environment and CLI flags
fn resolve_config(cli: &Cli) -> anyhow::Result<(Config, PathBuf)> {
    let path = cli.config.clone().unwrap_or_else(default_config_path);

    let mut config = if path.exists() {
        Config::load_from_file(&path)?
    } else if cli.config.is_some() {
        anyhow::bail!("No config file found at {}", path.display());
    } else {
        debug!("no config file at {}, using defaults", path.display());
        Config::default()
    };

    config.apply_env()?;

    if let Some(salt) = &cli.salt {
        config.data.salt = salt.clone();
    }
    if let Some(alphabet) = &cli.alphabet {
        config.data.alphabet = alphabet.clone();
    }
    if let Some(min_length) = cli.min_length {
        config.data.min_length = min_length;
    }

    Ok((config, path))
}

fn cmd_encode(config: &Config, numbers: &[String]) -> anyhow::Result<()> {
    let ids = config.build()?;

    let numbers = numbers
        .iter()
        .map(|n| {
            n.parse::<BigUint>()
                .map_err(|_| anyhow::anyhow!("Not a non-negative integer: {}", n))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    println!("{}", ids.encode_big(&numbers)?);
    Ok(())
}

fn cmd_decode(config: &Config, hash: &str) -> anyhow::Result<()> {
    let ids = config.build()?;
    let numbers = ids.decode_big(hash)?;

    let line = numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", line);
    Ok(())
}

fn cmd_encode_hex(config: &Config, hex: &str) -> anyhow::Result<()> {
    let ids = config.build()?;
    println!("{}", ids.encode_hex(hex)?);
    Ok(())
}

fn cmd_decode_hex(config: &Config, hash: &str) -> anyhow::Result<()> {
    let ids = config.build()?;
    println!("{}", ids.decode_hex(hash)?);
    Ok(())
}

fn cmd_init_config(config: &Config, path: PathBuf, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite it.",
            path.display()
        );
    }

    // Validate before writing
    config.build()?;

    let path = ensure_config_dir(&path)?;
    config.save_to_file(&path)?;

    println!("Config saved to: {}", path.display());
    if config.data.salt.is_empty() {
        println!("\nWARNING: The salt is empty. Anyone can decode your hashes.");
    }

    Ok(())
}

fn cmd_show_config(config: &Config) -> anyhow::Result<()> {
    let ids = config.build()?;

    println!("Salt: {:?}", config.data.salt);
    println!("Min length: {}", config.data.min_length);
    println!("Alphabet: {}", config.data.alphabet);
    println!("\nDerived sets:");
    println!(
        "  Working alphabet ({}): {}",
        ids.alphabet().len(),
        ids.alphabet().iter().collect::<String>()
    );
    println!(
        "  Separators ({}): {}",
        ids.separators().len(),
        ids.separators().iter().collect::<String>()
    );
    println!(
        "  Guards ({}): {}",
        ids.guards().len(),
        ids.guards().iter().collect::<String>()
    );

    Ok(())
}

fn cmd_benchmark(config: &Config, count: u64) -> anyhow::Result<()> {
    let ids: HashId = config.build()?;
    println!("Running benchmark with {} round trips...", count);

    let start = Instant::now();

    for i in 0..count {
        let numbers = [i, i.wrapping_mul(31), 7];
        let hash = ids.encode(&numbers)?;
        let decoded = ids.decode(&hash)?;
        if decoded != numbers {
            anyhow::bail!("Round trip failed for {:?}: got {:?}", numbers, decoded);
        }
    }

    let elapsed = start.elapsed();
    let rate = count as f64 / elapsed.as_secs_f64();

    println!("\nResults:");
    println!("  Round trips: {}", count);
    println!("  Time elapsed: {:.2}s", elapsed.as_secs_f64());
    println!("  Rate: {:.2} round trips/s", rate);

    println!("\nEncoder parameters:");
    println!("  Alphabet: {} characters", ids.alphabet().len());
    println!("  Separators: {}", ids.separators().len());
    println!("  Guards: {}", ids.guards().len());
    println!("  Min length: {}", ids.min_length());

    Ok(())
}
