use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mixlib::{parse::parse_values, MixConfig, Mixer};

#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    Part1,
    Part2,
}

impl Mode {
    fn config(self) -> MixConfig {
        match self {
            Mode::Part1 => MixConfig::single_pass(),
            Mode::Part2 => MixConfig::decrypt(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    verbose: bool,
    #[clap(short, long, value_enum, default_value = "part1")]
    mode: Mode,
    /// File with one integer per line, or `-` for stdin
    #[clap(short, long, default_value = "data/input.txt")]
    input: PathBuf,
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let stdin = std::io::stdin();
        Ok(std::io::read_to_string(stdin)?)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format_module_path(false)
        .format_timestamp_millis()
        .filter_level(log_level)
        .init();
    let input = read_input(&args.input)?;
    let values =
        parse_values(&input).with_context(|| format!("parsing {}", args.input.display()))?;
    log::debug!("read {} values", values.len());
    let start = std::time::Instant::now();
    let mixed = Mixer::with_config(&values, args.mode.config())?.mix();
    let checksum = mixed.checksum()?;
    log::info!("computed result in {:?}", start.elapsed());
    println!("{}", checksum);
    Ok(())
}
