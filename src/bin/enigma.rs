use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use enigmacrypt::catalog::{STANDARD_REFLECTORS, STANDARD_ROTORS};
use enigmacrypt::MachineSettings;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "enigma")]
#[command(about = "Three-rotor cipher machine: the same settings encrypt and decrypt")]
#[command(version)]
struct Cli {
    /// TOML settings file; flags below override its values
    #[arg(short, long, env = "ENIGMA_CONFIG")]
    config: Option<PathBuf>,

    /// Rotor names left to right, e.g. III,II,I
    #[arg(short, long, value_delimiter = ',')]
    rotors: Option<Vec<String>>,

    /// Initial positions left to right, e.g. AAA
    #[arg(short, long)]
    positions: Option<String>,

    /// Reflector name
    #[arg(long)]
    reflector: Option<String>,

    /// Plugboard pairs, e.g. "AB CD EF"
    #[arg(long)]
    plugboard: Option<String>,

    /// List catalog rotors and reflectors, then exit
    #[arg(long)]
    list: bool,

    /// Log machine assembly and every enciphered letter
    #[arg(short, long)]
    verbose: bool,

    /// Text to transform; read from stdin when omitted
    text: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("enigmacrypt=trace"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("enigmacrypt=warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.list {
        for rotor in STANDARD_ROTORS.iter() {
            println!("rotor     {:<4} {} notch {}", rotor.name, rotor.wiring, rotor.notch);
        }
        for reflector in STANDARD_REFLECTORS.iter() {
            println!("reflector {:<4} {}", reflector.name, reflector.mapping);
        }
        return Ok(());
    }

    let mut settings = match &cli.config {
        Some(path) => MachineSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => MachineSettings::default(),
    };
    if let Some(rotors) = cli.rotors {
        settings.rotors = rotors;
    }
    if let Some(positions) = cli.positions {
        settings.positions = positions;
    }
    if let Some(reflector) = cli.reflector {
        settings.reflector = reflector;
    }
    if let Some(plugboard) = cli.plugboard {
        settings.plugboard = plugboard;
    }

    let mut machine = settings.build().context("assembling machine")?;

    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading standard input")?;
            buf.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    println!("{}", machine.encrypt_text(&text));
    Ok(())
}
