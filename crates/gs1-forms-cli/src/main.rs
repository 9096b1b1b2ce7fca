mod commands;
mod console;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use gs1_forms::{Config, FormKind, FormSnapshot, Lang};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "gs1-forms")]
#[command(version, about = "GS1 case and pallet form validation and labels", long_about = None)]
struct Cli {
    /// Config file, must exist (default: ./gs1forms.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Message and caption language (EN or ES), overrides the config file
    #[arg(short, long, global = true)]
    lang: Option<Lang>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a submission; exits with status 1 when it is rejected
    Validate {
        /// Form variant: item (case) or pallet
        kind: FormKind,

        #[command(flatten)]
        fields: FieldArgs,

        /// Also reject expiry dates before today
        #[arg(long)]
        reject_expired: bool,
    },

    /// Validate a submission and print its label
    Label {
        /// Form variant: item (case) or pallet
        kind: FormKind,

        #[command(flatten)]
        fields: FieldArgs,

        /// Output format
        #[arg(short, long, default_value = "zpl")]
        format: LabelFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum LabelFormat {
    /// GS1 element string
    Ais,
    /// Zebra printer commands
    Zpl,
    /// Typed form as JSON
    Json,
    /// A4 label sheet
    Pdf,
}

/// Form fields, by their input names
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// JSON object of field values; flags below override it
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    #[arg(long)]
    sscc: Option<String>,

    #[arg(long)]
    gtin: Option<String>,

    /// Expiry date, DD/MM/YYYY
    #[arg(long)]
    fecha: Option<String>,

    /// Quantity (units per case, or cases per pallet)
    #[arg(long)]
    cantidad: Option<String>,

    /// Lot number
    #[arg(long)]
    lote: Option<String>,

    /// Net weight in kg
    #[arg(long)]
    peso: Option<String>,

    #[arg(long)]
    descripcion: Option<String>,
}

impl FieldArgs {
    /// Builds the form snapshot: `--input` file first, then flag values
    pub fn snapshot(&self) -> Result<FormSnapshot> {
        let mut snapshot = match &self.input {
            Some(path) => commands::read_snapshot(path)?,
            None => FormSnapshot::new(),
        };

        let flags = [
            ("sscc", &self.sscc),
            ("gtin", &self.gtin),
            ("fecha", &self.fecha),
            ("cantidad", &self.cantidad),
            ("lote", &self.lote),
            ("peso", &self.peso),
            ("descripcion", &self.descripcion),
        ];
        for (name, value) in flags {
            if let Some(value) = value {
                snapshot.insert(name, value.as_str());
            }
        }

        Ok(snapshot)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_required(path)?,
        None => Config::load_default()?,
    };
    if let Some(lang) = cli.lang {
        config.messages.lang = lang;
    }
    Ok(config)
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    tracing::debug!(?config, "configuration loaded");

    // Execute command
    let accepted = match cli.command {
        Commands::Validate {
            kind,
            fields,
            reject_expired,
        } => commands::validate::execute(&config, kind, &fields, reject_expired)?,
        Commands::Label {
            kind,
            fields,
            format,
            out,
        } => commands::label::execute(&config, kind, &fields, format, out.as_deref())?,
    };

    Ok(if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
