//! `dearmor` - list DER objects extracted from PEM-armored input.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use dearmor_core::{load_by_kinds, KindMask, ObjectKind, PemCollection};

#[derive(Parser)]
#[command(
    name = "dearmor",
    version,
    about = "Extract DER objects (certificates, private keys) from PEM-armored text"
)]
struct Cli {
    /// PEM file to read, or literal PEM text passed inline
    #[arg(allow_hyphen_values = true)]
    source: String,

    /// Object kinds to keep (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    kinds: Vec<KindArg>,

    /// Emit one JSON record per kept object instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Cert,
    Key,
    RsaKey,
}

impl KindArg {
    fn kind(self) -> ObjectKind {
        match self {
            Self::Cert => ObjectKind::Certificate,
            Self::Key => ObjectKind::PrivateKey,
            Self::RsaKey => ObjectKind::RsaPrivateKey,
        }
    }
}

fn kind_slug(kind: ObjectKind) -> &'static str {
    match kind {
        ObjectKind::Certificate => "cert",
        ObjectKind::PrivateKey => "key",
        ObjectKind::RsaPrivateKey => "rsa-key",
    }
}

#[derive(Serialize)]
struct ObjectRecord<'a> {
    index: usize,
    kind: &'static str,
    der_len: usize,
    der_prefix: &'a str,
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    let mask = if cli.kinds.is_empty() {
        KindMask::all()
    } else {
        cli.kinds
            .iter()
            .fold(KindMask::empty(), |mask, k| mask | k.kind())
    };

    let pem = load_by_kinds(cli.source.as_str(), mask)
        .with_context(|| format!("failed to load PEM objects from {}", cli.source))?;

    if cli.json {
        print_json(&pem)?;
    } else {
        print_plain(&pem);
    }
    Ok(())
}

fn print_plain(pem: &PemCollection) {
    if pem.is_empty() {
        eprintln!("no objects loaded");
        return;
    }
    for (index, obj) in pem.iter().enumerate() {
        let preview = hex::encode(&obj.der()[..obj.len().min(8)]);
        println!(
            "{index}: {} ({} bytes, der[..{}] = {preview})",
            obj.kind(),
            obj.len(),
            obj.len().min(8)
        );
    }
    println!("{} object(s), {} DER bytes total", pem.len(), pem.total_der_len());
}

fn print_json(pem: &PemCollection) -> Result<()> {
    for (index, obj) in pem.iter().enumerate() {
        let preview = hex::encode(&obj.der()[..obj.len().min(8)]);
        let record = ObjectRecord {
            index,
            kind: kind_slug(obj.kind()),
            der_len: obj.len(),
            der_prefix: &preview,
        };
        let line = serde_json::to_string(&record).context("failed to encode record")?;
        println!("{line}");
    }
    Ok(())
}
