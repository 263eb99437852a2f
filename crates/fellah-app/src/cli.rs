use std::path::PathBuf;

use clap::Parser;
use fellah_common::{Crop, Language, Region};
use fellah_config::schema::LogLevel;

/// Fellah: a farming assistant for Moroccan growers.
#[derive(Parser, Debug)]
#[command(name = "fellah", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Agricultural region (souss_massa, gharb, doukkala, chaouia_ouardigha, beni_ahsen, other).
    #[arg(long)]
    pub region: Option<Region>,

    /// Crop family (cereals, olives, citrus, tomatoes, argan, dates, saffron).
    #[arg(long)]
    pub crop: Option<Crop>,

    /// Prompt language (local_dialect, french, arabic, english).
    #[arg(long, value_parser = parse_language)]
    pub language: Option<Language>,

    /// Text file sent as extra context with every question.
    #[arg(long)]
    pub context_file: Option<PathBuf>,

    /// Log level override (trace, debug, info, warning, error).
    #[arg(long)]
    pub log_level: Option<LogLevel>,
}

fn parse_language(tag: &str) -> Result<Language, String> {
    Ok(Language::from_tag(tag))
}

pub fn parse() -> Args {
    Args::parse()
}
