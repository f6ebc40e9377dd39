use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::input::{CT_MAX, DEFAULT_CT_BASELINE, DEFAULT_CT_MONTH3, DEFAULT_NOL3};

#[derive(Debug, Parser)]
#[command(
    name = "kira-ctdna-resist",
    version,
    about = "ctDNA-based treatment resistance simulator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score one patient and project the tumor-burden trend.
    Run(RunArgs),
    /// Describe the synthetic training profile and fitted forest.
    Model,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(
        long,
        value_enum,
        ignore_case = true,
        default_value_t = RasArg::WildType,
        help = "RAS status"
    )]
    pub ras: RasArg,

    #[arg(
        long,
        value_enum,
        ignore_case = true,
        default_value_t = MsiArg::Mss,
        help = "MSI status"
    )]
    pub msi: MsiArg,

    #[arg(long, default_value_t = DEFAULT_NOL3, help = "NOL3 expression level in [0, 1]")]
    pub nol3: f64,

    #[arg(
        long,
        default_value_t = DEFAULT_CT_BASELINE,
        value_parser = clap::value_parser!(u32).range(..=i64::from(CT_MAX)),
        help = "ctDNA at baseline (copy/mL)"
    )]
    pub ct_baseline: u32,

    #[arg(
        long = "ct-month3",
        default_value_t = DEFAULT_CT_MONTH3,
        value_parser = clap::value_parser!(u32).range(..=i64::from(CT_MAX)),
        help = "ctDNA at month 3 (copy/mL)"
    )]
    pub ct_month3: u32,

    #[arg(long, help = "Directory for report.txt and summary.json")]
    pub out: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = false,
        help = "Print the JSON summary instead of the text report"
    )]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RasArg {
    #[value(name = "Wild-type", aliases = ["wildtype", "wt"])]
    WildType,
    #[value(name = "Mutant", alias = "mut")]
    Mutant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MsiArg {
    #[value(name = "MSS")]
    Mss,
    #[value(name = "MSI-H", alias = "msih")]
    MsiH,
}

#[cfg(test)]
#[path = "../tests/src_inline/cli.rs"]
mod tests;
