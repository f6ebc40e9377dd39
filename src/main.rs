mod cli;
mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::Path;

use clap::Parser;

use crate::cli::{Cli, Commands, MsiArg, RasArg, RunArgs};
use crate::input::{MsiStatus, RasStatus};
use crate::error::AppError;
use crate::pipeline::stage1_input::{Stage1Params, run_stage1};
use crate::pipeline::stage2_train::train;
use crate::pipeline::stage3_predict::predict_and_project;
use crate::pipeline::stage5_report::{ReportError, write_reports};
use crate::report::ReportData;
use crate::report::json::render_summary_json;
use crate::report::text::{render_model_text, render_report_text};

const TOOL_NAME: &str = "kira-ctdna-resist";

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Run(args) => run_patient(&args),
        Commands::Model => {
            let model = train()?;
            print!("{}", render_model_text(model));
            Ok(())
        }
    }
}

fn run_patient(args: &RunArgs) -> Result<(), AppError> {
    let input = run_stage1(&Stage1Params {
        ras: match args.ras {
            RasArg::WildType => RasStatus::WildType,
            RasArg::Mutant => RasStatus::Mutant,
        },
        msi: match args.msi {
            MsiArg::Mss => MsiStatus::Mss,
            MsiArg::MsiH => MsiStatus::MsiH,
        },
        nol3: args.nol3,
        ct_baseline: args.ct_baseline,
        ct_month3: args.ct_month3,
    })?;

    let model = train()?;
    let (prediction, trend) = predict_and_project(&input, model)?;

    let data = ReportData {
        tool_name: TOOL_NAME.to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: read_git_hash(Path::new(".")),
        input: &input,
        prediction: &prediction,
        trend: &trend,
        feature_order: model.feature_order(),
        profile: model.profile(),
    };

    if args.json {
        println!("{}", render_summary_json(&data).map_err(ReportError::from)?);
    } else {
        print!("{}", render_report_text(&data));
    }

    if let Some(out_dir) = &args.out {
        write_reports(&data, out_dir)?;
    }

    Ok(())
}

fn read_git_hash(repo_root: &Path) -> Option<String> {
    let head = repo_root.join(".git/HEAD");
    let content = std::fs::read_to_string(head).ok()?;
    if let Some(ref_line) = content.strip_prefix("ref: ") {
        let ref_path = repo_root.join(".git").join(ref_line.trim());
        return std::fs::read_to_string(ref_path)
            .ok()
            .map(|s| s.trim().to_string());
    }
    Some(content.trim().to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
