mod compose;
mod error;
mod input;
mod logging;
mod markup;
mod model;
mod pipeline;
mod report;
mod university;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::error::AppError;
use crate::model::profile::{ChartProfile, ProfileKind};
use crate::pipeline::stage1_table::run_stage1;
use crate::pipeline::stage2_layout::run_stage2;
use crate::pipeline::stage3_render::{ensure_parent_dir, render_chart};
use crate::pipeline::stage4_summary::{Stage4Input, run_stage4};
use crate::report::json::write_summary_json;
use crate::report::text::render_summary_text;

#[derive(Debug, Parser)]
#[command(name = "scoreviz", version, about = "Exam score distribution charts and ranking reports")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a mirrored score-distribution chart with threshold and median markers
    Distribution(DistributionArgs),
    /// Extract <tr>/<td> rows from an HTML page into CSV
    ExtractTable {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Place two images side by side
    Merge {
        #[arg(long)]
        left: PathBuf,
        #[arg(long)]
        right: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write the university ratio table, ratio chart and enriched dataset
    Universities {
        /// CSV replacing the built-in 2024 dataset
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        out_dir: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProfileArg {
    Gaokao,
    Zhongkao,
}

impl From<ProfileArg> for ProfileKind {
    fn from(value: ProfileArg) -> Self {
        match value {
            ProfileArg::Gaokao => ProfileKind::Gaokao,
            ProfileArg::Zhongkao => ProfileKind::Zhongkao,
        }
    }
}

#[derive(Debug, Args)]
struct DistributionArgs {
    #[arg(long, value_enum)]
    profile: ProfileArg,
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Also write a JSON summary of the rendered chart
    #[arg(long)]
    summary: Option<PathBuf>,
    #[arg(long, default_value_t = 50.0)]
    percentile: f64,
    /// Override the profile's output resolution
    #[arg(long, value_parser = parse_dpi)]
    dpi: Option<f64>,
}

const MAX_DPI: f64 = 1200.0;

fn parse_dpi(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 && v <= MAX_DPI => Ok(v),
        _ => Err(format!("expected a dpi in (0, {MAX_DPI}], got {s:?}")),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Distribution(args) => run_distribution(&args),
        Command::ExtractTable { input, out } => {
            let rows = markup::extract_table_file(&input, &out)?;
            info!("extracted {rows} rows to {}", display_abs(&out));
            Ok(())
        }
        Command::Merge { left, right, out } => {
            let (w, h) = compose::merge_files(&left, &right, &out)?;
            info!("merged image ({w}x{h}) saved to {}", display_abs(&out));
            Ok(())
        }
        Command::Universities { input, out_dir } => {
            let outputs = university::run_universities(input.as_deref(), &out_dir)?;
            info!(
                "wrote {} universities ({} estimated) to {}, {} and {}",
                outputs.records,
                outputs.estimated,
                outputs.data_csv.display(),
                outputs.table_html.display(),
                outputs.ratio_chart.display()
            );
            Ok(())
        }
    }
}

fn run_distribution(args: &DistributionArgs) -> Result<(), AppError> {
    let mut profile = ChartProfile::for_kind(args.profile.into());
    if let Some(dpi) = args.dpi {
        profile.style.dpi = dpi;
    }

    let stage1 = run_stage1(&args.input, &profile)?;
    info!(
        "loaded {} score bands from {} ({} dropped)",
        stage1.table.len(),
        args.input.display(),
        stage1.dropped_rows
    );

    let layout = run_stage2(&stage1.table, &profile, args.percentile)?;
    render_chart(&layout, &profile.style, profile.show_spines, &args.out)?;
    info!(
        "{} score distribution plot saved to: {}",
        profile.name,
        display_abs(&args.out)
    );

    let summary = run_stage4(&Stage4Input {
        stage1: &stage1,
        layout: &layout,
        profile: &profile,
        input_path: &args.input,
        output_path: &args.out,
    });
    if let Some(path) = &args.summary {
        ensure_parent_dir(path)?;
        write_summary_json(path, &summary)?;
    }
    print!("{}", render_summary_text(&summary));
    Ok(())
}

fn display_abs(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
