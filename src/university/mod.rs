use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::input::InputError;
use crate::pipeline::stage3_render::RenderError;

pub mod dataset;
pub mod estimate;
pub mod ratio_chart;
pub mod table_html;

use dataset::{builtin_universities, load_universities_csv, write_universities_csv};
use estimate::estimate_missing;
use ratio_chart::{build_ratio_chart, render_ratio_chart};
use table_html::render_ratio_table_html;

pub const TABLE_TITLE: &str = "2024年研究生/本科生比排名";

#[derive(Debug, Error)]
pub enum UniversityError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("university dataset is empty")]
    Empty,
    #[error("no record has known master counts to estimate from")]
    NoKnownRatios,
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, Clone)]
pub struct UniversityOutputs {
    pub data_csv: PathBuf,
    pub table_html: PathBuf,
    pub ratio_chart: PathBuf,
    pub records: usize,
    pub estimated: usize,
}

pub fn run_universities(
    input: Option<&Path>,
    out_dir: &Path,
) -> Result<UniversityOutputs, UniversityError> {
    let mut records = match input {
        Some(path) => load_universities_csv(path)?,
        None => builtin_universities(),
    };
    if records.is_empty() {
        return Err(UniversityError::Empty);
    }
    let estimated = estimate_missing(&mut records)?;
    info!("estimated master/doctorate counts for {estimated} universities");

    fs::create_dir_all(out_dir)?;

    let data_csv = out_dir.join("university_data.csv");
    write_universities_csv(&data_csv, &records)?;

    let table_html = out_dir.join("university_table.html");
    fs::write(&table_html, render_ratio_table_html(&records, TABLE_TITLE))?;

    let ratio_chart = out_dir.join("ratio_chart.png");
    render_ratio_chart(&build_ratio_chart(&records), &ratio_chart)?;

    Ok(UniversityOutputs {
        data_csv,
        table_html,
        ratio_chart,
        records: records.len(),
        estimated,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/university/tests.rs"]
mod tests;
