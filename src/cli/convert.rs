//! # convert 子命令 CLI 定义
//!
//! 批量格式化分子记录 (.json -> .xyz / ZMAT / .nw)
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use crate::formatters::{LabelTemplate, OutputFormat, DEFAULT_PREC, DEFAULT_WIDTH};
use crate::models::Units;
use clap::Args;
use std::path::PathBuf;

/// 格式化选项，`convert` 与 `show` 共用
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Target output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Xyz)]
    pub target: OutputFormat,

    /// Length units of the written coordinates (Angstrom or Bohr)
    #[arg(short, long, default_value = "Angstrom", env = "QCMOL_UNITS")]
    pub units: Units,

    /// Label template for real atoms, e.g. '{elez}@{mass}' (xyz only)
    #[arg(long)]
    pub atom_format: Option<LabelTemplate>,

    /// Label template for ghost atoms; '' drops ghost atoms (xyz only)
    #[arg(long)]
    pub ghost_format: Option<LabelTemplate>,

    /// Field width of labels and coordinates
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Number of decimal places for coordinates
    #[arg(long, default_value_t = DEFAULT_PREC)]
    pub prec: usize,
}

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input directory containing molecule record files
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for formatted files
    #[arg(short, long)]
    pub output: PathBuf,

    #[command(flatten)]
    pub format: FormatArgs,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Glob pattern for input files
    #[arg(short, long, default_value = "*.json")]
    pub pattern: String,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
