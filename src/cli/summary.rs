//! # summary 子命令 CLI 定义
//!
//! 汇总目录下的分子记录（名称、化学式、原子数、单位、电荷）
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/summary.rs`

use clap::Args;
use std::path::PathBuf;

/// summary 子命令参数
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Directory containing molecule record files
    pub input: PathBuf,

    /// Glob pattern for input files
    #[arg(short, long, default_value = "*.json")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Also write the table to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
