//! # show 子命令 CLI 定义
//!
//! 格式化单个分子记录，输出到终端或文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/show.rs`

use super::convert::FormatArgs;
use clap::Args;
use std::path::PathBuf;

/// show 子命令参数
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Molecule record file (.json)
    pub file: PathBuf,

    #[command(flatten)]
    pub format: FormatArgs,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub save: Option<PathBuf>,
}
