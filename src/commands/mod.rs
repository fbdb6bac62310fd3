//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `formatters/`, `utils/`
//! - 子模块: convert, show, summary

pub mod convert;
pub mod show;
pub mod summary;

use crate::cli::convert::FormatArgs;
use crate::cli::Commands;
use crate::error::Result;
use crate::formatters;
use crate::models::MoleculeRecord;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Convert(args) => convert::execute(args),
        Commands::Show(args) => show::execute(args),
        Commands::Summary(args) => summary::execute(args),
    }
}

/// 按命令行格式选项渲染记录
fn render(molrec: &MoleculeRecord, format: &FormatArgs) -> Result<String> {
    formatters::to_string(
        molrec,
        format.target,
        format.units,
        format.atom_format.as_ref(),
        format.ghost_format.as_ref(),
        format.width,
        format.prec,
    )
}
