//! # show 命令实现
//!
//! 格式化单个分子记录并输出。
//!
//! ## 依赖关系
//! - 使用 `cli/show.rs` 定义的参数
//! - 使用 `parsers/`, `formatters/`
//! - 使用 `utils/output.rs`

use crate::cli::show::ShowArgs;
use crate::error::{QcmolError, Result};
use crate::parsers;
use crate::utils::output;

use std::fs;

/// 执行 show 命令
pub fn execute(args: ShowArgs) -> Result<()> {
    let molrec = parsers::parse_record_file(&args.file)?;
    let content = super::render(&molrec, &args.format)?;

    match args.save {
        Some(path) => {
            fs::write(&path, content).map_err(|e| QcmolError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            })?;
            output::print_conversion(
                &args.file.display().to_string(),
                &path.display().to_string(),
            );
        }
        None => print!("{}", content),
    }

    Ok(())
}
