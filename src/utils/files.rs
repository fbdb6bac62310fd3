//! # 输入文件收集
//!
//! 按 glob 模式在目录中查找记录文件。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`, `commands/summary.rs` 使用
//! - 使用 `walkdir`, `glob` crate

use crate::error::{QcmolError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 收集输入文件，结果按路径排序
pub fn collect_input_files(input_dir: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(QcmolError::DirectoryNotFound {
            path: input_dir.display().to_string(),
        });
    }

    let walker = if recursive {
        WalkDir::new(input_dir)
    } else {
        WalkDir::new(input_dir).max_depth(1)
    };

    let glob_pattern = glob::Pattern::new(pattern).map_err(|e| {
        QcmolError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
    })?;

    let mut files = Vec::new();
    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            if let Some(name) = entry.file_name().to_str() {
                if glob_pattern.matches(name) {
                    files.push(entry.path().to_path_buf());
                }
            }
        }
    }

    files.sort();
    Ok(files)
}
