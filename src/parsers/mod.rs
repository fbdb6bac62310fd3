//! # 解析器模块
//!
//! 读取分子记录文件。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: json

pub mod json;

use crate::error::{QcmolError, Result};
use crate::models::MoleculeRecord;
use std::path::Path;

/// 从文件路径推断格式并解析
pub fn parse_record_file(path: &Path) -> Result<MoleculeRecord> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "json" => json::parse_json_file(path),
        _ => Err(QcmolError::UnsupportedFormat(format!(
            "Cannot determine format for: {}",
            path.display()
        ))),
    }
}
