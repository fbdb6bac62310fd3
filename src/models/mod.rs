//! # 数据模型模块
//!
//! 定义分子记录及长度单位。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `formatters/` 和 `commands/` 使用
//! - 子模块: molecule

pub mod molecule;

pub use molecule::{MoleculeRecord, Units};
