//! # 物理常数模块
//!
//! 提供长度单位换算所需的物理常数。
//!
//! ## 依赖关系
//! - 被 `models/molecule.rs` 使用
//! - 子模块: constants

pub mod constants;
