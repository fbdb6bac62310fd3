//! # qcmol - 分子几何格式化工具
//!
//! 将 Psi4 风格的分子记录 (molrec JSON) 渲染为量子化学程序的几何输入。
//!
//! ## 子命令
//! - `convert` - 批量格式化 (xyz, cfour, nwchem)
//! - `show`    - 格式化单个记录
//! - `summary` - 汇总记录信息
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/    (molrec 读取)
//!   │     ├── formatters/ (xyz / cfour / nwchem 渲染)
//!   │     └── models/     (数据模型)
//!   ├── physics/    (物理常数)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod formatters;
mod models;
mod parsers;
mod physics;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
