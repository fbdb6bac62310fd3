//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 批量将 molrec JSON 转为 xyz / cfour / nwchem 文本
//! - `show`: 格式化单个记录并输出到终端
//! - `summary`: 汇总目录下的分子记录
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, show, summary

pub mod convert;
pub mod show;
pub mod summary;

use clap::{Parser, Subcommand};

/// qcmol - 量子化学分子几何格式化工具
#[derive(Parser)]
#[command(name = "qcmol")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Render molecule records as XYZ, CFOUR and NWChem geometry input", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert molecule record files (.json) to xyz, cfour or nwchem text
    Convert(convert::ConvertArgs),

    /// Format a single molecule record and print it
    Show(show::ShowArgs),

    /// Tabulate molecule records found in a directory
    Summary(summary::SummaryArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::OutputFormat;
    use crate::models::Units;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_defaults() {
        let cli = Cli::try_parse_from([
            "qcmol", "convert", "-i", "in", "-o", "out", "-t", "nwchem",
        ])
        .unwrap();
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.format.target, OutputFormat::Nwchem);
        assert_eq!(args.format.units, Units::Angstrom);
        assert_eq!(args.format.width, 17);
        assert_eq!(args.format.prec, 12);
        assert_eq!(args.pattern, "*.json");
        assert!(args.format.ghost_format.is_none());
    }

    #[test]
    fn test_parse_show_empty_ghost_format() {
        let cli = Cli::try_parse_from([
            "qcmol",
            "show",
            "mol.json",
            "--units",
            "Bohr",
            "--ghost-format",
            "",
            "--atom-format",
            "{elez}@{mass}",
        ])
        .unwrap();
        let Commands::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.format.units, Units::Bohr);
        assert!(args.format.ghost_format.unwrap().is_empty());
        assert!(args.format.atom_format.is_some());
    }

    #[test]
    fn test_parse_rejects_bad_units_and_template() {
        assert!(Cli::try_parse_from(["qcmol", "show", "m.json", "--units", "nm"]).is_err());
        assert!(
            Cli::try_parse_from(["qcmol", "show", "m.json", "--atom-format", "{real}"]).is_err()
        );
    }
}
