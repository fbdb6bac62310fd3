//! # summary 命令实现
//!
//! 汇总目录下的分子记录。
//!
//! ## 功能
//! - 读取所有匹配的 molrec 文件
//! - 生成终端表格和可选 CSV 输出
//!
//! ## 依赖关系
//! - 使用 `cli/summary.rs` 定义的参数
//! - 使用 `parsers/`, `models/`
//! - 使用 `utils/output.rs`, `utils/files.rs`

use crate::cli::summary::SummaryArgs;
use crate::error::{QcmolError, Result};
use crate::models::MoleculeRecord;
use crate::parsers;
use crate::utils::{files, output};

use std::path::Path;
use tabled::{Table, Tabled};

/// 汇总表格行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Formula")]
    formula: String,
    #[tabled(rename = "Atoms")]
    atoms: usize,
    #[tabled(rename = "Ghosts")]
    ghosts: usize,
    #[tabled(rename = "Units")]
    units: String,
    #[tabled(rename = "Charge")]
    charge: String,
}

impl SummaryRow {
    fn new(file: &Path, molrec: &MoleculeRecord) -> Self {
        SummaryRow {
            file: file
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            name: molrec.display_name(),
            formula: molrec.formula(),
            atoms: molrec.natom(),
            ghosts: molrec.nghost(),
            units: molrec.units.to_string(),
            charge: molrec
                .molecular_charge
                .map(|q| format!("{}", q))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// 执行 summary 命令
pub fn execute(args: SummaryArgs) -> Result<()> {
    output::print_header("Molecule Record Summary");

    let files = files::collect_input_files(&args.input, &args.pattern, args.recursive)?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.pattern,
            args.input.display()
        ));
        return Ok(());
    }

    let mut rows = Vec::with_capacity(files.len());
    for path in &files {
        match parsers::parse_record_file(path) {
            Ok(molrec) => rows.push(SummaryRow::new(path, &molrec)),
            Err(e) => output::print_warning(&format!("Skipping {}: {}", path.display(), e)),
        }
    }

    output::print_info(&format!("Read {} of {} records", rows.len(), files.len()));
    println!("{}", Table::new(&rows));

    if let Some(ref csv_path) = args.csv {
        save_summary_csv(&rows, csv_path)?;
        output::print_success(&format!("Summary saved to '{}'", csv_path.display()));
    }

    Ok(())
}

/// 保存汇总到 CSV
fn save_summary_csv(rows: &[SummaryRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["file", "name", "formula", "atoms", "ghosts", "units", "charge"])?;

    for row in rows {
        wtr.write_record([
            row.file.clone(),
            row.name.clone(),
            row.formula.clone(),
            row.atoms.to_string(),
            row.ghosts.to_string(),
            row.units.clone(),
            row.charge.clone(),
        ])?;
    }

    wtr.flush().map_err(|e| QcmolError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;
    use std::fs;

    #[test]
    fn test_summary_row() {
        let row = SummaryRow::new(Path::new("/data/ne_he.json"), &fixtures::ghosted_dimer());
        assert_eq!(row.file, "ne_he.json");
        assert_eq!(row.name, "HeNe");
        assert_eq!(row.atoms, 2);
        assert_eq!(row.ghosts, 1);
        assert_eq!(row.units, "Bohr");
        assert_eq!(row.charge, "-");
    }

    #[test]
    fn test_save_summary_csv() {
        let path = std::env::temp_dir().join(format!("qcmol_summary_{}.csv", std::process::id()));
        let rows = vec![SummaryRow::new(Path::new("water.json"), &fixtures::water())];
        save_summary_csv(&rows, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("file,name,formula,atoms,ghosts,units,charge"));
        assert_eq!(lines.next(), Some("water.json,water,H2O,3,0,Angstrom,-"));

        fs::remove_file(&path).ok();
    }
}
