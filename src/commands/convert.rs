//! # convert 命令实现
//!
//! 批量格式化分子记录。
//!
//! ## 功能
//! - 读取 molrec .json 文件
//! - 渲染为 xyz, cfour (ZMAT), nwchem 文本
//! - 支持并行处理
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `parsers/`, `formatters/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/files.rs`

use crate::cli::convert::{ConvertArgs, FormatArgs};
use crate::error::{QcmolError, Result};
use crate::parsers;
use crate::utils::{files, output, progress};

use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    output::print_header(&format!("Formatting as {}", args.format.target));

    // 收集输入文件
    let files = files::collect_input_files(&args.input, &args.pattern, args.recursive)?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.pattern,
            args.input.display()
        ));
        return Ok(());
    }

    // 创建输出目录
    fs::create_dir_all(&args.output).map_err(|e| QcmolError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    output::print_info(&format!(
        "Found {} files, writing coordinates in {}",
        files.len(),
        args.format.units
    ));

    // 设置并行度
    let num_threads = if args.jobs == 0 {
        num_cpus::get()
    } else {
        args.jobs
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok();

    let pb = progress::create_progress_bar(files.len() as u64, "Formatting");
    let success_count = AtomicUsize::new(0);
    let skip_count = AtomicUsize::new(0);
    let fail_count = AtomicUsize::new(0);

    files.par_iter().for_each(|input_path| {
        match convert_file(input_path, &args.output, &args.format, args.overwrite) {
            Ok(ConvertStatus::Success) => {
                success_count.fetch_add(1, Ordering::SeqCst);
            }
            Ok(ConvertStatus::Skipped) => {
                skip_count.fetch_add(1, Ordering::SeqCst);
            }
            Err(e) => {
                fail_count.fetch_add(1, Ordering::SeqCst);
                pb.suspend(|| {
                    output::print_error(&format!("{}: {}", input_path.display(), e));
                });
            }
        }
        pb.inc(1);
    });

    pb.finish_with_message("Done");

    output::print_done(&format!(
        "Wrote {} file(s) as '{}' to '{}' ({} skipped, {} failed)",
        success_count.load(Ordering::SeqCst),
        args.format.target,
        args.output.display(),
        skip_count.load(Ordering::SeqCst),
        fail_count.load(Ordering::SeqCst)
    ));

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum ConvertStatus {
    Success,
    Skipped,
}

/// 格式化单个文件
fn convert_file(
    input_path: &Path,
    output_dir: &Path,
    format: &FormatArgs,
    overwrite: bool,
) -> Result<ConvertStatus> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("molecule");

    let output_path = output_dir.join(format.target.output_file_name(stem));

    // 检查是否需要跳过
    if output_path.exists() && !overwrite {
        return Ok(ConvertStatus::Skipped);
    }

    let molrec = parsers::parse_record_file(input_path)?;
    let content = super::render(&molrec, format)?;

    fs::write(&output_path, content).map_err(|e| QcmolError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(ConvertStatus::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::{OutputFormat, DEFAULT_PREC, DEFAULT_WIDTH};
    use crate::models::Units;

    const H2: &str = r#"{"units": "Bohr", "elem": ["H", "H"], "elez": [1, 1],
        "elea": [-1, -1], "mass": [1.00782503223, 1.00782503223], "elbl": ["", ""],
        "real": [true, true], "geom": [0.0, 0.0, 0.0, 0.0, 0.0, 1.4]}"#;

    fn format_args(target: OutputFormat) -> FormatArgs {
        FormatArgs {
            target,
            units: Units::Bohr,
            atom_format: None,
            ghost_format: None,
            width: DEFAULT_WIDTH,
            prec: DEFAULT_PREC,
        }
    }

    #[test]
    fn test_convert_file_writes_and_skips() {
        let dir = std::env::temp_dir().join(format!("qcmol_convert_{}", std::process::id()));
        let out = dir.join("out");
        fs::create_dir_all(&out).unwrap();
        let input = dir.join("h2.json");
        fs::write(&input, H2).unwrap();

        let format = format_args(OutputFormat::Nwchem);
        assert_eq!(
            convert_file(&input, &out, &format, false).unwrap(),
            ConvertStatus::Success
        );

        let written = fs::read_to_string(out.join("h2.nw")).unwrap();
        assert!(written.starts_with("geometry units bohr\nH "));
        assert!(written.ends_with("\nend\n"));

        assert_eq!(
            convert_file(&input, &out, &format, false).unwrap(),
            ConvertStatus::Skipped
        );
        assert_eq!(
            convert_file(&input, &out, &format, true).unwrap(),
            ConvertStatus::Success
        );

        let cfour = format_args(OutputFormat::Cfour);
        convert_file(&input, &out, &cfour, false).unwrap();
        let zmat = fs::read_to_string(out.join("ZMAT_h2")).unwrap();
        assert_eq!(zmat.lines().next(), Some("auto-generated by qcmol from molecule H2"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_convert_file_reports_bad_record() {
        let dir = std::env::temp_dir().join(format!("qcmol_convert_bad_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("bad.json");
        fs::write(&input, H2.replace("\"Bohr\"", "\"pm\"")).unwrap();

        let err = convert_file(&input, &dir, &format_args(OutputFormat::Xyz), false).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
        assert!(!dir.join("bad.xyz").exists());

        fs::remove_dir_all(&dir).ok();
    }
}
