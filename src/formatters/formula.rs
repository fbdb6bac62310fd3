//! # 化学式生成
//!
//! 按元素符号字典序统计个数，生成简单化学式（非 Hill 顺序）。

use std::collections::BTreeMap;

/// 由元素符号列表生成化学式，计数为 1 时省略数字
pub fn formula_generator<S: AsRef<str>>(elem: &[S]) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    for el in elem {
        *counts.entry(el.as_ref()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(el, count)| {
            if count == 1 {
                el.to_string()
            } else {
                format!("{}{}", el, count)
            }
        })
        .collect::<Vec<_>>()
        .join("")
}
