//! # 原子标签模板
//!
//! 将 `'{elez}@{mass}'` 这类模板解析为字面量与字段片段，渲染时只做查表拼接。
//! 支持的字段: `elea`, `elez`, `elem`, `mass`, `elbl`；`{{` 与 `}}` 转义花括号。
//!
//! ## 依赖关系
//! - 被 `formatters/atoms.rs` 和 `cli/` 使用
//! - 使用 `regex` crate

use crate::error::{QcmolError, Result};
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

/// 模板可引用的原子字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomField {
    /// 质量数（未指定时为空串）
    Elea,
    /// 原子序数
    Elez,
    /// 元素符号
    Elem,
    /// 原子质量
    Mass,
    /// 自由标签
    Elbl,
}

impl FromStr for AtomField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "elea" => Ok(AtomField::Elea),
            "elez" => Ok(AtomField::Elez),
            "elem" => Ok(AtomField::Elem),
            "mass" => Ok(AtomField::Mass),
            "elbl" => Ok(AtomField::Elbl),
            other => Err(format!(
                "unknown field '{{{}}}', expected one of elea, elez, elem, mass, elbl",
                other
            )),
        }
    }
}

/// 单个原子的字段取值
#[derive(Debug, Clone, Copy)]
pub struct AtomInfo<'a> {
    pub elea: Option<i32>,
    pub elez: u32,
    pub elem: &'a str,
    pub mass: f64,
    pub elbl: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Field(AtomField),
}

/// 已解析的原子标签模板
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTemplate {
    segments: Vec<Segment>,
}

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| {
        Regex::new(r"\{\{|\}\}|\{([^{}]*)\}|[{}]").expect("token pattern is a valid regex")
    })
}

impl LabelTemplate {
    /// 解析模板字符串
    pub fn parse(template: &str) -> Result<Self> {
        let invalid = |reason: String| QcmolError::InvalidTemplate {
            template: template.to_string(),
            reason,
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut last = 0;

        for caps in token_regex().captures_iter(template) {
            let whole = caps.get(0).expect("capture group 0 always matches");
            literal.push_str(&template[last..whole.start()]);
            last = whole.end();

            match whole.as_str() {
                "{{" => literal.push('{'),
                "}}" => literal.push('}'),
                "{" | "}" => {
                    return Err(invalid(format!(
                        "unbalanced '{}' at offset {}",
                        whole.as_str(),
                        whole.start()
                    )))
                }
                _ => {
                    let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
                    let field = name.parse::<AtomField>().map_err(invalid)?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));
                }
            }
        }

        literal.push_str(&template[last..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(LabelTemplate { segments })
    }

    /// 固定文本模板
    pub fn literal(text: &str) -> Self {
        let segments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Literal(text.to_string())]
        };
        LabelTemplate { segments }
    }

    /// `{elem}`
    pub fn element() -> Self {
        LabelTemplate {
            segments: vec![Segment::Field(AtomField::Elem)],
        }
    }

    /// `@{elem}`
    pub fn ghost_element() -> Self {
        LabelTemplate {
            segments: vec![
                Segment::Literal("@".to_string()),
                Segment::Field(AtomField::Elem),
            ],
        }
    }

    /// 空模板：作为 ghost 模板时隐藏 ghost 原子
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn render(&self, info: &AtomInfo) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(AtomField::Elea) => {
                    if let Some(a) = info.elea {
                        out.push_str(&a.to_string());
                    }
                }
                Segment::Field(AtomField::Elez) => out.push_str(&info.elez.to_string()),
                Segment::Field(AtomField::Elem) => out.push_str(info.elem),
                Segment::Field(AtomField::Mass) => out.push_str(&format_mass(info.mass)),
                Segment::Field(AtomField::Elbl) => out.push_str(info.elbl),
            }
        }
        out
    }
}

impl FromStr for LabelTemplate {
    type Err = QcmolError;

    fn from_str(s: &str) -> Result<Self> {
        LabelTemplate::parse(s)
    }
}

/// 最短往返表示，整数值保留 `.0`
fn format_mass(mass: f64) -> String {
    let s = mass.to_string();
    if mass.is_finite() && !s.contains('.') {
        format!("{}.0", s)
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oxygen() -> AtomInfo<'static> {
        AtomInfo {
            elea: Some(18),
            elez: 8,
            elem: "O",
            mass: 17.99915961286,
            elbl: "_w",
        }
    }

    #[test]
    fn test_render_fields() {
        let t = LabelTemplate::parse("{elez}@{mass}").unwrap();
        assert_eq!(t.render(&oxygen()), "8@17.99915961286");

        let t = LabelTemplate::parse("{elea}{elem}{elbl}").unwrap();
        assert_eq!(t.render(&oxygen()), "18O_w");
    }

    #[test]
    fn test_missing_mass_number_renders_empty() {
        let t = LabelTemplate::parse("{elea}{elem}").unwrap();
        let info = AtomInfo {
            elea: None,
            ..oxygen()
        };
        assert_eq!(t.render(&info), "O");
    }

    #[test]
    fn test_integral_mass_keeps_decimal_point() {
        let t = LabelTemplate::parse("{mass}").unwrap();
        let info = AtomInfo {
            mass: 12.0,
            ..oxygen()
        };
        assert_eq!(t.render(&info), "12.0");
    }

    #[test]
    fn test_builtin_templates_match_parsed() {
        assert_eq!(LabelTemplate::element(), LabelTemplate::parse("{elem}").unwrap());
        assert_eq!(
            LabelTemplate::ghost_element(),
            LabelTemplate::parse("@{elem}").unwrap()
        );
        assert_eq!(LabelTemplate::literal("GH"), LabelTemplate::parse("GH").unwrap());
    }

    #[test]
    fn test_escaped_braces() {
        let t = LabelTemplate::parse("{{{elem}}}").unwrap();
        assert_eq!(t.render(&oxygen()), "{O}");
    }

    #[test]
    fn test_empty_template() {
        assert!(LabelTemplate::parse("").unwrap().is_empty());
        assert!(LabelTemplate::literal("").is_empty());
        assert!(!LabelTemplate::literal("GH").is_empty());
    }

    #[test]
    fn test_rejects_unknown_field() {
        let err = LabelTemplate::parse("{real}").unwrap_err();
        assert!(matches!(err, QcmolError::InvalidTemplate { .. }));
        assert!(err.to_string().contains("unknown field '{real}'"));
    }

    #[test]
    fn test_rejects_format_spec_and_unbalanced() {
        assert!(LabelTemplate::parse("{elem:>4}").is_err());
        assert!(LabelTemplate::parse("{elem").is_err());
        assert!(LabelTemplate::parse("elem}").is_err());
    }
}
