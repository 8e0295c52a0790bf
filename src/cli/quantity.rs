//! # 物理量参数解析
//!
//! 解析带可选单位的数值参数，供 clap `value_parser` 使用：
//! - 波长：`512.3` / `512.3nm` / `512.3 nm`，必须在 [300, 1000] nm 内
//! - 光程：`1` / `1cm` / `10mm`（统一换算为 cm），必须 ≥ 0
//! - 吸光度：无量纲，必须 ≥ 0
//!
//! ## 依赖关系
//! - 被 `cli/estimate.rs` 和 `cli/curve.rs` 使用
//! - 使用 `regex` crate

use crate::sizing::calculator::{WAVELENGTH_MAX_NM, WAVELENGTH_MIN_NM};

use regex::Regex;
use std::sync::LazyLock;

/// 数值 + 可选单位
static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*([a-zA-Zμ]*)\s*$").unwrap()
});

/// 拆分数值与单位（单位转为小写，可能为空）
fn split_quantity(input: &str) -> Result<(f64, String), String> {
    let caps = QUANTITY_RE
        .captures(input)
        .ok_or_else(|| format!("'{}' is not a number", input))?;

    let value: f64 = caps[1]
        .parse()
        .map_err(|_| format!("'{}' is not a number", input))?;
    let unit = caps
        .get(2)
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_default();

    Ok((value, unit))
}

/// 解析吸收峰波长（nm）
pub fn parse_wavelength(input: &str) -> Result<f64, String> {
    let (value, unit) = split_quantity(input)?;
    if !unit.is_empty() && unit != "nm" {
        return Err(format!("Unsupported wavelength unit '{}' (use nm)", unit));
    }
    if !(WAVELENGTH_MIN_NM..=WAVELENGTH_MAX_NM).contains(&value) {
        return Err(format!(
            "Wavelength {} nm is outside the supported range [{}, {}] nm",
            value, WAVELENGTH_MIN_NM, WAVELENGTH_MAX_NM
        ));
    }
    Ok(value)
}

/// 解析光程（返回 cm）
pub fn parse_path_length(input: &str) -> Result<f64, String> {
    let (value, unit) = split_quantity(input)?;
    let cm = match unit.as_str() {
        "" | "cm" => value,
        "mm" => value / 10.0,
        other => {
            return Err(format!(
                "Unsupported path length unit '{}' (use cm or mm)",
                other
            ))
        }
    };
    if cm < 0.0 {
        return Err(format!("Path length must be >= 0, got '{}'", input));
    }
    Ok(cm)
}

/// 解析吸光度（无量纲）
pub fn parse_absorbance(input: &str) -> Result<f64, String> {
    let (value, unit) = split_quantity(input)?;
    if !unit.is_empty() {
        return Err(format!("Absorbance is dimensionless, got unit '{}'", unit));
    }
    if value < 0.0 {
        return Err(format!("Absorbance must be >= 0, got '{}'", input));
    }
    Ok(value)
}
