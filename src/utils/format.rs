//! # 数值显示格式
//!
//! 统一结果的显示精度：
//! - 直径：两位小数（`2.35`）
//! - 消光系数 / 浓度：两位小数的科学计数法，指数带符号且至少两位（`5.60e+04`）
//!
//! Rust 内置的 `{:.2e}` 输出 `5.60e4`，这里补齐符号与位数。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用

/// 两位小数定点格式
pub fn fixed2(value: f64) -> String {
    format!("{:.2}", value)
}

/// 两位小数科学计数法，指数形如 `e+04` / `e-06`
pub fn sci2(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let raw = format!("{:.2e}", value);
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => raw,
    }
}
