//! # types 命令实现
//!
//! 列出支持的纳米晶类型及其经验公式系数。
//!
//! ## 依赖关系
//! - 使用 `sizing/coefficients.rs` 的系数表
//! - 使用 `tabled` 绘制表格

use crate::error::Result;
use crate::models::NanocrystalType;
use crate::sizing::coefficients::{extinction_power_law, size_polynomial, SizePolynomial};
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct TypeRow {
    #[tabled(rename = "Type")]
    name: String,
    #[tabled(rename = "Diameter D(λ) (nm)")]
    size_formula: String,
    #[tabled(rename = "ε(D) (M⁻¹cm⁻¹)")]
    extinction_formula: String,
}

/// 执行 types 命令
pub fn execute() -> Result<()> {
    output::print_header("Supported Nanocrystal Types");

    let rows: Vec<TypeRow> = NanocrystalType::ALL
        .iter()
        .map(|&nc| {
            let law = extinction_power_law(nc);
            TypeRow {
                name: nc.to_string(),
                size_formula: polynomial_formula(size_polynomial(nc)),
                extinction_formula: format!("{} · D^{}", law.a, law.b),
            }
        })
        .collect();

    println!("{}", Table::new(&rows));
    output::print_info("Valid diameters lie in (0, 20] nm; wavelengths in [300, 1000] nm.");

    Ok(())
}

/// 多项式的可读形式，高次项在前
fn polynomial_formula(poly: &SizePolynomial) -> String {
    let mut terms = Vec::new();
    for i in (0..=poly.degree()).rev() {
        let c = poly.coeffs[i];
        if c == 0.0 {
            continue;
        }
        let coeff = format!("{:e}", c.abs());
        let term = match i {
            0 => coeff,
            1 => format!("{} λ", coeff),
            _ => format!("{} λ^{}", coeff, i),
        };
        let sign = if c < 0.0 { "-" } else { "+" };
        if terms.is_empty() {
            terms.push(if c < 0.0 { format!("-{}", term) } else { term });
        } else {
            terms.push(format!("{} {}", sign, term));
        }
    }
    terms.join(" ")
}
