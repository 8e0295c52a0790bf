//! # curve 命令实现
//!
//! 输出指定纳米晶类型的尺寸-波长曲线，格式为终端表格或 CSV（stdout）。
//!
//! ## 依赖关系
//! - 使用 `cli/curve.rs` 定义的参数
//! - 使用 `sizing/curve.rs` 计算
//! - 使用 `tabled` 绘制表格，`csv` 输出 CSV

use crate::cli::curve::{CurveArgs, CurveFormat};
use crate::error::{QdError, Result};
use crate::models::NanocrystalType;
use crate::sizing::{curve_point_count, sizing_curve, CurvePoint, MAX_CURVE_POINTS};
use crate::utils::format::{fixed2, sci2};
use crate::utils::output;

use std::io::{self, Write};
use tabled::{Table, Tabled};

/// 曲线表格行
#[derive(Tabled)]
struct CurveRow {
    #[tabled(rename = "λ (nm)")]
    wavelength: String,
    #[tabled(rename = "D (nm)")]
    diameter: String,
    #[tabled(rename = "ε (M⁻¹cm⁻¹)")]
    extinction: String,
}

/// 执行 curve 命令
pub fn execute(args: CurveArgs) -> Result<()> {
    let nc_type = NanocrystalType::from_name(&args.nc_type).ok_or_else(|| {
        QdError::UnknownNanocrystal {
            name: args.nc_type.clone(),
        }
    })?;

    validate_grid(args.start, args.end, args.step)?;

    let points = sizing_curve(nc_type, args.start, args.end, args.step);

    match args.format {
        CurveFormat::Table => print_table(nc_type, &points),
        CurveFormat::Csv => {
            let stdout = io::stdout();
            write_csv(&points, stdout.lock())
        }
    }
}

/// 校验波长网格
fn validate_grid(start: f64, end: f64, step: f64) -> Result<()> {
    if !step.is_finite() || step <= 0.0 {
        return Err(QdError::InvalidRange(format!(
            "step must be a positive number, got {}",
            step
        )));
    }
    if end < start {
        return Err(QdError::InvalidRange(format!(
            "{}-{} nm (start must not exceed end)",
            start, end
        )));
    }
    if curve_point_count(start, end, step).is_none() {
        return Err(QdError::InvalidRange(format!(
            "{}-{} nm with step {} gives more than {} points",
            start, end, step, MAX_CURVE_POINTS
        )));
    }
    Ok(())
}

/// 打印曲线表格
fn print_table(nc_type: NanocrystalType, points: &[CurvePoint]) -> Result<()> {
    output::print_header(&format!("{} Sizing Curve", nc_type));

    let rows: Vec<CurveRow> = points
        .iter()
        .map(|p| CurveRow {
            wavelength: format!("{:.1}", p.wavelength_nm),
            diameter: if p.valid {
                fixed2(p.diameter_nm)
            } else {
                format!("{} (out of range)", fixed2(p.diameter_nm))
            },
            extinction: p
                .extinction_coefficient
                .map(sci2)
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    println!("{}", Table::new(&rows));

    let valid = points.iter().filter(|p| p.valid).count();
    output::print_separator();
    output::print_info(&format!(
        "{} of {} wavelengths give a diameter within (0, 20] nm",
        valid,
        points.len()
    ));

    Ok(())
}

/// 以 CSV 写出曲线数据
fn write_csv<W: Write>(points: &[CurvePoint], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in points {
        wtr.serialize(point)?;
    }
    wtr.flush()?;
    Ok(())
}
