//! # estimate 命令实现
//!
//! 单次估算：直径 → 消光系数 → 浓度，并在终端显示结果或警告。
//!
//! ## 显示规则
//! - 未知类型：返回 `UnknownNanocrystal` 错误（通用失败信息）
//! - 直径超出 (0, 20] nm：警告并停止，不显示消光系数与浓度
//! - 未提供吸光度：提示如何计算浓度
//! - 浓度无法计算（如光程为 0）：警告
//!
//! ## 依赖关系
//! - 使用 `cli/estimate.rs` 定义的参数
//! - 使用 `sizing/calculator.rs` 计算
//! - 使用 `utils/output.rs`, `utils/format.rs` 输出

use crate::cli::estimate::EstimateArgs;
use crate::error::{QdError, Result};
use crate::sizing::calculator::{is_valid_diameter, DIAMETER_MAX_NM};
use crate::sizing::{self, ConcentrationOutcome, Estimate};
use crate::utils::format::{fixed2, sci2};
use crate::utils::output;

/// 执行 estimate 命令
pub fn execute(args: EstimateArgs) -> Result<()> {
    output::print_header("Quantum Dot Size & Concentration");

    let estimate = sizing::estimate(
        &args.nc_type,
        args.wavelength,
        args.absorbance,
        Some(args.path_length),
    );

    for line in render(&estimate, args.path_length)? {
        line.print();
    }

    Ok(())
}

/// 一行终端输出
#[derive(Debug, Clone, PartialEq)]
enum Line {
    Info(String),
    Result {
        label: &'static str,
        value: String,
        unit: &'static str,
    },
    Warning(String),
}

impl Line {
    fn print(&self) {
        match self {
            Line::Info(msg) => output::print_info(msg),
            Line::Result { label, value, unit } => output::print_result(label, value, unit),
            Line::Warning(msg) => output::print_warning(msg),
        }
    }
}

/// 被拒绝直径的显示文本
///
/// 两位小数舍入后若落回 (0, 20]（如 20.004 → 20.00），改用完整精度。
fn rejected_diameter(diameter: f64) -> String {
    let rounded = fixed2(diameter);
    match rounded.parse::<f64>() {
        Ok(r) if is_valid_diameter(r) => diameter.to_string(),
        _ => rounded,
    }
}

/// 将估算结果转换为输出行
///
/// 未知类型直接返回错误，由 `main` 统一打印。
fn render(estimate: &Estimate, path_length: f64) -> Result<Vec<Line>> {
    match estimate {
        Estimate::UnknownType { name } => Err(QdError::UnknownNanocrystal { name: name.clone() }),

        Estimate::DiameterOutOfRange {
            nc_type,
            wavelength,
            diameter,
        } => Ok(vec![
            Line::Info(format!("{} at {} nm", nc_type, wavelength)),
            Line::Result {
                label: "Calculated Diameter",
                value: fixed2(*diameter),
                unit: "nm",
            },
            Line::Warning(format!(
                "Diameter {} nm is outside the physical range (0, {}] nm; \
                 the sizing curve is unreliable here. Extinction coefficient and \
                 concentration were not computed.",
                rejected_diameter(*diameter),
                DIAMETER_MAX_NM
            )),
        ]),

        Estimate::Sized {
            nc_type,
            wavelength,
            diameter,
            extinction_coefficient,
            concentration,
        } => {
            let mut lines = vec![
                Line::Info(format!("{} at {} nm", nc_type, wavelength)),
                Line::Result {
                    label: "Calculated Diameter",
                    value: fixed2(*diameter),
                    unit: "nm",
                },
                Line::Result {
                    label: "Extinction Coefficient",
                    value: sci2(*extinction_coefficient),
                    unit: "M⁻¹cm⁻¹",
                },
            ];

            lines.push(match concentration {
                ConcentrationOutcome::Computed(c) => Line::Result {
                    label: "Calculated Concentration",
                    value: sci2(*c),
                    unit: "M",
                },
                ConcentrationOutcome::Undefined => Line::Warning(format!(
                    "Could not compute concentration (path length {} cm).",
                    path_length
                )),
                ConcentrationOutcome::NotRequested => Line::Info(
                    "Provide --absorbance (and --path-length) to compute concentration."
                        .to_string(),
                ),
            });

            Ok(lines)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NanocrystalType;

    fn result_value(lines: &[Line], wanted: &str) -> Option<String> {
        lines.iter().find_map(|l| match l {
            Line::Result { label, value, .. } if *label == wanted => Some(value.clone()),
            _ => None,
        })
    }

    #[test]
    fn test_render_full_pipeline() {
        let est = sizing::estimate("CdSe", 600.0, Some(0.5), Some(1.0));
        let lines = render(&est, 1.0).unwrap();

        assert_eq!(result_value(&lines, "Calculated Diameter").unwrap(), "4.58");
        assert_eq!(
            result_value(&lines, "Extinction Coefficient").unwrap(),
            "3.31e+05"
        );
        assert_eq!(
            result_value(&lines, "Calculated Concentration").unwrap(),
            "1.51e-06"
        );
        assert!(!lines.iter().any(|l| matches!(l, Line::Warning(_))));
    }

    #[test]
    fn test_render_out_of_range_omits_downstream() {
        let est = sizing::estimate("CdSe", 800.0, Some(0.5), Some(1.0));
        let lines = render(&est, 1.0).unwrap();

        assert!(result_value(&lines, "Calculated Diameter").is_some());
        assert!(result_value(&lines, "Extinction Coefficient").is_none());
        assert!(result_value(&lines, "Calculated Concentration").is_none());
        assert!(matches!(lines.last(), Some(Line::Warning(_))));
    }

    #[test]
    fn test_rejected_diameter_never_reads_as_valid() {
        assert_eq!(rejected_diameter(20.004), "20.004");
        assert_eq!(rejected_diameter(20.0001), "20.0001");
        assert_eq!(rejected_diameter(38.61512), "38.62");
        assert_eq!(rejected_diameter(-20.74871), "-20.75");
    }

    #[test]
    fn test_render_just_over_bound_warns_and_halts() {
        let est = Estimate::DiameterOutOfRange {
            nc_type: NanocrystalType::CdS,
            wavelength: 690.0,
            diameter: 20.0001,
        };
        let lines = render(&est, 1.0).unwrap();

        assert!(result_value(&lines, "Extinction Coefficient").is_none());
        assert!(result_value(&lines, "Calculated Concentration").is_none());
        match lines.last() {
            Some(Line::Warning(msg)) => {
                assert!(msg.contains("Diameter 20.0001 nm"), "got: {}", msg);
                assert!(!msg.contains("20.00 nm"), "got: {}", msg);
            }
            other => panic!("expected warning, got {:?}", other),
        }
    }

    #[test]
    fn test_render_missing_absorbance_prompts() {
        let est = sizing::estimate("CdS", 450.0, None, Some(1.0));
        let lines = render(&est, 1.0).unwrap();
        assert!(matches!(lines.last(), Some(Line::Info(msg)) if msg.contains("--absorbance")));
    }

    #[test]
    fn test_render_zero_path_length_warns() {
        let est = sizing::estimate("CdTe", 600.0, Some(0.2), Some(0.0));
        let lines = render(&est, 0.0).unwrap();
        assert!(
            matches!(lines.last(), Some(Line::Warning(msg)) if msg.contains("Could not compute"))
        );
    }

    #[test]
    fn test_render_unknown_type_fails() {
        let est = sizing::estimate("InP", 600.0, None, Some(1.0));
        assert!(matches!(
            render(&est, 1.0),
            Err(QdError::UnknownNanocrystal { .. })
        ));
    }
}
