//! # 尺寸曲线
//!
//! 在波长网格上计算直径与消光系数，生成尺寸-波长对照曲线。
//!
//! ## 依赖关系
//! - 被 `commands/curve.rs` 调用
//! - 使用 `sizing/calculator.rs` 的公式与域检查

use crate::models::NanocrystalType;
use crate::sizing::calculator::is_valid_diameter;

use serde::Serialize;

/// 曲线上的一个点
#[derive(Debug, Clone, Serialize)]
pub struct CurvePoint {
    /// 吸收峰波长（nm）
    pub wavelength_nm: f64,
    /// 直径（nm），可能超出有效范围
    pub diameter_nm: f64,
    /// 消光系数（M⁻¹·cm⁻¹），仅直径有效时存在
    pub extinction_coefficient: Option<f64>,
    /// 直径是否在 (0, 20] nm 内
    pub valid: bool,
}

/// 单条曲线允许的最大点数
pub const MAX_CURVE_POINTS: usize = 100_000;

/// 网格 [start, end]（步长 step，包含两端）的点数
///
/// 网格无效（step 非正/非有限、end < start）或点数超过 [`MAX_CURVE_POINTS`] 时返回 None。
pub fn curve_point_count(start: f64, end: f64, step: f64) -> Option<usize> {
    if !step.is_finite() || step <= 0.0 || !(end >= start) {
        return None;
    }

    // 容差避免 end 因浮点误差被漏掉
    let intervals = ((end - start) / step + 1e-9).floor();
    if !intervals.is_finite() || intervals >= MAX_CURVE_POINTS as f64 {
        return None;
    }
    Some(intervals as usize + 1)
}

/// 计算 [start, end] 上步长为 step 的尺寸曲线（包含两端）
///
/// 网格点按 `start + i * step` 生成。网格无效或超过 [`MAX_CURVE_POINTS`]
/// 时返回空列表，调用方应先用 [`curve_point_count`] 校验。
pub fn sizing_curve(nc_type: NanocrystalType, start: f64, end: f64, step: f64) -> Vec<CurvePoint> {
    let Some(count) = curve_point_count(start, end, step) else {
        return Vec::new();
    };

    (0..count)
        .map(|i| {
            let wavelength = start + i as f64 * step;
            let diameter = nc_type.diameter(wavelength);
            let valid = is_valid_diameter(diameter);
            CurvePoint {
                wavelength_nm: wavelength,
                diameter_nm: diameter,
                extinction_coefficient: valid.then(|| nc_type.extinction_coefficient(diameter)),
                valid,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_grid_inclusive() {
        let curve = sizing_curve(NanocrystalType::CdSe, 300.0, 1000.0, 50.0);
        assert_eq!(curve.len(), 15);
        assert_eq!(curve.first().unwrap().wavelength_nm, 300.0);
        assert_eq!(curve.last().unwrap().wavelength_nm, 1000.0);
    }

    #[test]
    fn test_curve_fractional_step() {
        let curve = sizing_curve(NanocrystalType::CdS, 400.0, 401.0, 0.1);
        assert_eq!(curve.len(), 11);
        assert!((curve[10].wavelength_nm - 401.0).abs() < 1e-9);
    }

    #[test]
    fn test_curve_validity_flags() {
        let curve = sizing_curve(NanocrystalType::CdTe, 300.0, 1000.0, 100.0);
        // CdTe @ 300 nm → D < 0
        assert!(!curve[0].valid);
        assert!(curve[0].extinction_coefficient.is_none());
        // CdTe @ 600 nm → D ≈ 3.66 nm
        assert!(curve[3].valid);
        assert!(curve[3].extinction_coefficient.is_some());
        // CdTe @ 1000 nm → D ≈ 78 nm
        assert!(!curve[7].valid);
    }

    #[test]
    fn test_curve_point_count_cap() {
        assert_eq!(curve_point_count(300.0, 1000.0, 50.0), Some(15));
        assert_eq!(curve_point_count(500.0, 500.0, 1.0), Some(1));
        assert_eq!(curve_point_count(300.0, 1000.0, 0.01), Some(70_001));
        assert_eq!(curve_point_count(300.0, 1000.0, 0.005), None);
        assert_eq!(curve_point_count(300.0, 1000.0, 1e-12), None);
        assert_eq!(curve_point_count(300.0, 1000.0, 1e-300), None);
        assert!(sizing_curve(NanocrystalType::CdSe, 300.0, 1000.0, 1e-300).is_empty());
    }

    #[test]
    fn test_curve_invalid_grid() {
        assert!(sizing_curve(NanocrystalType::CdSe, 500.0, 400.0, 10.0).is_empty());
        assert!(sizing_curve(NanocrystalType::CdSe, 400.0, 500.0, 0.0).is_empty());
        assert!(sizing_curve(NanocrystalType::CdSe, 400.0, 500.0, -1.0).is_empty());
    }
}
