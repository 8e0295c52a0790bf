//! # 纳米晶尺寸计算器
//!
//! 由第一激子吸收峰波长估算纳米晶直径、消光系数与摩尔浓度。
//!
//! ## 计算流程
//! 1. 直径：按类型计算尺寸多项式 D(λ)
//! 2. 域检查：仅当 0 < D ≤ 20 nm 时继续
//! 3. 消光系数：ε = a · D^b
//! 4. 浓度（可选）：Beer-Lambert 定律 c = A / (ε · l)
//!
//! 每一步只在上一步得到有效值时执行。所有失败都以 `None` 或
//! `Estimate` 变体返回，不会 panic。
//!
//! ## 依赖关系
//! - 被 `commands/estimate.rs` 和 `sizing/curve.rs` 调用
//! - 使用 `sizing/coefficients.rs` 的经验系数
//! - 使用 `models/nanocrystal.rs` 的 NanocrystalType

use crate::models::NanocrystalType;
use crate::sizing::coefficients;

/// 物理上可信的最大直径（nm），包含端点
pub const DIAMETER_MAX_NM: f64 = 20.0;

/// 吸收峰波长输入范围（nm）
pub const WAVELENGTH_MIN_NM: f64 = 300.0;
pub const WAVELENGTH_MAX_NM: f64 = 1000.0;

/// 默认光程（cm）
pub const DEFAULT_PATH_LENGTH_CM: f64 = 1.0;

impl NanocrystalType {
    /// 由吸收峰波长（nm）计算直径（nm）
    pub fn diameter(self, wavelength: f64) -> f64 {
        coefficients::size_polynomial(self).calculate(wavelength)
    }

    /// 由直径（nm）计算消光系数（M⁻¹·cm⁻¹）
    ///
    /// 不检查直径范围，调用方需先用 [`is_valid_diameter`] 过滤。
    pub fn extinction_coefficient(self, diameter: f64) -> f64 {
        coefficients::extinction_power_law(self).calculate(diameter)
    }
}

/// 按类型名称计算直径，未知类型返回 None
pub fn diameter(nc_type: &str, wavelength: f64) -> Option<f64> {
    NanocrystalType::from_name(nc_type).map(|nc| nc.diameter(wavelength))
}

/// 按类型名称计算消光系数，未知类型返回 None
pub fn extinction_coefficient(nc_type: &str, diameter: f64) -> Option<f64> {
    NanocrystalType::from_name(nc_type).map(|nc| nc.extinction_coefficient(diameter))
}

/// Beer-Lambert 浓度 c = A / (ε · l)（M）
///
/// 任一输入缺失，或分母为零/非有限值时返回 None。
pub fn concentration(
    absorbance: Option<f64>,
    extinction_coeff: Option<f64>,
    path_length: Option<f64>,
) -> Option<f64> {
    let (a, eps, l) = (absorbance?, extinction_coeff?, path_length?);
    let denominator = eps * l;
    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }
    let c = a / denominator;
    c.is_finite().then_some(c)
}

/// 直径是否在 (0, 20] nm 内
pub fn is_valid_diameter(diameter: f64) -> bool {
    diameter.is_finite() && diameter > 0.0 && diameter <= DIAMETER_MAX_NM
}

/// 浓度计算结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConcentrationOutcome {
    /// 未提供吸光度或光程
    NotRequested,
    /// 无法计算（如光程为 0）
    Undefined,
    /// 摩尔浓度（M）
    Computed(f64),
}

/// 一次完整估算的结果
///
/// 每次调用 [`estimate`] 都从输入重新构造，不保留任何上一次的中间值。
#[derive(Debug, Clone, PartialEq)]
pub enum Estimate {
    /// 未知纳米晶类型
    UnknownType { name: String },
    /// 直径超出物理范围，流程终止
    DiameterOutOfRange {
        nc_type: NanocrystalType,
        wavelength: f64,
        diameter: f64,
    },
    /// 直径有效，已计算消光系数
    Sized {
        nc_type: NanocrystalType,
        wavelength: f64,
        diameter: f64,
        extinction_coefficient: f64,
        concentration: ConcentrationOutcome,
    },
}

impl Estimate {
    /// 直径（若已计算）
    pub fn diameter(&self) -> Option<f64> {
        match self {
            Estimate::UnknownType { .. } => None,
            Estimate::DiameterOutOfRange { diameter, .. } | Estimate::Sized { diameter, .. } => {
                Some(*diameter)
            }
        }
    }

    /// 消光系数（仅当直径有效）
    pub fn extinction_coefficient(&self) -> Option<f64> {
        match self {
            Estimate::Sized {
                extinction_coefficient,
                ..
            } => Some(*extinction_coefficient),
            _ => None,
        }
    }

    /// 浓度（仅当已计算）
    pub fn concentration(&self) -> Option<f64> {
        match self {
            Estimate::Sized {
                concentration: ConcentrationOutcome::Computed(c),
                ..
            } => Some(*c),
            _ => None,
        }
    }
}

/// 执行 直径 → 消光系数 → 浓度 的完整流程
///
/// `absorbance` 与 `path_length` 均提供时才尝试计算浓度。
pub fn estimate(
    nc_type: &str,
    wavelength: f64,
    absorbance: Option<f64>,
    path_length: Option<f64>,
) -> Estimate {
    let Some(nc) = NanocrystalType::from_name(nc_type) else {
        return Estimate::UnknownType {
            name: nc_type.to_string(),
        };
    };

    let d = nc.diameter(wavelength);
    if !is_valid_diameter(d) {
        return Estimate::DiameterOutOfRange {
            nc_type: nc,
            wavelength,
            diameter: d,
        };
    }

    let eps = nc.extinction_coefficient(d);

    let outcome = match (absorbance, path_length) {
        (Some(_), Some(_)) => match concentration(absorbance, Some(eps), path_length) {
            Some(c) => ConcentrationOutcome::Computed(c),
            None => ConcentrationOutcome::Undefined,
        },
        _ => ConcentrationOutcome::NotRequested,
    };

    Estimate::Sized {
        nc_type: nc,
        wavelength,
        diameter: d,
        extinction_coefficient: eps,
        concentration: outcome,
    }
}
