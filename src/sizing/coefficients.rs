//! # 经验系数表
//!
//! 纳米晶尺寸与消光系数的经验拟合系数。
//!
//! ## 公式
//! 尺寸：D = Σᵢ cᵢ λⁱ            （CdSe 为四次，CdS / CdTe 为三次）
//! 消光系数：ε = a · D^b          （单位 M⁻¹·cm⁻¹）
//!
//! ## 数据来源
//! W. W. Yu, L. Qu, W. Guo, X. Peng, "Experimental Determination of the
//! Extinction Coefficient of CdTe, CdSe, and CdS Nanocrystals",
//! Chem. Mater. 2003, 15, 2854-2860.
//!
//! ## 依赖关系
//! - 被 `sizing/calculator.rs` 调用
//! - 纯静态数据，无外部依赖

use crate::models::NanocrystalType;

/// 尺寸多项式系数
///
/// `coeffs[i]` 为 λⁱ 项系数，高次项可为 0（三次多项式）。
#[derive(Debug, Clone, Copy)]
pub struct SizePolynomial {
    pub coeffs: [f64; 5],
}

impl SizePolynomial {
    /// 计算给定波长（nm）下的直径（nm）
    ///
    /// 从高次项到常数项依次累加。
    pub fn calculate(&self, wavelength: f64) -> f64 {
        let mut d = 0.0;
        for i in (1..self.coeffs.len()).rev() {
            d += self.coeffs[i] * wavelength.powi(i as i32);
        }
        d + self.coeffs[0]
    }

    /// 多项式次数（最高非零项）
    pub fn degree(&self) -> usize {
        self.coeffs.iter().rposition(|&c| c != 0.0).unwrap_or(0)
    }
}

/// 消光系数幂律参数 ε = a · D^b
#[derive(Debug, Clone, Copy)]
pub struct ExtinctionPowerLaw {
    pub a: f64,
    pub b: f64,
}

impl ExtinctionPowerLaw {
    /// 计算给定直径（nm）的消光系数，不做范围检查
    pub fn calculate(&self, diameter: f64) -> f64 {
        self.a * diameter.powf(self.b)
    }
}

// CdSe: 1.6122e-9 λ⁴ − 2.6575e-6 λ³ + 1.6242e-3 λ² − 0.4277 λ + 41.57
const CDSE_SIZE: SizePolynomial = SizePolynomial {
    coeffs: [41.57, -0.4277, 1.6242e-3, -2.6575e-6, 1.6122e-9],
};

// CdS: −6.6521e-8 λ³ + 1.9557e-4 λ² − 0.092352 λ + 13.29
const CDS_SIZE: SizePolynomial = SizePolynomial {
    coeffs: [13.29, -0.092352, 1.9557e-4, -6.6521e-8, 0.0],
};

// CdTe: 9.8127e-7 λ³ − 1.7147e-3 λ² + 1.0064 λ − 194.84
const CDTE_SIZE: SizePolynomial = SizePolynomial {
    coeffs: [-194.84, 1.0064, -1.7147e-3, 9.8127e-7, 0.0],
};

const CDSE_EXTINCTION: ExtinctionPowerLaw = ExtinctionPowerLaw { a: 5857.0, b: 2.65 };
const CDS_EXTINCTION: ExtinctionPowerLaw = ExtinctionPowerLaw { a: 21536.0, b: 2.3 };
const CDTE_EXTINCTION: ExtinctionPowerLaw = ExtinctionPowerLaw { a: 10043.0, b: 2.12 };

/// 获取尺寸多项式
pub fn size_polynomial(nc_type: NanocrystalType) -> &'static SizePolynomial {
    match nc_type {
        NanocrystalType::CdSe => &CDSE_SIZE,
        NanocrystalType::CdS => &CDS_SIZE,
        NanocrystalType::CdTe => &CDTE_SIZE,
    }
}

/// 获取消光系数幂律参数
pub fn extinction_power_law(nc_type: NanocrystalType) -> &'static ExtinctionPowerLaw {
    match nc_type {
        NanocrystalType::CdSe => &CDSE_EXTINCTION,
        NanocrystalType::CdS => &CDS_EXTINCTION,
        NanocrystalType::CdTe => &CDTE_EXTINCTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynomial_degrees() {
        assert_eq!(size_polynomial(NanocrystalType::CdSe).degree(), 4);
        assert_eq!(size_polynomial(NanocrystalType::CdS).degree(), 3);
        assert_eq!(size_polynomial(NanocrystalType::CdTe).degree(), 3);
    }

    #[test]
    fn test_polynomial_constant_term() {
        // λ = 0 时只剩常数项
        assert_eq!(size_polynomial(NanocrystalType::CdSe).calculate(0.0), 41.57);
        assert_eq!(size_polynomial(NanocrystalType::CdTe).calculate(0.0), -194.84);
    }

    #[test]
    fn test_power_law_unit_diameter() {
        // D = 1 nm 时 ε = a
        for nc in NanocrystalType::ALL {
            let law = extinction_power_law(nc);
            assert!((law.calculate(1.0) - law.a).abs() < 1e-9);
        }
    }
}
