//! PLL 时钟
//!
//! ```text
//! vco  = parent * pcw / 2^(pcw_nbits - 7)
//! rate = vco / 2^pd
//! ```
//!
//! PCW 高 7 位是整数部分，其余为小数部分。VCO 需要工作在 1GHz 以上，
//! 设置频率时选择最小的后分频使 VCO 落入该范围。

use clk_if::{ClkError, Result};

use super::ClkOps;
use crate::{
    cru::Cru,
    delay::delay_us,
    regmap::{PllReg, PllRegs, RegField, field_get, field_set, mask_field},
};

/// PCW 整数部分位数
pub const PCW_INTEGER_BITS: u32 = 7;

/// VCO 最低频率
pub const MIN_VCO_FREQ: u32 = 1_000_000_000;

/// 后分频最大移位
const MAX_PD_SHIFT: u32 = 4;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PllFlags: u32 {
        /// 不允许关闭，例如 CPU PLL
        const ALWAYS_ON = 1 << 0;
    }
}

pub struct Pll {
    pub regs: &'static PllRegs,
    pub parent: &'static str,
    pub max_freq: u32,
    pub pll_en: u32,
    pub pll_en_aux: u32,
    pub pwr_en: u32,
    pub iso_en: u32,
    pub pcw_chg: u32,
    pub pcw_nbits: u32,
    pub pcw_shift: u32,
    pub pd: RegField,
    pub rst_bar_mask: u32,
    pub flags: PllFlags,
}

impl Pll {
    fn frac_bits(&self) -> u32 {
        self.pcw_nbits.saturating_sub(PCW_INTEGER_BITS)
    }

    /// PCW 在寄存器中的位域
    pub fn pcw_field(&self) -> RegField {
        let mask = ((1u64 << self.pcw_nbits) - 1) as u32;
        mask_field(mask << self.pcw_shift)
    }

    /// 由 PCW 和后分频计算输出频率，结果向上取整
    pub fn compute_rate(&self, parent_rate: u32, pcw: u32, postdiv: u32) -> u32 {
        let frac_bits = self.frac_bits();
        let mut vco = parent_rate as u64 * pcw as u64;

        let carry = frac_bits > 0 && vco & ((1u64 << frac_bits) - 1) != 0;
        vco >>= frac_bits;
        if carry {
            vco += 1;
        }

        vco.div_ceil(postdiv as u64) as u32
    }

    /// 计算目标频率对应的 (pcw, 后分频移位)，PCW 向下截断
    pub fn compute_values(&self, target_rate: u32, parent_rate: u32) -> (u32, u32) {
        let target = target_rate.min(self.max_freq) as u64;

        let pd_shift = (0..=MAX_PD_SHIFT)
            .find(|shift| target << shift >= MIN_VCO_FREQ as u64)
            .unwrap_or(MAX_PD_SHIFT);

        let pcw = ((target << pd_shift) << self.frac_bits()) / parent_rate as u64;
        (pcw as u32, pd_shift)
    }

    pub(crate) fn is_enabled(&self, cru: &Cru) -> bool {
        cru.regmap().reg_read(self.regs.get(PllReg::Con)) & self.pll_en != 0
    }

    fn power_up(&self, cru: &Cru) {
        let map = cru.regmap();
        let con = self.regs.get(PllReg::Con);
        let pwr = self.regs.get(PllReg::Pwr);

        let _guard = cru.lock();

        map.set_bits(pwr, self.pwr_en);
        delay_us(1);

        map.clear_bits(pwr, self.iso_en);
        delay_us(1);

        map.set_bits(con, self.pll_en | self.pll_en_aux);
        delay_us(20);

        if self.rst_bar_mask != 0 {
            map.set_bits(con, self.rst_bar_mask);
        }
    }

    fn power_down(&self, cru: &Cru) {
        let map = cru.regmap();
        let con = self.regs.get(PllReg::Con);
        let pwr = self.regs.get(PllReg::Pwr);

        let _guard = cru.lock();

        if self.rst_bar_mask != 0 {
            map.clear_bits(con, self.rst_bar_mask);
        }
        map.clear_bits(con, self.pll_en | self.pll_en_aux);
        map.set_bits(pwr, self.iso_en);
        map.clear_bits(pwr, self.pwr_en);
    }

    fn program(&self, cru: &Cru, rate: u32) -> Result {
        let parent_rate = cru.rate_of(self.parent);
        if parent_rate == 0 {
            return Err(ClkError::NotConfigured);
        }

        let (pcw, pd_shift) = self.compute_values(rate, parent_rate);
        let pcw_field = self.pcw_field();
        let map = cru.regmap();
        let pcw_reg = self.regs.get(PllReg::Pcw);
        let pd_reg = self.regs.get(PllReg::Pd);

        log::debug!(
            "CRU@{}: PLL rate {} Hz -> pcw={:#x} pd={}",
            cru.name(),
            rate,
            pcw,
            pd_shift
        );

        let _guard = cru.lock();

        let enabled = self.is_enabled(cru);

        let mut val = field_set(map.reg_read(pd_reg), self.pd, pd_shift);
        if pd_reg != pcw_reg {
            map.reg_write(pd_reg, val);
            val = map.reg_read(pcw_reg);
        }
        map.reg_write(pcw_reg, field_set(val, pcw_field, pcw));

        let mut val = map.reg_read(pcw_reg);
        if enabled {
            val |= self.pcw_chg;
        }
        map.reg_write(pcw_reg, val);

        if let Some(tuner) = self.regs.tuner() {
            map.reg_write(tuner, val.wrapping_add(1));
        }

        if enabled {
            delay_us(20);
        }

        Ok(())
    }
}

impl ClkOps for Pll {
    fn enable(&self, cru: &Cru, on: bool) -> Option<Result> {
        if on {
            log::debug!("CRU@{}: PLL power up", cru.name());
            self.power_up(cru);
        } else if self.flags.contains(PllFlags::ALWAYS_ON) {
            log::warn!("CRU@{}: PLL is always on, ignore disable", cru.name());
        } else {
            log::debug!("CRU@{}: PLL power down", cru.name());
            self.power_down(cru);
        }
        Some(Ok(()))
    }

    fn get_rate(&self, cru: &Cru) -> Option<u32> {
        let parent_rate = cru.rate_of(self.parent);
        if parent_rate == 0 {
            return Some(0);
        }

        let (pcw, pd) = {
            let _guard = cru.lock();
            let map = cru.regmap();
            (
                field_get(map.reg_read(self.regs.get(PllReg::Pcw)), self.pcw_field()),
                field_get(map.reg_read(self.regs.get(PllReg::Pd)), self.pd),
            )
        };

        let postdiv = 1u32.checked_shl(pd).unwrap_or(u32::MAX);
        Some(self.compute_rate(parent_rate, pcw, postdiv))
    }

    fn set_rate(&self, cru: &Cru, rate: u32) -> Option<Result> {
        Some(self.program(cru, rate))
    }

    fn round_rate(&self, cru: &Cru, rate: u32) -> Option<u32> {
        let parent_rate = cru.rate_of(self.parent);
        if parent_rate == 0 {
            return Some(0);
        }
        let (pcw, pd_shift) = self.compute_values(rate, parent_rate);
        Some(self.compute_rate(parent_rate, pcw, 1 << pd_shift))
    }

    fn get_parent(&self, _cru: &Cru) -> Option<&'static str> {
        Some(self.parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regmap::bits;

    static REGS: PllRegs = PllRegs::pll(0x210, 0x214, 0x210, 0x21c);

    fn pll(pcw_nbits: u32) -> Pll {
        Pll {
            regs: &REGS,
            parent: "clk26m",
            max_freq: 2_000_000_000,
            pll_en: bits(0, 0),
            pll_en_aux: 0,
            pwr_en: bits(0, 0),
            iso_en: bits(1, 1),
            pcw_chg: bits(31, 31),
            pcw_nbits,
            pcw_shift: 0,
            pd: mask_field(bits(4, 6)),
            rst_bar_mask: 0,
            flags: PllFlags::empty(),
        }
    }

    #[test]
    fn test_compute_values_mainpll() {
        // 1.2GHz 不需要后分频
        let (pcw, pd) = pll(21).compute_values(1_200_000_000, 26_000_000);
        assert_eq!(pd, 0);
        assert_eq!(pcw, 756_184);
    }

    #[test]
    fn test_compute_values_uses_postdiv() {
        // 600MHz * 2 = 1.2GHz 满足 VCO 下限
        let (pcw, pd) = pll(21).compute_values(600_000_000, 26_000_000);
        assert_eq!(pd, 1);
        assert_eq!(pcw, 756_184);
    }

    #[test]
    fn test_compute_values_clamps_to_max() {
        let p = pll(21);
        assert_eq!(
            p.compute_values(3_000_000_000, 26_000_000),
            p.compute_values(2_000_000_000, 26_000_000)
        );
    }

    #[test]
    fn test_compute_values_pd_shift_capped() {
        // 即使 16 分频也达不到 1GHz，使用最大移位
        let (_, pd) = pll(21).compute_values(10_000_000, 26_000_000);
        assert_eq!(pd, MAX_PD_SHIFT);
    }

    #[test]
    fn test_compute_rate_rounds_up() {
        let p = pll(21);
        assert_eq!(p.compute_rate(26_000_000, 756_184, 1), 1_199_999_024);
        assert_eq!(p.compute_rate(26_000_000, 756_184, 2), 599_999_512);
        assert_eq!(p.compute_rate(0, 756_184, 1), 0);
    }

    #[test]
    fn test_compute_rate_integer_pcw() {
        // univpll: 7 位 PCW 全部是整数部分
        let p = pll(7);
        assert_eq!(p.compute_rate(26_000_000, 48, 1), 1_248_000_000);
        let (pcw, pd) = p.compute_values(1_248_000_000, 26_000_000);
        assert_eq!((pcw, pd), (48, 0));
    }

    #[test]
    fn test_round_trip_within_one_step() {
        let p = pll(21);
        let parent = 26_000_000u32;
        let targets = (62_500_000u32..=2_000_000_000)
            .step_by(7_777_777)
            .chain([62_500_000, 999_999_999, 1_000_000_000, 2_000_000_000, 3_000_000_000]);

        for target in targets {
            let (pcw, pd) = p.compute_values(target, parent);
            let wanted = target.min(p.max_freq);

            // 最小的后分频使 VCO 不低于 1GHz
            assert!((wanted as u64) << pd >= MIN_VCO_FREQ as u64, "{target}: pd={pd}");
            assert!(pd == 0 || (wanted as u64) << (pd - 1) < MIN_VCO_FREQ as u64);

            let rate = p.compute_rate(parent, pcw, 1 << pd);
            let step = (parent >> p.frac_bits() >> pd) + 1;
            assert!(rate <= wanted, "{rate} > {wanted}");
            assert!(wanted - rate <= step, "{rate} far from {wanted} (pd={pd})");
        }
    }

    #[test]
    fn test_pcw_field() {
        let f = pll(21).pcw_field();
        assert_eq!(f.mask, 0x1f_ffff);
        assert_eq!(f.shift, 0);

        let mut univ = pll(7);
        univ.pcw_shift = 14;
        let f = univ.pcw_field();
        assert_eq!(f.mask, 0x7f);
        assert_eq!(f.shift, 14);
    }
}
