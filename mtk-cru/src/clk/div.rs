use clk_if::{ClkError, Result};

use super::{ClkOps, field_present};
use crate::{cru::Cru, regmap::RegField};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DivFlags: u32 {
        const ZERO_IS_ONE = 1 << 0;
        /// ratio = 1 << raw
        const POWER_OF_TWO = 1 << 1;
        /// ratio = raw * 2
        const TIMES_TWO = 1 << 2;
    }
}

/// 寄存器可配置的整数分频器
pub struct Div {
    pub reg: u32,
    pub parent: &'static str,
    pub div: RegField,
    pub flags: DivFlags,
}

impl Div {
    /// 寄存器原始值对应的分频比
    pub fn ratio(&self, raw: u32) -> u32 {
        let mut ratio = raw;
        if self.flags.contains(DivFlags::ZERO_IS_ONE) && ratio == 0 {
            ratio = 1;
        }
        if self.flags.contains(DivFlags::POWER_OF_TWO) {
            1u32.checked_shl(ratio).unwrap_or(0)
        } else if self.flags.contains(DivFlags::TIMES_TWO) {
            match ratio << 1 {
                0 => 1,
                r => r,
            }
        } else {
            ratio.saturating_add(1)
        }
    }

    /// 目标频率对应的寄存器原始值
    fn raw_for(&self, parent_rate: u32, rate: u32) -> Result<u32> {
        if rate == 0 {
            return Err(ClkError::InvalidArgument);
        }

        let mut ratio = parent_rate.div_ceil(rate);
        let raw = if self.flags.contains(DivFlags::TIMES_TWO) {
            if ratio > 1 && ratio & 1 != 0 {
                ratio += 1;
            }
            ratio >> 1
        } else if self.flags.contains(DivFlags::POWER_OF_TWO) {
            return Err(ClkError::InvalidArgument);
        } else {
            ratio.saturating_sub(1)
        };

        if raw > self.div.mask {
            return Err(ClkError::OutOfRange);
        }
        Ok(raw)
    }

    fn program(&self, cru: &Cru, rate: u32) -> Result {
        if cru.resolve(self.parent).is_none() || !field_present(self.div) {
            return Err(ClkError::NotConfigured);
        }

        let parent_rate = cru.rate_of(self.parent);
        if parent_rate == 0 {
            return if rate == 0 {
                Ok(())
            } else {
                Err(ClkError::OutOfRange)
            };
        }

        let raw = self.raw_for(parent_rate, rate)?;

        log::debug!(
            "CRU@{}: divider reg={:#x} raw={} for {} Hz",
            cru.name(),
            self.reg,
            raw,
            rate
        );

        let _guard = cru.lock();
        cru.regmap().modify_field(self.reg, self.div, raw);
        Ok(())
    }
}

impl ClkOps for Div {
    fn get_rate(&self, cru: &Cru) -> Option<u32> {
        let parent_rate = cru.rate_of(self.parent);
        if parent_rate == 0 {
            return Some(0);
        }

        let raw = if field_present(self.div) {
            cru.regmap().read_field(self.reg, self.div)
        } else {
            0
        };

        match self.ratio(raw) {
            0 => Some(0),
            ratio => Some(parent_rate / ratio),
        }
    }

    fn set_rate(&self, cru: &Cru, rate: u32) -> Option<Result> {
        Some(self.program(cru, rate))
    }

    fn round_rate(&self, cru: &Cru, rate: u32) -> Option<u32> {
        let parent_rate = cru.rate_of(self.parent);
        if parent_rate == 0 || !field_present(self.div) {
            return Some(0);
        }
        match self.raw_for(parent_rate, rate) {
            Ok(raw) => Some(parent_rate / self.ratio(raw)),
            Err(_) => Some(0),
        }
    }

    fn get_parent(&self, _cru: &Cru) -> Option<&'static str> {
        Some(self.parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regmap::{bits, mask_field};

    fn div(flags: DivFlags) -> Div {
        Div {
            reg: 0x120,
            parent: "aud_ext1",
            div: mask_field(bits(0, 7)),
            flags,
        }
    }

    #[test]
    fn test_ratio_plain() {
        let d = div(DivFlags::empty());
        assert_eq!(d.ratio(0), 1);
        assert_eq!(d.ratio(3), 4);
    }

    #[test]
    fn test_ratio_full_width_field() {
        let d = Div {
            div: mask_field(bits(0, 31)),
            ..div(DivFlags::empty())
        };
        assert_eq!(d.ratio(u32::MAX), u32::MAX);
        assert_eq!(d.ratio(u32::MAX - 1), u32::MAX);
    }

    #[test]
    fn test_ratio_zero_is_one() {
        // 0 先被当作 1，再按普通分频加一
        let d = div(DivFlags::ZERO_IS_ONE);
        assert_eq!(d.ratio(0), 2);
        assert_eq!(d.ratio(1), 2);
    }

    #[test]
    fn test_ratio_power_of_two() {
        let d = div(DivFlags::POWER_OF_TWO);
        assert_eq!(d.ratio(0), 1);
        assert_eq!(d.ratio(4), 16);
    }

    #[test]
    fn test_ratio_times_two() {
        let d = div(DivFlags::TIMES_TWO);
        assert_eq!(d.ratio(0), 1);
        assert_eq!(d.ratio(3), 6);
    }

    #[test]
    fn test_raw_for_plain() {
        let d = div(DivFlags::empty());
        assert_eq!(d.raw_for(100, 25), Ok(3));
        // 向上取整，保证输出不超过目标
        assert_eq!(d.raw_for(100, 30), Ok(3));
        assert_eq!(d.raw_for(100, 100), Ok(0));
        assert_eq!(d.raw_for(100, 200), Ok(0));
    }

    #[test]
    fn test_raw_for_times_two_rounds_odd_up() {
        let d = div(DivFlags::TIMES_TWO);
        assert_eq!(d.raw_for(90, 30), Ok(2));
        assert_eq!(d.raw_for(100, 25), Ok(2));
        assert_eq!(d.raw_for(100, 100), Ok(0));
    }

    #[test]
    fn test_raw_for_errors() {
        assert_eq!(
            div(DivFlags::POWER_OF_TWO).raw_for(100, 25),
            Err(ClkError::InvalidArgument)
        );
        assert_eq!(
            div(DivFlags::empty()).raw_for(100, 0),
            Err(ClkError::InvalidArgument)
        );
        // 8 位字段最多表示 256 分频
        assert_eq!(
            div(DivFlags::empty()).raw_for(1_000_000, 1_000),
            Err(ClkError::OutOfRange)
        );
    }
}
