use super::ClkOps;
use crate::cru::Cru;

/// 固定倍频/分频: rate = parent * mul / div
pub struct Factor {
    pub parent: &'static str,
    pub mul: u32,
    pub div: u32,
}

impl Factor {
    pub fn compute(&self, parent_rate: u32) -> u32 {
        if parent_rate == 0 || self.div == 0 {
            return 0;
        }
        (parent_rate as u64 * self.mul as u64 / self.div as u64) as u32
    }
}

impl ClkOps for Factor {
    fn get_rate(&self, cru: &Cru) -> Option<u32> {
        Some(self.compute(cru.rate_of(self.parent)))
    }

    fn get_parent(&self, _cru: &Cru) -> Option<&'static str> {
        Some(self.parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor(mul: u32, div: u32) -> Factor {
        Factor {
            parent: "clk26m",
            mul,
            div,
        }
    }

    #[test]
    fn test_factor_divide() {
        assert_eq!(factor(1, 2).compute(26_000_000), 13_000_000);
        assert_eq!(factor(1, 793).compute(26_000_000), 32_786);
    }

    #[test]
    fn test_factor_multiply_uses_wide_intermediate() {
        assert_eq!(factor(2, 1).compute(400_000_000), 800_000_000);
        // 26M * 100 溢出 32 位，中间值按 64 位计算
        assert_eq!(factor(100, 200).compute(26_000_000), 13_000_000);
    }

    #[test]
    fn test_factor_zero_parent() {
        assert_eq!(factor(1, 2).compute(0), 0);
    }
}
