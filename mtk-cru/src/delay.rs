//! PLL 上电时序使用的忙等待

/// 每微秒的自旋次数，按 CPU 主频粗略估算
///
/// 实际时长取决于平台的 `spin_loop` 实现，慢速或对 yield 优化过的核心上可能偏短。
const SPINS_PER_US: u32 = 100;

fn spins(us: u32) -> u32 {
    us.saturating_mul(SPINS_PER_US)
}

#[inline]
pub fn delay_us(us: u32) {
    for _ in 0..spins(us) {
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spins_scale_and_saturate() {
        assert_eq!(spins(0), 0);
        assert_eq!(spins(20), 20 * SPINS_PER_US);
        assert_eq!(spins(u32::MAX), u32::MAX);
        delay_us(1);
    }
}
