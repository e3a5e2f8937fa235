//! 已注册的 CRU 控制器和板级时钟
//!
//! 父时钟按名称解析时依次查找: 本控制器 -> 板级时钟 -> 其它控制器。
//! 注册表由读写锁保护，attach 持写锁，查找持读锁。

use alloc::{sync::Arc, vec::Vec};

use clk_if::{Clk, ClkError, Result};
use spin::{Lazy, RwLock};

use crate::cru::Cru;

static GLOBAL: Lazy<Arc<CruRegistry>> = Lazy::new(|| Arc::new(CruRegistry::new()));

#[derive(Default)]
pub struct CruRegistry {
    clocks: RwLock<Vec<Clk>>,
    crus: RwLock<Vec<Arc<Cru>>>,
}

impl CruRegistry {
    pub const fn new() -> Self {
        Self {
            clocks: RwLock::new(Vec::new()),
            crus: RwLock::new(Vec::new()),
        }
    }

    /// 全局注册表
    pub fn global() -> &'static Arc<CruRegistry> {
        &GLOBAL
    }

    /// 注册不属于任何 CRU 的板级时钟，例如设备树中的 `fixed-clock`
    pub fn register_clock(&self, clk: Clk) {
        log::debug!("registry: add clock {}", clk.name());
        self.clocks.write().push(clk);
    }

    pub fn clock_byname(&self, name: &str) -> Option<Clk> {
        self.clocks.read().iter().find(|c| c.name() == name).cloned()
    }

    pub(crate) fn insert(&self, cru: Arc<Cru>) {
        self.crus.write().push(cru);
    }

    /// 在所有控制器中按名称查找时钟，后注册的控制器优先
    pub fn lookup(&self, name: &str) -> Option<Clk> {
        self.crus.read().iter().rev().find_map(|cru| cru.clock(name))
    }

    pub fn controller(&self, name: &str) -> Option<Arc<Cru>> {
        self.crus.read().iter().find(|c| c.name() == name).cloned()
    }

    pub fn controller_by_phandle(&self, phandle: u32) -> Option<Arc<Cru>> {
        self.crus
            .read()
            .iter()
            .find(|c| c.phandle() == phandle)
            .cloned()
    }

    pub fn controllers(&self) -> Vec<Arc<Cru>> {
        self.crus.read().clone()
    }

    /// 解析设备树 `clocks = <&phandle id>`
    pub fn decode_clock(&self, phandle: u32, cell: &[u8]) -> Result<Clk> {
        self.controller_by_phandle(phandle)
            .ok_or(ClkError::NotFound)?
            .decode_clock(cell)
    }
}

#[cfg(test)]
mod tests {
    use clk_if::FixedClock;

    use super::*;

    #[test]
    fn test_board_clock_lookup() {
        let registry = CruRegistry::new();
        let osc = FixedClock::new("clk26m", 26_000_000);
        registry.register_clock(osc.clk().unwrap());

        assert_eq!(registry.clock_byname("clk26m").unwrap().rate(), 26_000_000);
        assert!(registry.clock_byname("rtc32k").is_none());
        assert!(registry.lookup("clk26m").is_none());
    }

    #[test]
    fn test_decode_unknown_phandle() {
        let registry = CruRegistry::new();
        assert_eq!(
            registry.decode_clock(7, &[0, 0, 0, 1]).unwrap_err(),
            ClkError::NotFound
        );
    }

    #[test]
    fn test_global_is_shared() {
        assert!(Arc::ptr_eq(CruRegistry::global(), CruRegistry::global()));
    }
}
