//! 固定频率的板级时钟 (设备树 `fixed-clock`)

use alloc::sync::{Arc, Weak};

use crate::{
    clk::{Clk, ClkDomain},
    err::{ClkError, Result},
};

/// 只有一个时钟的固定频率域，例如 26 MHz 晶振
pub struct FixedClock {
    name: &'static str,
    rate: u32,
    this: Weak<FixedClock>,
}

impl FixedClock {
    pub fn new(name: &'static str, rate: u32) -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            name,
            rate,
            this: this.clone(),
        })
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }

    pub fn clk(&self) -> Option<Clk> {
        let domain: Arc<dyn ClkDomain> = self.this.upgrade()?;
        Some(Clk::new(domain, 0, self.name))
    }
}

impl ClkDomain for FixedClock {
    fn domain_name(&self) -> &str {
        self.name
    }

    fn get(&self, name: &str) -> Option<Clk> {
        if name == self.name { self.clk() } else { None }
    }

    fn get_rate(&self, _idx: usize) -> u32 {
        self.rate
    }

    fn set_rate(&self, _idx: usize, _rate: u32) -> Result {
        Err(ClkError::NotSupported)
    }

    fn round_rate(&self, _idx: usize, _rate: u32) -> u32 {
        self.rate
    }

    fn enable(&self, _idx: usize) -> Result {
        Ok(())
    }

    fn disable(&self, _idx: usize) -> Result {
        Err(ClkError::NotSupported)
    }

    fn set_parent(&self, _idx: usize, _parent: &Clk) -> Result {
        Err(ClkError::NotSupported)
    }

    fn get_parent(&self, _idx: usize) -> Option<Clk> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let osc = FixedClock::new("clk26m", 26_000_000);
        let clk = osc.get("clk26m").unwrap();
        assert_eq!(clk.rate(), 26_000_000);
        assert_eq!(clk.name(), "clk26m");
        assert!(clk.enable().is_ok());
        assert_eq!(clk.set_rate(1), Err(ClkError::NotSupported));
        assert!(clk.parent().is_none());
        assert!(osc.get("rtc32k").is_none());
        assert_eq!(clk, osc.clk().unwrap());
    }
}
