use alloc::sync::Arc;
use core::fmt::Debug;

use crate::err::Result;

bitflags::bitflags! {
    /// 时钟框架级标志
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ClkFlags: u32 {
        /// 设置频率时转发给父时钟
        const SET_RATE_PARENT = 1 << 0;
    }
}

/// 时钟域回调表
///
/// 一个时钟域拥有一组按下标编号的时钟，`Clk` 句柄通过下标回调到所属的域。
pub trait ClkDomain: Send + Sync + 'static {
    /// 域名称，通常是设备名
    fn domain_name(&self) -> &str;

    /// 按名称查找时钟
    fn get(&self, name: &str) -> Option<Clk>;

    fn put(&self, _clk: &Clk) {}

    fn get_rate(&self, idx: usize) -> u32;

    fn set_rate(&self, idx: usize, rate: u32) -> Result;

    /// 返回 `set_rate(rate)` 实际会得到的频率，0 表示不支持
    fn round_rate(&self, idx: usize, rate: u32) -> u32;

    fn enable(&self, idx: usize) -> Result;

    fn disable(&self, idx: usize) -> Result;

    fn set_parent(&self, idx: usize, parent: &Clk) -> Result;

    fn get_parent(&self, idx: usize) -> Option<Clk>;
}

/// 时钟句柄
#[derive(Clone)]
pub struct Clk {
    domain: Arc<dyn ClkDomain>,
    idx: usize,
    name: &'static str,
}

impl Clk {
    pub fn new(domain: Arc<dyn ClkDomain>, idx: usize, name: &'static str) -> Self {
        Self { domain, idx, name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn index(&self) -> usize {
        self.idx
    }

    pub fn domain(&self) -> &Arc<dyn ClkDomain> {
        &self.domain
    }

    pub fn rate(&self) -> u32 {
        self.domain.get_rate(self.idx)
    }

    pub fn set_rate(&self, rate: u32) -> Result {
        self.domain.set_rate(self.idx, rate)
    }

    pub fn round_rate(&self, rate: u32) -> u32 {
        self.domain.round_rate(self.idx, rate)
    }

    pub fn enable(&self) -> Result {
        self.domain.enable(self.idx)
    }

    pub fn disable(&self) -> Result {
        self.domain.disable(self.idx)
    }

    pub fn parent(&self) -> Option<Clk> {
        self.domain.get_parent(self.idx)
    }

    pub fn set_parent(&self, parent: &Clk) -> Result {
        self.domain.set_parent(self.idx, parent)
    }

    /// 两个句柄是否属于同一个时钟域
    pub fn same_domain(&self, other: &Clk) -> bool {
        core::ptr::addr_eq(Arc::as_ptr(&self.domain), Arc::as_ptr(&other.domain))
    }
}

impl PartialEq for Clk {
    fn eq(&self, other: &Self) -> bool {
        self.same_domain(other) && self.idx == other.idx
    }
}

impl Eq for Clk {}

impl Debug for Clk {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Clk")
            .field("domain", &self.domain.domain_name())
            .field("idx", &self.idx)
            .field("name", &self.name)
            .finish()
    }
}
