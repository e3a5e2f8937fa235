//! MediaTek CRU (Clock and Reset Unit) 控制器
//!
//! ## 概述
//!
//! 每个 CRU 实例 (APMIXEDSYS、TOPCKGEN、INFRACFG、PERICFG、HIFSYS) 拥有一段寄存器窗口、
//! 一张时钟表和一张复位表。时钟表以设备树绑定编号为下标，空槽位不可见。
//!
//! ## 通用分发
//!
//! - 频率: 节点自身能计算则直接返回，否则取父时钟频率
//! - 设置频率: 带 `SET_RATE_PARENT` 的节点转发给父时钟
//! - 使能: 先使能父时钟，再使能自身
//! - 父时钟: 按名称依次在本控制器、板级时钟、其它控制器中查找
//!
//! 所有读-改-写序列都在控制器锁内完成；独立 SET/CLR 寄存器的门控写入不加锁。

use alloc::{
    sync::{Arc, Weak},
    vec,
    vec::Vec,
};

use clk_if::{BusSpace, Clk, ClkDomain, ClkError, ClkFlags, Result, decode_cell};
use spin::{Mutex, MutexGuard};

use crate::{
    clk::{ClkNode, ClkOps},
    regmap::Regmap,
    registry::CruRegistry,
    reset::ResetLine,
};

/// 控制器静态描述
pub struct CruDesc {
    pub name: &'static str,
    pub clks: &'static [ClkNode],
    pub resets: &'static [ResetLine],
}

/// `print` 输出的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClkSummary {
    pub id: u32,
    pub name: &'static str,
    pub parent: Option<&'static str>,
    pub kind: &'static str,
    pub rate: u32,
    pub enabled: Option<bool>,
}

pub struct Cru {
    name: &'static str,
    phandle: u32,
    regmap: Regmap,
    /// 保护所有读-改-写序列
    lock: Mutex<()>,
    clks: Vec<Option<&'static ClkNode>>,
    resets: Vec<Option<ResetLine>>,
    /// 注册表持有控制器，这里只保留弱引用
    registry: Weak<CruRegistry>,
    this: Weak<Cru>,
}

impl core::fmt::Debug for Cru {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cru")
            .field("name", &self.name)
            .field("phandle", &self.phandle)
            .field("clks", &self.clks.iter().flatten().count())
            .field("resets", &self.resets.iter().flatten().count())
            .finish()
    }
}

impl Cru {
    /// 绑定寄存器窗口并注册到 `registry`
    ///
    /// 失败时不会留下任何注册状态。
    pub fn attach(
        desc: &CruDesc,
        phandle: u32,
        space: Arc<dyn BusSpace>,
        registry: &Arc<CruRegistry>,
    ) -> Result<Arc<Self>> {
        let regmap = Regmap::new(space);
        if regmap.size() == 0 {
            log::error!("CRU@{}: couldn't map registers", desc.name);
            return Err(ClkError::Device);
        }

        let clks = clk_slots(desc)?;
        let resets = reset_slots(desc)?;

        let regs = desc
            .clks
            .iter()
            .flat_map(|c| c.kind.regs().iter().copied())
            .chain(desc.resets.iter().map(|r| r.reg));
        for reg in regs {
            if !regmap.contains(reg) {
                log::error!(
                    "CRU@{}: register {:#x} outside window (size={:#x})",
                    desc.name,
                    reg,
                    regmap.size()
                );
                return Err(ClkError::Device);
            }
        }

        let cru = Arc::new_cyclic(|this| Self {
            name: desc.name,
            phandle,
            regmap,
            lock: Mutex::new(()),
            clks,
            resets,
            registry: Arc::downgrade(registry),
            this: this.clone(),
        });

        registry.insert(cru.clone());

        log::info!(
            "CRU@{}: attached, {} clocks, {} resets",
            cru.name,
            desc.clks.len(),
            desc.resets.len()
        );

        Ok(cru)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn phandle(&self) -> u32 {
        self.phandle
    }

    pub fn regmap(&self) -> &Regmap {
        &self.regmap
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock()
    }

    /// 读取控制器寄存器，供 SoC 驱动在 attach 后读取 ID 等信息
    pub fn read_4(&self, offset: u32) -> u32 {
        self.regmap.reg_read(offset)
    }

    /// 所属注册表，注册表已释放时为 `None`
    pub fn registry(&self) -> Option<Arc<CruRegistry>> {
        self.registry.upgrade()
    }

    /// 按设备树编号取节点
    pub fn node(&self, id: usize) -> Option<&'static ClkNode> {
        self.clks.get(id).copied().flatten()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &'static ClkNode> + '_ {
        self.clks.iter().flatten().copied()
    }

    /// 在本控制器中按名称查找节点
    pub fn find(&self, name: &str) -> Option<&'static ClkNode> {
        self.nodes().find(|c| c.name == name)
    }

    pub(crate) fn reset_line(&self, id: u32) -> Option<ResetLine> {
        self.resets.get(id as usize).copied().flatten()
    }

    fn handle(&self, node: &'static ClkNode) -> Option<Clk> {
        let domain: Arc<dyn ClkDomain> = self.this.upgrade()?;
        Some(Clk::new(domain, node.id as usize, node.name))
    }

    pub fn clock(&self, name: &str) -> Option<Clk> {
        self.find(name).and_then(|node| self.handle(node))
    }

    pub fn clock_by_id(&self, id: u32) -> Option<Clk> {
        self.node(id as usize).and_then(|node| self.handle(node))
    }

    /// 解析设备树时钟说明符 (单个大端 cell)
    pub fn decode_clock(&self, cell: &[u8]) -> Result<Clk> {
        let id = decode_cell(cell)?;
        self.clock_by_id(id).ok_or(ClkError::NotFound)
    }

    /// 按名称解析时钟: 本控制器 -> 板级时钟 -> 其它控制器
    pub fn resolve(&self, name: &str) -> Option<Clk> {
        if let Some(clk) = self.clock(name) {
            return Some(clk);
        }
        let registry = self.registry()?;
        registry
            .clock_byname(name)
            .or_else(|| registry.lookup(name))
    }

    /// 名称对应时钟的当前频率，无法解析时为 0
    pub fn rate_of(&self, name: &str) -> u32 {
        self.resolve(name).map(|c| c.rate()).unwrap_or(0)
    }

    pub fn parent_of(&self, node: &ClkNode) -> Option<Clk> {
        node.kind.get_parent(self).and_then(|name| self.resolve(name))
    }

    pub fn summary(&self) -> Vec<ClkSummary> {
        self.nodes()
            .map(|node| ClkSummary {
                id: node.id,
                name: node.name,
                parent: self.parent_of(node).map(|p| p.name()),
                kind: node.type_name(),
                rate: self.get_rate(node.id as usize),
                enabled: node.kind.is_enabled(self),
            })
            .collect()
    }

    /// 以 debug 级别打印所有时钟
    pub fn print(&self) {
        for s in self.summary() {
            log::debug!(
                "CRU@{}: {:3} {:<12} {:>2} {:<12} {:<7} {:10} Hz",
                self.name,
                s.id,
                s.name,
                if s.parent.is_some() { "<-" } else { "" },
                s.parent.unwrap_or(""),
                s.kind,
                s.rate
            );
        }
    }
}

fn clk_slots(desc: &CruDesc) -> Result<Vec<Option<&'static ClkNode>>> {
    let len = desc.clks.iter().map(|c| c.id as usize + 1).max().unwrap_or(0);
    let mut slots = vec![None; len];

    for (i, node) in desc.clks.iter().enumerate() {
        let slot = &mut slots[node.id as usize];
        if slot.is_some() {
            log::error!("CRU@{}: duplicate clock id {}", desc.name, node.id);
            return Err(ClkError::InvalidArgument);
        }
        if desc.clks[..i].iter().any(|c| c.name == node.name) {
            log::error!("CRU@{}: duplicate clock name {}", desc.name, node.name);
            return Err(ClkError::InvalidArgument);
        }
        *slot = Some(node);
    }

    Ok(slots)
}

fn reset_slots(desc: &CruDesc) -> Result<Vec<Option<ResetLine>>> {
    let len = desc
        .resets
        .iter()
        .map(|r| r.id as usize + 1)
        .max()
        .unwrap_or(0);
    let mut slots = vec![None; len];

    for line in desc.resets.iter().filter(|r| r.mask != 0) {
        let slot = &mut slots[line.id as usize];
        if slot.is_some() {
            log::error!("CRU@{}: duplicate reset id {}", desc.name, line.id);
            return Err(ClkError::InvalidArgument);
        }
        *slot = Some(*line);
    }

    Ok(slots)
}

impl ClkDomain for Cru {
    fn domain_name(&self) -> &str {
        self.name
    }

    fn get(&self, name: &str) -> Option<Clk> {
        self.clock(name)
    }

    fn get_rate(&self, idx: usize) -> u32 {
        let Some(node) = self.node(idx) else {
            return 0;
        };

        if let Some(rate) = node.kind.get_rate(self) {
            return rate;
        }

        match self.parent_of(node) {
            Some(parent) => parent.rate(),
            None => {
                log::error!("CRU@{}: no parent for {}", self.name, node.name);
                0
            }
        }
    }

    fn set_rate(&self, idx: usize, rate: u32) -> Result {
        let node = self.node(idx).ok_or(ClkError::NotFound)?;

        if node.flags.contains(ClkFlags::SET_RATE_PARENT) {
            let Some(parent) = self.parent_of(node) else {
                log::error!("CRU@{}: no parent for {}", self.name, node.name);
                return Err(ClkError::NotConfigured);
            };
            return parent.set_rate(rate);
        }

        node.kind
            .set_rate(self, rate)
            .unwrap_or(Err(ClkError::NotConfigured))
    }

    fn round_rate(&self, idx: usize, rate: u32) -> u32 {
        let Some(node) = self.node(idx) else {
            return 0;
        };

        if node.flags.contains(ClkFlags::SET_RATE_PARENT) {
            return match self.parent_of(node) {
                Some(parent) => parent.round_rate(rate),
                None => {
                    log::error!("CRU@{}: no parent for {}", self.name, node.name);
                    0
                }
            };
        }

        node.kind.round_rate(self, rate).unwrap_or(0)
    }

    fn enable(&self, idx: usize) -> Result {
        let node = self.node(idx).ok_or(ClkError::NotFound)?;

        if let Some(parent) = self.parent_of(node) {
            parent.enable()?;
        }

        node.kind.enable(self, true).unwrap_or(Ok(()))
    }

    fn disable(&self, idx: usize) -> Result {
        let node = self.node(idx).ok_or(ClkError::NotFound)?;
        node.kind
            .enable(self, false)
            .unwrap_or(Err(ClkError::NotSupported))
    }

    fn set_parent(&self, idx: usize, parent: &Clk) -> Result {
        let node = self.node(idx).ok_or(ClkError::NotFound)?;
        node.kind
            .set_parent(self, parent.name())
            .unwrap_or(Err(ClkError::NotSupported))
    }

    fn get_parent(&self, idx: usize) -> Option<Clk> {
        self.parent_of(self.node(idx)?)
    }
}

#[cfg(test)]
mod tests {
    use clk_if::FixedClock;

    use super::*;
    use crate::{
        clk::{DivFlags, GateFlags, Pll, PllFlags},
        regmap::{GateRegs, PllRegs, bit, bits, mask_field},
        testing::RamSpace,
    };

    static CFG0: GateRegs = GateRegs::gate(0x44, 0x48, 0x40);
    static SHARED: GateRegs = GateRegs::shared(0x30);
    static PLL_REGS: PllRegs = PllRegs::pll(0x10, 0x14, 0x10, 0x1c).with_tuner(0x18);

    static SEL_PARENTS: &[&str] = &["clk26m", "half", "sys"];

    static CLKS: &[ClkNode] = &[
        ClkNode::fixed(1, "sys", "clk26m", 400_000_000),
        ClkNode::fdiv(2, "half", "sys", 2),
        ClkNode::fmul(3, "double", "sys", 2),
        ClkNode::gate(4, "gate_hi", "half", &CFG0, bit(3), GateFlags::empty()),
        ClkNode::gate(5, "gate_lo", "half", &CFG0, bit(4), GateFlags::ACT_LOW),
        ClkNode::gate(6, "gate_shared", "sys", &SHARED, bit(21), GateFlags::empty()),
        ClkNode::mux(7, "mux", SEL_PARENTS, 0x20, bits(0, 1)),
        ClkNode::mux(8, "fixed_mux", SEL_PARENTS, 0x20, 0),
        ClkNode::muxgate_clkf(
            9,
            "axi_sel",
            SEL_PARENTS,
            &CFG0,
            bits(0, 2),
            bit(7),
            GateFlags::ACT_LOW,
            ClkFlags::empty(),
        ),
        ClkNode::div(10, "div", "sys", 0x24, bits(0, 7), DivFlags::empty()),
        ClkNode::pll(
            11,
            "pll",
            Pll {
                regs: &PLL_REGS,
                parent: "clk26m",
                max_freq: 2_000_000_000,
                pll_en: bit(0),
                pll_en_aux: bits(27, 30),
                pwr_en: bit(0),
                iso_en: bit(1),
                pcw_chg: bit(31),
                pcw_nbits: 21,
                pcw_shift: 0,
                pd: mask_field(bits(4, 6)),
                rst_bar_mask: bit(24),
                flags: PllFlags::empty(),
            },
        ),
        ClkNode::fixed(13, "orphan_src", "nowhere", 1000),
        ClkNode::gate(14, "orphan", "nowhere", &CFG0, bit(9), GateFlags::empty()),
        ClkNode::fdiv(15, "remote_child", "remote", 4),
        ClkNode::muxgate(
            16,
            "fixed_muxgate",
            SEL_PARENTS,
            &CFG0,
            0,
            bit(10),
            GateFlags::empty(),
        ),
    ];

    static DESC: CruDesc = CruDesc {
        name: "testcru",
        clks: CLKS,
        resets: &[],
    };

    struct Fixture {
        ram: Arc<RamSpace>,
        registry: Arc<CruRegistry>,
        cru: Arc<Cru>,
    }

    fn setup() -> Fixture {
        let ram = RamSpace::new(0x100);
        let registry = Arc::new(CruRegistry::new());
        let osc = FixedClock::new("clk26m", 26_000_000);
        registry.register_clock(osc.clk().unwrap());
        let cru = Cru::attach(&DESC, 1, ram.clone(), &registry).unwrap();
        Fixture {
            ram,
            registry,
            cru,
        }
    }

    fn clk(f: &Fixture, name: &str) -> Clk {
        f.cru.clock(name).unwrap()
    }

    #[test]
    fn test_find_and_slots() {
        let f = setup();
        assert_eq!(f.cru.find("half").unwrap().id, 2);
        assert!(f.cru.find("nope").is_none());
        assert!(f.cru.node(12).is_none());
        assert!(f.cru.node(0).is_none());
        assert!(f.cru.node(100).is_none());
        assert_eq!(f.cru.nodes().count(), CLKS.len());
    }

    #[test]
    fn test_decode_clock() {
        let f = setup();
        assert_eq!(f.cru.decode_clock(&[0, 0, 0, 2]).unwrap().name(), "half");
        assert_eq!(
            f.cru.decode_clock(&[0, 0, 0, 12]).unwrap_err(),
            ClkError::NotFound
        );
        assert_eq!(
            f.cru.decode_clock(&[0, 0, 0, 200]).unwrap_err(),
            ClkError::NotFound
        );
        assert_eq!(
            f.cru.decode_clock(&[0, 2]).unwrap_err(),
            ClkError::InvalidArgument
        );
        assert_eq!(f.registry.decode_clock(1, &[0, 0, 0, 1]).unwrap().name(), "sys");
    }

    #[test]
    fn test_fixed_and_factor_rates() {
        let f = setup();
        assert_eq!(clk(&f, "sys").rate(), 400_000_000);
        assert_eq!(clk(&f, "half").rate(), 200_000_000);
        assert_eq!(clk(&f, "double").rate(), 800_000_000);
        assert_eq!(clk(&f, "sys").parent().unwrap().name(), "clk26m");
    }

    #[test]
    fn test_gate_rate_falls_back_to_parent() {
        let f = setup();
        assert_eq!(clk(&f, "gate_hi").rate(), 200_000_000);
        assert_eq!(clk(&f, "orphan").rate(), 0);
        assert!(clk(&f, "orphan").parent().is_none());
    }

    #[test]
    fn test_gate_set_clear_registers() {
        let f = setup();
        let hi = clk(&f, "gate_hi");
        let lo = clk(&f, "gate_lo");

        hi.enable().unwrap();
        lo.enable().unwrap();
        hi.disable().unwrap();
        lo.disable().unwrap();

        assert_eq!(
            f.ram.writes(),
            [(0x44, bit(3)), (0x48, bit(4)), (0x48, bit(3)), (0x44, bit(4))]
        );
    }

    #[test]
    fn test_gate_enable_idempotent() {
        let f = setup();
        let hi = clk(&f, "gate_hi");
        hi.enable().unwrap();
        hi.enable().unwrap();
        assert_eq!(f.ram.writes_to(0x44), [bit(3), bit(3)]);
    }

    #[test]
    fn test_gate_shared_register_rmw() {
        let f = setup();
        f.ram.poke(0x30, 0x1);
        let g = clk(&f, "gate_shared");

        g.enable().unwrap();
        assert_eq!(f.ram.peek(0x30), 0x1 | bit(21));
        g.enable().unwrap();
        assert_eq!(f.ram.peek(0x30), 0x1 | bit(21));
        g.disable().unwrap();
        assert_eq!(f.ram.peek(0x30), 0x1);
    }

    #[test]
    fn test_disable_unsupported() {
        let f = setup();
        assert_eq!(clk(&f, "half").disable(), Err(ClkError::NotSupported));
        assert_eq!(clk(&f, "mux").disable(), Err(ClkError::NotSupported));
    }

    #[test]
    fn test_mux_parent_select() {
        let f = setup();
        let mux = clk(&f, "mux");
        assert_eq!(mux.parent().unwrap().name(), "clk26m");
        assert_eq!(mux.rate(), 26_000_000);

        f.ram.poke(0x20, 0xf0);
        mux.set_parent(&clk(&f, "sys")).unwrap();
        assert_eq!(f.ram.peek(0x20), 0xf2);
        assert_eq!(mux.parent().unwrap().name(), "sys");
        assert_eq!(mux.rate(), 400_000_000);
    }

    #[test]
    fn test_mux_invalid_parent_leaves_register() {
        let f = setup();
        let mux = clk(&f, "mux");
        f.ram.poke(0x20, 0x1);
        assert_eq!(
            mux.set_parent(&clk(&f, "double")),
            Err(ClkError::InvalidArgument)
        );
        assert_eq!(f.ram.peek(0x20), 0x1);
        assert!(f.ram.writes().is_empty());
    }

    #[test]
    fn test_mux_out_of_range_index() {
        let f = setup();
        f.ram.poke(0x20, 0x3);
        assert!(clk(&f, "mux").parent().is_none());
        assert_eq!(clk(&f, "mux").rate(), 0);
    }

    #[test]
    fn test_mux_not_selectable() {
        let f = setup();
        let m = clk(&f, "fixed_mux");
        assert_eq!(m.set_parent(&clk(&f, "sys")), Err(ClkError::NotSupported));
        assert_eq!(m.parent().unwrap().name(), "clk26m");
        assert!(f.ram.writes().is_empty());
    }

    #[test]
    fn test_muxgate_not_selectable() {
        let f = setup();
        f.ram.poke(0x40, 0x5);
        let m = clk(&f, "fixed_muxgate");
        assert_eq!(m.set_parent(&clk(&f, "half")), Err(ClkError::NotSupported));
        assert_eq!(m.parent().unwrap().name(), "clk26m");
        assert_eq!(f.ram.peek(0x40), 0x5);
        assert!(f.ram.writes().is_empty());
    }

    #[test]
    fn test_set_parent_unbound() {
        let f = setup();
        assert_eq!(
            clk(&f, "half").set_parent(&clk(&f, "sys")),
            Err(ClkError::NotSupported)
        );
    }

    #[test]
    fn test_muxgate_enable_keeps_selector() {
        let f = setup();
        let axi = clk(&f, "axi_sel");
        f.ram.poke(0x40, 0x2 | bit(7));
        assert_eq!(axi.parent().unwrap().name(), "sys");

        axi.enable().unwrap();
        assert_eq!(f.ram.writes(), [(0x48, bit(7))]);
        assert_eq!(axi.parent().unwrap().name(), "sys");

        axi.set_parent(&clk(&f, "half")).unwrap();
        assert_eq!(f.ram.peek(0x40), 0x1 | bit(7));
    }

    #[test]
    fn test_set_rate_forwarding() {
        let f = setup();
        // gate 带 SET_RATE_PARENT，父时钟 half 是固定分频，不支持设置
        assert_eq!(
            clk(&f, "gate_hi").set_rate(1),
            Err(ClkError::NotConfigured)
        );
        assert_eq!(clk(&f, "orphan").set_rate(1), Err(ClkError::NotConfigured));
        assert_eq!(clk(&f, "half").round_rate(1), 0);
        // axi_sel 没有 SET_RATE_PARENT，自身也不支持
        assert_eq!(clk(&f, "axi_sel").set_rate(1), Err(ClkError::NotConfigured));
    }

    #[test]
    fn test_div_set_rate() {
        let f = setup();
        let div = clk(&f, "div");
        assert_eq!(div.rate(), 400_000_000);

        div.set_rate(100_000_000).unwrap();
        assert_eq!(f.ram.peek(0x24), 3);
        assert_eq!(div.rate(), 100_000_000);
        assert_eq!(div.round_rate(30_000_000), 28_571_428);

        assert_eq!(div.set_rate(1_000), Err(ClkError::OutOfRange));
        assert_eq!(div.set_rate(0), Err(ClkError::InvalidArgument));
        assert_eq!(f.ram.peek(0x24), 3);
    }

    #[test]
    fn test_pll_enable_sequence() {
        let f = setup();
        let pll = clk(&f, "pll");
        pll.enable().unwrap();
        assert_eq!(
            f.ram.writes(),
            [
                (0x1c, bit(0)),
                (0x1c, bit(0)),
                (0x10, bit(0) | bits(27, 30)),
                (0x10, bit(0) | bits(27, 30) | bit(24)),
            ]
        );

        f.ram.clear_journal();
        pll.disable().unwrap();
        assert_eq!(
            f.ram.writes(),
            [
                (0x10, bit(0) | bits(27, 30)),
                (0x10, 0),
                (0x1c, bit(0) | bit(1)),
                (0x1c, bit(1)),
            ]
        );
    }

    #[test]
    fn test_pll_set_rate_writes() {
        let f = setup();
        let pll = clk(&f, "pll");
        pll.set_rate(600_000_000).unwrap();

        // PD 与 PCW 不在同一寄存器: 先写 PD，再写 PCW，未使能时不置 pcw_chg
        assert_eq!(
            f.ram.writes(),
            [(0x10, 1 << 4), (0x14, 756_184), (0x14, 756_184), (0x18, 756_185)]
        );
        assert_eq!(pll.rate(), 599_999_512);
    }

    #[test]
    fn test_pll_set_rate_when_enabled() {
        let f = setup();
        let pll = clk(&f, "pll");
        pll.enable().unwrap();
        f.ram.clear_journal();

        pll.set_rate(1_200_000_000).unwrap();
        let pcw_writes = f.ram.writes_to(0x14);
        assert_eq!(pcw_writes, [756_184, 756_184 | bit(31)]);
        assert_eq!(f.ram.writes_to(0x18), [(756_184 | bit(31)) + 1]);
    }

    #[test]
    fn test_pll_rate_readback() {
        // set_rate 截断 PCW，get_rate 向上取整，回读值再设置不会变大
        let f = setup();
        let pll = clk(&f, "pll");
        pll.set_rate(1_200_000_000).unwrap();
        let first = pll.rate();
        assert_eq!(first, 1_199_999_024);

        pll.set_rate(first).unwrap();
        let second = pll.rate();
        assert!(second <= first);
        assert!(first - second < 1_588);
    }

    #[test]
    fn test_enable_propagates_to_parent() {
        let f = setup();
        let mux = clk(&f, "mux");
        // half -> sys -> clk26m 路径上没有门控
        mux.set_parent(&clk(&f, "half")).unwrap();
        f.ram.clear_journal();
        mux.enable().unwrap();
        assert!(f.ram.writes().is_empty());

        // 子时钟使能前先打开父门控
        let gate = clk(&f, "gate_hi");
        gate.enable().unwrap();
        assert_eq!(f.ram.writes(), [(0x44, bit(3))]);
    }

    #[test]
    fn test_cross_controller_parent() {
        static REMOTE_CLKS: &[ClkNode] = &[ClkNode::fixed(0, "remote", "clk26m", 48_000_000)];
        static REMOTE: CruDesc = CruDesc {
            name: "remote",
            clks: REMOTE_CLKS,
            resets: &[],
        };

        let f = setup();
        assert_eq!(clk(&f, "remote_child").rate(), 0);

        Cru::attach(&REMOTE, 2, RamSpace::new(0x10), &f.registry).unwrap();
        let child = clk(&f, "remote_child");
        assert_eq!(child.rate(), 12_000_000);
        assert_eq!(child.parent().unwrap().domain().domain_name(), "remote");
    }

    #[test]
    fn test_summary() {
        let f = setup();
        let summary = f.cru.summary();
        assert_eq!(summary.len(), CLKS.len());

        let half = summary.iter().find(|s| s.name == "half").unwrap();
        assert_eq!(half.parent, Some("sys"));
        assert_eq!(half.kind, "factor");
        assert_eq!(half.rate, 200_000_000);
        assert_eq!(half.enabled, None);

        let lo = summary.iter().find(|s| s.name == "gate_lo").unwrap();
        assert_eq!(lo.enabled, Some(true));

        f.cru.print();
    }

    #[test]
    fn test_attach_rejects_bad_window() {
        let registry = Arc::new(CruRegistry::new());
        assert_eq!(
            Cru::attach(&DESC, 1, RamSpace::new(0), &registry).err(),
            Some(ClkError::Device)
        );
        assert_eq!(
            Cru::attach(&DESC, 1, RamSpace::new(0x20), &registry).err(),
            Some(ClkError::Device)
        );
        assert!(registry.controllers().is_empty());
    }

    #[test]
    fn test_attach_rejects_duplicates() {
        static DUP_ID: &[ClkNode] = &[
            ClkNode::fixed(1, "a", "clk26m", 1),
            ClkNode::fixed(1, "b", "clk26m", 1),
        ];
        static DUP_NAME: &[ClkNode] = &[
            ClkNode::fixed(1, "a", "clk26m", 1),
            ClkNode::fixed(2, "a", "clk26m", 1),
        ];
        let registry = Arc::new(CruRegistry::new());
        for clks in [DUP_ID, DUP_NAME] {
            let desc = CruDesc {
                name: "dup",
                clks,
                resets: &[],
            };
            assert_eq!(
                Cru::attach(&desc, 1, RamSpace::new(0x10), &registry).err(),
                Some(ClkError::InvalidArgument)
            );
        }
        assert!(registry.controllers().is_empty());
    }

    #[test]
    fn test_debug_reports_slots() {
        let f = setup();
        let text = alloc::format!("{:?}", f.cru);
        assert!(text.contains("\"testcru\""));
        assert!(text.contains(&alloc::format!("clks: {}", CLKS.len())));
        assert!(text.contains("resets: 0"));
    }

    #[test]
    fn test_private_registry_is_freed() {
        let ram = RamSpace::new(0x100);
        let registry = Arc::new(CruRegistry::new());
        let cru = Cru::attach(&DESC, 1, ram, &registry).unwrap();
        assert!(Arc::ptr_eq(&cru.registry().unwrap(), &registry));

        let weak_registry = Arc::downgrade(&registry);
        let weak_cru = Arc::downgrade(&cru);
        drop(cru);
        drop(registry);
        assert!(weak_registry.upgrade().is_none());
        assert!(weak_cru.upgrade().is_none());
    }
}
