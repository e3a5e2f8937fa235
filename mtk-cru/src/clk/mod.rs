//! CRU 时钟节点模型
//!
//! 每个节点是一个带设备树编号的 [`ClkNode`]，节点类型 [`ClkKind`] 决定它具备哪些能力。
//! 能力通过 [`ClkOps`] 分发，返回 `None` 表示该类型不支持这一操作，
//! 由控制器的通用分发逻辑决定回退方式。

use clk_if::{ClkFlags, Result};
use enum_dispatch::enum_dispatch;

use crate::{
    cru::Cru,
    regmap::{GateRegs, RegField, mask_field},
};

mod div;
mod factor;
mod fixed;
mod gate;
mod mux;
mod pll;

pub use div::{Div, DivFlags};
pub use factor::Factor;
pub use fixed::Fixed;
pub use gate::{Gate, GateFlags};
pub use mux::{Mux, MuxGate};
pub use pll::{Pll, PllFlags};

/// 时钟类型能力表
#[enum_dispatch]
pub trait ClkOps {
    fn enable(&self, _cru: &Cru, _on: bool) -> Option<Result> {
        None
    }

    fn get_rate(&self, _cru: &Cru) -> Option<u32> {
        None
    }

    fn set_rate(&self, _cru: &Cru, _rate: u32) -> Option<Result> {
        None
    }

    fn round_rate(&self, _cru: &Cru, _rate: u32) -> Option<u32> {
        None
    }

    /// 当前父时钟名称
    fn get_parent(&self, _cru: &Cru) -> Option<&'static str> {
        None
    }

    fn set_parent(&self, _cru: &Cru, _name: &str) -> Option<Result> {
        None
    }
}

#[enum_dispatch(ClkOps)]
pub enum ClkKind {
    Fixed,
    Factor,
    Gate,
    Mux,
    MuxGate,
    Div,
    Pll,
}

impl ClkKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ClkKind::Fixed(_) => "fixed",
            ClkKind::Factor(_) => "factor",
            ClkKind::Gate(_) => "gate",
            ClkKind::Mux(_) => "mux",
            ClkKind::MuxGate(_) => "muxgate",
            ClkKind::Div(_) => "div",
            ClkKind::Pll(_) => "pll",
        }
    }

    /// 硬件使能状态，没有门控的类型返回 `None`
    pub fn is_enabled(&self, cru: &Cru) -> Option<bool> {
        match self {
            ClkKind::Gate(g) => Some(gate::gate_is_enabled(cru, g.regs, g.mask, g.flags)),
            ClkKind::MuxGate(m) => Some(gate::gate_is_enabled(cru, m.regs, m.mask, m.flags)),
            ClkKind::Pll(p) => Some(p.is_enabled(cru)),
            _ => None,
        }
    }

    /// 节点引用的寄存器偏移，供 attach 时检查窗口边界
    pub fn regs(&self) -> &[u32] {
        match self {
            ClkKind::Fixed(_) | ClkKind::Factor(_) => &[],
            ClkKind::Gate(g) => g.regs.offsets(),
            ClkKind::Mux(m) => core::slice::from_ref(&m.reg),
            ClkKind::MuxGate(m) => m.regs.offsets(),
            ClkKind::Div(d) => core::slice::from_ref(&d.reg),
            ClkKind::Pll(p) => p.regs.offsets(),
        }
    }
}

/// 时钟表中的一项
pub struct ClkNode {
    pub id: u32,
    pub name: &'static str,
    pub flags: ClkFlags,
    pub kind: ClkKind,
}

impl ClkNode {
    pub const fn fixed(id: u32, name: &'static str, parent: &'static str, rate: u32) -> Self {
        Self {
            id,
            name,
            flags: ClkFlags::empty(),
            kind: ClkKind::Fixed(Fixed { parent, rate }),
        }
    }

    pub const fn factor(
        id: u32,
        name: &'static str,
        parent: &'static str,
        mul: u32,
        div: u32,
    ) -> Self {
        Self {
            id,
            name,
            flags: ClkFlags::empty(),
            kind: ClkKind::Factor(Factor { parent, mul, div }),
        }
    }

    pub const fn fdiv(id: u32, name: &'static str, parent: &'static str, div: u32) -> Self {
        Self::factor(id, name, parent, 1, div)
    }

    pub const fn fmul(id: u32, name: &'static str, parent: &'static str, mul: u32) -> Self {
        Self::factor(id, name, parent, mul, 1)
    }

    pub const fn gate(
        id: u32,
        name: &'static str,
        parent: &'static str,
        regs: &'static GateRegs,
        mask: u32,
        flags: GateFlags,
    ) -> Self {
        Self {
            id,
            name,
            flags: ClkFlags::SET_RATE_PARENT,
            kind: ClkKind::Gate(Gate {
                regs,
                parent,
                mask,
                flags,
            }),
        }
    }

    /// `sel` 为 0 表示不可由软件切换
    pub const fn mux(
        id: u32,
        name: &'static str,
        parents: &'static [&'static str],
        reg: u32,
        sel: u32,
    ) -> Self {
        Self {
            id,
            name,
            flags: ClkFlags::SET_RATE_PARENT,
            kind: ClkKind::Mux(Mux {
                reg,
                sel: mask_field(sel),
                parents,
            }),
        }
    }

    pub const fn muxgate(
        id: u32,
        name: &'static str,
        parents: &'static [&'static str],
        regs: &'static GateRegs,
        sel: u32,
        mask: u32,
        flags: GateFlags,
    ) -> Self {
        Self::muxgate_clkf(
            id,
            name,
            parents,
            regs,
            sel,
            mask,
            flags,
            ClkFlags::SET_RATE_PARENT,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub const fn muxgate_clkf(
        id: u32,
        name: &'static str,
        parents: &'static [&'static str],
        regs: &'static GateRegs,
        sel: u32,
        mask: u32,
        flags: GateFlags,
        clk_flags: ClkFlags,
    ) -> Self {
        Self {
            id,
            name,
            flags: clk_flags,
            kind: ClkKind::MuxGate(MuxGate {
                regs,
                parents,
                sel: mask_field(sel),
                mask,
                flags,
            }),
        }
    }

    pub const fn div(
        id: u32,
        name: &'static str,
        parent: &'static str,
        reg: u32,
        div: u32,
        flags: DivFlags,
    ) -> Self {
        Self {
            id,
            name,
            flags: ClkFlags::empty(),
            kind: ClkKind::Div(Div {
                reg,
                parent,
                div: mask_field(div),
                flags,
            }),
        }
    }

    pub const fn pll(id: u32, name: &'static str, pll: Pll) -> Self {
        Self {
            id,
            name,
            flags: ClkFlags::empty(),
            kind: ClkKind::Pll(pll),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}

/// 位域是否可用
pub(crate) fn field_present(field: RegField) -> bool {
    field.mask != 0
}
