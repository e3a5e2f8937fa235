use clk_if::{ClkError, Result};

use super::{ClkOps, GateFlags, field_present, gate::gate_enable};
use crate::{
    cru::Cru,
    regmap::{GateReg, GateRegs, RegField},
};

/// 时钟复用器
pub struct Mux {
    pub reg: u32,
    pub sel: RegField,
    pub parents: &'static [&'static str],
}

/// 带门控的时钟复用器，选择位和使能位位于同一组寄存器
pub struct MuxGate {
    pub regs: &'static GateRegs,
    pub parents: &'static [&'static str],
    pub sel: RegField,
    pub mask: u32,
    pub flags: GateFlags,
}

fn mux_get_parent(
    cru: &Cru,
    reg: u32,
    sel: RegField,
    parents: &'static [&'static str],
) -> Option<&'static str> {
    let index = cru.regmap().read_field(reg, sel) as usize;
    parents.get(index).copied()
}

fn mux_set_parent(
    cru: &Cru,
    reg: u32,
    sel: RegField,
    parents: &'static [&'static str],
    name: &str,
) -> Result {
    if !field_present(sel) {
        return Err(ClkError::NotSupported);
    }

    let index = parents
        .iter()
        .position(|p| *p == name)
        .ok_or(ClkError::InvalidArgument)?;

    log::debug!(
        "CRU@{}: select parent {} (reg={:#x}, index={})",
        cru.name(),
        name,
        reg,
        index
    );

    let _guard = cru.lock();
    cru.regmap().modify_field(reg, sel, index as u32);
    Ok(())
}

impl ClkOps for Mux {
    fn get_parent(&self, cru: &Cru) -> Option<&'static str> {
        mux_get_parent(cru, self.reg, self.sel, self.parents)
    }

    fn set_parent(&self, cru: &Cru, name: &str) -> Option<Result> {
        Some(mux_set_parent(cru, self.reg, self.sel, self.parents, name))
    }
}

impl MuxGate {
    fn sta(&self) -> u32 {
        self.regs.get(GateReg::Sta)
    }
}

impl ClkOps for MuxGate {
    fn enable(&self, cru: &Cru, on: bool) -> Option<Result> {
        Some(gate_enable(cru, self.regs, self.mask, self.flags, on))
    }

    fn get_parent(&self, cru: &Cru) -> Option<&'static str> {
        mux_get_parent(cru, self.sta(), self.sel, self.parents)
    }

    fn set_parent(&self, cru: &Cru, name: &str) -> Option<Result> {
        Some(mux_set_parent(cru, self.sta(), self.sel, self.parents, name))
    }
}
