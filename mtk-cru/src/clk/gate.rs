use clk_if::Result;

use super::ClkOps;
use crate::{
    cru::Cru,
    regmap::{GateReg, GateRegs},
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GateFlags: u32 {
        /// 写 CLR 寄存器使能时钟
        const ACT_LOW = 1 << 0;
    }
}

/// 门控时钟
pub struct Gate {
    pub regs: &'static GateRegs,
    pub parent: &'static str,
    pub mask: u32,
    pub flags: GateFlags,
}

/// 门控使能，门控时钟和带门控的复用器共用
pub(crate) fn gate_enable(
    cru: &Cru,
    regs: &GateRegs,
    mask: u32,
    flags: GateFlags,
    on: bool,
) -> Result {
    let set = on != flags.contains(GateFlags::ACT_LOW);
    let which = if set { GateReg::Set } else { GateReg::Clr };
    let reg = regs.get(which);

    if regs.is_shared() {
        // 置位/清除共用一个寄存器，只能读-改-写
        let _guard = cru.lock();
        if set {
            cru.regmap().set_bits(reg, mask);
        } else {
            cru.regmap().clear_bits(reg, mask);
        }
    } else {
        // 独立的 SET/CLR 寄存器由硬件保证原子性，无需加锁
        cru.regmap().reg_write(reg, mask);
    }

    Ok(())
}

/// 门控当前是否打开，读取 STA 寄存器
pub(crate) fn gate_is_enabled(cru: &Cru, regs: &GateRegs, mask: u32, flags: GateFlags) -> bool {
    let bit_set = cru.regmap().reg_read(regs.get(GateReg::Sta)) & mask != 0;
    bit_set != flags.contains(GateFlags::ACT_LOW)
}

impl ClkOps for Gate {
    fn enable(&self, cru: &Cru, on: bool) -> Option<Result> {
        Some(gate_enable(cru, self.regs, self.mask, self.flags, on))
    }

    fn get_parent(&self, _cru: &Cru) -> Option<&'static str> {
        Some(self.parent)
    }
}
