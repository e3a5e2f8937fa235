//! HIFSYS: USB / PCIe 时钟门控和复位
//!
//! 门控位全部位于 `CLKCFG1`，没有独立的 SET/CLR 寄存器，需要读-改-写。

use alloc::{string::String, sync::Arc};

use clk_if::{BusSpace, Result};

use super::bindings::*;
use crate::{
    clk::{ClkNode, GateFlags},
    cru::{Cru, CruDesc},
    regmap::{GateRegs, bit},
    registry::CruRegistry,
    reset::ResetLine,
};

const HIFSYS_ID0_3: u32 = 0x000;
const HIFSYS_ID4_7: u32 = 0x004;
const HIFSYS_CLKCFG1: u32 = 0x030;
const HIFSYS_RSTCTL: u32 = 0x034;

static CLKCFG1: GateRegs = GateRegs::shared(HIFSYS_CLKCFG1);

pub static RESETS: &[ResetLine] = &[
    ResetLine::new(RST_HIFSYS_UHOST0_RST, HIFSYS_RSTCTL, 3),
    ResetLine::new(RST_HIFSYS_UHOST1_RST, HIFSYS_RSTCTL, 4),
    ResetLine::new(RST_HIFSYS_UPHY0_RST, HIFSYS_RSTCTL, 21),
    ResetLine::new(RST_HIFSYS_UPHY1_RST, HIFSYS_RSTCTL, 22),
    ResetLine::new(RST_HIFSYS_PCIE0_RST, HIFSYS_RSTCTL, 24),
    ResetLine::new(RST_HIFSYS_PCIE1_RST, HIFSYS_RSTCTL, 25),
    ResetLine::new(RST_HIFSYS_PCIE2_RST, HIFSYS_RSTCTL, 26),
];

pub static CLKS: &[ClkNode] = &[
    ClkNode::gate(
        CLK_HIFSYS_USB0PHY,
        "usb0_phy_clk",
        "ethpll_500m_ck",
        &CLKCFG1,
        bit(21),
        GateFlags::empty(),
    ),
    ClkNode::gate(
        CLK_HIFSYS_USB1PHY,
        "usb1_phy_clk",
        "ethpll_500m_ck",
        &CLKCFG1,
        bit(22),
        GateFlags::empty(),
    ),
    ClkNode::gate(
        CLK_HIFSYS_PCIE0,
        "pcie0_clk",
        "ethpll_500m_ck",
        &CLKCFG1,
        bit(24),
        GateFlags::empty(),
    ),
    ClkNode::gate(
        CLK_HIFSYS_PCIE1,
        "pcie1_clk",
        "ethpll_500m_ck",
        &CLKCFG1,
        bit(25),
        GateFlags::empty(),
    ),
    ClkNode::gate(
        CLK_HIFSYS_PCIE2,
        "pcie2_clk",
        "ethpll_500m_ck",
        &CLKCFG1,
        bit(26),
        GateFlags::empty(),
    ),
];

pub static DESC: CruDesc = CruDesc {
    name: "hifsys",
    clks: CLKS,
    resets: RESETS,
};

/// 读取 8 字节 ASCII 标识，低字节在前
pub fn read_id(cru: &Cru) -> String {
    [HIFSYS_ID0_3, HIFSYS_ID4_7]
        .into_iter()
        .flat_map(|reg| cru.read_4(reg).to_le_bytes())
        .take_while(|b| *b != 0)
        .map(char::from)
        .collect()
}

pub fn attach(
    space: Arc<dyn BusSpace>,
    phandle: u32,
    registry: &Arc<CruRegistry>,
) -> Result<Arc<Cru>> {
    let cru = Cru::attach(&DESC, phandle, space, registry)?;
    log::info!("CRU@{}: HIFSYS, ID='{}'", cru.name(), read_id(&cru));
    cru.print();
    Ok(cru)
}
