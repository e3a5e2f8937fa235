//! INFRACFG: 基础设施时钟门控和复位

use alloc::sync::Arc;

use clk_if::{BusSpace, Result};

use super::bindings::*;
use crate::{
    clk::{ClkNode, GateFlags},
    cru::{Cru, CruDesc},
    regmap::{GateRegs, bit, bits},
    registry::CruRegistry,
    reset::ResetLine,
};

const INFRA_TOPCKGEN_DCMCTL: u32 = 0x00;
const INFRA_GLOBALCON_RST0: u32 = 0x30;
const INFRA_GLOBALCON_RST1: u32 = 0x34;

static INFRA_CG: GateRegs = GateRegs::gate(0x40, 0x44, 0x48);

static CPU_PARENTS: &[&str] = &["clk26m", "armpll", "mainpll", "mmpll"];

pub static RESETS: &[ResetLine] = &[
    ResetLine::new(RST_INFRA_EMI_REG_RST, INFRA_GLOBALCON_RST0, 0),
    ResetLine::new(RST_INFRA_DRAMC0_A0_RST, INFRA_GLOBALCON_RST0, 1),
    ResetLine::new(RST_INFRA_FHCTL_RST, INFRA_GLOBALCON_RST0, 2),
    ResetLine::new(RST_INFRA_APCIRQ_EINT_RST, INFRA_GLOBALCON_RST0, 3),
    ResetLine::new(RST_INFRA_APXGPT_RST, INFRA_GLOBALCON_RST0, 4),
    ResetLine::new(RST_INFRA_SCPSYS_RST, INFRA_GLOBALCON_RST0, 5),
    ResetLine::new(RST_INFRA_KP_RST, INFRA_GLOBALCON_RST0, 6),
    ResetLine::new(RST_INFRA_PMIC_WRAP_RST, INFRA_GLOBALCON_RST0, 7),
    ResetLine::new(RST_INFRA_MIPI_RST, INFRA_GLOBALCON_RST0, 8),
    ResetLine::new(RST_INFRA_IRRX_RST, INFRA_GLOBALCON_RST0, 9),
    ResetLine::new(RST_INFRA_CEC_RST, INFRA_GLOBALCON_RST0, 10),
    ResetLine::new(RST_INFRA_EMI_RST, INFRA_GLOBALCON_RST1, 0),
    ResetLine::new(RST_INFRA_DRAMC0_RST, INFRA_GLOBALCON_RST1, 2),
    ResetLine::new(RST_INFRA_TRNG_RST, INFRA_GLOBALCON_RST1, 5),
    ResetLine::new(RST_INFRA_SYSIRQ_RST, INFRA_GLOBALCON_RST1, 6),
];

pub static CLKS: &[ClkNode] = &[
    ClkNode::fdiv(CLK_INFRA_CLK_13M, "clk13m", "clk26m", 2),
    ClkNode::mux(
        CLK_INFRA_CPUSEL,
        "infra_cpu_sel",
        CPU_PARENTS,
        INFRA_TOPCKGEN_DCMCTL,
        bits(2, 3),
    ),
    ClkNode::gate(CLK_INFRA_DBG, "dbgclk", "axi_sel", &INFRA_CG, bit(0), GateFlags::empty()),
    ClkNode::gate(CLK_INFRA_SMI, "smi_ck", "mm_sel", &INFRA_CG, bit(1), GateFlags::empty()),
    ClkNode::gate(CLK_INFRA_QAXI_CM4, "cm4_ck", "axi_sel", &INFRA_CG, bit(2), GateFlags::empty()),
    ClkNode::gate(
        CLK_INFRA_AUD_SPLIN_B,
        "audio_splin_bck",
        "hadds2pll_294m",
        &INFRA_CG,
        bit(4),
        GateFlags::empty(),
    ),
    ClkNode::gate(CLK_INFRA_AUDIO, "audio_ck", "clk26m", &INFRA_CG, bit(5), GateFlags::empty()),
    ClkNode::gate(CLK_INFRA_EFUSE, "efuse_ck", "clk26m", &INFRA_CG, bit(6), GateFlags::empty()),
    ClkNode::gate(
        CLK_INFRA_L2C_SRAM,
        "l2c_sram_ck",
        "mm_sel",
        &INFRA_CG,
        bit(7),
        GateFlags::empty(),
    ),
    ClkNode::gate(CLK_INFRA_M4U, "m4u_ck", "mem_sel", &INFRA_CG, bit(8), GateFlags::empty()),
    ClkNode::gate(
        CLK_INFRA_CONNMCU,
        "connsys_bus",
        "wbg_dig_ck_416m",
        &INFRA_CG,
        bit(12),
        GateFlags::empty(),
    ),
    ClkNode::gate(CLK_INFRA_TRNG, "trng_ck", "axi_sel", &INFRA_CG, bit(13), GateFlags::empty()),
    ClkNode::gate(
        CLK_INFRA_RAMBUFIF,
        "rambufif_ck",
        "mem_sel",
        &INFRA_CG,
        bit(14),
        GateFlags::empty(),
    ),
    ClkNode::gate(CLK_INFRA_CPUM, "cpum_ck", "mem_sel", &INFRA_CG, bit(15), GateFlags::empty()),
    ClkNode::gate(CLK_INFRA_KP, "kp_ck", "axi_sel", &INFRA_CG, bit(16), GateFlags::empty()),
    ClkNode::gate(CLK_INFRA_CEC, "cec_ck", "rtc_sel", &INFRA_CG, bit(18), GateFlags::empty()),
    ClkNode::gate(CLK_INFRA_IRRX, "irrx_ck", "axi_sel", &INFRA_CG, bit(19), GateFlags::empty()),
    ClkNode::gate(
        CLK_INFRA_PMICSPI,
        "pmicspi_ck",
        "pmicspi_sel",
        &INFRA_CG,
        bit(22),
        GateFlags::empty(),
    ),
    ClkNode::gate(
        CLK_INFRA_PMICWRAP,
        "pmicwrap_ck",
        "axi_sel",
        &INFRA_CG,
        bit(23),
        GateFlags::empty(),
    ),
    ClkNode::gate(CLK_INFRA_DDCCI, "ddcci_ck", "axi_sel", &INFRA_CG, bit(24), GateFlags::empty()),
];

pub static DESC: CruDesc = CruDesc {
    name: "infracfg",
    clks: CLKS,
    resets: RESETS,
};

pub fn attach(
    space: Arc<dyn BusSpace>,
    phandle: u32,
    registry: &Arc<CruRegistry>,
) -> Result<Arc<Cru>> {
    super::attach_desc(&DESC, "Infrastructure Configuration", space, phandle, registry)
}
