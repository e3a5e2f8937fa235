//! APMIXEDSYS: PLL

use alloc::sync::Arc;

use clk_if::{BusSpace, Result};

use super::bindings::*;
use crate::{
    clk::{ClkNode, Pll, PllFlags},
    cru::{Cru, CruDesc},
    regmap::{PllRegs, bit, bits, mask_field},
    registry::CruRegistry,
};

const ARMPLL_CON0: u32 = 0x200;
const ARMPLL_CON1: u32 = 0x204;
const ARMPLL_PWR_CON0: u32 = 0x20c;
const MAINPLL_CON0: u32 = 0x210;
const MAINPLL_CON1: u32 = 0x214;
const MAINPLL_PWR_CON0: u32 = 0x21c;
const UNIVPLL_CON0: u32 = 0x220;
const UNIVPLL_CON1: u32 = 0x224;
const UNIVPLL_PWR_CON0: u32 = 0x22c;
const MMPLL_CON0: u32 = 0x230;
const MMPLL_CON1: u32 = 0x234;
const MMPLL_PWR_CON0: u32 = 0x23c;
const MSDCPLL_CON0: u32 = 0x240;
const MSDCPLL_CON1: u32 = 0x244;
const MSDCPLL_PWR_CON0: u32 = 0x24c;
const TVDPLL_CON0: u32 = 0x250;
const TVDPLL_CON1: u32 = 0x254;
const TVDPLL_PWR_CON0: u32 = 0x25c;
const AUD1PLL_CON0: u32 = 0x270;
const AUD1PLL_CON1: u32 = 0x274;
const AUD1PLL_PWR_CON0: u32 = 0x27c;
const TRGPLL_CON0: u32 = 0x280;
const TRGPLL_CON1: u32 = 0x284;
const TRGPLL_PWR_CON0: u32 = 0x28c;
const ETHPLL_CON0: u32 = 0x290;
const ETHPLL_CON1: u32 = 0x294;
const ETHPLL_PWR_CON0: u32 = 0x29c;
const VDECPLL_CON0: u32 = 0x2a0;
const VDECPLL_CON1: u32 = 0x2a4;
const VDECPLL_PWR_CON0: u32 = 0x2ac;
const HADDS2PLL_CON0: u32 = 0x2b0;
const HADDS2PLL_CON1: u32 = 0x2b4;
const HADDS2PLL_PWR_CON0: u32 = 0x2bc;
const AUD2PLL_CON0: u32 = 0x2c0;
const AUD2PLL_CON1: u32 = 0x2c4;
const AUD2PLL_PWR_CON0: u32 = 0x2cc;
const TVD2PLL_CON0: u32 = 0x2d0;
const TVD2PLL_CON1: u32 = 0x2d4;
const TVD2PLL_PWR_CON0: u32 = 0x2dc;

const PLL_MAX_FREQ: u32 = 2_000_000_000;

// armpll 的后分频位于 CON1，其余 PLL 位于 CON0
static ARMPLL_REGS: PllRegs = PllRegs::pll(ARMPLL_CON0, ARMPLL_CON1, ARMPLL_CON1, ARMPLL_PWR_CON0);
static MAINPLL_REGS: PllRegs =
    PllRegs::pll(MAINPLL_CON0, MAINPLL_CON1, MAINPLL_CON0, MAINPLL_PWR_CON0);
static UNIVPLL_REGS: PllRegs =
    PllRegs::pll(UNIVPLL_CON0, UNIVPLL_CON1, UNIVPLL_CON0, UNIVPLL_PWR_CON0);
static MMPLL_REGS: PllRegs = PllRegs::pll(MMPLL_CON0, MMPLL_CON1, MMPLL_CON0, MMPLL_PWR_CON0);
static MSDCPLL_REGS: PllRegs =
    PllRegs::pll(MSDCPLL_CON0, MSDCPLL_CON1, MSDCPLL_CON0, MSDCPLL_PWR_CON0);
static TVDPLL_REGS: PllRegs = PllRegs::pll(TVDPLL_CON0, TVDPLL_CON1, TVDPLL_CON0, TVDPLL_PWR_CON0);
static AUD1PLL_REGS: PllRegs =
    PllRegs::pll(AUD1PLL_CON0, AUD1PLL_CON1, AUD1PLL_CON0, AUD1PLL_PWR_CON0);
static TRGPLL_REGS: PllRegs = PllRegs::pll(TRGPLL_CON0, TRGPLL_CON1, TRGPLL_CON0, TRGPLL_PWR_CON0);
static ETHPLL_REGS: PllRegs = PllRegs::pll(ETHPLL_CON0, ETHPLL_CON1, ETHPLL_CON0, ETHPLL_PWR_CON0);
static VDECPLL_REGS: PllRegs =
    PllRegs::pll(VDECPLL_CON0, VDECPLL_CON1, VDECPLL_CON0, VDECPLL_PWR_CON0);
static HADDS2PLL_REGS: PllRegs =
    PllRegs::pll(HADDS2PLL_CON0, HADDS2PLL_CON1, HADDS2PLL_CON0, HADDS2PLL_PWR_CON0);
static AUD2PLL_REGS: PllRegs =
    PllRegs::pll(AUD2PLL_CON0, AUD2PLL_CON1, AUD2PLL_CON0, AUD2PLL_PWR_CON0);
static TVD2PLL_REGS: PllRegs =
    PllRegs::pll(TVD2PLL_CON0, TVD2PLL_CON1, TVD2PLL_CON0, TVD2PLL_PWR_CON0);

/// APMIXEDSYS PLL 的公共参数: 参考 clk26m，最高 2GHz，
/// pll_en = CON0[0]，pwr_en = PWR[0]，iso_en = PWR[1]，pcw_chg = PCW[31]
const fn apmixed_pll(
    regs: &'static PllRegs,
    pll_en_aux: u32,
    pcw_nbits: u32,
    pcw_shift: u32,
    pd: u32,
    rst_bar_mask: u32,
    flags: PllFlags,
) -> Pll {
    Pll {
        regs,
        parent: "clk26m",
        max_freq: PLL_MAX_FREQ,
        pll_en: bit(0),
        pll_en_aux,
        pwr_en: bit(0),
        iso_en: bit(1),
        pcw_chg: bit(31),
        pcw_nbits,
        pcw_shift,
        pd: mask_field(pd),
        rst_bar_mask,
        flags,
    }
}

const fn plain_pll(regs: &'static PllRegs, pcw_nbits: u32) -> Pll {
    apmixed_pll(regs, 0, pcw_nbits, 0, bits(4, 6), 0, PllFlags::empty())
}

pub static CLKS: &[ClkNode] = &[
    ClkNode::pll(
        CLK_APMIXED_ARMPLL,
        "armpll",
        apmixed_pll(
            &ARMPLL_REGS,
            0,
            21,
            0,
            bits(24, 26),
            0,
            PllFlags::ALWAYS_ON,
        ),
    ),
    ClkNode::pll(
        CLK_APMIXED_MAINPLL,
        "mainpll",
        apmixed_pll(
            &MAINPLL_REGS,
            bits(27, 30),
            21,
            0,
            bits(4, 6),
            bit(24),
            PllFlags::empty(),
        ),
    ),
    ClkNode::pll(
        CLK_APMIXED_UNIVPLL,
        "univpll",
        apmixed_pll(
            &UNIVPLL_REGS,
            bits(26, 31),
            7,
            14,
            bits(4, 6),
            bit(24),
            PllFlags::empty(),
        ),
    ),
    ClkNode::pll(CLK_APMIXED_MMPLL, "mmpll", plain_pll(&MMPLL_REGS, 21)),
    ClkNode::pll(CLK_APMIXED_MSDCPLL, "msdcpll", plain_pll(&MSDCPLL_REGS, 21)),
    ClkNode::pll(CLK_APMIXED_TVDPLL, "tvdpll", plain_pll(&TVDPLL_REGS, 21)),
    ClkNode::pll(CLK_APMIXED_AUD1PLL, "aud1pll", plain_pll(&AUD1PLL_REGS, 31)),
    ClkNode::pll(CLK_APMIXED_TRGPLL, "trgpll", plain_pll(&TRGPLL_REGS, 31)),
    ClkNode::pll(CLK_APMIXED_ETHPLL, "ethpll", plain_pll(&ETHPLL_REGS, 31)),
    ClkNode::pll(CLK_APMIXED_VDECPLL, "vdecpll", plain_pll(&VDECPLL_REGS, 31)),
    ClkNode::pll(
        CLK_APMIXED_HADDS2PLL,
        "hadds2pll",
        plain_pll(&HADDS2PLL_REGS, 31),
    ),
    ClkNode::pll(CLK_APMIXED_AUD2PLL, "aud2pll", plain_pll(&AUD2PLL_REGS, 31)),
    ClkNode::pll(CLK_APMIXED_TVD2PLL, "tvd2pll", plain_pll(&TVD2PLL_REGS, 31)),
    ClkNode::fdiv(CLK_APMIXED_HDMI_REF, "hdmi_ref", "tvdpll", 1),
];

pub static DESC: CruDesc = CruDesc {
    name: "apmixedsys",
    clks: CLKS,
    resets: &[],
};

pub fn attach(
    space: Arc<dyn BusSpace>,
    phandle: u32,
    registry: &Arc<CruRegistry>,
) -> Result<Arc<Cru>> {
    super::attach_desc(&DESC, "APMIXEDSYS PLL", space, phandle, registry)
}
