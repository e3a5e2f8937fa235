//! TOPCKGEN: 顶层时钟生成器
//!
//! 由 APMIXEDSYS 的 PLL 分出各级固定分频，再经复用器/门控送往各模块。
//! `CLK_CFG_n` 寄存器组每 8 位一个复用器: 低位为选择，bit 7 为低有效的门控。
//! 音频部分的选择、门控共用 `CLK_AUDDIV3`，分频位于 `CLK_AUDDIV0..2`。

use alloc::sync::Arc;

use clk_if::{BusSpace, ClkFlags, Result};

use super::bindings::*;
use crate::{
    clk::{ClkNode, DivFlags, GateFlags},
    cru::{Cru, CruDesc},
    regmap::{GateRegs, bit, bits},
    registry::CruRegistry,
};

const CLK_CFG_0: u32 = 0x040;
const CLK_CFG_1: u32 = 0x050;
const CLK_CFG_2: u32 = 0x060;
const CLK_CFG_3: u32 = 0x070;
const CLK_CFG_4: u32 = 0x080;
const CLK_CFG_5: u32 = 0x090;
const CLK_CFG_6: u32 = 0x0a0;
const CLK_CFG_7: u32 = 0x0b0;
const CLK_CFG_12: u32 = 0x0c0;
const CLK_CFG_13: u32 = 0x0d0;
const CLK_CFG_14: u32 = 0x0e0;
const CLK_CFG_15: u32 = 0x0f0;
const CLK_CFG_8: u32 = 0x100;
const CLK_AUDDIV0: u32 = 0x120;
const CLK_AUDDIV1: u32 = 0x124;
const CLK_AUDDIV2: u32 = 0x128;
const CLK_AUDDIV3: u32 = 0x12c;

/// `CLK_CFG_n` 的状态寄存器在基址，SET/CLR 分别在 +4/+8
const fn cfg_regs(sta: u32) -> GateRegs {
    GateRegs::gate(sta + 4, sta + 8, sta)
}

static CFG0: GateRegs = cfg_regs(CLK_CFG_0);
static CFG1: GateRegs = cfg_regs(CLK_CFG_1);
static CFG2: GateRegs = cfg_regs(CLK_CFG_2);
static CFG3: GateRegs = cfg_regs(CLK_CFG_3);
static CFG4: GateRegs = cfg_regs(CLK_CFG_4);
static CFG5: GateRegs = cfg_regs(CLK_CFG_5);
static CFG6: GateRegs = cfg_regs(CLK_CFG_6);
static CFG7: GateRegs = cfg_regs(CLK_CFG_7);
static CFG12: GateRegs = cfg_regs(CLK_CFG_12);
static CFG13: GateRegs = cfg_regs(CLK_CFG_13);
static CFG14: GateRegs = cfg_regs(CLK_CFG_14);
static CFG15: GateRegs = cfg_regs(CLK_CFG_15);
static AUDDIV3: GateRegs = GateRegs::shared(CLK_AUDDIV3);

const LOW: GateFlags = GateFlags::ACT_LOW;

// ==================== 复用器父时钟 ====================

static AXI_PARENTS: &[&str] = &[
    "clk26m",
    "syspll1_d2",
    "syspll_d5",
    "syspll1_d4",
    "univpll_d5",
    "univpll2_d2",
    "mmpll_d2",
    "dmpll_d2",
];
static MEM_PARENTS: &[&str] = &["clk26m", "dmpll_ck"];
static DDRPHYCFG_PARENTS: &[&str] = &["clk26m", "syspll1_d8"];
static MM_PARENTS: &[&str] = &[
    "clk26m",
    "vencpll_ck",
    "syspll1_d2",
    "syspll1_d4",
    "univpll_d5",
    "univpll1_d2",
    "univpll2_d2",
    "dmpll_ck",
];
static PWM_PARENTS: &[&str] = &["clk26m", "univpll2_d4", "univpll3_d2", "univpll1_d4"];
static VDEC_PARENTS: &[&str] = &[
    "clk26m",
    "vdecpll_ck",
    "syspll_d5",
    "syspll1_d4",
    "univpll_d5",
    "univpll2_d2",
    "vencpll_ck",
    "msdcpll_d2",
    "mmpll_d2",
];
static MFG_PARENTS: &[&str] = &[
    "clk26m",
    "mmpll_ck",
    "dmpll_x2_ck",
    "msdcpll_ck",
    "clk26m",
    "syspll_d3",
    "univpll_d3",
    "univpll1_d2",
];
static CAMTG_PARENTS: &[&str] = &[
    "clk26m",
    "univpll_d26",
    "univpll2_d2",
    "syspll3_d2",
    "syspll3_d4",
    "msdcpll_d2",
    "mmpll_d2",
];
static UART_PARENTS: &[&str] = &["clk26m", "univpll2_d8"];
static SPI_PARENTS: &[&str] = &[
    "clk26m",
    "syspll3_d2",
    "syspll4_d2",
    "univpll2_d4",
    "univpll1_d8",
];
static USB20_PARENTS: &[&str] = &["clk26m", "univpll1_d8", "univpll3_d4"];
static MSDC30_PARENTS: &[&str] = &[
    "clk26m",
    "msdcpll_d2",
    "syspll2_d2",
    "syspll1_d4",
    "univpll1_d4",
    "univpll2_d4",
];
static AUDIO_PARENTS: &[&str] = &["clk26m", "syspll1_d16"];
static AUD_INTBUS_PARENTS: &[&str] = &[
    "clk26m",
    "syspll1_d4",
    "syspll3_d2",
    "syspll4_d2",
    "univpll3_d2",
    "univpll2_d4",
];
static PMICSPI_PARENTS: &[&str] = &[
    "clk26m",
    "syspll1_d8",
    "syspll2_d4",
    "syspll4_d2",
    "syspll3_d4",
    "syspll2_d8",
    "syspll1_d16",
    "univpll3_d4",
    "univpll_d26",
    "dmpll_d2",
    "dmpll_d4",
];
static SCP_PARENTS: &[&str] = &["clk26m", "syspll1_d8", "dmpll_d2", "dmpll_d4"];
static DPI0_PARENTS: &[&str] = &[
    "clk26m",
    "mipipll",
    "mipipll_d2",
    "mipipll_d4",
    "clk26m",
    "tvdpll_ck",
    "tvdpll_d2",
    "tvdpll_d4",
];
static DPI1_PARENTS: &[&str] = &["clk26m", "tvdpll_ck", "tvdpll_d2", "tvdpll_d4"];
static TVE_PARENTS: &[&str] = &[
    "clk26m",
    "mipipll",
    "mipipll_d2",
    "mipipll_d4",
    "clk26m",
    "tvdpll_ck",
    "tvdpll_d2",
    "tvdpll_d4",
];
static HDMI_PARENTS: &[&str] = &["clk26m", "hdmipll_ck", "hdmipll_d2", "hdmipll_d3"];
static APLL_PARENTS: &[&str] = &[
    "clk26m",
    "audpll",
    "audpll_d4",
    "audpll_d8",
    "audpll_d16",
    "audpll_d24",
    "clk26m",
    "clk26m",
];
static RTC_PARENTS: &[&str] = &["32k_internal", "32k_external", "clk26m", "univpll3_d8"];
static NFI2X_PARENTS: &[&str] = &[
    "clk26m",
    "syspll2_d2",
    "syspll_d7",
    "univpll3_d2",
    "syspll2_d4",
    "univpll3_d4",
    "syspll4_d4",
    "clk26m",
];
static EMMC_HCLK_PARENTS: &[&str] = &["clk26m", "syspll1_d2", "syspll1_d4", "syspll2_d2"];
static FLASH_PARENTS: &[&str] = &[
    "clk26m_d8",
    "clk26m",
    "syspll2_d8",
    "syspll3_d4",
    "univpll3_d4",
    "syspll4_d2",
    "syspll2_d4",
    "univpll2_d4",
];
static DI_PARENTS: &[&str] = &["clk26m", "tvd2pll_ck", "tvd2pll_d2", "clk26m"];
static NR_OSD_PARENTS: &[&str] = &[
    "clk26m",
    "vencpll_ck",
    "syspll1_d2",
    "syspll1_d4",
    "univpll_d5",
    "univpll1_d2",
    "univpll2_d2",
    "dmpll_ck",
];
static HDMIRX_BIST_PARENTS: &[&str] = &[
    "clk26m",
    "syspll_d3",
    "clk26m",
    "syspll1_d16",
    "syspll4_d2",
    "syspll1_d4",
    "vencpll_ck",
    "clk26m",
];
static INTDIR_PARENTS: &[&str] = &["clk26m", "mmpll_ck", "syspll_d2", "univpll_d2"];
static ASM_PARENTS: &[&str] = &["clk26m", "univpll2_d4", "univpll2_d2", "syspll_d5"];
static MS_CARD_PARENTS: &[&str] = &["clk26m", "univpll3_d8", "syspll4_d4"];
static ETHIF_PARENTS: &[&str] = &[
    "clk26m",
    "syspll1_d2",
    "syspll_d5",
    "syspll1_d4",
    "univpll_d5",
    "univpll1_d2",
    "dmpll_ck",
    "dmpll_d2",
];
static HDMIRX_PARENTS: &[&str] = &["clk26m", "univpll_d52"];
static CMSYS_PARENTS: &[&str] = &[
    "clk26m",
    "syspll1_d2",
    "univpll1_d2",
    "univpll_d5",
    "syspll_d5",
    "syspll2_d2",
    "syspll1_d4",
    "syspll3_d2",
    "syspll2_d4",
    "syspll1_d8",
    "clk26m",
    "clk26m",
    "clk26m",
    "clk26m",
    "clk26m",
];
static DAC8B_PARENTS: &[&str] = &["32k_internal", "8bdac_ck", "clk26m", "clk26m"];
static AUD2DVD_PARENTS: &[&str] = &["a1sys_hp_ck", "a2sys_hp_ck"];
static PADMCLK_PARENTS: &[&str] = &[
    "clk26m",
    "univpll_d26",
    "univpll_d52",
    "univpll_d108",
    "univpll2_d8",
    "univpll2_d16",
    "univpll2_d32",
];
static AUD_MUX_PARENTS: &[&str] = &[
    "clk26m",
    "aud1pll_98m_ck",
    "aud2pll_90m_ck",
    "hadds2pll_98m",
    "audio_ext1_ck",
    "audio_ext2_ck",
];
static AUD_SRC_PARENTS: &[&str] = &["aud_mux1_sel", "aud_mux2_sel"];

pub static CLKS: &[ClkNode] = &[
    // 固定频率
    ClkNode::fixed(CLK_TOP_DPI, "dpi_ck", "clk26m", 108_000_000),
    ClkNode::fixed(CLK_TOP_DMPLL, "dmpll_ck", "clk26m", 400_000_000),
    ClkNode::fixed(CLK_TOP_VENCPLL, "vencpll_ck", "clk26m", 295_750_000),
    ClkNode::fixed(CLK_TOP_HDMI_0_PIX340M, "hdmi_0_pix340m", "clk26m", 340_000_000),
    ClkNode::fixed(CLK_TOP_HDMI_0_DEEP340M, "hdmi_0_deep340m", "clk26m", 340_000_000),
    ClkNode::fixed(CLK_TOP_HDMI_0_PLL340M, "hdmi_0_pll340m", "clk26m", 340_000_000),
    ClkNode::fixed(CLK_TOP_HADDS2_FB, "hadds2_fbclk", "clk26m", 27_000_000),
    ClkNode::fixed(CLK_TOP_WBG_DIG_416M, "wbg_dig_ck_416m", "clk26m", 416_000_000),
    ClkNode::fixed(CLK_TOP_DSI0_LNTC_DSI, "dsi0_lntc_dsi", "clk26m", 143_000_000),
    ClkNode::fixed(CLK_TOP_HDMI_SCL_RX, "hdmi_scl_rx", "clk26m", 27_000_000),
    ClkNode::fixed(CLK_TOP_AUD_EXT1, "aud_ext1", "clk26m", 0),
    ClkNode::fixed(CLK_TOP_AUD_EXT2, "aud_ext2", "clk26m", 0),
    ClkNode::fixed(CLK_TOP_NFI1X_PAD, "nfi1x_pad", "clk26m", 0),
    // 固定分频
    ClkNode::fdiv(CLK_TOP_SYSPLL, "syspll_ck", "mainpll", 1),
    ClkNode::fdiv(CLK_TOP_SYSPLL_D2, "syspll_d2", "mainpll", 2),
    ClkNode::fdiv(CLK_TOP_SYSPLL_D3, "syspll_d3", "mainpll", 3),
    ClkNode::fdiv(CLK_TOP_SYSPLL_D5, "syspll_d5", "mainpll", 5),
    ClkNode::fdiv(CLK_TOP_SYSPLL_D7, "syspll_d7", "mainpll", 7),
    ClkNode::fdiv(CLK_TOP_SYSPLL1_D2, "syspll1_d2", "syspll_d2", 2),
    ClkNode::fdiv(CLK_TOP_SYSPLL1_D4, "syspll1_d4", "syspll_d2", 4),
    ClkNode::fdiv(CLK_TOP_SYSPLL1_D8, "syspll1_d8", "syspll_d2", 8),
    ClkNode::fdiv(CLK_TOP_SYSPLL1_D16, "syspll1_d16", "syspll_d2", 16),
    ClkNode::fdiv(CLK_TOP_SYSPLL2_D2, "syspll2_d2", "syspll_d3", 2),
    ClkNode::fdiv(CLK_TOP_SYSPLL2_D4, "syspll2_d4", "syspll_d3", 4),
    ClkNode::fdiv(CLK_TOP_SYSPLL2_D8, "syspll2_d8", "syspll_d3", 8),
    ClkNode::fdiv(CLK_TOP_SYSPLL3_D2, "syspll3_d2", "syspll_d5", 2),
    ClkNode::fdiv(CLK_TOP_SYSPLL3_D4, "syspll3_d4", "syspll_d5", 4),
    ClkNode::fdiv(CLK_TOP_SYSPLL4_D2, "syspll4_d2", "syspll_d7", 2),
    ClkNode::fdiv(CLK_TOP_SYSPLL4_D4, "syspll4_d4", "syspll_d7", 4),
    ClkNode::fdiv(CLK_TOP_UNIVPLL, "univpll_ck", "univpll", 1),
    ClkNode::fdiv(CLK_TOP_UNIVPLL_D2, "univpll_d2", "univpll", 2),
    ClkNode::fdiv(CLK_TOP_UNIVPLL_D3, "univpll_d3", "univpll", 3),
    ClkNode::fdiv(CLK_TOP_UNIVPLL_D5, "univpll_d5", "univpll", 5),
    ClkNode::fdiv(CLK_TOP_UNIVPLL_D7, "univpll_d7", "univpll", 7),
    ClkNode::fdiv(CLK_TOP_UNIVPLL_D26, "univpll_d26", "univpll", 26),
    ClkNode::fdiv(CLK_TOP_UNIVPLL_D52, "univpll_d52", "univpll", 52),
    ClkNode::fdiv(CLK_TOP_UNIVPLL_D108, "univpll_d108", "univpll", 108),
    ClkNode::fdiv(CLK_TOP_USB_PHY48M, "usb_phy48m_ck", "univpll", 26),
    ClkNode::fdiv(CLK_TOP_UNIVPLL1_D2, "univpll1_d2", "univpll_d2", 2),
    ClkNode::fdiv(CLK_TOP_UNIVPLL1_D4, "univpll1_d4", "univpll_d2", 4),
    ClkNode::fdiv(CLK_TOP_UNIVPLL1_D8, "univpll1_d8", "univpll_d2", 8),
    ClkNode::fdiv(CLK_TOP_8BDAC, "8bdac_ck", "univpll_d2", 1),
    ClkNode::fdiv(CLK_TOP_UNIVPLL2_D2, "univpll2_d2", "univpll_d3", 2),
    ClkNode::fdiv(CLK_TOP_UNIVPLL2_D4, "univpll2_d4", "univpll_d3", 4),
    ClkNode::fdiv(CLK_TOP_UNIVPLL2_D8, "univpll2_d8", "univpll_d3", 8),
    ClkNode::fdiv(CLK_TOP_UNIVPLL2_D16, "univpll2_d16", "univpll_d3", 16),
    ClkNode::fdiv(CLK_TOP_UNIVPLL2_D32, "univpll2_d32", "univpll_d3", 32),
    ClkNode::fdiv(CLK_TOP_UNIVPLL3_D2, "univpll3_d2", "univpll_d5", 2),
    ClkNode::fdiv(CLK_TOP_UNIVPLL3_D4, "univpll3_d4", "univpll_d5", 4),
    ClkNode::fdiv(CLK_TOP_UNIVPLL3_D8, "univpll3_d8", "univpll_d5", 8),
    ClkNode::fdiv(CLK_TOP_MSDCPLL, "msdcpll_ck", "msdcpll", 1),
    ClkNode::fdiv(CLK_TOP_MSDCPLL_D2, "msdcpll_d2", "msdcpll", 2),
    ClkNode::fdiv(CLK_TOP_MSDCPLL_D4, "msdcpll_d4", "msdcpll", 4),
    ClkNode::fdiv(CLK_TOP_MSDCPLL_D8, "msdcpll_d8", "msdcpll", 8),
    ClkNode::fdiv(CLK_TOP_MMPLL, "mmpll_ck", "mmpll", 1),
    ClkNode::fdiv(CLK_TOP_MMPLL_D2, "mmpll_d2", "mmpll", 2),
    ClkNode::fdiv(CLK_TOP_DMPLL_D2, "dmpll_d2", "dmpll_ck", 2),
    ClkNode::fdiv(CLK_TOP_DMPLL_D4, "dmpll_d4", "dmpll_ck", 4),
    ClkNode::fmul(CLK_TOP_DMPLL_X2, "dmpll_x2", "dmpll_ck", 2),
    ClkNode::fdiv(CLK_TOP_TVDPLL, "tvdpll_ck", "tvdpll", 1),
    ClkNode::fdiv(CLK_TOP_TVDPLL_D2, "tvdpll_d2", "tvdpll", 2),
    ClkNode::fdiv(CLK_TOP_TVDPLL_D4, "tvdpll_d4", "tvdpll", 4),
    ClkNode::fdiv(CLK_TOP_TVD2PLL, "tvd2pll_ck", "tvd2pll", 1),
    ClkNode::fdiv(CLK_TOP_TVD2PLL_D2, "tvd2pll_d2", "tvd2pll", 2),
    ClkNode::fdiv(CLK_TOP_HADDS2PLL_98M, "hadds2pll_98m", "hadds2pll", 3),
    ClkNode::fdiv(CLK_TOP_HADDS2PLL_294M, "hadds2pll_294m", "hadds2pll", 1),
    ClkNode::fdiv(CLK_TOP_MIPIPLL, "mipipll", "dpi_ck", 1),
    ClkNode::fdiv(CLK_TOP_MIPIPLL_D2, "mipipll_d2", "dpi_ck", 2),
    ClkNode::fdiv(CLK_TOP_MIPIPLL_D4, "mipipll_d4", "dpi_ck", 4),
    ClkNode::fdiv(CLK_TOP_HDMIPLL, "hdmipll_ck", "hdmitx_dig_cts", 1),
    ClkNode::fdiv(CLK_TOP_HDMIPLL_D2, "hdmipll_d2", "hdmitx_dig_cts", 2),
    ClkNode::fdiv(CLK_TOP_HDMIPLL_D3, "hdmipll_d3", "hdmitx_dig_cts", 3),
    ClkNode::fdiv(CLK_TOP_AUD1PLL_98M, "aud1pll_98m_ck", "aud1pll", 3),
    ClkNode::fdiv(CLK_TOP_AUD2PLL_90M, "aud2pll_90m_ck", "aud2pll", 3),
    ClkNode::fdiv(CLK_TOP_AUDPLL, "audpll", "audpll_sel", 1),
    ClkNode::fdiv(CLK_TOP_AUDPLL_D4, "audpll_d4", "audpll_sel", 4),
    ClkNode::fdiv(CLK_TOP_AUDPLL_D8, "audpll_d8", "audpll_sel", 8),
    ClkNode::fdiv(CLK_TOP_AUDPLL_D16, "audpll_d16", "audpll_sel", 16),
    ClkNode::fdiv(CLK_TOP_AUDPLL_D24, "audpll_d24", "audpll_sel", 24),
    ClkNode::fdiv(CLK_TOP_ETHPLL_500M, "ethpll_500m_ck", "ethpll", 1),
    ClkNode::fdiv(CLK_TOP_VDECPLL, "vdecpll_ck", "vdecpll", 1),
    ClkNode::fdiv(CLK_TOP_ARMPLL_1P3G, "armpll_1p3g_ck", "armpll", 1),
    ClkNode::fdiv(CLK_TOP_32K_INTERNAL, "32k_internal", "clk26m", 793),
    ClkNode::fdiv(CLK_TOP_32K_EXTERNAL, "32k_external", "rtc32k", 1),
    ClkNode::fdiv(CLK_TOP_CLK26M_D8, "clk26m_d8", "clk26m", 8),
    ClkNode::fdiv(CLK_TOP_AXISEL_D4, "axisel_d4", "axi_sel", 4),
    // 带门控的复用器
    ClkNode::muxgate_clkf(
        CLK_TOP_AXI_SEL,
        "axi_sel",
        AXI_PARENTS,
        &CFG0,
        bits(0, 2),
        bit(7),
        LOW,
        ClkFlags::empty(),
    ),
    ClkNode::muxgate_clkf(
        CLK_TOP_MEM_SEL,
        "mem_sel",
        MEM_PARENTS,
        &CFG0,
        bit(8),
        bit(15),
        LOW,
        ClkFlags::empty(),
    ),
    ClkNode::muxgate_clkf(
        CLK_TOP_DDRPHYCFG_SEL,
        "ddrphycfg_sel",
        DDRPHYCFG_PARENTS,
        &CFG0,
        bit(16),
        bit(23),
        LOW,
        ClkFlags::empty(),
    ),
    ClkNode::muxgate(CLK_TOP_MM_SEL, "mm_sel", MM_PARENTS, &CFG0, bits(24, 26), bit(31), LOW),
    ClkNode::muxgate(CLK_TOP_PWM_SEL, "pwm_sel", PWM_PARENTS, &CFG1, bits(0, 1), bit(7), LOW),
    ClkNode::muxgate(CLK_TOP_VDEC_SEL, "vdec_sel", VDEC_PARENTS, &CFG1, bits(8, 11), bit(15), LOW),
    ClkNode::muxgate(CLK_TOP_MFG_SEL, "mfg_sel", MFG_PARENTS, &CFG1, bits(16, 18), bit(23), LOW),
    ClkNode::muxgate(
        CLK_TOP_CAMTG_SEL,
        "camtg_sel",
        CAMTG_PARENTS,
        &CFG1,
        bits(24, 26),
        bit(31),
        LOW,
    ),
    ClkNode::muxgate(CLK_TOP_UART_SEL, "uart_sel", UART_PARENTS, &CFG2, bit(0), bit(7), LOW),
    ClkNode::muxgate(CLK_TOP_SPI0_SEL, "spi0_sel", SPI_PARENTS, &CFG2, bits(8, 10), bit(15), LOW),
    ClkNode::muxgate(
        CLK_TOP_USB20_SEL,
        "usb20_sel",
        USB20_PARENTS,
        &CFG2,
        bits(16, 17),
        bit(23),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_MSDC30_0_SEL,
        "msdc30_0_sel",
        MSDC30_PARENTS,
        &CFG2,
        bits(24, 26),
        bit(31),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_MSDC30_1_SEL,
        "msdc30_1_sel",
        MSDC30_PARENTS,
        &CFG3,
        bits(0, 2),
        bit(7),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_MSDC30_2_SEL,
        "msdc30_2_sel",
        MSDC30_PARENTS,
        &CFG3,
        bits(8, 10),
        bit(15),
        LOW,
    ),
    ClkNode::muxgate(CLK_TOP_AUDIO_SEL, "audio_sel", AUDIO_PARENTS, &CFG3, bit(16), bit(23), LOW),
    ClkNode::muxgate(
        CLK_TOP_AUDINTBUS_SEL,
        "aud_intbus_sel",
        AUD_INTBUS_PARENTS,
        &CFG3,
        bits(24, 26),
        bit(31),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_PMICSPI_SEL,
        "pmicspi_sel",
        PMICSPI_PARENTS,
        &CFG4,
        bits(0, 3),
        bit(7),
        LOW,
    ),
    ClkNode::muxgate(CLK_TOP_SCP_SEL, "scp_sel", SCP_PARENTS, &CFG4, bits(8, 9), bit(15), LOW),
    ClkNode::muxgate(CLK_TOP_DPI0_SEL, "dpi0_sel", DPI0_PARENTS, &CFG4, bits(16, 18), bit(23), LOW),
    ClkNode::muxgate(CLK_TOP_DPI1_SEL, "dpi1_sel", DPI1_PARENTS, &CFG4, bits(24, 25), bit(31), LOW),
    ClkNode::muxgate(CLK_TOP_TVE_SEL, "tve_sel", TVE_PARENTS, &CFG5, bits(0, 2), bit(7), LOW),
    ClkNode::muxgate(CLK_TOP_HDMI_SEL, "hdmi_sel", HDMI_PARENTS, &CFG5, bits(8, 9), bit(15), LOW),
    ClkNode::muxgate(CLK_TOP_APLL_SEL, "apll_sel", APLL_PARENTS, &CFG5, bits(16, 18), bit(23), LOW),
    ClkNode::muxgate_clkf(
        CLK_TOP_RTC_SEL,
        "rtc_sel",
        RTC_PARENTS,
        &CFG6,
        bits(0, 1),
        bit(7),
        LOW,
        ClkFlags::empty(),
    ),
    ClkNode::muxgate(
        CLK_TOP_NFI2X_SEL,
        "nfi2x_sel",
        NFI2X_PARENTS,
        &CFG6,
        bits(8, 10),
        bit(15),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_EMMC_HCLK_SEL,
        "emmc_hclk_sel",
        EMMC_HCLK_PARENTS,
        &CFG6,
        bits(24, 25),
        bit(31),
        LOW,
    ),
    ClkNode::muxgate(CLK_TOP_FLASH_SEL, "flash_sel", FLASH_PARENTS, &CFG7, bits(0, 2), bit(7), LOW),
    ClkNode::muxgate(CLK_TOP_DI_SEL, "di_sel", DI_PARENTS, &CFG7, bits(8, 9), bit(15), LOW),
    ClkNode::muxgate(CLK_TOP_NR_SEL, "nr_sel", NR_OSD_PARENTS, &CFG7, bits(16, 18), bit(23), LOW),
    ClkNode::muxgate(CLK_TOP_OSD_SEL, "osd_sel", NR_OSD_PARENTS, &CFG7, bits(24, 26), bit(31), LOW),
    ClkNode::muxgate(
        CLK_TOP_HDMIRX_BIST_SEL,
        "hdmirx_bist_sel",
        HDMIRX_BIST_PARENTS,
        &CFG12,
        bits(0, 2),
        bit(7),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_INTDIR_SEL,
        "intdir_sel",
        INTDIR_PARENTS,
        &CFG12,
        bits(8, 9),
        bit(15),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_ASM_I_SEL,
        "asm_i_sel",
        ASM_PARENTS,
        &CFG12,
        bits(16, 17),
        bit(23),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_ASM_M_SEL,
        "asm_m_sel",
        ASM_PARENTS,
        &CFG12,
        bits(24, 25),
        bit(31),
        LOW,
    ),
    ClkNode::muxgate(CLK_TOP_ASM_H_SEL, "asm_h_sel", ASM_PARENTS, &CFG13, bits(0, 1), bit(7), LOW),
    ClkNode::muxgate(
        CLK_TOP_MS_CARD_SEL,
        "ms_card_sel",
        MS_CARD_PARENTS,
        &CFG13,
        bits(16, 17),
        bit(23),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_ETHIF_SEL,
        "ethif_sel",
        ETHIF_PARENTS,
        &CFG13,
        bits(24, 26),
        bit(31),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_HDMIRX26_24_SEL,
        "hdmirx26_24_sel",
        HDMIRX_PARENTS,
        &CFG14,
        bit(0),
        bit(7),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_MSDC30_3_SEL,
        "msdc30_3_sel",
        MSDC30_PARENTS,
        &CFG14,
        bits(8, 10),
        bit(15),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_CMSYS_SEL,
        "cmsys_sel",
        CMSYS_PARENTS,
        &CFG14,
        bits(16, 19),
        bit(23),
        LOW,
    ),
    ClkNode::muxgate(CLK_TOP_SPI1_SEL, "spi2_sel", SPI_PARENTS, &CFG14, bits(24, 26), bit(31), LOW),
    ClkNode::muxgate(CLK_TOP_SPI2_SEL, "spi1_sel", SPI_PARENTS, &CFG15, bits(0, 2), bit(7), LOW),
    ClkNode::muxgate(
        CLK_TOP_8BDAC_SEL,
        "8bdac_sel",
        DAC8B_PARENTS,
        &CFG15,
        bits(8, 9),
        bit(15),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_AUD2DVD_SEL,
        "aud2dvd_sel",
        AUD2DVD_PARENTS,
        &CFG15,
        bit(16),
        bit(23),
        LOW,
    ),
    // 复用器
    ClkNode::mux(CLK_TOP_PADMCLK_SEL, "padmclk_sel", PADMCLK_PARENTS, CLK_CFG_8, bits(0, 2)),
    ClkNode::mux(CLK_TOP_AUD_MUX1_SEL, "aud_mux1_sel", AUD_MUX_PARENTS, CLK_AUDDIV3, bits(0, 2)),
    ClkNode::mux(CLK_TOP_AUD_MUX2_SEL, "aud_mux2_sel", AUD_MUX_PARENTS, CLK_AUDDIV3, bits(3, 5)),
    ClkNode::mux(CLK_TOP_AUDPLL_MUX_SEL, "audpll_sel", AUD_MUX_PARENTS, CLK_AUDDIV3, bits(6, 8)),
    // 音频 I2S 源选择，与下方门控共用 AUDDIV3
    ClkNode::muxgate(
        CLK_TOP_AUD_K1_SRC_SEL,
        "aud_k1_src_sel",
        AUD_SRC_PARENTS,
        &AUDDIV3,
        bit(15),
        bit(23),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_AUD_K2_SRC_SEL,
        "aud_k2_src_sel",
        AUD_SRC_PARENTS,
        &AUDDIV3,
        bit(16),
        bit(24),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_AUD_K3_SRC_SEL,
        "aud_k3_src_sel",
        AUD_SRC_PARENTS,
        &AUDDIV3,
        bit(17),
        bit(25),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_AUD_K4_SRC_SEL,
        "aud_k4_src_sel",
        AUD_SRC_PARENTS,
        &AUDDIV3,
        bit(18),
        bit(26),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_AUD_K5_SRC_SEL,
        "aud_k5_src_sel",
        AUD_SRC_PARENTS,
        &AUDDIV3,
        bit(19),
        bit(27),
        LOW,
    ),
    ClkNode::muxgate(
        CLK_TOP_AUD_K6_SRC_SEL,
        "aud_k6_src_sel",
        AUD_SRC_PARENTS,
        &AUDDIV3,
        bit(20),
        bit(28),
        LOW,
    ),
    // 门控
    ClkNode::gate(CLK_TOP_AUD_48K_TIMING, "a1sys_hp_ck", "aud_mux1_div", &AUDDIV3, bit(21), LOW),
    ClkNode::gate(CLK_TOP_AUD_44K_TIMING, "a2sys_hp_ck", "aud_mux2_div", &AUDDIV3, bit(22), LOW),
    ClkNode::gate(CLK_TOP_AUD_I2S1_MCLK, "aud_i2s1_mclk", "aud_k1_src_div", &AUDDIV3, bit(23), LOW),
    ClkNode::gate(CLK_TOP_AUD_I2S2_MCLK, "aud_i2s2_mclk", "aud_k2_src_div", &AUDDIV3, bit(24), LOW),
    ClkNode::gate(CLK_TOP_AUD_I2S3_MCLK, "aud_i2s3_mclk", "aud_k3_src_div", &AUDDIV3, bit(25), LOW),
    ClkNode::gate(CLK_TOP_AUD_I2S4_MCLK, "aud_i2s4_mclk", "aud_k4_src_div", &AUDDIV3, bit(26), LOW),
    ClkNode::gate(CLK_TOP_AUD_I2S5_MCLK, "aud_i2s5_mclk", "aud_k5_src_div", &AUDDIV3, bit(27), LOW),
    ClkNode::gate(CLK_TOP_AUD_I2S6_MCLK, "aud_i2s6_mclk", "aud_k6_src_div", &AUDDIV3, bit(28), LOW),
    // 分频
    ClkNode::div(
        CLK_TOP_AUD_EXTCK1_DIV,
        "audio_ext1_ck",
        "aud_ext1",
        CLK_AUDDIV0,
        bits(0, 7),
        DivFlags::empty(),
    ),
    ClkNode::div(
        CLK_TOP_AUD_EXTCK2_DIV,
        "audio_ext2_ck",
        "aud_ext2",
        CLK_AUDDIV0,
        bits(8, 15),
        DivFlags::empty(),
    ),
    ClkNode::div(
        CLK_TOP_AUD_MUX1_DIV,
        "aud_mux1_div",
        "aud_mux1_sel",
        CLK_AUDDIV0,
        bits(16, 23),
        DivFlags::empty(),
    ),
    ClkNode::div(
        CLK_TOP_AUD_MUX2_DIV,
        "aud_mux2_div",
        "aud_mux2_sel",
        CLK_AUDDIV0,
        bits(24, 31),
        DivFlags::empty(),
    ),
    ClkNode::div(
        CLK_TOP_AUD_K1_SRC_DIV,
        "aud_k1_src_div",
        "aud_k1_src_sel",
        CLK_AUDDIV1,
        bits(0, 7),
        DivFlags::empty(),
    ),
    ClkNode::div(
        CLK_TOP_AUD_K2_SRC_DIV,
        "aud_k2_src_div",
        "aud_k2_src_sel",
        CLK_AUDDIV1,
        bits(8, 15),
        DivFlags::empty(),
    ),
    ClkNode::div(
        CLK_TOP_AUD_K3_SRC_DIV,
        "aud_k3_src_div",
        "aud_k3_src_sel",
        CLK_AUDDIV1,
        bits(16, 23),
        DivFlags::empty(),
    ),
    ClkNode::div(
        CLK_TOP_AUD_K4_SRC_DIV,
        "aud_k4_src_div",
        "aud_k4_src_sel",
        CLK_AUDDIV1,
        bits(24, 31),
        DivFlags::empty(),
    ),
    ClkNode::div(
        CLK_TOP_AUD_K5_SRC_DIV,
        "aud_k5_src_div",
        "aud_k5_src_sel",
        CLK_AUDDIV2,
        bits(0, 7),
        DivFlags::empty(),
    ),
    ClkNode::div(
        CLK_TOP_AUD_K6_SRC_DIV,
        "aud_k6_src_div",
        "aud_k6_src_sel",
        CLK_AUDDIV2,
        bits(8, 15),
        DivFlags::empty(),
    ),
];

pub static DESC: CruDesc = CruDesc {
    name: "topckgen",
    clks: CLKS,
    resets: &[],
};

pub fn attach(
    space: Arc<dyn BusSpace>,
    phandle: u32,
    registry: &Arc<CruRegistry>,
) -> Result<Arc<Cru>> {
    super::attach_desc(&DESC, "Top Clock Generator", space, phandle, registry)
}
