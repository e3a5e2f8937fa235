//! 设备树绑定编号
//!
//! 时钟和复位说明符中的编号，与 `mediatek,mt2701-*` 绑定一致。
//! 编号 0 保留不用；`*_NR` 是各控制器时钟表的长度。

// ==================== APMIXEDSYS ====================

pub const CLK_APMIXED_ARMPLL: u32 = 1;
pub const CLK_APMIXED_MAINPLL: u32 = 2;
pub const CLK_APMIXED_UNIVPLL: u32 = 3;
pub const CLK_APMIXED_MMPLL: u32 = 4;
pub const CLK_APMIXED_MSDCPLL: u32 = 5;
pub const CLK_APMIXED_TVDPLL: u32 = 6;
pub const CLK_APMIXED_AUD1PLL: u32 = 7;
pub const CLK_APMIXED_TRGPLL: u32 = 8;
pub const CLK_APMIXED_ETHPLL: u32 = 9;
pub const CLK_APMIXED_VDECPLL: u32 = 10;
pub const CLK_APMIXED_HADDS2PLL: u32 = 11;
pub const CLK_APMIXED_AUD2PLL: u32 = 12;
pub const CLK_APMIXED_TVD2PLL: u32 = 13;
pub const CLK_APMIXED_HDMI_REF: u32 = 14;
pub const CLK_APMIXED_NR: u32 = 15;

// ==================== TOPCKGEN ====================

pub const CLK_TOP_SYSPLL: u32 = 1;
pub const CLK_TOP_SYSPLL_D2: u32 = 2;
pub const CLK_TOP_SYSPLL_D3: u32 = 3;
pub const CLK_TOP_SYSPLL_D5: u32 = 4;
pub const CLK_TOP_SYSPLL_D7: u32 = 5;
pub const CLK_TOP_SYSPLL1_D2: u32 = 6;
pub const CLK_TOP_SYSPLL1_D4: u32 = 7;
pub const CLK_TOP_SYSPLL1_D8: u32 = 8;
pub const CLK_TOP_SYSPLL1_D16: u32 = 9;
pub const CLK_TOP_SYSPLL2_D2: u32 = 10;
pub const CLK_TOP_SYSPLL2_D4: u32 = 11;
pub const CLK_TOP_SYSPLL2_D8: u32 = 12;
pub const CLK_TOP_SYSPLL3_D2: u32 = 13;
pub const CLK_TOP_SYSPLL3_D4: u32 = 14;
pub const CLK_TOP_SYSPLL4_D2: u32 = 15;
pub const CLK_TOP_SYSPLL4_D4: u32 = 16;
pub const CLK_TOP_UNIVPLL: u32 = 17;
pub const CLK_TOP_UNIVPLL_D2: u32 = 18;
pub const CLK_TOP_UNIVPLL_D3: u32 = 19;
pub const CLK_TOP_UNIVPLL_D5: u32 = 20;
pub const CLK_TOP_UNIVPLL_D7: u32 = 21;
pub const CLK_TOP_UNIVPLL_D26: u32 = 22;
pub const CLK_TOP_UNIVPLL_D52: u32 = 23;
pub const CLK_TOP_UNIVPLL_D108: u32 = 24;
pub const CLK_TOP_USB_PHY48M: u32 = 25;
pub const CLK_TOP_UNIVPLL1_D2: u32 = 26;
pub const CLK_TOP_UNIVPLL1_D4: u32 = 27;
pub const CLK_TOP_UNIVPLL1_D8: u32 = 28;
pub const CLK_TOP_UNIVPLL2_D2: u32 = 29;
pub const CLK_TOP_UNIVPLL2_D4: u32 = 30;
pub const CLK_TOP_UNIVPLL2_D8: u32 = 31;
pub const CLK_TOP_UNIVPLL2_D16: u32 = 32;
pub const CLK_TOP_UNIVPLL2_D32: u32 = 33;
pub const CLK_TOP_UNIVPLL3_D2: u32 = 34;
pub const CLK_TOP_UNIVPLL3_D4: u32 = 35;
pub const CLK_TOP_UNIVPLL3_D8: u32 = 36;
pub const CLK_TOP_MSDCPLL: u32 = 37;
pub const CLK_TOP_MSDCPLL_D2: u32 = 38;
pub const CLK_TOP_MSDCPLL_D4: u32 = 39;
pub const CLK_TOP_MSDCPLL_D8: u32 = 40;
pub const CLK_TOP_MMPLL: u32 = 41;
pub const CLK_TOP_MMPLL_D2: u32 = 42;
pub const CLK_TOP_DMPLL: u32 = 43;
pub const CLK_TOP_DMPLL_D2: u32 = 44;
pub const CLK_TOP_DMPLL_D4: u32 = 45;
pub const CLK_TOP_DMPLL_X2: u32 = 46;
pub const CLK_TOP_TVDPLL: u32 = 47;
pub const CLK_TOP_TVDPLL_D2: u32 = 48;
pub const CLK_TOP_TVDPLL_D4: u32 = 49;
pub const CLK_TOP_TVD2PLL: u32 = 50;
pub const CLK_TOP_TVD2PLL_D2: u32 = 51;
pub const CLK_TOP_HADDS2PLL_98M: u32 = 52;
pub const CLK_TOP_HADDS2PLL_294M: u32 = 53;
pub const CLK_TOP_MIPIPLL: u32 = 54;
pub const CLK_TOP_MIPIPLL_D2: u32 = 55;
pub const CLK_TOP_MIPIPLL_D4: u32 = 56;
pub const CLK_TOP_HDMIPLL: u32 = 57;
pub const CLK_TOP_HDMIPLL_D2: u32 = 58;
pub const CLK_TOP_HDMIPLL_D3: u32 = 59;
pub const CLK_TOP_ARMPLL_1P3G: u32 = 60;
pub const CLK_TOP_AUDPLL: u32 = 61;
pub const CLK_TOP_AUDPLL_D4: u32 = 62;
pub const CLK_TOP_AUDPLL_D8: u32 = 63;
pub const CLK_TOP_AUDPLL_D16: u32 = 64;
pub const CLK_TOP_AUDPLL_D24: u32 = 65;
pub const CLK_TOP_AUD1PLL_98M: u32 = 66;
pub const CLK_TOP_AUD2PLL_90M: u32 = 67;
pub const CLK_TOP_HADDS2_FB: u32 = 68;
pub const CLK_TOP_ETHPLL_500M: u32 = 69;
pub const CLK_TOP_VDECPLL: u32 = 70;
pub const CLK_TOP_VENCPLL: u32 = 71;
pub const CLK_TOP_DPI: u32 = 72;
pub const CLK_TOP_HDMI_0_PIX340M: u32 = 73;
pub const CLK_TOP_HDMI_0_DEEP340M: u32 = 74;
pub const CLK_TOP_HDMI_0_PLL340M: u32 = 75;
pub const CLK_TOP_WBG_DIG_416M: u32 = 76;
pub const CLK_TOP_DSI0_LNTC_DSI: u32 = 77;
pub const CLK_TOP_HDMI_SCL_RX: u32 = 78;
pub const CLK_TOP_AUD_EXT1: u32 = 79;
pub const CLK_TOP_AUD_EXT2: u32 = 80;
pub const CLK_TOP_NFI1X_PAD: u32 = 81;
pub const CLK_TOP_8BDAC: u32 = 82;
pub const CLK_TOP_32K_INTERNAL: u32 = 83;
pub const CLK_TOP_32K_EXTERNAL: u32 = 84;
pub const CLK_TOP_CLK26M_D8: u32 = 85;
pub const CLK_TOP_AXISEL_D4: u32 = 86;
pub const CLK_TOP_AXI_SEL: u32 = 87;
pub const CLK_TOP_MEM_SEL: u32 = 88;
pub const CLK_TOP_DDRPHYCFG_SEL: u32 = 89;
pub const CLK_TOP_MM_SEL: u32 = 90;
pub const CLK_TOP_PWM_SEL: u32 = 91;
pub const CLK_TOP_VDEC_SEL: u32 = 92;
pub const CLK_TOP_MFG_SEL: u32 = 93;
pub const CLK_TOP_CAMTG_SEL: u32 = 94;
pub const CLK_TOP_UART_SEL: u32 = 95;
pub const CLK_TOP_SPI0_SEL: u32 = 96;
pub const CLK_TOP_USB20_SEL: u32 = 97;
pub const CLK_TOP_MSDC30_0_SEL: u32 = 98;
pub const CLK_TOP_MSDC30_1_SEL: u32 = 99;
pub const CLK_TOP_MSDC30_2_SEL: u32 = 100;
pub const CLK_TOP_AUDIO_SEL: u32 = 101;
pub const CLK_TOP_AUDINTBUS_SEL: u32 = 102;
pub const CLK_TOP_PMICSPI_SEL: u32 = 103;
pub const CLK_TOP_SCP_SEL: u32 = 104;
pub const CLK_TOP_DPI0_SEL: u32 = 105;
pub const CLK_TOP_DPI1_SEL: u32 = 106;
pub const CLK_TOP_TVE_SEL: u32 = 107;
pub const CLK_TOP_HDMI_SEL: u32 = 108;
pub const CLK_TOP_APLL_SEL: u32 = 109;
pub const CLK_TOP_RTC_SEL: u32 = 110;
pub const CLK_TOP_NFI2X_SEL: u32 = 111;
pub const CLK_TOP_EMMC_HCLK_SEL: u32 = 112;
pub const CLK_TOP_FLASH_SEL: u32 = 113;
pub const CLK_TOP_DI_SEL: u32 = 114;
pub const CLK_TOP_NR_SEL: u32 = 115;
pub const CLK_TOP_OSD_SEL: u32 = 116;
pub const CLK_TOP_HDMIRX_BIST_SEL: u32 = 117;
pub const CLK_TOP_INTDIR_SEL: u32 = 118;
pub const CLK_TOP_ASM_I_SEL: u32 = 119;
pub const CLK_TOP_ASM_M_SEL: u32 = 120;
pub const CLK_TOP_ASM_H_SEL: u32 = 121;
pub const CLK_TOP_MS_CARD_SEL: u32 = 122;
pub const CLK_TOP_ETHIF_SEL: u32 = 123;
pub const CLK_TOP_HDMIRX26_24_SEL: u32 = 124;
pub const CLK_TOP_MSDC30_3_SEL: u32 = 125;
pub const CLK_TOP_CMSYS_SEL: u32 = 126;
pub const CLK_TOP_SPI1_SEL: u32 = 127;
pub const CLK_TOP_SPI2_SEL: u32 = 128;
pub const CLK_TOP_8BDAC_SEL: u32 = 129;
pub const CLK_TOP_AUD2DVD_SEL: u32 = 130;
pub const CLK_TOP_PADMCLK_SEL: u32 = 131;
pub const CLK_TOP_AUD_MUX1_SEL: u32 = 132;
pub const CLK_TOP_AUD_MUX2_SEL: u32 = 133;
pub const CLK_TOP_AUDPLL_MUX_SEL: u32 = 134;
pub const CLK_TOP_AUD_K1_SRC_SEL: u32 = 135;
pub const CLK_TOP_AUD_K2_SRC_SEL: u32 = 136;
pub const CLK_TOP_AUD_K3_SRC_SEL: u32 = 137;
pub const CLK_TOP_AUD_K4_SRC_SEL: u32 = 138;
pub const CLK_TOP_AUD_K5_SRC_SEL: u32 = 139;
pub const CLK_TOP_AUD_K6_SRC_SEL: u32 = 140;
pub const CLK_TOP_AUD_48K_TIMING: u32 = 141;
pub const CLK_TOP_AUD_44K_TIMING: u32 = 142;
pub const CLK_TOP_AUD_I2S1_MCLK: u32 = 143;
pub const CLK_TOP_AUD_I2S2_MCLK: u32 = 144;
pub const CLK_TOP_AUD_I2S3_MCLK: u32 = 145;
pub const CLK_TOP_AUD_I2S4_MCLK: u32 = 146;
pub const CLK_TOP_AUD_I2S5_MCLK: u32 = 147;
pub const CLK_TOP_AUD_I2S6_MCLK: u32 = 148;
pub const CLK_TOP_AUD_EXTCK1_DIV: u32 = 149;
pub const CLK_TOP_AUD_EXTCK2_DIV: u32 = 150;
pub const CLK_TOP_AUD_MUX1_DIV: u32 = 151;
pub const CLK_TOP_AUD_MUX2_DIV: u32 = 152;
pub const CLK_TOP_AUD_K1_SRC_DIV: u32 = 153;
pub const CLK_TOP_AUD_K2_SRC_DIV: u32 = 154;
pub const CLK_TOP_AUD_K3_SRC_DIV: u32 = 155;
pub const CLK_TOP_AUD_K4_SRC_DIV: u32 = 156;
pub const CLK_TOP_AUD_K5_SRC_DIV: u32 = 157;
pub const CLK_TOP_AUD_K6_SRC_DIV: u32 = 158;
pub const CLK_TOP_NR: u32 = 159;

// ==================== INFRACFG ====================

pub const CLK_INFRA_DBG: u32 = 1;
pub const CLK_INFRA_SMI: u32 = 2;
pub const CLK_INFRA_QAXI_CM4: u32 = 3;
pub const CLK_INFRA_AUD_SPLIN_B: u32 = 4;
pub const CLK_INFRA_AUDIO: u32 = 5;
pub const CLK_INFRA_EFUSE: u32 = 6;
pub const CLK_INFRA_L2C_SRAM: u32 = 7;
pub const CLK_INFRA_M4U: u32 = 8;
pub const CLK_INFRA_CONNMCU: u32 = 9;
pub const CLK_INFRA_TRNG: u32 = 10;
pub const CLK_INFRA_RAMBUFIF: u32 = 11;
pub const CLK_INFRA_CPUM: u32 = 12;
pub const CLK_INFRA_KP: u32 = 13;
pub const CLK_INFRA_CEC: u32 = 14;
pub const CLK_INFRA_IRRX: u32 = 15;
pub const CLK_INFRA_PMICSPI: u32 = 16;
pub const CLK_INFRA_PMICWRAP: u32 = 17;
pub const CLK_INFRA_DDCCI: u32 = 18;
pub const CLK_INFRA_CLK_13M: u32 = 19;
pub const CLK_INFRA_CPUSEL: u32 = 20;
pub const CLK_INFRA_NR: u32 = 21;

// ==================== HIFSYS ====================

pub const CLK_HIFSYS_USB0PHY: u32 = 1;
pub const CLK_HIFSYS_USB1PHY: u32 = 2;
pub const CLK_HIFSYS_PCIE0: u32 = 3;
pub const CLK_HIFSYS_PCIE1: u32 = 4;
pub const CLK_HIFSYS_PCIE2: u32 = 5;
pub const CLK_HIFSYS_NR: u32 = 6;

// ==================== 复位 ====================
//
// 复位编号即 `寄存器序号 * 32 + 位`。

pub const RST_INFRA_EMI_REG_RST: u32 = 0;
pub const RST_INFRA_DRAMC0_A0_RST: u32 = 1;
pub const RST_INFRA_FHCTL_RST: u32 = 2;
pub const RST_INFRA_APCIRQ_EINT_RST: u32 = 3;
pub const RST_INFRA_APXGPT_RST: u32 = 4;
pub const RST_INFRA_SCPSYS_RST: u32 = 5;
pub const RST_INFRA_KP_RST: u32 = 6;
pub const RST_INFRA_PMIC_WRAP_RST: u32 = 7;
pub const RST_INFRA_MIPI_RST: u32 = 8;
pub const RST_INFRA_IRRX_RST: u32 = 9;
pub const RST_INFRA_CEC_RST: u32 = 10;
pub const RST_INFRA_EMI_RST: u32 = 32;
pub const RST_INFRA_DRAMC0_RST: u32 = 34;
pub const RST_INFRA_TRNG_RST: u32 = 37;
pub const RST_INFRA_SYSIRQ_RST: u32 = 38;

pub const RST_PERI_UART0_SW_RST: u32 = 0;
pub const RST_PERI_UART1_SW_RST: u32 = 1;
pub const RST_PERI_UART2_SW_RST: u32 = 2;
pub const RST_PERI_UART3_SW_RST: u32 = 3;
pub const RST_PERI_GCPU_SW_RST: u32 = 5;
pub const RST_PERI_BTIF_SW_RST: u32 = 6;
pub const RST_PERI_PWM_SW_RST: u32 = 8;
pub const RST_PERI_AUXADC_SW_RST: u32 = 10;
pub const RST_PERI_DMA_SW_RST: u32 = 11;
pub const RST_PERI_NFI_SW_RST: u32 = 14;
pub const RST_PERI_NLI_SW_RST: u32 = 15;
pub const RST_PERI_THERM_SW_RST: u32 = 16;
pub const RST_PERI_MSDC2_SW_RST: u32 = 17;
pub const RST_PERI_MSDC0_SW_RST: u32 = 19;
pub const RST_PERI_MSDC1_SW_RST: u32 = 20;
pub const RST_PERI_I2C0_SW_RST: u32 = 22;
pub const RST_PERI_I2C1_SW_RST: u32 = 23;
pub const RST_PERI_I2C2_SW_RST: u32 = 24;
pub const RST_PERI_I2C3_SW_RST: u32 = 25;
pub const RST_PERI_USB_SW_RST: u32 = 28;
pub const RST_PERI_ETH_SW_RST: u32 = 29;
pub const RST_PERI_SPI0_SW_RST: u32 = 33;

pub const RST_HIFSYS_UHOST0_RST: u32 = 3;
pub const RST_HIFSYS_UHOST1_RST: u32 = 4;
pub const RST_HIFSYS_UPHY0_RST: u32 = 21;
pub const RST_HIFSYS_UPHY1_RST: u32 = 22;
pub const RST_HIFSYS_PCIE0_RST: u32 = 24;
pub const RST_HIFSYS_PCIE1_RST: u32 = 25;
pub const RST_HIFSYS_PCIE2_RST: u32 = 26;
