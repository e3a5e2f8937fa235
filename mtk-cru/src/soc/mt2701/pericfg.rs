//! PERICFG: 外设复位
//!
//! 时钟表为空，只提供复位线。

use alloc::sync::Arc;

use clk_if::{BusSpace, Result};

use super::bindings::*;
use crate::{
    cru::{Cru, CruDesc},
    registry::CruRegistry,
    reset::ResetLine,
};

const PERI_GLOBALCON_RST0: u32 = 0x000;
const PERI_GLOBALCON_RST1: u32 = 0x004;

pub static RESETS: &[ResetLine] = &[
    ResetLine::new(RST_PERI_UART0_SW_RST, PERI_GLOBALCON_RST0, 0),
    ResetLine::new(RST_PERI_UART1_SW_RST, PERI_GLOBALCON_RST0, 1),
    ResetLine::new(RST_PERI_UART2_SW_RST, PERI_GLOBALCON_RST0, 2),
    ResetLine::new(RST_PERI_UART3_SW_RST, PERI_GLOBALCON_RST0, 3),
    ResetLine::new(RST_PERI_GCPU_SW_RST, PERI_GLOBALCON_RST0, 5),
    ResetLine::new(RST_PERI_BTIF_SW_RST, PERI_GLOBALCON_RST0, 6),
    ResetLine::new(RST_PERI_PWM_SW_RST, PERI_GLOBALCON_RST0, 8),
    ResetLine::new(RST_PERI_AUXADC_SW_RST, PERI_GLOBALCON_RST0, 10),
    ResetLine::new(RST_PERI_DMA_SW_RST, PERI_GLOBALCON_RST0, 11),
    ResetLine::new(RST_PERI_NFI_SW_RST, PERI_GLOBALCON_RST0, 14),
    ResetLine::new(RST_PERI_NLI_SW_RST, PERI_GLOBALCON_RST0, 15),
    ResetLine::new(RST_PERI_THERM_SW_RST, PERI_GLOBALCON_RST0, 16),
    ResetLine::new(RST_PERI_MSDC2_SW_RST, PERI_GLOBALCON_RST0, 17),
    ResetLine::new(RST_PERI_MSDC0_SW_RST, PERI_GLOBALCON_RST0, 19),
    ResetLine::new(RST_PERI_MSDC1_SW_RST, PERI_GLOBALCON_RST0, 20),
    ResetLine::new(RST_PERI_I2C0_SW_RST, PERI_GLOBALCON_RST0, 22),
    ResetLine::new(RST_PERI_I2C1_SW_RST, PERI_GLOBALCON_RST0, 23),
    ResetLine::new(RST_PERI_I2C2_SW_RST, PERI_GLOBALCON_RST0, 24),
    ResetLine::new(RST_PERI_I2C3_SW_RST, PERI_GLOBALCON_RST0, 25),
    ResetLine::new(RST_PERI_USB_SW_RST, PERI_GLOBALCON_RST0, 28),
    ResetLine::new(RST_PERI_ETH_SW_RST, PERI_GLOBALCON_RST0, 29),
    ResetLine::new(RST_PERI_SPI0_SW_RST, PERI_GLOBALCON_RST1, 1),
];

pub static DESC: CruDesc = CruDesc {
    name: "pericfg",
    clks: &[],
    resets: RESETS,
};

pub fn attach(
    space: Arc<dyn BusSpace>,
    phandle: u32,
    registry: &Arc<CruRegistry>,
) -> Result<Arc<Cru>> {
    super::attach_desc(&DESC, "MT2701 Peripheral Controller", space, phandle, registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spi0_in_second_register() {
        let spi0 = RESETS
            .iter()
            .find(|r| r.id == RST_PERI_SPI0_SW_RST)
            .unwrap();
        assert_eq!(spi0.reg, PERI_GLOBALCON_RST1);
        assert_eq!(spi0.mask, 0x2);
    }
}
