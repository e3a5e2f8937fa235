//! MT2701 / MT7623 时钟与复位控制器
//!
//! | 控制器      | 内容                              |
//! |-------------|-----------------------------------|
//! | APMIXEDSYS  | PLL                               |
//! | TOPCKGEN    | 固定分频、复用器、门控、音频分频  |
//! | INFRACFG    | 基础设施门控和复位                |
//! | PERICFG     | 外设复位                          |
//! | HIFSYS      | USB/PCIe 门控和复位               |
//!
//! 板级晶振 `clk26m` 和 `rtc32k` 不属于任何控制器，需要在 attach 前注册到注册表。

pub mod apmixedsys;
pub mod bindings;
pub mod hifsys;
pub mod infracfg;
pub mod pericfg;
pub mod topckgen;

use alloc::sync::Arc;

use clk_if::{BusSpace, Result};

use crate::{
    cru::{Cru, CruDesc},
    registry::CruRegistry,
};

/// attach 一个控制器并打印时钟表
fn attach_desc(
    desc: &CruDesc,
    what: &str,
    space: Arc<dyn BusSpace>,
    phandle: u32,
    registry: &Arc<CruRegistry>,
) -> Result<Arc<Cru>> {
    let cru = Cru::attach(desc, phandle, space, registry)?;
    log::info!("CRU@{}: {}", cru.name(), what);
    cru.print();
    Ok(cru)
}
