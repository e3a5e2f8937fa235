#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod clk;
pub mod cru;
mod delay;
pub mod regmap;
pub mod registry;
pub mod reset;
pub mod soc;

#[cfg(test)]
mod testing;

pub use clk::{ClkKind, ClkNode, ClkOps};
pub use clk_if::{
    BusSpace, Clk, ClkDomain, ClkError, ClkFlags, FixedClock, Mmio, MmioSpace, ResetController,
    ResetHandle, Result,
};
pub use cru::{ClkSummary, Cru, CruDesc};
pub use registry::CruRegistry;
pub use reset::ResetLine;
