#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod bus;
pub mod clk;
pub mod err;
pub mod fixed;
pub mod reset;

pub use bus::{BusSpace, Mmio, MmioSpace};
pub use clk::{Clk, ClkDomain, ClkFlags};
pub use err::{ClkError, Result};
pub use fixed::FixedClock;
pub use reset::{ResetController, ResetHandle, decode_cell};
