//! SoC 时钟/复位表

pub mod mt2701;
