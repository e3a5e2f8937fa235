//! 复位线
//!
//! 每条复位线对应寄存器中的一位，置位为断言复位，清零为解除复位。

use clk_if::{ClkError, ResetController, ResetHandle, Result, decode_cell};

use crate::cru::Cru;

/// 复位表中的一项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetLine {
    pub id: u32,
    pub reg: u32,
    pub mask: u32,
}

impl ResetLine {
    pub const fn new(id: u32, reg: u32, bit: u32) -> Self {
        Self {
            id,
            reg,
            mask: 1 << bit,
        }
    }
}

impl Cru {
    fn line(&self, handle: &ResetHandle) -> Result<ResetLine> {
        self.reset_line(handle.id()).ok_or(ClkError::NotFound)
    }
}

impl ResetController for Cru {
    fn acquire(&self, cell: &[u8]) -> Result<ResetHandle> {
        let id = decode_cell(cell)?;
        let line = self.reset_line(id).ok_or(ClkError::NotFound)?;
        Ok(ResetHandle::new(line.id))
    }

    fn assert(&self, handle: &ResetHandle) -> Result {
        let line = self.line(handle)?;
        log::debug!(
            "CRU@{}: Asserting reset {} (reg={:#x}, mask={:#x})",
            self.name(),
            line.id,
            line.reg,
            line.mask
        );

        let _guard = self.lock();
        self.regmap().set_bits(line.reg, line.mask);
        Ok(())
    }

    fn deassert(&self, handle: &ResetHandle) -> Result {
        let line = self.line(handle)?;
        log::debug!(
            "CRU@{}: Deasserting reset {} (reg={:#x}, mask={:#x})",
            self.name(),
            line.id,
            line.reg,
            line.mask
        );

        let _guard = self.lock();
        self.regmap().clear_bits(line.reg, line.mask);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use super::*;
    use crate::{
        cru::CruDesc,
        registry::CruRegistry,
        testing::RamSpace,
    };

    static RESETS: &[ResetLine] = &[
        ResetLine::new(0, 0x30, 0),
        ResetLine::new(3, 0x30, 3),
        ResetLine::new(32, 0x34, 0),
    ];

    static DESC: CruDesc = CruDesc {
        name: "rstctl",
        clks: &[],
        resets: RESETS,
    };

    fn setup() -> (Arc<RamSpace>, Arc<Cru>) {
        let ram = RamSpace::new(0x40);
        let registry = Arc::new(CruRegistry::new());
        let cru = Cru::attach(&DESC, 1, ram.clone(), &registry).unwrap();
        (ram, cru)
    }

    #[test]
    fn test_reset_line_mask() {
        assert_eq!(ResetLine::new(5, 0x0, 5).mask, 0x20);
        assert_eq!(ResetLine::new(33, 0x4, 1).mask, 0x2);
    }

    #[test]
    fn test_acquire_bounds() {
        let (_, cru) = setup();
        assert_eq!(cru.acquire(&[0, 0, 0, 3]).unwrap().id(), 3);
        // 超出表范围
        assert_eq!(cru.acquire(&[0, 0, 0, 33]), Err(ClkError::NotFound));
        // 表内未使用的槽位
        assert_eq!(cru.acquire(&[0, 0, 0, 1]), Err(ClkError::NotFound));
        // cell 长度错误
        assert_eq!(cru.acquire(&[0, 3]), Err(ClkError::InvalidArgument));
    }

    #[test]
    fn test_assert_deassert_preserves_other_bits() {
        let (ram, cru) = setup();
        ram.poke(0x30, 0x8000_0001);

        let rst = cru.acquire(&[0, 0, 0, 3]).unwrap();
        cru.assert(&rst).unwrap();
        assert_eq!(ram.peek(0x30), 0x8000_0009);

        cru.deassert(&rst).unwrap();
        assert_eq!(ram.peek(0x30), 0x8000_0001);

        cru.release(rst);
    }

    #[test]
    fn test_assert_second_register() {
        let (ram, cru) = setup();
        let rst = cru.acquire(&[0, 0, 0, 32]).unwrap();
        cru.assert(&rst).unwrap();
        assert_eq!(ram.writes(), [(0x34, 0x1)]);
    }

    #[test]
    fn test_unknown_handle() {
        let (_, cru) = setup();
        assert_eq!(cru.assert(&ResetHandle::new(2)), Err(ClkError::NotFound));
    }
}
