//! 寄存器访问与寄存器组约定
//!
//! 每种时钟类型用一组按角色编号的寄存器偏移描述硬件:
//!
//! ```text
//! 门控:  [SET, CLR, STA]            SET == CLR 表示共享寄存器，需要读-改-写
//! PLL:   [CON, PCW, PD, PWR, TUNER] TUNER == 0 表示没有 tuner 寄存器
//! ```

use alloc::sync::Arc;

use clk_if::BusSpace;
use num_enum::IntoPrimitive;
use tock_registers::{LocalRegisterCopy, fields::Field};

/// 寄存器中一段连续的位域，`mask` 为 0 表示字段不存在
pub type RegField = Field<u32, ()>;

/// `__BIT(n)`
pub const fn bit(n: u32) -> u32 {
    1 << n
}

/// `__BITS(lo, hi)`，闭区间
pub const fn bits(lo: u32, hi: u32) -> u32 {
    (((1u64 << (hi - lo + 1)) - 1) << lo) as u32
}

/// 由移位前的掩码构造位域
pub const fn mask_field(mask: u32) -> RegField {
    if mask == 0 {
        return RegField::new(0, 0);
    }
    let shift = mask.trailing_zeros();
    RegField::new(mask >> shift, shift as usize)
}

/// 字段在寄存器中的掩码 (已移位)
pub fn field_mask(field: RegField) -> u32 {
    field.mask << field.shift
}

pub fn field_get(val: u32, field: RegField) -> u32 {
    LocalRegisterCopy::<u32, ()>::new(val).read(field)
}

pub fn field_set(val: u32, field: RegField, v: u32) -> u32 {
    let mut reg = LocalRegisterCopy::<u32, ()>::new(val);
    reg.modify(field.val(v));
    reg.get()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(usize)]
pub enum GateReg {
    Set,
    Clr,
    Sta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(usize)]
pub enum PllReg {
    Con,
    Pcw,
    Pd,
    Pwr,
    Tuner,
}

/// 按角色索引的寄存器偏移表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegGroup<const N: usize>([u32; N]);

pub type GateRegs = RegGroup<3>;
pub type PllRegs = RegGroup<5>;

impl<const N: usize> RegGroup<N> {
    pub const fn new(regs: [u32; N]) -> Self {
        Self(regs)
    }

    pub fn get(&self, role: impl Into<usize>) -> u32 {
        self.0[role.into()]
    }

    pub fn offsets(&self) -> &[u32] {
        &self.0
    }
}

impl GateRegs {
    pub const fn gate(set: u32, clr: u32, sta: u32) -> Self {
        Self([set, clr, sta])
    }

    /// 置位、清除、状态共用同一个寄存器
    pub const fn shared(reg: u32) -> Self {
        Self([reg, reg, reg])
    }

    pub fn is_shared(&self) -> bool {
        self.get(GateReg::Set) == self.get(GateReg::Clr)
    }
}

impl PllRegs {
    pub const fn pll(con: u32, pcw: u32, pd: u32, pwr: u32) -> Self {
        Self([con, pcw, pd, pwr, 0])
    }

    pub const fn with_tuner(self, tuner: u32) -> Self {
        let mut regs = self.0;
        regs[4] = tuner;
        Self(regs)
    }

    pub fn tuner(&self) -> Option<u32> {
        match self.get(PllReg::Tuner) {
            0 => None,
            reg => Some(reg),
        }
    }
}

/// 控制器寄存器窗口
///
/// 读-改-写序列本身不加锁，调用者需要持有控制器锁。
#[derive(Clone)]
pub struct Regmap(Arc<dyn BusSpace>);

impl Regmap {
    pub fn new(space: Arc<dyn BusSpace>) -> Self {
        Self(space)
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// 偏移处的 32 位寄存器是否落在窗口内
    pub fn contains(&self, offset: u32) -> bool {
        (offset as usize).checked_add(4).is_some_and(|end| end <= self.size())
    }

    pub fn reg_read(&self, offset: u32) -> u32 {
        self.0.read_4(offset)
    }

    pub fn reg_write(&self, offset: u32, val: u32) {
        self.0.write_4(offset, val);
    }

    pub fn update_bits(&self, offset: u32, mask: u32, val: u32) {
        let current = self.reg_read(offset);
        let new = (current & !mask) | (val & mask);
        self.reg_write(offset, new);
    }

    pub fn set_bits(&self, offset: u32, mask: u32) {
        self.update_bits(offset, mask, mask);
    }

    pub fn clear_bits(&self, offset: u32, mask: u32) {
        self.update_bits(offset, mask, 0);
    }

    pub fn read_field(&self, offset: u32, field: RegField) -> u32 {
        field_get(self.reg_read(offset), field)
    }

    pub fn modify_field(&self, offset: u32, field: RegField, val: u32) {
        let current = self.reg_read(offset);
        self.reg_write(offset, field_set(current, field, val));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RamSpace;

    #[test]
    fn test_bits() {
        assert_eq!(bit(7), 0x80);
        assert_eq!(bits(0, 2), 0x7);
        assert_eq!(bits(24, 26), 0x0700_0000);
        assert_eq!(bits(26, 31), 0xfc00_0000);
        assert_eq!(bits(0, 31), 0xffff_ffff);
    }

    #[test]
    fn test_mask_field() {
        let f = mask_field(bits(4, 6));
        assert_eq!(f.shift, 4);
        assert_eq!(f.mask, 0x7);
        assert_eq!(field_mask(f), 0x70);

        let none = mask_field(0);
        assert_eq!(none.mask, 0);
        assert_eq!(field_mask(none), 0);
    }

    #[test]
    fn test_field_get_set() {
        let f = mask_field(bits(8, 10));
        assert_eq!(field_get(0x0000_0500, f), 5);
        assert_eq!(field_set(0xffff_ffff, f, 2), 0xffff_faff);
        // 超出字段宽度的值被截断
        assert_eq!(field_set(0, f, 0xf), 0x0000_0700);
    }

    #[test]
    fn test_reg_group_roles() {
        let g = GateRegs::gate(0x44, 0x48, 0x40);
        assert_eq!(g.get(GateReg::Set), 0x44);
        assert_eq!(g.get(GateReg::Clr), 0x48);
        assert_eq!(g.get(GateReg::Sta), 0x40);
        assert!(!g.is_shared());
        assert!(GateRegs::shared(0x30).is_shared());

        let p = PllRegs::pll(0x210, 0x214, 0x210, 0x21c);
        assert_eq!(p.get(PllReg::Pd), 0x210);
        assert_eq!(p.tuner(), None);
        assert_eq!(p.with_tuner(0x218).tuner(), Some(0x218));
    }

    #[test]
    fn test_update_bits() {
        let ram = RamSpace::new(0x10);
        let map = Regmap::new(ram.clone());
        ram.poke(0x4, 0xf0f0);

        map.update_bits(0x4, 0xff, 0x0a);
        assert_eq!(ram.peek(0x4), 0xf00a);
        map.set_bits(0x4, 0x1_0000);
        assert_eq!(ram.peek(0x4), 0x1_f00a);
        map.clear_bits(0x4, 0xf000);
        assert_eq!(ram.peek(0x4), 0x1_000a);
        map.modify_field(0x4, mask_field(bits(4, 7)), 0x3);
        assert_eq!(map.read_field(0x4, mask_field(bits(4, 7))), 0x3);
    }

    #[test]
    fn test_contains() {
        let map = Regmap::new(RamSpace::new(0x100));
        assert!(map.contains(0x0));
        assert!(map.contains(0xfc));
        assert!(!map.contains(0xfd));
        assert!(!map.contains(0x100));
        assert!(!map.contains(u32::MAX));
    }
}
