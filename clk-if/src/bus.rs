//! 32 位寄存器总线访问

use core::ptr::NonNull;

use mbarrier::wmb;

pub type Mmio = NonNull<u8>;

/// 已映射的寄存器窗口
///
/// 偏移量以字节为单位，访问宽度固定为 32 位。
pub trait BusSpace: Send + Sync {
    fn read_4(&self, offset: u32) -> u32;
    fn write_4(&self, offset: u32, val: u32);
    /// 窗口大小 (字节)
    fn size(&self) -> usize;
}

/// 基于裸指针的 MMIO 窗口
#[derive(Clone, Copy)]
pub struct MmioSpace {
    base: usize,
    size: usize,
}

unsafe impl Send for MmioSpace {}
unsafe impl Sync for MmioSpace {}

impl MmioSpace {
    /// # Safety
    ///
    /// 调用者必须确保 `base` 指向至少 `size` 字节的有效寄存器映射区域
    pub unsafe fn new(base: Mmio, size: usize) -> Self {
        Self {
            base: base.as_ptr() as usize,
            size,
        }
    }
}

impl BusSpace for MmioSpace {
    fn read_4(&self, offset: u32) -> u32 {
        let addr = (self.base + offset as usize) as *const u32;
        unsafe { addr.read_volatile() }
    }

    fn write_4(&self, offset: u32, val: u32) {
        let addr = (self.base + offset as usize) as *mut u32;
        unsafe {
            addr.write_volatile(val);
        }
        wmb();
    }

    fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mmio_space_volatile_access() {
        let mut backing = [0u32; 4];
        let base = NonNull::new(backing.as_mut_ptr() as *mut u8).unwrap();
        let space = unsafe { MmioSpace::new(base, 16) };

        space.write_4(0x8, 0xdead_beef);
        assert_eq!(space.read_4(0x8), 0xdead_beef);
        assert_eq!(space.read_4(0x0), 0);
        assert_eq!(space.size(), 16);
        assert_eq!(backing[2], 0xdead_beef);
    }
}
