use alloc::{sync::Arc, vec, vec::Vec};

use clk_if::BusSpace;
use spin::Mutex;

/// 内存模拟的寄存器窗口，记录所有写操作
pub struct RamSpace {
    regs: Mutex<Vec<u32>>,
    journal: Mutex<Vec<(u32, u32)>>,
    size: usize,
}

impl RamSpace {
    pub fn new(size: usize) -> Arc<Self> {
        Arc::new(Self {
            regs: Mutex::new(vec![0; size.div_ceil(4)]),
            journal: Mutex::new(Vec::new()),
            size,
        })
    }

    pub fn peek(&self, offset: u32) -> u32 {
        self.regs.lock()[offset as usize / 4]
    }

    /// 直接修改寄存器，不记录日志
    pub fn poke(&self, offset: u32, val: u32) {
        self.regs.lock()[offset as usize / 4] = val;
    }

    pub fn writes(&self) -> Vec<(u32, u32)> {
        self.journal.lock().clone()
    }

    pub fn writes_to(&self, offset: u32) -> Vec<u32> {
        self.journal
            .lock()
            .iter()
            .filter(|(off, _)| *off == offset)
            .map(|(_, val)| *val)
            .collect()
    }

    pub fn clear_journal(&self) {
        self.journal.lock().clear();
    }
}

impl BusSpace for RamSpace {
    fn read_4(&self, offset: u32) -> u32 {
        self.peek(offset)
    }

    fn write_4(&self, offset: u32, val: u32) {
        self.poke(offset, val);
        self.journal.lock().push((offset, val));
    }

    fn size(&self) -> usize {
        self.size
    }
}
