use super::ClkOps;
use crate::cru::Cru;

/// 固定频率时钟
pub struct Fixed {
    pub parent: &'static str,
    pub rate: u32,
}

impl ClkOps for Fixed {
    fn get_rate(&self, _cru: &Cru) -> Option<u32> {
        Some(self.rate)
    }

    fn get_parent(&self, _cru: &Cru) -> Option<&'static str> {
        Some(self.parent)
    }
}
