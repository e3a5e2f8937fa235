use crate::err::{ClkError, Result};

/// 复位线句柄，内容是设备树中的复位编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResetHandle(u32);

impl ResetHandle {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

/// 复位控制器回调表
pub trait ResetController: Send + Sync {
    /// 解析设备树复位说明符并返回句柄
    fn acquire(&self, cell: &[u8]) -> Result<ResetHandle>;

    fn release(&self, _handle: ResetHandle) {}

    fn assert(&self, handle: &ResetHandle) -> Result;

    fn deassert(&self, handle: &ResetHandle) -> Result;
}

/// 解码单个大端 32 位设备树 cell
pub fn decode_cell(data: &[u8]) -> Result<u32> {
    let bytes: [u8; 4] = data.try_into().map_err(|_| ClkError::InvalidArgument)?;
    Ok(u32::from_be_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_cell_big_endian() {
        assert_eq!(decode_cell(&[0, 0, 0, 3]), Ok(3));
        assert_eq!(decode_cell(&[0x00, 0x00, 0x01, 0x02]), Ok(0x102));
    }

    #[test]
    fn test_decode_cell_bad_length() {
        assert_eq!(decode_cell(&[]), Err(ClkError::InvalidArgument));
        assert_eq!(decode_cell(&[0, 0, 3]), Err(ClkError::InvalidArgument));
        assert_eq!(
            decode_cell(&[0, 0, 0, 3, 0, 0, 0, 4]),
            Err(ClkError::InvalidArgument)
        );
    }
}
