/// 时钟与复位操作的错误类型
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClkError {
    #[error("Not found")]
    NotFound,
    #[error("Invalid argument")]
    InvalidArgument,
    #[error("Operation not supported")]
    NotSupported,
    /// 没有父时钟，或父时钟频率为 0
    #[error("Not configured")]
    NotConfigured,
    /// 分频值超出寄存器字段范围
    #[error("Value out of range")]
    OutOfRange,
    /// 寄存器窗口不可用
    #[error("Device error")]
    Device,
}

pub type Result<T = ()> = core::result::Result<T, ClkError>;
