use thiserror::Error;

/// 容器操作的错误类型，三种容器共用
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    #[error("容器为空")]
    Empty,
    #[error("位置超出范围: 位置 {pos}，当前长度 {len}")]
    OutOfRange { pos: usize, len: usize },
    #[error("节点内存分配失败")]
    AllocationFailed,
}

pub type Result<T> = std::result::Result<T, ContainerError>;

impl ContainerError {
    // 拒绝操作时统一在这里记录，调用方只管返回
    pub(crate) fn empty(op: &str) -> Self {
        log::trace!("{op}: 容器为空，操作被拒绝");
        ContainerError::Empty
    }

    pub(crate) fn out_of_range(op: &str, pos: usize, len: usize) -> Self {
        log::trace!("{op}: 位置 {pos} 超出范围 (长度 {len})");
        ContainerError::OutOfRange { pos, len }
    }
}
