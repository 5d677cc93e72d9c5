use std::alloc::{self, Layout};

use crate::error::{ContainerError, Result};

/// 在堆上为一个节点分配内存并写入节点内容
///
/// # 返回值
/// - `Ok(ptr)`: 指向新节点的原始指针，之后必须且只能通过 [`release`] 释放一次
/// - `Err(ContainerError::AllocationFailed)`: 全局分配器无法满足请求
///
/// 使用与 `Box` 相同的布局，因此返回的指针也可以交给 `Box::from_raw`。
pub(crate) fn try_allocate<N>(node: N) -> Result<*mut N> {
    let layout = Layout::new::<N>();
    if layout.size() == 0 {
        return Ok(Box::into_raw(Box::new(node)));
    }

    let raw = unsafe { alloc::alloc(layout) } as *mut N;
    if raw.is_null() {
        log::error!("节点分配失败: {} 字节", layout.size());
        return Err(ContainerError::AllocationFailed);
    }

    unsafe {
        raw.write(node);
    }
    Ok(raw)
}

/// 不可失败版本，分配失败时交给全局的分配错误处理（与 `Box::new` 行为一致）
pub(crate) fn allocate<N>(node: N) -> *mut N {
    match try_allocate(node) {
        Ok(raw) => raw,
        Err(_) => alloc::handle_alloc_error(Layout::new::<N>()),
    }
}

/// 取回节点所有权并释放其内存
///
/// # Safety
/// `raw` 必须来自 [`try_allocate`] / [`allocate`]，且尚未被释放。
pub(crate) unsafe fn release<N>(raw: *mut N) -> N {
    unsafe { *Box::from_raw(raw) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_release() {
        let raw = allocate((7u32, String::from("seven")));
        let (n, s) = unsafe { release(raw) };
        assert_eq!(n, 7);
        assert_eq!(s, "seven");
    }

    #[test]
    fn test_zero_sized_node() {
        let raw = try_allocate(()).unwrap();
        assert!(!raw.is_null());
        unsafe { release(raw) };
    }
}
