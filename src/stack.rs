pub mod stack {
    use std::fmt;
    use std::iter::FusedIterator;

    use crate::error::{ContainerError, Result};
    use crate::node;
    use crate::render;

    // Option 表示链尾，Box 表示对下一个节点的所有权
    type Link<T> = Option<Box<Node<T>>>;

    struct Node<T> {
        data: T,
        next: Link<T>,
    }

    /// 后进先出栈，单向链表实现，只持有栈顶
    pub struct Stack<T> {
        top: Link<T>,
        len: usize,
    }

    impl<T> Stack<T> {
        pub fn new() -> Self {
            Stack { top: None, len: 0 }
        }

        /// 构造只包含一个元素的栈
        pub fn with_value(data: T) -> Self {
            let mut stack = Self::new();
            stack.push(data);
            stack
        }

        /// 由有序序列构造栈，栈顶到栈底的顺序与序列顺序一致
        ///
        /// 相当于把序列倒序依次压栈：`from_sequence([1, 2, 3])` 的栈顶是 `1`。
        pub fn from_sequence<I: IntoIterator<Item = T>>(items: I) -> Self {
            let mut stack = Self::new();
            let mut link = &mut stack.top;
            for data in items {
                let node = link.insert(Box::new(Node { data, next: None }));
                link = &mut node.next;
                stack.len += 1;
            }
            stack
        }

        pub fn len(&self) -> usize {
            self.len
        }

        pub fn is_empty(&self) -> bool {
            self.len == 0
        }

        /// 压栈，O(1)
        pub fn push(&mut self, data: T) {
            let node = node::allocate(Node {
                data,
                next: self.top.take(),
            });
            self.top = Some(unsafe { Box::from_raw(node) });
            self.len += 1;
        }

        /// 与 [`Self::push`] 相同，但分配失败时返回 `ContainerError::AllocationFailed`，栈保持不变
        pub fn try_push(&mut self, data: T) -> Result<()> {
            let node = node::try_allocate(Node { data, next: None })?;
            let mut node = unsafe { Box::from_raw(node) };
            node.next = self.top.take();
            self.top = Some(node);
            self.len += 1;
            Ok(())
        }

        /// 弹出栈顶元素，空栈返回 `ContainerError::Empty`
        pub fn pop(&mut self) -> Result<T> {
            match self.top.take() {
                Some(node) => {
                    self.top = node.next;
                    self.len -= 1;
                    Ok(node.data)
                }
                None => Err(ContainerError::empty("pop")),
            }
        }

        /// 栈顶元素，O(1)
        pub fn top(&self) -> Result<&T> {
            self.top
                .as_ref()
                .map(|node| &node.data)
                .ok_or_else(|| ContainerError::empty("top"))
        }

        pub fn top_mut(&mut self) -> Result<&mut T> {
            self.top
                .as_mut()
                .map(|node| &mut node.data)
                .ok_or_else(|| ContainerError::empty("top_mut"))
        }

        /// 栈底元素，需要走完整条链，O(n)
        pub fn tail(&self) -> Result<&T> {
            self.iter().last().ok_or_else(|| ContainerError::empty("tail"))
        }

        /// 从栈顶数起第 `pos` 个元素（0 起始），O(pos)
        ///
        /// # 返回值
        /// - `Err(ContainerError::Empty)`: 栈为空
        /// - `Err(ContainerError::OutOfRange)`: `pos >= len`
        pub fn get(&self, pos: usize) -> Result<&T> {
            if self.is_empty() {
                return Err(ContainerError::empty("get"));
            }
            if pos >= self.len {
                return Err(ContainerError::out_of_range("get", pos, self.len));
            }
            self.iter()
                .nth(pos)
                .ok_or_else(|| ContainerError::out_of_range("get", pos, self.len))
        }

        /// 清空栈；对空栈调用不会报错
        pub fn clear(&mut self) {
            let released = self.len;
            while self.pop().is_ok() {}
            if released > 0 {
                log::trace!("栈已清空，释放 {released} 个节点");
            }
        }

        /// 从栈顶到栈底遍历
        pub fn iter(&self) -> Iter<'_, T> {
            Iter {
                next: self.top.as_deref(),
                len: self.len,
            }
        }
    }

    pub struct Iter<'a, T> {
        next: Option<&'a Node<T>>,
        len: usize,
    }

    impl<'a, T> Iterator for Iter<'a, T> {
        type Item = &'a T;

        fn next(&mut self) -> Option<Self::Item> {
            self.next.map(|node| {
                self.next = node.next.as_deref();
                self.len -= 1;
                &node.data
            })
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.len, Some(self.len))
        }
    }

    impl<T> ExactSizeIterator for Iter<'_, T> {}

    impl<T> FusedIterator for Iter<'_, T> {}

    // 消费迭代器，按出栈顺序产出
    pub struct IntoIter<T>(Stack<T>);

    impl<T> Iterator for IntoIter<T> {
        type Item = T;

        fn next(&mut self) -> Option<Self::Item> {
            self.0.pop().ok()
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.0.len, Some(self.0.len))
        }
    }

    impl<T> ExactSizeIterator for IntoIter<T> {}

    impl<T> IntoIterator for Stack<T> {
        type Item = T;
        type IntoIter = IntoIter<T>;

        fn into_iter(self) -> Self::IntoIter {
            IntoIter(self)
        }
    }

    impl<'a, T> IntoIterator for &'a Stack<T> {
        type Item = &'a T;
        type IntoIter = Iter<'a, T>;

        fn into_iter(self) -> Self::IntoIter {
            self.iter()
        }
    }

    /// 与 [`Stack::from_sequence`] 相同：第一个元素位于栈顶
    impl<T> FromIterator<T> for Stack<T> {
        fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
            Self::from_sequence(iter)
        }
    }

    impl<T, const N: usize> From<[T; N]> for Stack<T> {
        fn from(items: [T; N]) -> Self {
            Self::from_sequence(items)
        }
    }

    impl<T: PartialEq> PartialEq for Stack<T> {
        fn eq(&self, other: &Self) -> bool {
            self.len == other.len && self.iter().eq(other.iter())
        }
    }

    impl<T: Eq> Eq for Stack<T> {}

    // 深拷贝，保持栈顶到栈底的顺序
    impl<T: Clone> Clone for Stack<T> {
        fn clone(&self) -> Self {
            Self::from_sequence(self.iter().cloned())
        }
    }

    impl<T: fmt::Debug> fmt::Debug for Stack<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_list().entries(self.iter()).finish()
        }
    }

    /// 从栈顶到栈底输出 `[a, b, c]`
    impl<T: fmt::Display> fmt::Display for Stack<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            render::write_bracketed(f, self.iter())
        }
    }

    // 逐个释放，避免长链在默认的递归析构中耗尽调用栈
    impl<T> Drop for Stack<T> {
        fn drop(&mut self) {
            let mut link = self.top.take();
            while let Some(mut node) = link {
                link = node.next.take();
            }
        }
    }

    impl<T> Default for Stack<T> {
        fn default() -> Self {
            Self::new()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_lifo_order() {
            let mut stack = Stack::new();
            stack.push(1);
            stack.push(2);
            stack.push(3);
            assert_eq!(stack.top(), Ok(&3));
            assert_eq!(stack.tail(), Ok(&1));
            assert_eq!(stack.pop(), Ok(3));
            assert_eq!(stack.top(), Ok(&2));
            assert_eq!(stack.tail(), Ok(&1));
            assert_eq!(stack.len(), 2);
        }

        #[test]
        fn test_empty_stack() {
            let mut stack: Stack<i32> = Stack::new();
            assert_eq!(stack.pop(), Err(ContainerError::Empty));
            assert_eq!(stack.top(), Err(ContainerError::Empty));
            assert_eq!(stack.tail(), Err(ContainerError::Empty));
            assert_eq!(stack.get(0), Err(ContainerError::Empty));
            assert_eq!(stack.len(), 0);
        }

        #[test]
        fn test_sequence_construction() {
            let stack = Stack::from([1, 2, 3]);
            assert_eq!(stack.top(), Ok(&1));
            assert_eq!(stack.tail(), Ok(&3));
            assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
            assert_eq!(stack.len(), 3);

            // 等价于倒序压栈
            let mut pushed = Stack::new();
            for x in [3, 2, 1] {
                pushed.push(x);
            }
            assert_eq!(stack, pushed);
        }

        #[test]
        fn test_indexed_peek() {
            let stack = Stack::from(['a', 'b', 'c']);
            assert_eq!(stack.get(0), Ok(&'a'));
            assert_eq!(stack.get(2), Ok(&'c'));
            assert_eq!(stack.get(3), Err(ContainerError::OutOfRange { pos: 3, len: 3 }));
        }

        #[test]
        fn test_top_mut_and_try_push() {
            let mut stack = Stack::with_value(1);
            stack.try_push(2).unwrap();
            *stack.top_mut().unwrap() += 40;
            assert_eq!(stack.to_string(), "[42, 1]");
        }

        #[test]
        fn test_clone_independent() {
            let original = Stack::from([1, 2, 3]);
            let mut copy = original.clone();
            assert_eq!(copy, original);
            copy.pop().unwrap();
            copy.push(9);
            assert_eq!(original.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

            let mut assigned = Stack::from([5]);
            assigned.clone_from(&original);
            assert_eq!(assigned, original);
        }

        #[test]
        fn test_clear_and_long_drop() {
            let mut stack: Stack<u32> = (0..100_000).collect();
            assert_eq!(stack.len(), 100_000);
            stack.clear();
            stack.clear();
            assert!(stack.is_empty());

            let long: Stack<u32> = (0..200_000).collect();
            drop(long);
        }
    }
}
