pub mod queue {
    use std::fmt;
    use std::iter::FusedIterator;
    use std::marker::PhantomData;
    use std::ptr;

    use crate::error::{ContainerError, Result};
    use crate::node;
    use crate::render;

    struct Node<T> {
        data: T,
        next: *mut Node<T>,
    }

    /// 先进先出队列
    ///
    /// 只在尾部插入、只在头部移除，因此节点只需要后继指针。
    pub struct Queue<T> {
        head: *mut Node<T>,
        tail: *mut Node<T>,
        len: usize,
        marker: PhantomData<Box<Node<T>>>,
    }

    impl<T> Queue<T> {
        pub fn new() -> Self {
            Queue {
                head: ptr::null_mut(),
                tail: ptr::null_mut(),
                len: 0,
                marker: PhantomData,
            }
        }

        /// 构造只包含一个元素的队列
        pub fn with_value(data: T) -> Self {
            let mut queue = Self::new();
            queue.push(data);
            queue
        }

        pub fn len(&self) -> usize {
            self.len
        }

        pub fn is_empty(&self) -> bool {
            self.len == 0
        }

        /// 在队尾添加一个元素，O(1)
        pub fn push(&mut self, data: T) {
            let new_node = node::allocate(Node {
                data,
                next: ptr::null_mut(),
            });
            self.link_back(new_node);
        }

        /// 与 [`Self::push`] 相同，但分配失败时返回 `ContainerError::AllocationFailed`
        pub fn try_push(&mut self, data: T) -> Result<()> {
            let new_node = node::try_allocate(Node {
                data,
                next: ptr::null_mut(),
            })?;
            self.link_back(new_node);
            Ok(())
        }

        fn link_back(&mut self, new_node: *mut Node<T>) {
            if self.tail.is_null() {
                self.head = new_node;
            } else {
                unsafe {
                    (*self.tail).next = new_node;
                }
            }
            self.tail = new_node;
            self.len += 1;
        }

        /// 移除并返回队首元素，O(1)
        ///
        /// # 返回值
        /// - `Ok(data)`: 最早入队的元素
        /// - `Err(ContainerError::Empty)`: 队列为空
        pub fn pop(&mut self) -> Result<T> {
            if self.head.is_null() {
                return Err(ContainerError::empty("pop"));
            }

            unsafe {
                let old_head = node::release(self.head);
                self.head = old_head.next;
                if self.head.is_null() {
                    // 队列已空
                    self.tail = ptr::null_mut();
                }
                self.len -= 1;
                Ok(old_head.data)
            }
        }

        /// 队首元素，空队列返回 `ContainerError::Empty`
        pub fn front(&self) -> Result<&T> {
            if self.head.is_null() {
                return Err(ContainerError::empty("front"));
            }
            unsafe { Ok(&(*self.head).data) }
        }

        /// 队尾元素，即最近一次入队的元素
        pub fn last(&self) -> Result<&T> {
            if self.tail.is_null() {
                return Err(ContainerError::empty("last"));
            }
            unsafe { Ok(&(*self.tail).data) }
        }

        pub fn front_mut(&mut self) -> Result<&mut T> {
            if self.head.is_null() {
                return Err(ContainerError::empty("front_mut"));
            }
            unsafe { Ok(&mut (*self.head).data) }
        }

        pub fn last_mut(&mut self) -> Result<&mut T> {
            if self.tail.is_null() {
                return Err(ContainerError::empty("last_mut"));
            }
            unsafe { Ok(&mut (*self.tail).data) }
        }

        /// 查看从队首数起第 `pos` 个元素（0 起始），O(pos)
        ///
        /// # 返回值
        /// - `Err(ContainerError::Empty)`: 队列为空
        /// - `Err(ContainerError::OutOfRange)`: `pos >= len`
        pub fn get(&self, pos: usize) -> Result<&T> {
            let node = self.node_at("get", pos)?;
            unsafe { Ok(&(*node).data) }
        }

        pub fn get_mut(&mut self, pos: usize) -> Result<&mut T> {
            let node = self.node_at("get_mut", pos)?;
            unsafe { Ok(&mut (*node).data) }
        }

        fn node_at(&self, op: &str, pos: usize) -> Result<*mut Node<T>> {
            if self.is_empty() {
                return Err(ContainerError::empty(op));
            }
            if pos >= self.len {
                return Err(ContainerError::out_of_range(op, pos, self.len));
            }

            let mut current = self.head;
            for _ in 0..pos {
                current = unsafe { (*current).next };
            }
            Ok(current)
        }

        /// 清空队列；对空队列调用不会报错
        pub fn clear(&mut self) {
            let released = self.len;
            while self.pop().is_ok() {}
            if released > 0 {
                log::trace!("队列已清空，释放 {released} 个节点");
            }
        }

        /// 从队首到队尾遍历
        pub fn iter(&self) -> Iter<'_, T> {
            Iter {
                current: self.head,
                len: self.len,
                marker: PhantomData,
            }
        }
    }

    pub struct Iter<'a, T> {
        current: *mut Node<T>,
        len: usize,
        marker: PhantomData<&'a Node<T>>,
    }

    impl<'a, T> Iterator for Iter<'a, T> {
        type Item = &'a T;

        fn next(&mut self) -> Option<Self::Item> {
            if self.current.is_null() {
                None
            } else {
                unsafe {
                    let item = &(*self.current).data;
                    self.current = (*self.current).next;
                    self.len -= 1;
                    Some(item)
                }
            }
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.len, Some(self.len))
        }
    }

    impl<T> ExactSizeIterator for Iter<'_, T> {}

    impl<T> FusedIterator for Iter<'_, T> {}

    // 消费迭代器，按出队顺序产出
    pub struct IntoIter<T> {
        queue: Queue<T>,
    }

    impl<T> Iterator for IntoIter<T> {
        type Item = T;

        fn next(&mut self) -> Option<Self::Item> {
            self.queue.pop().ok()
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.queue.len, Some(self.queue.len))
        }
    }

    impl<T> ExactSizeIterator for IntoIter<T> {}

    impl<T> IntoIterator for Queue<T> {
        type Item = T;
        type IntoIter = IntoIter<T>;

        fn into_iter(self) -> Self::IntoIter {
            IntoIter { queue: self }
        }
    }

    impl<'a, T> IntoIterator for &'a Queue<T> {
        type Item = &'a T;
        type IntoIter = Iter<'a, T>;

        fn into_iter(self) -> Self::IntoIter {
            self.iter()
        }
    }

    impl<T> FromIterator<T> for Queue<T> {
        fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
            let mut queue = Queue::new();
            queue.extend(iter);
            queue
        }
    }

    impl<T> Extend<T> for Queue<T> {
        fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
            for item in iter {
                self.push(item);
            }
        }
    }

    impl<T, const N: usize> From<[T; N]> for Queue<T> {
        fn from(items: [T; N]) -> Self {
            items.into_iter().collect()
        }
    }

    /// 两个队列相等当且仅当长度相同且对应位置的元素依次相等
    impl<T: PartialEq> PartialEq for Queue<T> {
        fn eq(&self, other: &Self) -> bool {
            self.len == other.len && self.iter().eq(other.iter())
        }
    }

    impl<T: Eq> Eq for Queue<T> {}

    impl<T: Clone> Clone for Queue<T> {
        fn clone(&self) -> Self {
            self.iter().cloned().collect()
        }

        fn clone_from(&mut self, source: &Self) {
            self.clear();
            self.extend(source.iter().cloned());
        }
    }

    impl<T: fmt::Debug> fmt::Debug for Queue<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_list().entries(self.iter()).finish()
        }
    }

    impl<T: fmt::Display> fmt::Display for Queue<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            render::write_bracketed(f, self.iter())
        }
    }

    impl<T> Drop for Queue<T> {
        fn drop(&mut self) {
            while self.pop().is_ok() {}
        }
    }

    impl<T> Default for Queue<T> {
        fn default() -> Self {
            Self::new()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_fifo_order() {
            let mut queue = Queue::new();
            queue.push(1);
            queue.push(2);
            queue.push(3);
            assert_eq!(queue.front(), Ok(&1));
            assert_eq!(queue.last(), Ok(&3));
            assert_eq!(queue.pop(), Ok(1));
            assert_eq!(queue.pop(), Ok(2));
            assert_eq!(queue.pop(), Ok(3));
            assert_eq!(queue.pop(), Err(ContainerError::Empty));
            assert!(queue.head.is_null());
            assert!(queue.tail.is_null());
        }

        #[test]
        fn test_push_after_drain() {
            let mut queue = Queue::with_value('a');
            assert_eq!(queue.pop(), Ok('a'));
            queue.push('b');
            assert_eq!(queue.front(), Ok(&'b'));
            assert_eq!(queue.last(), Ok(&'b'));
            assert_eq!(queue.len(), 1);
        }

        #[test]
        fn test_empty_reads() {
            let mut queue: Queue<i32> = Queue::new();
            assert_eq!(queue.front(), Err(ContainerError::Empty));
            assert_eq!(queue.last(), Err(ContainerError::Empty));
            assert_eq!(queue.get(0), Err(ContainerError::Empty));
            assert_eq!(queue.front_mut(), Err(ContainerError::Empty));
        }

        #[test]
        fn test_indexed_peek() {
            let mut queue = Queue::from([10, 20, 30]);
            assert_eq!(queue.get(0), Ok(&10));
            assert_eq!(queue.get(2), Ok(&30));
            assert_eq!(queue.get(3), Err(ContainerError::OutOfRange { pos: 3, len: 3 }));
            *queue.get_mut(1).unwrap() = 21;
            *queue.last_mut().unwrap() = 31;
            assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![10, 21, 31]);
        }

        #[test]
        fn test_equality() {
            let a = Queue::from([1, 2, 3]);
            let b: Queue<i32> = (1..=3).collect();
            let c = Queue::from([1, 2]);
            let d = Queue::from([1, 2, 4]);
            assert_eq!(a, b);
            assert_ne!(a, c);
            assert_ne!(a, d);
        }

        #[test]
        fn test_clone_independent() {
            let original = Queue::from([1, 2, 3]);
            let mut copy = original.clone();
            copy.pop().unwrap();
            copy.push(4);
            assert_eq!(original.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

            let mut assigned = Queue::from([7, 7, 7, 7]);
            assigned.clone_from(&copy);
            assert_eq!(assigned, copy);
        }

        #[test]
        fn test_display_and_clear() {
            let mut queue = Queue::from(["x", "y"]);
            assert_eq!(queue.to_string(), "[x, y]");
            queue.clear();
            queue.clear();
            assert!(queue.is_empty());
            assert_eq!(queue.to_string(), "[]");
        }

        #[test]
        fn test_into_iter_drains_in_order() {
            let queue = Queue::from([1, 2, 3]);
            assert_eq!(queue.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        }
    }
}
