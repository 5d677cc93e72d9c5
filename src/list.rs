pub mod list {
    use std::fmt;
    use std::iter::FusedIterator;
    use std::marker::PhantomData;
    use std::ops::{Index, IndexMut};
    use std::ptr;

    use crate::error::{ContainerError, Result};
    use crate::node;
    use crate::render;

    pub(crate) struct Node<T> {
        pub(crate) data: T,
        prev: *mut Node<T>,
        next: *mut Node<T>,
    }

    impl<T> Node<T> {
        fn new(data: T) -> Self {
            Node {
                data,
                prev: ptr::null_mut(),
                next: ptr::null_mut(),
            }
        }
    }

    /// 双向链表
    ///
    /// `head` 拥有整条节点链，`tail` 只是指向最后一个节点的回指，从不用于释放。
    /// 空链表时两者同为空指针。
    pub struct DoublyLinkedList<T> {
        head: *mut Node<T>,
        tail: *mut Node<T>,
        len: usize,
        marker: PhantomData<Box<Node<T>>>,
    }

    // 基础实现
    impl<T> DoublyLinkedList<T> {
        /// 构造一个新的空双向链表
        ///
        /// # 返回值
        /// 返回一个空的 `DoublyLinkedList`，其中：
        /// - `head`、`tail`: 均为空指针
        /// - `len`: 0
        pub fn new() -> Self {
            DoublyLinkedList {
                head: ptr::null_mut(),
                tail: ptr::null_mut(),
                len: 0,
                marker: PhantomData,
            }
        }

        /// 构造只包含一个元素的链表
        pub fn with_value(data: T) -> Self {
            let mut list = Self::new();
            list.push_back(data);
            list
        }

        /// 获取链表当前的元素数量
        pub fn len(&self) -> usize {
            self.len
        }

        /// 判断链表是否为空（即长度为 0）
        pub fn is_empty(&self) -> bool {
            self.len == 0
        }

        /// 在双向链表的头部插入一个新元素
        ///
        /// # 参数
        /// - `data`: 要插入到链表头部的数据
        ///
        /// # 操作逻辑
        /// 1. 在堆上创建新节点，前驱为空，后继指向当前头节点
        /// 2. 如果当前头节点非空，更新其前驱指针为新节点
        /// 3. 如果链表原本为空，则同时更新尾指针为新节点
        /// 4. 更新头指针，长度加 1
        ///
        /// 内存分配失败时按 `Box::new` 的方式终止进程，需要处理分配失败请使用 [`Self::try_push_front`]。
        pub fn push_front(&mut self, data: T) {
            let new_node = node::allocate(Node::new(data));
            self.link_front(new_node);
        }

        /// 在双向链表的尾部插入一个新元素
        ///
        /// # 参数
        /// - `data`: 要插入到链表尾部的数据
        ///
        /// # 操作逻辑
        /// 1. 在堆上创建新节点，前驱指向当前尾节点，后继为空
        /// 2. 如果当前尾节点非空，更新其后继指针为新节点
        /// 3. 如果链表原本为空，则同时更新头指针为新节点
        /// 4. 更新尾指针，长度加 1
        pub fn push_back(&mut self, data: T) {
            let new_node = node::allocate(Node::new(data));
            self.link_back(new_node);
        }

        /// 与 [`Self::push_front`] 相同，但分配失败时返回 `ContainerError::AllocationFailed`
        pub fn try_push_front(&mut self, data: T) -> Result<()> {
            let new_node = node::try_allocate(Node::new(data))?;
            self.link_front(new_node);
            Ok(())
        }

        /// 与 [`Self::push_back`] 相同，但分配失败时返回 `ContainerError::AllocationFailed`
        pub fn try_push_back(&mut self, data: T) -> Result<()> {
            let new_node = node::try_allocate(Node::new(data))?;
            self.link_back(new_node);
            Ok(())
        }

        fn link_front(&mut self, new_node: *mut Node<T>) {
            unsafe {
                (*new_node).next = self.head;
                if !self.head.is_null() {
                    (*self.head).prev = new_node;
                } else {
                    self.tail = new_node;
                }
            }
            self.head = new_node;
            self.len += 1;
        }

        fn link_back(&mut self, new_node: *mut Node<T>) {
            unsafe {
                (*new_node).prev = self.tail;
                if !self.tail.is_null() {
                    (*self.tail).next = new_node;
                } else {
                    self.head = new_node;
                }
            }
            self.tail = new_node;
            self.len += 1;
        }

        /// 在指定位置插入元素，插入后该元素位于下标 `pos`
        ///
        /// # 参数
        /// - `data`: 要插入的数据
        /// - `pos`: 插入位置，取值范围 `[0, len]`
        ///
        /// # 返回值
        /// - `Ok(())`: 插入成功
        /// - `Err(ContainerError::OutOfRange)`: `pos > len`，链表保持不变
        /// - `Err(ContainerError::AllocationFailed)`: 节点分配失败，链表保持不变
        ///
        /// # 操作逻辑
        /// 1. `pos == 0` 时等价于 `push_front`，`pos == len` 时等价于 `push_back`
        /// 2. 否则找到当前位于 `pos` 的节点，把新节点接在它前面
        pub fn insert_at(&mut self, data: T, pos: usize) -> Result<()> {
            if pos > self.len {
                return Err(ContainerError::out_of_range("insert_at", pos, self.len));
            }
            if pos == 0 {
                return self.try_push_front(data);
            }
            if pos == self.len {
                return self.try_push_back(data);
            }

            let new_node = node::try_allocate(Node::new(data))?;
            let current = self.node_at(pos);
            unsafe {
                let prev = (*current).prev;
                (*new_node).prev = prev;
                (*new_node).next = current;
                (*prev).next = new_node;
                (*current).prev = new_node;
            }
            self.len += 1;
            Ok(())
        }

        /// 移除并返回指定位置的元素
        ///
        /// # 参数
        /// - `pos`: 0 起始的下标，取值范围 `[0, len - 1]`
        ///
        /// # 返回值
        /// - `Ok(data)`: 被移除的元素
        /// - `Err(ContainerError::Empty)`: 链表为空（先于范围检查）
        /// - `Err(ContainerError::OutOfRange)`: `pos >= len`
        ///
        /// 与 `pop_front`/`pop_back` 不同，空链表上调用会返回错误。
        pub fn remove_at(&mut self, pos: usize) -> Result<T> {
            self.check_index("remove_at", pos)?;
            let target = self.node_at(pos);
            Ok(unsafe { self.unlink(target) })
        }

        /// 移除并返回链表头部的元素
        ///
        /// # 返回值
        /// - 链表非空时返回 `Some(data)`
        /// - 链表为空时返回 `None`，不视为错误
        ///
        /// # 操作逻辑
        /// 1. 检查头指针是否为空，为空则直接返回 None
        /// 2. 否则把头节点从链中摘下，更新头指针
        /// 3. 如果链表因此变空，尾指针同时置空
        pub fn pop_front(&mut self) -> Option<T> {
            if self.head.is_null() {
                return None;
            }
            Some(unsafe { self.unlink(self.head) })
        }

        /// 移除并返回链表尾部的元素，空链表返回 `None`
        pub fn pop_back(&mut self) -> Option<T> {
            if self.tail.is_null() {
                return None;
            }
            Some(unsafe { self.unlink(self.tail) })
        }

        /// 把节点从链中摘下并释放，返回其中的数据
        ///
        /// # Safety
        /// `target` 必须是本链表中的有效节点。
        unsafe fn unlink(&mut self, target: *mut Node<T>) -> T {
            unsafe {
                let prev = (*target).prev;
                let next = (*target).next;

                // 更新前驱节点的next指针
                if !prev.is_null() {
                    (*prev).next = next;
                } else {
                    self.head = next;
                }

                // 更新后继节点的prev指针
                if !next.is_null() {
                    (*next).prev = prev;
                } else {
                    self.tail = prev;
                }

                self.len -= 1;
                node::release(target).data
            }
        }

        /// 清空链表，释放所有节点；对空链表调用不会报错
        pub fn clear(&mut self) {
            let released = self.len;
            while self.pop_front().is_some() {}
            if released > 0 {
                log::trace!("链表已清空，释放 {released} 个节点");
            }
        }

        /// 返回头部元素的引用，空链表返回 `ContainerError::Empty`
        pub fn first(&self) -> Result<&T> {
            if self.head.is_null() {
                return Err(ContainerError::empty("first"));
            }
            unsafe { Ok(&(*self.head).data) }
        }

        /// 返回尾部元素的引用，空链表返回 `ContainerError::Empty`
        pub fn last(&self) -> Result<&T> {
            if self.tail.is_null() {
                return Err(ContainerError::empty("last"));
            }
            unsafe { Ok(&(*self.tail).data) }
        }

        pub fn first_mut(&mut self) -> Result<&mut T> {
            if self.head.is_null() {
                return Err(ContainerError::empty("first_mut"));
            }
            unsafe { Ok(&mut (*self.head).data) }
        }

        pub fn last_mut(&mut self) -> Result<&mut T> {
            if self.tail.is_null() {
                return Err(ContainerError::empty("last_mut"));
            }
            unsafe { Ok(&mut (*self.tail).data) }
        }

        /// 按 0 起始下标访问元素
        ///
        /// # 参数
        /// - `pos`: 取值范围 `[0, len - 1]`
        ///
        /// # 返回值
        /// - `Ok(&data)`: 位于 `pos` 的元素
        /// - `Err(ContainerError::Empty)`: 链表为空
        /// - `Err(ContainerError::OutOfRange)`: `pos >= len`
        pub fn get(&self, pos: usize) -> Result<&T> {
            self.check_index("get", pos)?;
            unsafe { Ok(&(*self.node_at(pos)).data) }
        }

        /// [`Self::get`] 的可变版本
        pub fn get_mut(&mut self, pos: usize) -> Result<&mut T> {
            self.check_index("get_mut", pos)?;
            unsafe { Ok(&mut (*self.node_at(pos)).data) }
        }

        /// 按 1 起始的位置访问元素
        ///
        /// 注意与 [`Self::get`] 的区别：`at(1)` 是头部元素，`at(len)` 是尾部元素，`at(0)` 越界。
        ///
        /// # 返回值
        /// - `Err(ContainerError::Empty)`: 链表为空
        /// - `Err(ContainerError::OutOfRange)`: `pos == 0` 或 `pos > len`
        pub fn at(&self, pos: usize) -> Result<&T> {
            self.check_position("at", pos)?;
            self.get(pos - 1)
        }

        /// [`Self::at`] 的可变版本
        pub fn at_mut(&mut self, pos: usize) -> Result<&mut T> {
            self.check_position("at_mut", pos)?;
            self.get_mut(pos - 1)
        }

        fn check_index(&self, op: &str, pos: usize) -> Result<()> {
            if self.is_empty() {
                return Err(ContainerError::empty(op));
            }
            if pos >= self.len {
                return Err(ContainerError::out_of_range(op, pos, self.len));
            }
            Ok(())
        }

        fn check_position(&self, op: &str, pos: usize) -> Result<()> {
            if self.is_empty() {
                return Err(ContainerError::empty(op));
            }
            if pos < 1 || pos > self.len {
                return Err(ContainerError::out_of_range(op, pos, self.len));
            }
            Ok(())
        }

        // 调用方保证 pos < len；从较近的一端开始走
        fn node_at(&self, pos: usize) -> *mut Node<T> {
            unsafe {
                if pos < self.len / 2 {
                    let mut current = self.head;
                    for _ in 0..pos {
                        current = (*current).next;
                    }
                    current
                } else {
                    let mut current = self.tail;
                    for _ in 0..(self.len - 1 - pos) {
                        current = (*current).prev;
                    }
                    current
                }
            }
        }

        /// 按顺序对每个元素调用 `func`
        pub fn for_each<F>(&self, mut func: F)
        where
            F: FnMut(&T),
        {
            for item in self.iter() {
                func(item);
            }
        }

        /// 按顺序对每个元素调用 `func`，允许原地修改元素
        pub fn for_each_mut<F>(&mut self, mut func: F)
        where
            F: FnMut(&mut T),
        {
            for item in self.iter_mut() {
                func(item);
            }
        }

        /// 返回游标位置 `node` 相邻的位置
        ///
        /// 空指针代表末尾哨兵，它位于尾节点与头节点之间：
        /// 哨兵向前一步到头节点，向后一步到尾节点。
        pub(crate) fn neighbour(&self, node: *mut Node<T>, forward: bool) -> *mut Node<T> {
            match (node.is_null(), forward) {
                (true, true) => self.head,
                (true, false) => self.tail,
                (false, true) => unsafe { (*node).next },
                (false, false) => unsafe { (*node).prev },
            }
        }

        pub(crate) fn head_node(&self) -> *mut Node<T> {
            self.head
        }
    }

    // 迭代器实现
    impl<T> DoublyLinkedList<T> {
        pub fn iter(&self) -> Iter<'_, T> {
            Iter {
                head: self.head,
                tail: self.tail,
                len: self.len,
                marker: PhantomData,
            }
        }

        pub fn iter_mut(&mut self) -> IterMut<'_, T> {
            IterMut {
                head: self.head,
                tail: self.tail,
                len: self.len,
                marker: PhantomData,
            }
        }

        /// 指向头部元素的游标；空链表时等于 [`Self::end`]
        pub fn begin(&self) -> Cursor<'_, T> {
            Cursor {
                list: self,
                current: self.head,
            }
        }

        /// 指向末尾哨兵的游标，不可解引用
        pub fn end(&self) -> Cursor<'_, T> {
            Cursor {
                list: self,
                current: ptr::null_mut(),
            }
        }

        pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
            let current = self.head;
            CursorMut {
                list: self,
                current,
            }
        }

        pub fn end_mut(&mut self) -> CursorMut<'_, T> {
            CursorMut {
                list: self,
                current: ptr::null_mut(),
            }
        }
    }

    // 双向不可变迭代器
    pub struct Iter<'a, T> {
        head: *mut Node<T>,
        tail: *mut Node<T>,
        len: usize,
        marker: PhantomData<&'a Node<T>>,
    }

    impl<'a, T> Iterator for Iter<'a, T> {
        type Item = &'a T;

        fn next(&mut self) -> Option<Self::Item> {
            if self.len == 0 {
                return None;
            }
            unsafe {
                let node = self.head;
                self.head = (*node).next;
                self.len -= 1;
                Some(&(*node).data)
            }
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.len, Some(self.len))
        }
    }

    impl<T> DoubleEndedIterator for Iter<'_, T> {
        fn next_back(&mut self) -> Option<Self::Item> {
            if self.len == 0 {
                return None;
            }
            unsafe {
                let node = self.tail;
                self.tail = (*node).prev;
                self.len -= 1;
                Some(&(*node).data)
            }
        }
    }

    impl<T> ExactSizeIterator for Iter<'_, T> {}

    impl<T> FusedIterator for Iter<'_, T> {}

    impl<T> Clone for Iter<'_, T> {
        fn clone(&self) -> Self {
            Iter { ..*self }
        }
    }

    // 双向可变迭代器
    pub struct IterMut<'a, T> {
        head: *mut Node<T>,
        tail: *mut Node<T>,
        len: usize,
        marker: PhantomData<&'a mut Node<T>>,
    }

    impl<'a, T> Iterator for IterMut<'a, T> {
        type Item = &'a mut T;

        fn next(&mut self) -> Option<Self::Item> {
            if self.len == 0 {
                return None;
            }
            unsafe {
                let node = self.head;
                self.head = (*node).next;
                self.len -= 1;
                Some(&mut (*node).data)
            }
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.len, Some(self.len))
        }
    }

    impl<T> DoubleEndedIterator for IterMut<'_, T> {
        fn next_back(&mut self) -> Option<Self::Item> {
            if self.len == 0 {
                return None;
            }
            unsafe {
                let node = self.tail;
                self.tail = (*node).prev;
                self.len -= 1;
                Some(&mut (*node).data)
            }
        }
    }

    impl<T> ExactSizeIterator for IterMut<'_, T> {}

    impl<T> FusedIterator for IterMut<'_, T> {}

    // 消费迭代器
    pub struct IntoIter<T> {
        list: DoublyLinkedList<T>,
    }

    impl<T> Iterator for IntoIter<T> {
        type Item = T;

        fn next(&mut self) -> Option<Self::Item> {
            self.list.pop_front()
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.list.len, Some(self.list.len))
        }
    }

    impl<T> DoubleEndedIterator for IntoIter<T> {
        fn next_back(&mut self) -> Option<Self::Item> {
            self.list.pop_back()
        }
    }

    impl<T> ExactSizeIterator for IntoIter<T> {}

    impl<T> FusedIterator for IntoIter<T> {}

    /// 只读游标
    ///
    /// 可以一次前进或后退一个节点。位于末尾哨兵时 `current` 返回 `None`。
    /// 两个游标相等当且仅当它们属于同一个链表且指向同一个节点。
    pub struct Cursor<'a, T> {
        list: &'a DoublyLinkedList<T>,
        current: *mut Node<T>,
    }

    impl<'a, T> Cursor<'a, T> {
        /// 前进一步；从尾节点前进到哨兵，从哨兵前进到头节点
        pub fn move_next(&mut self) {
            self.current = self.list.neighbour(self.current, true);
        }

        /// 后退一步；从哨兵后退到尾节点，从头节点后退到哨兵
        pub fn move_prev(&mut self) {
            self.current = self.list.neighbour(self.current, false);
        }

        pub fn current(&self) -> Option<&'a T> {
            if self.current.is_null() {
                None
            } else {
                unsafe { Some(&(*self.current).data) }
            }
        }

        pub fn is_end(&self) -> bool {
            self.current.is_null()
        }
    }

    impl<T> Clone for Cursor<'_, T> {
        fn clone(&self) -> Self {
            *self
        }
    }

    impl<T> Copy for Cursor<'_, T> {}

    impl<T> PartialEq for Cursor<'_, T> {
        fn eq(&self, other: &Self) -> bool {
            ptr::eq(self.list, other.list) && self.current == other.current
        }
    }

    impl<T> Eq for Cursor<'_, T> {}

    impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_tuple("Cursor").field(&self.current()).finish()
        }
    }

    /// 可变游标，移动规则与 [`Cursor`] 相同，可以原地修改当前元素
    pub struct CursorMut<'a, T> {
        list: &'a mut DoublyLinkedList<T>,
        current: *mut Node<T>,
    }

    impl<T> CursorMut<'_, T> {
        pub fn move_next(&mut self) {
            self.current = self.list.neighbour(self.current, true);
        }

        pub fn move_prev(&mut self) {
            self.current = self.list.neighbour(self.current, false);
        }

        pub fn current(&self) -> Option<&T> {
            if self.current.is_null() {
                None
            } else {
                unsafe { Some(&(*self.current).data) }
            }
        }

        pub fn current_mut(&mut self) -> Option<&mut T> {
            if self.current.is_null() {
                None
            } else {
                unsafe { Some(&mut (*self.current).data) }
            }
        }

        pub fn is_end(&self) -> bool {
            self.current.is_null()
        }

        /// 以只读游标的形式查看当前位置
        pub fn as_cursor(&self) -> Cursor<'_, T> {
            Cursor {
                list: &*self.list,
                current: self.current,
            }
        }
    }

    impl<T> Index<usize> for DoublyLinkedList<T> {
        type Output = T;

        /// 0 起始下标访问，越界时 panic
        fn index(&self, pos: usize) -> &T {
            match self.get(pos) {
                Ok(data) => data,
                Err(err) => panic!("{err}"),
            }
        }
    }

    impl<T> IndexMut<usize> for DoublyLinkedList<T> {
        fn index_mut(&mut self, pos: usize) -> &mut T {
            match self.get_mut(pos) {
                Ok(data) => data,
                Err(err) => panic!("{err}"),
            }
        }
    }

    // 从迭代器创建链表
    impl<T> FromIterator<T> for DoublyLinkedList<T> {
        fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
            let mut list = DoublyLinkedList::new();
            list.extend(iter);
            list
        }
    }

    impl<T> Extend<T> for DoublyLinkedList<T> {
        fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
            for item in iter {
                self.push_back(item);
            }
        }
    }

    impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
        fn from(items: [T; N]) -> Self {
            items.into_iter().collect()
        }
    }

    // 链表转换为迭代器
    impl<T> IntoIterator for DoublyLinkedList<T> {
        type Item = T;
        type IntoIter = IntoIter<T>;

        fn into_iter(self) -> Self::IntoIter {
            IntoIter { list: self }
        }
    }

    impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
        type Item = &'a T;
        type IntoIter = Iter<'a, T>;

        fn into_iter(self) -> Self::IntoIter {
            self.iter()
        }
    }

    impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
        type Item = &'a mut T;
        type IntoIter = IterMut<'a, T>;

        fn into_iter(self) -> Self::IntoIter {
            self.iter_mut()
        }
    }

    // 格式化输出
    impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_list().entries(self.iter()).finish()
        }
    }

    /// 输出形如 `[1, 2, 3]` 的文本
    impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            render::write_bracketed(f, self.iter())
        }
    }

    impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
        fn eq(&self, other: &Self) -> bool {
            self.len == other.len && self.iter().eq(other.iter())
        }
    }

    impl<T: Eq> Eq for DoublyLinkedList<T> {}

    // 清理资源
    impl<T> Drop for DoublyLinkedList<T> {
        fn drop(&mut self) {
            while self.pop_front().is_some() {}
        }
    }

    // 克隆实现：深拷贝，新链表与原链表不共享任何节点
    impl<T: Clone> Clone for DoublyLinkedList<T> {
        fn clone(&self) -> Self {
            self.iter().cloned().collect()
        }

        /// 赋值语义：复用已有节点覆盖数据，多余的节点释放，不足的补齐
        fn clone_from(&mut self, source: &Self) {
            let mut items = source.iter();
            for (dst, src) in self.iter_mut().zip(&mut items) {
                dst.clone_from(src);
            }
            while self.len > source.len {
                self.pop_back();
            }
            self.extend(items.cloned());
        }
    }

    // 默认实现
    impl<T> Default for DoublyLinkedList<T> {
        fn default() -> Self {
            Self::new()
        }
    }

}

pub mod c_list {
    use std::os::raw::{c_int, c_void};
    use std::ptr;

    use crate::error::ContainerError;
    use crate::other_list::{DoublyLinkedList, Node};

    // 不透明指针类型，对C完全隐藏实现细节
    pub struct CDoublyLinkedList {
        inner: DoublyLinkedList<*mut c_void>,
    }

    // 游标结构，用于C端双向遍历；空的 current 表示末尾哨兵
    pub struct CCursor {
        list: *const CDoublyLinkedList,
        current: *mut Node<*mut c_void>,
    }

    // 错误码定义
    pub const DLL_SUCCESS: c_int = 0;
    pub const DLL_ERROR_NULL_PTR: c_int = -1;
    pub const DLL_ERROR_EMPTY: c_int = -2;
    pub const DLL_ERROR_OUT_OF_BOUNDS: c_int = -3;
    pub const DLL_ERROR_ALLOC: c_int = -4;

    fn error_code(err: ContainerError) -> c_int {
        match err {
            ContainerError::Empty => DLL_ERROR_EMPTY,
            ContainerError::OutOfRange { .. } => DLL_ERROR_OUT_OF_BOUNDS,
            ContainerError::AllocationFailed => DLL_ERROR_ALLOC,
        }
    }

    fn status(result: crate::Result<()>) -> c_int {
        match result {
            Ok(()) => DLL_SUCCESS,
            Err(err) => error_code(err),
        }
    }

    // out 允许为空，此时只返回状态码
    fn write_out(out: *mut *mut c_void, value: *mut c_void) {
        if !out.is_null() {
            unsafe {
                *out = value;
            }
        }
    }

    fn read_into(result: crate::Result<&*mut c_void>, out: *mut *mut c_void) -> c_int {
        match result {
            Ok(value) => {
                write_out(out, *value);
                DLL_SUCCESS
            }
            Err(err) => error_code(err),
        }
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn dll_new() -> *mut CDoublyLinkedList {
        Box::into_raw(Box::new(CDoublyLinkedList {
            inner: DoublyLinkedList::new(),
        }))
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn dll_free(list: *mut CDoublyLinkedList) {
        if !list.is_null() {
            unsafe {
                let _ = Box::from_raw(list);
            }
        }
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn dll_len(list: *const CDoublyLinkedList) -> usize {
        if list.is_null() {
            0
        } else {
            unsafe { (*list).inner.len() }
        }
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn dll_is_empty(list: *const CDoublyLinkedList) -> c_int {
        if list.is_null() {
            DLL_ERROR_NULL_PTR
        } else {
            unsafe { (*list).inner.is_empty() as c_int }
        }
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn dll_clear(list: *mut CDoublyLinkedList) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }
        unsafe {
            (*list).inner.clear();
        }
        DLL_SUCCESS
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn dll_push_front(list: *mut CDoublyLinkedList, data: *mut c_void) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }
        status(unsafe { (*list).inner.try_push_front(data) })
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn dll_push_back(list: *mut CDoublyLinkedList, data: *mut c_void) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }
        status(unsafe { (*list).inner.try_push_back(data) })
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn dll_insert_at(
        list: *mut CDoublyLinkedList,
        data: *mut c_void,
        pos: usize,
    ) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }
        status(unsafe { (*list).inner.insert_at(data, pos) })
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn dll_remove_at(
        list: *mut CDoublyLinkedList,
        pos: usize,
        out: *mut *mut c_void,
    ) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }
        match unsafe { (*list).inner.remove_at(pos) } {
            Ok(data) => {
                write_out(out, data);
                DLL_SUCCESS
            }
            Err(err) => error_code(err),
        }
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn dll_pop_front(list: *mut CDoublyLinkedList) -> *mut c_void {
        if list.is_null() {
            return ptr::null_mut();
        }
        unsafe { (*list).inner.pop_front().unwrap_or(ptr::null_mut()) }
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn dll_pop_back(list: *mut CDoublyLinkedList) -> *mut c_void {
        if list.is_null() {
            return ptr::null_mut();
        }
        unsafe { (*list).inner.pop_back().unwrap_or(ptr::null_mut()) }
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn dll_first(list: *const CDoublyLinkedList, out: *mut *mut c_void) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }
        read_into(unsafe { (*list).inner.first() }, out)
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn dll_last(list: *const CDoublyLinkedList, out: *mut *mut c_void) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }
        read_into(unsafe { (*list).inner.last() }, out)
    }

    /// 0 起始下标
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_get(
        list: *const CDoublyLinkedList,
        pos: usize,
        out: *mut *mut c_void,
    ) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }
        read_into(unsafe { (*list).inner.get(pos) }, out)
    }

    /// 1 起始位置
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_at(
        list: *const CDoublyLinkedList,
        pos: usize,
        out: *mut *mut c_void,
    ) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }
        read_into(unsafe { (*list).inner.at(pos) }, out)
    }

    fn new_cursor(list: *const CDoublyLinkedList, at_end: bool) -> *mut CCursor {
        if list.is_null() {
            return ptr::null_mut();
        }
        let current = if at_end {
            ptr::null_mut()
        } else {
            unsafe { (*list).inner.head_node() }
        };
        Box::into_raw(Box::new(CCursor { list, current }))
    }

    /// 游标在链表被修改后失效，调用方需要重新创建
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_cursor_begin(list: *const CDoublyLinkedList) -> *mut CCursor {
        new_cursor(list, false)
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn dll_cursor_end(list: *const CDoublyLinkedList) -> *mut CCursor {
        new_cursor(list, true)
    }

    fn step(cursor: *mut CCursor, forward: bool) -> c_int {
        if cursor.is_null() {
            return DLL_ERROR_NULL_PTR;
        }
        unsafe {
            let cursor = &mut *cursor;
            if cursor.list.is_null() {
                return DLL_ERROR_NULL_PTR;
            }
            cursor.current = (*cursor.list).inner.neighbour(cursor.current, forward);
        }
        DLL_SUCCESS
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn dll_cursor_next(cursor: *mut CCursor) -> c_int {
        step(cursor, true)
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn dll_cursor_prev(cursor: *mut CCursor) -> c_int {
        step(cursor, false)
    }

    /// 读取游标当前元素；位于末尾哨兵时返回 `DLL_ERROR_OUT_OF_BOUNDS`
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_cursor_current(cursor: *const CCursor, out: *mut *mut c_void) -> c_int {
        if cursor.is_null() {
            return DLL_ERROR_NULL_PTR;
        }
        unsafe {
            let current = (*cursor).current;
            if current.is_null() {
                return DLL_ERROR_OUT_OF_BOUNDS;
            }
            write_out(out, (*current).data);
        }
        DLL_SUCCESS
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn dll_cursor_free(cursor: *mut CCursor) {
        if !cursor.is_null() {
            unsafe {
                let _ = Box::from_raw(cursor);
            }
        }
    }

}
