/// 定长环形缓冲区（Bounded RingBuffer）
///
/// 为球队集合设计的固定容量序列：
/// - 预分配固定容量，运行期不扩容
/// - 满时可选择拒绝写入（`push`）或淘汰最旧元素（`push_evicting`）
/// - 支持按逻辑位置读取、替换、删除
/// - 支持原地排序与反转（重排后头指针归零）
///
/// # 逻辑位置
///
/// 位置 0 永远是队首（最早写入且仍存活的元素），`len() - 1` 是队尾：
/// ```text
/// slots:  [ C ][ D ][ A ][ B ]
///                     ^head
/// logical: 0=A 1=B 2=C 3=D
/// ```
///
/// 全部使用安全代码实现：空槽位为 `None`。

use std::cmp::Ordering;
use std::fmt;

/// 定长环形缓冲区
#[derive(Clone)]
pub struct RingBuffer<T> {
    /// 底层槽位（预分配）
    buffer: Box<[Option<T>]>,

    /// 容量（固定）
    capacity: usize,

    /// 队首所在槽位
    head: usize,

    /// 当前元素数量
    len: usize,
}

impl<T> RingBuffer<T> {
    /// 创建指定容量的RingBuffer
    ///
    /// # Panics
    /// `capacity` 为 0 时 panic
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");

        let buffer = (0..capacity)
            .map(|_| None)
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self {
            buffer,
            capacity,
            head: 0,
            len: 0,
        }
    }

    /// 逻辑位置 → 物理槽位
    #[inline]
    fn slot(&self, index: usize) -> usize {
        (self.head + index) % self.capacity
    }

    /// 入队（添加到尾部），满时拒绝
    ///
    /// # 返回
    /// - `Ok(())`: 成功入队
    /// - `Err(value)`: 队列已满，返回原值
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }

        let tail = self.slot(self.len);
        self.buffer[tail] = Some(value);
        self.len += 1;

        Ok(())
    }

    /// 入队（添加到尾部），满时先淘汰队首
    ///
    /// # 返回
    /// 被淘汰的最旧元素（未满时为 `None`）
    #[inline]
    pub fn push_evicting(&mut self, value: T) -> Option<T> {
        let evicted = if self.is_full() { self.pop() } else { None };

        let tail = self.slot(self.len);
        self.buffer[tail] = Some(value);
        self.len += 1;

        evicted
    }

    /// 出队（从头部移除）
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let value = self.buffer[self.head].take();
        self.head = (self.head + 1) % self.capacity;
        self.len -= 1;

        value
    }

    /// 查看队首元素（不移除）
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// 查看队尾元素（不移除）
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// 按逻辑位置读取
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.buffer[self.slot(index)].as_ref()
    }

    /// 按逻辑位置读取（可变引用）
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let slot = self.slot(index);
        self.buffer[slot].as_mut()
    }

    /// 替换逻辑位置上的元素
    ///
    /// # 返回
    /// - `Ok(old)`: 被替换的旧值
    /// - `Err(value)`: 位置越界，返回原值
    pub fn replace(&mut self, index: usize, value: T) -> Result<T, T> {
        match self.get_mut(index) {
            Some(current) => Ok(std::mem::replace(current, value)),
            None => Err(value),
        }
    }

    /// 删除逻辑位置上的元素，后续元素依次前移
    ///
    /// O(n)，容量很小时可以接受
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        let target = self.slot(index);
        let removed = self.buffer[target].take();

        for i in index..self.len - 1 {
            let (current, next) = (self.slot(i), self.slot(i + 1));
            self.buffer[current] = self.buffer[next].take();
        }
        self.len -= 1;

        removed
    }

    /// 按比较函数原地排序（稳定排序）
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.rebuild(|items| items.sort_by(compare));
    }

    /// 原地反转逻辑顺序
    pub fn reverse(&mut self) {
        self.rebuild(|items| items.reverse());
    }

    /// 取出全部元素重排后写回，头指针归零
    fn rebuild(&mut self, reorder: impl FnOnce(&mut Vec<T>)) {
        let mut items: Vec<T> = self.drain().collect();
        reorder(&mut items);

        self.head = 0;
        for (slot, item) in self.buffer.iter_mut().zip(items) {
            *slot = Some(item);
            self.len += 1;
        }
    }

    /// 获取当前元素数量
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// 检查是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 检查是否已满
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity
    }

    /// 获取容量
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 清空队列
    pub fn clear(&mut self) {
        for slot in self.buffer.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// 按逻辑顺序借用遍历（不消耗）
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buffer: self,
            front: 0,
            back: self.len,
        }
    }

    /// 创建迭代器（消耗队列）
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { buffer: self }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// 借用迭代器
pub struct Iter<'a, T> {
    buffer: &'a RingBuffer<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.buffer.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.buffer.get(self.back)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// 消耗迭代器
pub struct Drain<'a, T> {
    buffer: &'a mut RingBuffer<T>,
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.buffer.len();
        (len, Some(len))
    }
}

impl<'a, T> ExactSizeIterator for Drain<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Clone>(rb: &RingBuffer<T>) -> Vec<T> {
        rb.iter().cloned().collect()
    }

    #[test]
    fn test_basic_operations() {
        let mut rb = RingBuffer::with_capacity(4);

        assert!(rb.push(1).is_ok());
        assert!(rb.push(2).is_ok());
        assert!(rb.push(3).is_ok());
        assert_eq!(rb.len(), 3);

        assert_eq!(rb.pop(), Some(1));
        assert_eq!(rb.pop(), Some(2));
        assert_eq!(rb.len(), 1);

        assert!(rb.push(4).is_ok());
        assert!(rb.push(5).is_ok());
        assert_eq!(collect(&rb), vec![3, 4, 5]);
    }

    #[test]
    fn test_capacity_limit() {
        let mut rb = RingBuffer::with_capacity(2);

        assert!(rb.push(1).is_ok());
        assert!(rb.push(2).is_ok());

        // 队列已满
        assert_eq!(rb.push(3), Err(3));
        assert_eq!(rb.len(), 2);
        assert!(rb.is_full());
    }

    #[test]
    fn test_push_evicting_discards_oldest() {
        let mut rb = RingBuffer::with_capacity(3);

        assert_eq!(rb.push_evicting(1), None);
        assert_eq!(rb.push_evicting(2), None);
        assert_eq!(rb.push_evicting(3), None);

        // 满了之后淘汰队首
        assert_eq!(rb.push_evicting(4), Some(1));
        assert_eq!(rb.push_evicting(5), Some(2));
        assert_eq!(rb.len(), 3);
        assert_eq!(collect(&rb), vec![3, 4, 5]);
        assert_eq!(rb.front(), Some(&3));
        assert_eq!(rb.back(), Some(&5));
    }

    #[test]
    fn test_wrap_around_positions() {
        let mut rb = RingBuffer::with_capacity(4);
        for i in 0..6 {
            rb.push_evicting(i);
        }

        // 头指针已绕回，逻辑位置不受影响
        assert_eq!(rb.get(0), Some(&2));
        assert_eq!(rb.get(3), Some(&5));
        assert_eq!(rb.get(4), None);
    }

    #[test]
    fn test_replace() {
        let mut rb = RingBuffer::with_capacity(3);
        rb.push(1).unwrap();
        rb.push(2).unwrap();

        assert_eq!(rb.replace(1, 20), Ok(2));
        assert_eq!(rb.replace(2, 30), Err(30));
        assert_eq!(collect(&rb), vec![1, 20]);
    }

    #[test]
    fn test_remove_shifts_tail() {
        let mut rb = RingBuffer::with_capacity(4);
        for i in 0..6 {
            rb.push_evicting(i);
        }

        assert_eq!(rb.remove(1), Some(3));
        assert_eq!(collect(&rb), vec![2, 4, 5]);
        assert_eq!(rb.remove(5), None);

        // 删除后仍可写入并保持顺序
        rb.push_evicting(6);
        rb.push_evicting(7);
        assert_eq!(collect(&rb), vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_sort_and_reverse() {
        let mut rb = RingBuffer::with_capacity(4);
        for i in [9, 3, 7, 1, 5] {
            rb.push_evicting(i);
        }

        rb.sort_by(|a, b| a.cmp(b));
        assert_eq!(collect(&rb), vec![1, 3, 5, 7]);

        rb.reverse();
        assert_eq!(collect(&rb), vec![7, 5, 3, 1]);

        // 重排后淘汰仍然从队首开始
        assert_eq!(rb.push_evicting(0), Some(7));
    }

    #[test]
    fn test_iter_double_ended() {
        let mut rb = RingBuffer::with_capacity(3);
        for i in 0..5 {
            rb.push_evicting(i);
        }

        let reversed: Vec<_> = rb.iter().rev().copied().collect();
        assert_eq!(reversed, vec![4, 3, 2]);
        assert_eq!(rb.iter().len(), 3);
    }

    #[test]
    fn test_drain() {
        let mut rb = RingBuffer::with_capacity(4);

        rb.push(1).unwrap();
        rb.push(2).unwrap();
        rb.push(3).unwrap();

        let items: Vec<_> = rb.drain().collect();
        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(rb.len(), 0);
    }

    #[test]
    fn test_clear() {
        let mut rb = RingBuffer::with_capacity(4);

        rb.push(1).unwrap();
        rb.push(2).unwrap();
        rb.push(3).unwrap();

        rb.clear();
        assert_eq!(rb.len(), 0);
        assert!(rb.is_empty());

        rb.push(4).unwrap();
        assert_eq!(rb.pop(), Some(4));
    }
}
