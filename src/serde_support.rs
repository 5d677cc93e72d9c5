use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::{DoublyLinkedList, Queue, Stack};

// 三种容器都按各自的遍历顺序序列化为一个序列
fn serialize_items<'a, S, T, I>(serializer: S, len: usize, items: I) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seq = serializer.serialize_seq(Some(len))?;
    for item in items {
        seq.serialize_element(item)?;
    }
    seq.end()
}

impl<T: Serialize> Serialize for DoublyLinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_items(serializer, self.len(), self.iter())
    }
}

impl<T: Serialize> Serialize for Queue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_items(serializer, self.len(), self.iter())
    }
}

/// 从栈顶到栈底
impl<T: Serialize> Serialize for Stack<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_items(serializer, self.len(), self.iter())
    }
}

/// 先按序列顺序收集，再交给目标容器的 `FromIterator`，方向与序列化时一致
struct SeqVisitor<C, T> {
    marker: PhantomData<fn() -> (C, T)>,
}

impl<C, T> SeqVisitor<C, T> {
    fn new() -> Self {
        SeqVisitor {
            marker: PhantomData,
        }
    }
}

impl<'de, C, T> Visitor<'de> for SeqVisitor<C, T>
where
    T: Deserialize<'de>,
    C: FromIterator<T>,
{
    type Value = C;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<C, A::Error> {
        let mut items = DoublyLinkedList::new();
        while let Some(item) = seq.next_element()? {
            items.push_back(item);
        }
        Ok(items.into_iter().collect())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DoublyLinkedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SeqVisitor::new())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Queue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SeqVisitor::new())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Stack<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SeqVisitor::new())
    }
}
