use linked_containers::{ContainerError, DoublyLinkedList, Queue, Stack};

#[test]
fn list_len_tracks_successful_operations() {
    let mut list = DoublyLinkedList::new();
    let mut expected: usize = 0;
    for i in 0..50 {
        match i % 5 {
            0 | 1 => {
                list.push_back(i);
                expected += 1;
            }
            2 => {
                list.push_front(i);
                expected += 1;
            }
            3 => {
                if list.pop_back().is_some() {
                    expected -= 1;
                }
            }
            _ => {
                if list.remove_at(list.len() / 2).is_ok() {
                    expected -= 1;
                }
            }
        }
        assert_eq!(list.len(), expected);
        assert_eq!(list.iter().count(), expected);
        assert_eq!(list.iter().rev().count(), expected);
    }
}

#[test]
fn list_forward_order_and_pop_front() {
    let mut list = DoublyLinkedList::new();
    list.push_back("a");
    list.push_back("b");
    list.push_back("c");
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    list.pop_front();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["b", "c"]);
}

#[test]
fn list_insert_at_len_matches_push_back() {
    let mut inserted = DoublyLinkedList::from([1, 2, 3]);
    let mut pushed = inserted.clone();
    let n = inserted.len();
    inserted.insert_at(4, n).unwrap();
    pushed.push_back(4);
    assert_eq!(inserted, pushed);
    assert_eq!(inserted.len(), n + 1);
    assert_eq!(inserted.get(n), Ok(&4));
}

#[test]
fn list_range_and_empty_errors() {
    let list = DoublyLinkedList::from([1, 2, 3]);
    let len = list.len();
    assert!(matches!(list.get(len), Err(ContainerError::OutOfRange { .. })));
    assert!(matches!(list.at(0), Err(ContainerError::OutOfRange { .. })));
    assert!(matches!(list.at(len + 1), Err(ContainerError::OutOfRange { .. })));
    assert_eq!(list.at(len), Ok(&3));

    let mut empty: DoublyLinkedList<i32> = DoublyLinkedList::new();
    assert_eq!(empty.first(), Err(ContainerError::Empty));
    assert_eq!(empty.last(), Err(ContainerError::Empty));
    assert_eq!(empty.get(0), Err(ContainerError::Empty));
    assert_eq!(empty.at(1), Err(ContainerError::Empty));
    assert_eq!(empty.remove_at(0), Err(ContainerError::Empty));
    assert_eq!(empty.pop_front(), None);
}

#[test]
fn list_failed_operations_leave_list_unchanged() {
    let mut list = DoublyLinkedList::from([1, 2, 3]);
    assert!(list.insert_at(0, 10).is_err());
    assert!(list.remove_at(3).is_err());
    assert!(list.get_mut(7).is_err());
    assert_eq!(list.to_string(), "[1, 2, 3]");
}

#[test]
fn list_cursor_round_trip() {
    let list: DoublyLinkedList<u8> = (1..=4).collect();
    let mut cursor = list.begin();
    for _ in 0..list.len() {
        cursor.move_next();
    }
    assert_eq!(cursor, list.end());
    cursor.move_prev();
    assert_eq!(cursor.current(), list.last().ok());
}

#[test]
fn list_copy_then_mutate_both_ways() {
    let mut original = DoublyLinkedList::from([String::from("x"), String::from("y")]);
    let mut copy = original.clone();
    copy.push_back(String::from("z"));
    assert_eq!(original.len(), 2);

    original[0].push('!');
    assert_eq!(copy[0], "x");

    let mut assigned = DoublyLinkedList::new();
    assigned.clone_from(&original);
    assigned.clear();
    assert_eq!(original.to_string(), "[x!, y]");
}

#[test]
fn queue_fifo_contract() {
    let mut queue = Queue::new();
    queue.push(1);
    queue.push(2);
    queue.push(3);
    assert_eq!(queue.front(), Ok(&1));
    assert_eq!(queue.last(), Ok(&3));
    let drained: Vec<_> = std::iter::from_fn(|| queue.pop().ok()).collect();
    assert_eq!(drained, vec![1, 2, 3]);
    assert_eq!(queue.pop(), Err(ContainerError::Empty));
    assert_eq!(queue.front(), Err(ContainerError::Empty));
    assert_eq!(queue.get(0), Err(ContainerError::Empty));
}

#[test]
fn queue_copy_is_independent() {
    let original = Queue::from([1, 2, 3]);
    let mut copy = original.clone();
    assert_eq!(copy, original);
    copy.pop().unwrap();
    assert_ne!(copy, original);
    assert_eq!(original.len(), 3);
    assert_eq!(original.get(2), Ok(&3));
    assert!(matches!(original.get(3), Err(ContainerError::OutOfRange { pos: 3, len: 3 })));
}

#[test]
fn stack_lifo_contract() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.top(), Ok(&3));
    assert_eq!(stack.tail(), Ok(&1));
    stack.pop().unwrap();
    assert_eq!(stack.top(), Ok(&2));
    assert_eq!(stack.tail(), Ok(&1));
    stack.pop().unwrap();
    assert_eq!(stack.tail(), Ok(&1));
    stack.pop().unwrap();
    assert_eq!(stack.pop(), Err(ContainerError::Empty));
    assert_eq!(stack.tail(), Err(ContainerError::Empty));
}

#[test]
fn stack_sequence_order_is_top_to_bottom() {
    let stack: Stack<_> = ["first", "second", "third"].into_iter().collect();
    assert_eq!(stack.top(), Ok(&"first"));
    assert_eq!(stack.get(1), Ok(&"second"));
    assert_eq!(stack.to_string(), "[first, second, third]");
}

#[test]
fn clear_is_idempotent_everywhere() {
    let mut list = DoublyLinkedList::from([1]);
    let mut queue = Queue::from([1]);
    let mut stack = Stack::from([1]);
    for _ in 0..2 {
        list.clear();
        queue.clear();
        stack.clear();
    }
    assert!(list.is_empty() && queue.is_empty() && stack.is_empty());
}

#[test]
fn rendering_to_a_sink() {
    use std::fmt::Write;

    let mut out = String::new();
    write!(out, "{}", DoublyLinkedList::from([1.5, 2.0])).unwrap();
    write!(out, " {}", Queue::<i32>::new()).unwrap();
    assert_eq!(out, "[1.5, 2] []");
}
