#![cfg(feature = "std")]

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use container_view::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_pair_and_tuples() {
    assert_eq!((1, 2.5).view().to_string(), "(1, 2.5)");
    assert_eq!((1, 'a', 2.3).view().to_string(), "(1, a, 2.3)");
    assert_eq!(().view().to_string(), "()");
    assert_eq!((7,).view().to_string(), "(7)");
    assert_eq!(
        (1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12).view().to_string(),
        "(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12)"
    );
}

#[test]
fn test_tuple_with_containers() {
    let value = (vec![1, 2], "tag", (3, 4));
    assert_eq!(value.view().to_string(), "([1, 2], tag, (3, 4))");
}

#[test]
fn test_priority_queue_drains_highest_first() {
    let heap: BinaryHeap<i32> = [4, 5, 4, 1].into_iter().collect();
    assert_eq!(heap.view().to_string(), "[5, 4, 4, 1]");
}

#[test]
fn test_min_priority_queue() {
    let heap: BinaryHeap<Reverse<i32>> = [4, 5, 4, 1].into_iter().map(Reverse).collect();
    assert_eq!(heap.view().to_string(), "[1, 4, 4, 5]");
}

#[test]
fn test_stack_drains_top_first() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.view().to_string(), "[3, 2, 1]");
}

#[test]
fn test_queue_drains_front_first() {
    let queue: Queue<&str> = ["first", "second", "third"].into_iter().collect();
    assert_eq!(queue.view().to_string(), "[first, second, third]");
}

#[test]
fn test_draining_is_non_destructive() {
    let heap: BinaryHeap<i32> = [3, 1, 2].into_iter().collect();
    let stack: Stack<i32> = [1, 2].into_iter().collect();
    let queue: Queue<i32> = [1, 2].into_iter().collect();

    let heap_before = heap.clone().into_sorted_vec();
    let stack_before = stack.clone();
    let queue_before = queue.clone();

    // Rendering twice yields the same text.
    assert_eq!(heap.view().to_string(), heap.view().to_string());
    assert_eq!(stack.view().to_string(), stack.view().to_string());
    assert_eq!(queue.view().to_string(), queue.view().to_string());

    assert_eq!(heap.into_sorted_vec(), heap_before);
    assert_eq!(stack, stack_before);
    assert_eq!(queue, queue_before);
}

#[test]
fn test_empty_drained_shapes() {
    assert_eq!(Stack::<u8>::new().view().to_string(), "[]");
    assert_eq!(Queue::<u8>::new().view().to_string(), "[]");
    assert_eq!(BinaryHeap::<u8>::new().view().to_string(), "[]");
}

#[test]
fn test_nested_special_shapes() {
    let stacks = vec![Stack::from(vec![1, 2]), Stack::from(vec![3])];
    assert_eq!(stacks.view().to_string(), "[[2, 1], [3]]");

    let mut queue = Queue::new();
    queue.push((1, 'a'));
    queue.push((2, 'b'));
    assert_eq!(queue.view().to_string(), "[(1, a), (2, b)]");
}
