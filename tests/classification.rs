//! Every type resolves to exactly one shape, known at compile time.

#![cfg(all(feature = "std", feature = "detect"))]

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::num::NonZeroU8;
use std::rc::Rc;

use container_view::{detect, shape_of, Probes, Queue, Render, Shape, SpecialKind, Stack};

#[derive(Render)]
struct Point {
    x: i32,
    y: i32,
}

// Classification is usable in const context.
const MAP_SHAPE: Shape = shape_of::<BTreeMap<u8, u8>>();

#[test]
fn test_native_shapes() {
    assert_eq!(shape_of::<i32>(), Shape::Native);
    assert_eq!(shape_of::<str>(), Shape::Native);
    assert_eq!(shape_of::<String>(), Shape::Native);
    assert_eq!(shape_of::<NonZeroU8>(), Shape::Native);
    assert_eq!(shape_of::<std::net::Ipv4Addr>(), Shape::Native);
}

#[test]
fn test_structural_shapes() {
    assert_eq!(MAP_SHAPE, Shape::KeyValue);
    assert_eq!(shape_of::<HashMap<String, i32>>(), Shape::KeyValue);
    assert_eq!(shape_of::<BTreeSet<(u8, u8)>>(), Shape::KeyValue);
    assert_eq!(shape_of::<Vec<i32>>(), Shape::Sequence);
    assert_eq!(shape_of::<VecDeque<i32>>(), Shape::Sequence);
    assert_eq!(shape_of::<LinkedList<i32>>(), Shape::Sequence);
    assert_eq!(shape_of::<HashSet<i32>>(), Shape::Sequence);
    assert_eq!(shape_of::<BTreeSet<i32>>(), Shape::Sequence);
    assert_eq!(shape_of::<[i32; 3]>(), Shape::Sequence);
    assert_eq!(shape_of::<Vec<(i32, i32)>>(), Shape::Sequence);
    assert_eq!(shape_of::<Point>(), Shape::Record(2));
}

#[test]
fn test_special_shapes_win() {
    assert_eq!(shape_of::<(i32, f64)>(), Shape::Special(SpecialKind::Pair));
    assert_eq!(shape_of::<(i32, char, f64)>(), Shape::Special(SpecialKind::Tuple));
    assert_eq!(shape_of::<Queue<i32>>(), Shape::Special(SpecialKind::Queue));
    assert_eq!(shape_of::<Stack<i32>>(), Shape::Special(SpecialKind::Stack));
    // Traversable, but drained by priority.
    assert_eq!(shape_of::<BinaryHeap<i32>>(), Shape::Special(SpecialKind::PriorityQueue));
    assert!(shape_of::<BinaryHeap<Reverse<i32>>>().is_drained());
}

#[test]
fn test_indirection_is_transparent() {
    assert_eq!(shape_of::<&Vec<i32>>(), shape_of::<Vec<i32>>());
    assert_eq!(shape_of::<Box<Point>>(), Shape::Record(2));
    assert_eq!(shape_of::<Rc<str>>(), Shape::Native);
    assert_eq!(shape_of::<Reverse<u8>>(), Shape::Native);
}

#[test]
fn test_shape_display() {
    assert_eq!(Shape::Record(3).to_string(), "record/3");
    assert_eq!(Shape::Special(SpecialKind::PriorityQueue).to_string(), "special:priority-queue");
}

#[test]
fn test_detection_agrees_with_registration() {
    assert_eq!(detect!(i32), Probes::of::<i32>());
    assert_eq!(detect!(String), Probes::of::<String>());
    assert_eq!(detect!(Vec<u8>), Probes::of::<Vec<u8>>());
    assert_eq!(detect!(Vec<(u8, u8)>), Probes::of::<Vec<(u8, u8)>>());
    assert_eq!(detect!(BTreeSet<u8>), Probes::of::<BTreeSet<u8>>());
    assert_eq!(detect!(BTreeMap<char, i32>), Probes::of::<BTreeMap<char, i32>>());
    assert_eq!(detect!(HashMap<char, i32>), Probes::of::<HashMap<char, i32>>());
    assert_eq!(detect!(Point), Probes::of::<Point>());
}

#[test]
fn test_detection_of_adapters() {
    // Queue and Stack hide traversal.
    assert!(!detect!(Queue<i32>: traversable));
    assert!(!detect!(Stack<i32>: traversable));
    assert!(detect!(BinaryHeap<i32>: traversable));
    assert!(detect!(BTreeMap<u8, u8>: keyed));
    assert!(detect!(BTreeMap<u8, u8>: pair_elements));
}
