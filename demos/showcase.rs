//! Renders one value of every std container.
//!
//! ```text
//! cargo run --example showcase
//! ```

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

use container_view::prelude::*;

#[derive(Render)]
struct Point {
    x: i32,
    y: i32,
}

fn main() {
    println!("Pair: {}", (1, 3.5).view());
    println!("Tuple: {}", (1, 'a', 2.3).view());
    println!("Array: {}", [1, 2, 3].view());
    println!("Deque: {}", VecDeque::from([1.1, 2.2, 3.3]).view());
    println!("List: {}", LinkedList::from([1, 2, 3]).view());
    println!("Vector: {}", vec!["hello", "world"].view());

    let set: BTreeSet<&str> = ["apple", "banana", "cherry"].into_iter().collect();
    println!("Set: {}", set.view());

    let uset: HashSet<i32> = [4, 5, 6, 7].into_iter().collect();
    println!("Unordered Set: {}", uset.view());

    println!("Map: {}", BTreeMap::from([('a', 1), ('b', 2)]).view());
    println!("Multimap: {}", BTreeMap::from([('a', vec![1, 2])]).view());
    println!("Unordered Map: {}", HashMap::from([('c', 3), ('b', 2)]).view());

    let heap: BinaryHeap<i32> = [4, 5, 4, 1].into_iter().collect();
    println!("Priority Queue: {}", heap.view());

    let stack: Stack<i32> = [1, 2, 3].into_iter().collect();
    println!("Stack: {}", stack.view());

    let queue: Queue<i32> = [1, 2, 3].into_iter().collect();
    println!("Queue: {}", queue.view());

    println!("Record: {}", Point { x: 3, y: 4 }.view());
    println!("Nested: {}", vec![vec![0, 1, 2], vec![0, 1], vec![0]].view());
}
