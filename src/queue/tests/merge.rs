extern crate std;

use std::vec;
use std::vec::Vec;

use alloc::string::String;

use crate::queue::Queue;
use crate::queue::merge::ContextList;

fn sorted_queue(vals: &[&str]) -> Queue {
    let mut q = Queue::new();
    for v in vals {
        q.insert_tail(v);
    }
    q
}

fn first_contents(contexts: &ContextList) -> Vec<String> {
    contexts
        .iter()
        .next()
        .map(|ctx| ctx.queue().values().map(String::from).collect())
        .unwrap_or_default()
}

#[test]
fn test_push_and_len() {
    let mut contexts = ContextList::new();
    assert!(contexts.is_empty());
    assert_eq!(contexts.len(), 0);

    contexts.push(sorted_queue(&["a"]));
    contexts.push(sorted_queue(&["b"]));
    assert!(!contexts.is_empty());
    assert_eq!(contexts.len(), 2);

    assert_eq!(contexts.first_mut().unwrap().size(), 1);
}

#[test]
fn test_contexts_iterate_in_push_order() {
    let mut contexts = ContextList::new();
    contexts.push(sorted_queue(&["a"]));
    contexts.push(sorted_queue(&["b", "c"]));

    let sizes: Vec<usize> = contexts.iter().map(|ctx| ctx.queue().size()).collect();
    assert_eq!(sizes, vec![1, 2]);
}

#[test]
fn test_merge_three_sorted_queues() {
    let mut contexts = ContextList::new();
    contexts.push(sorted_queue(&["a", "c", "e"]));
    contexts.push(sorted_queue(&["b", "d"]));
    contexts.push(sorted_queue(&["f"]));

    assert_eq!(contexts.merge(false), 6);
    assert_eq!(first_contents(&contexts), vec!["a", "b", "c", "d", "e", "f"]);

    // Every queue after the first ends empty, but stays chained.
    assert_eq!(contexts.len(), 3);
    for ctx in contexts.iter().skip(1) {
        assert!(ctx.queue().is_empty());
    }
}

#[test]
fn test_merge_descending() {
    let mut contexts = ContextList::new();
    contexts.push(sorted_queue(&["e", "c", "a"]));
    contexts.push(sorted_queue(&["d", "b"]));

    assert_eq!(contexts.merge(true), 5);
    assert_eq!(first_contents(&contexts), vec!["e", "d", "c", "b", "a"]);
}

#[test]
fn test_merge_single_context_is_a_noop() {
    let mut contexts = ContextList::new();
    contexts.push(sorted_queue(&["a", "b"]));

    assert_eq!(contexts.merge(false), 2);
    assert_eq!(first_contents(&contexts), vec!["a", "b"]);
}

#[test]
fn test_merge_empty_chain() {
    let mut contexts = ContextList::new();
    assert_eq!(contexts.merge(false), 0);
}

#[test]
fn test_merge_tolerates_empty_queues() {
    let mut contexts = ContextList::new();
    contexts.push(Queue::new());
    contexts.push(sorted_queue(&["b", "c"]));
    contexts.push(Queue::new());
    contexts.push(sorted_queue(&["a"]));

    assert_eq!(contexts.merge(false), 3);
    assert_eq!(first_contents(&contexts), vec!["a", "b", "c"]);
}

#[test]
fn test_merge_with_duplicate_values() {
    let mut contexts = ContextList::new();
    contexts.push(sorted_queue(&["a", "b", "b"]));
    contexts.push(sorted_queue(&["b", "c"]));

    assert_eq!(contexts.merge(false), 5);
    assert_eq!(first_contents(&contexts), vec!["a", "b", "b", "b", "c"]);
}

#[test]
fn test_merge_many_queues() {
    let mut contexts = ContextList::new();
    let mut total = 0;
    for i in 0..8 {
        let mut q = Queue::new();
        for j in 0..5 {
            q.insert_tail(&alloc::format!("k{}{}", j, i));
        }
        total += 5;
        contexts.push(q);
    }

    assert_eq!(contexts.merge(false), total);

    let merged = first_contents(&contexts);
    assert_eq!(merged.len(), total);
    assert!(merged.windows(2).all(|w| w[0] <= w[1]));
}
