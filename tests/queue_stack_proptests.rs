use proptest::prelude::*;
use rw_collections::{SyncQueue, SyncStack};
use std::collections::VecDeque;

#[derive(Clone, Debug)]
enum Op {
    Put(u16),
    Take,
    Peek,
    Values,
    Clear,
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        5 => any::<u16>().prop_map(Op::Put),
        4 => Just(Op::Take),
        2 => Just(Op::Peek),
        2 => Just(Op::Values),
        1 => Just(Op::Clear),
    ];
    proptest::collection::vec(op, 1..100)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    // Property: SyncQueue is a VecDeque used from the front; peek and
    // values are non-destructive and values lists head to tail.
    #[test]
    fn prop_queue_is_fifo(ops in arb_ops()) {
        let sut = SyncQueue::new();
        let mut model: VecDeque<u16> = VecDeque::new();
        for op in ops {
            match op {
                Op::Put(v) => {
                    sut.enqueue(v);
                    model.push_back(v);
                }
                Op::Take => prop_assert_eq!(sut.dequeue(), model.pop_front()),
                Op::Peek => {
                    prop_assert_eq!(sut.peek(), model.front().copied());
                    prop_assert_eq!(sut.peek(), model.front().copied());
                }
                Op::Values => {
                    let expected: Vec<u16> = model.iter().copied().collect();
                    prop_assert_eq!(sut.values(), expected.clone());
                    prop_assert_eq!(sut.values(), expected);
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }
    }

    // Property: SyncStack is a Vec used from the back; values lists top
    // to bottom.
    #[test]
    fn prop_stack_is_lifo(ops in arb_ops()) {
        let sut = SyncStack::new();
        let mut model: Vec<u16> = Vec::new();
        for op in ops {
            match op {
                Op::Put(v) => {
                    sut.push(v);
                    model.push(v);
                }
                Op::Take => prop_assert_eq!(sut.pop(), model.pop()),
                Op::Peek => {
                    prop_assert_eq!(sut.peek(), model.last().copied());
                    prop_assert_eq!(sut.peek(), model.last().copied());
                }
                Op::Values => {
                    let expected: Vec<u16> = model.iter().rev().copied().collect();
                    prop_assert_eq!(sut.values(), expected.clone());
                    prop_assert_eq!(sut.values(), expected);
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }
    }

    // Property: draining a queue returns exactly the enqueued sequence;
    // draining a stack returns it reversed.
    #[test]
    fn prop_drain_order(items in proptest::collection::vec(any::<i64>(), 0..50)) {
        let q: SyncQueue<i64> = items.iter().copied().collect();
        let s: SyncStack<i64> = items.iter().copied().collect();
        let drained_q: Vec<i64> = std::iter::from_fn(|| q.dequeue()).collect();
        let drained_s: Vec<i64> = std::iter::from_fn(|| s.pop()).collect();
        let mut reversed = items.clone();
        reversed.reverse();
        prop_assert_eq!(drained_q, items);
        prop_assert_eq!(drained_s, reversed);
    }
}
