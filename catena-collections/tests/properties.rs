//! Model-based property tests.
//!
//! Each container is driven by a random operation sequence alongside a
//! `Vec` or `VecDeque` model; every result and the final contents must
//! agree with the model.

use std::collections::VecDeque;

use catena_collections::{
    ArrayList, ArrayQueue, CircularList, DoublyCircularList, DoublyLinkedList, Error,
    LinkedList, LinkedQueue, LinkedStack, Result,
};
use proptest::prelude::*;

// =============================================================================
// Operation generators
// =============================================================================

#[derive(Debug, Clone)]
enum ListOp {
    PushFront(i16),
    PushBack(i16),
    Insert(usize, i16),
    InsertSorted(i16),
    PopFront,
    PopBack,
    Pop(usize),
    Remove(i16),
    At(usize),
    Clear,
}

fn list_ops() -> impl Strategy<Value = Vec<ListOp>> {
    // Small value and index ranges so finds, removals and bad indices hit.
    let value = -8i16..8;
    let index = 0usize..12;
    prop::collection::vec(
        prop_oneof![
            4 => value.clone().prop_map(ListOp::PushFront),
            4 => value.clone().prop_map(ListOp::PushBack),
            3 => (index.clone(), value.clone()).prop_map(|(i, v)| ListOp::Insert(i, v)),
            3 => value.clone().prop_map(ListOp::InsertSorted),
            2 => Just(ListOp::PopFront),
            2 => Just(ListOp::PopBack),
            2 => index.clone().prop_map(ListOp::Pop),
            2 => value.prop_map(ListOp::Remove),
            2 => index.prop_map(ListOp::At),
            1 => Just(ListOp::Clear),
        ],
        0..200,
    )
}

#[derive(Debug, Clone)]
enum QueueOp {
    Push(i32),
    Pop,
}

fn queue_ops() -> impl Strategy<Value = Vec<QueueOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => any::<i32>().prop_map(QueueOp::Push),
            2 => Just(QueueOp::Pop),
        ],
        0..300,
    )
}

// =============================================================================
// List model
// =============================================================================

/// Uniform view over the list-shaped containers.
trait ModelList: Sized {
    const REMOVE_FAILS_WHEN_EMPTY: bool;

    fn empty() -> Self;
    fn size(&self) -> usize;
    fn push_front_value(&mut self, value: i16) -> Result<()>;
    fn push_back_value(&mut self, value: i16) -> Result<()>;
    fn insert_value(&mut self, index: usize, value: i16) -> Result<()>;
    fn insert_sorted_value(&mut self, value: i16) -> Result<()>;
    fn pop_front_value(&mut self) -> Result<i16>;
    fn pop_back_value(&mut self) -> Result<i16>;
    fn pop_value(&mut self, index: usize) -> Result<i16>;
    fn remove_value(&mut self, value: &i16) -> Result<Option<i16>>;
    fn at_value(&self, index: usize) -> Result<&i16>;
    fn find_value(&self, value: &i16) -> usize;
    fn clear_all(&mut self);

    fn to_vec(&self) -> Vec<i16> {
        (0..self.size())
            .map(|i| *self.at_value(i).expect("index below len"))
            .collect()
    }
}

macro_rules! model_list {
    (@impl $ty:ty, $make:expr, $fails:expr, $remove:expr) => {
        impl ModelList for $ty {
            const REMOVE_FAILS_WHEN_EMPTY: bool = $fails;

            fn empty() -> Self {
                $make
            }
            fn size(&self) -> usize {
                self.len()
            }
            fn push_front_value(&mut self, value: i16) -> Result<()> {
                self.push_front(value)
            }
            fn push_back_value(&mut self, value: i16) -> Result<()> {
                self.push_back(value)
            }
            fn insert_value(&mut self, index: usize, value: i16) -> Result<()> {
                self.insert(index, value)
            }
            fn insert_sorted_value(&mut self, value: i16) -> Result<()> {
                self.insert_sorted(value)
            }
            fn pop_front_value(&mut self) -> Result<i16> {
                self.pop_front()
            }
            fn pop_back_value(&mut self) -> Result<i16> {
                self.pop_back()
            }
            fn pop_value(&mut self, index: usize) -> Result<i16> {
                self.pop(index)
            }
            fn remove_value(&mut self, value: &i16) -> Result<Option<i16>> {
                ($remove)(self, value)
            }
            fn at_value(&self, index: usize) -> Result<&i16> {
                self.at(index)
            }
            fn find_value(&self, value: &i16) -> usize {
                self.find(value)
            }
            fn clear_all(&mut self) {
                self.clear();
            }
        }
    };
    ($ty:ty, $make:expr, optional_remove) => {
        model_list!(@impl $ty, $make, false, |list: &mut $ty, value: &i16| Ok(list.remove(value)));
    };
    ($ty:ty, $make:expr, fallible_remove) => {
        model_list!(@impl $ty, $make, true, |list: &mut $ty, value: &i16| list.remove(value));
    };
}

model_list!(LinkedList<i16>, LinkedList::new(), optional_remove);
model_list!(DoublyLinkedList<i16>, DoublyLinkedList::new(), fallible_remove);
model_list!(CircularList<i16>, CircularList::new(), optional_remove);
model_list!(DoublyCircularList<i16>, DoublyCircularList::new(), optional_remove);
model_list!(ArrayList<i16>, ArrayList::new(1024), optional_remove);

fn out_of_range(index: usize, len: usize) -> Error {
    Error::IndexOutOfRange { index, len }
}

fn run_list_model<L: ModelList>(ops: &[ListOp]) -> std::result::Result<(), TestCaseError> {
    let mut list = L::empty();
    let mut model: Vec<i16> = Vec::new();

    for op in ops {
        match *op {
            ListOp::PushFront(v) => {
                prop_assert_eq!(list.push_front_value(v), Ok(()));
                model.insert(0, v);
            }
            ListOp::PushBack(v) => {
                prop_assert_eq!(list.push_back_value(v), Ok(()));
                model.push(v);
            }
            ListOp::Insert(i, v) => {
                if i > model.len() {
                    prop_assert_eq!(list.insert_value(i, v), Err(out_of_range(i, model.len())));
                } else {
                    prop_assert_eq!(list.insert_value(i, v), Ok(()));
                    model.insert(i, v);
                }
            }
            ListOp::InsertSorted(v) => {
                prop_assert_eq!(list.insert_sorted_value(v), Ok(()));
                let at = model.iter().position(|e| *e >= v).unwrap_or(model.len());
                model.insert(at, v);
            }
            ListOp::PopFront => {
                let expected = if model.is_empty() {
                    Err(Error::EmptyContainerAccess)
                } else {
                    Ok(model.remove(0))
                };
                prop_assert_eq!(list.pop_front_value(), expected);
            }
            ListOp::PopBack => {
                let expected = model.pop().ok_or(Error::EmptyContainerAccess);
                prop_assert_eq!(list.pop_back_value(), expected);
            }
            ListOp::Pop(i) => {
                let expected = if model.is_empty() {
                    Err(Error::EmptyContainerAccess)
                } else if i >= model.len() {
                    Err(out_of_range(i, model.len()))
                } else {
                    Ok(model.remove(i))
                };
                prop_assert_eq!(list.pop_value(i), expected);
            }
            ListOp::Remove(v) => {
                let expected = if model.is_empty() && L::REMOVE_FAILS_WHEN_EMPTY {
                    Err(Error::EmptyContainerAccess)
                } else {
                    Ok(model
                        .iter()
                        .position(|e| *e == v)
                        .map(|i| model.remove(i)))
                };
                prop_assert_eq!(list.remove_value(&v), expected);
            }
            ListOp::At(i) => {
                let expected = model.get(i).ok_or(out_of_range(i, model.len()));
                prop_assert_eq!(list.at_value(i), expected);
            }
            ListOp::Clear => {
                list.clear_all();
                model.clear();
            }
        }
        prop_assert_eq!(list.size(), model.len());
    }

    prop_assert_eq!(list.to_vec(), model.clone());
    for probe in -8i16..8 {
        let expected = model.iter().position(|e| *e == probe).unwrap_or(model.len());
        prop_assert_eq!(list.find_value(&probe), expected);
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_linked_list_matches_vec(ops in list_ops()) {
        run_list_model::<LinkedList<i16>>(&ops)?;
    }

    #[test]
    fn prop_doubly_linked_list_matches_vec(ops in list_ops()) {
        run_list_model::<DoublyLinkedList<i16>>(&ops)?;
    }

    #[test]
    fn prop_circular_list_matches_vec(ops in list_ops()) {
        run_list_model::<CircularList<i16>>(&ops)?;
    }

    #[test]
    fn prop_doubly_circular_list_matches_vec(ops in list_ops()) {
        run_list_model::<DoublyCircularList<i16>>(&ops)?;
    }

    #[test]
    fn prop_array_list_matches_vec(ops in list_ops()) {
        run_list_model::<ArrayList<i16>>(&ops)?;
    }
}

// =============================================================================
// Ordering and splitting
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_sorted_keeps_order(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut list: DoublyCircularList<i32> = DoublyCircularList::new();
        for v in &values {
            list.insert_sorted(*v).unwrap();
        }
        let mut sorted = values.clone();
        sorted.sort();
        let collected: Vec<i32> = (0..list.len()).map(|i| *list.at(i).unwrap()).collect();
        prop_assert_eq!(collected, sorted);
    }

    #[test]
    fn prop_halve_preserves_order(values in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut list: LinkedList<u8, u16> = LinkedList::new();
        for v in &values {
            list.push_back(*v).unwrap();
        }
        let (front, back) = list.halve();
        let split = values.len().div_ceil(2);
        prop_assert_eq!(front.len(), split);
        prop_assert_eq!(back.len(), values.len() - split);
        let rejoined: Vec<u8> = (0..front.len())
            .map(|i| *front.at(i).unwrap())
            .chain((0..back.len()).map(|i| *back.at(i).unwrap()))
            .collect();
        prop_assert_eq!(rejoined, values);
    }
}

// =============================================================================
// FIFO / LIFO laws
// =============================================================================

proptest! {
    #[test]
    fn prop_linked_queue_is_fifo(ops in queue_ops()) {
        let mut queue: LinkedQueue<i32> = LinkedQueue::new();
        let mut model = VecDeque::new();
        for op in ops {
            match op {
                QueueOp::Push(v) => {
                    queue.enqueue(v).unwrap();
                    model.push_back(v);
                }
                QueueOp::Pop => {
                    prop_assert_eq!(queue.dequeue().ok(), model.pop_front());
                }
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.front().ok(), model.front());
            prop_assert_eq!(queue.back().ok(), model.back());
        }
    }

    #[test]
    fn prop_linked_stack_is_lifo(ops in queue_ops()) {
        let mut stack: LinkedStack<i32> = LinkedStack::new();
        let mut model = Vec::new();
        for op in ops {
            match op {
                QueueOp::Push(v) => {
                    stack.push(v).unwrap();
                    model.push(v);
                }
                QueueOp::Pop => {
                    prop_assert_eq!(stack.pop().ok(), model.pop());
                }
            }
            prop_assert_eq!(stack.len(), model.len());
            prop_assert_eq!(stack.top().ok(), model.last());
        }
    }

    #[test]
    fn prop_array_queue_is_bounded_fifo(capacity in 1usize..16, ops in queue_ops()) {
        let mut queue: ArrayQueue<i32> = ArrayQueue::new(capacity);
        let mut model = VecDeque::new();
        for op in ops {
            match op {
                QueueOp::Push(v) => {
                    if model.len() == capacity {
                        prop_assert_eq!(queue.enqueue(v), Err(Error::CapacityExceeded { capacity }));
                    } else {
                        prop_assert_eq!(queue.enqueue(v), Ok(()));
                        model.push_back(v);
                    }
                }
                QueueOp::Pop => {
                    prop_assert_eq!(queue.dequeue().ok(), model.pop_front());
                }
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_full(), model.len() == capacity);
            prop_assert_eq!(queue.front().ok(), model.front());
            prop_assert_eq!(queue.back().ok(), model.back());
        }
    }

    #[test]
    fn prop_array_list_rejects_when_full(
        capacity in 0usize..8,
        values in prop::collection::vec(any::<i16>(), 0..16),
    ) {
        let mut list: ArrayList<i16> = ArrayList::new(capacity);
        for (i, v) in values.iter().enumerate() {
            let result = list.push_back(*v);
            if i < capacity {
                prop_assert_eq!(result, Ok(()));
            } else {
                prop_assert_eq!(result, Err(Error::CapacityExceeded { capacity }));
            }
        }
        prop_assert_eq!(list.len(), values.len().min(capacity));
        prop_assert_eq!(list.as_slice(), &values[..values.len().min(capacity)]);
    }
}
