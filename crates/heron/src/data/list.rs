//! Singly linked list with head and tail handles.
//!
//! Used as the FIFO frontier by the breadth-first algorithms in [`crate::alg`]. Nodes are shared
//! `Rc<RefCell<_>>` cells so the tail can be appended to in O(1) without unsafe code.

use crate::error::{Error, Result};
use std::cell::{Ref, RefCell};
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

type Link<T> = Option<Rc<RefCell<Node<T>>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self { value, next: None }))
    }
}

pub struct List<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, value: T) {
        let node = Node::new(value);
        node.borrow_mut().next = self.head.take();
        if self.tail.is_none() {
            self.tail = Some(node.clone());
        }
        self.head = Some(node);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let node = Node::new(value);
        match self.tail.take() {
            Some(tail) => {
                tail.borrow_mut().next = Some(node.clone());
            }
            None => self.head = Some(node.clone()),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head.take()?;
        self.head = head.borrow_mut().next.take();
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        into_value(head)
    }

    /// Removes the last element. O(n): the predecessor of the tail has to be found from the head.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len <= 1 {
            return self.pop_front();
        }
        let mut cur = self.head.clone()?;
        loop {
            let next = cur.borrow().next.clone();
            match next {
                Some(n) if n.borrow().next.is_some() => cur = n,
                _ => break,
            }
        }
        let last = cur.borrow_mut().next.take()?;
        self.tail = Some(cur);
        self.len -= 1;
        into_value(last)
    }

    pub fn front(&self) -> Option<Ref<'_, T>> {
        self.head
            .as_ref()
            .map(|n| Ref::map(n.borrow(), |n| &n.value))
    }

    pub fn back(&self) -> Option<Ref<'_, T>> {
        self.tail
            .as_ref()
            .map(|n| Ref::map(n.borrow(), |n| &n.value))
    }

    fn node_at(&self, index: usize) -> Option<Rc<RefCell<Node<T>>>> {
        let mut cur = self.head.clone();
        for _ in 0..index {
            cur = cur?.borrow().next.clone();
        }
        cur
    }

    fn check_index(&self, index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Inserts `value` so that it ends up at position `index` (`0..=len`).
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index, self.len + 1)?;
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == self.len {
            self.push_back(value);
            return Ok(());
        }
        let prev = self.node_at(index - 1).ok_or(Error::OutOfRange {
            index,
            len: self.len,
        })?;
        let node = Node::new(value);
        let mut p = prev.borrow_mut();
        node.borrow_mut().next = p.next.take();
        p.next = Some(node);
        self.len += 1;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index, self.len)?;
        if index == 0 {
            return self.pop_front().ok_or(Error::OutOfRange { index, len: 0 });
        }
        let out_of_range = Error::OutOfRange {
            index,
            len: self.len,
        };
        let prev = self.node_at(index - 1).ok_or(out_of_range.clone())?;
        let target = prev.borrow_mut().next.take().ok_or(out_of_range.clone())?;
        let after = target.borrow_mut().next.take();
        let was_tail = after.is_none();
        prev.borrow_mut().next = after;
        if was_tail {
            self.tail = Some(prev);
        }
        self.len -= 1;
        into_value(target).ok_or(out_of_range)
    }

    /// Position of the first element matching `pred`.
    pub fn position(&self, mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
        let mut cur = self.head.clone();
        let mut index = 0;
        while let Some(node) = cur {
            let n = node.borrow();
            if pred(&n.value) {
                return Some(index);
            }
            cur = n.next.clone();
            index += 1;
        }
        None
    }

    pub fn contains(&self, pred: impl FnMut(&T) -> bool) -> bool {
        self.position(pred).is_some()
    }

    /// Removes and returns the first element matching `pred`.
    pub fn remove_first(&mut self, pred: impl FnMut(&T) -> bool) -> Option<T> {
        let index = self.position(pred)?;
        self.remove(index).ok()
    }

    pub fn for_each(&self, mut f: impl FnMut(&T)) {
        let mut cur = self.head.clone();
        while let Some(node) = cur {
            let n = node.borrow();
            f(&n.value);
            cur = n.next.clone();
        }
    }

    pub fn clear(&mut self) {
        self.tail = None;
        let mut cur = self.head.take();
        while let Some(node) = cur {
            cur = node.borrow_mut().next.take();
        }
        self.len = 0;
    }
}

impl<T: Clone> List<T> {
    pub fn get(&self, index: usize) -> Result<T> {
        self.check_index(index, self.len)?;
        self.node_at(index)
            .map(|n| n.borrow().value.clone())
            .ok_or(Error::OutOfRange {
                index,
                len: self.len,
            })
    }

    pub fn find(&self, pred: impl FnMut(&T) -> bool) -> Option<T> {
        let index = self.position(pred)?;
        self.get(index).ok()
    }

    /// Iterates over clones of the current elements, front to back.
    ///
    /// The iterator borrows the list, so the list cannot be mutated while it is alive.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.clone(),
            _list: PhantomData,
        }
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

/// Takes the value out of a node that callers have already detached from `head`, `tail` and its
/// predecessor. `None` means another handle to the node is still alive.
fn into_value<T>(node: Rc<RefCell<Node<T>>>) -> Option<T> {
    let cell = Rc::try_unwrap(node).ok();
    debug_assert!(cell.is_some(), "detached list node still has other owners");
    Some(cell?.into_inner().value)
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        // Unlink iteratively so long lists do not recurse on drop.
        self.clear();
    }
}

pub struct Iter<'a, T> {
    next: Link<T>,
    _list: PhantomData<&'a List<T>>,
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.next.take()?;
        let n = node.borrow();
        self.next = n.next.clone();
        Some(n.value.clone())
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_list();
        self.for_each(|v| {
            out.entry(v);
        });
        out.finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::with_capacity(self.len);
        self.for_each(|v| parts.push(v.to_string()));
        write!(f, "[{}]", parts.join(", "))
    }
}
