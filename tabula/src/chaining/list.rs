//! Owned singly-linked chain of the keys that hash to one table slot.
use std::fmt;

/// A single link of a [`Chain`], holding one key occurrence.
struct Node {
    key: String,
    next: Option<Box<Node>>,
}

/// The keys of one slot, linked in most-recently-inserted-first order.
///
/// The chain owns its head node and every node owns the link to its successor, so each link
/// has exactly one owner and unlinking a node is a matter of reassigning its predecessor's
/// link (or the head, for the first node).
pub struct Chain {
    head: Option<Box<Node>>,
    len: usize,
}

impl Chain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Get the number of keys in the chain.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the chain holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Links a key at the head of the chain.
    ///
    /// Duplicates are allowed; every call adds a node.
    pub fn push(&mut self, key: String) {
        let node = Box::new(Node {
            key,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Finds the first node whose key equals `key` and returns its key.
    pub fn find(&self, key: &str) -> Option<&str> {
        self.iter().find(|&candidate| candidate == key)
    }

    /// Unlinks the first node whose key equals `key` and returns its key.
    ///
    /// Later occurrences of an equal key stay in place.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        if self.head.as_ref()?.key == key {
            let mut node = self.head.take()?;
            self.head = node.next.take();
            self.len -= 1;
            return Some(node.key);
        }

        let mut prev = self.head.as_mut()?;
        loop {
            if prev.next.as_ref().is_some_and(|node| node.key == key) {
                let mut node = prev.next.take()?;
                prev.next = node.next.take();
                self.len -= 1;
                return Some(node.key);
            }
            prev = prev.next.as_mut()?;
        }
    }

    /// Iterates over the keys in chain order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            current: self.head.as_deref(),
        }
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

/// Unlinks iteratively so that dropping a long chain cannot overflow the stack.
impl Drop for Chain {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over the keys of a [`Chain`].
pub struct Iter<'a> {
    current: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        self.current = node.next.as_deref();
        Some(node.key.as_str())
    }
}
