use crate::error;
use crate::lang::Error;
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

/// ## FIFO enforced queue
///
/// Values enter at the back and leave from the front.
/// At most the front two values can be observed without draining.

pub struct Queue<T> {
    deque: VecDeque<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.deque)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Queue<T> {
        Queue::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Queue<T> {
        Queue {
            deque: VecDeque::new(),
        }
    }
    fn underflow_error(&self) -> Error {
        error!(NotEnoughArguments)
    }
    pub fn clear(&mut self) {
        self.deque.clear()
    }
    pub fn len(&self) -> usize {
        self.deque.len()
    }
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.deque.iter()
    }
    pub fn push(&mut self, val: T) {
        self.deque.push_back(val)
    }
    pub fn front(&self) -> Result<&T> {
        match self.deque.front() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    pub fn front_2(&self) -> Result<(&T, &T)> {
        match (self.deque.get(0), self.deque.get(1)) {
            (Some(one), Some(two)) => Ok((one, two)),
            _ => Err(self.underflow_error()),
        }
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.deque.pop_front() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        if self.deque.len() < 2 {
            return Err(self.underflow_error());
        }
        let one = self.pop()?;
        let two = self.pop()?;
        Ok((one, two))
    }
    /// Empty the queue front to back.
    pub fn drain(&mut self) -> Vec<T> {
        self.deque.drain(..).collect()
    }
    pub fn append(&mut self, vals: Vec<T>) {
        self.deque.extend(vals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut q = Queue::new();
        q.push(1);
        q.push(2);
        q.push(3);
        assert_eq!(q.pop(), Ok(1));
        assert_eq!(q.front_2(), Ok((&2, &3)));
        assert_eq!(q.pop_2(), Ok((2, 3)));
        assert!(q.is_empty());
    }

    #[test]
    fn test_underflow_leaves_queue_untouched() {
        let mut q = Queue::new();
        q.push("only");
        assert!(q.pop_2().is_err());
        assert!(q.front_2().is_err());
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn test_drain_and_append() {
        let mut q = Queue::new();
        q.append(vec![1, 2, 3]);
        let mut v = q.drain();
        assert!(q.is_empty());
        v.reverse();
        q.append(v);
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }
}
