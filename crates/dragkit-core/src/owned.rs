use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a value that drag handlers write into while the host
/// dispatches.
///
/// Clones point at the same value. Handlers run synchronously on one thread,
/// so a `RefCell` is enough; a closure must not reach the same `Owned` again
/// from inside `with` or `update`.
pub struct Owned<T> {
    cell: Rc<RefCell<T>>,
}

impl<T> Owned<T> {
    pub fn new(value: T) -> Self {
        Self {
            cell: Rc::new(RefCell::new(value)),
        }
    }

    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.cell.borrow())
    }

    pub fn update<R>(&self, write: impl FnOnce(&mut T) -> R) -> R {
        write(&mut self.cell.borrow_mut())
    }
}

impl<T: Clone> Owned<T> {
    /// Copy of the current value.
    pub fn get(&self) -> T {
        self.with(T::clone)
    }
}

impl<T> Clone for Owned<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Default> Default for Owned<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_through_a_clone_are_visible() {
        let log = Owned::new(Vec::<u32>::new());
        let writer = log.clone();
        writer.update(|entries| entries.push(7));
        assert_eq!(log.get(), vec![7]);
        assert_eq!(log.with(Vec::len), 1);
    }
}
