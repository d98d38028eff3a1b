use std::cell::Cell;
use std::rc::Rc;

/// A shared counter for asserting how many times a closure was invoked. Clones share the same
/// count, so a clone can be moved into the closure under test.
#[derive(Debug, Default, Clone)]
pub struct CallCounter(pub Rc<Cell<usize>>);

impl CallCounter {
    pub fn new() -> CallCounter {
        CallCounter(Rc::new(Cell::new(0)))
    }

    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}

/// Increments the shared [`CallCounter`] when dropped, used to check that short-circuiting
/// combinators move their payloads through rather than dropping and rebuilding them.
#[derive(Debug)]
pub struct CountedDrop(pub CallCounter);

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.hit();
    }
}
