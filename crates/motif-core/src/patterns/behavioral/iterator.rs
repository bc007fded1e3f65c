//! Iterator: a hand-rolled cursor over a sequence, surfaced through the
//! standard `Iterator` trait so it works with `for` like any other.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

struct ListCursor<T> {
    items: Vec<T>,
    position: usize,
}

impl<T> ListCursor<T> {
    fn new(items: Vec<T>) -> Self {
        Self { items, position: 0 }
    }
}

impl<T: Clone> Iterator for ListCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.position).cloned()?;
        self.position += 1;
        Some(item)
    }
}

pub struct IteratorDemo;

impl Demo for IteratorDemo {
    fn name(&self) -> &str {
        "iterator"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        for item in ListCursor::new(vec!["a", "b", "c"]) {
            out.line(item)?;
        }
        Ok(())
    }
}
