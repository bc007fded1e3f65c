//! Composite: a tree of groups and leaves, where one operation on the
//! root walks the whole structure.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

enum Node {
    Leaf,
    Group(Vec<Node>),
}

impl Node {
    fn group() -> Node {
        Node::Group(Vec::new())
    }

    fn add(&mut self, child: Node) {
        if let Node::Group(children) = self {
            children.push(child);
        }
    }

    fn operation(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        match self {
            Node::Leaf => out.line("do some work from leaf"),
            Node::Group(children) => {
                out.line("do some work from composite")?;
                for child in children {
                    child.operation(out)?;
                }
                Ok(())
            }
        }
    }
}

pub struct CompositeDemo;

impl Demo for CompositeDemo {
    fn name(&self) -> &str {
        "composite"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let mut root = Node::group();
        root.add(Node::Leaf);

        let mut inner = Node::group();
        inner.add(Node::group());
        inner.add(Node::Leaf);

        root.add(inner);
        root.operation(out)
    }
}
