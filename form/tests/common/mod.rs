#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::BTreeSet,
    rc::Rc,
    time::Duration,
};

use comment_form::{
    CommentRecord, ControllerError, Element, Field, Page, Scheduler, COMMENT_HIDDEN_CLASS,
};

#[derive(Debug, Clone, Default)]
pub struct Node(Rc<RefCell<BTreeSet<String>>>);

impl Node {
    pub fn with_classes(classes: &[&str]) -> Self {
        let node = Self::default();
        for class in classes {
            node.add_class(class);
        }
        node
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().contains(class)
    }
}

impl Element for Node {
    fn add_class(&self, class: &str) {
        self.0.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().remove(class);
    }
}

#[derive(Debug, Clone)]
pub struct MemoryField {
    name: String,
    value: Rc<RefCell<String>>,
    container: Option<Node>,
}

impl MemoryField {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: Rc::new(RefCell::new(value.to_string())),
            container: Some(Node::with_classes(&["form-input"])),
        }
    }

    pub fn without_container(mut self) -> Self {
        self.container = None;
        self
    }

    pub fn container_node(&self) -> &Node {
        self.container.as_ref().unwrap()
    }

    pub fn value_now(&self) -> String {
        self.value.borrow().clone()
    }

    /// types into the field
    pub fn set_now(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }
}

impl Field for MemoryField {
    type Container = Node;

    fn name(&self) -> String {
        self.name.clone()
    }

    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }

    fn container(&self) -> Option<Node> {
        self.container.clone()
    }
}

/// A comment shown under the heading, newest first.
#[derive(Debug, Clone)]
pub struct ShownComment {
    pub node: Node,
    pub record: CommentRecord,
}

#[derive(Clone)]
pub struct MemoryPage {
    pub fields: Vec<MemoryField>,
    pub error_banner: Node,
    pub success_banner: Node,
    pub comments: Rc<RefCell<Vec<ShownComment>>>,
}

impl MemoryPage {
    /// The page as served: `name` input, `comment` textarea and the
    /// server-seeded comments under the heading.
    pub fn new(name: &str, comment: &str) -> Self {
        Self::with_fields(vec![
            MemoryField::new("name", name),
            MemoryField::new("comment", comment),
        ])
    }

    pub fn with_fields(fields: Vec<MemoryField>) -> Self {
        let seeded = [("mistergoomba", "Hooray!"), ("Meowtin", "Hi, there!")]
            .into_iter()
            .map(|(user, content)| ShownComment {
                node: Node::with_classes(&["comment"]),
                record: CommentRecord::new(user, content),
            })
            .collect();

        Self {
            fields,
            error_banner: Node::with_classes(&["form-error"]),
            success_banner: Node::with_classes(&["form-success"]),
            comments: Rc::new(RefCell::new(seeded)),
        }
    }

    pub fn field(&self, name: &str) -> &MemoryField {
        self.fields.iter().find(|f| f.name == name).unwrap()
    }

    pub fn first_comment(&self) -> ShownComment {
        self.comments.borrow()[0].clone()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.borrow().len()
    }
}

impl Page for MemoryPage {
    type Element = Node;
    type Field = MemoryField;

    fn fields(&self) -> Result<Vec<MemoryField>, ControllerError> {
        Ok(self.fields.clone())
    }

    fn error_banner(&self) -> Result<Node, ControllerError> {
        Ok(self.error_banner.clone())
    }

    fn success_banner(&self) -> Result<Node, ControllerError> {
        Ok(self.success_banner.clone())
    }

    fn insert_comment(&self, record: &CommentRecord) -> Result<Node, ControllerError> {
        let node = Node::with_classes(&["new-comment", COMMENT_HIDDEN_CLASS]);
        self.comments.borrow_mut().insert(
            0,
            ShownComment {
                node: node.clone(),
                record: record.clone(),
            },
        );
        Ok(node)
    }
}

type Task = (Duration, Box<dyn FnOnce()>);

/// Runs scheduled tasks only when the test moves the clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    now: Rc<RefCell<Duration>>,
    tasks: Rc<RefCell<Vec<Task>>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn advance(&self, by: Duration) {
        let now = {
            let mut now = self.now.borrow_mut();
            *now += by;
            *now
        };

        let due = {
            let mut tasks = self.tasks.borrow_mut();
            let (mut due, rest): (Vec<_>, Vec<_>) =
                tasks.drain(..).partition(|(at, _)| *at <= now);
            *tasks = rest;
            due.sort_by_key(|(at, _)| *at);
            due
        };

        for (_, task) in due {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let at = *self.now.borrow() + delay;
        self.tasks.borrow_mut().push((at, task));
    }
}
