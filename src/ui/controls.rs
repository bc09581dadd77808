//! Key bindings of the visualizer screen
//!
//! Every widget command is bound to a letter. Numbers are typed into the
//! operand fields first; the letter then runs the command with them.

use crate::tree::Traversal;
use crate::visualizers::{Visualizer, VisualizerKind};
use std::time::Instant;

/// Operands a command reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    None,
    Value,
    Index,
    IndexAndValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    TreeInsert,
    TreeDelete,
    TreeTraverse(Traversal),
    ArrayPush,
    ArrayPop,
    ArrayInsertAt,
    ArrayDeleteAt,
    ArrayAccess,
    StackPush,
    StackPop,
    StackPeek,
    StackIsEmpty,
    Enqueue,
    Dequeue,
    QueueFront,
    QueueRear,
    QueueIsEmpty,
    ListInsertHead,
    ListInsertTail,
    ListDelete,
    ListSearch,
    ListTraverse,
}

impl Op {
    pub fn operand(self) -> Operand {
        match self {
            Op::TreeInsert
            | Op::TreeDelete
            | Op::ArrayPush
            | Op::StackPush
            | Op::Enqueue
            | Op::ListInsertHead
            | Op::ListInsertTail
            | Op::ListDelete
            | Op::ListSearch => Operand::Value,
            Op::ArrayDeleteAt | Op::ArrayAccess => Operand::Index,
            Op::ArrayInsertAt => Operand::IndexAndValue,
            _ => Operand::None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub key: char,
    pub label: &'static str,
    pub op: Op,
}

const fn bind(key: char, label: &'static str, op: Op) -> Binding {
    Binding { key, label, op }
}

const TREE: &[Binding] = &[
    bind('i', "insert", Op::TreeInsert),
    bind('d', "delete", Op::TreeDelete),
    bind('n', "inorder", Op::TreeTraverse(Traversal::Inorder)),
    bind('p', "preorder", Op::TreeTraverse(Traversal::Preorder)),
    bind('o', "postorder", Op::TreeTraverse(Traversal::Postorder)),
];

const ARRAY: &[Binding] = &[
    bind('p', "push", Op::ArrayPush),
    bind('o', "pop", Op::ArrayPop),
    bind('i', "insert at", Op::ArrayInsertAt),
    bind('d', "delete at", Op::ArrayDeleteAt),
    bind('a', "access", Op::ArrayAccess),
];

const STACK: &[Binding] = &[
    bind('p', "push", Op::StackPush),
    bind('o', "pop", Op::StackPop),
    bind('k', "peek", Op::StackPeek),
    bind('e', "is empty", Op::StackIsEmpty),
];

const QUEUE: &[Binding] = &[
    bind('e', "enqueue", Op::Enqueue),
    bind('d', "dequeue", Op::Dequeue),
    bind('f', "front", Op::QueueFront),
    bind('b', "rear", Op::QueueRear),
    bind('m', "is empty", Op::QueueIsEmpty),
];

const LINKED_LIST: &[Binding] = &[
    bind('h', "insert head", Op::ListInsertHead),
    bind('t', "insert tail", Op::ListInsertTail),
    bind('d', "delete", Op::ListDelete),
    bind('s', "search", Op::ListSearch),
    bind('w', "traverse", Op::ListTraverse),
];

pub fn bindings(kind: VisualizerKind) -> &'static [Binding] {
    match kind {
        VisualizerKind::Tree => TREE,
        VisualizerKind::Array => ARRAY,
        VisualizerKind::Stack => STACK,
        VisualizerKind::Queue => QUEUE,
        VisualizerKind::LinkedList => LINKED_LIST,
    }
}

pub fn lookup(kind: VisualizerKind, key: char) -> Option<Op> {
    bindings(kind)
        .iter()
        .find(|b| b.key == key.to_ascii_lowercase())
        .map(|b| b.op)
}

/// Which operand field receives typed digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperandField {
    #[default]
    Value,
    Index,
}

/// Number entry under a widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperandInput {
    pub value: String,
    pub index: String,
    pub field: OperandField,
}

impl OperandInput {
    /// Accept digits anywhere and a minus sign in front
    pub fn push(&mut self, c: char) -> bool {
        let text = self.active_mut();
        let accepted = c.is_ascii_digit() || (c == '-' && text.is_empty());
        if accepted && text.len() < 12 {
            text.push(c);
            true
        } else {
            false
        }
    }

    pub fn backspace(&mut self) {
        self.active_mut().pop();
    }

    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            OperandField::Value => OperandField::Index,
            OperandField::Index => OperandField::Value,
        };
    }

    pub fn value(&self) -> Option<i64> {
        self.value.parse().ok()
    }

    pub fn index(&self) -> Option<i64> {
        self.index.parse().ok()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.index.clear();
        self.field = OperandField::Value;
    }

    fn active_mut(&mut self) -> &mut String {
        match self.field {
            OperandField::Value => &mut self.value,
            OperandField::Index => &mut self.index,
        }
    }
}

/// Run `op` on `visualizer`, reading operands from `input`.
///
/// Returns a prompt when an operand the command needs is missing, or when
/// `op` belongs to a different kind of visualizer.
pub fn run(
    visualizer: &mut Visualizer,
    op: Op,
    input: &OperandInput,
    now: Instant,
) -> Result<(), &'static str> {
    let value = || input.value().ok_or("Enter a value first");
    let index = || input.index().ok_or("Enter an index first (Tab switches field)");

    match (visualizer, op) {
        (Visualizer::Tree(v), Op::TreeInsert) => v.insert(value()?, now),
        (Visualizer::Tree(v), Op::TreeDelete) => v.delete(value()?, now),
        (Visualizer::Tree(v), Op::TreeTraverse(order)) => v.traverse(order, now),

        (Visualizer::Array(v), Op::ArrayPush) => v.push(value()?, now),
        (Visualizer::Array(v), Op::ArrayPop) => v.pop(now),
        (Visualizer::Array(v), Op::ArrayInsertAt) => {
            let (index, value) = (index()?, value()?);
            v.insert_at(index, value, now)
        }
        (Visualizer::Array(v), Op::ArrayDeleteAt) => v.delete_at(index()?, now),
        (Visualizer::Array(v), Op::ArrayAccess) => v.access(index()?, now),

        (Visualizer::Stack(v), Op::StackPush) => v.push(value()?, now),
        (Visualizer::Stack(v), Op::StackPop) => v.pop(now),
        (Visualizer::Stack(v), Op::StackPeek) => v.peek(now),
        (Visualizer::Stack(v), Op::StackIsEmpty) => v.report_empty(now),

        (Visualizer::Queue(v), Op::Enqueue) => v.enqueue(value()?, now),
        (Visualizer::Queue(v), Op::Dequeue) => v.dequeue(now),
        (Visualizer::Queue(v), Op::QueueFront) => v.front(now),
        (Visualizer::Queue(v), Op::QueueRear) => v.rear(now),
        (Visualizer::Queue(v), Op::QueueIsEmpty) => v.report_empty(now),

        (Visualizer::LinkedList(v), Op::ListInsertHead) => v.insert_head(value()?, now),
        (Visualizer::LinkedList(v), Op::ListInsertTail) => v.insert_tail(value()?, now),
        (Visualizer::LinkedList(v), Op::ListDelete) => v.delete(value()?, now),
        (Visualizer::LinkedList(v), Op::ListSearch) => v.search(value()?, now),
        (Visualizer::LinkedList(v), Op::ListTraverse) => v.traverse(now),

        _ => return Err("Not available here"),
    }
    Ok(())
}
