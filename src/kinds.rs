// Which kinds of values share storage when copied.
//
// Value kinds: a copy (implicit Copy or explicit clone) owns its own data.
// Reference kinds: a copy is another handle to the same data, so a change
// made through it shows up everywhere.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::mpsc;

use crate::person::{ContactInfo, Person};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Semantics {
    Value,
    Reference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Integer,
    Float,
    Text,
    Boolean,
    Struct,
    Array,
    BorrowedSlice,
    SharedMap,
    Channel,
    Pointer,
    Closure,
}

impl TypeKind {
    pub const ALL: [TypeKind; 11] = [
        TypeKind::Integer,
        TypeKind::Float,
        TypeKind::Text,
        TypeKind::Boolean,
        TypeKind::Struct,
        TypeKind::Array,
        TypeKind::BorrowedSlice,
        TypeKind::SharedMap,
        TypeKind::Channel,
        TypeKind::Pointer,
        TypeKind::Closure,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TypeKind::Integer => "integer",
            TypeKind::Float => "float",
            TypeKind::Text => "text",
            TypeKind::Boolean => "boolean",
            TypeKind::Struct => "struct",
            TypeKind::Array => "array",
            TypeKind::BorrowedSlice => "slice",
            TypeKind::SharedMap => "map",
            TypeKind::Channel => "channel",
            TypeKind::Pointer => "pointer",
            TypeKind::Closure => "function",
        }
    }

    pub fn rust_type(&self) -> &'static str {
        match self {
            TypeKind::Integer => "i64",
            TypeKind::Float => "f64",
            TypeKind::Text => "String",
            TypeKind::Boolean => "bool",
            TypeKind::Struct => "Person",
            TypeKind::Array => "[i64; 3]",
            TypeKind::BorrowedSlice => "&mut [i64]",
            TypeKind::SharedMap => "Rc<RefCell<HashMap<K, V>>>",
            TypeKind::Channel => "mpsc::Sender<T>",
            TypeKind::Pointer => "&mut T",
            TypeKind::Closure => "impl Fn()",
        }
    }

    pub fn semantics(&self) -> Semantics {
        match self {
            TypeKind::Integer
            | TypeKind::Float
            | TypeKind::Text
            | TypeKind::Boolean
            | TypeKind::Struct
            | TypeKind::Array => Semantics::Value,
            TypeKind::BorrowedSlice
            | TypeKind::SharedMap
            | TypeKind::Channel
            | TypeKind::Pointer
            | TypeKind::Closure => Semantics::Reference,
        }
    }

    /// Copies a value of this kind, changes it through the copy, and reports
    /// whether the original saw the change.
    pub fn copy_shares_storage(&self) -> bool {
        match self {
            TypeKind::Integer => {
                let original: i64 = 1;
                let mut copy = original;
                copy += 1;
                original == copy
            }
            TypeKind::Float => {
                let original: f64 = 1.5;
                let mut copy = original;
                copy *= 2.0;
                original == copy
            }
            TypeKind::Text => {
                let original = String::from("Hi");
                let mut copy = original.clone();
                copy.push_str(" there");
                original == copy
            }
            TypeKind::Boolean => {
                let original = false;
                let mut copy = original;
                copy = !copy;
                original == copy
            }
            TypeKind::Struct => {
                let original = Person::new("Alex", "Anderson", ContactInfo::default());
                let mut copy = original.clone();
                copy.update_name("Alec");
                original.first_name == "Alec"
            }
            TypeKind::Array => {
                let original: [i64; 3] = [1, 2, 3];
                let mut copy = original;
                copy[0] = 9;
                original[0] == copy[0]
            }
            TypeKind::BorrowedSlice => {
                let mut original: Vec<i64> = vec![1, 2, 3];
                let copy: &mut [i64] = &mut original;
                copy[0] = 9;
                original[0] == 9
            }
            TypeKind::SharedMap => {
                let original: Rc<RefCell<HashMap<&str, i64>>> = Rc::default();
                let copy = Rc::clone(&original);
                copy.borrow_mut().insert("zip", 123456);
                let seen = original.borrow().contains_key("zip");
                seen
            }
            TypeKind::Channel => {
                let (original, receiver) = mpsc::channel::<i64>();
                let copy = original.clone();
                drop(original);
                // Both senders feed the one queue.
                copy.send(7).is_ok() && receiver.try_recv() == Ok(7)
            }
            TypeKind::Pointer => {
                let mut original: i64 = 1;
                let copy = &mut original;
                *copy = 2;
                original == 2
            }
            TypeKind::Closure => {
                let calls = Cell::new(0);
                let original = || calls.set(calls.get() + 1);
                let copy = original;
                copy();
                original();
                calls.get() == 2
            }
        }
    }
}

/// Default rendering of each primitive kind.
pub fn zero_values() -> Vec<(&'static str, String)> {
    vec![
        ("String", format!("{:?}", String::default())),
        ("i64", i64::default().to_string()),
        ("f64", f64::default().to_string()),
        ("bool", bool::default().to_string()),
    ]
}
