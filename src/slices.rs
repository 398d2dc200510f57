// Collections whose copies share storage.
//
// A Vec<T> is a header (pointer, length, capacity) plus a heap buffer.
// Handing out &mut [T] copies a smaller header, pointer and length, and
// both headers still point at the same buffer. Writing through the copy is
// a write to the caller's elements.
//
// SharedSlice makes that explicit: cloning it duplicates only the header,
// never the backing storage.

use std::cell::RefCell;
use std::fmt;
use std::ops::Range;
use std::rc::Rc;

use crate::error::{LessonError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceHeader {
    pub addr: usize,
    pub len: usize,
    pub cap: usize,
}

impl SliceHeader {
    pub fn of_vec<T>(items: &Vec<T>) -> Self {
        SliceHeader {
            addr: items.as_ptr() as usize,
            len: items.len(),
            cap: items.capacity(),
        }
    }

    /// A borrowed slice cannot grow, so its capacity is its length.
    pub fn of_slice<T>(items: &[T]) -> Self {
        SliceHeader {
            addr: items.as_ptr() as usize,
            len: items.len(),
            cap: items.len(),
        }
    }

    pub fn same_backing(&self, other: &SliceHeader) -> bool {
        self.addr == other.addr
    }
}

impl fmt::Display for SliceHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{addr:{:#x} len:{} cap:{}}}", self.addr, self.len, self.cap)
    }
}

/// Renders items space-separated inside brackets: `[Hi There]`.
pub fn render_list<T: fmt::Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(" "))
}

/// Reassigns the first element through the received header and returns that
/// header as the callee saw it.
pub fn update_slice(words: &mut [String]) -> SliceHeader {
    if let Some(first) = words.first_mut() {
        *first = "Bye".to_string();
    }
    SliceHeader::of_slice(words)
}

// Arrays of Copy elements are copied whole on every call. Returns the
// callee's copy.
pub fn update_array(mut words: [&str; 5]) -> [&str; 5] {
    words[0] = "Bye";
    words
}

/// A sequence view with header-copy semantics.
#[derive(Debug)]
pub struct SharedSlice<T> {
    backing: Rc<RefCell<Vec<T>>>,
    offset: usize,
    len: usize,
}

// Derived Clone would demand T: Clone; copying a header never clones elements.
impl<T> Clone for SharedSlice<T> {
    fn clone(&self) -> Self {
        SharedSlice {
            backing: Rc::clone(&self.backing),
            offset: self.offset,
            len: self.len,
        }
    }
}

impl<T> From<Vec<T>> for SharedSlice<T> {
    fn from(items: Vec<T>) -> Self {
        SharedSlice::new(items)
    }
}

impl<T> SharedSlice<T> {
    pub fn new(items: Vec<T>) -> Self {
        let len = items.len();
        SharedSlice {
            backing: Rc::new(RefCell::new(items)),
            offset: 0,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn set(&self, index: usize, value: T) -> Result<()> {
        if index >= self.len {
            return Err(LessonError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.backing.borrow_mut()[self.offset + index] = value;
        Ok(())
    }

    /// A narrower header over the same storage.
    pub fn slice(&self, range: Range<usize>) -> Result<SharedSlice<T>> {
        if range.start > range.end || range.end > self.len {
            return Err(LessonError::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.len,
            });
        }
        Ok(SharedSlice {
            backing: Rc::clone(&self.backing),
            offset: self.offset + range.start,
            len: range.end - range.start,
        })
    }

    pub fn shares_backing_with(&self, other: &SharedSlice<T>) -> bool {
        Rc::ptr_eq(&self.backing, &other.backing)
    }

    /// Number of headers currently pointing at this backing storage.
    pub fn header_count(&self) -> usize {
        Rc::strong_count(&self.backing)
    }
}

impl<T: Clone> SharedSlice<T> {
    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.backing.borrow().get(self.offset + index).cloned()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.backing.borrow()[self.offset..self.offset + self.len].to_vec()
    }

    /// Copies the visible elements into fresh backing storage.
    pub fn deep_copy(&self) -> SharedSlice<T> {
        SharedSlice::new(self.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn greeting() -> Vec<String> {
        ["Hi", "There", "How", "Are", "You"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_render_list() {
        assert_eq!(render_list(&greeting()), "[Hi There How Are You]");
        assert_eq!(render_list::<i32>(&[]), "[]");
    }

    #[test]
    fn test_header_display() {
        let header = SliceHeader { addr: 0x10, len: 5, cap: 8 };
        assert_eq!(header.to_string(), "{addr:0x10 len:5 cap:8}");
    }

    #[test]
    fn test_update_slice_is_visible_to_caller() {
        let mut my_slice = greeting();
        let outer = SliceHeader::of_vec(&my_slice);
        let inner = update_slice(&mut my_slice);
        assert_eq!(my_slice[0], "Bye");
        assert_eq!(&my_slice[1..], &greeting()[1..]);
        assert!(outer.same_backing(&inner));
        assert_eq!(outer.len, inner.len);
    }

    #[test]
    fn test_update_slice_on_subslice() {
        let mut my_slice = greeting();
        update_slice(&mut my_slice[2..]);
        assert_eq!(my_slice, vec!["Hi", "There", "Bye", "Are", "You"]);
    }

    #[test]
    fn test_update_slice_empty_is_noop() {
        let mut empty: Vec<String> = Vec::new();
        let header = update_slice(&mut empty);
        assert_eq!(header.len, 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_cloned_vec_does_not_alias() {
        let my_slice = greeting();
        let mut copy = my_slice.clone();
        update_slice(&mut copy);
        assert_eq!(my_slice[0], "Hi");
        assert!(!SliceHeader::of_vec(&my_slice).same_backing(&SliceHeader::of_vec(&copy)));
    }

    #[test]
    fn test_update_array_copies() {
        let words = ["Hi", "There", "How", "Are", "You"];
        let callee = update_array(words);
        assert_eq!(callee, ["Bye", "There", "How", "Are", "You"]);
        assert_eq!(words[0], "Hi");
    }

    #[test]
    fn test_shared_slice_clone_shares_storage() {
        let original = SharedSlice::from(greeting());
        let header_copy = original.clone();
        header_copy.set(0, "Bye".to_string()).unwrap();
        assert_eq!(original.get(0).as_deref(), Some("Bye"));
        assert!(original.shares_backing_with(&header_copy));
        assert_eq!(original.header_count(), 2);
    }

    #[test]
    fn test_shared_slice_deep_copy_is_independent() {
        let original = SharedSlice::from(greeting());
        let copy = original.deep_copy();
        copy.set(0, "Bye".to_string()).unwrap();
        assert_eq!(original.get(0).as_deref(), Some("Hi"));
        assert!(!original.shares_backing_with(&copy));
    }

    #[test]
    fn test_shared_slice_subslice_writes_through() {
        let original = SharedSlice::from(greeting());
        let middle = original.slice(1..3).unwrap();
        assert_eq!(middle.to_vec(), vec!["There", "How"]);
        middle.set(1, "Who".to_string()).unwrap();
        assert_eq!(original.to_vec(), vec!["Hi", "There", "Who", "Are", "You"]);
        assert_eq!(middle.get(2), None);
    }

    #[test]
    fn test_shared_slice_bounds() {
        let original = SharedSlice::from(greeting());
        assert!(matches!(
            original.set(5, "x".to_string()),
            Err(LessonError::IndexOutOfRange { index: 5, len: 5 })
        ));
        assert!(matches!(
            original.slice(2..6),
            Err(LessonError::InvalidRange { start: 2, end: 6, len: 5 })
        ));
        let empty = original.slice(2..2).unwrap();
        assert!(empty.is_empty());
        assert!(empty.to_vec().is_empty());
    }

    proptest! {
        #[test]
        fn update_slice_always_visible(mut words in prop::collection::vec(".*", 1..16)) {
            let rest = words[1..].to_vec();
            update_slice(&mut words);
            prop_assert_eq!(&words[0], "Bye");
            prop_assert_eq!(&words[1..], &rest[..]);
        }

        #[test]
        fn header_copies_alias_and_deep_copies_do_not(
            items in prop::collection::vec(any::<i32>(), 1..32),
            value in any::<i32>(),
        ) {
            let original = SharedSlice::new(items.clone());
            let index = items.len() - 1;
            let deep = original.deep_copy();
            original.clone().set(index, value).unwrap();
            prop_assert_eq!(original.get(index), Some(value));
            prop_assert_eq!(deep.get(index), Some(items[index]));
        }
    }
}
