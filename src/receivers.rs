// Value receivers vs reference receivers.
//
// A method taking `self` works on its own value. When the caller hands it a
// clone, the original is never touched. A method taking `&mut self` works on
// the caller's storage, so the change outlives the call.

use crate::person::Person;

impl Person {
    /// Renames a value the method owns. The caller keeps its record only by
    /// passing a copy, and that record is unchanged afterwards.
    pub fn update_name_by_value(mut self, new_first_name: &str) {
        self.first_name = new_first_name.to_string();
    }

    /// Renames the caller's record in place.
    pub fn update_name(&mut self, new_first_name: &str) {
        self.first_name = new_first_name.to_string();
    }
}

pub fn rename(person: &mut Person, new_first_name: &str) {
    person.first_name = new_first_name.to_string();
}

pub fn rename_copy(mut person: Person, new_first_name: &str) {
    person.first_name = new_first_name.to_string();
}
