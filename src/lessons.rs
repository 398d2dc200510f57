// Lesson runners. Each one builds its records, optionally mutates them,
// and narrates every step.

use std::io::Write;

use crate::error::Result;
use crate::kinds::{self, Semantics, TypeKind};
use crate::narrate::Narrator;
use crate::person::{ContactInfo, Person};
use crate::receivers::rename;
use crate::slices::{render_list, update_array, update_slice, SharedSlice, SliceHeader};

fn alex() -> Person {
    Person::new(
        "Alex",
        "Anderson",
        ContactInfo::new("alex.anderson@rustlang.com", 123456),
    )
}

pub fn struct_initialization<W: Write>(n: &mut Narrator<W>) -> Result<()> {
    n.heading("Struct initialization")?;

    // Positional: relies on field order
    n.step("positional construction")?;
    let alex = alex();
    n.show("alex", &alex)?;

    // Named: order independent
    n.step("named-field construction")?;
    let chantal = Person {
        first_name: "Chantal".to_string(),
        last_name: "Neo".to_string(),
        contact_info: ContactInfo {
            email: "chantal.neo@rustlang.com".to_string(),
            zip_code: 5412177,
        },
    };
    n.show("chantal", &chantal)?;

    n.step("zero value, then field assignment")?;
    let mut jerry = Person::default();
    n.show("jerry (zero value)", &jerry)?;
    jerry.first_name = "Jerry".to_string();
    jerry.last_name = "Gan".to_string();
    jerry.contact_info = ContactInfo {
        email: "jerry.gan@rustlang.com".to_string(),
        zip_code: 5201314,
    };
    n.show("jerry", &jerry)?;

    n.step("the same record as JSON")?;
    n.show("alex", alex.to_json()?)?;
    Ok(())
}

pub fn value_receiver<W: Write>(n: &mut Narrator<W>) -> Result<()> {
    n.heading("Value receiver")?;
    let alex = alex();
    n.show("before", &alex)?;

    n.step("alex.clone().update_name_by_value(\"Alec\")")?;
    alex.clone().update_name_by_value("Alec");
    n.show("after", &alex)?;
    n.note("The method renamed its own copy; alex still reads Alex.")?;
    Ok(())
}

pub fn pointer_receiver<W: Write>(n: &mut Narrator<W>) -> Result<()> {
    n.heading("Reference receiver")?;
    let mut jim = Person::new("Jim", "Party", ContactInfo::new("jim@rustlang.com", 94000));
    n.show("before", &jim)?;

    n.step("explicit reference: let jim_pointer = &mut jim")?;
    let jim_pointer = &mut jim;
    jim_pointer.update_name("jimmy");
    n.show("after", &jim)?;

    n.step("automatic reference: jim.update_name(\"Jimbo\")")?;
    jim.update_name("Jimbo");
    n.show("after", &jim)?;

    n.step("free function: rename(&mut jim, \"James\")")?;
    rename(&mut jim, "James");
    n.show("after", &jim)?;
    n.note("Every call reached the caller's storage.")?;
    Ok(())
}

/// Prints a record, renames it through a reference, prints it again.
pub fn rename_round_trip<W: Write>(n: &mut Narrator<W>) -> Result<()> {
    n.heading("Rename through a reference")?;
    let mut alex = alex();
    n.show("alex", &alex)?;
    alex.update_name("Alec");
    n.show("alex", &alex)?;
    Ok(())
}

pub fn slice_aliasing<W: Write>(n: &mut Narrator<W>) -> Result<()> {
    n.heading("Slice aliasing")?;
    let mut my_slice: Vec<String> = ["Hi", "There", "How", "Are", "You"]
        .iter()
        .map(|word| word.to_string())
        .collect();
    let outer = SliceHeader::of_vec(&my_slice);
    n.show("my_slice", render_list(&my_slice))?;
    n.show("caller header", outer)?;

    n.step("update_slice(&mut my_slice)")?;
    let inner = update_slice(&mut my_slice);
    n.show("callee header", inner)?;
    n.show("my_slice", render_list(&my_slice))?;
    if outer.same_backing(&inner) {
        n.note("Both headers point at the same buffer, so the write is visible.")?;
    }

    n.step("update_array(words) on a fixed-size array")?;
    let words = ["Hi", "There", "How", "Are", "You"];
    let callee = update_array(words);
    n.show("callee's copy", render_list(&callee))?;
    n.show("words", render_list(&words))?;
    n.note("The array was copied whole; the caller's array is unchanged.")?;

    n.step("SharedSlice: clone copies the header only")?;
    let shared = SharedSlice::from(vec!["Hi", "There", "How", "Are", "You"]);
    let header_copy = shared.clone();
    header_copy.set(0, "Bye")?;
    n.show("original", render_list(&shared.to_vec()))?;
    n.show("headers on backing", shared.header_count())?;

    let deep = shared.deep_copy();
    deep.set(0, "Hi")?;
    n.show("deep copy", render_list(&deep.to_vec()))?;
    n.show("original", render_list(&shared.to_vec()))?;
    n.note("A deep copy owns new storage; writing to it leaves the original alone.")?;
    Ok(())
}

pub fn value_and_reference_kinds<W: Write>(n: &mut Narrator<W>) -> Result<()> {
    n.heading("Value kinds and reference kinds")?;
    for semantics in [Semantics::Value, Semantics::Reference] {
        let title = match semantics {
            Semantics::Value => "value kinds: a copy owns its data",
            Semantics::Reference => "reference kinds: a copy shares its data",
        };
        n.step(title)?;
        for kind in TypeKind::ALL.iter().filter(|k| k.semantics() == semantics) {
            let observed = if kind.copy_shares_storage() {
                "change through copy visible"
            } else {
                "change through copy not visible"
            };
            n.show(kind.name(), format!("{:<28} {}", kind.rust_type(), observed))?;
        }
    }

    n.step("zero values")?;
    for (type_name, zero) in kinds::zero_values() {
        n.show(type_name, zero)?;
    }
    Ok(())
}
