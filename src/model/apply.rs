// File: ./src/model/apply.rs
use crate::descriptor::EditDescriptor;
use crate::model::Person;

/// Produces the person that results from applying `descriptor` to `person`.
///
/// Without the interleave flag every present slot overwrites the field. With
/// it, scalars still overwrite but tags and modules are unioned with the
/// existing sets and timetable entries are merged in chronological order.
pub fn apply_descriptor(person: &Person, descriptor: &EditDescriptor) -> Person {
    let mut updated = person.clone();
    let merge = descriptor.is_interleaved();

    macro_rules! override_field {
        ($field:ident) => {
            if let Some(v) = descriptor.$field() {
                updated.$field = v.clone();
            }
        };
    }

    override_field!(name);
    override_field!(phone);
    override_field!(email);
    override_field!(address);

    if merge {
        if let Some(tags) = descriptor.tags() {
            updated.tags = person.tags.union(tags);
        }
        if let Some(modules) = descriptor.modules() {
            updated.modules = person.modules.union(modules);
        }
        if let Some(timetable) = descriptor.timetable() {
            updated.timetable = person.timetable.interleave(timetable);
        }
        updated.interleaved = true;
    } else {
        override_field!(tags);
        override_field!(modules);
        override_field!(timetable);
    }

    updated
}
