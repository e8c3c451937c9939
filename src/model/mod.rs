// File: ./src/model/mod.rs
pub mod apply;
pub mod fields;
pub mod index;
pub mod person;
pub mod timetable;

pub use apply::apply_descriptor;
pub use fields::{
    Address, Email, Field, ModuleCode, ModuleSet, Name, OrderedSet, Phone, Tag, TagSet,
};
pub use index::Index;
pub use person::Person;
pub use timetable::{TimeSlot, Timetable, TimetableEntry};
