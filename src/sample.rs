// File: ./src/sample.rs
// Contacts loaded on startup when `load_sample_data` is enabled.
use crate::model::{
    Address, Email, ModuleSet, Name, Person, Phone, TagSet, Timetable, TimetableEntry,
};

struct Row {
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    tags: &'static [&'static str],
    modules: &'static [&'static str],
    activities: &'static [(&'static str, &'static str, &'static str)],
}

const ROWS: &[Row] = &[
    Row {
        name: "Alex Yeoh",
        phone: "87438807",
        email: "alexyeoh@example.com",
        address: "Blk 30 Geylang Street 29, #06-40",
        tags: &["friends"],
        modules: &["CS2103T", "CS2101"],
        activities: &[("mon", "1000-1200", "CS2103T Lecture")],
    },
    Row {
        name: "Bernice Yu",
        phone: "99272758",
        email: "berniceyu@example.com",
        address: "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        tags: &["colleagues", "friends"],
        modules: &["MA1521"],
        activities: &[
            ("tue", "0900-1000", "MA1521 Tutorial"),
            ("thu", "1400-1600", "Badminton"),
        ],
    },
    Row {
        name: "Charlotte Oliveiro",
        phone: "93210283",
        email: "charlotte@example.com",
        address: "Blk 11 Ang Mo Kio Street 74, #11-04",
        tags: &["neighbours"],
        modules: &[],
        activities: &[],
    },
    Row {
        name: "David Li",
        phone: "91031282",
        email: "lidavid@example.com",
        address: "Blk 436 Serangoon Gardens Street 26, #16-43",
        tags: &["family"],
        modules: &["GEA1000", "CS2040S"],
        activities: &[("mon", "1100-1300", "CS2040S Lab")],
    },
];

/// Rows are fixed and known to be valid; anything that fails to parse is skipped.
pub fn sample_persons() -> Vec<Person> {
    ROWS.iter().filter_map(row_to_person).collect()
}

fn row_to_person(row: &Row) -> Option<Person> {
    let mut person = Person::new(
        Name::parse(row.name).ok()?,
        Phone::parse(row.phone).ok()?,
        Email::parse(row.email).ok()?,
        Address::parse(row.address).ok()?,
    );
    person.tags = TagSet::parse(row.tags).ok()?;
    person.modules = ModuleSet::parse(row.modules).ok()?;
    person.timetable = row
        .activities
        .iter()
        .map(|(d, t, a)| TimetableEntry::parse(d, t, a))
        .collect::<Result<Timetable, _>>()
        .ok()?;
    Some(person)
}
