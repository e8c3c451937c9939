// File: ./src/parser/edit.rs
use crate::command::{CommandVariant, EditCommand};
use crate::descriptor::{EditDescriptor, FieldUpdate};
use crate::error::ParseError;
use crate::model::{
    Address, Email, Index, ModuleSet, Name, Phone, TagSet, Timetable, TimetableEntry,
};
use crate::tokenizer::{ArgMultimap, Prefix, tokenize};

const TIMETABLE_PREFIXES: [Prefix; 3] =
    [Prefix::ActivityDay, Prefix::ActivityTime, Prefix::Activity];

/// Parses the arguments of `edit` or `interleave` into an [`EditCommand`].
///
/// The index is always parsed first, so a bad index is reported even when
/// the rest of the arguments are also invalid.
pub fn parse_edit(variant: CommandVariant, args: &str) -> Result<EditCommand, ParseError> {
    let map = tokenize(args, &Prefix::all());

    let index = Index::parse(map.preamble())
        .map_err(|e| ParseError::format_caused_by(variant.usage(), e))?;

    let descriptor = match variant {
        CommandVariant::Edit => {
            let descriptor = edit_fields(&map)?;
            if !descriptor.is_any_field_edited() {
                return Err(ParseError::NoFieldsEdited);
            }
            descriptor
        }
        // Only the index matters here; field prefixes are ignored.
        CommandVariant::Interleave => EditDescriptor::builder().interleaved().build(),
    };

    log::debug!("Parsed {} {} -> {}", variant, index, descriptor);
    Ok(EditCommand::new(variant, index, descriptor))
}

fn edit_fields(map: &ArgMultimap) -> Result<EditDescriptor, ParseError> {
    let name = map.value(Prefix::Name).map(Name::parse).transpose()?;
    let phone = map.value(Prefix::Phone).map(Phone::parse).transpose()?;
    let email = map.value(Prefix::Email).map(Email::parse).transpose()?;
    let address = map.value(Prefix::Address).map(Address::parse).transpose()?;
    let tags = parse_tags_for_edit(map.all_values(Prefix::Tag))?;
    let modules = if map.contains(Prefix::Module) {
        Some(ModuleSet::parse(map.all_values(Prefix::Module))?)
    } else {
        None
    };
    let timetable = parse_timetable_for_edit(map)?;

    Ok(EditDescriptor::builder()
        .set_if_some(name.map(FieldUpdate::Name))
        .set_if_some(phone.map(FieldUpdate::Phone))
        .set_if_some(email.map(FieldUpdate::Email))
        .set_if_some(address.map(FieldUpdate::Address))
        .set_if_some(tags.map(FieldUpdate::Tags))
        .set_if_some(modules.map(FieldUpdate::Modules))
        .set_if_some(timetable.map(FieldUpdate::Timetable))
        .build())
}

/// `None` when no tag prefix was given. A lone empty `t/` clears all tags.
fn parse_tags_for_edit(raw: &[String]) -> Result<Option<TagSet>, ParseError> {
    match raw {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(TagSet::new())),
        _ => TagSet::parse(raw).map(Some),
    }
}

/// Built only when day, time and activity are all present. Any subset of
/// the three is treated as "no timetable change" rather than an error.
fn parse_timetable_for_edit(map: &ArgMultimap) -> Result<Option<Timetable>, ParseError> {
    let (Some(day), Some(time), Some(activity)) = (
        map.value(Prefix::ActivityDay),
        map.value(Prefix::ActivityTime),
        map.value(Prefix::Activity),
    ) else {
        if TIMETABLE_PREFIXES.iter().any(|p| map.contains(*p)) {
            log::debug!("Incomplete timetable entry ignored");
        }
        return Ok(None);
    };
    let entry = TimetableEntry::parse(day, time, activity)?;
    Ok(Some(Timetable::single(entry)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(args: &str) -> ArgMultimap {
        tokenize(args, &Prefix::all())
    }

    #[test]
    fn test_tags_absent_vs_cleared() {
        assert_eq!(parse_tags_for_edit(&[]).unwrap(), None);
        assert_eq!(
            parse_tags_for_edit(&["".to_string()]).unwrap(),
            Some(TagSet::new())
        );
        // An empty token next to others is still validated.
        assert!(parse_tags_for_edit(&["".to_string(), "friend".to_string()]).is_err());
    }

    #[test]
    fn test_timetable_requires_all_three() {
        assert_eq!(
            parse_timetable_for_edit(&tokens("1 day/mon time/0900-1000")).unwrap(),
            None
        );
        assert_eq!(
            parse_timetable_for_edit(&tokens("1 act/Gym")).unwrap(),
            None
        );
        let t = parse_timetable_for_edit(&tokens("1 day/mon time/0900-1000 act/Gym"))
            .unwrap()
            .unwrap();
        assert_eq!(t.entries().len(), 1);
    }

    #[test]
    fn test_partial_triple_is_not_validated() {
        // Invalid values are never looked at when the triple is incomplete.
        assert_eq!(
            parse_timetable_for_edit(&tokens("1 day/notaday time/xx")).unwrap(),
            None
        );
    }
}
