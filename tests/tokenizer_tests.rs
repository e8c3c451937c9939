use contactbook::tokenizer::{Prefix, tokenize};

#[test]
fn test_empty_tag_token_preserved() {
    let map = tokenize("1 t/ t/friend", &[Prefix::Tag]);
    assert_eq!(map.preamble(), "1");
    assert_eq!(map.all_values(Prefix::Tag), ["", "friend"]);
}

#[test]
fn test_solitary_empty_tag() {
    let map = tokenize("1 t/", &[Prefix::Tag]);
    assert_eq!(map.all_values(Prefix::Tag), [""]);
    assert_eq!(map.value(Prefix::Tag), Some(""));
}

#[test]
fn test_missing_prefixes_are_empty() {
    let map = tokenize("7 n/Amy", &Prefix::all());
    for prefix in Prefix::all() {
        if prefix != Prefix::Name {
            assert!(map.all_values(prefix).is_empty(), "{prefix:?}");
        }
    }
}

#[test]
fn test_order_and_duplicates_kept_across_interleaved_prefixes() {
    let map = tokenize("1 t/a n/X t/b t/a n/Y", &Prefix::all());
    assert_eq!(map.all_values(Prefix::Tag), ["a", "b", "a"]);
    assert_eq!(map.all_values(Prefix::Name), ["X", "Y"]);
    assert_eq!(map.value(Prefix::Name), Some("Y"));
}

#[test]
fn test_values_are_trimmed_not_validated() {
    let map = tokenize("  12   p/  !!!   e/x  ", &Prefix::all());
    assert_eq!(map.preamble(), "12");
    assert_eq!(map.value(Prefix::Phone), Some("!!!"));
    assert_eq!(map.value(Prefix::Email), Some("x"));
}

#[test]
fn test_tabs_count_as_separators() {
    let map = tokenize("1\tn/Amy\tp/123", &Prefix::all());
    assert_eq!(map.value(Prefix::Name), Some("Amy"));
    assert_eq!(map.value(Prefix::Phone), Some("123"));
}
