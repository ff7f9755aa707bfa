use super::*;

#[test]
fn format_message_uses_locale_catalog() {
    assert_eq!(format_message(Locale::En, "edit"), "Edit");
    assert_eq!(format_message(Locale::Fr, "edit"), "Modifier");
    assert_eq!(format_message(Locale::Es, "update"), "Actualizar");
}

#[test]
fn format_message_returns_id_when_unknown() {
    assert_eq!(format_message(Locale::Fr, "no.such.message"), "no.such.message");
}

#[test]
fn every_english_id_is_translated() {
    for locale in [Locale::Fr, Locale::Es] {
        for (id, _) in EN {
            assert!(lookup(locale, id).is_some(), "{} missing {id}", locale.code());
        }
        assert_eq!(locale.catalog().len(), EN.len(), "{} has extra ids", locale.code());
    }
}

#[test]
fn catalog_ids_are_unique() {
    for locale in Locale::ALL {
        let catalog = locale.catalog();
        for (i, (id, _)) in catalog.iter().enumerate() {
            assert!(
                catalog[i + 1..].iter().all(|(other, _)| other != id),
                "duplicate id {id} in {}",
                locale.code()
            );
        }
    }
}

#[test]
fn locale_from_tag_matches_primary_subtag() {
    assert_eq!(Locale::from_tag("fr-CA"), Some(Locale::Fr));
    assert_eq!(Locale::from_tag("ES"), Some(Locale::Es));
    assert_eq!(Locale::from_tag("en_US"), Some(Locale::En));
    assert_eq!(Locale::from_tag("de-DE"), None);
    assert_eq!(Locale::from_tag(""), None);
}

#[test]
fn locale_code_round_trips_through_from_tag() {
    for locale in Locale::ALL {
        assert_eq!(Locale::from_tag(locale.code()), Some(locale));
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_default_outside_browser() {
    assert_eq!(read_preference(), Locale::En);
    persist(Locale::Fr);
    assert_eq!(read_preference(), Locale::En);
}
