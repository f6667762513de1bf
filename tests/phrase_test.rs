use speak_time::{can_use_format, format_time_to_speak, number_to_words, FormatMode};

#[test]
fn test_number_words_table() {
    assert_eq!(number_to_words(0), "");
    assert_eq!(number_to_words(15), "fifteen");
    assert_eq!(number_to_words(21), "twenty-one");
    assert_eq!(number_to_words(30), "thirty");
    assert_eq!(number_to_words(45), "forty-five");
}

#[test]
fn test_reference_phrases() {
    assert_eq!(format_time_to_speak(10, 30, &FormatMode::Normal), "half past ten");
    assert_eq!(format_time_to_speak(5, 15, &FormatMode::Past), "quarter past five");
    assert_eq!(format_time_to_speak(5, 50, &FormatMode::To), "ten minutes to six");
    assert_eq!(format_time_to_speak(12, 45, &FormatMode::Normal), "quarter to one");
    assert_eq!(format_time_to_speak(0, 0, &FormatMode::Normal), "twelve o'clock");
}

#[test]
fn test_parsed_mode_names_match_enum() {
    assert_eq!(
        format_time_to_speak(20, 40, &FormatMode::from_name("to")),
        "twenty minutes to nine"
    );
    assert_eq!(
        format_time_to_speak(20, 40, &FormatMode::from_name("digital")),
        "eight forty"
    );
}

#[test]
fn test_every_valid_combination_is_well_formed() {
    for hour in 0..24 {
        for minute in 0..60 {
            for mode in FormatMode::KNOWN.iter() {
                if !can_use_format(mode, minute) {
                    continue;
                }
                let phrase = format_time_to_speak(hour, minute, mode);
                assert!(!phrase.is_empty());
                assert_eq!(phrase, phrase.to_lowercase());
                assert_eq!(phrase, phrase.trim(), "stray whitespace in {:?}", phrase);
                assert!(!phrase.contains("  "));
            }
        }
    }
}

#[test]
fn test_format_availability() {
    assert!(!can_use_format(&FormatMode::Past, 31));
    assert!(!can_use_format(&FormatMode::To, 30));
    assert!((0..60).all(|m| can_use_format(&FormatMode::Normal, m)));
}
