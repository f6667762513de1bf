//! Turns a clock reading into the English phrase a speaker would say.

use crate::domain::model::{ClockTime, FormatMode};

const UNITS: [&str; 21] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
    "twenty",
];

const TENS: [&str; 6] = ["", "", "twenty", "thirty", "forty", "fifty"];

/// Cardinal words for 0..=59. Zero, and anything above 59, is the empty string.
pub fn number_to_words(n: u32) -> String {
    if n <= 20 {
        return UNITS[n as usize].to_string();
    }

    let Some(tens) = TENS.get((n / 10) as usize) else {
        return String::new();
    };
    let ones = n % 10;
    if ones > 0 {
        format!("{}-{}", tens, UNITS[ones as usize])
    } else {
        tens.to_string()
    }
}

/// Phrase for `hour:minute` in the given mode.
///
/// Does not check [`can_use_format`]; a "past" phrase for 10:45 is produced
/// if asked for. Unrecognized modes read the numbers literally, which at
/// minute 0 leaves a trailing space ("ten ").
pub fn format_time_to_speak(hour: u32, minute: u32, mode: &FormatMode) -> String {
    let time = ClockTime { hour, minute };
    let hour12 = time.hour12();
    let next_hour = time.next_hour12();
    let hour_words = number_to_words(hour12);

    let literal = || format!("{} {}", hour_words, number_to_words(minute));

    if let FormatMode::Unrecognized(_) = mode {
        return literal();
    }

    if minute == 0 {
        return format!("{} o'clock", hour_words);
    }

    match mode {
        FormatMode::Normal => match minute {
            15 => format!("quarter past {}", hour_words),
            30 => format!("half past {}", hour_words),
            45 => format!("quarter to {}", number_to_words(next_hour)),
            _ => literal(),
        },
        FormatMode::Past => match minute {
            15 => format!("quarter past {}", hour_words),
            30 => format!("half past {}", hour_words),
            _ => format!("{} minutes past {}", number_to_words(minute), hour_words),
        },
        FormatMode::To => {
            let minutes_to = 60u32.saturating_sub(minute);
            if minutes_to == 15 {
                format!("quarter to {}", number_to_words(next_hour))
            } else {
                format!(
                    "{} minutes to {}",
                    number_to_words(minutes_to),
                    number_to_words(next_hour)
                )
            }
        }
        FormatMode::Unrecognized(_) => literal(),
    }
}

/// Whether `mode` is a sensible way to say a time with this many minutes.
///
/// Advisory: callers use it to gate format selection.
pub fn can_use_format(mode: &FormatMode, minute: u32) -> bool {
    match mode {
        FormatMode::Normal => true,
        FormatMode::Past => minute <= 30,
        FormatMode::To => minute > 30,
        FormatMode::Unrecognized(_) => true,
    }
}
