//! Formatting utilities used for console output.

/// Horizontal rule printed after each block of output.
pub fn rule() -> String {
    "-".repeat(40)
}

/// Upper-case the first letter of every word, lower-case the rest.
/// `"new york CITY"` → `"New York City"`.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Seconds as `D days H:MM:SS`, e.g. `360` → `0 days 0:06:00`.
pub fn secs2readable(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let abs_s = secs.unsigned_abs();

    let days = abs_s / 86_400;
    let hours = (abs_s % 86_400) / 3_600;
    let minutes = (abs_s % 3_600) / 60;
    let seconds = abs_s % 60;

    format!("{sign}{days} days {hours}:{minutes:02}:{seconds:02}")
}

/// Is this answer a "yes"? Anything else counts as no.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
