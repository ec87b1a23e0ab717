use std::{fmt::Debug, sync::OnceLock};

/// Maximum number of characters of an argument printed by `arg_context!()`
pub static DEBUG_PRINT_LIMIT: OnceLock<usize> = OnceLock::new();

pub fn clip_string(mut string: String, ending: &str, length: usize) -> String {
    if length == 0 {
        string = String::default();
    } else if string.chars().count() > length {
        string = format!(
            "{}{}",
            string
                .chars()
                .take(length.saturating_sub(ending.chars().count()))
                .collect::<String>(),
            ending
        );
    }

    string
}

pub fn clip_debug<T: Debug + ?Sized>(value: &T) -> String {
    clip_string(
        format!("{:?}", value),
        "…",
        *DEBUG_PRINT_LIMIT.get().unwrap_or(&1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clip_string_keeps_short_strings() {
        assert_eq!(clip_string("page".to_string(), "…", 10), "page");
    }

    #[test]
    fn clip_string_reserves_room_for_the_ending() {
        assert_eq!(clip_string("pagination".to_string(), "…", 5), "pagi…");
        assert_eq!(clip_string("pagination".to_string(), "…", 0), "");
    }
}
