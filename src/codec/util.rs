use crate::error::DecodeError;

/// Fails on the first character rejected by `accept`, reporting its index.
pub fn validate_chars(input: &str, accept: impl Fn(char) -> bool) -> Result<(), DecodeError> {
    match input.chars().enumerate().find(|&(_, ch)| !accept(ch)) {
        Some((pos, ch)) => Err(DecodeError::invalid_char(ch, pos)),
        None => Ok(()),
    }
}

/// Splits `input` into its significant part and its trailing run of `=`.
pub fn split_padding(input: &str) -> (&str, usize) {
    let significant = input.trim_end_matches('=');
    (significant, input.len() - significant.len())
}

/// Appends `=` until the character count is a multiple of `multiple`.
pub fn pad_to_multiple(input: &str, multiple: usize) -> String {
    let remainder = input.chars().count() % multiple;
    if remainder == 0 {
        input.to_string()
    } else {
        format!("{}{}", input, "=".repeat(multiple - remainder))
    }
}
