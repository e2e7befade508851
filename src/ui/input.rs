use crate::error::InputError;

/// Parse a one-based column number typed by a player into the engine's
/// zero-based index. Range checking is left to the engine.
pub fn parse_column(line: &str) -> Result<i32, InputError> {
    let text = line.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    let number: i32 = text
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))?;
    Ok(number.saturating_sub(1))
}

/// Strip the line terminator from a name read from the console.
pub fn parse_name(line: &str) -> String {
    line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string()
}
