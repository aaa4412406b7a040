use crate::error::RequestError;

/// Anything that can ask the operator for a missing value, e.g. a terminal
/// prompt. Request building only sees this trait, never a terminal.
pub trait Prompter {
    /// Ask for a single line of input. `placeholder` hints at the expected
    /// format (`<type>:<id>`), and may be empty.
    ///
    /// # Errors
    ///
    /// [`RequestError::Prompt`] when no answer could be read.
    fn prompt_string(&self, label: &str, placeholder: &str) -> Result<String, RequestError>;
}

/// Use the flag value when it is non-empty, otherwise ask the prompter.
///
/// # Errors
///
/// Propagates the prompter's error.
pub fn resolve_or_prompt<P: Prompter + ?Sized>(
    flag: Option<&str>,
    prompter: &P,
    label: &str,
    placeholder: &str,
) -> Result<String, RequestError> {
    match flag.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => prompter.prompt_string(label, placeholder),
    }
}

/// Like [`resolve_or_prompt`], but an empty answer is an error naming `field`.
///
/// # Errors
///
/// [`RequestError::EmptyField`] when neither the flag nor the prompt produced
/// a value; otherwise the prompter's error.
pub fn require_or_prompt<P: Prompter + ?Sized>(
    flag: Option<&str>,
    prompter: &P,
    field: &str,
    label: &str,
    placeholder: &str,
) -> Result<String, RequestError> {
    let value = resolve_or_prompt(flag, prompter, label, placeholder)?;
    if value.trim().is_empty() {
        return Err(RequestError::EmptyField(field.to_string()));
    }
    Ok(value)
}
