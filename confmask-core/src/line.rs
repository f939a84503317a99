// confmask-core/src/line.rs
//! Splitting raw input lines into a maskable body and a verbatim terminator.

/// One line of configuration text, borrowed from the input.
///
/// Maskers only ever see `body`; `terminator` (`"\n"`, `"\r\n"` or `""` for a
/// final unterminated line) is written back untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigLine<'a> {
    pub body: &'a str,
    pub terminator: &'a str,
}

impl<'a> ConfigLine<'a> {
    pub fn split(raw: &'a str) -> Self {
        let body_len = if raw.ends_with("\r\n") {
            raw.len() - 2
        } else if raw.ends_with('\n') {
            raw.len() - 1
        } else {
            raw.len()
        };
        let (body, terminator) = raw.split_at(body_len);
        ConfigLine { body, terminator }
    }
}
