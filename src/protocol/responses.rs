//! Console replies
//!
//! Numeric reply codes and formatting. Multi-line replies repeat the code with
//! a dash on every line but the last.

pub const DOWNLOAD_STARTED: u16 = 150;
pub const OK: u16 = 200;
pub const LISTING: u16 = 212;
pub const HELP: u16 = 214;
pub const READY: u16 = 220;
pub const GOODBYE: u16 = 221;
pub const ACTION_OK: u16 = 250;
pub const CREATED: u16 = 257;
pub const RESOURCE_UNAVAILABLE: u16 = 452;
pub const UNKNOWN_COMMAND: u16 = 500;
pub const SYNTAX_ERROR: u16 = 501;
pub const BAD_SEQUENCE: u16 = 503;
pub const NOT_FOUND: u16 = 550;
pub const NAME_NOT_ALLOWED: u16 = 553;

/// Format a single-line reply
pub fn format_response(code: u16, message: &str) -> String {
    format!("{} {}\n", code, message)
}

/// Format a multi-line reply ending in `footer`
pub fn format_multiline<I, S>(code: u16, lines: I, footer: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for line in lines {
        out.push_str(&format!("{}-{}\n", code, line.as_ref()));
    }
    out.push_str(&format_response(code, footer));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_response() {
        assert_eq!(format_response(OK, "Done"), "200 Done\n");
    }

    #[test]
    fn test_format_multiline() {
        assert_eq!(
            format_multiline(LISTING, ["a", "b"], "2 items"),
            "212-a\n212-b\n212 2 items\n"
        );
        assert_eq!(
            format_multiline(LISTING, Vec::<String>::new(), "empty"),
            "212 empty\n"
        );
    }
}
