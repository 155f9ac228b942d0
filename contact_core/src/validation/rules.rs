//! Field rules for contact form submissions

use validator::{ValidateEmail, ValidationError};

pub const NAME_FIELD: &str = "name";
pub const EMAIL_FIELD: &str = "email";
pub const MESSAGE_FIELD: &str = "message";

pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MIN_MESSAGE_LENGTH: usize = 1;
pub const MAX_MESSAGE_LENGTH: usize = 1000;

/// Counts characters after stripping surrounding whitespace.
pub fn trimmed_length(text: &str) -> usize {
    text.trim().chars().count()
}

pub fn validate_trimmed_length(text: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = trimmed_length(text);

    if len < min {
        return Err(ValidationError::new("too_short"));
    }

    if len > max {
        return Err(ValidationError::new("too_long"));
    }

    Ok(())
}

pub fn validate_name_length(name: &str) -> Result<(), ValidationError> {
    validate_trimmed_length(name, MIN_NAME_LENGTH, MAX_NAME_LENGTH)
}

pub fn validate_message_length(message: &str) -> Result<(), ValidationError> {
    validate_trimmed_length(message, MIN_MESSAGE_LENGTH, MAX_MESSAGE_LENGTH)
}

pub const MAX_LOCAL_PART_LENGTH: usize = 64;

// RFC 5322 atext, besides ASCII alphanumerics.
const ATEXT_SYMBOLS: &str = "!#$%&'*+-/=?^_`{|}~";

/// A mail address split into its optional display name and addr-spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailAddress<'a> {
    pub display_name: Option<&'a str>,
    pub addr_spec: &'a str,
}

/// Parses `addr@domain`, `<addr@domain>` or `Name <addr@domain>`, ignoring
/// surrounding whitespace. Quoted and UTF-8 local parts are accepted.
pub fn parse_mail_address(raw: &str) -> Option<MailAddress<'_>> {
    let trimmed = raw.trim();

    let (display_name, addr_spec) = match trimmed.strip_suffix('>') {
        Some(rest) => {
            let open = rest.rfind('<')?;
            let name = rest[..open].trim();
            let name = name
                .strip_prefix('"')
                .and_then(|n| n.strip_suffix('"'))
                .unwrap_or(name)
                .trim();
            (Some(name).filter(|n| !n.is_empty()), rest[open + 1..].trim())
        }
        None => (None, trimmed),
    };

    is_valid_addr_spec(addr_spec).then_some(MailAddress {
        display_name,
        addr_spec,
    })
}

fn is_valid_addr_spec(addr_spec: &str) -> bool {
    let Some((local, domain)) = addr_spec.rsplit_once('@') else {
        return false;
    };

    if local.is_empty() || local.chars().count() > MAX_LOCAL_PART_LENGTH {
        return false;
    }

    let local_ok = match local.strip_prefix('"').and_then(|l| l.strip_suffix('"')) {
        Some(quoted) => is_valid_quoted_content(quoted),
        None => is_valid_dot_atom(local),
    };

    // The local part is already checked; only the domain rules are borrowed.
    local_ok && !domain.is_empty() && format!("user@{}", domain).validate_email()
}

fn is_valid_dot_atom(text: &str) -> bool {
    text.split('.').all(|atom| {
        !atom.is_empty()
            && atom.chars().all(|c| {
                c.is_ascii_alphanumeric()
                    || ATEXT_SYMBOLS.contains(c)
                    || (!c.is_ascii() && !c.is_control())
            })
    })
}

fn is_valid_quoted_content(text: &str) -> bool {
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.next().map_or(true, |escaped| escaped.is_control() && escaped != '\t') {
                    return false;
                }
            }
            '"' => return false,
            c if c.is_control() && c != '\t' => return false,
            _ => {}
        }
    }
    true
}

pub fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if parse_mail_address(email).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    validate_email_address(email).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_length_counts_chars() {
        assert_eq!(trimmed_length("  abc  "), 3);
        assert_eq!(trimmed_length(" \t\n "), 0);
        assert_eq!(trimmed_length("日本語"), 3);
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(validate_name_length("a").is_ok());
        assert!(validate_name_length(&"a".repeat(100)).is_ok());
        assert!(validate_name_length(&"a".repeat(101)).is_err());
        assert!(validate_name_length("").is_err());
        assert!(validate_name_length("   ").is_err());
    }

    #[test]
    fn test_message_length_bounds() {
        assert!(validate_message_length(&"m".repeat(1000)).is_ok());
        assert!(validate_message_length(&format!("  {}  ", "m".repeat(1000))).is_ok());
        assert!(validate_message_length(&"m".repeat(1001)).is_err());
        assert!(validate_message_length(" ").is_err());
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("test@example.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email(" "));
        assert!(!is_valid_email("bad-example"));
        assert!(!is_valid_email("bad-example.com"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("test@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("test..dots@example.com"));
        assert!(!is_valid_email("Gavin Thomas <bad-example>"));
        assert!(!is_valid_email("Gavin Thomas test@example.com>"));
        assert!(!is_valid_email("\"unterminated@example.com"));
    }

    #[test]
    fn test_email_accepts_standard_address_forms() {
        for email in [
            "test@example.com ",
            " test@example.com",
            "Gavin Thomas <test@example.com>",
            "\"Gavin Thomas\" <test@example.com>",
            "<test@example.com>",
            "\"john doe\"@example.com",
            "jöhn@example.com",
            "first.last+tag@sub.example.com",
        ] {
            assert!(is_valid_email(email), "{:?}", email);
        }
    }

    #[test]
    fn test_parse_mail_address_extracts_addr_spec() {
        let parsed = parse_mail_address(" Gavin Thomas <test@example.com> ").unwrap();
        assert_eq!(parsed.display_name, Some("Gavin Thomas"));
        assert_eq!(parsed.addr_spec, "test@example.com");

        let parsed = parse_mail_address("<test@example.com>").unwrap();
        assert_eq!(parsed.display_name, None);
        assert_eq!(parsed.addr_spec, "test@example.com");

        let parsed = parse_mail_address("test@example.com\n").unwrap();
        assert_eq!(parsed.addr_spec, "test@example.com");
    }
}
