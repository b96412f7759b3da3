use thiserror::Error;

/// A syntactically valid email address.
///
/// Values only come out of [`EmailAddress::parse`], so a held string is
/// always trimmed and shaped like `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

/// The input did not look like an email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a valid email address")]
pub struct InvalidEmail;

impl EmailAddress {
    /// Parse a raw user-entered string.
    ///
    /// Surrounding whitespace is stripped first. The shape rule is
    /// deliberately minimal: no embedded whitespace, exactly one `@` with a
    /// non-empty local part, and at least one `.` after the `@` with
    /// characters on both sides. No MX lookup, no normalization.
    pub fn parse(input: &str) -> Result<Self, InvalidEmail> {
        let candidate = input.trim();
        if candidate.is_empty() || candidate.chars().any(char::is_whitespace) {
            return Err(InvalidEmail);
        }

        let (local, domain) = candidate.split_once('@').ok_or(InvalidEmail)?;
        if local.is_empty() || domain.contains('@') {
            return Err(InvalidEmail);
        }

        let (host, tld) = domain.rsplit_once('.').ok_or(InvalidEmail)?;
        if host.is_empty() || tld.is_empty() {
            return Err(InvalidEmail);
        }

        Ok(Self(candidate.to_string()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
