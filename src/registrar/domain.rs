//! Validated domain names.
use std::fmt;
use std::str::FromStr;

use crate::config::DOMAINS_DIR;
use crate::error::ConfigError;

/// A domain name that is safe to use as a file stem inside the domains
/// directory and inside a quoted include statement.
///
/// # Examples
///
/// ```
/// use lighty_domains::registrar::DomainName;
///
/// let domain: DomainName = "example.com".parse().unwrap();
/// assert_eq!(domain.include_line(), r#"include "domains/example.com.conf""#);
/// assert!("../etc".parse::<DomainName>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(String);

impl DomainName {
    /// The domain as given on the command line.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the per-domain config (`<domain>.conf`).
    #[must_use]
    pub fn conf_file_name(&self) -> String {
        format!("{}.conf", self.0)
    }

    /// Path of the per-domain config relative to the base directory.
    #[must_use]
    pub fn conf_relative_path(&self) -> String {
        format!("{DOMAINS_DIR}/{}", self.conf_file_name())
    }

    /// Master-file statement that includes this domain.
    #[must_use]
    pub fn include_line(&self) -> String {
        format!("include \"{}\"", self.conf_relative_path())
    }
}

impl FromStr for DomainName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = |reason| ConfigError::InvalidDomain {
            name: s.to_string(),
            reason,
        };

        if s.is_empty() {
            return Err(reject("must not be empty"));
        }
        if s == "." || s == ".." {
            return Err(reject("must not be a relative path component"));
        }
        if s.contains(['/', '\\']) {
            return Err(reject("must not contain path separators"));
        }
        if s.chars().any(|c| c.is_whitespace() || c.is_control() || c == '"') {
            return Err(reject("must not contain whitespace, control characters or quotes"));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_domains() {
        for name in ["example.com", "www.example.org", "xn--bcher-kva.example", "localhost"] {
            assert!(name.parse::<DomainName>().is_ok(), "{name} should parse");
        }
    }

    #[test]
    fn rejects_empty_name() {
        assert!("".parse::<DomainName>().is_err());
    }

    #[test]
    fn rejects_path_components() {
        for name in [".", "..", "a/b", "..\\x", "/etc"] {
            let err = name.parse::<DomainName>().unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidDomain { .. }),
                "{name}: {err}"
            );
        }
    }

    #[test]
    fn rejects_characters_that_break_include_line() {
        for name in ["exa mple.com", "example.com\n", "ex\"ample.com", "tab\there"] {
            assert!(name.parse::<DomainName>().is_err(), "{name:?} should fail");
        }
    }

    #[test]
    fn derived_names() {
        let domain: DomainName = "example.com".parse().unwrap();
        assert_eq!(domain.as_str(), "example.com");
        assert_eq!(domain.to_string(), "example.com");
        assert_eq!(domain.conf_file_name(), "example.com.conf");
        assert_eq!(domain.conf_relative_path(), "domains/example.com.conf");
        assert_eq!(domain.include_line(), "include \"domains/example.com.conf\"");
    }
}
