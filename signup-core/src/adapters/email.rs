//! Regex-based email syntax checker

use regex::Regex;

use crate::domain::result::{Error, Result};
use crate::ports::EmailValidator;

/// Maximum length of a whole address (RFC 5321 path limit minus the brackets)
const MAX_EMAIL_LEN: usize = 254;

/// Maximum length of the local part
const MAX_LOCAL_LEN: usize = 64;

/// `atext` local part, then one or more LDH domain labels
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";

/// Email checker backed by a precompiled regular expression
#[derive(Debug, Clone)]
pub struct RegexEmailValidator {
    pattern: Regex,
}

impl RegexEmailValidator {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(EMAIL_PATTERN)
            .map_err(|e| Error::config(format!("Invalid email pattern: {}", e)))?;
        Ok(Self { pattern })
    }
}

impl EmailValidator for RegexEmailValidator {
    fn is_valid(&self, email: &str) -> Result<bool> {
        if email.len() > MAX_EMAIL_LEN {
            return Ok(false);
        }
        let Some((local, _domain)) = email.rsplit_once('@') else {
            return Ok(false);
        };
        if local.len() > MAX_LOCAL_LEN
            || local.starts_with('.')
            || local.ends_with('.')
            || local.contains("..")
        {
            return Ok(false);
        }

        Ok(self.pattern.is_match(email))
    }
}
