//! Domain label and TLD types.
//!
//! A [`DomainLabel`] is the registrable portion of a fully qualified domain
//! name, left of the TLD. Parsing enforces the single-component constraint:
//! sub-domains are rejected, while multi-part TLDs ("co.uk") are supported.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Returns true if the string is a valid LDH (letters, digits, hyphen) label.
fn is_ldh_label(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= 63
        && !s.starts_with('-')
        && !s.ends_with('-')
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// A top-level domain under which labels are registered.
///
/// Multi-part TLDs such as "co.uk" are a single [`Tld`] value; each dotted
/// part must itself be a valid label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tld(String);

impl Tld {
    /// Creates a TLD from its dotted string form, normalizing to lowercase.
    pub fn new(tld: &str) -> CoreResult<Self> {
        let normalized = tld.trim_end_matches('.').to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(CoreError::invalid_tld(tld, "TLD must not be empty"));
        }
        for part in normalized.split('.') {
            if !is_ldh_label(part) {
                return Err(CoreError::invalid_tld(
                    tld,
                    format!("'{part}' is not a valid label"),
                ));
            }
        }
        Ok(Self(normalized))
    }

    /// Returns the dotted string form (e.g. "example" or "co.uk").
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of dotted parts (1 for "example", 2 for "co.uk").
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.0.split('.').count()
    }
}

impl fmt::Display for Tld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of TLDs a deployment serves.
///
/// Used when parsing fully qualified names to decide where the TLD starts;
/// the longest matching suffix wins, so "co.uk" takes precedence over "uk"
/// when both are present.
#[derive(Debug, Clone, Default)]
pub struct TldSet {
    tlds: HashSet<Tld>,
}

impl TldSet {
    /// Creates an empty TLD set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from dotted TLD strings.
    pub fn from_tlds<I, S>(tlds: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for tld in tlds {
            set.insert(Tld::new(tld.as_ref())?);
        }
        Ok(set)
    }

    /// Adds a TLD to the set.
    pub fn insert(&mut self, tld: Tld) {
        self.tlds.insert(tld);
    }

    /// Returns true if the exact TLD is in the set.
    #[must_use]
    pub fn contains(&self, tld: &Tld) -> bool {
        self.tlds.contains(tld)
    }

    /// Finds the longest TLD in the set that is a proper suffix of the
    /// dotted name, leaving at least one label to its left.
    #[must_use]
    pub fn longest_match(&self, name: &str) -> Option<Tld> {
        let parts: Vec<&str> = name.split('.').collect();
        // A match must leave at least one label, so start after parts[0].
        for start in 1..parts.len() {
            let candidate = Tld(parts[start..].join(".").to_ascii_lowercase());
            if self.tlds.contains(&candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

/// The registrable label of a domain name together with its TLD.
///
/// Invariant: exactly one label component sits left of the TLD. A name with
/// a sub-domain ("www.example" under "example") never constructs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainLabel {
    label: String,
    tld: Tld,
}

impl DomainLabel {
    /// Creates a domain label from an already-split label and TLD.
    pub fn new(label: &str, tld: Tld) -> CoreResult<Self> {
        let normalized = label.to_ascii_lowercase();
        if normalized.contains('.') {
            return Err(CoreError::invalid_label(
                label,
                "label must not contain a sub-domain component",
            ));
        }
        if !is_ldh_label(&normalized) {
            return Err(CoreError::invalid_label(
                label,
                "label must be a non-empty LDH label",
            ));
        }
        Ok(Self {
            label: normalized,
            tld,
        })
    }

    /// Parses a fully qualified domain name against a known TLD set.
    ///
    /// The longest matching TLD suffix is taken; the remainder must be
    /// exactly one label.
    pub fn parse(fqdn: &str, tlds: &TldSet) -> CoreResult<Self> {
        let name = fqdn.trim_end_matches('.');
        let tld = tlds.longest_match(name).ok_or_else(|| {
            CoreError::invalid_label(fqdn, "name does not end in a known TLD")
        })?;
        let remainder = &name[..name.len() - tld.as_str().len() - 1];
        Self::new(remainder, tld)
    }

    /// Returns the registrable label (e.g. "rich").
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the TLD.
    #[must_use]
    pub fn tld(&self) -> &Tld {
        &self.tld
    }

    /// Returns the fully qualified form, "label.tld".
    #[must_use]
    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.label, self.tld)
    }
}

impl fmt::Display for DomainLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.label, self.tld)
    }
}
