//! Entity kinds and their dependencies
//!
//! Each kind of generated artifact may need the definitions of other kinds to be loaded
//! and enriched first. Generating classes, for example, needs the enumerations so that
//! properties can be checked against known enum names.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::core::error::{Error, Result};

/// A category of generated artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Enums,
    Classes,
    Methods,
    EnumConversionTests,
}

impl EntityKind {
    /// Every concrete kind, listed so that prerequisites come before their dependents
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Enums,
        EntityKind::Classes,
        EntityKind::Methods,
        EntityKind::EnumConversionTests,
    ];

    /// Name used on the command line and for files and directories
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enums => "Enums",
            Self::Classes => "Classes",
            Self::Methods => "Methods",
            Self::EnumConversionTests => "EnumConversionTests",
        }
    }

    /// Kinds whose definitions must be loaded before this one
    pub fn prerequisites(&self) -> &'static [EntityKind] {
        match self {
            Self::Enums => &[],
            Self::Classes | Self::Methods | Self::EnumConversionTests => &[Self::Enums],
        }
    }

    /// True when this kind has a definition document of its own
    pub fn has_definitions(&self) -> bool {
        !matches!(self, Self::EnumConversionTests)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown entity kind: {s}"))
    }
}

/// One token of the entity selection argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectionToken {
    Kind(EntityKind),
    All,
    None,
}

impl FromStr for SelectionToken {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else if s.eq_ignore_ascii_case("none") {
            Ok(Self::None)
        } else {
            s.parse().map(Self::Kind)
        }
    }
}

/// Names accepted by the selection argument, for usage messages
pub fn valid_selection_names() -> String {
    EntityKind::ALL
        .iter()
        .map(EntityKind::as_str)
        .chain(std::iter::once("All"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses a comma-delimited entity selection.
///
/// Tokens are trimmed and matched case-insensitively. `All` expands to every concrete kind
/// and `None` selects nothing. Unrecognized tokens are dropped with a warning. An empty
/// result is a usage error.
pub fn parse_selection(argument: &str) -> Result<BTreeSet<EntityKind>> {
    debug!(argument = %argument, "Parsing entity selection");

    let mut selected = BTreeSet::new();
    for token in argument.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<SelectionToken>() {
            Ok(SelectionToken::Kind(kind)) => {
                selected.insert(kind);
            }
            Ok(SelectionToken::All) => selected.extend(EntityKind::ALL),
            Ok(SelectionToken::None) => {}
            Err(_) => warn!(token = %token, "Ignoring unrecognized entity kind"),
        }
    }

    if selected.is_empty() {
        return Err(Error::NoEntitiesSelected {
            valid: valid_selection_names(),
        });
    }

    debug!(
        "Entities specified to be generated are: {}",
        join_kinds(selected.iter().copied())
    );
    Ok(selected)
}

/// Computes every kind that must be loaded to generate `requested`, prerequisites first.
pub fn dependency_closure<I>(requested: I) -> Vec<EntityKind>
where
    I: IntoIterator<Item = EntityKind>,
{
    let mut needed = BTreeSet::new();
    let mut pending: Vec<EntityKind> = requested.into_iter().collect();

    while let Some(kind) = pending.pop() {
        if needed.insert(kind) {
            pending.extend_from_slice(kind.prerequisites());
        }
    }

    EntityKind::ALL
        .into_iter()
        .filter(|kind| needed.contains(kind))
        .collect()
}

/// Comma-separated list of kind names
pub fn join_kinds<I>(kinds: I) -> String
where
    I: IntoIterator<Item = EntityKind>,
{
    kinds
        .into_iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
