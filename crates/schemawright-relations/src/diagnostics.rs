//! Non-fatal condition accumulator — a diagnostics channel for conditions
//! that produce a usable but inferior outcome. Every diagnostic is also
//! emitted via `tracing` at
//! the moment it's recorded, so a host that only cares about logs doesn't
//! need to inspect the returned plan.

/// One non-fatal condition encountered while building a relationship plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A candidate name collided with an inherited/catalog method and was
    /// renamed by repeatedly suffixing `_rel`.
    RelSuffixApplied {
        moniker: String,
        original: String,
        resolved: String,
    },
    /// A duplicate relationship name on the same source was disambiguated
    /// with a bare numeric suffix because no adjective distinguished it and
    /// no `rel_name_map` override was supplied.
    UnmappedNumericDisambiguation {
        moniker: String,
        original: String,
        resolved: String,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::RelSuffixApplied {
                moniker,
                original,
                resolved,
            } => write!(
                f,
                "{moniker}: relationship '{original}' collided with an inherited method, renamed to '{resolved}'"
            ),
            Diagnostic::UnmappedNumericDisambiguation {
                moniker,
                original,
                resolved,
            } => write!(
                f,
                "{moniker}: relationship '{original}' has an unmapped duplicate, disambiguated to '{resolved}' — consider a rel_name_map override"
            ),
        }
    }
}

/// Accumulates [`Diagnostic`]s produced while building a relationship plan.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(%diagnostic, "non-fatal relationship naming condition");
        self.entries.push(diagnostic);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
