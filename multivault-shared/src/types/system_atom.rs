use std::fmt;

/// Well-known atoms used as predicates and types by the test scenarios.
///
/// Each variant maps to a fixed schema.org URI; the set is closed on purpose
/// so scenarios never depend on values discovered at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemAtom {
    Person,
    Organization,
    Thing,
    FollowAction,
    Keywords,
}

impl SystemAtom {
    /// Every system atom, in the order the seed script creates them.
    pub const ALL: [SystemAtom; 5] = [
        SystemAtom::FollowAction,
        SystemAtom::Keywords,
        SystemAtom::Thing,
        SystemAtom::Organization,
        SystemAtom::Person,
    ];

    /// Returns the URI stored on chain for this atom.
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemAtom::Person => "https://schema.org/Person",
            SystemAtom::Organization => "https://schema.org/Organization",
            SystemAtom::Thing => "https://schema.org/Thing",
            SystemAtom::FollowAction => "https://schema.org/FollowAction",
            SystemAtom::Keywords => "https://schema.org/keywords",
        }
    }

    /// Resolves a URI back to its system atom, if it is one.
    pub fn from_uri(uri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|atom| atom.as_str() == uri)
    }
}

impl fmt::Display for SystemAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for SystemAtom {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_uri_is_lowercase() {
        assert_eq!(SystemAtom::Keywords.as_str(), "https://schema.org/keywords");
    }

    #[test]
    fn test_from_uri_round_trips_every_variant() {
        for atom in SystemAtom::ALL {
            assert_eq!(SystemAtom::from_uri(atom.as_str()), Some(atom));
        }
        assert_eq!(SystemAtom::from_uri("https://schema.org/Event"), None);
    }
}
