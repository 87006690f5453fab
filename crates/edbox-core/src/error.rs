use std::fmt;

/// Machine-readable error codes for agent-friendly decision making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    UnsupportedIdentifier,
    UnknownColorVariant,
    ArchiveParseError,
    ThreadNotFound,
    ArchivePathNotFound,
    ArchiveReadError,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1002",
            Self::UnsupportedIdentifier => "E2001",
            Self::UnknownColorVariant => "E2002",
            Self::ArchiveParseError => "E3001",
            Self::ThreadNotFound => "E3002",
            Self::ArchivePathNotFound => "E3003",
            Self::ArchiveReadError => "E3004",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::UnsupportedIdentifier => "Unsupported identifier value",
            Self::UnknownColorVariant => "Unknown color variant",
            Self::ArchiveParseError => "Archive file parse error",
            Self::ThreadNotFound => "Thread not found",
            Self::ArchivePathNotFound => "Archive path not found",
            Self::ArchiveReadError => "Archive file read error",
        }
    }

    /// Optional remediation hint that can be surfaced to operators and agents.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in edbox/config.toml and retry."),
            Self::UnsupportedIdentifier => Some("Pass an integer or a string identifier."),
            Self::UnknownColorVariant => Some("Use `primary` or `secondary`."),
            Self::ArchiveParseError => {
                Some("Check that posts.json/users.json were written by `edbox` archiving.")
            }
            Self::ThreadNotFound => None,
            Self::ArchivePathNotFound => Some(
                "An archive directory needs avatars/, files/, info.json, users.json and posts.json.",
            ),
            Self::ArchiveReadError => Some("Check file permissions and retry."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;
    use std::collections::HashSet;

    #[test]
    fn all_codes_are_unique() {
        let all = [
            ErrorCode::ConfigParseError,
            ErrorCode::UnsupportedIdentifier,
            ErrorCode::UnknownColorVariant,
            ErrorCode::ArchiveParseError,
            ErrorCode::ThreadNotFound,
            ErrorCode::ArchivePathNotFound,
            ErrorCode::ArchiveReadError,
        ];

        let mut seen = HashSet::new();
        for code in all {
            assert!(seen.insert(code.code()), "duplicate code {}", code.code());
        }
    }

    #[test]
    fn code_format_is_machine_friendly() {
        let code = ErrorCode::UnsupportedIdentifier.code();
        assert_eq!(code.len(), 5);
        assert!(code.starts_with('E'));
        assert!(code.chars().skip(1).all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn display_is_the_code() {
        assert_eq!(ErrorCode::ThreadNotFound.to_string(), "E3002");
        assert!(ErrorCode::ThreadNotFound.hint().is_none());
    }
}
