//! Output mode routing.

/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON only
    Json,
    /// Stable plain text for logs and scripts
    #[default]
    Plain,
    /// Styled tables and badges (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve the mode from flags and environment.
    ///
    /// `--json` wins outright. An explicit `--format plain` or a dumb
    /// terminal forces plain; otherwise a TTY gets pretty output and
    /// pipes get plain.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        if format_flag == Some("plain") || term_is_dumb || !is_tty {
            return Self::Plain;
        }
        Self::Pretty
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
