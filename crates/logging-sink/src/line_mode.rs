/// Controls whether a [`WriterSink`](crate::WriterSink) terminates records that lack a trailing newline.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator when the record does not already end with one.
    #[default]
    WithNewline,
    /// Forward the record bytes unchanged.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode terminates unterminated records with a newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }

    /// Returns whether `record` needs a newline appended under this mode.
    ///
    /// Empty records count as unterminated, so an entry with no payload still
    /// produces a blank line on line-oriented streams.
    #[must_use]
    pub fn needs_terminator(self, record: &[u8]) -> bool {
        self.append_newline() && record.last() != Some(&b'\n')
    }
}

impl From<bool> for LineMode {
    /// Converts a boolean "append newline" flag into a [`LineMode`].
    ///
    /// ```
    /// use logging_sink::LineMode;
    ///
    /// assert_eq!(LineMode::from(true), LineMode::WithNewline);
    /// assert_eq!(LineMode::from(false), LineMode::WithoutNewline);
    /// ```
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

#[cfg(test)]
mod tests;
