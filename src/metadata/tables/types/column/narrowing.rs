//! Overflow policy for column writes.

/// How a column write treats values that do not fit the resolved width.
///
/// Row encoders that store small indexes rely on the low bytes being kept, so
/// [`Narrowing::Truncate`] is the default and the behavior of
/// [`crate::metadata::tables::ColumnInfo::write`]. Writers that build fresh tables can opt
/// into [`Narrowing::Strict`] to catch layouts whose widths were resolved too small.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Narrowing {
    /// Keep the low bytes and drop the rest
    #[default]
    Truncate,
    /// Reject the value with [`crate::Error::ValueOverflow`] and write nothing
    Strict,
}

impl Narrowing {
    /// Returns true if out-of-range values are rejected.
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Narrowing::Strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_truncates() {
        assert_eq!(Narrowing::default(), Narrowing::Truncate);
        assert!(!Narrowing::default().is_strict());
        assert!(Narrowing::Strict.is_strict());
    }
}
