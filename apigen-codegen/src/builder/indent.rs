//! Indentation unit of generated code.

/// The text written once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// Two spaces, the layout of every emitted TypeScript module.
    pub const TYPESCRIPT: Self = Self("  ");
    pub const FOUR_SPACES: Self = Self("    ");
    pub const TAB: Self = Self("\t");

    pub fn unit(&self) -> &'static str {
        self.0
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(Indent::default().unit(), "  ");
        assert_eq!(Indent::FOUR_SPACES.unit(), "    ");
        assert_eq!(Indent::TAB.unit(), "\t");
    }
}
