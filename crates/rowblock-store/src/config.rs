//! Row block container configuration.

use rowblock_core::BlockError;

/// Configuration for a [`RowBlockContainer`](crate::RowBlockContainer).
///
/// Fixes the label width and the ordered list of auxiliary namespaces.
/// Validated at construction; immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowBlockConfig {
    /// Number of labels stored per row.
    ///
    /// Default: 1. Must be at least 1. Not part of the binary format, so a
    /// container that loads a block must be configured with the width the
    /// block was saved with.
    pub label_width: usize,

    /// Names of the auxiliary namespaces, one extra block each, in the
    /// order rows supply their sub-rows.
    ///
    /// Default: none. Names must be unique.
    pub extras: Vec<String>,
}

impl RowBlockConfig {
    /// Default number of labels per row.
    pub const DEFAULT_LABEL_WIDTH: usize = 1;

    /// Create a config with one label per row and no extras.
    pub fn new() -> Self {
        Self {
            label_width: Self::DEFAULT_LABEL_WIDTH,
            extras: Vec::new(),
        }
    }

    /// Set the label width.
    pub fn with_label_width(mut self, label_width: usize) -> Self {
        self.label_width = label_width;
        self
    }

    /// Add an auxiliary namespace after the existing ones.
    pub fn with_extra(mut self, name: impl Into<String>) -> Self {
        self.extras.push(name.into());
        self
    }

    /// Check the label width and namespace names.
    pub fn validate(&self) -> Result<(), BlockError> {
        if self.label_width == 0 {
            return Err(BlockError::InvalidConfig {
                reason: "label_width must be at least 1".into(),
            });
        }
        for (i, name) in self.extras.iter().enumerate() {
            if self.extras[i + 1..].contains(name) {
                return Err(BlockError::InvalidConfig {
                    reason: format!("duplicate extra namespace '{name}'"),
                });
            }
        }
        Ok(())
    }
}

impl Default for RowBlockConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_single_label_without_extras() {
        let config = RowBlockConfig::default();
        assert_eq!(config.label_width, 1);
        assert!(config.extras.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_label_width_rejected() {
        let config = RowBlockConfig::new().with_label_width(0);
        assert!(matches!(
            config.validate(),
            Err(BlockError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn duplicate_extra_rejected() {
        let config = RowBlockConfig::new().with_extra("dense").with_extra("dense");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("dense"));
    }
}
