// Licensed under the Apache-2.0 license

//! Configuration for symbol extraction and for the generated C file.
//!
//! [`RuleConfig`] holds the prefixes, markers and tags the extractor matches
//! against. [`OutputConfig`] controls the names and includes of the emitted
//! C source. Both default to the conventions of the kernel's `drm_fourcc.h`.

/// Prefixes, markers and tags used by the extraction rules.
///
/// # Example
///
/// ```
/// use fourcc_tables_generator::config::RuleConfig;
///
/// let rules = RuleConfig::with_defaults();
/// assert_eq!(rules.format_label("DRM_FORMAT_XRGB8888"), "XRGB8888");
///
/// let rules = RuleConfig::with_defaults()
///     .with_format_prefix("FMT_")
///     .with_afbc_prefix("CAP_");
/// assert_eq!(rules.format_label("FMT_A"), "A");
/// assert_eq!(rules.afbc_short_name("CAP_FOO"), "FOO");
/// ```
#[derive(Clone, Debug)]
pub struct RuleConfig {
    /// Prefix every format symbol carries. Also stripped to form the label.
    pub format_prefix: String,

    /// Builder macro a format definition must expand to (e.g. `fourcc_code`).
    pub fourcc_marker: String,

    /// Prefix of vendor modifiers collected from anywhere in the text.
    pub prefixed_modifier_prefix: String,

    /// Generic modifier prefix used by the named modifier rule.
    pub named_modifier_prefix: String,

    /// Tags allowed right after [`Self::named_modifier_prefix`].
    pub named_modifier_tags: Vec<String>,

    /// Prefix of AFBC bitmask symbols. Stripped from every AFBC member to form
    /// the short names used in labels.
    pub afbc_prefix: String,

    /// Prefix of AFBC block size symbols, followed by the `_WxH` dimensions.
    pub afbc_block_size_prefix: String,

    /// Macro wrapping an AFBC combination to build the modifier value.
    pub afbc_modifier_macro: String,

    /// Label wrapping an AFBC combination in the generated table.
    pub afbc_label: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl RuleConfig {
    /// Create a RuleConfig matching `drm_fourcc.h`.
    pub fn with_defaults() -> Self {
        Self {
            format_prefix: "DRM_FORMAT_".to_string(),
            fourcc_marker: "fourcc_code".to_string(),
            prefixed_modifier_prefix: "I915_FORMAT_MOD_".to_string(),
            named_modifier_prefix: "DRM_FORMAT_MOD_".to_string(),
            named_modifier_tags: [
                "INVALID",
                "LINEAR",
                "SAMSUNG",
                "QCOM",
                "VIVANTE",
                "NVIDIA",
                "BROADCOM",
                "ALLWINNER",
            ]
            .iter()
            .map(|tag| tag.to_string())
            .collect(),
            afbc_prefix: "AFBC_FORMAT_MOD_".to_string(),
            afbc_block_size_prefix: "AFBC_FORMAT_MOD_BLOCK_SIZE".to_string(),
            afbc_modifier_macro: "DRM_FORMAT_MOD_ARM_AFBC".to_string(),
            afbc_label: "ARM_AFBC".to_string(),
        }
    }

    pub fn with_format_prefix(mut self, prefix: &str) -> Self {
        self.format_prefix = prefix.to_string();
        self
    }

    pub fn with_fourcc_marker(mut self, marker: &str) -> Self {
        self.fourcc_marker = marker.to_string();
        self
    }

    pub fn with_prefixed_modifier_prefix(mut self, prefix: &str) -> Self {
        self.prefixed_modifier_prefix = prefix.to_string();
        self
    }

    pub fn with_named_modifier_prefix(mut self, prefix: &str) -> Self {
        self.named_modifier_prefix = prefix.to_string();
        self
    }

    /// Replace the named modifier allow-list.
    pub fn with_named_modifier_tags(mut self, tags: &[&str]) -> Self {
        self.named_modifier_tags = tags.iter().map(|tag| tag.to_string()).collect();
        self
    }

    /// Add a tag to the named modifier allow-list.
    pub fn add_named_modifier_tag(mut self, tag: &str) -> Self {
        self.named_modifier_tags.push(tag.to_string());
        self
    }

    pub fn with_afbc_prefix(mut self, prefix: &str) -> Self {
        self.afbc_prefix = prefix.to_string();
        self
    }

    pub fn with_afbc_block_size_prefix(mut self, prefix: &str) -> Self {
        self.afbc_block_size_prefix = prefix.to_string();
        self
    }

    /// Set the macro and label wrapping AFBC combinations.
    pub fn with_afbc_modifier(mut self, macro_name: &str, label: &str) -> Self {
        self.afbc_modifier_macro = macro_name.to_string();
        self.afbc_label = label.to_string();
        self
    }

    /// Label of a format symbol: the name without the format prefix.
    pub fn format_label<'a>(&self, symbol: &'a str) -> &'a str {
        symbol
            .strip_prefix(self.format_prefix.as_str())
            .unwrap_or(symbol)
    }

    /// Short name of an AFBC symbol: the name without the AFBC prefix.
    pub fn afbc_short_name<'a>(&self, symbol: &'a str) -> &'a str {
        symbol
            .strip_prefix(self.afbc_prefix.as_str())
            .unwrap_or(symbol)
    }
}

/// Names and includes of the generated C file.
///
/// # Example
///
/// ```
/// use fourcc_tables_generator::config::OutputConfig;
///
/// let config = OutputConfig::with_defaults().with_modifier_fn("modifier_str");
/// assert_eq!(config.format_fn, "format_str");
/// assert_eq!(config.modifier_fn, "modifier_str");
/// ```
#[derive(Clone, Debug)]
pub struct OutputConfig {
    /// Headers included at the top of the file, emitted verbatim inside
    /// `#include` directives (e.g. `<stdint.h>` or `"tables.h"`).
    pub includes: Vec<String>,

    /// Name of the `uint32_t` format lookup function.
    pub format_fn: String,

    /// Name of the `uint64_t` modifier lookup function.
    pub modifier_fn: String,

    /// Symbol of the hard-coded first format case.
    pub invalid_format: String,

    /// Label returned by the invalid format case.
    pub invalid_label: String,

    /// Label returned by both fallback cases.
    pub unknown_label: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl OutputConfig {
    /// Create an OutputConfig producing the `tables.c` consumed by drm_info.
    pub fn with_defaults() -> Self {
        Self {
            includes: vec![
                "<stdint.h>".to_string(),
                "<drm_fourcc.h>".to_string(),
                "\"tables.h\"".to_string(),
            ],
            format_fn: "format_str".to_string(),
            modifier_fn: "basic_modifier_str".to_string(),
            invalid_format: "DRM_FORMAT_INVALID".to_string(),
            invalid_label: "INVALID".to_string(),
            unknown_label: "Unknown".to_string(),
        }
    }

    pub fn with_format_fn(mut self, name: &str) -> Self {
        self.format_fn = name.to_string();
        self
    }

    pub fn with_modifier_fn(mut self, name: &str) -> Self {
        self.modifier_fn = name.to_string();
        self
    }

    /// Replace the include list.
    pub fn with_includes(mut self, includes: &[&str]) -> Self {
        self.includes = includes.iter().map(|inc| inc.to_string()).collect();
        self
    }

    pub fn with_invalid_format(mut self, symbol: &str, label: &str) -> Self {
        self.invalid_format = symbol.to_string();
        self.invalid_label = label.to_string();
        self
    }

    pub fn with_unknown_label(mut self, label: &str) -> Self {
        self.unknown_label = label.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let rules = RuleConfig::with_defaults();
        assert_eq!(rules.format_label("DRM_FORMAT_NV12"), "NV12");
        assert_eq!(rules.afbc_short_name("AFBC_FORMAT_MOD_YTR"), "YTR");
        assert_eq!(
            rules.afbc_short_name("AFBC_FORMAT_MOD_BLOCK_SIZE_16x16"),
            "BLOCK_SIZE_16x16"
        );
    }

    #[test]
    fn test_label_without_prefix_is_unchanged() {
        let rules = RuleConfig::with_defaults();
        assert_eq!(rules.format_label("NV12"), "NV12");
        assert_eq!(rules.afbc_short_name("YTR"), "YTR");
    }

    #[test]
    fn test_named_modifier_tags() {
        let rules = RuleConfig::with_defaults();
        assert_eq!(rules.named_modifier_tags.len(), 8);
        assert!(rules.named_modifier_tags.iter().any(|t| t == "ALLWINNER"));

        let rules = RuleConfig::with_defaults()
            .with_named_modifier_tags(&["LINEAR"])
            .add_named_modifier_tag("AMLOGIC");
        assert_eq!(rules.named_modifier_tags, vec!["LINEAR", "AMLOGIC"]);
    }

    #[test]
    fn test_output_defaults() {
        let config = OutputConfig::default();
        assert_eq!(config.format_fn, "format_str");
        assert_eq!(config.modifier_fn, "basic_modifier_str");
        assert_eq!(config.includes.len(), 3);
        assert_eq!(config.unknown_label, "Unknown");
    }
}
