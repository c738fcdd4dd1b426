// Licensed under the Apache-2.0 license

//! Symbol extraction from the header text.
//!
//! Each [`Category`] has its own independent rule. Rules anchor either at a
//! `#define` starting a line or at word boundaries anywhere in the text:
//!
//! | Category           | Anchor        | Shape                                          |
//! |--------------------|---------------|------------------------------------------------|
//! | `Format`           | `#define`     | `PREFIX\w*` then optional `\` newline, marker  |
//! | `PrefixedModifier` | word boundary | `PREFIX\w+`                                    |
//! | `NamedModifier`    | `#define`     | `PREFIX(TAG)\w*` followed by whitespace        |
//! | `AfbcBlockSize`    | word boundary | `PREFIX(_WxH)+`                                |
//! | `AfbcBitmask`      | word boundary | `PREFIX[A-Z]+`                                 |

use std::collections::BTreeSet;
use std::fmt;

use crate::afbc::MAX_BITMASK_SYMBOLS;
use crate::config::RuleConfig;
use crate::scan::{define_directives, identifiers, skip_continuation, starts_with_whitespace};

/// The kinds of symbols pulled out of the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Format,
    PrefixedModifier,
    NamedModifier,
    AfbcBlockSize,
    AfbcBitmask,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Format,
        Category::PrefixedModifier,
        Category::NamedModifier,
        Category::AfbcBlockSize,
        Category::AfbcBitmask,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Format => "format",
            Category::PrefixedModifier => "basic-modifier-prefixed",
            Category::NamedModifier => "basic-modifier-named",
            Category::AfbcBlockSize => "afbc-block-size",
            Category::AfbcBitmask => "afbc-bitmask",
        }
    }

    /// Whether repeated matches collapse into one symbol.
    ///
    /// Format definitions are kept exactly as found, duplicates included.
    pub fn deduplicates(&self) -> bool {
        !matches!(self, Category::Format)
    }

    fn matches(&self, rules: &RuleConfig, text: &str) -> Vec<String> {
        match self {
            Category::Format => define_directives(text)
                .filter(|def| def.name.starts_with(rules.format_prefix.as_str()))
                .filter(|def| {
                    skip_continuation(def.rest).starts_with(rules.fourcc_marker.as_str())
                })
                .map(|def| def.name.to_string())
                .collect(),
            Category::PrefixedModifier => identifiers(text)
                .filter(|id| {
                    id.len() > rules.prefixed_modifier_prefix.len()
                        && id.starts_with(rules.prefixed_modifier_prefix.as_str())
                })
                .map(str::to_string)
                .collect(),
            Category::NamedModifier => define_directives(text)
                .filter(|def| starts_with_whitespace(def.rest))
                .filter(|def| {
                    def.name
                        .strip_prefix(rules.named_modifier_prefix.as_str())
                        .is_some_and(|tail| {
                            rules
                                .named_modifier_tags
                                .iter()
                                .any(|tag| tail.starts_with(tag.as_str()))
                        })
                })
                .map(|def| def.name.to_string())
                .collect(),
            Category::AfbcBlockSize => identifiers(text)
                .filter(|id| {
                    id.strip_prefix(rules.afbc_block_size_prefix.as_str())
                        .is_some_and(is_dimension_list)
                })
                .map(str::to_string)
                .collect(),
            Category::AfbcBitmask => identifiers(text)
                .filter(|id| {
                    id.strip_prefix(rules.afbc_prefix.as_str())
                        .is_some_and(|tail| {
                            !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_uppercase())
                        })
                })
                .map(str::to_string)
                .collect(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Matches `_16x16`, `_32x8_64x4` and so on.
fn is_dimension_list(text: &str) -> bool {
    match text.strip_prefix('_') {
        Some(dims) => dims.split('_').all(is_dimension),
        None => false,
    }
}

fn is_dimension(text: &str) -> bool {
    let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    text.split_once('x')
        .is_some_and(|(w, h)| is_number(w) && is_number(h))
}

/// Applies the rule of `category` to `text`.
///
/// Returns the captured symbols in order of appearance. Categories that
/// deduplicate come back sorted with repeats removed.
pub fn extract(text: &str, rules: &RuleConfig, category: Category) -> Vec<String> {
    let found = category.matches(rules, text);
    if category.deduplicates() {
        found
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    } else {
        found
    }
}

/// Every symbol list the generator consumes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Symbols {
    /// Format symbols in definition order.
    pub formats: Vec<String>,
    pub prefixed_modifiers: Vec<String>,
    pub named_modifiers: Vec<String>,
    pub afbc_block_sizes: Vec<String>,
    pub afbc_bitmasks: Vec<String>,
}

impl Symbols {
    /// Runs every extraction rule over `text`.
    pub fn extract(text: &str, rules: &RuleConfig) -> Self {
        let symbols = Self {
            formats: extract(text, rules, Category::Format),
            prefixed_modifiers: extract(text, rules, Category::PrefixedModifier),
            named_modifiers: extract(text, rules, Category::NamedModifier),
            afbc_block_sizes: extract(text, rules, Category::AfbcBlockSize),
            afbc_bitmasks: extract(text, rules, Category::AfbcBitmask),
        };
        for category in Category::ALL {
            log::debug!("{}: {} symbols", category, symbols.get(category).len());
        }
        symbols
    }

    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Format => &self.formats,
            Category::PrefixedModifier => &self.prefixed_modifiers,
            Category::NamedModifier => &self.named_modifiers,
            Category::AfbcBlockSize => &self.afbc_block_sizes,
            Category::AfbcBitmask => &self.afbc_bitmasks,
        }
    }

    /// Number of AFBC cases the combination sweep will emit:
    /// `2^bitmasks * (1 + block_sizes)`.
    ///
    /// Returns `None` when the bitmask list is too large to enumerate.
    pub fn afbc_case_count(&self) -> Option<usize> {
        if self.afbc_bitmasks.len() > MAX_BITMASK_SYMBOLS {
            return None;
        }
        (1usize << self.afbc_bitmasks.len()).checked_mul(1 + self.afbc_block_sizes.len())
    }
}
