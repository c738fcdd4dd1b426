// Licensed under the Apache-2.0 license

//! Enumeration of AFBC modifier combinations.
//!
//! An AFBC modifier is built from any subset of the feature bits, optionally
//! combined with one block size. For bits `B` and block sizes `T` the sweep
//! yields `2^|B| * (1 + |T|)` combinations:
//!
//! ```text
//! for each subset S of B (bitmask counting, 0 .. 2^|B|):
//!     S
//!     S | T0
//!     S | T1
//!     ...
//! ```
//!
//! Many of these are not accepted by any real hardware. They only cost a few
//! dead `case` labels in the generated table.

use crate::config::RuleConfig;
use crate::error::{TablesError, TablesResult};

/// Largest bitmask list the sweep accepts.
///
/// Real headers define fewer than a dozen feature bits.
pub const MAX_BITMASK_SYMBOLS: usize = 16;

/// One AFBC modifier: a sorted set of feature bits plus an optional block size.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Combination<'a> {
    /// Feature bits, sorted by name.
    pub bits: Vec<&'a str>,
    /// Block size, always placed after the bits.
    pub block_size: Option<&'a str>,
}

impl<'a> Combination<'a> {
    /// All members in rendering order.
    pub fn members(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.bits.iter().copied().chain(self.block_size)
    }

    /// The C expression selecting this modifier, e.g.
    /// `DRM_FORMAT_MOD_ARM_AFBC(AFBC_FORMAT_MOD_SPLIT | AFBC_FORMAT_MOD_BLOCK_SIZE_16x16)`.
    pub fn key(&self, rules: &RuleConfig) -> String {
        wrap(&rules.afbc_modifier_macro, self.members())
    }

    /// The human readable name, e.g. `ARM_AFBC(SPLIT | BLOCK_SIZE_16x16)`.
    pub fn label(&self, rules: &RuleConfig) -> String {
        wrap(
            &rules.afbc_label,
            self.members().map(|member| rules.afbc_short_name(member)),
        )
    }
}

/// Renders `name(a | b | c)`, or `name(0)` when there are no members.
fn wrap<'a>(name: &str, members: impl Iterator<Item = &'a str>) -> String {
    let joined = members.collect::<Vec<_>>().join(" | ");
    if joined.is_empty() {
        format!("{name}(0)")
    } else {
        format!("{name}({joined})")
    }
}

/// Iterates over every subset of `symbols` by counting from `0` to
/// `2^len - 1`; bit `i` of the counter selects `symbols[i]`.
///
/// The empty subset comes first and the full set last. Subsets keep the
/// relative order of `symbols`. `symbols.len()` must not exceed
/// [`MAX_BITMASK_SYMBOLS`].
pub fn subsets<'s, 'a>(symbols: &'s [&'a str]) -> impl Iterator<Item = Vec<&'a str>> + 's {
    (0u32..1 << symbols.len()).map(move |mask| {
        symbols
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, symbol)| *symbol)
            .collect()
    })
}

/// Builds every combination of `bitmasks` with and without each of
/// `block_sizes`.
///
/// The bitmask list is sorted and deduplicated first, so the generated keys
/// do not depend on the order the bits appear in the header.
pub fn combinations<'a>(
    bitmasks: &'a [String],
    block_sizes: &'a [String],
) -> TablesResult<Vec<Combination<'a>>> {
    let mut bits: Vec<&str> = bitmasks.iter().map(String::as_str).collect();
    bits.sort_unstable();
    bits.dedup();
    if bits.len() > MAX_BITMASK_SYMBOLS {
        return Err(TablesError::TooManyBitmaskSymbols {
            count: bits.len(),
            max: MAX_BITMASK_SYMBOLS,
        });
    }

    let mut result = Vec::with_capacity((1 << bits.len()) * (1 + block_sizes.len()));
    let suffixes: Vec<Option<&str>> = std::iter::once(None)
        .chain(block_sizes.iter().map(|t| Some(t.as_str())))
        .collect();
    for subset in subsets(&bits) {
        for &block_size in &suffixes {
            result.push(Combination {
                bits: subset.clone(),
                block_size,
            });
        }
    }
    Ok(result)
}
