// Licensed under the Apache-2.0 license

//! Helpers for formatting C source text.

/// Quotes `value` as a C string literal.
///
/// Backslashes, double quotes and control characters are escaped.
///
/// # Examples
/// ```
/// use fourcc_tables_generator::util::c_string_literal;
/// assert_eq!(c_string_literal("NV12"), "\"NV12\"");
/// assert_eq!(c_string_literal("a\"b"), "\"a\\\"b\"");
/// ```
pub fn c_string_literal(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push('"');
    for c in value.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            c if c.is_ascii_control() => result.push_str(&format!("\\{:03o}", c as u32)),
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Formats an `#include` directive. Bare names get angle brackets.
///
/// # Examples
/// ```
/// use fourcc_tables_generator::util::include_directive;
/// assert_eq!(include_directive("stdint.h"), "#include <stdint.h>");
/// assert_eq!(include_directive("\"tables.h\""), "#include \"tables.h\"");
/// ```
pub fn include_directive(header: &str) -> String {
    if header.starts_with('<') || header.starts_with('"') {
        format!("#include {header}")
    } else {
        format!("#include <{header}>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_string_literal() {
        assert_eq!(c_string_literal(""), "\"\"");
        assert_eq!(
            c_string_literal("ARM_AFBC(SPLIT | YTR)"),
            "\"ARM_AFBC(SPLIT | YTR)\""
        );
        assert_eq!(c_string_literal("a\\b"), "\"a\\\\b\"");
        assert_eq!(c_string_literal("a\nb"), "\"a\\nb\"");
        assert_eq!(c_string_literal("\u{1}"), "\"\\001\"");
    }

    #[test]
    fn test_include_directive() {
        assert_eq!(include_directive("<drm_fourcc.h>"), "#include <drm_fourcc.h>");
        assert_eq!(include_directive("drm_fourcc.h"), "#include <drm_fourcc.h>");
        assert_eq!(include_directive("\"tables.h\""), "#include \"tables.h\"");
    }
}
