// Licensed under the Apache-2.0 license

//! Output types and C code generation.
//!
//! ## Code Generation Flow
//!
//! ```text
//! Symbols → GeneratedFile → C source string
//!           ├── includes
//!           └── GeneratedTable[]  → one switch-based lookup function each
//!               └── GeneratedCase[] → `case KEY: return "LABEL";`
//! ```
//!
//! ## Generated Code Structure
//!
//! ```text
//! #include <stdint.h>
//! #include <drm_fourcc.h>
//!
//! #include "tables.h"
//!
//! const char *format_str(uint32_t format)
//! {
//!     switch (format) {
//!     case DRM_FORMAT_INVALID:
//!         return "INVALID";
//!     case DRM_FORMAT_C8:
//!         return "C8";
//!     default:
//!         return "Unknown";
//!     }
//! }
//! ```

use crate::util::{c_string_literal, include_directive};
use std::fmt::Write;

//=============================================================================
// Generated Types
//=============================================================================

/// One `case` of a lookup table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedCase {
    /// C expression the argument is compared against.
    pub key: String,
    /// Name returned for the key.
    pub label: String,
}

impl GeneratedCase {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A lookup function: `const char *NAME(ARG_TYPE ARG)` with a `switch` over
/// its argument.
#[derive(Clone, Debug)]
pub struct GeneratedTable {
    /// Function name.
    pub name: String,
    /// C type of the argument, e.g. `uint32_t`.
    pub arg_type: String,
    /// Argument name.
    pub arg_name: String,
    /// Cases in emission order. Duplicates are emitted as-is.
    pub cases: Vec<GeneratedCase>,
    /// Label returned by the `default` case.
    pub default_label: String,
}

/// The complete generated source file.
#[derive(Clone, Debug, Default)]
pub struct GeneratedFile {
    /// Headers to include, see [`include_directive`].
    pub includes: Vec<String>,
    pub tables: Vec<GeneratedTable>,
}

//=============================================================================
// Code Generation
//=============================================================================

impl GeneratedTable {
    /// Number of `case` arms, not counting `default`.
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Generate the C function for this table.
    pub fn generate_code(&self) -> String {
        let mut output = String::new();
        writeln!(
            output,
            "const char *{}({} {})",
            self.name, self.arg_type, self.arg_name
        )
        .unwrap();
        writeln!(output, "{{").unwrap();
        writeln!(output, "\tswitch ({}) {{", self.arg_name).unwrap();
        for case in &self.cases {
            writeln!(output, "\tcase {}:", case.key).unwrap();
            writeln!(output, "\t\treturn {};", c_string_literal(&case.label)).unwrap();
        }
        writeln!(output, "\tdefault:").unwrap();
        writeln!(
            output,
            "\t\treturn {};",
            c_string_literal(&self.default_label)
        )
        .unwrap();
        writeln!(output, "\t}}").unwrap();
        writeln!(output, "}}").unwrap();
        output
    }
}

impl GeneratedFile {
    /// Generate the complete C source.
    ///
    /// System includes come first, then local (quoted) includes, then each
    /// table separated by a blank line.
    pub fn generate_code(&self) -> String {
        let mut output = String::new();

        let (local, system): (Vec<_>, Vec<_>) =
            self.includes.iter().partition(|inc| inc.starts_with('"'));
        for group in [system, local] {
            if group.is_empty() {
                continue;
            }
            for include in group {
                writeln!(output, "{}", include_directive(include)).unwrap();
            }
            writeln!(output).unwrap();
        }

        for (i, table) in self.tables.iter().enumerate() {
            if i != 0 {
                writeln!(output).unwrap();
            }
            write!(output, "{}", table.generate_code()).unwrap();
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(cases: Vec<GeneratedCase>) -> GeneratedTable {
        GeneratedTable {
            name: "format_str".to_string(),
            arg_type: "uint32_t".to_string(),
            arg_name: "format".to_string(),
            cases,
            default_label: "Unknown".to_string(),
        }
    }

    #[test]
    fn test_table_code() {
        let code = table(vec![GeneratedCase::new("DRM_FORMAT_C8", "C8")]).generate_code();
        assert_eq!(
            code,
            "const char *format_str(uint32_t format)\n\
             {\n\
             \tswitch (format) {\n\
             \tcase DRM_FORMAT_C8:\n\
             \t\treturn \"C8\";\n\
             \tdefault:\n\
             \t\treturn \"Unknown\";\n\
             \t}\n\
             }\n"
        );
    }

    #[test]
    fn test_empty_table_has_default() {
        let t = table(vec![]);
        assert_eq!(t.case_count(), 0);
        let code = t.generate_code();
        assert!(!code.contains("\tcase "));
        assert!(code.contains("\tdefault:\n\t\treturn \"Unknown\";\n"));
    }

    #[test]
    fn test_duplicate_cases_kept() {
        let code = table(vec![
            GeneratedCase::new("DRM_FORMAT_R8", "R8"),
            GeneratedCase::new("DRM_FORMAT_R8", "R8"),
        ])
        .generate_code();
        assert_eq!(code.matches("\tcase DRM_FORMAT_R8:\n").count(), 2);
    }

    #[test]
    fn test_file_layout() {
        let file = GeneratedFile {
            includes: vec![
                "<stdint.h>".to_string(),
                "\"tables.h\"".to_string(),
                "<drm_fourcc.h>".to_string(),
            ],
            tables: vec![table(vec![]), table(vec![])],
        };
        let code = file.generate_code();
        assert!(code.starts_with(
            "#include <stdint.h>\n#include <drm_fourcc.h>\n\n#include \"tables.h\"\n\nconst char *format_str("
        ));
        assert!(code.contains("}\n\nconst char *format_str("));
        assert!(code.ends_with("\t}\n}\n"));
    }

    #[test]
    fn test_file_without_includes() {
        let file = GeneratedFile {
            includes: vec![],
            tables: vec![table(vec![])],
        };
        assert!(file.generate_code().starts_with("const char *format_str("));
    }
}
