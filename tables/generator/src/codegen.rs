// Licensed under the Apache-2.0 license

//! Entry points tying extraction and generation together.

use std::path::Path;

use crate::afbc::combinations;
use crate::config::{OutputConfig, RuleConfig};
use crate::error::{TablesError, TablesResult};
use crate::extract::Symbols;
use crate::output::{GeneratedCase, GeneratedFile, GeneratedTable};

/// Builds the format lookup table.
///
/// The invalid format comes first, followed by every format symbol in
/// definition order.
pub fn format_table(
    symbols: &Symbols,
    rules: &RuleConfig,
    config: &OutputConfig,
) -> GeneratedTable {
    let mut cases = vec![GeneratedCase::new(
        &config.invalid_format,
        &config.invalid_label,
    )];
    cases.extend(
        symbols
            .formats
            .iter()
            .map(|name| GeneratedCase::new(name, rules.format_label(name))),
    );
    GeneratedTable {
        name: config.format_fn.clone(),
        arg_type: "uint32_t".to_string(),
        arg_name: "format".to_string(),
        cases,
        default_label: config.unknown_label.clone(),
    }
}

/// Builds the modifier lookup table: prefixed modifiers, named modifiers,
/// then every AFBC combination.
pub fn modifier_table(
    symbols: &Symbols,
    rules: &RuleConfig,
    config: &OutputConfig,
) -> TablesResult<GeneratedTable> {
    let mut cases: Vec<GeneratedCase> = symbols
        .prefixed_modifiers
        .iter()
        .chain(&symbols.named_modifiers)
        .map(|name| GeneratedCase::new(name, name))
        .collect();

    let afbc = combinations(&symbols.afbc_bitmasks, &symbols.afbc_block_sizes)?;
    log::debug!(
        "{} AFBC combinations from {} bits and {} block sizes",
        afbc.len(),
        symbols.afbc_bitmasks.len(),
        symbols.afbc_block_sizes.len()
    );
    cases.extend(
        afbc.iter()
            .map(|combo| GeneratedCase::new(combo.key(rules), combo.label(rules))),
    );

    Ok(GeneratedTable {
        name: config.modifier_fn.clone(),
        arg_type: "uint64_t".to_string(),
        arg_name: "modifier".to_string(),
        cases,
        default_label: config.unknown_label.clone(),
    })
}

/// Builds the complete file description from extracted symbols.
pub fn generate_file(
    symbols: &Symbols,
    rules: &RuleConfig,
    config: &OutputConfig,
) -> TablesResult<GeneratedFile> {
    Ok(GeneratedFile {
        includes: config.includes.clone(),
        tables: vec![
            format_table(symbols, rules, config),
            modifier_table(symbols, rules, config)?,
        ],
    })
}

/// Generates the C source for the header contents in `text`.
pub fn generate_tables(
    text: &str,
    rules: &RuleConfig,
    config: &OutputConfig,
) -> TablesResult<String> {
    let symbols = Symbols::extract(text, rules);
    let file = generate_file(&symbols, rules, config)?;
    for table in &file.tables {
        log::debug!("{}: {} cases", table.name, table.case_count());
    }
    Ok(file.generate_code())
}

/// Reads the header at `input` and writes the generated C source to `output`
/// using the default `drm_fourcc.h` rules.
pub fn generate_tables_from_file(input: &Path, output: &Path) -> TablesResult<()> {
    generate_tables_from_file_with_config(
        input,
        output,
        &RuleConfig::with_defaults(),
        &OutputConfig::with_defaults(),
    )
}

/// Like [`generate_tables_from_file`], but with custom configuration.
///
/// The input is read and the whole document generated before `output` is
/// opened, so a missing input leaves `output` untouched. A failure while
/// writing can leave a truncated file behind.
pub fn generate_tables_from_file_with_config(
    input: &Path,
    output: &Path,
    rules: &RuleConfig,
    config: &OutputConfig,
) -> TablesResult<()> {
    let text = std::fs::read_to_string(input).map_err(|source| TablesError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    let code = generate_tables(&text, rules, config)?;
    std::fs::write(output, &code).map_err(|source| TablesError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;
    log::info!(
        "Generated {} ({} bytes) from {}",
        output.display(),
        code.len(),
        input.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols() -> Symbols {
        Symbols {
            formats: vec!["DRM_FORMAT_R8".to_string(), "DRM_FORMAT_NV12".to_string()],
            prefixed_modifiers: vec!["I915_FORMAT_MOD_X_TILED".to_string()],
            named_modifiers: vec!["DRM_FORMAT_MOD_LINEAR".to_string()],
            afbc_block_sizes: vec!["AFBC_FORMAT_MOD_BLOCK_SIZE_16x16".to_string()],
            afbc_bitmasks: vec!["AFBC_FORMAT_MOD_YTR".to_string()],
        }
    }

    #[test]
    fn test_format_table() {
        let table = format_table(
            &symbols(),
            &RuleConfig::with_defaults(),
            &OutputConfig::with_defaults(),
        );
        assert_eq!(table.name, "format_str");
        assert_eq!(
            table.cases,
            vec![
                GeneratedCase::new("DRM_FORMAT_INVALID", "INVALID"),
                GeneratedCase::new("DRM_FORMAT_R8", "R8"),
                GeneratedCase::new("DRM_FORMAT_NV12", "NV12"),
            ]
        );
    }

    #[test]
    fn test_modifier_table_order() {
        let table = modifier_table(
            &symbols(),
            &RuleConfig::with_defaults(),
            &OutputConfig::with_defaults(),
        )
        .unwrap();
        assert_eq!(table.name, "basic_modifier_str");
        let keys: Vec<_> = table.cases.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "I915_FORMAT_MOD_X_TILED",
                "DRM_FORMAT_MOD_LINEAR",
                "DRM_FORMAT_MOD_ARM_AFBC(0)",
                "DRM_FORMAT_MOD_ARM_AFBC(AFBC_FORMAT_MOD_BLOCK_SIZE_16x16)",
                "DRM_FORMAT_MOD_ARM_AFBC(AFBC_FORMAT_MOD_YTR)",
                "DRM_FORMAT_MOD_ARM_AFBC(AFBC_FORMAT_MOD_YTR | AFBC_FORMAT_MOD_BLOCK_SIZE_16x16)",
            ]
        );
        assert_eq!(table.cases[5].label, "ARM_AFBC(YTR | BLOCK_SIZE_16x16)");
        assert_eq!(table.cases[0].label, "I915_FORMAT_MOD_X_TILED");
    }

    #[test]
    fn test_empty_symbols() {
        let file = generate_file(
            &Symbols::default(),
            &RuleConfig::with_defaults(),
            &OutputConfig::with_defaults(),
        )
        .unwrap();
        assert_eq!(file.tables[0].case_count(), 1);
        assert_eq!(file.tables[1].case_count(), 1);
        assert_eq!(file.tables[1].cases[0].key, "DRM_FORMAT_MOD_ARM_AFBC(0)");
    }

    #[test]
    fn test_custom_function_names() {
        let config = OutputConfig::with_defaults()
            .with_format_fn("fourcc_name")
            .with_modifier_fn("modifier_str");
        let code = generate_tables("", &RuleConfig::with_defaults(), &config).unwrap();
        assert!(code.contains("const char *fourcc_name(uint32_t format)\n"));
        assert!(code.contains("const char *modifier_str(uint64_t modifier)\n"));
    }
}
