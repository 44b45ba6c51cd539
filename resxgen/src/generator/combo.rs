//! Emits the shared lookup helper for one distinct culture combination.

use crate::{
    lookup,
    types::{CultureCombination, DefinedCulture, GeneratedUnit},
};

use super::{HELPERS_NAMESPACE, INDENT, preamble};

/// Deterministic identifier fragment for a combination: the culture
/// identifiers joined by underscores, in combination order.
pub(crate) fn function_name_postfix(defined: &[DefinedCulture]) -> String {
    defined
        .iter()
        .map(|d| d.lcid.to_string())
        .collect::<Vec<_>>()
        .join("_")
}

/// Generates the `Helpers.GetString_<ids>` dispatch function shared by all
/// groups with this culture combination.
///
/// The function takes the neutral value plus one positional argument per
/// defined sibling and switches on the current UI culture identifier; the
/// table comes from [`lookup::build_lookup`], with `_ => fallback` closing
/// the chain.
pub fn generate_culture_helper(combo: &CultureCombination) -> GeneratedUnit {
    let defined = combo.defined_cultures();
    let postfix = function_name_postfix(&defined);

    let mut builder = preamble(HELPERS_NAMESPACE);
    builder.push_str("internal static partial class Helpers\n{\n");
    builder.push_str(INDENT);
    builder.push_str("public static string GetString_");
    builder.push_str(&postfix);
    builder.push_str("(string fallback");
    for culture in &defined {
        builder.push_str(", string ");
        builder.push_str(&culture.name);
    }
    builder.push_str(") => System.Globalization.CultureInfo.CurrentUICulture.LCID switch\n");
    builder.push_str(INDENT);
    builder.push_str("{\n");
    for case in lookup::build_lookup(&defined) {
        builder.push_str("        ");
        builder.push_str(&case.lcid.to_string());
        builder.push_str(" => ");
        builder.push_str(&case.source);
        builder.push_str(",\n");
    }
    builder.push_str("        _ => fallback\n");
    builder.push_str(INDENT);
    builder.push_str("};\n}\n");

    GeneratedUnit {
        name: format!("{HELPERS_NAMESPACE}.{postfix}.g.cs"),
        source: builder,
        diagnostics: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InputFile;

    fn file(path: &str) -> InputFile {
        InputFile::new(path, 1, None)
    }

    #[test]
    fn test_helper_for_danish_combo() {
        let combo = CultureCombination::new(&[
            file("a/S.da.resx"),
            file("a/S.da-DK.resx"),
        ]);
        let unit = generate_culture_helper(&combo);

        assert_eq!(unit.name, "ResXGen.1030_6.g.cs");
        assert!(unit.source.contains(
            "public static string GetString_1030_6(string fallback, string da_DK, string da)"
        ));
        assert!(unit.source.contains("1030 => da_DK,"));
        assert!(unit.source.contains("6 => da,"));
        assert!(unit.source.contains("_ => fallback"));
        assert!(unit.diagnostics.is_empty());
    }

    #[test]
    fn test_helper_switches_on_current_ui_culture() {
        let combo = CultureCombination::new(&[file("a/S.vi.resx")]);
        let unit = generate_culture_helper(&combo);
        assert!(
            unit.source
                .contains("System.Globalization.CultureInfo.CurrentUICulture.LCID switch")
        );
    }
}
