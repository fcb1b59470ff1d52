use crate::core::TranslationTable;

use super::stored_value;

/// Render the sorted `.lang` file for `language`.
///
/// One `key = "value"` line per key, each terminated by a newline. Literal
/// quotes are escaped back to `\"`; other stored text is written verbatim.
pub fn render_lang(table: &TranslationTable, language: &str) -> String {
    let mut result = String::new();
    for (key, values) in table.iter() {
        result.push_str(key);
        result.push_str(" = \"");
        result.push_str(&stored_value(values, language).replace('"', "\\\""));
        result.push_str("\"\n");
    }
    result
}
