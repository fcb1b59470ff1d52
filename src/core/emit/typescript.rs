use std::io;

use super::{json::to_ascii_json_string, stored_value, unescape};
use crate::core::TranslationTable;

/// First line of every generated TypeScript module.
pub const GENERATED_BANNER: &str = "// generated by langsync. DO NOT EDIT.";

/// Render the TypeScript module for `language`.
///
/// A typed `translations` object literal with one `key: "value",` entry per
/// key, followed by a default export. No trailing newline.
pub fn render_typescript(table: &TranslationTable, language: &str) -> io::Result<String> {
    let mut lines = vec![
        GENERATED_BANNER.to_string(),
        "const translations: { [key: string]: string; } = {".to_string(),
    ];
    for (key, values) in table.iter() {
        lines.push(format!(
            "  {}: {},",
            key,
            to_ascii_json_string(&unescape(stored_value(values, language)))?
        ));
    }
    lines.push("};\n".to_string());
    lines.push("export {translations as default};".to_string());
    Ok(lines.join("\n"))
}
