use crate::structure::DocStructure;

/// Serialize the registry as `{"root": ..., "sections": {...}}`.
pub fn render_json(structure: &DocStructure, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(structure)?
    } else {
        serde_json::to_string(structure)?
    };
    Ok(json)
}

/// One tab-separated line per section: key, relative path, full path.
pub fn render_list(structure: &DocStructure) -> String {
    let mut out = String::new();
    for (key, rel) in structure.entries() {
        out.push_str(key.as_str());
        out.push('\t');
        out.push_str(rel);
        out.push('\t');
        out.push_str(&structure.path(key));
        out.push('\n');
    }
    out
}
