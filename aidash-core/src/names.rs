//! Human-friendly names for provider types and group ids.

/// Display names for known provider types.
const PROVIDER_NAMES: &[(&str, &str)] = &[
    ("openai", "OpenAI"),
    ("deepseek", "DeepSeek"),
    ("openrouter", "OpenRouter"),
    ("deepl", "DeepL"),
    ("base3qdrant", "Qdrant (Base3)"),
    ("base3unstructured", "Unstructured (Base3)"),
    ("qualituschat", "Chat (Qualitus)"),
    ("qualitusembedding", "Embedding (Qualitus)"),
    ("qualitusvectordb", "Qdrant (Qualitus)"),
    ("qualitusparser", "Docling (Qualitus)"),
];

/// Display names for known group ids.
const GROUP_NAMES: &[(&str, &str)] = &[
    ("llm", "LLM"),
    ("embedding", "Embeddings"),
    ("vectordb", "Vector DB"),
    ("translation", "Translation"),
    ("parser", "Parser"),
    ("communication", "Communication"),
];

fn lookup(table: &[(&str, &'static str)], id: &str) -> Option<&'static str> {
    table.iter().find(|(key, _)| *key == id).map(|(_, name)| *name)
}

/// Display name of a provider type, e.g. `openai` -> `OpenAI`.
pub fn provider_name(service_type: &str) -> String {
    lookup(PROVIDER_NAMES, service_type)
        .map(str::to_string)
        .unwrap_or_else(|| title_case(service_type))
}

/// Display name of a group id, e.g. `vectordb` -> `Vector DB`.
pub fn group_name(group_id: &str) -> String {
    lookup(GROUP_NAMES, group_id)
        .map(str::to_string)
        .unwrap_or_else(|| title_case(group_id))
}

/// Replace `-` and `_` with spaces and upper-case the first letter of each word.
///
/// The rest of each word is left untouched, so `my_API-key` becomes `My API Key`.
fn title_case(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut at_word_start = true;

    for c in id.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_provider_names() {
        assert_eq!(provider_name("openai"), "OpenAI");
        assert_eq!(provider_name("base3qdrant"), "Qdrant (Base3)");
        assert_eq!(provider_name("qualitusparser"), "Docling (Qualitus)");
    }

    #[test]
    fn unknown_provider_names_are_title_cased() {
        assert_eq!(provider_name("telegram"), "Telegram");
        assert_eq!(provider_name("azure-open_ai"), "Azure Open Ai");
        assert_eq!(provider_name("my_API-key"), "My API Key");
        assert_eq!(provider_name(""), "");
    }

    #[test]
    fn known_group_names() {
        assert_eq!(group_name("llm"), "LLM");
        assert_eq!(group_name("embedding"), "Embeddings");
        assert_eq!(group_name("vectordb"), "Vector DB");
        assert_eq!(group_name("communication"), "Communication");
    }

    #[test]
    fn unknown_group_names_are_title_cased() {
        assert_eq!(group_name("speech_to-text"), "Speech To Text");
        assert_eq!(group_name("ocr"), "Ocr");
    }

    #[test]
    fn repeated_separators_keep_their_spaces() {
        assert_eq!(title_case("a__b"), "A  B");
    }
}
