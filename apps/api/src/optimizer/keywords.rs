//! Keyword extraction against a fixed vocabulary.
//!
//! Deterministic and offline: a term is included iff a case-insensitive
//! substring match is found in the job description, and results keep the
//! vocabulary's declared order, never the input order.

/// The fixed vocabulary, in match-priority order.
pub const KEYWORD_VOCABULARY: &[&str] = &[
    "React",
    "JavaScript",
    "Python",
    "AWS",
    "Docker",
    "Kubernetes",
    "Node.js",
    "TypeScript",
    "MongoDB",
    "PostgreSQL",
    "Git",
    "CI/CD",
    "Microservices",
    "REST APIs",
    "GraphQL",
    "Machine Learning",
    "Data Analysis",
    "Agile",
    "Scrum",
    "Leadership",
    "Project Management",
];

/// At most this many keywords are reported per extraction.
pub const MAX_KEYWORDS: usize = 8;

/// Ordered subsequence of the vocabulary found in `text`, capped at
/// [`MAX_KEYWORDS`].
pub fn extract_keywords(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    KEYWORD_VOCABULARY
        .iter()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .take(MAX_KEYWORDS)
        .map(|keyword| keyword.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_extracts_nothing() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   \n  ").is_empty());
    }

    #[test]
    fn test_matches_come_back_in_vocabulary_order() {
        // input order is AWS before React; vocabulary declares React first
        let keywords = extract_keywords("I know AWS and React");
        assert_eq!(keywords, vec!["React".to_string(), "AWS".to_string()]);
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let keywords = extract_keywords("experience with KUBERNETES and postgresql");
        assert_eq!(
            keywords,
            vec!["Kubernetes".to_string(), "PostgreSQL".to_string()]
        );
    }

    #[test]
    fn test_extraction_is_capped_at_eight() {
        let everything = KEYWORD_VOCABULARY.join(" ");
        let keywords = extract_keywords(&everything);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        // the cap keeps the first eight vocabulary terms
        assert_eq!(keywords[0], "React");
        assert_eq!(keywords[7], "TypeScript");
    }

    #[test]
    fn test_unknown_terms_are_ignored() {
        assert!(extract_keywords("COBOL and Fortran wizardry").is_empty());
    }
}
