use regex::Regex;
use std::sync::OnceLock;

/// Link reference definitions: `[label]: destination "optional title"`.
pub struct LinkDefinition;

impl LinkDefinition {
    pub fn matches(line: &str) -> bool {
        static DEFINITION_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = DEFINITION_REGEX.get_or_init(|| {
            Regex::new(r#"^ {0,3}\[[^\]\[^][^\]\[]*\]:[ \t]*\S+([ \t]+("[^"]*"|'[^']*'|\([^)]*\)))?[ \t\r]*$"#)
                .expect("Invalid link definition regex")
        });
        re.is_match(line)
    }
}
