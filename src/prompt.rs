const PROMPT_PREFIX: &str = "Generate 10 to 12 input-output test cases for the following function:\n\n";
const PROMPT_SUFFIX: &str = "\n\nTest cases:";

/// Embeds the submitted code verbatim in the fixed test-case template.
pub fn build_prompt(code: &str) -> String {
    let mut prompt = String::with_capacity(PROMPT_PREFIX.len() + code.len() + PROMPT_SUFFIX.len());
    prompt.push_str(PROMPT_PREFIX);
    prompt.push_str(code);
    prompt.push_str(PROMPT_SUFFIX);
    prompt
}
