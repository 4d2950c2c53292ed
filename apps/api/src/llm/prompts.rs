// Prompt constants and builders for the narrative backend.
// The engine fixes every number before the LLM is involved; these prompts
// only ask for prose that explains a report that is already computed.

/// System prompt for narrative generation. JSON-only, numbers untouchable.
pub const NARRATIVE_SYSTEM: &str = "\
    You are a brutally honest American college soccer recruiting advisor. \
    You write for a youth player and their parents: plain language, no jargon, \
    no false hope, no cruelty. \
    You MUST respond with valid JSON only, exactly this shape: \
    {\"plain_language_summary\": string, \"coach_short_evaluation\": string}. \
    Do NOT use markdown code fences. \
    CRITICAL: every percentage, band, and division in the report you are given \
    is final. Never re-derive, change, or contradict a number. Your job is to \
    explain them, not to score.";

/// Builds the user prompt: the profile and the computed report, verbatim.
pub fn narrative_prompt(profile_json: &str, report_json: &str) -> String {
    format!(
        "**Player profile:**\n{profile_json}\n\n\
         **Computed report (authoritative):**\n{report_json}\n\n\
         Write the two narrative fields now.\n\
         - plain_language_summary: one paragraph, 4 to 6 sentences, explaining \
         this player's recruiting reality. Reference the strongest division \
         percentage and the top risk by name.\n\
         - coach_short_evaluation: the single sentence a college coach would \
         say after reading this file."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrative_prompt_embeds_both_documents() {
        let prompt = narrative_prompt("{\"first_name\":\"A\"}", "{\"primary_level\":\"D1\"}");
        assert!(prompt.contains("{\"first_name\":\"A\"}"));
        assert!(prompt.contains("{\"primary_level\":\"D1\"}"));
        assert!(prompt.contains("plain_language_summary"));
    }
}
