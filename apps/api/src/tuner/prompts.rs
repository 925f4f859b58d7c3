// All LLM prompt constants for the profile tuner.

/// System message sent ahead of every tuning prompt.
pub const PROFILE_TUNER_SYSTEM: &str = "You are a helpful career assistant.";

/// Heading the model is told to put above the rewritten summary.
pub const NEW_SUMMARY_HEADING: &str = "### New Summary:";
/// Heading the model is told to put above the headline list.
pub const HEADLINE_SUGGESTIONS_HEADING: &str = "### Headline Suggestions:";

/// Profile tuning prompt template.
/// Replace: {summary}, {job_description}
pub const PROFILE_TUNER_PROMPT_TEMPLATE: &str = r####"Act as an expert career coach and LinkedIn strategist. A user has provided their current LinkedIn summary and a job description for a role they want to apply for. Your tasks are:

1.  Analyze the job description to identify the top 5-7 most important skills, qualifications, and keywords.
2.  Rewrite the user's summary to be approximately 150-200 words. The new summary must skillfully weave in the identified skills and keywords, highlighting the user's strengths in relation to the role. It must be written in a confident, professional, and compelling first-person tone.
3.  After the summary, generate 3 alternative LinkedIn headlines (each under 220 characters) that are optimized for this specific job.

Here is the user's current summary:
"{summary}"

Here is the job description:
"{job_description}"

Format your response clearly with "### New Summary:" and "### Headline Suggestions:" headings."####;

/// Builds the user message for one tuning request.
///
/// Both inputs are embedded verbatim: no escaping, no truncation.
pub fn build_prompt(summary: &str, job_description: &str) -> String {
    fill_template(
        PROFILE_TUNER_PROMPT_TEMPLATE,
        &[("{summary}", summary), ("{job_description}", job_description)],
    )
}

/// Single-pass placeholder substitution. Text that came in through a value
/// is never scanned again, so user input containing `{summary}` stays literal.
fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match vars.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
