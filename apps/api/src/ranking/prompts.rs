// Prompt constants for match scoring.

use crate::listings::Listing;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Resume characters embedded in the scoring prompt.
pub const RESUME_EXCERPT_CHARS: usize = 2000;
/// Description characters embedded in the scoring prompt.
pub const DESCRIPTION_EXCERPT_CHARS: usize = 1000;

/// System prompt for match scoring.
pub fn match_system() -> String {
    format!(
        "You are an experienced technical recruiter who rates how well a job posting \
        fits a candidate. {JSON_ONLY_INSTRUCTION}"
    )
}

/// First `max_chars` characters of `text`, never splitting a character.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Builds the scoring prompt for one listing in a single pass, so braces in
/// candidate or listing text are embedded verbatim.
pub fn build_match_prompt(listing: &Listing, resume_text: &str, preferences: &str) -> String {
    let resume = excerpt(resume_text, RESUME_EXCERPT_CHARS);
    let title = listing.title();
    let company = listing.employer();
    let location = listing.location();
    let remote = if listing.is_remote() { "yes" } else { "no" };
    let description = excerpt(listing.description(), DESCRIPTION_EXCERPT_CHARS);

    format!(
        r#"Rate how well this job matches the candidate on a scale of 0 to 100.

CANDIDATE RESUME:
{resume}

CANDIDATE PREFERENCES:
{preferences}

JOB:
Title: {title}
Company: {company}
Location: {location}
Remote: {remote}
Description: {description}

Consider role fit, seniority, skills overlap and the stated preferences.

Return a JSON object with this EXACT schema:
{{"score": 85, "reasoning": "One or two sentences explaining the score"}}"#
    )
}
