//! Prompt Assembler: deterministic text payload for the external
//! text-generation tool.
//!
//! Pure functions only. The payload is built from fixed-order blocks, each
//! independently testable: candidate profile, optional target job, then a
//! static instructions block. Same inputs always give byte-identical output.

use crate::models::{JobRecord, Profile};

/// Hard cap on the description carried into the prompt, in characters.
pub const DESCRIPTION_LIMIT: usize = 500;

const PREAMBLE: &str = "You are an expert resume writer and LaTeX document designer. \
Create a professional, ATS-optimized resume tailored to the candidate below.";

const RESUME_REQUIREMENTS: &str = "\
RESUME REQUIREMENTS:

1. Layout:
   - Use a unique, professional layout with subtle color accents
   - Ensure ATS compatibility: parseable text, no images for important info
   - One page maximum

2. Content:
   - Tailor content to emphasize skills relevant to the target job
   - Use action verbs and quantifiable achievements
   - Include a skills section matching the job requirements
   - Include a brief professional summary

3. Technical:
   - Use standard packages available in TeX Live
   - Include all necessary package imports
   - Use proper escaping for special characters
   - The document must compile with pdflatex without errors

Please generate the complete LaTeX source code for this resume now.";

/// Truncates a description to `DESCRIPTION_LIMIT` characters, appending an
/// ellipsis marker only when something was cut.
fn truncate_description(description: &str) -> String {
    let mut chars = description.chars();
    let kept: String = chars.by_ref().take(DESCRIPTION_LIMIT).collect();
    if chars.next().is_some() {
        format!("{kept}...")
    } else {
        kept
    }
}

/// One `- Label: value` line per non-empty profile field, stable labels,
/// fixed order.
fn profile_block(profile: &Profile) -> String {
    let fields = [
        ("Name", profile.name.as_str()),
        ("Location", profile.location.as_str()),
        ("Email", profile.email.as_str()),
        ("Phone", profile.phone.as_str()),
        ("LinkedIn", profile.linkedin.as_str()),
        ("GitHub", profile.github.as_str()),
    ];

    let mut block = String::from("CANDIDATE PROFILE:\n");
    for (label, value) in fields {
        if !value.trim().is_empty() {
            block.push_str(&format!("- {label}: {value}\n"));
        }
    }
    block
}

fn job_block(job: &JobRecord) -> String {
    format!(
        "TARGET JOB DETAILS:\n\
         - Title: {}\n\
         - Requisition ID: {}\n\
         - Location: {}\n\
         - Pay Range: {}\n\
         - Key Technologies: {}\n\
         - Description: {}\n",
        job.title,
        job.req_id,
        job.location,
        job.pay_range,
        job.tech_keywords,
        truncate_description(&job.description),
    )
}

/// Assembles the full prompt payload. When `job` is absent the target-job
/// block is omitted entirely, never emitted with empty fields.
pub fn assemble(profile: &Profile, job: Option<&JobRecord>) -> String {
    let mut prompt = String::new();
    prompt.push_str(PREAMBLE);
    prompt.push_str("\n\n");
    prompt.push_str(&profile_block(profile));
    if let Some(job) = job {
        prompt.push('\n');
        prompt.push_str(&job_block(job));
    }
    prompt.push('\n');
    prompt.push_str(RESUME_REQUIREMENTS);
    prompt
}
