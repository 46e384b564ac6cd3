// Prompt template for the ATS resume analysis call, and the builder that fills it.

pub const RESUME_PLACEHOLDER: &str = "{resume}";
pub const JD_PLACEHOLDER: &str = "{jd}";

pub const MATCH_PERCENTAGE_HEADER: &str = "### ✅ Match Percentage:";
pub const MISSING_KEYWORDS_HEADER: &str = "### 🔑 Missing Keywords:";
pub const PROFILE_SUMMARY_HEADER: &str = "### 🧑‍💼 Profile Summary:";

/// ATS evaluation prompt. `{resume}` and `{jd}` are filled by [`build_prompt`].
pub const ATS_PROMPT_TEMPLATE: &str = "
As an experienced ATS (Applicant Tracking System), proficient in the technical domain encompassing
Software Engineering, Data Science, Data Analysis, Big Data Engineering, Web Developer, Mobile App
Developer, DevOps Engineer, Machine Learning Engineer, Cybersecurity Analyst, Cloud Solutions Architect,
Database Administrator, Network Engineer, AI Engineer, Systems Analyst, Full Stack Developer, UI/UX
Designer, IT Project Manager, and additional specialized areas, your objective is to meticulously assess
resumes against provided job descriptions. In a fiercely competitive job market, your expertise is crucial
in offering top-notch guidance for resume enhancement. Assign precise matching percentages based on the JD
(Job Description) and meticulously identify any missing keywords with utmost accuracy.

resume: {resume}
description: {jd}

I want the response in the following structure:
### ✅ Match Percentage:
% Match

---

### 🔑 Missing Keywords:
- keyword1
- keyword2
- ...

---

### 🧑‍💼 Profile Summary:
A concise and tailored professional summary based on the resume and job description.
";

/// Fills the ATS template with the resume text and job description.
///
/// Substitution is a single pass over the template: inputs are copied in
/// verbatim and never rescanned, so text such as `{jd}` inside a resume
/// stays literal.
pub fn build_prompt(resume_text: &str, job_description: &str) -> String {
    fill_template(
        ATS_PROMPT_TEMPLATE,
        &[
            (RESUME_PLACEHOLDER, resume_text),
            (JD_PLACEHOLDER, job_description),
        ],
    )
}

fn fill_template(template: &str, substitutions: &[(&str, &str)]) -> String {
    let extra: usize = substitutions.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    loop {
        // Earliest placeholder remaining in the template.
        let next = substitutions
            .iter()
            .filter_map(|(key, value)| rest.find(key).map(|pos| (pos, *key, *value)))
            .min_by_key(|(pos, _, _)| *pos);

        match next {
            Some((pos, key, value)) => {
                out.push_str(&rest[..pos]);
                out.push_str(value);
                rest = &rest[pos + key.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}
