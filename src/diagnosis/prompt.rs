//! Fixed prompt text sent with every scan.

/// Bumped whenever [`INSTRUCTION`] or [`SYSTEM_INSTRUCTION`] changes wording.
pub const PROMPT_VERSION: u32 = 1;

pub const SYSTEM_INSTRUCTION: &str = "You are a highly skilled radiology AI specializing in medical diagnostics. \
Your task is to analyze the provided medical scan (X-ray, MRI, CT) \
and cross-reference it with the patient's symptoms to generate an accurate diagnosis. \
Ensure that your response is structured, medically relevant, and avoids any false information.";

pub const INSTRUCTION: &str = "Analyze this medical image and correlate findings with the given patient symptoms. \
First, identify the body part in the image. Then, detect abnormalities like fractures, infections, or tumors. \
If symptoms are provided, compare them with visual findings to enhance diagnostic accuracy. \
Generate a structured medical report with:\n\
1. **Detected Body Part**\n\
2. **Observed Findings (Fractures, Infections, Tumors, etc.)**\n\
3. **Possible Diagnosis**\n\
4. **Recommended Next Steps (e.g., consult a radiologist, MRI needed, etc.)**\n\
5. **Caution: Reminder that this is an AI-generated analysis, and a doctor should be consulted.**";

pub const NO_SYMPTOMS: &str = "none provided";

/// Text part carrying the user's symptoms, verbatim. Blank input is sent as an explicit marker.
pub fn symptoms_part(symptoms: &str) -> String {
    if symptoms.trim().is_empty() {
        format!("Patient symptoms: {}", NO_SYMPTOMS)
    } else {
        format!("Patient symptoms: {}", symptoms)
    }
}
