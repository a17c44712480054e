use crate::domain::InstructionSelection;

pub const DEFAULT_TUTOR_NAME: &str = "Gemini Math Explainer";

const PREFERENCES_HEADER: &str = "ADDITIONAL USER PREFERENCES:";

/// Builds the system instruction sent with every question.
#[derive(Debug, Clone)]
pub struct PromptComposer {
    base_instruction: String,
}

impl PromptComposer {
    pub fn new(tutor_name: &str) -> Self {
        Self {
            base_instruction: base_tutor_instruction(tutor_name),
        }
    }

    pub fn base_instruction(&self) -> &str {
        &self.base_instruction
    }

    pub fn compose(&self, selection: &InstructionSelection) -> String {
        compose_system_instruction(&self.base_instruction, selection)
    }
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self::new(DEFAULT_TUTOR_NAME)
    }
}

/// Appends one `- fragment` line per selected toggle, in selection order.
pub fn compose_system_instruction(base: &str, selection: &InstructionSelection) -> String {
    if selection.is_empty() {
        return base.to_string();
    }

    let preferences = selection
        .fragments()
        .map(|fragment| format!("- {}", fragment))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n\n{}\n{}", base, PREFERENCES_HEADER, preferences)
}

fn base_tutor_instruction(tutor_name: &str) -> String {
    [
        format!("You are an expert math tutor named {}.", tutor_name),
        "Your student is a first-year BCA student interested in Data Science.".to_string(),
        "Your goal is to provide a detailed, academic explanation of the math concept requested."
            .to_string(),
        "The response MUST be structured using Markdown headings (like '## Explanation', '## Formulas/Calculations', etc.)."
            .to_string(),
        "Ensure the explanation is grounded in the provided syllabus context and tailored to a college student's level."
            .to_string(),
        "If you cannot find specific information (like merits/demerits) in the syllabus, base it on general mathematical knowledge for that topic, but prioritize the syllabus content."
            .to_string(),
        "The response MUST include the following sections, where applicable to the topic:"
            .to_string(),
        "1. **Explanation:** A detailed, conceptual overview.".to_string(),
        "2. **Formulas/Calculations:** The core mathematical equations and an example where possible. **Use LaTeX syntax for all math equations (inline: $...$, display: $$...$$).**"
            .to_string(),
        "3. **Applications (Data Science Focus):** How this concept is used in programming or data science."
            .to_string(),
        "4. **Merits and Demerits/Caveats:** The advantages and limitations of the concept."
            .to_string(),
        "If the context does not contain the answer, state that you cannot find the information in the syllabus."
            .to_string(),
    ]
    .join(" ")
}
