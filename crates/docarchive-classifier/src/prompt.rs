//! LLM prompt engineering for document classification

/// Builds the system prompt and user message sent to the backend
pub struct PromptBuilder {
    suggested_categories: Vec<String>,
}

impl PromptBuilder {
    /// Create a new prompt builder listing the given categories as guidance
    pub fn new(suggested_categories: Vec<String>) -> Self {
        Self {
            suggested_categories,
        }
    }

    /// Build the system prompt
    ///
    /// Identical for both the structured attempt and the raw re-issue.
    pub fn build_system_prompt(&self) -> String {
        let categories = self
            .suggested_categories
            .iter()
            .map(|c| format!("'{}'", c))
            .collect::<Vec<_>>()
            .join(", ");

        let mut prompt = String::new();
        prompt.push_str(ROLE_INSTRUCTIONS);
        prompt.push_str(" The categories could include, but are not limited to: ");
        prompt.push_str(&categories);
        prompt.push_str(". ");
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push(' ');
        prompt.push_str(OUTPUT_FORMAT_INSTRUCTIONS);
        prompt
    }

    /// Build the user message wrapping the document text
    pub fn build_user_message(text: &str) -> String {
        format!("Please classify the following document text:\n\n{}", text)
    }
}

const ROLE_INSTRUCTIONS: &str = "You are an expert document classification assistant. \
Your task is to categorize the provided text and extract relevant metadata.";

const EXTRACTION_INSTRUCTIONS: &str = "Based on the text, determine the most appropriate category. \
Also, extract key pieces of information like dates, names, amounts, invoice numbers, or a brief summary. \
If the document is multi-page, the metadata should reflect that this is part of a larger document if discernible.";

const OUTPUT_FORMAT_INSTRUCTIONS: &str = r#"VERY IMPORTANT: Respond *ONLY* with a single, valid JSON object. Do not include any other text, explanations, or conversational elements before or after the JSON object. The JSON object must contain exactly two keys: "category" (a string) and "metadata" (an object with extracted details and a "summary" field). Example of the exact output format: { "category": "contractor_invoice", "metadata": { "invoice_number": "INV123", "date": "2024-01-15", "total_amount": "$500", "summary": "Invoice for services rendered" } } Ensure your output is a single, complete JSON object and nothing else."#;
