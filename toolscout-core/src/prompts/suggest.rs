//! Task-description completion prompt for the live-typing suggestion box.

/// Render the suggestion prompt for a partial task description.
pub fn render_suggestion_prompt(partial: &str) -> String {
    format!(
        r#"You are an assistant specializing in software-related text completion.
Your job is to:
  1. Correct any spelling mistakes in the provided input while keeping the meaning intact.
  2. Preserve the corrected input exactly as it is.
  3. Only suggest the missing words or phrases to complete the sentence.
  4. Ensure the completion remains software-specific and relevant.
  5. Generate three alternative completions, all strictly software-related.

### Rules:
- Do not modify or reword the input.
- Only append the missing words to complete the sentence meaningfully.
- Output only valid JSON, no extra text.

### User Input:
"{partial}"

### Expected JSON Output:
{{
  "completed_text": "User input + suggested completion",
  "suggestions": [
    "User input + Alternative completion 1",
    "User input + Alternative completion 2",
    "User input + Alternative completion 3"
  ]
}}
"#
    )
}
