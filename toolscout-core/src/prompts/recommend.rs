//! Software recommendation prompt.

/// Render the recommendation prompt for a task description.
///
/// The task text is interpolated as opaque data inside quotes; it is never
/// treated as part of the instructions. The schema enumeration must stay in
/// sync with the extractor's field names and the closed category/pricing
/// sets.
pub fn render_recommendation_prompt(task: &str) -> String {
    format!(
        r#"Generate a structured JSON output for software recommendations based on the given task description:
'{task}'

### Output Format:
Each software recommendation should be an object with the following attributes:

- **id** (integer): The index of the result.
- **name** (string): The official name of the software.
- **category** (string): One of the following categories:
  'Productivity' | 'Development' | 'Design' | 'Communication' | 'Business' | 'Multimedia'
- **description** (string): A brief overview of the software.
- **officialWebsite** (string): The official website of the software. If unavailable, return 'N/A'.
- **pricing** (string): One of the following options:
  'Free' | 'Freemium' | 'Paid' | 'Subscription' | 'N/A'
- **priceRange** (string): The price in its original currency, e.g. '$50/month' or 'Free'. Use 'N/A' if unknown.
- **platforms** (array of strings): Supported platforms, e.g. ['Windows', 'macOS', 'Linux']. Use 'N/A' if unknown.
- **features** (array of strings): Key features of the software, e.g. ['Video Editing', 'Color Correction'].
- **bestFor** (array of strings): Ideal user groups, e.g. ['Content Creators', 'Professional Editing'].
- **alternatives** (array of strings): Alternative software options, e.g. ['Adobe Premiere Pro', 'Final Cut Pro']. Use 'N/A' if unknown.

### Guidelines:
- Ensure all missing values are replaced with 'N/A'.
- Output **only** a valid JSON array, without additional text or explanations.
- Provide at least 5 software recommendations to ensure a wide variety of options.
"#
    )
}
