/// Instruction template for quiz generation. `{content}` is replaced with the
/// user's source text.
pub const QUIZ_PROMPT_TEMPLATE: &str = "You are a quiz author. Create multiple-choice questions that test understanding of the content below.

### Requirements:

- Write as many questions as the content supports.
- Every question must have exactly one correct option.
- Keep each question under 200 characters.
- Give each question between 2 and 10 options, each under 100 characters.
- Add a short explanation of why the correct option is right.

### Output Format:

Return ONLY a JSON array. No prose, no markdown fences, no commentary. Each element must be an object with exactly these fields:

- \"question\": string, the question text
- \"options\": array of strings, the answer options
- \"correctOptionIndex\": integer, zero-based index of the correct option in \"options\"
- \"explanation\": string, why the correct option is right

Example:
[{\"question\": \"...\", \"options\": [\"...\", \"...\"], \"correctOptionIndex\": 0, \"explanation\": \"...\"}]

### Content:

{content}";

pub const CONTENT_PLACEHOLDER: &str = "{content}";
