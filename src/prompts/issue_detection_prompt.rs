pub const ISSUE_DETECTION_SYSTEM_PROMPT: &str =
    "You are an expert code analyzer that finds bugs and suggests fixes. Always respond with valid JSON.";

pub const ISSUE_RECORD_SCHEMA: &str = r#"Find and return a JSON array of issues with this exact format:
[
  {
    "type": "SYNTAX|TYPE|LOGIC|IMPORT|LINTING|INDENTATION|SECURITY",
    "line": <line_number>,
    "message": "Description of the issue",
    "severity": "critical|high|medium|low",
    "suggestedFix": "How to fix it"
  }
]

Focus on:
1. Syntax errors
2. Type errors
3. Logic bugs
4. Unused imports
5. Security vulnerabilities
6. Performance issues

Return ONLY the JSON array, no other text."#;
