/// Returns the body of the first fenced code block, or the trimmed input when unfenced.
pub fn strip_code_fences(response: &str) -> &str {
    let trimmed = response.trim();

    let Some(start) = trimmed.find("```") else {
        return trimmed;
    };

    let after_fence = &trimmed[start + 3..];
    // Skip an info string such as `json` on the opening fence line.
    let body_start = after_fence.find('\n').map_or(after_fence.len(), |i| i + 1);
    let body = &after_fence[body_start..];

    match body.find("```") {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    }
}
