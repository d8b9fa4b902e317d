//! Prompt construction for complexity analysis
//!
//! The template spells out the exact JSON schema the response extractor
//! validates against; the two must stay in lock-step.

/// Renders the analysis instruction for a code snippet.
///
/// Pure string construction: the same `(language, code)` pair always yields
/// the same prompt. Inputs are assumed non-empty; the HTTP boundary rejects
/// anything else before this is reached.
pub fn build_analysis_prompt(language: &str, code: &str) -> String {
    format!(
        r#"ALGORITHMIC COMPLEXITY ANALYSIS

Perform a comprehensive time and space complexity analysis for the following {language} code:

CODE SNIPPET:
```{language}
{code}
```

REQUIREMENTS FOR JSON RESPONSE:
Provide a VALID, PARSEABLE JSON object with this structure:
{{
    "time-complexity": "Precise Big O notation",
    "space-complexity": "Precise Big O notation",
    "formula": "Computational formula (if applicable, else null)",
    "space-complexity-formula": "Computational formula (if applicable, else null)",
    "reasons-of-time-complexity": ["Detailed explanations"],
    "reasons-of-space-complexity": ["Detailed explanations"],
    "improvements": ["Potential optimization strategies"]
}}

ANALYSIS GUIDELINES:
- Determine worst-case time complexity
- Consider both algorithmic and language-specific optimizations
- Analyze space complexity including:
  * Auxiliary space
  * Input space
  * Recursive call stack (if applicable)

COMPLEXITY FORMULA RULES:
- Create a formula if and only if there is exactly one variable in the complexity, i.e. O(n), O(n log n), etc.
- If there are multiple variables in the same complexity then give null as the formula
- The same rule applies to space-complexity-formula
- Examples:
- O(1): formula = 1
- O(log N): formula = log2(n)
- O(N): formula = n
- O(N log N): formula = n*log2(n)
- O(2^N): formula = 2**n
- Multiple variables: formula = null

CRITICAL INSTRUCTIONS:
- Respond ONLY in VALID JSON format
- Be precise and technical
- Avoid any markdown or code block formatting"#
    )
}
