use chrono::NaiveDateTime;
use std::path::Path;

use crate::source::classify;

/// Timestamp format embedded in the generated document header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[allow(clippy::literal_string_with_formatting_args)]
pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are an expert technical writer.
Analyze the given {file_type} code in depth and produce a comprehensive technical wiki document in Markdown.
Follow the structure below and be as specific and detailed as possible:

# {file_name} Analysis

*Generated: {timestamp}*

## 1. Overview
- A clear explanation of the file's main purpose and core functionality
- What problem this code solves and what value it provides
- A summary of the overall architecture or design philosophy

## 2. Tech Stack
- Language: {file_type}
- Key libraries and frameworks
- Dependencies and external APIs

## 3. Key Components
### 3.1 Classes and Functions
For each class/function:
- Purpose and role
- Input/output parameters
- Core logic
- Call relationships and interactions

### 3.2 Data Structures
- The main data structures used
- How data flows through the code

## 4. Execution Flow
- The main execution paths
- Conditional logic and branch points
- Asynchronous or concurrent processing (where applicable)

## 5. Code Examples
- Usage examples for the main features
- An explanation and the expected result for each example

```{code_lang}
// main usage example
```

## 6. Implementation Details
- Algorithms used
- Performance optimizations
- Error handling approach

## 7. Caveats & Limitations
- Things to watch out for when using the code
- Known bugs or limitations
- Potential failure scenarios and how to deal with them

## 8. Extension Possibilities
- How the code could be extended
- Areas that could be improved
- Suggested additional features

## 9. Conclusion
- A summary of the code's strengths and characteristics
- Suggested usage scenarios
";

/// The two conversation turns sent to the chat API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Builds the documentation prompt for `content` read from `path`.
///
/// The user turn is `content` verbatim.
pub fn build_prompt(content: &str, path: &Path, timestamp: &NaiveDateTime) -> Prompt {
    let file_type = classify(path);
    let file_name = path
        .file_name()
        .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy());
    let timestamp = timestamp.format(TIMESTAMP_FORMAT).to_string();
    let code_lang = file_type.to_lowercase();

    let system = render(
        SYSTEM_PROMPT_TEMPLATE,
        &[
            ("file_type", file_type),
            ("file_name", file_name.as_ref()),
            ("timestamp", timestamp.as_str()),
            ("code_lang", code_lang.as_str()),
        ],
    );

    Prompt {
        system,
        user: content.to_string(),
    }
}

// Single pass, so substituted values are never rescanned for placeholders.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 128);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
