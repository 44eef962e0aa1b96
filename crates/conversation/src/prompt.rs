//! Prompt assembly
//!
//! Builds the single text blob sent to the completion endpoint: a fixed
//! instruction preamble, context from earlier turns that produced code, and
//! the new user utterance as the final line. User content is interpolated
//! verbatim, without escaping.

use crate::log::ConversationLog;

/// Instruction preamble describing the output contract
pub const SYSTEM_INSTRUCTION: &str = "You are a senior Framer developer. Based on the following instruction, generate a valid Framer React code component that can be used inside Framer's code panel.
Follow this guide: https://www.framer.com/developers/components-introduction
Output ONLY the code. Do NOT add explanation or markdown formatting.";

/// Separator between context entries
const CONTEXT_SEPARATOR: &str = "\n---\n";

/// Build the prompt for a new user utterance
///
/// Earlier turns without generated code contribute nothing; each turn that
/// carries code is rendered as `"<author>: <text>\nCode:\n<code>"`. The new
/// user text is trimmed and appended as the final `"User: ..."` line.
pub fn build_prompt(log: &ConversationLog, user_text: &str) -> String {
    let mut sections = vec![SYSTEM_INSTRUCTION.to_string()];

    let context: Vec<String> = log
        .code_turns()
        .map(|turn| {
            let code = turn.code.as_deref().unwrap_or_default();
            format!("{}: {}\nCode:\n{}", turn.author.label(), turn.text, code)
        })
        .collect();
    if !context.is_empty() {
        sections.push(context.join(CONTEXT_SEPARATOR));
    }

    sections.push(format!("User: {}", user_text.trim()));
    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turn::Turn;

    #[test]
    fn test_prompt_without_context_ends_with_user_line() {
        let log = ConversationLog::new();
        let prompt = build_prompt(&log, "Button with hover rotate");

        assert!(prompt.ends_with("User: Button with hover rotate"));
        assert!(!prompt.contains("Code:"));
        assert!(prompt.starts_with(SYSTEM_INSTRUCTION));
    }

    #[test]
    fn test_prompt_includes_prior_code_turns() {
        let mut log = ConversationLog::new();
        log.append(Turn::user("make a button"));
        log.append(Turn::assistant(
            "Here is the generated component.",
            "const B = () => null",
            "paste it",
        ));

        let prompt = build_prompt(&log, "make it rotate on hover");

        assert!(prompt.contains("Assistant: Here is the generated component.\nCode:\nconst B = () => null"));
        assert!(prompt.ends_with("User: make it rotate on hover"));
    }

    #[test]
    fn test_prompt_trims_user_text() {
        let log = ConversationLog::new();
        let prompt = build_prompt(&log, "  padded input \n");
        assert!(prompt.ends_with("User: padded input"));
    }

    #[test]
    fn test_context_entries_are_separated() {
        let mut log = ConversationLog::new();
        log.append(Turn::assistant("first", "const A = 1", "g"));
        log.append(Turn::assistant("second", "const B = 2", "g"));

        let prompt = build_prompt(&log, "next");
        assert!(prompt.contains("const A = 1\n---\nAssistant: second"));
    }
}
