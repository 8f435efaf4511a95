use crate::config::Language;
use crate::llm::prompts;
use crate::llm::ChatMessage;

/// Build the fixed few-shot transcript for one diff.
///
/// Always: system instructions, the convention explainer, the worked
/// example, then the raw diff verbatim and untruncated. For any language
/// other than English, two more messages ask for a translation. The result
/// depends only on `(diff, language)` and is rebuilt in full on every call.
pub fn build_messages(diff: &str, language: Language) -> Vec<ChatMessage> {
    let mut messages = vec![
        ChatMessage::system(prompts::SYSTEM_INSTRUCTIONS),
        ChatMessage::user(prompts::CONVENTION_GUIDE),
        ChatMessage::assistant(prompts::ONE_SHOT_EXAMPLE),
        ChatMessage::user(diff),
    ];

    if language != Language::English {
        messages.push(ChatMessage::assistant(prompts::LANGUAGE_ASK));
        messages.push(ChatMessage::user(format!("Translate to {}.", language.as_str())));
    }

    messages
}
