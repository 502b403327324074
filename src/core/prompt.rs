//! Prompt construction for address conversion

use crate::core::models::{ChatMessage, TranslationRequest};

/// Fixed system instruction describing the conversion task
pub const SYSTEM_PROMPT: &str = "任务描述：
请将以下[源语言]地址转换为符合[目标语言]格式的地址。确保转换后的地址信息准确、完整，并符合[目标语言]的地址书写习惯。";

const CONVERSION_RULES: &str = "转换要求：
保留所有原始地址信息，包括地名、门牌号、邮政编码等。
按照目标语言的地址格式重新排列信息。
如有需要，翻译地名和其他相关词汇，确保符合目标语言的表述习惯。
在转换过程中，注意目标语言中特有的地址书写规范，如邮政编码的位置、地址的层级顺序等。

注意事项：
如遇专有名词或无法翻译的地名，请保留原样。
确保邮政编码的正确性和位置。
如有疑问，请参考目标语言的官方地址书写指南。
只输出转换后的地址，不要输出任何其他内容。";

/// Render the user message for a request
pub fn user_prompt(request: &TranslationRequest) -> String {
    format!(
        "源语言地址: {},\n源语言格式: {},\n目标语言: {},\n\n{}",
        request.address, request.source_locale, request.target_locale, CONVERSION_RULES
    )
}

/// Build the system + user message pair sent to the model
pub fn build_messages(request: &TranslationRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt(request)),
    ]
}
