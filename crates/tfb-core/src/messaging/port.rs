use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    messaging::types::ReplyKeyboard,
    Result,
};

/// Outbound messaging port.
///
/// Handlers only ever reply to the chat an event came from; the adapter owns
/// parse modes, markup conversion and transport errors.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_html(&self, chat_id: ChatId, html: &str) -> Result<MessageRef>;

    async fn send_reply_keyboard(
        &self,
        chat_id: ChatId,
        html: &str,
        keyboard: ReplyKeyboard,
    ) -> Result<MessageRef>;
}
