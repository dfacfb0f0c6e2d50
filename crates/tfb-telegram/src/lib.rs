//! Telegram adapter (teloxide).
//!
//! This crate implements the `tfb-core` MessagingPort over Telegram Bot API and
//! turns incoming updates into `IncomingEvent`s.

use async_trait::async_trait;

use teloxide::{
    prelude::*,
    types::{ButtonRequest, KeyboardButton, KeyboardMarkup, ParseMode},
};

pub mod handlers;
pub mod router;

use tfb_core::{
    domain::{ChatId, MessageId, MessageRef},
    errors::Error,
    messaging::{port::MessagingPort, types::ReplyKeyboard},
    Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::External(format!("telegram error: {e}"))
    }

    fn tg_keyboard(keyboard: ReplyKeyboard) -> KeyboardMarkup {
        let rows: Vec<Vec<KeyboardButton>> = keyboard
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|b| {
                        let button = KeyboardButton::new(b.label);
                        if b.request_contact {
                            button.request(ButtonRequest::Contact)
                        } else {
                            button
                        }
                    })
                    .collect()
            })
            .collect();

        KeyboardMarkup::new(rows)
            .resize_keyboard(keyboard.resize)
            .one_time_keyboard(keyboard.one_time)
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    async fn send_html(&self, chat_id: ChatId, html: &str) -> Result<MessageRef> {
        let msg = self
            .bot
            .send_message(Self::tg_chat(chat_id), html.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(Self::map_err)?;

        Ok(MessageRef {
            chat_id,
            message_id: MessageId(msg.id.0),
        })
    }

    async fn send_reply_keyboard(
        &self,
        chat_id: ChatId,
        html: &str,
        keyboard: ReplyKeyboard,
    ) -> Result<MessageRef> {
        let msg = self
            .bot
            .send_message(Self::tg_chat(chat_id), html.to_string())
            .parse_mode(ParseMode::Html)
            .reply_markup(Self::tg_keyboard(keyboard))
            .await
            .map_err(Self::map_err)?;

        Ok(MessageRef {
            chat_id,
            message_id: MessageId(msg.id.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_keyboard_maps_to_request_contact_button() {
        let markup = TelegramMessenger::tg_keyboard(ReplyKeyboard::request_contact("Share"));
        let v = serde_json::to_value(&markup).unwrap();

        assert_eq!(v["keyboard"][0][0]["text"], "Share");
        assert_eq!(v["keyboard"][0][0]["request_contact"], true);
        assert_eq!(v["resize_keyboard"], true);
        assert_eq!(v["one_time_keyboard"], true);
    }
}
