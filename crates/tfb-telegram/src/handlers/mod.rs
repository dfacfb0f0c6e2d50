//! Telegram update handlers.
//!
//! Each message is translated into a core `IncomingEvent` and handed to the
//! core router; everything else is dropped here.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use tfb_core::{
    commands::parse_command,
    domain::{ChatId, UserId},
    messaging::types::{Command, IncomingEvent, SharedContact},
    router::{dispatch, AppContext},
};

pub async fn handle_message(msg: Message, ctx: Arc<AppContext>) -> ResponseResult<()> {
    match incoming_event(&msg) {
        Some(event) => dispatch(&ctx, event).await,
        None => tracing::debug!(chat_id = msg.chat.id.0, "ignoring unsupported message"),
    }
    Ok(())
}

/// Map a Telegram message to a core event.
///
/// Returns `None` for messages without a sender and for anything that is
/// neither a command nor a shared contact.
pub fn incoming_event(msg: &Message) -> Option<IncomingEvent> {
    let user = msg.from()?;
    let chat_id = ChatId(msg.chat.id.0);
    let user_id = UserId(user.id.0 as i64);
    let display_name = user.full_name();

    if let Some(contact) = msg.contact() {
        return Some(IncomingEvent::Contact(SharedContact {
            chat_id,
            user_id,
            display_name,
            phone_number: contact.phone_number.clone(),
            contact_user_id: contact.user_id.map(|id| UserId(id.0 as i64)),
        }));
    }

    let name = parse_command(msg.text()?)?;
    Some(IncomingEvent::Command(Command {
        chat_id,
        user_id,
        display_name,
        name,
    }))
}
