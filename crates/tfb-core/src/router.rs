//! Event routing and the three bot handlers.
//!
//! Every handler is terminal for its event: backend outcomes become replies and
//! send failures are logged, so nothing propagates back into the dispatcher.

use std::sync::Arc;

use crate::{
    backend::{ApiOutcome, BackendApi, LoginRequest, RegisterRequest},
    domain::ChatId,
    messaging::{
        port::MessagingPort,
        types::{Command, IncomingEvent, ReplyKeyboard, SharedContact},
    },
    replies,
};

/// Shared, immutable application context built once at startup.
#[derive(Clone)]
pub struct AppContext {
    pub messenger: Arc<dyn MessagingPort>,
    pub backend: Arc<dyn BackendApi>,
}

impl AppContext {
    pub fn new(messenger: Arc<dyn MessagingPort>, backend: Arc<dyn BackendApi>) -> Self {
        Self { messenger, backend }
    }
}

/// Route one incoming event to its handler.
pub async fn dispatch(ctx: &AppContext, event: IncomingEvent) {
    match event {
        IncomingEvent::Command(cmd) => match cmd.name.as_str() {
            "start" => handle_start(ctx, &cmd).await,
            "login" => handle_login(ctx, &cmd).await,
            other => tracing::debug!(command = other, "ignoring unknown command"),
        },
        IncomingEvent::Contact(contact) => handle_contact(ctx, &contact).await,
    }
}

async fn handle_start(ctx: &AppContext, cmd: &Command) {
    let text = replies::welcome(&cmd.display_name);
    let keyboard = ReplyKeyboard::request_contact(replies::CONTACT_BUTTON_LABEL);

    if let Err(e) = ctx
        .messenger
        .send_reply_keyboard(cmd.chat_id, &text, keyboard)
        .await
    {
        tracing::warn!(chat_id = cmd.chat_id.0, "failed to send welcome: {e}");
    }
}

async fn handle_contact(ctx: &AppContext, contact: &SharedContact) {
    // Register the user embedded in the card, not the sender.
    let Some(contact_user_id) = contact.contact_user_id else {
        tracing::info!(
            chat_id = contact.chat_id.0,
            "contact card without a Telegram user; not registering"
        );
        reply(ctx, contact.chat_id, replies::CONTACT_WITHOUT_USER).await;
        return;
    };

    let req = RegisterRequest {
        name: contact.display_name.clone(),
        telegram_id: contact_user_id.to_string(),
        phone_number: contact.phone_number.clone(),
    };

    let text = match ctx.backend.register(&req).await {
        ApiOutcome::Success(code) => {
            tracing::info!(telegram_id = %req.telegram_id, "contact registered");
            replies::registered(&code)
        }
        ApiOutcome::Failure(message) => {
            tracing::warn!(telegram_id = %req.telegram_id, "register rejected: {message}");
            replies::REGISTER_FAILED.to_string()
        }
        ApiOutcome::RateLimited => {
            tracing::warn!(telegram_id = %req.telegram_id, "register unexpectedly rate limited");
            replies::REGISTER_FAILED.to_string()
        }
        ApiOutcome::TransportError(reason) => {
            tracing::error!(telegram_id = %req.telegram_id, "register API error: {reason}");
            replies::REGISTER_UNREACHABLE.to_string()
        }
    };

    reply(ctx, contact.chat_id, &text).await;
}

async fn handle_login(ctx: &AppContext, cmd: &Command) {
    let req = LoginRequest {
        telegram_id: cmd.user_id.to_string(),
    };

    let text = match ctx.backend.login(&req).await {
        ApiOutcome::Success(code) => replies::login_code(&code),
        ApiOutcome::RateLimited => replies::LOGIN_RATE_LIMITED.to_string(),
        ApiOutcome::Failure(message) => {
            tracing::info!(telegram_id = %req.telegram_id, "login rejected: {message}");
            replies::login_failed(&message)
        }
        ApiOutcome::TransportError(reason) => {
            tracing::error!(telegram_id = %req.telegram_id, "login API error: {reason}");
            replies::LOGIN_UNREACHABLE.to_string()
        }
    };

    reply(ctx, cmd.chat_id, &text).await;
}

async fn reply(ctx: &AppContext, chat_id: ChatId, html: &str) {
    if let Err(e) = ctx.messenger.send_html(chat_id, html).await {
        tracing::warn!(chat_id = chat_id.0, "failed to send reply: {e}");
    }
}
