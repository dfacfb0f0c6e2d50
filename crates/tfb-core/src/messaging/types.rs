use crate::domain::{ChatId, UserId};

/// Messenger-agnostic incoming event.
///
/// The variant fully determines which fields exist; events are built by the
/// adapter and consumed by exactly one handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IncomingEvent {
    Command(Command),
    Contact(SharedContact),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub chat_id: ChatId,
    pub user_id: UserId,
    pub display_name: String,
    /// Lowercased command name without the leading `/` or `@botname`.
    pub name: String,
}

/// A contact card shared into the chat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedContact {
    pub chat_id: ChatId,
    /// Sender of the message.
    pub user_id: UserId,
    /// Sender's display name.
    pub display_name: String,
    pub phone_number: String,
    /// User id embedded in the card itself. Absent for cards of people
    /// without a Telegram account.
    pub contact_user_id: Option<UserId>,
}

/// Reply keyboard shown under the input field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplyKeyboard {
    pub rows: Vec<Vec<KeyboardButton>>,
    pub resize: bool,
    pub one_time: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardButton {
    pub label: String,
    pub request_contact: bool,
}

impl ReplyKeyboard {
    /// Single compact one-shot button asking for the user's own contact card.
    pub fn request_contact(label: impl Into<String>) -> Self {
        Self {
            rows: vec![vec![KeyboardButton {
                label: label.into(),
                request_contact: true,
            }]],
            resize: true,
            one_time: true,
        }
    }
}
