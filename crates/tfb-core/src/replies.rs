//! User-facing reply texts (Telegram HTML).
//!
//! Uzbek is the primary language; the welcome adds an English copy.

use crate::formatting::{code_html, escape_html};

pub const CONTACT_BUTTON_LABEL: &str = "📱 Telefon raqamni yuborish";

pub const REGISTER_FAILED: &str = "❌ API bilan muammo. Keyinroq urinib ko‘ring.";
pub const REGISTER_UNREACHABLE: &str = "⚠️ Server ishlamayapti yoki ulanib bo‘lmadi.";
pub const LOGIN_RATE_LIMITED: &str = "🔐 Eski kodingiz hali ham kuchda ☝️";
pub const LOGIN_UNREACHABLE: &str = "⚠️ Serverga ulanib bo‘lmadi.";

/// Asked when a shared card has no Telegram user behind it.
pub const CONTACT_WITHOUT_USER: &str = "☝️ Iltimos, o‘z kontaktingizni tugma orqali yuboring.\n\
☝️ Please send your own contact using the button.";

pub fn welcome(display_name: &str) -> String {
    let name = escape_html(display_name);
    format!(
        "🇺🇿\n\
         Salom {name} 👋\n\
         @trustfund_uz'ning rasmiy botiga xush kelibsiz\n\n\
         ⬇️ Kontaktingizni yuboring (tugmani bosib)\n\n\
         🇺🇸\n\
         Hi {name} 👋\n\
         Welcome to @trustfund_uz's official bot\n\n\
         ⬇️ Send your contact (by clicking the button)"
    )
}

pub fn registered(code: &str) -> String {
    format!("🔒 Code: {}", code_html(code))
}

pub fn login_code(code: &str) -> String {
    format!("🔐 Sizning OTP kodingiz: {}", code_html(code))
}

pub fn login_failed(message: &str) -> String {
    format!("❌ Muammo: {}", escape_html(message))
}
