// Replace with the real number: digits only, country code + area code (e.g. 5511987654321)
pub const WHATSAPP_NUMBER: &str = "5511900000000";

pub const CONTACT_EMAIL: &str = "contato@l3me.com.br";

pub const DEFAULT_WHATSAPP_MESSAGE: &str =
    "Olá! Quero saber mais sobre criação de sites para meu negócio.";

/// Height of the fixed header in CSS pixels, kept in sync with `--header-h`.
pub const HEADER_HEIGHT: f64 = 72.0;

pub const SCROLL_CORRECTION: f64 = 2.0;

/// Time the success status stays visible before the mail client opens.
pub const MAILTO_DELAY_MS: u32 = 300;
