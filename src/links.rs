use crate::config;

pub const WHATSAPP_HOST: &str = "https://wa.me";

/// Builds a `wa.me` deep link, with the message prefilled when there is one.
pub fn whatsapp_url(number: &str, message: Option<&str>) -> String {
    let base = format!("{}/{}", WHATSAPP_HOST, number);
    match message {
        Some(text) if !text.is_empty() => format!("{}?text={}", base, urlencoding::encode(text)),
        _ => base,
    }
}

/// Link for the configured business number.
pub fn contact_whatsapp_url(message: Option<&str>) -> String {
    whatsapp_url(config::WHATSAPP_NUMBER, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_link_has_no_text_param() {
        assert_eq!(whatsapp_url("5511900000000", None), "https://wa.me/5511900000000");
        assert_eq!(whatsapp_url("5511900000000", Some("")), "https://wa.me/5511900000000");
    }

    #[test]
    fn message_is_percent_encoded() {
        let url = whatsapp_url("5511900000000", Some("Olá! Quero um site & um logo?"));
        assert!(url.starts_with("https://wa.me/5511900000000?text="));
        assert_eq!(
            url,
            "https://wa.me/5511900000000?text=Ol%C3%A1%21%20Quero%20um%20site%20%26%20um%20logo%3F"
        );
    }

    #[test]
    fn encoded_text_decodes_back_to_message() {
        let message = config::DEFAULT_WHATSAPP_MESSAGE;
        let url = contact_whatsapp_url(Some(message));
        let (_, text) = url.split_once("?text=").unwrap();
        assert_eq!(urlencoding::decode(text).unwrap(), message);
    }
}
