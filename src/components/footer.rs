use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::whatsapp_link::WhatsAppLink;
use crate::config;

pub fn year_text(date: impl Datelike) -> String {
    format!("{:04}", date.year())
}

/// Year from the system clock, read once when the footer mounts.
pub fn current_year() -> String {
    year_text(Local::now())
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = use_state(current_year);

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <p class="footer-brand">{"L3me — sites que trazem clientes."}</p>
                <p class="footer-links">
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    {" · "}
                    <WhatsAppLink>{"WhatsApp"}</WhatsAppLink>
                </p>
                <p class="footer-copy">
                    {"© "}<span data-year="">{(*year).clone()}</span>{" L3me. Todos os direitos reservados."}
                </p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn year_is_four_digits() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(year_text(date), "2026");
    }

    #[test]
    fn current_year_matches_clock() {
        assert_eq!(current_year(), Local::now().year().to_string());
    }
}
