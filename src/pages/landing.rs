use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::components::whatsapp_link::WhatsAppLink;
use crate::pages::contact::ContactForm;
use crate::pages::faq::Faq;

const SERVICES: &[(&str, &str)] = &[
    ("Sites institucionais", "Uma página clara que explica o que você faz e leva o visitante ao contato."),
    ("Landing pages", "Páginas focadas em uma oferta, feitas para campanhas e anúncios."),
    ("Manutenção", "Ajustes, atualizações e hospedagem cuidados por nós, sem dor de cabeça."),
];

const STEPS: &[(&str, &str)] = &[
    ("Conversa", "Entendemos o seu negócio, o público e o objetivo do site."),
    ("Proposta", "Você recebe escopo, prazo e valor fechados antes de começar."),
    ("Entrega", "Publicamos o site e acompanhamos os primeiros ajustes."),
];

fn cards(items: &[(&str, &str)], class: &'static str) -> Html {
    items
        .iter()
        .map(|(title, text)| html! {
            <div class={class}>
                <h3>{*title}</h3>
                <p>{*text}</p>
            </div>
        })
        .collect()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <>
            <Nav />
            <main class="landing-page">
                <section id="inicio" class="hero">
                    <h1>{"Sites profissionais para pequenos negócios"}</h1>
                    <p class="hero-subtitle">
                        {"Criamos o site da sua empresa do zero, rápido no celular e pronto para receber clientes."}
                    </p>
                    <div class="hero-actions">
                        <WhatsAppLink class="hero-cta">{"Falar no WhatsApp"}</WhatsAppLink>
                        <a href="#contato" class="hero-secondary">{"Pedir orçamento por e-mail"}</a>
                    </div>
                </section>

                <section id="servicos" class="services">
                    <h2>{"O que fazemos"}</h2>
                    <div class="services-grid">
                        { cards(SERVICES, "service-item") }
                    </div>
                </section>

                <section id="processo" class="how-it-works">
                    <h2>{"Como funciona"}</h2>
                    <div class="steps-grid">
                        { cards(STEPS, "step") }
                    </div>
                    <WhatsAppLink
                        class="steps-cta"
                        message="Olá! Quero começar o meu site. Podemos conversar?"
                    >
                        {"Começar agora"}
                    </WhatsAppLink>
                </section>

                <Faq />
                <ContactForm />
            </main>
            <Footer />
        </>
    }
}
