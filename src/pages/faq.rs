use yew::prelude::*;
use log::debug;
use web_sys::MouseEvent;
use yew::{Children, Properties};

use crate::accordion::{AccordionAction, AccordionState};

const FAQ_ENTRIES: &[(&str, &str)] = &[
    (
        "Quanto tempo leva para o site ficar pronto?",
        "Um site institucional de uma página fica pronto em cerca de 7 a 10 dias úteis depois que recebemos textos e imagens.",
    ),
    (
        "Preciso ter domínio e hospedagem?",
        "Não. Se você ainda não tiver, ajudamos a registrar o domínio e cuidamos da hospedagem para você.",
    ),
    (
        "O site funciona bem no celular?",
        "Sim. Todos os sites são pensados primeiro para o celular e testados nos principais navegadores.",
    ),
    (
        "Posso atualizar o conteúdo depois?",
        "Pode. Pequenas alterações de texto e imagem estão incluídas no primeiro mês após a entrega.",
    ),
    (
        "Como funciona o pagamento?",
        "Metade no início do projeto e metade na entrega, via Pix ou transferência.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    expanded: bool,
    panel_ref: NodeRef,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("accordion-item", props.expanded.then_some("open"))}>
            <button
                type="button"
                class="accordion-button"
                aria-expanded={if props.expanded { "true" } else { "false" }}
                onclick={toggle}
            >
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if props.expanded { "−" } else { "+" }}</span>
            </button>
            <div class="accordion-panel" ref={props.panel_ref.clone()} hidden={!props.expanded}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_reducer(|| AccordionState::collapsed(FAQ_ENTRIES.len()));
    let panels = use_memo(
        |len| (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        accordion.len(),
    );

    let items = FAQ_ENTRIES.iter().enumerate().map(|(index, (question, answer))| {
        let panel_ref = panels[index].clone();
        let on_toggle = {
            let dispatcher = accordion.dispatcher();
            let panel_ref = panel_ref.clone();
            Callback::from(move |_: ()| {
                if panel_ref.get().is_none() {
                    debug!("FAQ item {} has no panel, ignoring", index);
                    return;
                }
                dispatcher.dispatch(AccordionAction::Activate(index));
            })
        };

        html! {
            <FaqItem
                key={index}
                question={*question}
                expanded={accordion.is_expanded(index)}
                panel_ref={panel_ref}
                on_toggle={on_toggle}
            >
                <p>{*answer}</p>
            </FaqItem>
        }
    });

    html! {
        <section id="faq" class="faq-section">
            <h2>{"Perguntas frequentes"}</h2>
            <div class="accordion" data-accordion="">
                { for items }
            </div>
        </section>
    }
}
