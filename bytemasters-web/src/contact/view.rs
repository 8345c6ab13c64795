use bytemasters_core::constants::{HIDDEN_SUBJECT, HIDDEN_SUBJECT_FIELD, PANEL_OPEN_CLASS};
use bytemasters_core::{ContactForm, Subject};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::focus::{focus_first, keydown_handler};
use crate::dom;

const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2624.999210779399!2d2.292292415674933!3d48.85837307928733!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x47e66fc33d7d5f25%3A0x4017d99b03827d0!2sEiffel%20Tower!5e0!3m2!1ses!2ses!4v1699200000000!5m2!1ses!2ses";

/// Which content fills the panel below the heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogView {
    Form,
    Success,
}

#[derive(Properties, PartialEq, Clone)]
pub struct OverlayProps {
    pub view: DialogView,
    /// Close requested; drop the open state so the panel animates out.
    #[prop_or_default]
    pub closing: bool,
    pub on_close: Callback<()>,
    pub on_submit: Callback<ContactForm>,
    pub on_send_another: Callback<()>,
}

#[derive(Clone, PartialEq, Default)]
struct FieldRefs {
    name: NodeRef,
    email: NodeRef,
    subject: NodeRef,
    message: NodeRef,
}

impl FieldRefs {
    fn read(&self) -> ContactForm {
        ContactForm {
            name: self
                .name
                .cast::<HtmlInputElement>()
                .map(|el| el.value())
                .unwrap_or_default(),
            email: self
                .email
                .cast::<HtmlInputElement>()
                .map(|el| el.value())
                .unwrap_or_default(),
            subject: self
                .subject
                .cast::<HtmlSelectElement>()
                .map(|el| el.value())
                .unwrap_or_default(),
            message: self
                .message
                .cast::<HtmlTextAreaElement>()
                .map(|el| el.value())
                .unwrap_or_default(),
        }
    }
}

/// Backdrop and dialog panel, rendered into the `.contact-overlay` host.
#[function_component(ContactOverlay)]
pub fn contact_overlay(p: &OverlayProps) -> Html {
    let panel_ref = use_node_ref();
    let backdrop_ref = use_node_ref();
    let fields = use_memo((), |()| FieldRefs::default());
    let entered = use_state(|| false);

    {
        let entered = entered.clone();
        let name_ref = fields.name.clone();
        use_effect_with((), move |()| {
            if cfg!(target_arch = "wasm32") {
                dom::next_frame(move || entered.set(true));
                focus_first(&name_ref);
            }
            || {}
        });
    }

    let on_backdrop = {
        let backdrop_ref = backdrop_ref.clone();
        let on_close = p.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let hit = e.target_dyn_into::<web_sys::Element>();
            if hit.is_some() && hit == backdrop_ref.cast::<web_sys::Element>() {
                on_close.emit(());
            }
        })
    };
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = keydown_handler(panel_ref.clone(), p.on_close.clone());

    let success = p.view == DialogView::Success;
    let panel_class = classes!(
        "contact-panel",
        (*entered && !p.closing).then_some(PANEL_OPEN_CLASS)
    );

    let body = match p.view {
        DialogView::Form => form_view(p, &fields, close.clone()),
        DialogView::Success => success_view(p, close.clone()),
    };

    html! {
        <>
            <div class="backdrop" tabindex="-1" ref={backdrop_ref} onclick={on_backdrop}></div>
            <div
                id="contactModal"
                class={panel_class}
                role="dialog"
                aria-modal="true"
                aria-labelledby="contactTitle"
                aria-describedby="contactDesc"
                aria-live={success.then_some("polite")}
                onkeydown={on_keydown}
                ref={panel_ref}
            >
                <button class="close-btn" aria-label="Cerrar contacto" onclick={close}>{"✕"}</button>
                <h2 id="contactTitle">{"Contacto"}</h2>
                <p id="contactDesc" style="margin-top:0.25rem;color:var(--muted-2);">
                    {"Escríbenos y te responderemos lo antes posible."}
                </p>
                <div class="contact-grid">{ body }</div>
            </div>
        </>
    }
}

fn form_view(p: &OverlayProps, fields: &FieldRefs, cancel: Callback<MouseEvent>) -> Html {
    let on_submit = {
        let fields = fields.clone();
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(fields.read());
        })
    };

    html! {
        <>
            <form class="contact-form" id="contactForm" novalidate={true} onsubmit={on_submit}>
                <div class="mb-2">
                    <label for="c-name">{"Nombre"}</label>
                    <input id="c-name" name="name" class="form-control" type="text" required={true} autocomplete="name" ref={fields.name.clone()} />
                </div>
                <div class="mb-2">
                    <label for="c-email">{"Email"}</label>
                    <input id="c-email" name="email" class="form-control" type="email" required={true} autocomplete="email" ref={fields.email.clone()} />
                </div>
                <div class="mb-2">
                    <label for="c-subject">{"Asunto"}</label>
                    <select id="c-subject" name="subject" class="form-control" ref={fields.subject.clone()}>
                        { for Subject::ALL.iter().map(|subject| html! {
                            <option value={subject.label()}>{ subject.label() }</option>
                        }) }
                    </select>
                </div>
                <div class="mb-2">
                    <label for="c-message">{"Mensaje"}</label>
                    <textarea id="c-message" name="message" class="form-control" rows="6" required={true} ref={fields.message.clone()} />
                </div>
                <div class="contact-actions">
                    <button class="btn btn-cta" type="submit">{"Enviar"}</button>
                    <button type="button" class="btn btn-back js-cancel" onclick={cancel}>{"Cancelar"}</button>
                </div>
                <input type="hidden" name={HIDDEN_SUBJECT_FIELD} value={HIDDEN_SUBJECT} />
            </form>
            { contact_info() }
        </>
    }
}

fn contact_info() -> Html {
    html! {
        <div class="contact-info" aria-hidden="false">
            <h4 style="color:#fff;margin-bottom:8px">{"Información"}</h4>
            <p style="margin:0.2rem 0;color:var(--muted-2)">{"Dirección: Av. Ejemplo 123, Ciudad"}</p>
            <p style="margin:0.2rem 0;color:var(--muted-2)">{"Teléfono: +34 600 000 000"}</p>
            <p style="margin:0.2rem 0;color:var(--muted-2)">{"Email: contacto@bytemasters.local"}</p>
            <div style="margin-top:12px">
                <iframe
                    src={MAP_EMBED_URL}
                    width="100%"
                    height="160"
                    style="border:0;border-radius:8px;"
                    allowfullscreen={true}
                    loading="lazy"
                    referrerpolicy="no-referrer-when-downgrade"
                ></iframe>
            </div>
            <div style="margin-top:12px;color:var(--muted-2)">
                {"Redes: "}
                <a href="#" style="color:var(--accent)">{"Twitter"}</a>
                {" · "}
                <a href="#" style="color:var(--accent)">{"LinkedIn"}</a>
            </div>
        </div>
    }
}

fn success_view(p: &OverlayProps, close: Callback<MouseEvent>) -> Html {
    let send_another = {
        let cb = p.on_send_another.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div class="contact-success pulse">
            <h3 style="color:#fff;margin-bottom:8px">{"Mensaje enviado"}</h3>
            <p style="color:var(--muted-2)">{"Gracias, hemos recibido tu mensaje. Te responderemos pronto."}</p>
            <div style="margin-top:18px;display:flex;gap:10px">
                <button class="btn btn-cta js-close-success" onclick={close}>{"Cerrar"}</button>
                <button class="btn btn-back js-send-another" onclick={send_another}>{"Enviar otro mensaje"}</button>
            </div>
        </div>
    }
}
