//! Contact dialog controller
//!
//! Owns the one `ModalSession` for the page and the mounted dialog, if any.
//! Every visitor action goes through `ModalSession` first; this module then
//! carries out the DOM work the session asked for.
use std::cell::RefCell;
use std::rc::Rc;

use bytemasters_core::constants::{MODAL_OPEN_BODY_CLASS, OVERLAY_CLASS};
use bytemasters_core::{
    ContactForm, ModalSession, SiteConfig, SubmitDecision, SubmitError, SubmitResolution,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};
use yew::{AppHandle, Callback};

use crate::dom;

mod focus;
pub mod view;


pub use view::{ContactOverlay, DialogView, OverlayProps};

struct Mount {
    host: Element,
    app: AppHandle<ContactOverlay>,
    props: OverlayProps,
}

impl Mount {
    fn rerender(&mut self) {
        self.app.update(self.props.clone());
    }

    fn unmount(self) {
        self.app.destroy();
        self.host.remove();
    }
}

struct Inner {
    session: ModalSession<HtmlElement>,
    mount: Option<Mount>,
    endpoint: String,
}

/// Page-wide handle to the contact dialog. Clones share the same dialog.
#[derive(Clone)]
pub struct ContactController {
    inner: Rc<RefCell<Inner>>,
}

impl ContactController {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                session: ModalSession::new(config.close_delay_ms),
                mount: None,
                endpoint: config.form_endpoint.clone(),
            })),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.inner.borrow().session.is_mounted()
    }

    /// Open the dialog unless one is already in the document.
    pub fn open(&self) {
        let focused = dom::active_html_element();
        if !self.inner.borrow_mut().session.open(focused) {
            return;
        }
        self.mount();
    }

    fn mount(&self) {
        let document = dom::document();
        let host = document.body().and_then(|body| {
            let host = document.create_element("div").ok()?;
            host.set_class_name(OVERLAY_CLASS);
            body.append_child(&host).ok()?;
            let _ = body.class_list().add_1(MODAL_OPEN_BODY_CLASS);
            Some(host)
        });
        let Some(host) = host else {
            log::warn!("contact dialog could not be attached to the page");
            let _ = self.inner.borrow_mut().session.finish_close();
            return;
        };

        let props = self.overlay_props();
        let app = yew::Renderer::<ContactOverlay>::with_root_and_props(host.clone(), props.clone())
            .render();
        self.inner.borrow_mut().mount = Some(Mount { host, app, props });
        log::debug!("contact dialog opened");
    }

    fn overlay_props(&self) -> OverlayProps {
        let on_close = {
            let this = self.clone();
            Callback::from(move |()| this.close())
        };
        let on_submit = {
            let this = self.clone();
            Callback::from(move |form: ContactForm| this.submit(form))
        };
        let on_send_another = {
            let this = self.clone();
            // Tear-down happens outside the dialog's own click handler.
            Callback::from(move |()| {
                let this = this.clone();
                spawn_local(async move { this.send_another() });
            })
        };
        OverlayProps {
            view: DialogView::Form,
            closing: false,
            on_close,
            on_submit,
            on_send_another,
        }
    }

    /// Start the close transition; the dialog leaves the document after the delay.
    pub fn close(&self) {
        let delay = {
            let mut inner = self.inner.borrow_mut();
            let Some(delay) = inner.session.close() else {
                return;
            };
            if let Some(mount) = inner.mount.as_mut() {
                mount.props.closing = true;
                mount.rerender();
            }
            delay
        };
        if let Some(body) = dom::document().body() {
            let _ = body.class_list().remove_1(MODAL_OPEN_BODY_CLASS);
        }

        let this = self.clone();
        spawn_local(async move {
            if let Err(err) = dom::sleep_ms(delay).await {
                log::warn!("close timer failed: {}", dom::js_error_message(&err));
            }
            this.finish_close();
        });
    }

    fn finish_close(&self) {
        let (effect, mount) = {
            let mut inner = self.inner.borrow_mut();
            let effect = inner.session.finish_close();
            let mount = if effect.detach {
                inner.mount.take()
            } else {
                None
            };
            (effect, mount)
        };
        if let Some(mount) = mount {
            mount.unmount();
            log::debug!("contact dialog removed");
        }
        if let Some(el) = effect.restore_focus {
            let _ = el.focus();
        }
    }

    fn submit(&self, form: ContactForm) {
        let decision = self.inner.borrow_mut().session.begin_submit(&form);
        match decision {
            SubmitDecision::Ignored(phase) => {
                log::debug!("submit ignored while dialog is {phase:?}");
            }
            SubmitDecision::Invalid(err) => {
                log::debug!("{err}");
                dom::alert(err.alert_text());
            }
            SubmitDecision::Send => {
                let endpoint = self.inner.borrow().endpoint.clone();
                let this = self.clone();
                spawn_local(async move {
                    let outcome = send(&endpoint, &form).await;
                    this.finish_submit(outcome);
                });
            }
        }
    }

    fn finish_submit(&self, outcome: Result<(), SubmitError>) {
        let resolution = self.inner.borrow_mut().session.finish_submit(outcome);
        match resolution {
            SubmitResolution::Succeeded => {
                log::info!("contact form delivered");
                if let Some(mount) = self.inner.borrow_mut().mount.as_mut() {
                    mount.props.view = DialogView::Success;
                    mount.rerender();
                }
            }
            SubmitResolution::Failed(err) => {
                log::error!("{err}");
                dom::alert(err.alert_text());
            }
            SubmitResolution::Stale(outcome) => {
                log::warn!("contact request settled after the dialog closed: {outcome:?}");
            }
        }
    }

    fn send_another(&self) {
        let previous = {
            let mut inner = self.inner.borrow_mut();
            if !inner.session.restart() {
                return;
            }
            inner.mount.take()
        };
        if let Some(mount) = previous {
            mount.unmount();
        }
        self.mount();
    }
}

#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn send(endpoint: &str, form: &ContactForm) -> Result<(), SubmitError> {
    let response = dom::post_form(endpoint, &form.fields())
        .await
        .map_err(|err| SubmitError::Network(dom::js_error_message(&err)))?;
    if response.ok() {
        return Ok(());
    }
    let body = dom::response_text(&response)
        .await
        .unwrap_or_else(|err| dom::js_error_message(&err));
    Err(SubmitError::rejected(response.status(), body))
}
