//! DOM host for the page controller.
//!
//! ARCHITECTURE
//! ============
//! `PageHost` owns the controller and everything the browser hands it:
//! the document, the resolved deploy controls, live toasts and the timer
//! table. Event listeners read plain values off their target, call one
//! controller handler and apply the returned actions in order.
//!
//! TIMERS
//! ======
//! Each `Schedule` spawns a `TimeoutFuture` tagged with a fresh generation
//! and records it under the timer key. `Cancel` and re-scheduling replace the
//! recorded generation, so a superseded future finds a mismatch when it wakes
//! and does nothing.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no window object")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("DOM call failed: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for HostError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{PageHost, mount, mount_when_ready};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use page::action::{Action, FormKind, Timer};
    use page::config::ViewBindings;
    use page::controller::PageController;
    use page::deploy;
    use page::forms;
    use page::layout::PageLayout;
    use page::password::{self, Meter};
    use page::theme::{self, Theme};
    use page::toast::ToastId;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{
        Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement, HtmlFormElement,
        HtmlInputElement, ScrollBehavior, ScrollToOptions, Window,
    };

    use super::HostError;
    use crate::dom;
    use crate::page_config;
    use crate::random::{self, BrowserRandom};
    use crate::storage::LocalStorage;

    type Controller = PageController<LocalStorage, BrowserRandom>;

    pub struct PageHost {
        window: Window,
        document: Document,
        bindings: ViewBindings,
        controller: RefCell<Controller>,
        deploy_buttons: Vec<HtmlElement>,
        pub(super) timers: RefCell<HashMap<Timer, u64>>,
        generation: Cell<u64>,
        pub(super) toasts: RefCell<HashMap<ToastId, Element>>,
        meter: RefCell<Option<Element>>,
    }

    /// Mount now, or on `DOMContentLoaded` if the document is still parsing.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if there is no window or document, or the
    /// ready listener cannot be installed.
    pub fn mount_when_ready() -> Result<(), HostError> {
        let window = web_sys::window().ok_or(HostError::MissingWindow)?;
        let document = window.document().ok_or(HostError::MissingDocument)?;
        if document.ready_state() != "loading" {
            mount()?;
            return Ok(());
        }
        let on_ready = Closure::once(|| {
            if let Err(e) = mount() {
                log::error!("page behavior not mounted: {e}");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
        Ok(())
    }

    /// Build the host, run page initialization and bind every listener.
    ///
    /// A page that redirects during initialization is left unbound.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if there is no window or document, or a
    /// listener cannot be installed.
    pub fn mount() -> Result<Rc<PageHost>, HostError> {
        let window = web_sys::window().ok_or(HostError::MissingWindow)?;
        let document = window.document().ok_or(HostError::MissingDocument)?;
        let config = page_config::load(&document);
        let bindings = config.bindings.clone();
        let store = LocalStorage::open(&window);
        let deploy_buttons = dom::query_all(&document, &bindings.deploy_buttons)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();

        let host = Rc::new(PageHost {
            controller: RefCell::new(PageController::new(config, store, random::browser())),
            window,
            document,
            bindings,
            deploy_buttons,
            timers: RefCell::new(HashMap::new()),
            generation: Cell::new(0),
            toasts: RefCell::new(HashMap::new()),
            meter: RefCell::new(None),
        });

        let layout = host.layout();
        let actions = host.controller.borrow_mut().init(&layout);
        let leaving = actions.iter().any(|a| matches!(a, Action::Redirect(_)));
        host.apply(&actions, None);
        if !leaving {
            host.bind_events()?;
            log::info!("page behavior mounted on {}", layout.path);
        }
        Ok(host)
    }

    impl PageHost {
        fn layout(&self) -> PageLayout {
            let b = &self.bindings;
            let doc = &self.document;
            let checked: Vec<bool> = self.demo_steps().iter().map(HtmlInputElement::checked).collect();
            PageLayout {
                path: self.window.location().pathname().unwrap_or_default(),
                has_billing_toggle: dom::input_by_id(doc, &b.billing_toggle_id).is_some(),
                demo_steps: checked.len(),
                initial_step: dom::initial_step(&checked),
                has_password_field: doc.get_element_by_id(&b.password_field_id).is_some(),
                has_theme_toggle: doc.get_element_by_id(&b.theme_toggle_id).is_some(),
                has_header_ctas: dom::query_one(doc, &b.header_ctas).is_some(),
                has_dark_mode_styles: dom::query_one(doc, &b.dark_mode_styles).is_some(),
                has_user_slot: dom::query_one(doc, &b.user_slot).is_some(),
                document_theme: doc
                    .document_element()
                    .and_then(|html| html.get_attribute(theme::THEME_ATTRIBUTE))
                    .and_then(|value| Theme::parse(&value)),
            }
        }

        fn demo_steps(&self) -> Vec<HtmlInputElement> {
            dom::query_all(&self.document, &self.bindings.demo_steps)
                .into_iter()
                .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
                .collect()
        }

        fn form(&self, kind: FormKind) -> Option<Element> {
            let selector = match kind {
                FormKind::Contact => &self.bindings.contact_form,
                FormKind::Login => &self.bindings.login_form,
            };
            dom::query_one(&self.document, selector)
        }

        fn form_field(&self, kind: FormKind, field: &str) -> Option<Element> {
            self.form(kind)
                .and_then(|form| dom::query_one_in(&form, &dom::field_selector(field)))
        }

        fn header_height(&self) -> f64 {
            dom::query_one(&self.document, &self.bindings.site_header)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map_or(0.0, |header| f64::from(header.offset_height()))
        }

        // --- Event binding ---

        /// Attach `handler` for `kind` events on `target` for the page's lifetime.
        fn listen<F>(self: &Rc<Self>, target: &EventTarget, kind: &str, handler: F) -> Result<(), HostError>
        where
            F: Fn(&PageHost, &Event) -> Vec<Action> + 'static,
        {
            let host = Rc::clone(self);
            let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let actions = handler(&host, &event);
                host.apply(&actions, Some(&event));
            });
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            closure.forget();
            Ok(())
        }

        fn bind_events(self: &Rc<Self>) -> Result<(), HostError> {
            self.bind_navigation()?;
            self.bind_demo()?;
            self.bind_deploys()?;
            self.bind_forms()?;
            self.bind_account()?;
            if let Some(field) = self.document.get_element_by_id(&self.bindings.password_field_id) {
                self.listen(&field, "input", |host, event| {
                    let value = event_element(event).map(|el| dom::field_value(&el)).unwrap_or_default();
                    host.controller.borrow().on_password_input(&value)
                })?;
            }
            if let Some(toggle) = self.document.get_element_by_id(&self.bindings.theme_toggle_id) {
                self.bind_theme_toggle(&toggle)?;
            }
            Ok(())
        }

        fn bind_navigation(self: &Rc<Self>) -> Result<(), HostError> {
            for anchor in dom::query_all(&self.document, &self.bindings.anchors) {
                let href = anchor.get_attribute("href").unwrap_or_default();
                self.listen(&anchor, "click", move |host, _| {
                    let target_top = page::scroll::fragment_id(&href)
                        .and_then(|id| host.document.get_element_by_id(id))
                        .map(|target| target.get_bounding_client_rect().top());
                    let scroll_y = host.window.scroll_y().unwrap_or(0.0);
                    host.controller
                        .borrow()
                        .on_anchor_click(&href, target_top, scroll_y, host.header_height())
                })?;
            }
            for link in dom::query_all(&self.document, &self.bindings.nav_links) {
                self.listen(&link, "click", |host, _| {
                    let open = dom::input_by_id(&host.document, &host.bindings.nav_toggle_id)
                        .is_some_and(|toggle| toggle.checked());
                    host.controller.borrow().on_nav_link_click(open)
                })?;
            }
            if let Some(billing) = dom::input_by_id(&self.document, &self.bindings.billing_toggle_id) {
                let toggle = billing.clone();
                self.listen(&billing, "change", move |host, _| {
                    host.controller.borrow_mut().on_billing_change(toggle.checked())
                })?;
            }
            Ok(())
        }

        fn bind_demo(self: &Rc<Self>) -> Result<(), HostError> {
            let step_ids: Rc<[String]> = self.demo_steps().iter().map(|step| step.id()).collect();
            let labels = dom::query_all(&self.document, &self.bindings.step_labels);
            for (index, label) in labels.into_iter().enumerate() {
                let label_for = label.get_attribute("for");
                let step_ids = Rc::clone(&step_ids);
                self.listen(&label, "click", move |host, _| {
                    let step = dom::step_for_label(label_for.as_deref(), index, &step_ids);
                    host.controller.borrow_mut().on_step_label_click(step)
                })?;
            }
            Ok(())
        }

        fn bind_deploys(self: &Rc<Self>) -> Result<(), HostError> {
            for (index, button) in self.deploy_buttons.iter().enumerate() {
                let control = button.clone();
                self.listen(button, "click", move |host, _| {
                    let label = control.text_content().unwrap_or_default();
                    host.controller.borrow_mut().on_deploy_click(index, &label)
                })?;
            }
            Ok(())
        }

        fn bind_forms(self: &Rc<Self>) -> Result<(), HostError> {
            if let Some(form) = self.form(FormKind::Contact) {
                self.listen(&form, "submit", |host, _| {
                    let email = host.field_value(FormKind::Contact, forms::EMAIL_FIELD);
                    let message = host.field_value(FormKind::Contact, forms::MESSAGE_FIELD);
                    host.controller.borrow_mut().on_contact_submit(&email, &message)
                })?;
                self.bind_error_clearing(&form, FormKind::Contact)?;
            }
            if let Some(form) = self.form(FormKind::Login) {
                self.listen(&form, "submit", |host, _| {
                    let email = host.field_value(FormKind::Login, forms::EMAIL_FIELD);
                    let remember = host
                        .form_field(FormKind::Login, forms::REMEMBER_FIELD)
                        .is_some_and(|el| dom::is_checked(&el));
                    host.controller.borrow_mut().on_login_submit(&email, remember)
                })?;
                self.bind_error_clearing(&form, FormKind::Login)?;
            }
            Ok(())
        }

        fn bind_error_clearing(self: &Rc<Self>, form: &Element, kind: FormKind) -> Result<(), HostError> {
            for field in dom::query_all_in(form, dom::EDITABLE_FIELDS) {
                let Some(name) = field.get_attribute("name") else {
                    continue;
                };
                self.listen(&field, "input", move |host, _| host.controller.borrow().on_field_input(kind, &name))?;
            }
            Ok(())
        }

        fn bind_account(self: &Rc<Self>) -> Result<(), HostError> {
            for link in dom::query_all(&self.document, &self.bindings.logout_links) {
                self.listen(&link, "click", |host, _| host.controller.borrow_mut().on_logout_click())?;
            }
            Ok(())
        }

        fn bind_theme_toggle(self: &Rc<Self>, toggle: &Element) -> Result<(), HostError> {
            self.listen(toggle, "click", |host, _| host.controller.borrow_mut().on_theme_toggle())
        }

        fn field_value(&self, kind: FormKind, field: &str) -> String {
            self.form_field(kind, field)
                .map(|el| dom::field_value(&el))
                .unwrap_or_default()
        }

        // --- Actions ---

        pub(super) fn apply(self: &Rc<Self>, actions: &[Action], event: Option<&Event>) {
            for action in actions {
                if let Err(e) = self.apply_one(action, event) {
                    log::warn!("could not apply {action:?}: {e}");
                }
            }
        }

        fn apply_one(self: &Rc<Self>, action: &Action, event: Option<&Event>) -> Result<(), HostError> {
            match action {
                Action::PreventDefault => {
                    if let Some(event) = event {
                        event.prevent_default();
                    }
                }
                Action::Redirect(href) => self.window.location().set_href(href)?,
                Action::Reload => self.window.location().reload()?,
                Action::ShowDashboardLinks { label, href } => {
                    for link in dom::query_all(&self.document, &self.bindings.login_links) {
                        link.set_text_content(Some(label.as_str()));
                        link.set_attribute("href", href)?;
                    }
                }
                Action::SetLogoutVisible(visible) => {
                    for link in dom::query_all(&self.document, &self.bindings.logout_links) {
                        if let Some(link) = link.dyn_ref::<HtmlElement>() {
                            link.style().set_property("display", dom::logout_display(*visible))?;
                        }
                    }
                }
                Action::ShowCurrentUser(user) => {
                    for slot in dom::query_all(&self.document, &self.bindings.user_slot) {
                        slot.set_text_content(Some(user.as_str()));
                    }
                }
                Action::ScrollTo { top } => {
                    let options = ScrollToOptions::new();
                    options.set_top(*top);
                    options.set_behavior(ScrollBehavior::Smooth);
                    self.window.scroll_to_with_scroll_to_options(&options);
                }
                Action::SetNavOpen(open) => {
                    if let Some(toggle) = dom::input_by_id(&self.document, &self.bindings.nav_toggle_id) {
                        toggle.set_checked(*open);
                    }
                }
                Action::SetBillingChecked(checked) => {
                    if let Some(toggle) = dom::input_by_id(&self.document, &self.bindings.billing_toggle_id) {
                        toggle.set_checked(*checked);
                    }
                }
                Action::SelectDemoStep(step) => {
                    if let Some(radio) = self.demo_steps().get(*step) {
                        radio.set_checked(true);
                    }
                }
                Action::SetDeployBusy { button, label } => {
                    if let Some(control) = self.deploy_buttons.get(*button) {
                        control.set_inner_html(&dom::deploy_busy_html(label));
                        control.class_list().add_1(deploy::BUSY_CLASS)?;
                    }
                }
                Action::RestoreDeployLabel { button, label } => {
                    if let Some(control) = self.deploy_buttons.get(*button) {
                        control.set_text_content(Some(label.as_str()));
                        control.class_list().remove_1(deploy::BUSY_CLASS)?;
                    }
                }
                Action::ShowFieldError { form, field, message } => {
                    if let Some(input) = self.form_field(*form, field) {
                        self.show_field_error(&input, message)?;
                    }
                }
                Action::ClearFieldError { form, field } => {
                    if let Some(input) = self.form_field(*form, field) {
                        clear_field_error(&input)?;
                    }
                }
                Action::SetSubmitState { form, label, disabled } => {
                    let button = self
                        .form(*form)
                        .and_then(|f| dom::query_one_in(&f, dom::SUBMIT_BUTTON))
                        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
                    if let Some(button) = button {
                        button.set_text_content(Some(label.as_str()));
                        button.set_disabled(*disabled);
                    }
                }
                Action::ResetForm(kind) => {
                    if let Some(form) = self.form(*kind).and_then(|f| f.dyn_into::<HtmlFormElement>().ok()) {
                        form.reset();
                    }
                }
                Action::ShowToast { id, kind, message } => {
                    let body = self.document.body().ok_or(HostError::MissingDocument)?;
                    let toast = self.document.create_element("div")?;
                    toast.set_class_name(&dom::toast_class_name(*kind));
                    toast.set_text_content(Some(message.as_str()));
                    body.append_child(&toast)?;
                    self.toasts.borrow_mut().insert(*id, toast);
                }
                Action::RevealToast(id) => {
                    if let Some(toast) = self.toasts.borrow().get(id) {
                        toast.class_list().add_1(dom::TOAST_SHOW_CLASS)?;
                    }
                }
                Action::HideToast(id) => {
                    if let Some(toast) = self.toasts.borrow().get(id) {
                        toast.class_list().remove_1(dom::TOAST_SHOW_CLASS)?;
                    }
                }
                Action::RemoveToast(id) => {
                    if let Some(toast) = self.toasts.borrow_mut().remove(id) {
                        toast.remove();
                    }
                }
                Action::InjectStrengthMeter => self.inject_meter()?,
                Action::UpdateStrengthMeter(meter) => self.update_meter(meter)?,
                Action::SetTheme(theme) => {
                    let html = self.document.document_element().ok_or(HostError::MissingDocument)?;
                    match theme.attribute_value() {
                        Some(value) => html.set_attribute(theme::THEME_ATTRIBUTE, value)?,
                        None => html.remove_attribute(theme::THEME_ATTRIBUTE)?,
                    }
                }
                Action::CreateThemeToggle { in_header } => self.create_theme_toggle(*in_header)?,
                Action::InjectStyles => {
                    let head = self.document.head().ok_or(HostError::MissingDocument)?;
                    let style = self.document.create_element("style")?;
                    style.set_attribute(theme::STYLE_MARKER_ATTRIBUTE, "true")?;
                    style.set_text_content(Some(theme::STYLESHEET));
                    head.append_child(&style)?;
                }
                Action::Schedule { timer, delay_ms } => self.schedule(*timer, *delay_ms),
                Action::Cancel(timer) => {
                    self.timers.borrow_mut().remove(timer);
                }
            }
            Ok(())
        }

        fn show_field_error(&self, input: &Element, message: &str) -> Result<(), HostError> {
            clear_field_error(input)?;
            if let Some(parent) = input.parent_element() {
                let error = self.document.create_element("p")?;
                error.set_class_name(forms::ERROR_MESSAGE_CLASS);
                error.set_text_content(Some(message));
                parent.append_child(&error)?;
            }
            input.class_list().add_1(forms::ERROR_FIELD_CLASS)?;
            Ok(())
        }

        fn inject_meter(&self) -> Result<(), HostError> {
            let Some(field) = self.document.get_element_by_id(&self.bindings.password_field_id) else {
                return Ok(());
            };
            let Some(parent) = field.parent_element() else {
                return Ok(());
            };
            let meter = self.document.create_element("div")?;
            meter.set_class_name(password::METER_CLASS);
            meter.set_inner_html(password::METER_HTML);
            parent.append_child(&meter)?;
            *self.meter.borrow_mut() = Some(meter);
            Ok(())
        }

        fn update_meter(&self, state: &Meter) -> Result<(), HostError> {
            let meter = self.meter.borrow();
            let Some(meter) = meter.as_ref() else {
                return Ok(());
            };
            if let Some(fill) = dom::query_one_in(meter, dom::METER_FILL).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
                fill.style().set_property("width", &dom::meter_fill_width(state))?;
                fill.set_class_name(&dom::meter_fill_class(state));
            }
            if let Some(text) = dom::query_one_in(meter, dom::METER_TEXT) {
                text.set_text_content(Some(state.label));
            }
            Ok(())
        }

        fn create_theme_toggle(self: &Rc<Self>, in_header: bool) -> Result<(), HostError> {
            let toggle = self.document.create_element("button")?;
            toggle.set_id(&self.bindings.theme_toggle_id);
            toggle.set_class_name(theme::TOGGLE_CLASS);
            toggle.set_inner_html(theme::TOGGLE_HTML);
            if in_header {
                if let Some(ctas) = dom::query_one(&self.document, &self.bindings.header_ctas) {
                    ctas.prepend_with_node_1(&toggle)?;
                }
            }
            self.bind_theme_toggle(&toggle)
        }

        // --- Timers ---

        pub(super) fn schedule(self: &Rc<Self>, timer: Timer, delay_ms: u32) {
            let generation = self.generation.get() + 1;
            self.generation.set(generation);
            self.timers.borrow_mut().insert(timer, generation);
            let host = Rc::clone(self);
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                host.fire(timer, generation);
            });
        }

        pub(super) fn fire(self: &Rc<Self>, timer: Timer, generation: u64) {
            {
                let mut timers = self.timers.borrow_mut();
                if timers.get(&timer) != Some(&generation) {
                    return;
                }
                timers.remove(&timer);
            }
            let actions = self.controller.borrow_mut().on_timer(timer);
            self.apply(&actions, None);
        }
    }

    fn clear_field_error(input: &Element) -> Result<(), HostError> {
        if let Some(parent) = input.parent_element() {
            if let Some(error) = dom::query_one_in(&parent, &format!(".{}", forms::ERROR_MESSAGE_CLASS)) {
                error.remove();
            }
        }
        input.class_list().remove_1(forms::ERROR_FIELD_CLASS)?;
        Ok(())
    }

    fn event_element(event: &Event) -> Option<Element> {
        event.target().and_then(|target| target.dyn_into::<Element>().ok())
    }
}
