//! The page controller.
//!
//! `PageController` is the testable half of the page: it holds the little
//! state the page has (demo position, in-flight deploys, pending send, theme)
//! and turns DOM events into [`Action`]s. It never touches the DOM, the real
//! clock or the global random generator; the host supplies the store and the
//! random source and runs the timers it asks for.
//!
//! Handlers take the values the host read off the event target (hrefs,
//! checked state, field values, labels) rather than elements, so every
//! feature can be exercised with plain data.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use rand::RngCore;

use crate::action::{Action, FormKind, Timer};
use crate::auth;
use crate::config::PageConfig;
use crate::demo::DemoCycle;
use crate::deploy::{self, DeployOutcome, DeployTracker};
use crate::forms::{self, FieldError};
use crate::layout::PageLayout;
use crate::password::Meter;
use crate::pricing::{self, Billing};
use crate::scroll;
use crate::store::KeyValueStore;
use crate::theme::{self, Theme};
use crate::toast::{self, ToastKind, Toaster};

pub struct PageController<S, R> {
    config: PageConfig,
    store: S,
    rng: R,
    demo: DemoCycle,
    deploys: DeployTracker,
    contact_sending: bool,
    theme: Theme,
    meter_injected: bool,
    styles_injected: bool,
    toaster: Toaster,
}

impl<S: KeyValueStore, R: RngCore> PageController<S, R> {
    #[must_use]
    pub fn new(config: PageConfig, store: S, rng: R) -> Self {
        Self {
            config,
            store,
            rng,
            demo: DemoCycle::default(),
            deploys: DeployTracker::new(),
            contact_sending: false,
            theme: Theme::default(),
            meter_injected: false,
            styles_injected: false,
            toaster: Toaster::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn demo(&self) -> &DemoCycle {
        &self.demo
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.contact_sending
    }

    #[must_use]
    pub fn is_deploying(&self, button: usize) -> bool {
        self.deploys.is_deploying(button)
    }

    // --- Page load ---

    /// Wire the page up once its markup is ready.
    ///
    /// A signed-out visit to a protected page only yields the redirect;
    /// nothing else is set up on a page that is being left.
    pub fn init(&mut self, layout: &PageLayout) -> Vec<Action> {
        if let Some(login_page) = auth::cosmetic_redirect(&self.store, &layout.path, &self.config.auth) {
            log::info!("signed out on {}, redirecting to {login_page}", layout.path);
            return vec![Action::Redirect(login_page.to_owned())];
        }

        let mut actions = self.auth_nav(layout);

        if layout.has_billing_toggle && pricing::load(&self.store).is_some_and(Billing::is_checked) {
            actions.push(Action::SetBillingChecked(true));
        }

        self.demo = DemoCycle::new(layout.demo_steps, layout.initial_step);
        if self.demo.start() {
            actions.push(self.schedule_demo_tick());
        }

        if layout.has_password_field && !self.meter_injected {
            self.meter_injected = true;
            actions.push(Action::InjectStrengthMeter);
        }

        let stored_theme = theme::load(&self.store);
        self.theme = theme::initial(stored_theme, layout.document_theme);
        if stored_theme == Some(Theme::Dark) {
            actions.push(Action::SetTheme(Theme::Dark));
        }
        if !layout.has_theme_toggle {
            actions.push(Action::CreateThemeToggle { in_header: layout.has_header_ctas });
        }
        if !layout.has_dark_mode_styles && !self.styles_injected {
            self.styles_injected = true;
            actions.push(Action::InjectStyles);
        }

        actions
    }

    fn auth_nav(&self, layout: &PageLayout) -> Vec<Action> {
        let mut actions = Vec::new();
        if auth::is_logged_in(&self.store) {
            actions.push(Action::ShowDashboardLinks {
                label: auth::DASHBOARD_LABEL.to_owned(),
                href: self.config.auth.dashboard_page.clone(),
            });
            actions.push(Action::SetLogoutVisible(true));
        } else {
            actions.push(Action::SetLogoutVisible(false));
        }
        if layout.has_user_slot {
            if let Some(user) = auth::current_user(&self.store) {
                actions.push(Action::ShowCurrentUser(user));
            }
        }
        actions
    }

    // --- Navigation ---

    /// In-page anchor click. `target_top` is the target's viewport-relative
    /// top, or `None` if no element has the fragment's id.
    #[must_use]
    pub fn on_anchor_click(&self, href: &str, target_top: Option<f64>, scroll_y: f64, header_height: f64) -> Vec<Action> {
        if scroll::fragment_id(href).is_none() {
            return Vec::new();
        }
        let Some(target_top) = target_top else {
            return Vec::new();
        };
        vec![
            Action::PreventDefault,
            Action::ScrollTo { top: scroll::target_offset(target_top, scroll_y, header_height) },
        ]
    }

    /// Any nav link click closes the mobile menu.
    #[must_use]
    pub fn on_nav_link_click(&self, nav_open: bool) -> Vec<Action> {
        if nav_open { vec![Action::SetNavOpen(false)] } else { Vec::new() }
    }

    pub fn on_billing_change(&mut self, checked: bool) -> Vec<Action> {
        pricing::save(&mut self.store, Billing::from_checked(checked));
        Vec::new()
    }

    // --- Demo ---

    /// A step label was clicked; `step` is the step it selects, if known.
    pub fn on_step_label_click(&mut self, step: Option<usize>) -> Vec<Action> {
        if self.demo.step_count() == 0 {
            return Vec::new();
        }
        self.demo.pause_at(step);
        log::debug!("demo paused at step {}", self.demo.current());
        vec![
            Action::Cancel(Timer::DemoAdvance),
            Action::Cancel(Timer::DemoResume),
            Action::Schedule { timer: Timer::DemoResume, delay_ms: self.config.timing.demo_resume_ms },
        ]
    }

    fn schedule_demo_tick(&self) -> Action {
        Action::Schedule { timer: Timer::DemoAdvance, delay_ms: self.config.timing.demo_interval_ms.max(1) }
    }

    // --- Deploy ---

    /// Deploy control `button` clicked while showing `label`.
    pub fn on_deploy_click(&mut self, button: usize, label: &str) -> Vec<Action> {
        if !self.deploys.begin(button, label) {
            return vec![Action::PreventDefault];
        }
        vec![
            Action::PreventDefault,
            Action::SetDeployBusy { button, label: deploy::BUSY_LABEL.to_owned() },
            Action::Schedule { timer: Timer::DeployFinish(button), delay_ms: self.config.timing.deploy_ms },
        ]
    }

    // --- Forms ---

    pub fn on_contact_submit(&mut self, email: &str, message: &str) -> Vec<Action> {
        let mut actions = vec![Action::PreventDefault];
        if self.contact_sending {
            return actions;
        }
        let errors = forms::validate_contact(email, message, self.config.min_message_len);
        if !errors.is_empty() {
            actions.extend(field_errors(FormKind::Contact, errors));
            return actions;
        }
        self.contact_sending = true;
        actions.push(Action::SetSubmitState {
            form: FormKind::Contact,
            label: forms::SENDING_LABEL.to_owned(),
            disabled: true,
        });
        actions.push(Action::Schedule { timer: Timer::ContactSent, delay_ms: self.config.timing.contact_send_ms });
        actions
    }

    /// Mock sign-in. Any well-formed email is accepted.
    pub fn on_login_submit(&mut self, email: &str, remember: bool) -> Vec<Action> {
        let mut actions = vec![Action::PreventDefault];
        let errors = forms::validate_login(email);
        if !errors.is_empty() {
            actions.extend(field_errors(FormKind::Login, errors));
            return actions;
        }
        if let Err(e) = auth::login(&mut self.store, email, remember) {
            log::warn!("mock sign-in could not persist: {e}");
        }
        actions.push(Action::Redirect(self.config.auth.dashboard_page.clone()));
        actions
    }

    /// Any edit to a field clears its inline error.
    #[must_use]
    pub fn on_field_input(&self, form: FormKind, field: &str) -> Vec<Action> {
        vec![Action::ClearFieldError { form, field: field.to_owned() }]
    }

    pub fn on_logout_click(&mut self) -> Vec<Action> {
        if let Err(e) = auth::logout(&mut self.store) {
            log::warn!("logout could not clear storage: {e}");
        }
        vec![Action::PreventDefault, Action::Reload]
    }

    // --- Password meter ---

    #[must_use]
    pub fn on_password_input(&self, password: &str) -> Vec<Action> {
        if !self.meter_injected {
            return Vec::new();
        }
        vec![Action::UpdateStrengthMeter(Meter::for_password(password))]
    }

    // --- Theme ---

    pub fn on_theme_toggle(&mut self) -> Vec<Action> {
        self.theme = self.theme.toggled();
        theme::save(&mut self.store, self.theme);
        vec![Action::SetTheme(self.theme)]
    }

    // --- Timers ---

    /// A timer the controller scheduled has fired.
    pub fn on_timer(&mut self, timer: Timer) -> Vec<Action> {
        match timer {
            Timer::DemoAdvance => match self.demo.advance() {
                Some(step) => vec![Action::SelectDemoStep(step), self.schedule_demo_tick()],
                None => Vec::new(),
            },
            Timer::DemoResume => {
                if self.demo.start() {
                    log::debug!("demo resumed from step {}", self.demo.current());
                    vec![self.schedule_demo_tick()]
                } else {
                    Vec::new()
                }
            }
            Timer::DeployFinish(button) => self.finish_deploy(button),
            Timer::ContactSent => self.finish_contact(),
            Timer::ToastReveal(id) => vec![Action::RevealToast(id)],
            Timer::ToastHide(id) => toast::hide(id, &self.config.timing),
            Timer::ToastRemove(id) => vec![Action::RemoveToast(id)],
        }
    }

    fn finish_deploy(&mut self, button: usize) -> Vec<Action> {
        let Some(label) = self.deploys.finish(button) else {
            return Vec::new();
        };
        let outcome = DeployOutcome::draw(&mut self.rng, self.config.deploy_success_rate);
        log::info!("simulated deploy on control {button}: {outcome:?}");
        let mut actions = self.toaster.show(outcome.toast_kind(), outcome.message(), &self.config.timing);
        actions.push(Action::RestoreDeployLabel { button, label });
        actions
    }

    fn finish_contact(&mut self) -> Vec<Action> {
        if !self.contact_sending {
            return Vec::new();
        }
        self.contact_sending = false;
        let mut actions = self.toaster.show(ToastKind::Success, forms::SENT_MESSAGE, &self.config.timing);
        actions.push(Action::ResetForm(FormKind::Contact));
        actions.push(Action::SetSubmitState {
            form: FormKind::Contact,
            label: forms::IDLE_LABEL.to_owned(),
            disabled: false,
        });
        actions
    }
}

fn field_errors(form: FormKind, errors: Vec<FieldError>) -> impl Iterator<Item = Action> {
    errors
        .into_iter()
        .map(move |e| Action::ShowFieldError { form, field: e.field, message: e.message })
}
