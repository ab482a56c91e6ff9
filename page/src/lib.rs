//! Page behavior for the Launchpad marketing site.
//!
//! This crate owns every piece of page logic that does not need a browser:
//! the mock sign-in flag, anchor scroll offsets, billing preference, demo
//! stepping, the simulated deploy, form validation, password strength,
//! theming and toasts. The `client` crate owns the DOM. It reports what it
//! found on the page as a [`layout::PageLayout`], forwards events into
//! [`controller::PageController`], and applies the returned
//! [`action::Action`]s in order.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | `PageController`: event handlers returning actions |
//! | [`action`] | DOM effects and timer requests emitted by the controller |
//! | [`clock`] | Virtual clock that drives timers deterministically |
//! | [`config`] | `PageConfig`, view bindings, timings |
//! | [`layout`] | What the host found on the current page |
//! | [`store`] | Key-value persistence trait and in-memory store |
//! | [`auth`] | Mock sign-in flag and the cosmetic page redirect |
//! | [`scroll`] | In-page anchor resolution and header offsets |
//! | [`pricing`] | Billing preference |
//! | [`demo`] | Demo step auto-advance |
//! | [`deploy`] | Simulated deploy outcome and in-flight tracking |
//! | [`forms`] | Contact and sign-in form validation |
//! | [`password`] | Password strength score and meter state |
//! | [`theme`] | Light/dark theme and the injected stylesheet |
//! | [`toast`] | Toast ids and lifecycle |

pub mod action;
pub mod auth;
pub mod clock;
pub mod config;
pub mod controller;
pub mod demo;
pub mod deploy;
pub mod forms;
pub mod layout;
pub mod password;
pub mod pricing;
pub mod scroll;
pub mod store;
pub mod theme;
pub mod toast;
