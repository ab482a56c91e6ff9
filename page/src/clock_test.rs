use super::*;
use crate::config::PageConfig;
use crate::layout::PageLayout;
use crate::store::MemoryStore;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn demo_page() -> (PageController<MemoryStore, StdRng>, VirtualClock) {
    let mut controller = PageController::new(PageConfig::default(), MemoryStore::new(), StdRng::seed_from_u64(7));
    let mut clock = VirtualClock::new();
    let layout = PageLayout { path: "/index.html".to_owned(), demo_steps: 3, has_dark_mode_styles: true, ..PageLayout::default() };
    let actions = controller.init(&layout);
    clock.record(&actions);
    (controller, clock)
}

// =============================================================
// Recording
// =============================================================

#[test]
fn schedule_then_cancel() {
    let mut clock = VirtualClock::new();
    clock.record(&[Action::Schedule { timer: Timer::ContactSent, delay_ms: 100 }]);
    assert!(clock.is_pending(Timer::ContactSent));
    assert_eq!(clock.remaining_ms(Timer::ContactSent), Some(100));

    clock.record(&[Action::Cancel(Timer::ContactSent)]);
    assert!(!clock.is_pending(Timer::ContactSent));
    assert_eq!(clock.pending_count(), 0);
}

#[test]
fn rescheduling_a_key_replaces_it() {
    let mut clock = VirtualClock::new();
    clock.record(&[
        Action::Schedule { timer: Timer::DemoResume, delay_ms: 100 },
        Action::Schedule { timer: Timer::DemoResume, delay_ms: 500 },
    ]);
    assert_eq!(clock.pending_count(), 1);
    assert_eq!(clock.remaining_ms(Timer::DemoResume), Some(500));
}

#[test]
fn non_timer_actions_are_ignored() {
    let mut clock = VirtualClock::new();
    clock.record(&[Action::PreventDefault, Action::Reload]);
    assert_eq!(clock.pending_count(), 0);
}

// =============================================================
// Running
// =============================================================

#[test]
fn nothing_fires_before_due() {
    let (mut controller, mut clock) = demo_page();
    assert!(clock.run_for(&mut controller, 2999).is_empty());
    assert_eq!(clock.now_ms(), 2999);
    assert_eq!(clock.run_for(&mut controller, 1).first(), Some(&Action::SelectDemoStep(1)));
}

#[test]
fn chained_timers_fire_within_window() {
    let (mut controller, mut clock) = demo_page();
    let selected: Vec<Action> = clock
        .run_for(&mut controller, 9000)
        .into_iter()
        .filter(|a| matches!(a, Action::SelectDemoStep(_)))
        .collect();
    assert_eq!(
        selected,
        vec![Action::SelectDemoStep(1), Action::SelectDemoStep(2), Action::SelectDemoStep(0)]
    );
    assert_eq!(clock.remaining_ms(Timer::DemoAdvance), Some(3000));
}

#[test]
fn same_instant_fires_in_schedule_order() {
    let (mut controller, mut clock) = demo_page();
    clock.record(&controller.on_deploy_click(0, "Deploy"));
    clock.record(&controller.on_deploy_click(1, "Deploy"));
    let restored: Vec<usize> = clock
        .run_for(&mut controller, 2000)
        .into_iter()
        .filter_map(|a| match a {
            Action::RestoreDeployLabel { button, .. } => Some(button),
            _ => None,
        })
        .collect();
    assert_eq!(restored, vec![0, 1]);
}
