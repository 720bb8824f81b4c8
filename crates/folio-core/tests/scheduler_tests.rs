// Host-side tests for the frame callback registry.

use folio_core::{FrameScheduler, FrameTime};
use std::cell::RefCell;
use std::rc::Rc;

fn recorder() -> (Rc<RefCell<Vec<FrameTime>>>, impl FnMut(FrameTime)) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    (log, move |t| sink.borrow_mut().push(t))
}

#[test]
fn elapsed_starts_at_first_frame_seen() {
    let mut s = FrameScheduler::new();
    let (a_log, a) = recorder();
    s.subscribe(a);
    s.tick(10.0);
    s.tick(10.5);

    let (b_log, b) = recorder();
    s.subscribe(b);
    s.tick(11.0);

    let a = a_log.borrow();
    assert_eq!(a.len(), 3);
    assert_eq!(a[0].elapsed, 0.0);
    assert_eq!(a[0].delta, 0.0);
    assert!((a[2].elapsed - 1.0).abs() < 1e-6);
    assert!((a[2].delta - 0.5).abs() < 1e-6);

    let b = b_log.borrow();
    assert_eq!(b.len(), 1);
    assert_eq!(b[0].elapsed, 0.0);
}

#[test]
fn unsubscribed_callback_never_runs_again() {
    let mut s = FrameScheduler::new();
    let (log, cb) = recorder();
    let token = s.subscribe(cb);
    s.tick(0.0);
    assert!(s.unsubscribe(token));
    assert!(!s.is_subscribed(token));
    s.tick(1.0);
    s.tick(2.0);
    assert_eq!(log.borrow().len(), 1);
    assert!(s.is_empty());
}

#[test]
fn double_unsubscribe_is_harmless() {
    let mut s = FrameScheduler::new();
    let (_log, cb) = recorder();
    let token = s.subscribe(cb);
    assert!(s.unsubscribe(token));
    assert!(!s.unsubscribe(token));
}

#[test]
fn callbacks_run_in_subscription_order() {
    let mut s = FrameScheduler::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    for id in 0..3 {
        let order = order.clone();
        s.subscribe(move |_| order.borrow_mut().push(id));
    }
    s.tick(0.0);
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
    assert_eq!(s.len(), 3);
}

#[test]
fn mount_churn_leaves_no_residue() {
    let mut s = FrameScheduler::new();
    let mut old = Vec::new();
    for _ in 0..1000 {
        let token = s.subscribe(|_| {});
        assert!(s.is_subscribed(token));
        assert!(s.unsubscribe(token));
        old.push(token);
    }
    assert!(s.is_empty());

    let (log, live) = recorder();
    let current = s.subscribe(live);
    for &token in &old {
        assert!(!s.is_subscribed(token));
        assert!(!s.unsubscribe(token));
    }
    assert!(old.iter().all(|&t| t != current));
    assert_eq!(s.len(), 1);
    s.tick(1.0);
    assert_eq!(log.borrow().len(), 1);
}
