//! Integration tests for the trace output of pipeline runs
//!
//! These tests install a `tracing-subscriber` formatter writing into a
//! shared buffer and check that:
//! - Every application logs its step count
//! - Every dispatched step logs its algorithm name and branch
//! - Resumed branches are not dispatched again

use std::io;
use std::sync::{Arc, Mutex};

use gimo_engine::{and_then, or_else, transform, transform_error};
use tracing::Level;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<R>(run: impl FnOnce() -> R) -> (R, String) {
    let buffer = Capture::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, run);
    (result, buffer.text())
}

#[test]
fn test_apply_logs_step_count() {
    let (out, log) = capture(|| (transform(|v: i32| v + 1) | transform(|v: i32| v * 2)).apply(Some(1)));
    assert_eq!(out, Some(4));
    assert!(log.contains("Applying pipeline"), "{log}");
    assert!(log.contains("steps=2"), "{log}");
}

#[test]
fn test_dispatch_logs_algorithm_and_branch() {
    let (out, log) = capture(|| and_then(|v: i32| Some(v)).apply(None::<i32>));
    assert_eq!(out, None);
    assert!(log.contains("algorithm=\"and_then\""), "{log}");
    assert!(log.contains("has_value=false"), "{log}");
}

#[test]
fn test_resumed_steps_are_not_dispatched() {
    // Only the first step tests its input; transform hands the next step a known branch
    let pipeline = transform(|v: i32| v) | transform_error(|e: String| e.len());
    let (_, log) = capture(|| pipeline.apply_ref(Ok::<i32, String>(1)));
    assert_eq!(log.matches("Dispatching step").count(), 1, "{log}");
}

#[test]
fn test_recovery_is_dispatched_again() {
    let pipeline = or_else(|| Some(5)) | transform(|v: i32| v + 1);
    let (out, log) = capture(|| pipeline.apply_ref(None::<i32>));
    assert_eq!(out, Some(6));
    assert_eq!(log.matches("Dispatching step").count(), 2, "{log}");
    assert!(log.contains("algorithm=\"or_else\""), "{log}");
    assert!(log.contains("algorithm=\"transform\""), "{log}");
}
