//! Integration tests for the process-wide logger and call-site macros.
//!
//! Every test in this binary shares one global logger, so each test holds
//! `SERIAL` and resets the configuration it touches.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::sync::atomic::{AtomicUsize, Ordering};

use logging::{
    ColorChoice, DEFAULT_NAMESPACE, LoggerConfig, MemorySink, Severity, UserData, clear_lock,
    global, log, log_debug, log_error, log_fatal, log_info, log_trace, log_warn, set_color,
    set_level, set_lock, set_output, set_quiet, set_udata, sf_log, sf_log_debug, sf_log_error,
    sf_log_fatal, sf_log_info, sf_log_trace, sf_log_warn,
};

static SERIAL: Mutex<()> = Mutex::new(());

/// Serialises access to the global logger and installs a fresh buffer.
fn fresh() -> (MutexGuard<'static, ()>, MemorySink) {
    let guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
    let buffer = MemorySink::new();
    set_output(buffer.clone());
    set_level(Severity::Trace);
    set_quiet(false);
    set_color(ColorChoice::Auto);
    clear_lock();
    set_udata(None);
    (guard, buffer)
}

// ============================================================================
// End-to-end Scenarios
// ============================================================================

/// Verifies the INFO-minimum scenario: DEBUG dropped, INFO written.
#[test]
fn info_minimum_scenario() {
    let (_serial, buffer) = fresh();
    set_level(Severity::Info);

    log(Severity::Debug, "a.c", 10, "NS", format_args!("x={}", 5));
    assert!(buffer.is_empty());

    log(Severity::Info, "a.c", 11, "NS", format_args!("y={}", 7));
    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert!(line.ends_with("y=7"));
    assert!(line.contains("INFO"));
    assert!(line.contains("NS"));
    assert!(line.contains("11"));
}

/// Verifies quiet overrides a TRACE minimum for FATAL records.
#[test]
fn quiet_scenario() {
    let (_serial, buffer) = fresh();
    set_quiet(true);
    set_level(Severity::Trace);

    log(Severity::Fatal, "a.c", 12, "NS", format_args!("fatal"));

    assert!(buffer.is_empty());
}

/// Verifies configuration loaded from key/value pairs drives the global logger.
#[test]
fn config_applies_to_global() {
    let (_serial, buffer) = fresh();
    let config = LoggerConfig::from_lookup(|key| match key {
        "NATIVE_LOG_LEVEL" => Some("WARN".to_owned()),
        "NATIVE_LOG_COLOR" => Some("always".to_owned()),
        _ => None,
    })
    .expect("valid configuration");
    config.apply(global());

    log_info!("dropped");
    log_warn!("kept {}", 1);

    let text = buffer.contents_lossy();
    assert_eq!(buffer.write_count(), 1);
    assert!(text.contains("\x1b[33mWARN \x1b[0m"));
    assert!(text.ends_with("kept 1\n"));
}

// ============================================================================
// Macros
// ============================================================================

/// Verifies the default-namespace macros tag records with `C`.
#[test]
fn default_namespace_macros() {
    let (_serial, buffer) = fresh();

    log_trace!("t");
    log_debug!("d");
    log_info!("i");
    log_warn!("w");
    log_error!("e");
    log_fatal!("f");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 6);
    let namespace = format!(" {DEFAULT_NAMESPACE:<5} ");
    for (line, severity) in lines.iter().zip(Severity::ALL) {
        assert!(line.contains(severity.label()), "{line}");
        assert!(line.contains(&namespace), "{line}");
        assert!(line.contains("global_logger.r"), "{line}");
    }
}

/// Verifies the namespaced macros carry the caller's namespace.
#[test]
fn namespaced_macros() {
    let (_serial, buffer) = fresh();

    sf_log_trace!("CURL", "t");
    sf_log_debug!("CURL", "d");
    sf_log_info!("CURL", "i");
    sf_log_warn!("CURL", "w");
    sf_log_error!("CURL", "e");
    sf_log_fatal!("CURL", "f={}", 6);

    let lines = buffer.lines();
    assert_eq!(lines.len(), 6);
    assert!(lines.iter().all(|line| line.contains(" CURL  ")));
    assert!(lines[5].ends_with("f=6"));
}

/// Verifies the macros record the line of the call site.
#[test]
fn macros_capture_call_site_line() {
    let (_serial, buffer) = fresh();

    let expected = line!() + 1;
    sf_log!(Severity::Info, "NS", "here");

    assert!(buffer.contents_lossy().contains(&format!(" {expected:>4}: here")));
}

/// Verifies macro arguments are not evaluated into output when filtered.
#[test]
fn filtered_macros_write_nothing() {
    let (_serial, buffer) = fresh();
    set_level(Severity::Error);

    log_debug!("noise {}", 1);
    sf_log_warn!("NET", "noise {}", 2);

    assert!(buffer.is_empty());
}

// ============================================================================
// Global Lock
// ============================================================================

/// Verifies the global lock callback wraps emitted records only.
#[test]
fn global_lock_pairs_calls() {
    let (_serial, buffer) = fresh();
    let calls = Arc::new(AtomicUsize::new(0));
    set_udata(Some(Arc::clone(&calls) as UserData));
    set_lock(|udata: Option<&UserData>, _acquire: bool| {
        if let Some(calls) = udata.and_then(|data| data.downcast_ref::<AtomicUsize>()) {
            calls.fetch_add(1, Ordering::SeqCst);
        }
    });
    set_level(Severity::Info);

    log_debug!("filtered");
    log_info!("written");

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(buffer.write_count(), 1);

    clear_lock();
    set_udata(None);
    assert!(!global().snapshot().lock_installed);
}
