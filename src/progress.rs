//! Progress-callback trait for per-variant build events.
//!
//! Inject an [`Arc<dyn BuildProgressCallback>`] via
//! [`crate::config::BuildConfigBuilder::progress_callback`] to receive events
//! as the build renders each variant and, optionally, prints its PDF.
//!
//! # Example
//!
//! ```rust
//! use resume_variants::{BuildConfig, BuildProgressCallback};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     rendered: AtomicUsize,
//! }
//!
//! impl BuildProgressCallback for CountingCallback {
//!     fn on_variant_rendered(&self, variant_id: &str, compact_length: usize, passed: bool) {
//!         self.rendered.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("{variant_id}: {compact_length} chars, passed={passed}");
//!     }
//! }
//!
//! let counter = Arc::new(CountingCallback { rendered: AtomicUsize::new(0) });
//!
//! let config = BuildConfig::builder()
//!     .progress_callback(counter as Arc<dyn BuildProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use std::sync::Arc;

/// Called by the build as it processes each variant.
///
/// All methods have default no-op implementations so callers only override
/// what they care about.
///
/// # Thread safety
///
/// PDF jobs run concurrently, so `on_pdf_start`, `on_pdf_complete` and
/// `on_pdf_error` may interleave across variants. Implementations must
/// protect shared mutable state (e.g. `Mutex`, `AtomicUsize`).
pub trait BuildProgressCallback: Send + Sync {
    /// Called once after the model is built, before any variant is rendered.
    fn on_build_start(&self, total_variants: usize) {
        let _ = total_variants;
    }

    /// Called after a variant's markdown and HTML are written.
    fn on_variant_rendered(&self, variant_id: &str, compact_length: usize, passed: bool) {
        let _ = (variant_id, compact_length, passed);
    }

    /// Called just before the external PDF renderer is started.
    fn on_pdf_start(&self, variant_id: &str) {
        let _ = variant_id;
    }

    /// Called when a variant's PDF was produced.
    fn on_pdf_complete(&self, variant_id: &str) {
        let _ = variant_id;
    }

    /// Called when a variant's PDF failed or timed out.
    fn on_pdf_error(&self, variant_id: &str, error: &str) {
        let _ = (variant_id, error);
    }

    /// Called once after every artifact has been written.
    fn on_build_complete(&self, total_variants: usize, passed_variants: usize) {
        let _ = (total_variants, passed_variants);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl BuildProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::BuildConfig`].
pub type ProgressCallback = Arc<dyn BuildProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct TrackingCallback {
        rendered: AtomicUsize,
        pdf_ok: AtomicUsize,
        pdf_err: AtomicUsize,
        passed_total: AtomicUsize,
    }

    impl BuildProgressCallback for TrackingCallback {
        fn on_variant_rendered(&self, _id: &str, _len: usize, _passed: bool) {
            self.rendered.fetch_add(1, Ordering::SeqCst);
        }

        fn on_pdf_complete(&self, _id: &str) {
            self.pdf_ok.fetch_add(1, Ordering::SeqCst);
        }

        fn on_pdf_error(&self, _id: &str, _error: &str) {
            self.pdf_err.fetch_add(1, Ordering::SeqCst);
        }

        fn on_build_complete(&self, _total: usize, passed: usize) {
            self.passed_total.store(passed, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_build_start(5);
        cb.on_variant_rendered("01-minimal", 2000, true);
        cb.on_pdf_start("01-minimal");
        cb.on_pdf_error("01-minimal", "timed out");
        cb.on_build_complete(5, 4);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingCallback::default();
        tracker.on_variant_rendered("a", 1, true);
        tracker.on_variant_rendered("b", 1, false);
        tracker.on_pdf_complete("a");
        tracker.on_pdf_error("b", "exit 1");
        tracker.on_build_complete(2, 1);

        assert_eq!(tracker.rendered.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.pdf_ok.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.pdf_err.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.passed_total.load(Ordering::SeqCst), 1);
    }
}
