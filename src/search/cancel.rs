use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared stop flag polled by every search phase and element visit.
///
/// Clones share the same flag, so a clone handed to another thread can stop a
/// search that is running elsewhere.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
	cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn reset(&self) {
		self.cancelled.store(false, Ordering::Relaxed);
	}

	pub fn cancel(&self) {
		self.cancelled.store(true, Ordering::Relaxed);
	}

	pub fn is_cancelled(&self) -> bool {
		self.cancelled.load(Ordering::Relaxed)
	}
}
