//! Bounded excerpts of malformed input.
//!
//! A decode failure quotes up to `radius` characters on each side of the faulting
//! position. The radius comes either from the [`Decoder`](crate::Decoder) that failed or,
//! when it carries none, from the process-wide value managed here. The global is read
//! when the error is built, not when decoding starts.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, warn};

use crate::error::{HexError, Result};

pub const DEFAULT_CONTEXT_RADIUS: usize = 10;

static CONTEXT_RADIUS: AtomicUsize = AtomicUsize::new(DEFAULT_CONTEXT_RADIUS);

/// Current process-wide contextual radius.
#[must_use]
pub fn context_radius() -> usize {
    CONTEXT_RADIUS.load(Ordering::Relaxed)
}

/// Set the process-wide contextual radius used by decoders without their own.
///
/// # Errors
///
/// Returns [`HexError::NegativeRadius`] and keeps the previous radius if `radius < 0`.
pub fn set_context_radius(radius: isize) -> Result<()> {
    let Ok(radius) = usize::try_from(radius) else {
        warn!("rejected negative contextual radius {radius}");
        return Err(HexError::NegativeRadius(radius));
    };
    CONTEXT_RADIUS.store(radius, Ordering::Relaxed);
    debug!("contextual radius set to {radius}");
    Ok(())
}

/// Build the error for a fault at character `position` of `input`.
///
/// `position` may equal the character count when the fault is a missing character.
/// The window is cut on character boundaries.
pub(crate) fn malformed(input: &str, position: usize, radius: Option<usize>) -> HexError {
    let radius = radius.unwrap_or_else(context_radius);
    let start = position.saturating_sub(radius);
    let end = position.saturating_add(radius).saturating_add(1);
    let excerpt: String = input.chars().skip(start).take(end - start).collect();
    debug!("malformed hex input at {position} (radius {radius})");
    HexError::Malformed {
        position,
        index: position - start,
        excerpt,
    }
}
