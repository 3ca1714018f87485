//! The stacking rule.

/// Check if a ring of `ring_size` may land on a pin whose top ring has
/// `top_size` (`None` for an empty pin).
///
/// An empty pin accepts any ring. Otherwise the ring must be strictly
/// smaller than the top ring; equal sizes are rejected.
///
/// ```
/// use hanoi_rules::rules::placement_allowed;
///
/// assert!(placement_allowed(3, None));
/// assert!(placement_allowed(1, Some(2)));
/// assert!(!placement_allowed(2, Some(2)));
/// assert!(!placement_allowed(3, Some(2)));
/// ```
#[must_use]
pub fn placement_allowed(ring_size: u32, top_size: Option<u32>) -> bool {
    // Sizes are validated > 0 at setup, so 0 can stand for "empty".
    let top_size = top_size.unwrap_or(0);
    ring_size < top_size || top_size == 0
}
