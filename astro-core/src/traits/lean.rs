//! Lean source trait

/// Source of chassis lean
///
/// Sign convention: negative when leaning forward (nose down), positive
/// when leaning backward. The zero reference is taken once per operating
/// session; consumers only ever read it.
pub trait LeanSource {
    /// Current lean in degrees
    fn lean(&self) -> f32;
}
