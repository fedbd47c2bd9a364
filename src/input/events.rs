//! Generic pointer event types for host-independent input handling.

/// Mouse button identification.
///
/// Hosts map their native button codes to these values; only the primary
/// button draws or places stickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button (ignored)
    Right,
    /// Middle mouse button (ignored)
    Middle,
}
