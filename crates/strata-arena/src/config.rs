//! Arena configuration parameters.

/// Configuration for a root [`Arena`](crate::Arena).
///
/// All values are read once at construction and are immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Capacity of the root block in bytes.
    ///
    /// Default: 65_536 (64 KiB).
    pub size: usize,

    /// Zero every allocation before handing it out.
    ///
    /// Default: `true`. The block is zeroed once at creation, but bytes
    /// reclaimed from a released temporary region keep whatever the region
    /// wrote into them. With this off, callers see those stale bytes.
    pub zero_on_alloc: bool,
}

impl ArenaConfig {
    /// Default root capacity: 64 KiB.
    pub const DEFAULT_SIZE: usize = 64 * 1024;

    /// Default zeroing policy.
    pub const DEFAULT_ZERO_ON_ALLOC: bool = true;

    /// Create a config for a root block of `size` bytes.
    ///
    /// Uses default values for all other parameters.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            zero_on_alloc: Self::DEFAULT_ZERO_ON_ALLOC,
        }
    }

    /// Builder-style override of [`ArenaConfig::zero_on_alloc`].
    pub fn zero_on_alloc(mut self, zero: bool) -> Self {
        self.zero_on_alloc = zero;
        self
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}
