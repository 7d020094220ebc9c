/// Unique identifier for a property in the model arena.
/// Uses u32 for compact storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyId(pub u32);

impl PropertyId {
    /// Create a new PropertyId from an index
    ///
    /// # Panics
    ///
    /// If `index` does not fit in a `u32`; an arena holds at most
    /// `u32::MAX + 1` entries.
    pub fn new(index: usize) -> Self {
        Self(u32::try_from(index).expect("arena index exceeds u32::MAX"))
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Unique identifier for a parse action in the model arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId(pub u32);

impl ActionId {
    /// Create a new ActionId from an index
    ///
    /// # Panics
    ///
    /// If `index` does not fit in a `u32`; an arena holds at most
    /// `u32::MAX + 1` entries.
    pub fn new(index: usize) -> Self {
        Self(u32::try_from(index).expect("arena index exceeds u32::MAX"))
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}", self.0)
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a{}", self.0)
    }
}
