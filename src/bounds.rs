/// Inclusive iteration bounds. Either side may be absent, meaning unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterBounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> IterBounds<T> {
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub fn with_min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl<T: Ord> IterBounds<T> {
    /// Whether `value` falls inside `[min, max]`.
    pub fn contains(&self, value: &T) -> bool {
        self.min.as_ref().is_none_or(|min| value >= min)
            && self.max.as_ref().is_none_or(|max| value <= max)
    }
}

impl<T> Default for IterBounds<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}
