/// What a recursive mutation did to the subtree it was handed. The subtree is always handed back,
/// edited or not, so the caller can re-link it and decide whether its own ancestors need
/// rebalancing.
pub(crate) enum Edit<S> {
    /// The key was a duplicate (insert) or absent (erase) so nothing changed.
    Unchanged(S),
    /// The subtree gained or lost exactly one element and has been rebalanced.
    Changed(S),
}

impl<S> Edit<S> {
    /// Applies `f` to the carried subtree, keeping the outcome.
    pub(crate) fn map<R>(self, f: impl FnOnce(S) -> R) -> Edit<R> {
        match self {
            Self::Unchanged(s) => Edit::Unchanged(f(s)),
            Self::Changed(s) => Edit::Changed(f(s)),
        }
    }

    /// Splits into the subtree and whether it was edited.
    pub(crate) fn into_parts(self) -> (S, bool) {
        match self {
            Self::Unchanged(s) => (s, false),
            Self::Changed(s) => (s, true),
        }
    }
}
