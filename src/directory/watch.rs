/// Explicit refetch trigger keyed on the current query.
///
/// The host observes its query key (filters, page) whenever it may have
/// changed; `observe` answers whether the listing must be fetched again.
/// The first observation always asks for a fetch.
#[derive(Debug, Clone, Default)]
pub struct QueryWatch<K> {
    last: Option<K>,
}

impl<K: PartialEq + Clone> QueryWatch<K> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Records `key` and returns `true` when it differs from the previous one.
    pub fn observe(&mut self, key: &K) -> bool {
        if self.last.as_ref() == Some(key) {
            return false;
        }
        self.last = Some(key.clone());
        true
    }

    pub fn current(&self) -> Option<&K> {
        self.last.as_ref()
    }

    /// Forces the next observation to trigger, e.g. after a give was created.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
