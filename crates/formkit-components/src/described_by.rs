//! `aria-describedby` chains

/// Ordered list of element ids a control is described by
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribedBy {
    ids: Vec<String>,
}

impl DescribedBy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a caller-supplied, space-separated value
    pub fn parse(value: &str) -> Self {
        Self {
            ids: value.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn push(&mut self, id: &str) {
        self.ids.extend(id.split_whitespace().map(str::to_string));
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Space-joined ids, no leading or trailing whitespace
    pub fn value(&self) -> String {
        self.ids.join(" ")
    }

    /// Attribute value, `None` when the chain is empty
    pub fn attr(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.value())
    }
}
