//! Element Attributes
//!
//! Ordered attribute map. A value of `None` marks a boolean attribute
//! (`checked`, `disabled`) that is present without a value; a missing
//! key means the attribute is absent.

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: Option<String>,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Boolean-style attribute
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn is_flag(&self) -> bool {
        self.value.is_none()
    }
}

/// Attribute collection in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    attrs: Vec<Attr>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Get attribute by name
    pub fn get(&self, name: &str) -> Option<&Attr> {
        self.attrs.iter().find(|a| a.name == name)
    }

    /// Get attribute value; `None` for absent and boolean attributes
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|a| a.value.as_deref())
    }

    /// Check if attribute exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Insert or replace, keeping the original position on replace
    pub fn insert(&mut self, attr: Attr) -> Option<Attr> {
        match self.attrs.iter_mut().find(|a| a.name == attr.name) {
            Some(existing) => Some(std::mem::replace(existing, attr)),
            None => {
                self.attrs.push(attr);
                None
            }
        }
    }

    /// Set attribute by name/value
    pub fn set(&mut self, name: &str, value: &str) {
        self.insert(Attr::new(name, value));
    }

    /// Set boolean attribute
    pub fn set_flag(&mut self, name: &str) {
        self.insert(Attr::flag(name));
    }

    /// Remove attribute by name
    pub fn remove(&mut self, name: &str) -> Option<Attr> {
        let index = self.attrs.iter().position(|a| a.name == name)?;
        Some(self.attrs.remove(index))
    }

    /// Toggle a boolean attribute, returns new state
    pub fn toggle(&mut self, name: &str, force: Option<bool>) -> bool {
        match force.unwrap_or(!self.contains(name)) {
            true => {
                if !self.contains(name) {
                    self.set_flag(name);
                }
                true
            }
            false => {
                self.remove(name);
                false
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attrs.iter()
    }
}
