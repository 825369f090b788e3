// registry.rs: Ordered option definitions with linear lookup.
//
// Insertion order is kept: it is the help display order and the order in
// which positional-bind indices are validated.

use crate::option::OptionDef;

#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    options: Vec<OptionDef>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append without validation; callers check first.
    pub fn push(&mut self, def: OptionDef) {
        self.options.push(def);
    }

    pub fn find_short(&self, c: char) -> Option<&OptionDef> {
        self.options.iter().find(|o| o.short == Some(c))
    }

    pub fn find_long(&self, name: &str) -> Option<&OptionDef> {
        self.options.iter().find(|o| o.long == name)
    }

    pub fn contains_long(&self, name: &str) -> bool {
        self.find_long(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionDef> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<'a> IntoIterator for &'a OptionRegistry {
    type Item = &'a OptionDef;
    type IntoIter = std::slice::Iter<'a, OptionDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
