use serde::{Deserialize, Serialize};

/// A video category offered in the category dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name, e.g. `"Music"`.
    pub name: String,
    /// Platform-assigned category ID, e.g. `"10"`.
    pub id: String,
}

/// Ordered name → id mapping of the categories that can be browsed.
///
/// Iteration follows insertion order. Inserting a name that is already
/// present replaces its id in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    entries: Vec<Category>,
}

impl CategoryMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, id: impl Into<String>) {
        let name = name.into();
        let id = id.into();
        match self.entries.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.id = id,
            None => self.entries.push(Category { name, id }),
        }
    }

    /// Looks up a category ID by its exact display name.
    #[must_use]
    pub fn id_for(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Category> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut map = Self::new();
        for category in iter {
            map.insert(category.name, category.id);
        }
        map
    }
}
