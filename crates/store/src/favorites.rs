use serde::{Deserialize, Serialize};

/// Saved recipe ids, in the order they were added.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct Favorites(Vec<u64>);

impl Favorites {
    pub fn contains(&self, id: u64) -> bool {
        self.0.contains(&id)
    }

    /// Add `id` when absent, remove it when present. Returns whether the id
    /// is a favorite afterwards.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.0.iter().position(|fav| *fav == id) {
            Some(pos) => {
                self.0.remove(pos);
                false
            }
            None => {
                self.0.push(id);
                true
            }
        }
    }

    pub fn ids(&self) -> &[u64] {
        &self.0
    }

    pub fn first(&self, n: usize) -> &[u64] {
        &self.0[..self.0.len().min(n)]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<u64> for Favorites {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        let mut favorites = Self::default();
        for id in iter {
            if !favorites.contains(id) {
                favorites.0.push(id);
            }
        }

        favorites
    }
}
