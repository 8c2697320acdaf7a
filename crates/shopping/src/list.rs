use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Consolidation, DEFAULT_AISLE, ShoppingListItem};

/// Recipe title recorded against items typed in by hand.
pub const MANUAL_ENTRY: &str = "Manual Entry";

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Distinct ingredients found in the source recipes.
    pub consolidated: usize,
    /// Of those, how many were new to the list.
    pub added: usize,
}

#[derive(Debug, PartialEq)]
pub struct AisleGroup<'a> {
    pub aisle: &'a str,
    pub items: Vec<(usize, &'a ShoppingListItem)>,
}

impl ShoppingList {
    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        let key = name.trim().to_lowercase();
        self.items.iter().any(|item| item.key() == key)
    }

    /// Append consolidated items whose name is not already on the list.
    ///
    /// Existing lines are left untouched, including their counts.
    pub fn merge(&mut self, consolidation: Consolidation) -> MergeOutcome {
        let existing: HashSet<String> = self.items.iter().map(ShoppingListItem::key).collect();
        let consolidated = consolidation.len();
        let before = self.items.len();

        self.items.extend(
            consolidation
                .into_items()
                .into_iter()
                .filter(|item| !existing.contains(&item.key())),
        );

        MergeOutcome {
            consolidated,
            added: self.items.len() - before,
        }
    }

    pub fn add_manual(&mut self, text: &str) -> larder_shared::Result<&ShoppingListItem> {
        let text = text.trim();
        if text.is_empty() {
            larder_shared::invalid!("Shopping item cannot be empty");
        }

        self.items.push(ShoppingListItem {
            name: text.to_owned(),
            original: text.to_owned(),
            aisle: DEFAULT_AISLE.to_owned(),
            recipes: vec![MANUAL_ENTRY.to_owned()],
            count: 1,
            checked: false,
        });

        Ok(&self.items[self.items.len() - 1])
    }

    /// Flip the checked state of the item at `index`, returning the new state.
    pub fn toggle(&mut self, index: usize) -> larder_shared::Result<bool> {
        let total = self.items.len();
        let Some(item) = self.items.get_mut(index) else {
            larder_shared::invalid!("No shopping item #{} (list has {total})", index + 1);
        };

        item.checked = !item.checked;

        Ok(item.checked)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items grouped by aisle, aisles in first-seen order. Each item keeps its
    /// position in the list so callers can address it for [`Self::toggle`].
    pub fn by_aisle(&self) -> Vec<AisleGroup<'_>> {
        let mut groups: Vec<AisleGroup<'_>> = Vec::new();

        for (pos, item) in self.items.iter().enumerate() {
            match groups.iter_mut().find(|group| group.aisle == item.aisle) {
                Some(group) => group.items.push((pos, item)),
                None => groups.push(AisleGroup {
                    aisle: &item.aisle,
                    items: vec![(pos, item)],
                }),
            }
        }

        groups
    }

    /// `(checked, total)`
    pub fn progress(&self) -> (usize, usize) {
        let checked = self.items.iter().filter(|item| item.checked).count();

        (checked, self.items.len())
    }
}
