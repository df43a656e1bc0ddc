/// Selectable item collections
///
/// Subjects and question types are structurally identical: a named entry
/// that can be toggled on or off. One collection type serves both, tagged
/// with the collection it belongs to.
use crate::error::{CatalogError, WizardError};

/// Which collection an item or operation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Subjects,
    QuestionTypes,
}

impl CollectionKind {
    /// Singular noun used in messages ("subject", "question type")
    pub fn noun(&self) -> &'static str {
        match self {
            CollectionKind::Subjects => "subject",
            CollectionKind::QuestionTypes => "question type",
        }
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.noun())
    }
}

/// A single toggleable entry
#[derive(Debug, Clone)]
pub struct SelectableItem {
    id: String,
    label: String,
    description: Option<String>,
    selected: bool,
}

impl SelectableItem {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description,
            selected: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// Ordered collection of selectable items
///
/// Insertion order is the canonical display order. Ids are unique within
/// the collection; construction rejects duplicates.
#[derive(Debug, Clone)]
pub struct ItemCollection {
    kind: CollectionKind,
    items: Vec<SelectableItem>,
}

impl ItemCollection {
    /// Create a collection, validating id uniqueness
    pub fn new(kind: CollectionKind, items: Vec<SelectableItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::EmptyCollection {
                collection: kind.noun().to_string(),
            });
        }

        for (index, item) in items.iter().enumerate() {
            if items[..index].iter().any(|other| other.id == item.id) {
                return Err(CatalogError::DuplicateId {
                    collection: kind.noun().to_string(),
                    id: item.id.clone(),
                });
            }
        }

        Ok(Self { kind, items })
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    /// All items in canonical order
    pub fn items(&self) -> &[SelectableItem] {
        &self.items
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&SelectableItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Flip the selected flag on the item with the given id.
    ///
    /// Returns the new selected state. An unknown id leaves the collection
    /// unchanged and reports `ItemNotFound`; callers treat this as a
    /// warning, never a fatal failure.
    pub fn toggle(&mut self, id: &str) -> Result<bool, WizardError> {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.selected = !item.selected;
                Ok(item.selected)
            }
            None => Err(WizardError::ItemNotFound {
                collection: self.kind.noun().to_string(),
                id: id.to_string(),
            }),
        }
    }

    /// Selected items in canonical order
    pub fn selected(&self) -> impl Iterator<Item = &SelectableItem> {
        self.items.iter().filter(|item| item.selected)
    }

    /// Labels of selected items in canonical order
    pub fn selected_labels(&self) -> Vec<String> {
        self.selected().map(|item| item.label.clone()).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    pub fn any_selected(&self) -> bool {
        self.items.iter().any(|item| item.selected)
    }

    /// Deselect every item
    pub fn clear_selection(&mut self) {
        for item in &mut self.items {
            item.selected = false;
        }
    }
}
