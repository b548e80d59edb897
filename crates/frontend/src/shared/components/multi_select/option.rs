use std::collections::HashSet;

/// Canonical option shown by the multi-select
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    pub id: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Selects the id and label fields of an arbitrary record type.
///
/// # Example
/// ```ignore
/// let keys = OptionKeys::new(|p: &Product| p.id.clone(), |p: &Product| p.name.clone());
/// let options = keys.normalize(&products);
/// ```
pub struct OptionKeys<T> {
    id: fn(&T) -> String,
    label: fn(&T) -> String,
}

impl<T> Clone for OptionKeys<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OptionKeys<T> {}

impl<T> OptionKeys<T> {
    pub const fn new(id: fn(&T) -> String, label: fn(&T) -> String) -> Self {
        Self { id, label }
    }

    pub fn option(&self, record: &T) -> SelectOption {
        SelectOption {
            id: (self.id)(record),
            label: (self.label)(record),
        }
    }

    /// Maps records to options in source order. Duplicate ids keep the first
    /// occurrence so ids stay unique within one option set.
    pub fn normalize(&self, records: &[T]) -> Vec<SelectOption> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut options = Vec::with_capacity(records.len());
        for record in records {
            let option = self.option(record);
            if seen.insert(option.id.clone()) {
                options.push(option);
            } else {
                log::warn!("duplicate option id '{}' dropped", option.id);
            }
        }
        options
    }
}
