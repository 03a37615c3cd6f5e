//! Form state management and form structs

mod boss;
mod field;
mod item;

pub use boss::{BossCategory, BossForm};
pub use field::{FieldValue, FormField};
pub use item::{ItemCategory, ItemForm};

use serde_yaml_ng::{Mapping, Value};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;

    /// Full nested snapshot of the form, ready for the generator.
    /// Includes every field the form owns, populated or not; the
    /// generator's pruning pass decides what survives.
    fn snapshot(&self) -> Value;
}

/// Collect a field slice into a YAML mapping keyed by field name
pub(crate) fn mapping_of(fields: &[FormField]) -> Mapping {
    let mut map = Mapping::new();
    for field in fields {
        map.insert(Value::String(field.name.clone()), field.to_yaml());
    }
    map
}
