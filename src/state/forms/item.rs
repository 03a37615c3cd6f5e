//! Item configuration form

use super::{mapping_of, Form, FormField};
use crate::generator::INTERNAL_NAME_KEY;
use serde_yaml_ng::{Mapping, Value};

/// Editable category within the item form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemCategory {
    #[default]
    Options,
    Book,
    Attributes,
    Enchantments,
    Potions,
}

impl ItemCategory {
    pub const ALL: &'static [ItemCategory] = &[
        Self::Options,
        Self::Book,
        Self::Attributes,
        Self::Enchantments,
        Self::Potions,
    ];

    pub fn next(&self) -> Self {
        match self {
            Self::Options => Self::Book,
            Self::Book => Self::Attributes,
            Self::Attributes => Self::Enchantments,
            Self::Enchantments => Self::Potions,
            Self::Potions => Self::Options,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Options => Self::Potions,
            Self::Book => Self::Options,
            Self::Attributes => Self::Book,
            Self::Enchantments => Self::Attributes,
            Self::Potions => Self::Enchantments,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Options => "Options",
            Self::Book => "Book",
            Self::Attributes => "Attributes",
            Self::Enchantments => "Enchantments",
            Self::Potions => "Potions",
        }
    }
}

/// Item form state. The Book group nests under `Options.Book` in the
/// snapshot, matching the plugin's item schema.
#[derive(Debug, Clone)]
pub struct ItemForm {
    pub internal_name: FormField,
    pub active_category: ItemCategory,
    pub active_field_index: usize,
    pub options: Vec<FormField>,
    pub book: Vec<FormField>,
    pub attributes: Vec<FormField>,
    pub enchantments: Vec<FormField>,
    pub potions: Vec<FormField>,
}

impl ItemForm {
    pub fn new() -> Self {
        Self {
            internal_name: FormField::text_with_value(
                INTERNAL_NAME_KEY,
                "Internal Item Name (YAML Key)",
                "MyCoolItem",
            ),
            active_category: ItemCategory::Options,
            active_field_index: 0,
            options: vec![
                FormField::text_with_value("Id", "Material Id", "DIAMOND_SWORD"),
                FormField::text_with_value("DisplayName", "Display Name", "'&bCool Sword'"),
                FormField::number("Amount", "Amount"),
                FormField::number("Data", "Data"),
                FormField::number("Damage", "Damage"),
                FormField::lines("Lore", "Lore (one line per row)"),
                FormField::toggle("Unbreakable", "Unbreakable"),
                FormField::number("CustomModelData", "Custom Model Data"),
                FormField::text("EnchantmentGlint", "Enchantment Glint (true/false/AUTO)"),
                FormField::text("Texture", "Texture (base64)"),
                FormField::text("PotionColor", "Potion Color (R,G,B)"),
                FormField::text("Player", "Player (head owner)"),
                FormField::lines("Hide", "Hide Flags (one per line)"),
                FormField::lines("ItemFlags", "Item Flags (one per line)"),
            ],
            book: vec![
                FormField::text("Title", "Book Title"),
                FormField::text("Author", "Book Author"),
                FormField::lines("Pages", "Pages (one per line)"),
            ],
            attributes: vec![FormField::lines("Attributes", "Attributes (one per line)")],
            enchantments: vec![FormField::lines(
                "Enchantments",
                "Enchantments (one per line)",
            )],
            potions: vec![FormField::lines("Potions", "Potion Effects (one per line)")],
        }
    }

    pub fn category_fields(&self) -> &[FormField] {
        match self.active_category {
            ItemCategory::Options => &self.options,
            ItemCategory::Book => &self.book,
            ItemCategory::Attributes => &self.attributes,
            ItemCategory::Enchantments => &self.enchantments,
            ItemCategory::Potions => &self.potions,
        }
    }

    fn category_fields_mut(&mut self) -> &mut [FormField] {
        match self.active_category {
            ItemCategory::Options => &mut self.options,
            ItemCategory::Book => &mut self.book,
            ItemCategory::Attributes => &mut self.attributes,
            ItemCategory::Enchantments => &mut self.enchantments,
            ItemCategory::Potions => &mut self.potions,
        }
    }

    /// Switch category; field focus resets to the internal name
    pub fn set_category(&mut self, category: ItemCategory) {
        self.active_category = category;
        self.active_field_index = 0;
    }

    pub fn next_category(&mut self) {
        self.set_category(self.active_category.next());
    }

    pub fn prev_category(&mut self) {
        self.set_category(self.active_category.prev());
    }
}

impl Default for ItemForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ItemForm {
    fn field_count(&self) -> usize {
        1 + self.category_fields().len()
    }

    fn active_field(&self) -> usize {
        self.active_field_index
    }

    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }

    fn get_active_field_mut(&mut self) -> &mut FormField {
        if self.active_field_index == 0 {
            return &mut self.internal_name;
        }
        let index = (self.active_field_index - 1).min(self.category_fields().len() - 1);
        &mut self.category_fields_mut()[index]
    }

    fn get_field(&self, index: usize) -> Option<&FormField> {
        if index == 0 {
            Some(&self.internal_name)
        } else {
            self.category_fields().get(index - 1)
        }
    }

    fn snapshot(&self) -> Value {
        let mut options = mapping_of(&self.options);
        options.insert(
            Value::String("Book".to_string()),
            Value::Mapping(mapping_of(&self.book)),
        );

        let mut map = Mapping::new();
        map.insert(
            Value::String(INTERNAL_NAME_KEY.to_string()),
            Value::String(self.internal_name.as_text().to_string()),
        );
        map.insert(Value::String("Options".to_string()), Value::Mapping(options));
        map.insert(
            Value::String("Attributes".to_string()),
            self.attributes[0].to_yaml(),
        );
        map.insert(
            Value::String("Enchantments".to_string()),
            self.enchantments[0].to_yaml(),
        );
        map.insert(
            Value::String("Potions".to_string()),
            self.potions[0].to_yaml(),
        );
        Value::Mapping(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_has_defaults() {
        let form = ItemForm::new();
        assert_eq!(form.internal_name.as_text(), "MyCoolItem");
        assert_eq!(form.options[0].as_text(), "DIAMOND_SWORD");
        assert_eq!(form.active_category, ItemCategory::Options);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut form = ItemForm::new();
        form.prev_field();
        assert_eq!(form.active_field_index, form.field_count() - 1);
        form.next_field();
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_category_switch_resets_focus() {
        let mut form = ItemForm::new();
        form.set_active_field(2);
        form.set_category(ItemCategory::Book);
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.get_field(1).unwrap().name, "Title");
    }

    #[test]
    fn test_book_nests_under_options() {
        let mut form = ItemForm::new();
        form.set_category(ItemCategory::Book);
        form.set_active_field(1);
        for c in "Grimoire".chars() {
            form.get_active_field_mut().push_char(c);
        }
        let text = generate("item", &form.snapshot()).unwrap();
        assert!(text.contains("  Options:\n"));
        assert!(text.contains("    Book:\n      Title: Grimoire"));
    }

    #[test]
    fn test_default_form_generates_minimal_document() {
        let form = ItemForm::new();
        let text = generate("item", &form.snapshot()).unwrap();
        assert_eq!(
            text,
            "MyCoolItem:\n  Options:\n    Id: DIAMOND_SWORD\n    DisplayName: '''&bCool Sword'''\n"
        );
    }

    #[test]
    fn test_cleared_name_is_rejected() {
        let mut form = ItemForm::new();
        form.internal_name.clear();
        let err = generate("item", &form.snapshot()).unwrap_err();
        assert!(err.to_string().starts_with("Error:"));
    }

    #[test]
    fn test_empty_list_sections_are_omitted() {
        let form = ItemForm::new();
        let text = generate("item", &form.snapshot()).unwrap();
        assert!(!text.contains("Attributes"));
        assert!(!text.contains("Enchantments"));
        assert!(!text.contains("Potions"));
        assert!(!text.contains("Book"));
    }
}
