//! Boss configuration form

use super::{mapping_of, Form, FormField};
use crate::generator::INTERNAL_NAME_KEY;
use serde_yaml_ng::{Mapping, Value};

/// Editable category within the boss form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BossCategory {
    #[default]
    Options,
    Display,
    Equipment,
    BossBar,
    Ai,
    KillMessages,
    Immunity,
    Disguise,
}

impl BossCategory {
    pub const ALL: &'static [BossCategory] = &[
        Self::Options,
        Self::Display,
        Self::Equipment,
        Self::BossBar,
        Self::Ai,
        Self::KillMessages,
        Self::Immunity,
        Self::Disguise,
    ];

    pub fn next(&self) -> Self {
        match self {
            Self::Options => Self::Display,
            Self::Display => Self::Equipment,
            Self::Equipment => Self::BossBar,
            Self::BossBar => Self::Ai,
            Self::Ai => Self::KillMessages,
            Self::KillMessages => Self::Immunity,
            Self::Immunity => Self::Disguise,
            Self::Disguise => Self::Options,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Options => Self::Disguise,
            Self::Display => Self::Options,
            Self::Equipment => Self::Display,
            Self::BossBar => Self::Equipment,
            Self::Ai => Self::BossBar,
            Self::KillMessages => Self::Ai,
            Self::Immunity => Self::KillMessages,
            Self::Disguise => Self::Immunity,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Options => "Options",
            Self::Display => "Display",
            Self::Equipment => "Equipment",
            Self::BossBar => "BossBar",
            Self::Ai => "Custom AI",
            Self::KillMessages => "Kill Messages",
            Self::Immunity => "Immunity",
            Self::Disguise => "Disguise",
        }
    }
}

/// Boss form state: internal name plus one field group per category
#[derive(Debug, Clone)]
pub struct BossForm {
    pub internal_name: FormField,
    pub active_category: BossCategory,
    pub active_field_index: usize,
    pub options: Vec<FormField>,
    pub display: Vec<FormField>,
    pub equipment: Vec<FormField>,
    pub boss_bar: Vec<FormField>,
    pub ai: Vec<FormField>,
    pub kill_messages: Vec<FormField>,
    pub immunity: Vec<FormField>,
    pub disguise: Vec<FormField>,
}

impl BossForm {
    pub fn new() -> Self {
        Self {
            internal_name: FormField::text_with_value(
                INTERNAL_NAME_KEY,
                "Internal Mob Name (YAML Key)",
                "MyCoolBoss",
            ),
            active_category: BossCategory::Options,
            active_field_index: 0,
            options: vec![
                FormField::text_with_value("Type", "Mob Type", "ZOMBIE"),
                FormField::text("Display", "Display Name"),
                FormField::number_with_value("Health", "Health", 100),
                FormField::number("Damage", "Damage"),
                FormField::number("Armor", "Armor"),
                FormField::number("FollowRange", "Follow Range"),
                FormField::number("KnockbackResistance", "Knockback Resistance (0-1)"),
                FormField::number("MovementSpeed", "Movement Speed (0-1)"),
                FormField::number("AttackSpeed", "Attack Speed"),
                FormField::text("Despawn", "Despawn (true/false/persistent)"),
                FormField::text("Faction", "Faction"),
                FormField::toggle("NoAI", "No AI"),
                FormField::toggle("Glowing", "Glowing"),
                FormField::toggle("Silent", "Silent"),
                FormField::toggle("Persistent", "Persistent"),
                FormField::toggle("PreventOtherDrops", "Prevent Other Drops"),
            ],
            display: vec![
                FormField::toggle("NameVisible", "Name Visible"),
                FormField::toggle("HealthVisible", "Health Visible"),
                FormField::toggle("Glowing", "Glowing"),
                FormField::toggle("Invisible", "Invisible"),
                FormField::text("Model", "Model"),
                FormField::toggle("ShowPitch", "Show Pitch"),
            ],
            equipment: vec![FormField::lines("Equipment", "Equipment (one per line)")],
            boss_bar: vec![
                FormField::toggle("Enabled", "Enabled"),
                FormField::text("Title", "Title"),
                FormField::number("Range", "Range"),
                FormField::text("Color", "Color (PINK/BLUE/RED/...)"),
                FormField::text("Style", "Style (SOLID/SEGMENTED_6/...)"),
                FormField::toggle("CreateFog", "Create Fog"),
                FormField::toggle("DarkenSky", "Darken Sky"),
                FormField::toggle("PlayMusic", "Play Music"),
            ],
            ai: vec![
                FormField::lines("AIGoalSelectors", "AI Goal Selectors (one per line)"),
                FormField::lines("AITargetSelectors", "AI Target Selectors (one per line)"),
            ],
            kill_messages: vec![FormField::lines("KillMessages", "Kill Messages (one per line)")],
            immunity: vec![FormField::lines(
                "ImmunityTables",
                "Immunity Tables (one per line)",
            )],
            disguise: vec![
                FormField::text("Type", "Disguise Type"),
                FormField::text("Skin", "Skin"),
                FormField::toggle("Burning", "Burning"),
                FormField::toggle("Invisible", "Invisible"),
                FormField::toggle("ShowName", "Show Name"),
                FormField::number("SlimeSize", "Slime Size"),
            ],
        }
    }

    pub fn category_fields(&self) -> &[FormField] {
        match self.active_category {
            BossCategory::Options => &self.options,
            BossCategory::Display => &self.display,
            BossCategory::Equipment => &self.equipment,
            BossCategory::BossBar => &self.boss_bar,
            BossCategory::Ai => &self.ai,
            BossCategory::KillMessages => &self.kill_messages,
            BossCategory::Immunity => &self.immunity,
            BossCategory::Disguise => &self.disguise,
        }
    }

    fn category_fields_mut(&mut self) -> &mut [FormField] {
        match self.active_category {
            BossCategory::Options => &mut self.options,
            BossCategory::Display => &mut self.display,
            BossCategory::Equipment => &mut self.equipment,
            BossCategory::BossBar => &mut self.boss_bar,
            BossCategory::Ai => &mut self.ai,
            BossCategory::KillMessages => &mut self.kill_messages,
            BossCategory::Immunity => &mut self.immunity,
            BossCategory::Disguise => &mut self.disguise,
        }
    }

    /// Switch category; field focus resets to the internal name
    pub fn set_category(&mut self, category: BossCategory) {
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

impl Default for BossForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for BossForm {
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
        let mut map = Mapping::new();
        map.insert(
            Value::String(INTERNAL_NAME_KEY.to_string()),
            Value::String(self.internal_name.as_text().to_string()),
        );
        map.insert(
            Value::String("Options".to_string()),
            Value::Mapping(mapping_of(&self.options)),
        );
        map.insert(
            Value::String("DisplayOptions".to_string()),
            Value::Mapping(mapping_of(&self.display)),
        );
        map.insert(
            Value::String("Equipment".to_string()),
            self.equipment[0].to_yaml(),
        );
        map.insert(
            Value::String("BossBar".to_string()),
            Value::Mapping(mapping_of(&self.boss_bar)),
        );
        map.insert(
            Value::String("AIGoalSelectors".to_string()),
            self.ai[0].to_yaml(),
        );
        map.insert(
            Value::String("AITargetSelectors".to_string()),
            self.ai[1].to_yaml(),
        );
        map.insert(
            Value::String("KillMessages".to_string()),
            self.kill_messages[0].to_yaml(),
        );
        map.insert(
            Value::String("ImmunityTables".to_string()),
            self.immunity[0].to_yaml(),
        );
        map.insert(
            Value::String("Disguise".to_string()),
            Value::Mapping(mapping_of(&self.disguise)),
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
        let form = BossForm::new();
        assert_eq!(form.internal_name.as_text(), "MyCoolBoss");
        assert_eq!(form.active_category, BossCategory::Options);
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.options[0].as_text(), "ZOMBIE");
        assert_eq!(form.options[2].as_text(), "100");
    }

    #[test]
    fn test_field_zero_is_internal_name() {
        let form = BossForm::new();
        assert_eq!(form.get_field(0).unwrap().name, INTERNAL_NAME_KEY);
        assert_eq!(form.get_field(1).unwrap().name, "Type");
    }

    #[test]
    fn test_next_field_wraps() {
        let mut form = BossForm::new();
        let count = form.field_count();
        for _ in 0..count {
            form.next_field();
        }
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_prev_field_wraps_to_last() {
        let mut form = BossForm::new();
        form.prev_field();
        assert_eq!(form.active_field_index, form.field_count() - 1);
    }

    #[test]
    fn test_category_switch_resets_focus() {
        let mut form = BossForm::new();
        form.set_active_field(3);
        form.next_category();
        assert_eq!(form.active_category, BossCategory::Display);
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_category_cycle_is_complete() {
        let mut category = BossCategory::Options;
        for _ in 0..BossCategory::ALL.len() {
            category = category.next();
        }
        assert_eq!(category, BossCategory::Options);
    }

    #[test]
    fn test_snapshot_contains_all_sections() {
        let snapshot = BossForm::new().snapshot();
        let map = snapshot.as_mapping().unwrap();
        for key in [
            INTERNAL_NAME_KEY,
            "Options",
            "DisplayOptions",
            "Equipment",
            "BossBar",
            "AIGoalSelectors",
            "AITargetSelectors",
            "KillMessages",
            "ImmunityTables",
            "Disguise",
        ] {
            assert!(map.contains_key(key), "missing section {key}");
        }
    }

    #[test]
    fn test_default_form_generates_minimal_document() {
        // Only the pre-populated Type and Health survive pruning.
        let form = BossForm::new();
        let text = generate("boss", &form.snapshot()).unwrap();
        assert_eq!(
            text,
            "MyCoolBoss:\n  Options:\n    Type: ZOMBIE\n    Health: 100\n"
        );
    }

    #[test]
    fn test_toggle_and_list_fields_reach_the_output() {
        let mut form = BossForm::new();
        // NoAI is options[11]; set it explicitly to false
        form.options[11].cycle_toggle();
        form.options[11].cycle_toggle();
        for c in "message one".chars() {
            form.kill_messages[0].push_char(c);
        }
        let text = generate("boss", &form.snapshot()).unwrap();
        assert!(text.contains("NoAI: false"));
        assert!(text.contains("KillMessages:\n  - message one"));
    }
}
