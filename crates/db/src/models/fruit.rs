//! Fruit model and DTOs.

use fruitstand_core::checkbox::CheckboxFlag;
use fruitstand_core::seed::SeedFruit;
use fruitstand_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationErrors};

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `fruits` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fruit {
    pub id: RecordId,
    pub name: String,
    pub color: String,
    pub ready_to_eat: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request body for creating a fruit.
///
/// `readyToEat` arrives as a checkbox value and is coerced: only `"on"`
/// becomes `true`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFruit {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub color: Option<String>,
    #[serde(default)]
    pub ready_to_eat: CheckboxFlag,
}

impl CreateFruit {
    /// Validate the request and turn it into an insertable record.
    pub fn into_new_fruit(self) -> Result<NewFruit, ValidationErrors> {
        self.validate()?;
        Ok(NewFruit {
            name: self.name.unwrap_or_default(),
            color: self.color.unwrap_or_default(),
            ready_to_eat: self.ready_to_eat.into(),
        })
    }
}

/// A fully typed record ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewFruit {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub color: String,
    pub ready_to_eat: bool,
}

impl From<SeedFruit> for NewFruit {
    fn from(seed: SeedFruit) -> Self {
        Self {
            name: seed.name.to_string(),
            color: seed.color.to_string(),
            ready_to_eat: seed.ready_to_eat,
        }
    }
}

/// Partial update. Absent fields are left untouched.
///
/// `readyToEat` must be a real boolean here; the checkbox coercion only
/// applies on create.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFruit {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub color: Option<String>,
    pub ready_to_eat: Option<bool>,
}

impl UpdateFruit {
    /// Overwrite the provided fields on `fruit`.
    pub fn apply_to(&self, fruit: &mut Fruit) {
        if let Some(name) = &self.name {
            fruit.name = name.clone();
        }
        if let Some(color) = &self.color {
            fruit.color = color.clone();
        }
        if let Some(ready_to_eat) = self.ready_to_eat {
            fruit.ready_to_eat = ready_to_eat;
        }
    }
}

#[cfg(test)]
mod tests {
    use fruitstand_core::seed::SEED_FRUITS;
    use serde_json::json;

    use super::*;

    #[test]
    fn create_coerces_checkbox() {
        let input: CreateFruit = serde_json::from_value(json!({
            "name": "kiwi",
            "color": "green",
            "readyToEat": "on",
        }))
        .unwrap();

        let fruit = input.into_new_fruit().unwrap();
        assert_eq!(
            fruit,
            NewFruit {
                name: "kiwi".into(),
                color: "green".into(),
                ready_to_eat: true,
            }
        );
    }

    #[test]
    fn create_without_flag_is_not_ready() {
        let input: CreateFruit =
            serde_json::from_value(json!({ "name": "kiwi", "color": "green" })).unwrap();

        assert!(!input.into_new_fruit().unwrap().ready_to_eat);
    }

    #[test]
    fn create_requires_name_and_color() {
        let input: CreateFruit = serde_json::from_value(json!({ "readyToEat": "on" })).unwrap();

        let errors = input.into_new_fruit().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("color"));
    }

    #[test]
    fn create_rejects_empty_strings() {
        let input: CreateFruit =
            serde_json::from_value(json!({ "name": "", "color": "green" })).unwrap();

        assert!(input.into_new_fruit().is_err());
    }

    #[test]
    fn update_rejects_string_flag() {
        let result: Result<UpdateFruit, _> = serde_json::from_value(json!({ "readyToEat": "on" }));
        assert!(result.is_err());
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut fruit = Fruit {
            id: fruitstand_core::types::new_record_id(),
            name: "kiwi".into(),
            color: "green".into(),
            ready_to_eat: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        UpdateFruit {
            color: Some("yellow".into()),
            ..Default::default()
        }
        .apply_to(&mut fruit);

        assert_eq!(fruit.name, "kiwi");
        assert_eq!(fruit.color, "yellow");
        assert!(fruit.ready_to_eat);
    }

    #[test]
    fn seed_converts_to_new_fruit() {
        let fruit = NewFruit::from(SEED_FRUITS[1]);
        assert_eq!(fruit.name, "grape");
        assert_eq!(fruit.color, "purple");
        assert!(!fruit.ready_to_eat);
    }

    #[test]
    fn serializes_camel_case() {
        let fruit = Fruit {
            id: fruitstand_core::types::new_record_id(),
            name: "kiwi".into(),
            color: "green".into(),
            ready_to_eat: false,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let value = serde_json::to_value(&fruit).unwrap();
        assert_eq!(value["readyToEat"], false);
        assert!(value["createdAt"].is_string());
        assert_eq!(value["id"], fruit.id.to_string());
    }
}
