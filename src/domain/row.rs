// Provider render state and the rows built from it
use serde::Serialize;

/// Current render state of one data item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemState {
    pub display: bool,
    pub icon: String,
    pub field: Option<String>,
    pub value: Option<String>,
}

impl ItemState {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn shown(icon: impl Into<String>, field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display: true,
            icon: icon.into(),
            field: Some(field.into()),
            value: Some(value.into()),
        }
    }

    /// Field spans the value column
    pub fn label_only(icon: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            display: true,
            icon: icon.into(),
            field: Some(field.into()),
            value: None,
        }
    }

    /// Icon spans the whole row
    pub fn icon_only(icon: impl Into<String>) -> Self {
        Self {
            display: true,
            icon: icon.into(),
            field: None,
            value: None,
        }
    }

    pub fn to_row(&self) -> Option<DisplayRow> {
        if !self.display {
            return None;
        }

        let icon = self.icon.clone();
        let row = match (&self.field, &self.value) {
            (None, None) => DisplayRow::Spacer { icon },
            (Some(field), None) => DisplayRow::Wide {
                icon,
                field: field.clone(),
            },
            (field, Some(value)) => DisplayRow::Full {
                icon,
                field: field.clone().unwrap_or_default(),
                value: value.clone(),
            },
        };
        Some(row)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayRow {
    Spacer { icon: String },
    Wide { icon: String, field: String },
    Full { icon: String, field: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_state_has_no_row() {
        let mut state = ItemState::shown("i", "Speed", "10 mph");
        state.display = false;
        assert_eq!(state.to_row(), None);
    }

    #[test]
    fn test_row_shapes() {
        assert_eq!(
            ItemState::icon_only("<img>").to_row(),
            Some(DisplayRow::Spacer { icon: "<img>".into() })
        );
        assert_eq!(
            ItemState::label_only("i", "Locked").to_row(),
            Some(DisplayRow::Wide {
                icon: "i".into(),
                field: "Locked".into()
            })
        );
        assert_eq!(
            ItemState::shown("i", "Speed", "10 mph").to_row(),
            Some(DisplayRow::Full {
                icon: "i".into(),
                field: "Speed".into(),
                value: "10 mph".into()
            })
        );
    }

    #[test]
    fn test_row_serializes_with_kind_tag() {
        let row = DisplayRow::Wide {
            icon: "i".into(),
            field: "Locked".into(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["kind"], "wide");
        assert_eq!(json["field"], "Locked");
    }
}
