//! Selection State
//!
//! Per-screen user choices: the multi-select item id set and the
//! registration form fields.

use reactive_stores::Store;

/// Toggle membership of `id` in the selected set.
///
/// Present -> removed, absent -> added; toggling twice is a no-op.
pub fn toggle(selected: &mut Vec<i64>, id: i64) {
    if let Some(pos) = selected.iter().position(|&item| item == id) {
        selected.remove(pos);
    } else {
        selected.push(id);
    }
}

/// Whether `id` is currently selected.
pub fn is_selected(selected: &[i64], id: i64) -> bool {
    selected.contains(&id)
}

/// Free-text fields of the registration form.
///
/// `number` stays a string until submission; the input element already
/// restricts it to digits.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct PointForm {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub address: String,
    pub number: String,
    pub zipcode: String,
}

impl PointForm {
    /// Replace exactly one named field, leaving the others untouched.
    /// Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = value,
            "email" => self.email = value,
            "whatsapp" => self.whatsapp = value,
            "address" => self.address = value,
            "number" => self.number = value,
            "zipcode" => self.zipcode = value,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selected = vec![2];
        toggle(&mut selected, 5);
        assert_eq!(selected, vec![2, 5]);
        toggle(&mut selected, 2);
        assert_eq!(selected, vec![5]);
    }

    #[test]
    fn double_toggle_is_identity() {
        let mut selected = vec![1, 4];
        toggle(&mut selected, 7);
        toggle(&mut selected, 7);
        assert_eq!(selected, vec![1, 4]);
    }

    #[test]
    fn membership_matches_catalog_marking() {
        let selected = vec![2, 5];
        assert!(is_selected(&selected, 2));
        assert!(is_selected(&selected, 5));
        assert!(!is_selected(&selected, 7));
    }

    #[test]
    fn set_field_touches_only_the_named_field() {
        let mut form = PointForm {
            name: "Eco".to_string(),
            email: "a@b.c".to_string(),
            ..Default::default()
        };
        form.set_field("whatsapp", "119".to_string());
        assert_eq!(form.whatsapp, "119");
        assert_eq!(form.name, "Eco");
        assert_eq!(form.email, "a@b.c");
        assert_eq!(form.address, "");
    }

    #[test]
    fn set_field_ignores_unknown_names() {
        let mut form = PointForm::default();
        form.set_field("latitude", "12".to_string());
        assert_eq!(form, PointForm::default());
    }
}
