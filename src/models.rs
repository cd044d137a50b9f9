//! Frontend Models
//!
//! Data structures matching the points API and the IBGE localities API.

use serde::{Deserialize, Serialize};

/// Placeholder sent until image upload is wired; the API requires the field.
pub const IMAGE_PLACEHOLDER: &str = "fakeimg";

/// Collectable item category (read-only catalog entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub image_url: String,
}

/// Registered collection point (server-owned, rendered as a map marker)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image: String,
}

/// IBGE state entry; only the abbreviation is used
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IbgeUf {
    pub sigla: String,
}

/// IBGE municipality entry; only the name is used
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IbgeCity {
    pub nome: String,
}

/// Creation payload for `POST /points`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPoint {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub city: String,
    pub uf: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image: String,
    pub address: String,
    pub number: i64,
    pub zipcode: String,
    pub items: Vec<i64>,
}

impl NewPoint {
    /// Assemble the payload from the current selection state.
    pub fn from_parts(
        form: &crate::selection::PointForm,
        uf: &str,
        city: &str,
        coordinate: (f64, f64),
        items: &[i64],
    ) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            whatsapp: form.whatsapp.clone(),
            city: city.to_string(),
            uf: uf.to_string(),
            latitude: coordinate.0,
            longitude: coordinate.1,
            image: IMAGE_PLACEHOLDER.to_string(),
            address: form.address.clone(),
            number: form.number.parse().unwrap_or_default(),
            zipcode: form.zipcode.clone(),
            items: items.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::PointForm;

    fn sample_form() -> PointForm {
        PointForm {
            name: "Eco Mercado".to_string(),
            email: "contato@ecomercado.com".to_string(),
            whatsapp: "11999990000".to_string(),
            address: "Rua Verde".to_string(),
            number: "42".to_string(),
            zipcode: "01000-000".to_string(),
        }
    }

    #[test]
    fn payload_carries_every_field() {
        let payload = NewPoint::from_parts(
            &sample_form(),
            "SP",
            "Campinas",
            (-22.9, -47.06),
            &[2, 5],
        );

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["name"], "Eco Mercado");
        assert_eq!(value["email"], "contato@ecomercado.com");
        assert_eq!(value["whatsapp"], "11999990000");
        assert_eq!(value["city"], "Campinas");
        assert_eq!(value["uf"], "SP");
        assert_eq!(value["latitude"], -22.9);
        assert_eq!(value["longitude"], -47.06);
        assert_eq!(value["image"], IMAGE_PLACEHOLDER);
        assert_eq!(value["address"], "Rua Verde");
        assert_eq!(value["number"], 42);
        assert_eq!(value["zipcode"], "01000-000");
        assert_eq!(value["items"], serde_json::json!([2, 5]));
    }

    #[test]
    fn non_numeric_number_falls_back_to_zero() {
        let mut form = sample_form();
        form.number = "s/n".to_string();
        let payload = NewPoint::from_parts(&form, "SP", "Santos", (0.0, 0.0), &[]);
        assert_eq!(payload.number, 0);
    }
}
