//! IBGE Localities Client
//!
//! States and UF-scoped municipalities, exposed as sorted name lists.

use gloo_net::http::Request;

use crate::models::{IbgeCity, IbgeUf};

const IBGE_BASE: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

/// Fetch all state abbreviations, sorted ascending.
pub async fn fetch_ufs() -> Result<Vec<String>, String> {
    let response = Request::get(&format!("{IBGE_BASE}/estados"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let ufs: Vec<IbgeUf> = response.json().await.map_err(|e| e.to_string())?;
    Ok(uf_initials(ufs))
}

/// Fetch the municipalities of one state, sorted ascending.
pub async fn fetch_cities(uf: &str) -> Result<Vec<String>, String> {
    let response = Request::get(&format!("{IBGE_BASE}/estados/{uf}/municipios"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let cities: Vec<IbgeCity> = response.json().await.map_err(|e| e.to_string())?;
    Ok(city_names(cities))
}

fn uf_initials(ufs: Vec<IbgeUf>) -> Vec<String> {
    let mut initials: Vec<String> = ufs.into_iter().map(|uf| uf.sigla).collect();
    initials.sort();
    initials
}

fn city_names(cities: Vec<IbgeCity>) -> Vec<String> {
    let mut names: Vec<String> = cities.into_iter().map(|city| city.nome).collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uf_initials_are_sorted() {
        let ufs = vec![
            IbgeUf { sigla: "SP".to_string() },
            IbgeUf { sigla: "AC".to_string() },
        ];
        assert_eq!(uf_initials(ufs), vec!["AC", "SP"]);
    }

    #[test]
    fn city_names_are_sorted() {
        let cities = vec![
            IbgeCity { nome: "Santos".to_string() },
            IbgeCity { nome: "Campinas".to_string() },
        ];
        assert_eq!(city_names(cities), vec!["Campinas", "Santos"]);
    }
}
