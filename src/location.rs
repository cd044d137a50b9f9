//! Location Acquirer
//!
//! One-shot wrapper over the browser Geolocation API. Not a position
//! stream; each screen asks exactly once at mount.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Why no position was delivered.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    /// The user explicitly refused the permission prompt.
    PermissionDenied,
    /// Geolocation is missing, timed out, or failed for another reason.
    Unavailable(String),
}

impl std::fmt::Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::PermissionDenied => write!(f, "location permission denied"),
            GeoError::Unavailable(msg) => write!(f, "location unavailable: {msg}"),
        }
    }
}

/// Center used by the registration form when no position arrives. The map
/// still renders there and stays clickable, matching the form's behavior
/// before a position resolves in the original application.
pub const FALLBACK_CENTER: (f64, f64) = (0.0, 0.0);

/// What the registration form does when geolocation fails: a center the map
/// can render at regardless, plus a user-facing note on an explicit denial.
pub fn fallback_center(err: &GeoError) -> ((f64, f64), Option<&'static str>) {
    let note = match err {
        GeoError::PermissionDenied => Some(
            "Sem acesso à sua localização. Clique no mapa para escolher o endereço.",
        ),
        GeoError::Unavailable(_) => None,
    };
    (FALLBACK_CENTER, note)
}

/// Request the current position once. Exactly one of the callbacks fires.
pub fn current_position(
    on_ok: impl FnOnce(f64, f64) + 'static,
    on_err: impl FnOnce(GeoError) + 'static,
) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let geolocation = match window.navigator().geolocation() {
        Ok(geo) => geo,
        Err(_) => {
            on_err(GeoError::Unavailable("no geolocation support".to_string()));
            return;
        }
    };

    let success = Closure::once_into_js(move |position: web_sys::Position| {
        let coords = position.coords();
        on_ok(coords.latitude(), coords.longitude());
    });
    let failure = Closure::once_into_js(move |error: web_sys::PositionError| {
        if error.code() == web_sys::PositionError::PERMISSION_DENIED {
            on_err(GeoError::PermissionDenied);
        } else {
            on_err(GeoError::Unavailable(error.message()));
        }
    });

    if let Err(err) = geolocation
        .get_current_position_with_error_callback(success.unchecked_ref(), Some(failure.unchecked_ref()))
    {
        web_sys::console::error_1(&err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denial_still_yields_a_renderable_center_and_a_note() {
        let (center, note) = fallback_center(&GeoError::PermissionDenied);
        assert_eq!(center, FALLBACK_CENTER);
        assert!(note.is_some());
    }

    #[test]
    fn other_failures_fall_back_silently() {
        let err = GeoError::Unavailable("timeout".to_string());
        let (center, note) = fallback_center(&err);
        assert_eq!(center, FALLBACK_CENTER);
        assert_eq!(note, None);
    }
}
