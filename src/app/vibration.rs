// src/app/vibration.rs
//
// Retour haptique : best effort, sans retour d’erreur.

/// Durée d’une vibration courte (ms).
pub const VIBRATION_MS: u32 = 12;

/// Web : navigator.vibrate(12). Le résultat est ignoré (API absente = rien).
#[cfg(target_arch = "wasm32")]
pub fn vibre_court() {
    if let Some(w) = web_sys::window() {
        let _ = w.navigator().vibrate_with_duration(VIBRATION_MS);
    }
}

/// Natif : pas de vibreur.
#[cfg(not(target_arch = "wasm32"))]
pub fn vibre_court() {
    log::trace!("vibration {VIBRATION_MS} ms ignorée (natif)");
}
