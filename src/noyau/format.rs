// src/noyau/format.rs

/// Nombre maximal de décimales affichées.
pub const DECIMALES_MAX: usize = 10;

/// Texte d’affichage d’un résultat fini.
///
/// - entier mathématique : sans point décimal (jamais de notation exponentielle)
/// - sinon : 10 décimales max, zéros finaux et point final retirés
/// - séparateur toujours '.', pas de "-0"
pub fn formate_resultat(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }

    if x.fract() == 0.0 {
        return format!("{x:.0}");
    }

    let brut = format!("{:.*}", DECIMALES_MAX, x);
    let s = brut.trim_end_matches('0').trim_end_matches('.');

    // -0.00000000001 -> "-0"
    if s == "-0" {
        return "0".to_string();
    }
    s.to_string()
}
