// src/noyau/normalise.rs
//
// Normalisation : glyphes de l’UI -> texte canonique
// --------------------------------------------------
// - × ÷ −  -> * / -
// - π      -> (3.141592653589793)
// - ^      -> **
// - sin( cos( tan( -> SIN( COS( TAN(  (marqueurs “degrés”)
// - sqrt(  -> SQRT(
//
// Une seule passe gauche -> droite. Le texte canonique ne contient aucun
// glyphe d’entrée : normaliser deux fois ne change rien.

use std::f64::consts::PI;

/// Appels reconnus (forme saisie, forme canonique).
const APPELS: [(&str, &str); 4] = [
    ("sin(", "SIN("),
    ("cos(", "COS("),
    ("tan(", "TAN("),
    ("sqrt(", "SQRT("),
];

/// Littéral canonique de π (entre parenthèses : pas de surprise de précédence).
pub fn litteral_pi() -> String {
    format!("({PI})")
}

/// Normalise une expression saisie. Pure, totale.
pub fn normalise(entree: &str) -> String {
    let mut out = String::with_capacity(entree.len() + 16);
    let mut reste = entree;

    'scan: while let Some(c) = reste.chars().next() {
        for (saisie, canon) in APPELS {
            if let Some(suite) = reste.strip_prefix(saisie) {
                out.push_str(canon);
                reste = suite;
                continue 'scan;
            }
        }

        match c {
            '×' => out.push('*'),
            '÷' => out.push('/'),
            '−' => out.push('-'),
            'π' => out.push_str(&litteral_pi()),
            '^' => out.push_str("**"),
            _ => out.push(c),
        }
        reste = &reste[c.len_utf8()..];
    }

    out
}
