// src/noyau/saisie.rs
//
// Raccourcis de construction d’expression (boutons % et x²).
// Travaillent sur le texte SAISI (glyphes UI), pas sur la forme canonique.

/// Vrai si `s` est exactement un nombre de la forme `\d+(\.\d+)?` ou `\.\d+`.
fn est_numeral(s: &str) -> bool {
    let (ent, frac) = match s.split_once('.') {
        Some((e, f)) => (e, Some(f)),
        None => (s, None),
    };
    let chiffres = |t: &str| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit());

    match frac {
        None => chiffres(ent),
        Some(f) => (ent.is_empty() || chiffres(ent)) && chiffres(f),
    }
}

/// Remplace le nombre final `N` par `(N/100)`.
///
/// Seul le DERNIER nombre du texte est visé (pas l’opérande le plus proche
/// d’un opérateur) : "100+50" -> "100+(50/100)". `None` si le texte ne se
/// termine pas par un nombre (ex: "12." ou "sin(").
pub fn applique_pourcentage(texte: &str) -> Option<String> {
    // queue faite de chiffres et de points
    let queue = texte
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
        .last()
        .map(|(k, _)| k)?;

    // le début le plus à gauche qui forme un nombre complet jusqu’à la fin
    let debut = (queue..texte.len()).find(|&k| est_numeral(&texte[k..]))?;

    Some(format!("{}({}/100)", &texte[..debut], &texte[debut..]))
}

/// x² : ajoute la puissance 2 (le normaliseur traduit ^ en **).
pub fn applique_carre(texte: &str) -> String {
    format!("{texte}^2")
}
