// src/noyau/parentheses.rs

/// Index (octets) de la parenthèse fermante qui répond à l’ouvrante en `ouvrante`.
///
/// Si `texte[ouvrante]` n’est pas '(', on part de la prochaine '(' à partir de là.
/// Compteur de profondeur : +1 sur '(', -1 sur ')'. `None` si le texte se termine
/// avant que la profondeur revienne à zéro.
pub fn parenthese_fermante(texte: &str, ouvrante: usize) -> Option<usize> {
    let octets = texte.as_bytes();

    let debut = if octets.get(ouvrante) == Some(&b'(') {
        ouvrante
    } else {
        ouvrante + texte.get(ouvrante..)?.find('(')?
    };

    let mut profondeur: usize = 0;
    for (k, &o) in octets.iter().enumerate().skip(debut) {
        match o {
            b'(' => profondeur += 1,
            b')' => {
                profondeur -= 1;
                if profondeur == 0 {
                    return Some(k);
                }
            }
            _ => {}
        }
    }

    None
}
