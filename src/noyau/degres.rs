// src/noyau/degres.rs
//
// Degrés -> radians pour SIN/COS/TAN
// ----------------------------------
// Deux formes du même contrat :
// - convertit_degres : réécriture d’arbre (pipeline d’évaluation)
// - insere_conversion_degres : réécriture texte F(ARG) -> F((ARG)*K) (démarche)
//
// SQRT n’est jamais touchée (pas d’interprétation angulaire).

use std::f64::consts::PI;

use super::expr::{Expr, Id, Noeud};
use super::parentheses::parenthese_fermante;

/// K = π/180.
pub const DEG_EN_RAD: f64 = PI / 180.0;

/// Préfixes canoniques des fonctions angulaires.
pub const PREFIXES_ANGULAIRES: [&str; 3] = ["SIN(", "COS(", "TAN("];

/// Multiplie par K l’argument de chaque appel angulaire, imbrications comprises.
///
/// Un seul passage dans l’ordre postfixe : `nouveau[i]` est l’indice, dans le
/// nouvel arbre, de l’ancien noeud `i`.
pub fn convertit_degres(e: &Expr) -> Expr {
    use Noeud::*;

    let mut out = Expr::default();
    let mut nouveau: Vec<Id> = Vec::with_capacity(e.noeuds().len());

    for n in e.noeuds() {
        let id = match *n {
            Appel(f, x) if f.est_angulaire() => {
                let k = out.ajoute(Num(DEG_EN_RAD));
                let arg = out.ajoute(Mul(nouveau[x], k));
                out.ajoute(Appel(f, arg))
            }
            Appel(f, x) => out.ajoute(Appel(f, nouveau[x])),

            Neg(a) => out.ajoute(Neg(nouveau[a])),
            Add(a, b) => out.ajoute(Add(nouveau[a], nouveau[b])),
            Sub(a, b) => out.ajoute(Sub(nouveau[a], nouveau[b])),
            Mul(a, b) => out.ajoute(Mul(nouveau[a], nouveau[b])),
            Div(a, b) => out.ajoute(Div(nouveau[a], nouveau[b])),
            Pow(a, b) => out.ajoute(Pow(nouveau[a], nouveau[b])),

            Num(x) => out.ajoute(Num(x)),
        };
        nouveau.push(id);
    }

    out
}

/// Réécrit chaque `prefixe(ARG)` en `prefixe((ARG)*K)`.
///
/// `prefixe` inclut sa parenthèse ouvrante (ex: "SIN("). Le texte hors des
/// appels est recopié tel quel, dans l’ordre. Si une occurrence n’a pas de
/// parenthèse fermante, le reste est recopié sans changement et le parcours
/// s’arrête : l’évaluation signalera l’expression mal formée.
pub fn insere_conversion_degres(src: &str, prefixe: &str) -> String {
    let mut out = String::with_capacity(src.len() + 32);
    let mut i = 0;

    if prefixe.is_empty() {
        return src.to_string();
    }

    while i < src.len() {
        let Some(rel) = src[i..].find(prefixe) else {
            out.push_str(&src[i..]);
            break;
        };
        let idx = i + rel;
        let ouvrante = idx + prefixe.len() - 1;

        let Some(fermante) = parenthese_fermante(src, ouvrante) else {
            out.push_str(&src[i..]);
            break;
        };

        // l’ouvrante trouvée peut être après le préfixe si celui-ci ne finit pas par '('
        let debut_arg = src[ouvrante..]
            .find('(')
            .map(|k| ouvrante + k + 1)
            .unwrap_or(fermante);

        let arg = insere_conversion_degres(&src[debut_arg..fermante], prefixe);

        out.push_str(&src[i..debut_arg]);
        out.push('(');
        out.push_str(&arg);
        out.push_str(&format!(")*{DEG_EN_RAD}"));
        out.push(')');

        i = fermante + 1;
    }

    out
}

/// Applique la réécriture texte une fois par fonction angulaire.
pub fn forme_texte_convertie(normalisee: &str) -> String {
    PREFIXES_ANGULAIRES
        .iter()
        .fold(normalisee.to_string(), |s, p| insere_conversion_degres(&s, p))
}
