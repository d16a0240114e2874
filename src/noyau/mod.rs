//! Noyau d’évaluation (degrés)
//!
//! Organisation interne :
//! - normalise.rs   : glyphes UI -> texte canonique
//! - parentheses.rs : parenthèse fermante correspondante
//! - degres.rs      : degrés -> radians (arbre + texte)
//! - jetons.rs      : tokenisation du texte canonique
//! - rpn.rs         : shunting-yard + construction Expr
//! - expr.rs        : arbre f64 à plat (postfixe), liste blanche de fonctions
//! - eval.rs        : pipeline complet + démarche
//! - format.rs      : texte d’affichage du résultat
//! - saisie.rs      : raccourcis % et x²
//!
//! Aucun état : chaque appel part d’un texte et rend un nombre ou une erreur.

pub mod degres;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod parentheses;
pub mod rpn;
pub mod saisie;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvaluationError;
pub use eval::{demarche, evaluate, Demarche};
pub use format::formate_resultat;
pub use saisie::{applique_carre, applique_pourcentage};
