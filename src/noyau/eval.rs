//! Noyau — évaluation (pipeline réel)
//!
//! normalise -> jetons -> RPN -> Expr -> conversion degrés (arbre) -> f64 -> fini ?
//!
//! Le texte n’est jamais exécuté : seule la liste blanche de jetons/fonctions
//! produit des noeuds, et l’évaluation ne fait que de l’arithmétique f64.

use super::degres::{convertit_degres, forme_texte_convertie};
use super::erreur::EvaluationError;
use super::expr::Expr;
use super::jetons::{format_tokens, tokenize};
use super::normalise::normalise;
use super::rpn::{from_rpn, to_rpn};

/// Trace lisible des étapes (panneau “Démarche”).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub normalisee: String,
    pub convertie: String,
    pub jetons: String,
    pub rpn: String,
}

/// API publique : texte saisi -> nombre fini.
pub fn evaluate(texte: &str) -> Result<f64, EvaluationError> {
    let normalisee = normalise(texte);
    let expr = compile(&normalisee)?;
    verifie_fini(convertit_degres(&expr).valeur())
}

/// Démarche complète pour un texte saisi. Ne échoue jamais : une étape en
/// erreur affiche son message à la place du résultat.
pub fn demarche(texte: &str) -> Demarche {
    let normalisee = normalise(texte);
    let convertie = forme_texte_convertie(&normalisee);

    let (jetons, rpn) = match tokenize(&normalisee) {
        Ok(t) => {
            let rpn = match to_rpn(&t) {
                Ok(r) => format_tokens(&r),
                Err(e) => e.to_string(),
            };
            (format_tokens(&t), rpn)
        }
        Err(e) => (e.to_string(), String::new()),
    };

    Demarche {
        normalisee,
        convertie,
        jetons,
        rpn,
    }
}

/// Texte canonique -> arbre (sans conversion d’angle).
fn compile(canonique: &str) -> Result<Expr, EvaluationError> {
    let jetons = tokenize(canonique)?;
    let rpn = to_rpn(&jetons)?;
    from_rpn(&rpn)
}

fn verifie_fini(x: f64) -> Result<f64, EvaluationError> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(EvaluationError::NonFiniteResult(x))
    }
}
