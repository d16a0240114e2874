// src/noyau/erreur.rs

use thiserror::Error;

/// Échec d’évaluation.
///
/// Côté UI, toutes les variantes se réduisent à l’état d’affichage "Error".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// Parenthèses non équilibrées, opérande vide, suite de jetons invalide.
    #[error("expression mal formée : {0}")]
    MalformedExpression(String),

    /// Syntaxe correcte mais résultat infini ou NaN (ex: 5/0, √-4).
    #[error("résultat non fini : {0}")]
    NonFiniteResult(f64),
}

impl EvaluationError {
    pub(crate) fn mal_formee(msg: impl Into<String>) -> Self {
        EvaluationError::MalformedExpression(msg.into())
    }
}
