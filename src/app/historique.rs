//! src/app/historique.rs
//!
//! Historique des évaluations (le plus récent en tête, 50 max).
//!
//! Persistance : texte JSON sous une clé fixe, via `eframe::Storage`
//! (localStorage côté web, fichier côté natif).
//! Contrats :
//! - une valeur absente ou corrompue donne un historique vide (jamais d’échec)
//! - un échec d’écriture est journalisé puis ignoré

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Clé de stockage (format v1).
pub const CLE_HISTORIQUE: &str = "calc_history_v1";

/// Nombre maximal d’entrées conservées.
pub const HISTORIQUE_MAX: usize = 50;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("stockage de l’historique illisible : {0}")]
    StorageFailure(#[from] serde_json::Error),
}

/// Une évaluation réussie : texte saisi, résultat affiché, horodatage (ms Unix).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntreeHistorique {
    pub expr: String,
    pub result: String,
    pub time: i64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
}

impl Historique {
    /// Charge depuis le stockage ; absent ou corrompu => vide.
    pub fn charger(stockage: Option<&dyn eframe::Storage>) -> Self {
        let Some(brut) = stockage.and_then(|s| s.get_string(CLE_HISTORIQUE)) else {
            return Self::default();
        };

        match Self::depuis_json(&brut) {
            Ok(h) => {
                log::info!("historique chargé : {} entrée(s)", h.len());
                h
            }
            Err(e) => {
                log::warn!("{e} ; historique remis à zéro");
                Self::default()
            }
        }
    }

    /// Écrit dans le stockage (best effort).
    pub fn sauver(&self, stockage: &mut dyn eframe::Storage) {
        match self.vers_json() {
            Ok(json) => stockage.set_string(CLE_HISTORIQUE, json),
            Err(e) => log::warn!("historique non sauvegardé : {e}"),
        }
    }

    pub fn depuis_json(brut: &str) -> Result<Self, HistoryError> {
        let mut entrees: Vec<EntreeHistorique> = serde_json::from_str(brut)?;
        entrees.truncate(HISTORIQUE_MAX);
        Ok(Self { entrees })
    }

    pub fn vers_json(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string(&self.entrees)?)
    }

    /// Ajoute en tête ; la plus ancienne sort au-delà de HISTORIQUE_MAX.
    pub fn ajouter(&mut self, expr: impl Into<String>, result: impl Into<String>, time: i64) {
        self.entrees.insert(
            0,
            EntreeHistorique {
                expr: expr.into(),
                result: result.into(),
                time,
            },
        );
        self.entrees.truncate(HISTORIQUE_MAX);
    }

    pub fn entrees(&self) -> &[EntreeHistorique] {
        &self.entrees
    }

    pub fn get(&self, index: usize) -> Option<&EntreeHistorique> {
        self.entrees.get(index)
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
