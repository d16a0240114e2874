//! src/app/etat.rs
//!
//! État de la session (sans vue).
//!
//! Rôle : contenir l’expression en cours, l’historique et l’état "Error",
//! et offrir les actions des boutons / du clavier sans logique d’affichage.
//!
//! Contrats :
//! - L’évaluation passe par le noyau (fonction pure, aucun état retenu là-bas).
//! - Toute erreur d’évaluation devient l’état "Error", effacé après
//!   DELAI_ERREUR_S ou dès la saisie suivante (jamais par-dessus une saisie neuve).
//! - Le temps est fourni par l’appelant (secondes, horloge egui) : testable.

use crate::noyau::{self, Demarche};

use super::historique::Historique;

/// Durée d’affichage de "Error" (secondes).
pub const DELAI_ERREUR_S: f64 = 1.2;

/// Texte affiché pendant l’état d’erreur.
pub const TEXTE_ERREUR: &str = "Error";

/// Texte affiché quand l’expression est vide.
pub const TEXTE_VIDE: &str = "0";

/// Boutons de la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bouton {
    /// Texte ajouté tel quel (chiffre, point, opérateur, "sin(", "π"…).
    Insere(&'static str),
    Pourcentage,
    Carre,
    Efface,
    Retour,
    Egal,
}

/// Touches du clavier physique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Caractere(char),
    Entree,
    Retour,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- expression visible ---
    pub entree: String,

    // --- "Error" en cours : instant d’apparition (s) ---
    pub erreur_depuis: Option<f64>,

    // --- historique (+ à sauvegarder ?) ---
    pub historique: Historique,
    pub historique_modifie: bool,

    // --- démarche de la dernière évaluation réussie ---
    pub demarche: Option<Demarche>,
}

impl AppCalc {
    pub fn avec_historique(historique: Historique) -> Self {
        Self {
            historique,
            ..Self::default()
        }
    }

    /// Texte pour l’afficheur.
    pub fn texte_affiche(&self) -> &str {
        if self.erreur_depuis.is_some() {
            TEXTE_ERREUR
        } else if self.entree.is_empty() {
            TEXTE_VIDE
        } else {
            &self.entree
        }
    }

    /* ------------------------ Actions ------------------------ */

    /// Bouton pressé.
    pub fn appuie(&mut self, bouton: Bouton, maintenant: f64) {
        match bouton {
            Bouton::Insere(t) => self.insere(t),
            Bouton::Pourcentage => self.pourcentage(),
            Bouton::Carre => self.carre(),
            Bouton::Efface => self.efface_tout(),
            Bouton::Retour => self.efface_dernier(),
            Bouton::Egal => self.evalue(maintenant),
        }
    }

    /// Touche clavier ; false si la touche n’a pas d’effet (pas de vibration).
    pub fn touche(&mut self, touche: Touche, maintenant: f64) -> bool {
        match touche {
            Touche::Entree | Touche::Caractere('=') => self.evalue(maintenant),
            Touche::Retour => self.efface_dernier(),
            Touche::Caractere('*') => self.insere("×"),
            Touche::Caractere('/') => self.insere("÷"),
            Touche::Caractere(c @ ('0'..='9' | '.' | '+' | '-')) => {
                let mut tampon = [0u8; 4];
                self.insere(c.encode_utf8(&mut tampon));
            }
            Touche::Caractere(_) => return false,
        }
        true
    }

    pub fn insere(&mut self, texte: &str) {
        self.quitte_erreur();
        self.entree.push_str(texte);
    }

    /// C : efface l’expression.
    pub fn efface_tout(&mut self) {
        self.quitte_erreur();
        self.entree.clear();
    }

    /// ⌫ : retire le dernier caractère.
    pub fn efface_dernier(&mut self) {
        self.quitte_erreur();
        self.entree.pop();
    }

    /// % : le dernier nombre N devient (N/100) ; sans nombre final, rien.
    pub fn pourcentage(&mut self) {
        self.quitte_erreur();
        if let Some(s) = noyau::applique_pourcentage(&self.entree) {
            self.entree = s;
        }
    }

    /// x² : ajoute ^2.
    pub fn carre(&mut self) {
        self.quitte_erreur();
        self.entree = noyau::applique_carre(&self.entree);
    }

    /// Clic sur une entrée d’historique : son résultat redevient l’expression.
    pub fn rappelle(&mut self, index: usize) {
        if let Some(h) = self.historique.get(index) {
            let resultat = h.result.clone();
            self.quitte_erreur();
            self.entree = resultat;
        }
    }

    /// = : évalue ; succès => historique + résultat affiché, échec => "Error".
    pub fn evalue(&mut self, maintenant: f64) {
        if self.erreur_depuis.is_some() || self.entree.is_empty() {
            return;
        }

        match noyau::evaluate(&self.entree) {
            Ok(v) => {
                let resultat = noyau::formate_resultat(v);
                let horodatage = chrono::Utc::now().timestamp_millis();

                self.demarche = Some(noyau::demarche(&self.entree));
                let expr = std::mem::replace(&mut self.entree, resultat.clone());
                self.historique.ajouter(expr, resultat, horodatage);
                self.historique_modifie = true;
            }
            Err(e) => {
                log::debug!("évaluation de {:?} refusée : {e}", self.entree);
                self.entree.clear();
                self.erreur_depuis = Some(maintenant);
            }
        }
    }

    /// À chaque frame : efface "Error" une fois le délai écoulé.
    /// Retourne le temps restant (pour programmer un réaffichage).
    pub fn tic(&mut self, maintenant: f64) -> Option<f64> {
        let depuis = self.erreur_depuis?;
        let reste = depuis + DELAI_ERREUR_S - maintenant;
        if reste <= 0.0 {
            self.erreur_depuis = None;
            self.entree.clear();
            None
        } else {
            Some(reste)
        }
    }

    fn quitte_erreur(&mut self) {
        self.erreur_depuis = None;
    }
}
