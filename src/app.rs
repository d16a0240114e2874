// src/app.rs
//
// Calculatrice (degrés) — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat, historique, vibration, vue)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier est lu ici une fois par frame (pas de champ texte focalisable).
// - L’historique est écrit dans le stockage eframe juste après chaque ajout,
//   et encore à la fermeture (App::save).

pub mod etat;
pub mod historique;
pub mod vibration;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use std::time::Duration;

use eframe::egui;

use historique::Historique;

impl AppCalc {
    /// Session initiale : historique relu depuis le stockage (vide si absent/corrompu).
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::avec_historique(Historique::charger(cc.storage))
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);

        // "Error" s’efface tout seul : on demande une frame à l’échéance.
        if let Some(reste) = self.tic(maintenant) {
            ctx.request_repaint_after(Duration::from_secs_f64(reste));
        }

        self.clavier(ctx, maintenant);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, maintenant);
        });

        if self.historique_modifie {
            if let Some(stockage) = frame.storage_mut() {
                self.historique.sauver(stockage);
                stockage.flush();
            }
            self.historique_modifie = false;
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.historique.sauver(storage);
    }
}
