// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Afficheur en lecture seule : toute saisie passe par les boutons ou le clavier
// - Clavier : chiffres . + - * / = Enter Backspace (voir etat::AppCalc::touche)
// - Tactile : gros boutons, vibration courte à chaque appui
// - Historique cliquable (rappelle le résultat)

use eframe::egui;

use super::etat::{AppCalc, Bouton, Touche};
use super::vibration::vibre_court;

/// Pavé principal (4 colonnes).
const PAVE: [[(&str, Bouton); 4]; 6] = [
    [
        ("C", Bouton::Efface),
        ("(", Bouton::Insere("(")),
        (")", Bouton::Insere(")")),
        ("÷", Bouton::Insere("÷")),
    ],
    [
        ("sin", Bouton::Insere("sin(")),
        ("cos", Bouton::Insere("cos(")),
        ("tan", Bouton::Insere("tan(")),
        ("√", Bouton::Insere("sqrt(")),
    ],
    [
        ("7", Bouton::Insere("7")),
        ("8", Bouton::Insere("8")),
        ("9", Bouton::Insere("9")),
        ("×", Bouton::Insere("×")),
    ],
    [
        ("4", Bouton::Insere("4")),
        ("5", Bouton::Insere("5")),
        ("6", Bouton::Insere("6")),
        ("−", Bouton::Insere("−")),
    ],
    [
        ("1", Bouton::Insere("1")),
        ("2", Bouton::Insere("2")),
        ("3", Bouton::Insere("3")),
        ("+", Bouton::Insere("+")),
    ],
    [
        ("π", Bouton::Insere("π")),
        ("0", Bouton::Insere("0")),
        (".", Bouton::Insere(".")),
        ("%", Bouton::Pourcentage),
    ],
];

const DERNIERE_LIGNE: [(&str, Bouton); 3] = [
    ("x²", Bouton::Carre),
    ("⌫", Bouton::Retour),
    ("=", Bouton::Egal),
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice (degrés)");
                ui.add_space(6.0);

                self.ui_afficheur(ui);

                ui.add_space(8.0);

                self.ui_pave(ui, maintenant);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);

                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    /// Clavier physique : lit les événements de la frame.
    pub fn clavier(&mut self, ctx: &egui::Context, maintenant: f64) {
        let touches: Vec<Touche> = ctx.input(|i| i.events.iter().flat_map(touches_de).collect());

        for t in touches {
            if self.touche(t, maintenant) {
                vibre_court();
            }
        }
    }

    fn ui_afficheur(&self, ui: &mut egui::Ui) {
        let couleur = if self.erreur_depuis.is_some() {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.texte_affiche())
                            .size(34.0)
                            .monospace()
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        egui::Grid::new("pave_calc_degres")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE.iter() {
                    for &(label, bouton) in ligne {
                        self.bouton(ui, label, bouton, maintenant);
                    }
                    ui.end_row();
                }

                for &(label, bouton) in DERNIERE_LIGNE.iter() {
                    self.bouton(ui, label, bouton, maintenant);
                }
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, bouton: Bouton, maintenant: f64) {
        let resp = ui.add_sized(
            [72.0, 44.0],
            egui::Button::new(egui::RichText::new(label).size(20.0)),
        );
        if resp.clicked() {
            vibre_court();
            self.appuie(bouton, maintenant);
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.label("Historique :");

        if self.historique.is_empty() {
            ui.weak("Aucun historique");
            return;
        }

        let mut rappel = None;

        egui::ScrollArea::vertical()
            .id_salt("historique_calc")
            .max_height(220.0)
            .show(ui, |ui| {
                for (i, h) in self.historique.entrees().iter().enumerate() {
                    let texte = egui::RichText::new(format!("{}\n= {}", h.expr, h.result)).monospace();
                    let resp = ui
                        .add(egui::Button::new(texte).frame(false))
                        .on_hover_text(heure(h.time));
                    if resp.clicked() {
                        rappel = Some(i);
                    }
                }
            });

        if let Some(i) = rappel {
            vibre_court();
            self.rappelle(i);
        }
    }

    fn ui_demarche(&self, ui: &mut egui::Ui) {
        let Some(d) = &self.demarche else {
            return;
        };

        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Normalisée", "demarche_normalisee", &d.normalisee);
                Self::champ_demarche(ui, "Degrés -> radians", "demarche_convertie", &d.convertie);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &d.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &d.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}

/// Événements egui -> touches de la calculatrice.
fn touches_de(ev: &egui::Event) -> Vec<Touche> {
    match ev {
        egui::Event::Text(t) => t.chars().map(Touche::Caractere).collect(),
        egui::Event::Key {
            key: egui::Key::Enter,
            pressed: true,
            ..
        } => vec![Touche::Entree],
        egui::Event::Key {
            key: egui::Key::Backspace,
            pressed: true,
            ..
        } => vec![Touche::Retour],
        _ => Vec::new(),
    }
}

/// Horodatage (ms Unix) -> "jj/mm hh:mm" en heure locale.
fn heure(ms: i64) -> String {
    chrono::DateTime::<chrono::Utc>::from_timestamp_millis(ms)
        .map(|t| {
            t.with_timezone(&chrono::Local)
                .format("%d/%m %H:%M")
                .to_string()
        })
        .unwrap_or_default()
}
