// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// Objectifs :
// - Afficheur en haut (droite, police rétrécie quand le nombre s'allonge)
// - Pavé 4 colonnes repris de la disposition d'origine :
//     AC/C  ±  %  ÷
//      7    8  9  ×
//      4    5  6  −
//      1    2  3  +
//      0    ,     =
// - Opérateur retenu surligné
// - Clavier : chiffres / opérateurs / Enter / Backspace (Échap dans app.rs)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{format, Operateur};

/// Taille des touches du pavé.
const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];

/// Police de l'afficheur, rétrécie par paliers (afficheur d'origine).
fn taille_police(texte: &str) -> f32 {
    match texte.chars().count() {
        0..=6 => 40.0,
        7..=9 => 32.0,
        10..=12 => 26.0,
        _ => 20.0,
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Effacer,
    Signe,
    Pourcentage,
    Virgule,
    Egal,
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.raccourcis_clavier(ui);

        self.ui_afficheur(ui);
        ui.add_space(8.0);
        self.ui_pave(ui);
    }

    fn ui_afficheur(&self, ui: &mut egui::Ui) {
        let texte = format::formater_affichage(&self.affichage);

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(64.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(&texte)
                            .monospace()
                            .size(taille_police(&texte)),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, self.libelle_effacer(), "Remise à zéro", Action::Effacer);
                self.bouton_action(ui, "±", "Inverse le signe", Action::Signe);
                self.bouton_action(ui, "%", "Divise par 100", Action::Pourcentage);
                self.bouton_operateur(ui, Operateur::Division);
                ui.end_row();

                self.bouton_chiffre(ui, '7');
                self.bouton_chiffre(ui, '8');
                self.bouton_chiffre(ui, '9');
                self.bouton_operateur(ui, Operateur::Multiplication);
                ui.end_row();

                self.bouton_chiffre(ui, '4');
                self.bouton_chiffre(ui, '5');
                self.bouton_chiffre(ui, '6');
                self.bouton_operateur(ui, Operateur::Soustraction);
                ui.end_row();

                self.bouton_chiffre(ui, '1');
                self.bouton_chiffre(ui, '2');
                self.bouton_chiffre(ui, '3');
                self.bouton_operateur(ui, Operateur::Addition);
                ui.end_row();

                self.bouton_chiffre(ui, '0');
                self.bouton_action(ui, ",", "Virgule décimale", Action::Virgule);
                ui.label("");
                self.bouton_action(ui, "=", "Évalue", Action::Egal);
                ui.end_row();
            });
    }

    /// AC quand l'afficheur est vierge, C sinon (libellé d'origine).
    fn libelle_effacer(&self) -> &'static str {
        if self.affichage == "0" {
            "AC"
        } else {
            "C"
        }
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, chiffre: char) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(chiffre.to_string()));
        if resp.clicked() {
            self.saisir_chiffre(chiffre);
        }
    }

    fn bouton_operateur(&mut self, ui: &mut egui::Ui, op: Operateur) {
        let mut bouton = egui::Button::new(op.affichage());
        if self.operateur_actif == Some(op) {
            bouton = bouton.fill(ui.visuals().selection.bg_fill);
        }

        let resp = ui.add_sized(TAILLE_BOUTON, bouton);
        if resp.clicked() {
            self.appuyer_operateur(op);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, libelle: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized(TAILLE_BOUTON, egui::Button::new(libelle))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Effacer => self.effacer(),
                Action::Signe => self.basculer_signe(),
                Action::Pourcentage => self.pourcentage(),
                Action::Virgule => self.saisir_virgule(),
                Action::Egal => self.appuyer_egal(),
            }
        }
    }

    /// Clavier : chiffres, opérateurs, Enter (=), Backspace.
    /// Échap est géré dans app.rs (raccourci global, comme AC).
    fn raccourcis_clavier(&mut self, ui: &mut egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());
        for evenement in &evenements {
            if let egui::Event::Text(texte) = evenement {
                for c in texte.chars() {
                    match c {
                        '0'..='9' => self.saisir_chiffre(c),
                        ',' | '.' => self.saisir_virgule(),
                        '+' => self.appuyer_operateur(Operateur::Addition),
                        '-' => self.appuyer_operateur(Operateur::Soustraction),
                        '*' => self.appuyer_operateur(Operateur::Multiplication),
                        '/' => self.appuyer_operateur(Operateur::Division),
                        '=' => self.appuyer_egal(),
                        _ => {}
                    }
                }
            }
        }

        if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.appuyer_egal();
        }
        if ui.input(|i| i.key_pressed(egui::Key::Backspace)) {
            self.retirer_chiffre();
        }
    }
}
