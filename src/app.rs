// src/app.rs
//
// Calculatrice Nuage — module App (racine)
// ----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + moteur.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App
//
// Important:
// - Les touches chiffres/opérateurs/Enter sont gérées dans vue.rs.
// - Ici: Échap (= AC) + pompage des événements du calcul en vol.

pub mod etat;
pub mod moteur;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Événements de l'ouvrier (soumission acceptée, résultat, échec).
        self.pomper_evenements();

        // Tant qu'un calcul est en vol, on redessine sans attendre une
        // interaction : le canal est drainé frame par frame.
        if self.session.occupe() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        // Échap = remise à zéro totale (comme le bouton AC).
        let echap = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if echap {
            self.effacer();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
