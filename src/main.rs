// src/main.rs
//
// Calculatrice Nuage — point d'entrée natif
// -----------------------------------------
// But:
// - eframe::run_native + NativeOptions
// - Journalisation env_logger (RUST_LOG=debug pour suivre le sondage)
// - Configuration par variables d'environnement :
//     CALCULATRICE_API        adresse du service (défaut localhost:5000/api)
//     CALCULATRICE_TENTATIVES budget de sondages (défaut 50)
//     CALCULATRICE_DELAI_MS   délai entre sondages (défaut 200)
//     CALCULATRICE_MODE       "nuage" (défaut) ou "local" (hors-ligne)
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: point d'entrée seulement

use eframe::egui;

mod app;
mod noyau;
mod nuage;

use app::AppCalc;
use nuage::ConfigNuage;

/// Titre de la fenêtre.
const TITRE_APP: &str = "Calculatrice Nuage";

/* ------------------------ Styles (texte calculatrice) ------------------------ */

fn configurer_styles(ctx: &egui::Context) {
    use egui::{FontFamily, FontId, TextStyle};

    let mut style = (*ctx.style()).clone();
    style
        .text_styles
        .insert(TextStyle::Button, FontId::new(22.0, FontFamily::Proportional));
    style
        .text_styles
        .insert(TextStyle::Body, FontId::new(18.0, FontFamily::Proportional));
    ctx.set_style(style);
}

/* ------------------------ Entrée ------------------------ */

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = ConfigNuage::depuis_env();
    log::info!(
        "démarrage, mode {:?}, service {}",
        config.mode,
        config.base_url
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([320.0, 460.0])
            .with_min_inner_size([300.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |cc| {
            // Contexte egui prêt => styles avant la première frame.
            configurer_styles(&cc.egui_ctx);
            Ok(Box::new(AppCalc::nouveau(&config)))
        }),
    )
}
