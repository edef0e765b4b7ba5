//! Noyau local
//!
//! Organisation interne :
//! - operation.rs : opérateurs quatre-fonctions + évaluation locale (± / %)
//! - format.rs    : formatage de l'afficheur (virgule, milliers, exposant)

pub mod format;
pub mod operation;

// API publique minimale
pub use operation::{basculer_signe, evaluer, pourcentage, ErreurCalcul, Operateur};
