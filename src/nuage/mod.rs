//! Client nuage (soumission + sondage borné)
//!
//! Organisation interne :
//! - protocole.rs : types REST/JSON + poignée de tâche + sentinelle Sondage
//! - erreur.rs    : erreurs du client (soumission / délai / réseau)
//! - config.rs    : configuration par variables d'environnement
//! - client.rs    : ClientNuage (soumettre / sonder / attendre / calculer)

pub mod client;
pub mod config;
pub mod erreur;
pub mod protocole;

#[cfg(test)]
mod tests_client;

// API publique minimale
pub use client::ClientNuage;
pub use config::{ConfigNuage, ModeCalcul};
pub use erreur::ErreurNuage;
pub use protocole::{DemandeCalcul, Sondage, TacheNuage};
