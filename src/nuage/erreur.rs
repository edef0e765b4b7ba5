// src/nuage/erreur.rs

use thiserror::Error;

/// Erreurs du client nuage.
///
/// Toutes finissent par le même marqueur "Err" à l'écran, mais on garde
/// les causes distinctes pour les journaux et les tests.
#[derive(Debug, Error)]
pub enum ErreurNuage {
    /// Le service a refusé la soumission (statut HTTP non-succès).
    #[error("soumission refusée par le service (HTTP {statut})")]
    Soumission { statut: u16 },

    /// Budget de sondage épuisé sans résultat.
    #[error("aucun résultat après {tentatives} tentatives")]
    DelaiDepasse { tentatives: u32 },

    /// Panne transport pendant la soumission ou un sondage.
    #[error("erreur réseau: {0}")]
    Reseau(#[from] reqwest::Error),

    /// Soumission acceptée mais corps de réponse illisible.
    #[error("réponse de soumission illisible: {0}")]
    Decodage(#[from] serde_json::Error),
}
