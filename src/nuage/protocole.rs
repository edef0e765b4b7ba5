// src/nuage/protocole.rs
//
// Types "fil" du service de calcul (REST/JSON)
// --------------------------------------------
// Contrat consommé (pas conçu ici) :
// - POST {base}/calculate        corps {a, b, op}   -> {task_id}
// - GET  {base}/result/{task_id} -> {status: "completed", result: n} quand prêt ;
//   404 (ou tout autre statut/corps) = pas encore calculé

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::noyau::Operateur;

/// Statut renvoyé par le service quand le résultat est disponible.
pub(crate) const STATUT_TERMINE: &str = "completed";

/// Requête de calcul : deux opérandes + opérateur.
/// Construite fraîche à chaque calcul, figée une fois envoyée.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct DemandeCalcul {
    pub a: f64,
    pub b: f64,
    pub op: Operateur,
}

/// Corps de réponse à la soumission.
#[derive(Debug, Deserialize)]
pub struct ReponseSoumission {
    pub task_id: String,
}

/// Corps de réponse au sondage.
///
/// `result` est optionnel : le service d'origine peut répondre
/// `{status: "pending"}` sans résultat.
#[derive(Debug, Deserialize)]
pub struct ReponseResultat {
    pub status: String,
    #[serde(default)]
    pub result: Option<f64>,
}

/// Poignée opaque d'une tâche soumise.
///
/// Créée à la soumission, consommée par le sondage, jetée dès qu'une
/// issue terminale est connue. Deux opérations ne partagent jamais
/// la même poignée (le service génère un identifiant frais).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TacheNuage(String);

impl TacheNuage {
    /// Identifiant tel que reçu du service (segment d'URL du sondage).
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl From<ReponseSoumission> for TacheNuage {
    fn from(reponse: ReponseSoumission) -> Self {
        Self(reponse.task_id)
    }
}

impl fmt::Display for TacheNuage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Issue d'un sondage : résultat prêt, ou pas encore.
///
/// La convention transport "404 = pas encore calculé" est confinée au
/// client ; le reste du programme ne voit que cette sentinelle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sondage {
    Pret(f64),
    EnAttente,
}
