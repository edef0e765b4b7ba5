// src/nuage/client.rs
//
// Client du service de calcul (soumission + sondage borné)
// --------------------------------------------------------
// Protocole :
// 1) soumettre       : POST /calculate -> poignée de tâche
// 2) attendre_resultat: boucle bornée (max_tentatives × delai), un sondage
//    par itération, premier "completed" gagnant
// 3) calculer        : composition des deux ; toute erreur court-circuite
//
// Pas d'annulation : la boucle va au bout ou épuise son budget.

use std::time::Duration;

use reqwest::StatusCode;

use super::config::ConfigNuage;
use super::erreur::ErreurNuage;
use super::protocole::{
    DemandeCalcul, ReponseResultat, ReponseSoumission, Sondage, TacheNuage, STATUT_TERMINE,
};
use crate::noyau::Operateur;

#[derive(Clone, Debug)]
pub struct ClientNuage {
    http: reqwest::Client,
    base_url: String,
    max_tentatives: u32,
    delai: Duration,
}

impl ClientNuage {
    pub fn new(config: &ConfigNuage) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_tentatives: config.max_tentatives,
            delai: config.delai,
        }
    }

    /// Soumet une opération au service.
    ///
    /// Statut non-succès => `Soumission` (on n'entre jamais dans la boucle
    /// de sondage). Sinon, la poignée est extraite du corps `{task_id}`.
    pub async fn soumettre(&self, demande: &DemandeCalcul) -> Result<TacheNuage, ErreurNuage> {
        let url = format!("{}/calculate", self.base_url);
        let reponse = self.http.post(&url).json(demande).send().await?;

        let statut = reponse.status();
        if !statut.is_success() {
            return Err(ErreurNuage::Soumission {
                statut: statut.as_u16(),
            });
        }

        let corps = reponse.text().await?;
        let soumission: ReponseSoumission = serde_json::from_str(&corps)?;
        log::debug!("tâche soumise: {}", soumission.task_id);
        Ok(TacheNuage::from(soumission))
    }

    /// Un sondage du service pour la poignée donnée.
    ///
    /// 404 = pas encore calculé (tolérance délibérée, pas une erreur).
    /// Tout autre statut ou corps non conforme = encore en attente.
    /// Seule une panne transport remonte en erreur.
    pub async fn sonder(&self, tache: &TacheNuage) -> Result<Sondage, ErreurNuage> {
        let url = format!("{}/result/{}", self.base_url, tache.id());
        let reponse = self.http.get(&url).send().await?;

        if reponse.status() == StatusCode::NOT_FOUND {
            return Ok(Sondage::EnAttente);
        }

        let corps = reponse.text().await?;
        match serde_json::from_str::<ReponseResultat>(&corps) {
            Ok(resultat) if resultat.status == STATUT_TERMINE => match resultat.result {
                Some(valeur) => Ok(Sondage::Pret(valeur)),
                None => Ok(Sondage::EnAttente),
            },
            _ => Ok(Sondage::EnAttente),
        }
    }

    /// Boucle de sondage bornée : `max_tentatives` itérations au plus,
    /// chacune précédée du délai fixe. Budget épuisé => `DelaiDepasse`.
    pub async fn attendre_resultat(&self, tache: &TacheNuage) -> Result<f64, ErreurNuage> {
        for tentative in 1..=self.max_tentatives {
            tokio::time::sleep(self.delai).await;

            match self.sonder(tache).await? {
                Sondage::Pret(valeur) => {
                    log::debug!("tâche {tache}: résultat {valeur} (tentative {tentative})");
                    return Ok(valeur);
                }
                Sondage::EnAttente => {
                    log::trace!("tâche {tache}: en attente (tentative {tentative})");
                }
            }
        }

        log::warn!(
            "tâche {tache}: aucun résultat après {} tentatives",
            self.max_tentatives
        );
        Err(ErreurNuage::DelaiDepasse {
            tentatives: self.max_tentatives,
        })
    }

    /// Soumission puis attente du résultat.
    ///
    /// Issue garantie en au plus `max_tentatives × delai` : un nombre,
    /// ou une erreur (soumission refusée, budget épuisé, panne réseau).
    pub async fn calculer(&self, a: f64, b: f64, op: Operateur) -> Result<f64, ErreurNuage> {
        log::info!("calcul soumis: {a} {} {b}", op.affichage());
        let demande = DemandeCalcul { a, b, op };
        let tache = self.soumettre(&demande).await?;
        self.attendre_resultat(&tache).await
    }
}
