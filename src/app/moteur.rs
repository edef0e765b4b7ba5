// src/app/moteur.rs
//
// Pont entre la boucle de rendu egui (synchrone) et le calcul (async)
// -------------------------------------------------------------------
// Un calcul nuage = un thread ouvrier portant un runtime tokio
// mono-thread. L'ouvrier pousse ses événements dans un canal ; l'UI le
// draine à chaque frame. Pas d'annulation : un calcul abandonné (AC)
// va au bout de son budget dans le vide, ses événements sont ignorés.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use crate::noyau::{self, Operateur};
use crate::nuage::{ClientNuage, ConfigNuage, DemandeCalcul, ModeCalcul};

/// Événements remontés vers l'UI.
#[derive(Clone, Debug, PartialEq)]
pub enum EvenementCalcul {
    /// Soumission acceptée ; le sondage commence.
    Soumis,
    /// Résultat terminal.
    Termine(f64),
    /// Échec terminal (soumission refusée, budget épuisé, panne réseau…).
    /// La cause est déjà dans les journaux ; l'UI n'affiche que "Err".
    Echec(String),
}

/// Poignée UI d'un calcul en vol.
pub struct CalculEnCours {
    evenements: Receiver<EvenementCalcul>,
}

impl CalculEnCours {
    /// Prochain événement, sans bloquer la frame.
    ///
    /// Un canal coupé sans issue terminale (ouvrier interrompu) est
    /// traité comme un échec : la session redevient toujours re-entrante.
    pub fn prochain(&self) -> Option<EvenementCalcul> {
        match self.evenements.try_recv() {
            Ok(evenement) => Some(evenement),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(EvenementCalcul::Echec("ouvrier interrompu".to_string()))
            }
        }
    }
}

/// Où part l'arithmétique : service distant, ou noyau local.
pub enum Moteur {
    Local,
    Nuage(ClientNuage),
}

impl Moteur {
    pub fn depuis_config(config: &ConfigNuage) -> Self {
        match config.mode {
            ModeCalcul::Local => Moteur::Local,
            ModeCalcul::Nuage => Moteur::Nuage(ClientNuage::new(config)),
        }
    }

    /// Lance `a op b` et rend la poignée à drainer frame par frame.
    pub fn lancer(&self, a: f64, b: f64, op: Operateur) -> CalculEnCours {
        let (tx, rx) = mpsc::channel();

        match self {
            Moteur::Local => {
                // Révision hors-ligne : issue immédiate, mêmes événements.
                match noyau::evaluer(a, b, op) {
                    Ok(valeur) => {
                        let _ = tx.send(EvenementCalcul::Termine(valeur));
                    }
                    Err(erreur) => {
                        let _ = tx.send(EvenementCalcul::Echec(erreur.to_string()));
                    }
                }
            }
            Moteur::Nuage(client) => {
                let client = client.clone();
                thread::spawn(move || executer_nuage(&client, a, b, op, &tx));
            }
        }

        CalculEnCours { evenements: rx }
    }
}

/// Corps de l'ouvrier : soumission, puis attente bornée du résultat.
fn executer_nuage(
    client: &ClientNuage,
    a: f64,
    b: f64,
    op: Operateur,
    tx: &Sender<EvenementCalcul>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(erreur) => {
            log::error!("runtime tokio indisponible: {erreur}");
            let _ = tx.send(EvenementCalcul::Echec(erreur.to_string()));
            return;
        }
    };

    runtime.block_on(async {
        let demande = DemandeCalcul { a, b, op };
        let tache = match client.soumettre(&demande).await {
            Ok(tache) => tache,
            Err(erreur) => {
                log::warn!("soumission échouée: {erreur}");
                let _ = tx.send(EvenementCalcul::Echec(erreur.to_string()));
                return;
            }
        };

        let _ = tx.send(EvenementCalcul::Soumis);

        match client.attendre_resultat(&tache).await {
            Ok(valeur) => {
                let _ = tx.send(EvenementCalcul::Termine(valeur));
            }
            Err(erreur) => {
                log::warn!("tâche {tache} sans résultat: {erreur}");
                let _ = tx.send(EvenementCalcul::Echec(erreur.to_string()));
            }
        }
    });
}
