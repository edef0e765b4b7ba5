//! src/app/etat.rs
//!
//! État UI (sans vue, sans réseau).
//!
//! Deux machines cohabitent ici :
//! - la machine de saisie (afficheur, opérande en attente, opérateur
//!   retenu), reprise de l'afficheur d'origine ;
//! - la machine de session à cinq états, qui remplace le booléen
//!   "en vol" : un seul calcul à la fois, structurellement.
//!
//! Contrats :
//! - Aucune vue ici, aucun appel réseau direct (le moteur s'en charge).
//! - Saisie suspendue tant que la session est occupée ;
//!   Termine / Echec sont re-entrants.

use crate::app::moteur::{CalculEnCours, EvenementCalcul, Moteur};
use crate::noyau::{self, format, Operateur};
use crate::nuage::ConfigNuage;

/// Machine de session : un seul calcul en vol à la fois.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EtatSession {
    /// Rien en vol, saisie libre.
    #[default]
    Repos,
    /// Soumission partie, poignée pas encore reçue.
    Soumission,
    /// Poignée reçue, sondages en cours.
    Sondage,
    /// Dernier calcul abouti (re-entrant).
    Termine,
    /// Dernier calcul échoué, afficheur sur "Err" (re-entrant).
    Echec,
}

impl EtatSession {
    /// Vrai quand un calcul est en vol (saisie suspendue).
    pub fn occupe(self) -> bool {
        matches!(self, EtatSession::Soumission | EtatSession::Sondage)
    }
}

/// Ce qui suit le calcul en vol : enchaînement d'opérateur, ou "=".
#[derive(Clone, Copy, Debug)]
enum Suite {
    Operateur(Operateur),
    Egal,
}

pub struct AppCalc {
    // --- afficheur (saisie interne, point décimal ASCII) ---
    pub affichage: String,

    // --- machine de saisie ---
    pub valeur_precedente: Option<f64>,
    pub operateur: Option<Operateur>,
    pub attente_operande: bool,
    pub operateur_actif: Option<Operateur>,

    // --- session ---
    pub session: EtatSession,
    moteur: Moteur,
    calcul: Option<(CalculEnCours, Suite)>,
}

impl AppCalc {
    pub fn nouveau(config: &ConfigNuage) -> Self {
        Self {
            affichage: "0".to_string(),
            valeur_precedente: None,
            operateur: None,
            attente_operande: false,
            operateur_actif: None,
            session: EtatSession::Repos,
            moteur: Moteur::depuis_config(config),
            calcul: None,
        }
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn saisir_chiffre(&mut self, chiffre: char) {
        if self.session.occupe() {
            return;
        }
        self.reprendre_apres_terminal();

        if self.attente_operande {
            self.affichage = chiffre.to_string();
            self.attente_operande = false;
            self.operateur_actif = None;
        } else if self.affichage == "0" {
            self.affichage = chiffre.to_string();
        } else {
            self.affichage.push(chiffre);
        }
    }

    pub fn saisir_virgule(&mut self) {
        if self.session.occupe() {
            return;
        }
        self.reprendre_apres_terminal();

        if self.attente_operande {
            self.affichage = "0.".to_string();
            self.attente_operande = false;
            self.operateur_actif = None;
            return;
        }
        if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    /// Backspace : retire le dernier chiffre saisi.
    pub fn retirer_chiffre(&mut self) {
        if self.session.occupe() || self.attente_operande {
            return;
        }
        self.reprendre_apres_terminal();

        self.affichage.pop();
        if self.affichage.is_empty() || self.affichage == "-" {
            self.affichage = "0".to_string();
        }
    }

    /// AC : remise à zéro totale.
    ///
    /// Autorisé même en vol : le calcul abandonné va au bout dans le
    /// vide, ses événements ne seront plus drainés.
    pub fn effacer(&mut self) {
        self.affichage = "0".to_string();
        self.valeur_precedente = None;
        self.operateur = None;
        self.attente_operande = false;
        self.operateur_actif = None;
        self.session = EtatSession::Repos;
        self.calcul = None;
    }

    /// ± : inverse le signe de l'afficheur (toujours local).
    pub fn basculer_signe(&mut self) {
        if self.session.occupe() {
            return;
        }
        self.reprendre_apres_terminal();

        if let Ok(valeur) = self.affichage.parse::<f64>() {
            self.affichage = noyau::basculer_signe(valeur).to_string();
        }
    }

    /// % : divise l'afficheur par 100 (toujours local).
    pub fn pourcentage(&mut self) {
        if self.session.occupe() {
            return;
        }
        self.reprendre_apres_terminal();

        if let Ok(valeur) = self.affichage.parse::<f64>() {
            self.affichage = noyau::pourcentage(valeur).to_string();
        }
    }

    /* ------------------------ Opérations ------------------------ */

    pub fn appuyer_operateur(&mut self, prochain: Operateur) {
        if self.session.occupe() {
            return;
        }
        self.reprendre_apres_terminal();

        // "Err" (ou toute saisie non numérique) n'est pas un opérande.
        let Ok(saisie) = self.affichage.parse::<f64>() else {
            return;
        };

        match (self.valeur_precedente, self.operateur) {
            (None, _) => {
                self.valeur_precedente = Some(saisie);
                self.retenir_operateur(prochain);
            }
            (Some(gauche), Some(op)) => {
                self.lancer(gauche, saisie, op, Suite::Operateur(prochain));
            }
            (Some(_), None) => {
                // opérateur re-choisi sans nouvel opérande
                self.retenir_operateur(prochain);
            }
        }
    }

    pub fn appuyer_egal(&mut self) {
        if self.session.occupe() {
            return;
        }
        self.reprendre_apres_terminal();

        let Ok(saisie) = self.affichage.parse::<f64>() else {
            return;
        };

        if let (Some(gauche), Some(op)) = (self.valeur_precedente, self.operateur) {
            self.lancer(gauche, saisie, op, Suite::Egal);
        }
    }

    /* ------------------------ Événements ouvrier ------------------------ */

    /// À appeler chaque frame : draine les événements du calcul en vol.
    pub fn pomper_evenements(&mut self) {
        let Some((en_cours, suite)) = self.calcul.take() else {
            return;
        };

        while let Some(evenement) = en_cours.prochain() {
            match evenement {
                EvenementCalcul::Soumis => {
                    self.session = EtatSession::Sondage;
                }
                EvenementCalcul::Termine(valeur) => {
                    self.terminer(valeur, suite);
                    return; // poignée consommée
                }
                EvenementCalcul::Echec(raison) => {
                    self.echouer(&raison, suite);
                    return; // poignée consommée
                }
            }
        }

        // rien de terminal cette frame : on garde la poignée
        self.calcul = Some((en_cours, suite));
    }

    /* ------------------------ Interne ------------------------ */

    fn reprendre_apres_terminal(&mut self) {
        if matches!(self.session, EtatSession::Termine | EtatSession::Echec) {
            self.session = EtatSession::Repos;
        }
    }

    fn retenir_operateur(&mut self, prochain: Operateur) {
        self.attente_operande = true;
        self.operateur = Some(prochain);
        self.operateur_actif = Some(prochain);
    }

    fn lancer(&mut self, gauche: f64, droite: f64, op: Operateur, suite: Suite) {
        self.session = EtatSession::Soumission;
        self.affichage = format::AFFICHAGE_ATTENTE.to_string();
        let en_cours = self.moteur.lancer(gauche, droite, op);
        self.calcul = Some((en_cours, suite));
    }

    fn terminer(&mut self, valeur: f64, suite: Suite) {
        self.session = EtatSession::Termine;
        self.affichage = valeur.to_string();
        self.attente_operande = true;

        match suite {
            Suite::Operateur(op) => {
                self.valeur_precedente = Some(valeur);
                self.operateur = Some(op);
                self.operateur_actif = Some(op);
            }
            Suite::Egal => {
                self.valeur_precedente = None;
                self.operateur = None;
                self.operateur_actif = None;
            }
        }
    }

    fn echouer(&mut self, raison: &str, suite: Suite) {
        log::warn!("calcul échoué: {raison}");
        self.session = EtatSession::Echec;
        self.affichage = format::AFFICHAGE_ERREUR.to_string();
        self.valeur_precedente = None;
        self.attente_operande = true;

        match suite {
            Suite::Operateur(op) => {
                self.operateur = Some(op);
                self.operateur_actif = Some(op);
            }
            Suite::Egal => {
                self.operateur = None;
                self.operateur_actif = None;
            }
        }
    }
}
