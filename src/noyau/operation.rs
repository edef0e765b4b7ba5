// src/noyau/operation.rs
//
// Opérations quatre-fonctions (noyau local)
// -----------------------------------------
// - Operateur : type partagé UI <-> fil (symbole réseau via serde rename)
// - evaluer   : révision "calcul local" (même sémantique que le service distant)
// - ± / %     : toujours locaux, même en mode nuage

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Les quatre opérateurs binaires.
///
/// Sur le fil (REST/JSON), l'opérateur voyage sous sa forme ASCII
/// (`"+"`, `"-"`, `"*"`, `"/"`) — d'où les `rename`.
/// À l'écran, on garde les symboles calculatrice (`−`, `×`, `÷`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operateur {
    #[serde(rename = "+")]
    Addition,
    #[serde(rename = "-")]
    Soustraction,
    #[serde(rename = "*")]
    Multiplication,
    #[serde(rename = "/")]
    Division,
}

impl Operateur {
    /// Symbole affiché sur les boutons et dans les journaux.
    pub fn affichage(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "−",
            Operateur::Multiplication => "×",
            Operateur::Division => "÷",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,
}

/// Évalue `a op b` localement.
///
/// Contrat identique au service distant : seule la division par zéro
/// est une erreur ; tout le reste suit l'arithmétique f64.
pub fn evaluer(a: f64, b: f64, op: Operateur) -> Result<f64, ErreurCalcul> {
    match op {
        Operateur::Addition => Ok(a + b),
        Operateur::Soustraction => Ok(a - b),
        Operateur::Multiplication => Ok(a * b),
        Operateur::Division => {
            if b == 0.0 {
                Err(ErreurCalcul::DivisionParZero)
            } else {
                Ok(a / b)
            }
        }
    }
}

/// Touche ± : inverse le signe.
pub fn basculer_signe(v: f64) -> f64 {
    -v
}

/// Touche % : divise par 100.
pub fn pourcentage(v: f64) -> f64 {
    v / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quatre_fonctions() {
        assert_eq!(evaluer(3.0, 4.0, Operateur::Addition), Ok(7.0));
        assert_eq!(evaluer(10.0, 4.0, Operateur::Soustraction), Ok(6.0));
        assert_eq!(evaluer(2.5, 4.0, Operateur::Multiplication), Ok(10.0));
        assert_eq!(evaluer(9.0, 2.0, Operateur::Division), Ok(4.5));
    }

    #[test]
    fn division_par_zero() {
        assert_eq!(
            evaluer(1.0, 0.0, Operateur::Division),
            Err(ErreurCalcul::DivisionParZero)
        );
    }

    #[test]
    fn signe_et_pourcentage() {
        assert_eq!(basculer_signe(12.5), -12.5);
        assert_eq!(basculer_signe(-3.0), 3.0);
        assert_eq!(pourcentage(50.0), 0.5);
    }

    #[test]
    fn operateur_sur_le_fil() {
        // serde rename : la forme JSON est le symbole ASCII
        assert_eq!(serde_json::to_string(&Operateur::Addition).unwrap(), "\"+\"");
        assert_eq!(serde_json::to_string(&Operateur::Division).unwrap(), "\"/\"");
        let op: Operateur = serde_json::from_str("\"*\"").unwrap();
        assert_eq!(op, Operateur::Multiplication);
    }
}
