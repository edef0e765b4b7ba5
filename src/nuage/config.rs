// src/nuage/config.rs
//
// Configuration (variables d'environnement)
// -----------------------------------------
// Même convention que le service d'origine : tout se règle par
// l'environnement, avec des valeurs par défaut raisonnables.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

/// Adresse de base du service de calcul.
pub const ENV_API: &str = "CALCULATRICE_API";
/// Budget de tentatives de sondage.
pub const ENV_TENTATIVES: &str = "CALCULATRICE_TENTATIVES";
/// Délai entre deux sondages (millisecondes).
pub const ENV_DELAI_MS: &str = "CALCULATRICE_DELAI_MS";
/// Mode de calcul : "nuage" (défaut) ou "local".
pub const ENV_MODE: &str = "CALCULATRICE_MODE";

const API_DEFAUT: &str = "http://localhost:5000/api";
const TENTATIVES_DEFAUT: u32 = 50;
const DELAI_DEFAUT_MS: u64 = 200;

/// Où se fait l'arithmétique.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModeCalcul {
    /// Soumission + sondage du service distant (révision de référence).
    #[default]
    Nuage,
    /// Évaluation locale, sans réseau (révision hors-ligne).
    Local,
}

#[derive(Clone, Debug)]
pub struct ConfigNuage {
    pub base_url: String,
    pub max_tentatives: u32,
    pub delai: Duration,
    pub mode: ModeCalcul,
}

impl Default for ConfigNuage {
    fn default() -> Self {
        Self {
            base_url: API_DEFAUT.to_string(),
            max_tentatives: TENTATIVES_DEFAUT,
            delai: Duration::from_millis(DELAI_DEFAUT_MS),
            mode: ModeCalcul::default(),
        }
    }
}

impl ConfigNuage {
    /// Lit la configuration depuis l'environnement.
    /// Toute valeur absente ou illisible retombe sur le défaut.
    pub fn depuis_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var(ENV_API) {
            config.base_url = url;
        }
        config.max_tentatives = lire_nombre(ENV_TENTATIVES, TENTATIVES_DEFAUT);
        config.delai = Duration::from_millis(lire_nombre(ENV_DELAI_MS, DELAI_DEFAUT_MS));

        if let Ok(mode) = env::var(ENV_MODE) {
            match mode.as_str() {
                "local" => config.mode = ModeCalcul::Local,
                "nuage" => config.mode = ModeCalcul::Nuage,
                autre => log::warn!("{ENV_MODE}={autre:?} inconnu, mode nuage conservé"),
            }
        }

        config
    }
}

/// Variable numérique ; défaut (avec avertissement) si illisible.
fn lire_nombre<T>(nom: &str, defaut: T) -> T
where
    T: FromStr + Copy + Display,
{
    match env::var(nom) {
        Ok(valeur) => match valeur.parse::<T>() {
            Ok(n) => n,
            Err(_) => {
                log::warn!("{nom}={valeur:?} illisible, {defaut} conservé");
                defaut
            }
        },
        Err(_) => defaut,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Un seul test touche l'environnement (variables globales au processus).
    #[test]
    fn lecture_env() {
        let defaut = ConfigNuage::depuis_env();
        assert_eq!(defaut.base_url, API_DEFAUT);
        assert_eq!(defaut.max_tentatives, TENTATIVES_DEFAUT);
        assert_eq!(defaut.delai, Duration::from_millis(DELAI_DEFAUT_MS));
        assert_eq!(defaut.mode, ModeCalcul::Nuage);

        env::set_var(ENV_API, "http://calc.example:9000/api");
        env::set_var(ENV_TENTATIVES, "8");
        env::set_var(ENV_DELAI_MS, "pas-un-nombre");
        env::set_var(ENV_MODE, "local");

        let config = ConfigNuage::depuis_env();
        assert_eq!(config.base_url, "http://calc.example:9000/api");
        assert_eq!(config.max_tentatives, 8);
        // valeur illisible => défaut conservé
        assert_eq!(config.delai, Duration::from_millis(DELAI_DEFAUT_MS));
        assert_eq!(config.mode, ModeCalcul::Local);

        env::remove_var(ENV_API);
        env::remove_var(ENV_TENTATIVES);
        env::remove_var(ENV_DELAI_MS);
        env::remove_var(ENV_MODE);
    }
}
