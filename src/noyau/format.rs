// src/noyau/format.rs
//
// Formatage de l'afficheur (convention française)
// -----------------------------------------------
// Règles héritées de l'afficheur d'origine :
// - les marqueurs "…" (en vol) et "Err" (échec) passent tels quels
// - |x| >= 1e9 : notation exponentielle, 4 décimales
// - sinon : 8 décimales au plus, zéros finaux retirés,
//   virgule décimale + espace fine pour les milliers
// - une virgule en cours de saisie ("12,") est conservée

/// Marqueur affiché pendant qu'un calcul est en vol.
pub const AFFICHAGE_ATTENTE: &str = "…";

/// Marqueur affiché quand un calcul échoue (toutes causes confondues).
pub const AFFICHAGE_ERREUR: &str = "Err";

/// Au-delà de ce seuil (en valeur absolue), on passe en notation exponentielle.
const SEUIL_EXPOSANT: f64 = 1e9;

/// Nombre maximal de décimales affichées.
const DECIMALES_MAX: usize = 8;

/// Séparateur de milliers (espace fine insécable, comme fr-FR).
const SEPARATEUR_MILLIERS: char = '\u{202F}';

/// Formate la chaîne brute de l'afficheur.
///
/// `brut` est la saisie interne (point décimal ASCII) ou un des deux
/// marqueurs. Tout ce qui n'est pas un nombre ressort inchangé.
pub fn formater_affichage(brut: &str) -> String {
    if brut == AFFICHAGE_ATTENTE || brut == AFFICHAGE_ERREUR {
        return brut.to_string();
    }

    let Ok(nombre) = brut.parse::<f64>() else {
        return brut.to_string();
    };

    // Saisie en cours : "12." devient "12," (la virgule reste à l'écran).
    if let Some(entier) = brut.strip_suffix('.') {
        return format!("{},", grouper_milliers(entier));
    }

    if nombre.abs() >= SEUIL_EXPOSANT {
        return format!("{nombre:.4e}").replace('.', ",");
    }

    // Arrondi borné, puis retrait des zéros finaux.
    let mut texte = format!("{:.1$}", nombre, DECIMALES_MAX);
    if texte.contains('.') {
        while texte.ends_with('0') {
            texte.pop();
        }
        if texte.ends_with('.') {
            texte.pop();
        }
    }

    match texte.split_once('.') {
        Some((entier, fraction)) => format!("{},{fraction}", grouper_milliers(entier)),
        None => grouper_milliers(&texte),
    }
}

/// Insère le séparateur de milliers dans une partie entière (signe accepté).
fn grouper_milliers(chiffres: &str) -> String {
    let (signe, corps) = match chiffres.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", chiffres),
    };

    let mut inverse: Vec<char> = Vec::with_capacity(corps.len() + corps.len() / 3);
    for (i, c) in corps.chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            inverse.push(SEPARATEUR_MILLIERS);
        }
        inverse.push(c);
    }

    let groupe: String = inverse.into_iter().rev().collect();
    format!("{signe}{groupe}")
}
