// src/noyau/fonctions.rs
//
// Liste blanche des fonctions unaires + factorielle bornée.
//
// Contrat : l'ensemble est FERMÉ. Tout nom hors liste => FonctionInconnue,
// jamais de passage silencieux.

use super::erreurs::ErreurCalc;
use super::eval::Limites;

/// Noms acceptés en position d'appel `nom(...)`.
/// `factorial` est la graphie canonique émise par la normalisation du `!`.
pub const FONCTIONS: [&str; 14] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "sqrt", "abs", "floor", "ceil", "round",
    "log10", "ln", "factorial",
];

pub fn est_fonction(nom: &str) -> bool {
    FONCTIONS.contains(&nom)
}

/// Applique une fonction de la liste blanche à un argument déjà évalué.
/// La finitude du résultat est vérifiée par l'appelant (calcul.rs).
pub fn appliquer(nom: &str, x: f64, limites: &Limites) -> Result<f64, ErreurCalc> {
    let v = match nom {
        "sin" => x.sin(),
        "cos" => x.cos(),
        "tan" => x.tan(),
        "asin" => x.asin(),
        "acos" => x.acos(),
        "atan" => x.atan(),
        "sqrt" => x.sqrt(),
        "abs" => x.abs(),
        "floor" => x.floor(),
        "ceil" => x.ceil(),
        "round" => x.round(),
        "log10" => x.log10(),
        "ln" => x.ln(), // log népérien
        "factorial" => return factorielle(x, limites),
        _ => return Err(ErreurCalc::FonctionInconnue(nom.to_string())),
    };
    Ok(v)
}

/// Factorielle : définie pour les entiers >= 0 seulement.
/// Garde-fou : au-delà de `limites.factorielle_max` (170 par défaut, le plus
/// grand n dont n! tient en f64), on refuse AVANT de calculer — une entrée
/// du genre `999999999!` ne doit coûter ni CPU ni précision.
pub fn factorielle(x: f64, limites: &Limites) -> Result<f64, ErreurCalc> {
    if !x.is_finite() {
        return Err(ErreurCalc::NonFini);
    }
    if x < 0.0 || x != x.floor() {
        return Err(ErreurCalc::DomaineInvalide(format!("factorielle de {x}")));
    }
    if x > limites.factorielle_max {
        return Err(ErreurCalc::Depassement(format!("factorielle de {x}")));
    }

    let n = x as u64;
    let mut acc = 1.0_f64;
    for k in 2..=n {
        acc *= k as f64;
    }
    Ok(acc)
}
