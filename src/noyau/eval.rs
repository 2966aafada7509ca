//! Noyau — évaluation (pipeline réel)
//!
//! normaliser -> tokenize -> analyser -> calculer
//!
//! Chaque appel est indépendant et réentrant : aucun état partagé, le seul
//! état processus est la paire de regex compilées une fois (canon.rs).
//! Succès = toujours un f64 FINI ; tout le reste est une ErreurCalc.

use tracing::{debug, trace};

use super::analyse::analyser;
use super::calcul::calculer;
use super::erreurs::ErreurCalc;
use super::jetons::{format_jetons, tokenize};

pub use super::canon::normaliser;

/* ------------------------ Limites (garde-fous) ------------------------ */

/// Bornes défensives du pipeline. Des valeurs par défaut raisonnables pour
/// une calculatrice ; resserrables par l'appelant (CLI, tests).
#[derive(Clone, Debug)]
pub struct Limites {
    /// Plus grand n accepté par la factorielle (170 = dernier n! fini en f64).
    pub factorielle_max: f64,
    /// Magnitude maximale d'une valeur intermédiaire ou finale.
    pub borne_resultat: f64,
    /// Profondeur d'imbrication maximale de l'analyseur (anti-débordement de pile).
    pub profondeur_max: usize,
}

impl Limites {
    pub const FACTORIELLE_MAX_DEFAUT: f64 = 170.0;
    pub const PROFONDEUR_MAX_DEFAUT: usize = 128;

    /// Plafond dur du constructeur borné (anti-abus de configuration).
    pub const PROFONDEUR_PLAFOND: usize = 2048;

    /// Constructeur borné : les demandes excessives sont rabattues.
    pub fn bornees(factorielle_max: f64, profondeur_max: usize) -> Self {
        Self {
            factorielle_max: factorielle_max.clamp(0.0, Self::FACTORIELLE_MAX_DEFAUT),
            borne_resultat: f64::MAX,
            profondeur_max: profondeur_max.clamp(1, Self::PROFONDEUR_PLAFOND),
        }
    }
}

impl Default for Limites {
    fn default() -> Self {
        Self {
            factorielle_max: Self::FACTORIELLE_MAX_DEFAUT,
            borne_resultat: f64::MAX,
            profondeur_max: Self::PROFONDEUR_MAX_DEFAUT,
        }
    }
}

/* ------------------------ API publique ------------------------ */

/// Évalue une expression de surface avec les limites par défaut.
pub fn evaluer(expr: &str) -> Result<f64, ErreurCalc> {
    evaluer_avec(expr, &Limites::default())
}

/// Pipeline complet sous limites fournies par l'appelant.
pub fn evaluer_avec(expr: &str, limites: &Limites) -> Result<f64, ErreurCalc> {
    let s = expr.trim();
    if s.is_empty() {
        return Err(ErreurCalc::ErreurSyntaxe("entrée vide".into()));
    }

    // 1) Forme canonique
    let canon = normaliser(s)?;
    debug!(canon = %canon, "forme canonique");

    // 2) Jetons
    let jetons = tokenize(&canon)?;
    trace!(jetons = %format_jetons(&jetons), "jetons");

    // 3) Arbre (grammaire fermée)
    let arbre = analyser(&jetons, limites)?;

    // 4) Calcul (f64, finitude vérifiée par nœud)
    let v = calculer(&arbre, limites)?;
    debug!(resultat = v, "évaluation réussie");
    Ok(v)
}

/* ------------------------ tests pipeline ------------------------ */
