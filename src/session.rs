//! src/session.rs
//!
//! État d'une calculatrice : registre mémoire, dernier résultat, historique borné.
//!
//! Contrats :
//! - Aucun état global : chaque [`Session`] est indépendante, plusieurs
//!   instances peuvent coexister (UI multiples, tests).
//! - Une évaluation en erreur ne touche NI la mémoire, NI le dernier
//!   résultat, NI l'historique : l'entrée en cours reste récupérable.

use tracing::debug;

use crate::noyau::{evaluer_avec, formater_resultat, ErreurCalc, Limites};

/// Taille de l'historique (le plus récent d'abord, le plus vieux évincé).
pub const CAPACITE_HISTORIQUE: usize = 8;

/// Une ligne d'historique : l'entrée telle que tapée + le résultat formaté.
#[derive(Clone, Debug, PartialEq)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug)]
pub struct Session {
    limites: Limites,
    memoire: f64,
    dernier: Option<f64>,
    historique: Vec<EntreeHistorique>,
}

impl Default for Session {
    fn default() -> Self {
        Self::avec_limites(Limites::default())
    }
}

impl Session {
    pub fn nouvelle() -> Self {
        Self::default()
    }

    pub fn avec_limites(limites: Limites) -> Self {
        Self {
            limites,
            memoire: 0.0,
            dernier: None,
            historique: Vec::with_capacity(CAPACITE_HISTORIQUE),
        }
    }

    /* ------------------------ évaluation ------------------------ */

    /// Évalue une expression ; en cas de succès, enregistre l'historique
    /// (le plus récent d'abord) et le dernier résultat.
    pub fn evaluer(&mut self, expr: &str) -> Result<f64, ErreurCalc> {
        let v = evaluer_avec(expr, &self.limites)?;
        self.dernier = Some(v);
        self.pousser_historique(expr, v);
        Ok(v)
    }

    fn pousser_historique(&mut self, expr: &str, v: f64) {
        self.historique.insert(
            0,
            EntreeHistorique {
                expression: expr.trim().to_string(),
                resultat: formater_resultat(v),
            },
        );
        self.historique.truncate(CAPACITE_HISTORIQUE);
        debug!(expr = expr.trim(), resultat = v, "historique: entrée poussée");
    }

    /* ------------------------ registre mémoire ------------------------ */

    /// M+ : évalue puis AJOUTE au registre mémoire.
    /// L'évaluation passe par [`Self::evaluer`], donc compte dans l'historique.
    pub fn memoire_plus(&mut self, expr: &str) -> Result<f64, ErreurCalc> {
        let v = self.evaluer(expr)?;
        self.memoire += v;
        Ok(v)
    }

    /// M- : évalue puis RETRANCHE du registre mémoire.
    pub fn memoire_moins(&mut self, expr: &str) -> Result<f64, ErreurCalc> {
        let v = self.evaluer(expr)?;
        self.memoire -= v;
        Ok(v)
    }

    /// MR : rappel mémoire.
    pub fn memoire_rappel(&self) -> f64 {
        self.memoire
    }

    /// MC : remise à zéro du registre.
    pub fn memoire_raz(&mut self) {
        self.memoire = 0.0;
    }

    /* ------------------------ lecture ------------------------ */

    pub fn dernier_resultat(&self) -> Option<f64> {
        self.dernier
    }

    /// Historique, le plus récent d'abord, au plus [`CAPACITE_HISTORIQUE`] lignes.
    pub fn historique(&self) -> &[EntreeHistorique] {
        &self.historique
    }
}
