//! Calculatrice sûre — noyau d'évaluation d'expressions.
//!
//! Transforme une chaîne de calculatrice (glyphes visuels, constantes,
//! pourcent, factorielle, fonctions) en un f64 FINI ou une erreur typée,
//! sans jamais passer par un évaluateur de code générique :
//!
//! normaliser -> tokenize -> analyser (grammaire fermée) -> calculer
//!
//! La couche UI (boutons, clavier, thème) reste extérieure ; elle ne voit
//! que [`evaluer`] / [`Session`].

pub mod noyau;
pub mod session;

pub use noyau::{evaluer, evaluer_avec, formater_resultat, normaliser, ErreurCalc, Limites};
pub use session::{EntreeHistorique, Session, CAPACITE_HISTORIQUE};
