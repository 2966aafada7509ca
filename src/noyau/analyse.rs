// src/noyau/analyse.rs
//
// Descente récursive sur la grammaire fermée (remplace un éventuel passage
// par du code dynamique : seule la grammaire décide de ce qui s'exécute).
//
// Précédence, du plus liant au moins liant :
// - primaires : nombre, constante, appel `nom(expr)`, groupe `(expr)`
// - postfixes ! et % (chaînage à gauche : 3!! = (3!)!)
// - moins unaire (plus liant que ^ : -2^2 = (-2)^2 = 4)
// - ^ associatif à droite (2^3^2 = 512)
// - * / associatifs à gauche
// - + - associatifs à gauche
//
// SAFE : la profondeur d'imbrication est bornée (Limites::profondeur_max),
// la descente ne peut donc pas faire déborder la pile.

use super::erreurs::ErreurCalc;
use super::eval::Limites;
use super::expr::Expr;
use super::fonctions::est_fonction;
use super::jetons::{format_jetons, Tok};

pub fn analyser(jetons: &[Tok], limites: &Limites) -> Result<Expr, ErreurCalc> {
    let mut a = Analyseur {
        jetons,
        pos: 0,
        profondeur: 0,
        profondeur_max: limites.profondeur_max,
    };

    let e = a.expression()?;

    if let Some(t) = a.courant() {
        return Err(ErreurCalc::ErreurSyntaxe(format!(
            "jeton inattendu après l'expression: {}",
            format_jetons(std::slice::from_ref(t))
        )));
    }
    Ok(e)
}

struct Analyseur<'a> {
    jetons: &'a [Tok],
    pos: usize,
    profondeur: usize,
    profondeur_max: usize,
}

impl<'a> Analyseur<'a> {
    fn courant(&self) -> Option<&Tok> {
        self.jetons.get(self.pos)
    }

    fn avancer(&mut self) {
        self.pos += 1;
    }

    /// Garde-fou de profondeur, appelé à chaque entrée récursive.
    fn plonger(&mut self) -> Result<(), ErreurCalc> {
        self.profondeur += 1;
        if self.profondeur > self.profondeur_max {
            return Err(ErreurCalc::Depassement(format!(
                "imbrication au-delà de {}",
                self.profondeur_max
            )));
        }
        Ok(())
    }

    fn remonter(&mut self) {
        self.profondeur -= 1;
    }

    /* ------------------------ niveaux de précédence ------------------------ */

    // expression := terme (('+' | '-') terme)*
    fn expression(&mut self) -> Result<Expr, ErreurCalc> {
        self.plonger()?;
        let mut e = self.terme()?;
        loop {
            match self.courant() {
                Some(Tok::Plus) => {
                    self.avancer();
                    let d = self.terme()?;
                    e = Expr::Add(Box::new(e), Box::new(d));
                }
                Some(Tok::Minus) => {
                    self.avancer();
                    let d = self.terme()?;
                    e = Expr::Sub(Box::new(e), Box::new(d));
                }
                _ => break,
            }
        }
        self.remonter();
        Ok(e)
    }

    // terme := puissance (('*' | '/') puissance)*
    fn terme(&mut self) -> Result<Expr, ErreurCalc> {
        let mut e = self.puissance()?;
        loop {
            match self.courant() {
                Some(Tok::Star) => {
                    self.avancer();
                    let d = self.puissance()?;
                    e = Expr::Mul(Box::new(e), Box::new(d));
                }
                Some(Tok::Slash) => {
                    self.avancer();
                    let d = self.puissance()?;
                    e = Expr::Div(Box::new(e), Box::new(d));
                }
                _ => break,
            }
        }
        Ok(e)
    }

    // puissance := unaire ('^' puissance)?   — associatif à droite
    fn puissance(&mut self) -> Result<Expr, ErreurCalc> {
        self.plonger()?;
        let base = self.unaire()?;
        let e = if matches!(self.courant(), Some(Tok::Caret)) {
            self.avancer();
            let exposant = self.puissance()?;
            Expr::Puiss(Box::new(base), Box::new(exposant))
        } else {
            base
        };
        self.remonter();
        Ok(e)
    }

    // unaire := '-' unaire | postfixe    (pas de '+' unaire dans la grammaire)
    fn unaire(&mut self) -> Result<Expr, ErreurCalc> {
        if matches!(self.courant(), Some(Tok::Minus)) {
            self.avancer();
            self.plonger()?;
            let x = self.unaire()?;
            self.remonter();
            return Ok(Expr::Neg(Box::new(x)));
        }
        self.postfixe()
    }

    // postfixe := primaire ('!' | '%')*
    fn postfixe(&mut self) -> Result<Expr, ErreurCalc> {
        let mut e = self.primaire()?;
        loop {
            match self.courant() {
                Some(Tok::Bang) => {
                    self.avancer();
                    e = Expr::Factorielle(Box::new(e));
                }
                Some(Tok::Percent) => {
                    self.avancer();
                    e = Expr::Pourcent(Box::new(e));
                }
                _ => break,
            }
        }
        Ok(e)
    }

    // primaire := Num | Ident | Ident '(' expression ')' | '(' expression ')'
    fn primaire(&mut self) -> Result<Expr, ErreurCalc> {
        match self.courant().cloned() {
            Some(Tok::Num(v)) => {
                self.avancer();
                Ok(Expr::Nombre(v))
            }

            Some(Tok::Ident(nom)) => {
                self.avancer();
                if matches!(self.courant(), Some(Tok::LPar)) {
                    self.avancer();
                    let arg = self.expression()?;
                    // un seul argument : la virgule est un refus explicite
                    if matches!(self.courant(), Some(Tok::Comma)) {
                        return Err(ErreurCalc::ErreurSyntaxe(format!(
                            "appel multi-arguments: {nom}"
                        )));
                    }
                    self.fermante()?;
                    return Ok(Expr::Appel(nom, Box::new(arg)));
                }
                // nom de fonction sans son argument : faute de grammaire,
                // pas une constante par accident
                if est_fonction(&nom) {
                    return Err(ErreurCalc::ErreurSyntaxe(format!(
                        "fonction sans argument: {nom}"
                    )));
                }
                Ok(Expr::Constante(nom))
            }

            Some(Tok::LPar) => {
                self.avancer();
                if matches!(self.courant(), Some(Tok::RPar)) {
                    return Err(ErreurCalc::ErreurSyntaxe("parenthèses vides".into()));
                }
                let e = self.expression()?;
                self.fermante()?;
                Ok(e)
            }

            Some(Tok::Comma) => Err(ErreurCalc::ErreurSyntaxe(
                "virgule hors d'un appel".into(),
            )),

            Some(t) => Err(ErreurCalc::ErreurSyntaxe(format!(
                "jeton inattendu: {}",
                format_jetons(std::slice::from_ref(&t))
            ))),

            None => Err(ErreurCalc::ErreurSyntaxe(
                "fin d'expression inattendue".into(),
            )),
        }
    }

    fn fermante(&mut self) -> Result<(), ErreurCalc> {
        if matches!(self.courant(), Some(Tok::RPar)) {
            self.avancer();
            Ok(())
        } else {
            Err(ErreurCalc::ErreurSyntaxe(
                "parenthèse fermante manquante".into(),
            ))
        }
    }
}
