// src/noyau/expr.rs
//
// AST de la grammaire fermée.
//
// IMPORTANT (SAFE):
// - Aucun autre constructeur n'existe : l'évaluation ne peut jamais exécuter
//   autre chose que ces nœuds. La grammaire EST la frontière de sécurité.
// - L'arbre appartient à l'appel d'évaluation qui l'a construit, puis est jeté.

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),
    Constante(String), // pi, e (résolus normalement dès la normalisation)

    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Puiss(Box<Expr>, Box<Expr>), // ^ (associatif à droite)

    Factorielle(Box<Expr>), // postfixe !
    Pourcent(Box<Expr>),    // postfixe % (x/100)

    Appel(String, Box<Expr>), // fonction unaire de la liste blanche
}
