//! Tests scientifiques (campagne) : exactitude + taxonomie + terminaison.
//!
//! But : vérifier les propriétés du pipeline sans faire chauffer la machine.
//! - budget temps global sur les passes de stress
//! - comparaison flottante par tolérance relative (approx)
//! - chaque famille d'erreur est atteinte par au moins une entrée

use std::time::{Duration, Instant};

use super::erreurs::ErreurCalc;
use super::eval::{evaluer, evaluer_avec, normaliser, Limites};

fn ok(s: &str) -> f64 {
    evaluer(s).unwrap_or_else(|e| panic!("evaluer({s:?}) erreur: {e}"))
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

fn assert_approx(s: &str, attendu: f64) {
    let v = ok(s);
    assert!(approx(v, attendu), "expr={s:?} obtenu={v} attendu={attendu}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Exactitude arithmétique ------------------------ */

#[test]
fn sci_infixe_standard() {
    assert_approx("2+3*4", 14.0);
    assert_approx("(2+3)*4", 20.0);
    assert_approx("2^3^2", 512.0);
    assert_approx("10-4-3", 3.0);
    assert_approx("100/10/2", 5.0);
    assert_approx("1.5*4", 6.0);
    assert_approx("2.5e2+50", 300.0);
}

#[test]
fn sci_unaire_et_puissance() {
    assert_approx("-2^2", 4.0);
    assert_approx("2^-3", 0.125);
    assert_approx("-(-3)", 3.0);
    assert_approx("4^0.5", 2.0);
}

#[test]
fn sci_sucre_postfixe() {
    assert_approx("10%", 0.1);
    assert_approx("50%+1", 1.5);
    assert_approx("(50+50)%", 1.0);
    assert_approx("(50+50)%-1!", 0.0); // % postfixe, puis `-` binaire
    assert_approx("pi%", std::f64::consts::PI / 100.0);
    assert_approx("5!", 120.0);
    assert_approx("(3+2)!", 120.0);
    assert_approx("3!!", 720.0);
    assert_approx("sqrt(16)!", 24.0);
}

#[test]
fn sci_fonctions_liste_blanche() {
    assert_approx("sin(0)", 0.0);
    assert_approx("cos(0)", 1.0);
    assert_approx("tan(0)", 0.0);
    assert_approx("sin(pi/2)", 1.0);
    assert_approx("asin(1)", std::f64::consts::FRAC_PI_2);
    assert_approx("acos(1)", 0.0);
    assert_approx("atan(1)", std::f64::consts::FRAC_PI_4);
    assert_approx("sqrt(16)", 4.0);
    assert_approx("abs(0-3)", 3.0);
    assert_approx("floor(2.7)", 2.0);
    assert_approx("ceil(2.1)", 3.0);
    assert_approx("round(2.5)", 3.0);
    assert_approx("log10(1000)", 3.0);
    assert_approx("ln(1)", 0.0);
}

#[test]
fn sci_constantes() {
    assert_approx("pi", std::f64::consts::PI);
    assert_approx("e", std::f64::consts::E);
    assert_approx("2*pi", std::f64::consts::TAU);
    assert_approx("e^2", std::f64::consts::E * std::f64::consts::E);
}

#[test]
fn sci_glyphes_visuels() {
    assert_approx("2×3", 6.0);
    assert_approx("8÷2", 4.0);
    assert_approx("5−3", 2.0); // U+2212
    assert_approx("√(16)", 4.0);
    assert_approx("2*π", std::f64::consts::TAU);
}

/* ------------------------ Taxonomie : chaque famille atteinte ------------------------ */

#[test]
fn sci_taxonomie_complete() {
    // CaractereInvalide
    assert_eq!(evaluer("2@3"), Err(ErreurCalc::CaractereInvalide('@')));
    assert_eq!(evaluer("2;3"), Err(ErreurCalc::CaractereInvalide(';')));

    // ErreurSyntaxe
    assert!(matches!(evaluer("2+"), Err(ErreurCalc::ErreurSyntaxe(_))));
    assert!(matches!(evaluer("(2+3"), Err(ErreurCalc::ErreurSyntaxe(_))));
    assert!(matches!(evaluer("()"), Err(ErreurCalc::ErreurSyntaxe(_))));
    assert!(matches!(
        evaluer("atan(1,2)"),
        Err(ErreurCalc::ErreurSyntaxe(_))
    ));

    // IdentifiantInconnu (pin contient pi mais n'est PAS la constante)
    assert_eq!(
        evaluer("pin"),
        Err(ErreurCalc::IdentifiantInconnu("pin".into()))
    );
    assert_eq!(
        evaluer("Pi"),
        Err(ErreurCalc::IdentifiantInconnu("Pi".into()))
    );

    // FonctionInconnue
    assert_eq!(
        evaluer("foo(1)"),
        Err(ErreurCalc::FonctionInconnue("foo".into()))
    );
    assert_eq!(
        evaluer("Sin(0)"),
        Err(ErreurCalc::FonctionInconnue("Sin".into()))
    );

    // DomaineInvalide
    assert!(matches!(
        evaluer("-1!"),
        Err(ErreurCalc::DomaineInvalide(_))
    ));
    assert!(matches!(
        evaluer("2.5!"),
        Err(ErreurCalc::DomaineInvalide(_))
    ));

    // NonFini
    assert_eq!(evaluer("1/0"), Err(ErreurCalc::NonFini));
    assert_eq!(evaluer("log10(0-10)"), Err(ErreurCalc::NonFini));

    // Depassement
    assert!(matches!(evaluer("171!"), Err(ErreurCalc::Depassement(_))));
    assert!(matches!(
        evaluer("10^10^10"),
        Err(ErreurCalc::NonFini) | Err(ErreurCalc::Depassement(_))
    ));
}

#[test]
fn sci_non_fini_jamais_reabsorbe() {
    // un infini intermédiaire ne peut pas redevenir fini
    assert_eq!(evaluer("1/(1/0)"), Err(ErreurCalc::NonFini));
    assert_eq!(evaluer("atan(1/0)"), Err(ErreurCalc::NonFini));
    assert_eq!(evaluer("0*(1/0)"), Err(ErreurCalc::NonFini));
}

/* ------------------------ Idempotence de la normalisation ------------------------ */

#[test]
fn sci_normalisation_idempotente() {
    let entrees = [
        "2+3*4",
        "50%+25%",
        "(3!)!",
        "5!",
        "pi*e+2e3",
        "2×3÷4−1",
        "sqrt(16)!",
        "(50+50)%",
        "(50+50)%-1!",
        "sin(pi/2)",
        "-1!",
        "pi%",
        "e%",
        "factorial(5)",
    ];
    for s in entrees {
        let une_fois = normaliser(s).unwrap();
        let deux_fois = normaliser(&une_fois).unwrap();
        assert_eq!(deux_fois, une_fois, "non idempotent pour {s:?}");
    }
}

/* ------------------------ Terminaison et profondeur ------------------------ */

#[test]
fn sci_profondeur_bornee_pas_de_debordement() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // 500 niveaux : refus propre, pas de débordement de pile
    let profonde = format!("{}1{}", "(".repeat(500), ")".repeat(500));
    assert!(matches!(
        evaluer(&profonde),
        Err(ErreurCalc::Depassement(_))
    ));
    budget(t0, max);

    // chaîne de moins unaires, même garde
    let moins = format!("{}5", "-".repeat(1000));
    assert!(matches!(evaluer(&moins), Err(ErreurCalc::Depassement(_))));
    budget(t0, max);
}

#[test]
fn sci_reecriture_factorielle_termine() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // factorielles imbriquées : chaque passe consomme un `!`, la réécriture
    // est bornée par leur nombre
    assert_approx("((3!)!)", 720.0);
    let mut expr = "3".to_string();
    for _ in 0..20 {
        expr = format!("({expr}!)");
        budget(t0, max);
    }
    // 3! = 6, 6! = 720, 720! explose : refus propre et rapide
    assert!(matches!(evaluer(&expr), Err(ErreurCalc::Depassement(_))));
    budget(t0, max);
}

#[test]
fn sci_somme_plate_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // associativité gauche itérative : une longue somme plate ne creuse pas la pile
    let mut expr = String::new();
    for k in 0..2000 {
        if k > 0 {
            expr.push('+');
        }
        expr.push('1');
    }
    assert_approx(&expr, 2000.0);
    budget(t0, max);
}

/* ------------------------ Limites resserrées ------------------------ */

#[test]
fn sci_borne_resultat_serree() {
    let l = Limites {
        borne_resultat: 1e6,
        ..Limites::default()
    };
    assert_eq!(evaluer_avec("1000*999", &l), Ok(999000.0));
    assert!(matches!(
        evaluer_avec("1000*1001", &l),
        Err(ErreurCalc::Depassement(_))
    ));
}

/* ------------------------ Sécurité d'injection ------------------------ */

#[test]
fn sci_injection_toujours_refusee() {
    // des chaînes qui ressemblent à du code hôte doivent échouer TYPÉ,
    // jamais s'exécuter ni paniquer
    let hostiles = [
        "Math.sqrt(4)",
        "__proto__",
        "constructor",
        "eval(1)",
        "exec(1)",
        "system(ls)",
        "process",
        "require(fs)",
        "globalThis",
        "import(x)",
        "alert(1)",
        "1;drop",
        "\"2+2\"",
        "`2+2`",
        "{2+2}",
    ];
    for s in hostiles {
        let r = evaluer(s);
        assert!(r.is_err(), "entrée hostile acceptée: {s:?} => {r:?}");
    }
}
