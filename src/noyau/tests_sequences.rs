//! Tests de séquences (campagne) : scénarios complets, touche par touche.
//!
//! But : épingler le comportement OBSERVABLE du moteur, y compris les
//! comportements textuels volontairement conservés :
//! - le point sur un affichage "0" REMPLACE comme un chiffre : le zéro de
//!   tête est perdu ([0, ., 5] -> ".5")
//! - la garde de division compare le TEXTE "0" (pas la valeur parsée) :
//!   ".0" passe la garde et divise normalement (-> "inf")
//! - le résultat s'affiche au format Display par défaut de f32 ("3", pas "3.0")
//! - un appui chiffre après un résultat CONTINUE la saisie sur ce résultat
//! - AC remet l'affichage à "" (le "0" n'existe qu'à la construction)

use super::{Bouton, Moteur, ERREUR};

use Bouton::*;

fn apres(seq: &[Bouton]) -> Moteur {
    let mut m = Moteur::default();
    for &b in seq {
        m.recevoir(b);
    }
    m
}

fn affichage(seq: &[Bouton]) -> String {
    apres(seq).affichage().to_string()
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn saisie_concatene_les_glyphes() {
    assert_eq!(affichage(&[Un, Deux, Trois]), "123");
    assert_eq!(affichage(&[Neuf, Neuf, Neuf, Neuf]), "9999");
}

#[test]
fn zero_initial_remplace() {
    // le "0" de départ se remplace, il ne se préfixe pas
    assert_eq!(affichage(&[Sept]), "7");
    assert_eq!(affichage(&[Zero, Sept]), "7");
    // et taper "0" sur "0" ne double pas le zéro
    assert_eq!(affichage(&[Zero, Zero]), "0");
}

#[test]
fn saisie_decimale() {
    assert_eq!(affichage(&[Trois, Point, Un, Quatre]), "3.14");
}

#[test]
fn point_sur_zero_perd_le_zero_de_tete() {
    // le point passe par la même branche de remplacement que les chiffres :
    // sur un affichage "0", il remplace, il ne complète pas
    assert_eq!(affichage(&[Zero, Point, Cinq]), ".5");
    assert_eq!(affichage(&[Point, Cinq]), ".5");
}

/* ------------------------ Les quatre opérations ------------------------ */

#[test]
fn addition_aller_retour() {
    assert_eq!(affichage(&[Un, Plus, Deux, Egal]), "3");
}

#[test]
fn soustraction() {
    assert_eq!(affichage(&[Sept, Moins, Deux, Egal]), "5");
    // résultat négatif
    assert_eq!(affichage(&[Deux, Moins, Cinq, Egal]), "-3");
}

#[test]
fn multiplication() {
    // le glyphe empilé ("×") est bien celui que l'évaluation reconnaît
    assert_eq!(affichage(&[Huit, Fois, Neuf, Egal]), "72");
}

#[test]
fn division_decimale() {
    assert_eq!(affichage(&[Neuf, Division, Quatre, Egal]), "2.25");
}

#[test]
fn operandes_a_virgule() {
    assert_eq!(affichage(&[Un, Point, Cinq, Plus, Deux, Point, Cinq, Egal]), "4");
}

/* ------------------------ Garde de division ------------------------ */

#[test]
fn division_par_zero_textuel() {
    assert_eq!(affichage(&[Cinq, Division, Zero, Egal]), ERREUR);
}

#[test]
fn garde_textuelle_contournee_par_point_zero() {
    // après "÷" : 0 -> "0", puis . REMPLACE -> ".", puis 0 -> ".0".
    // ".0" n'est PAS le texte "0" : la garde ne joue pas, f32 divise -> inf
    assert_eq!(
        affichage(&[Cinq, Division, Zero, Point, Zero, Egal]),
        "inf"
    );
}

#[test]
fn chiffre_apres_erreur_remplace() {
    // ERREUR se remplace comme le "0" initial, pas de concaténation dessus
    assert_eq!(affichage(&[Cinq, Division, Zero, Egal, Huit]), "8");
}

/* ------------------------ "=" : no-op et idempotence ------------------------ */

#[test]
fn egal_sur_attente_vide_noop() {
    assert_eq!(affichage(&[Quatre, Deux, Egal]), "42");
    assert_eq!(affichage(&[Egal]), "0");
}

#[test]
fn double_egal_idempotent() {
    // après la première évaluation l'attente est vide : le second "=" ne
    // change rien
    let m = apres(&[Un, Plus, Deux, Egal, Egal]);
    assert_eq!(m.affichage(), "3");
    assert!(m.en_attente().is_empty());
}

#[test]
fn egal_sans_second_operande() {
    // [1, +, =] : l'affichage vide vaut 0 comme second opérande
    assert_eq!(affichage(&[Un, Plus, Egal]), "1");
}

/* ------------------------ Remise (AC / +/- / %) ------------------------ */

#[test]
fn remise_en_pleine_saisie() {
    let m = apres(&[Un, Deux, Plus, Trois, Ac]);
    assert_eq!(m.affichage(), "");
    assert!(m.en_attente().is_empty());
}

#[test]
fn remise_depuis_erreur() {
    let m = apres(&[Cinq, Division, Zero, Egal, Ac]);
    assert_eq!(m.affichage(), "");
    assert!(m.en_attente().is_empty());
}

#[test]
fn plus_moins_et_pourcent_remettent_aussi() {
    for touche in [PlusMoins, Pourcent] {
        let m = apres(&[Un, Plus, Deux, touche]);
        assert_eq!(m.affichage(), "", "{touche:?}");
        assert!(m.en_attente().is_empty(), "{touche:?}");
    }
}

#[test]
fn saisie_apres_remise() {
    // l'affichage vide accepte la concaténation directe
    assert_eq!(affichage(&[Ac, Quatre, Deux]), "42");
}

/* ------------------------ Enchaînements conservés ------------------------ */

#[test]
fn resultat_puis_chiffre_concatene() {
    // rien ne distingue un résultat d'une saisie : "3" puis 7 donne "37"
    assert_eq!(affichage(&[Un, Plus, Deux, Egal, Sept]), "37");
}

#[test]
fn deux_operateurs_gelent_egal() {
    // deux opérateurs d'affilée empilent deux paires ; "=" ne réduit plus
    let m = apres(&[Un, Plus, Plus]);
    assert_eq!(m.en_attente().len(), 4);

    let m2 = apres(&[Un, Plus, Plus, Deux, Egal]);
    assert_eq!(m2.affichage(), "2");
    assert_eq!(m2.en_attente().len(), 4);

    // AC débloque
    let m3 = apres(&[Un, Plus, Plus, Ac, Un, Plus, Deux, Egal]);
    assert_eq!(m3.affichage(), "3");
}

#[test]
fn erreur_reprise_comme_operande_vaut_zero() {
    // ERREUR empilé comme opérande parse en 0.0
    assert_eq!(
        affichage(&[Cinq, Division, Zero, Egal, Plus, Trois, Egal]),
        "3"
    );
}
