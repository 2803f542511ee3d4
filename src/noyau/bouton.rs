// src/noyau/bouton.rs
//
// Pavé de la calculatrice : identités de touches + classification.
// - Bouton     : ensemble fermé (chiffres, point, opérateurs, =, AC, +/-, %)
// - titre()    : glyphe EXACT rendu sur la touche ET recopié dans l'affichage
// - categorie(): sémantique (chiffre / opérateur binaire / égal / remise)
//
// NOTE: le glyphe empilé dans l'expression en attente est aussi celui sur
// lequel le moteur dispatche à l'évaluation — même chaîne des deux côtés
// ("×", "÷"), sinon l'opération retombe sur l'addition.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bouton {
    Zero,
    Un,
    Deux,
    Trois,
    Quatre,
    Cinq,
    Six,
    Sept,
    Huit,
    Neuf,
    Point,

    Plus,
    Moins,
    Fois,
    Division,
    Egal,

    Ac,
    PlusMoins,
    Pourcent,
}

/// Sémantique d'une touche. AC, +/- et % partagent la même transition
/// (remise) : trois membres d'un même variant, pas trois comportements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    Chiffre,
    Operateur,
    Egal,
    Remise,
}

impl Bouton {
    /// Toutes les touches du pavé (ensemble fermé).
    pub const TOUS: [Bouton; 19] = [
        Bouton::Zero,
        Bouton::Un,
        Bouton::Deux,
        Bouton::Trois,
        Bouton::Quatre,
        Bouton::Cinq,
        Bouton::Six,
        Bouton::Sept,
        Bouton::Huit,
        Bouton::Neuf,
        Bouton::Point,
        Bouton::Plus,
        Bouton::Moins,
        Bouton::Fois,
        Bouton::Division,
        Bouton::Egal,
        Bouton::Ac,
        Bouton::PlusMoins,
        Bouton::Pourcent,
    ];

    /// Glyphe affiché sur la touche (et recopié tel quel dans l'affichage
    /// pour les chiffres, dans l'expression en attente pour les opérateurs).
    pub fn titre(self) -> &'static str {
        match self {
            Bouton::Zero => "0",
            Bouton::Un => "1",
            Bouton::Deux => "2",
            Bouton::Trois => "3",
            Bouton::Quatre => "4",
            Bouton::Cinq => "5",
            Bouton::Six => "6",
            Bouton::Sept => "7",
            Bouton::Huit => "8",
            Bouton::Neuf => "9",
            Bouton::Point => ".",

            Bouton::Plus => "+",
            Bouton::Moins => "-",
            Bouton::Fois => "×",
            Bouton::Division => "÷",
            Bouton::Egal => "=",

            Bouton::Ac => "AC",
            Bouton::PlusMoins => "+/-",
            Bouton::Pourcent => "%",
        }
    }

    /// Classification pure : pas d'effet de bord, pas de cas d'erreur
    /// (le domaine est fermé et exhaustif).
    pub fn categorie(self) -> Categorie {
        match self {
            Bouton::Ac | Bouton::PlusMoins | Bouton::Pourcent => Categorie::Remise,
            Bouton::Plus | Bouton::Moins | Bouton::Fois | Bouton::Division => Categorie::Operateur,
            Bouton::Egal => Categorie::Egal,
            _ => Categorie::Chiffre,
        }
    }
}

/// Disposition du pavé, rangée par rangée (le "0" occupe deux colonnes,
/// géré dans la vue).
pub const RANGEES: [&[Bouton]; 5] = [
    &[Bouton::Ac, Bouton::PlusMoins, Bouton::Pourcent, Bouton::Division],
    &[Bouton::Sept, Bouton::Huit, Bouton::Neuf, Bouton::Fois],
    &[Bouton::Quatre, Bouton::Cinq, Bouton::Six, Bouton::Moins],
    &[Bouton::Un, Bouton::Deux, Bouton::Trois, Bouton::Plus],
    &[Bouton::Zero, Bouton::Point, Bouton::Egal],
];
