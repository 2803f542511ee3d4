//! src/noyau/moteur.rs
//!
//! Moteur d'expression (machine à états).
//!
//! Rôle : porter l'affichage et l'expression en attente, et appliquer la
//! transition d'un appui de touche, de la saisie jusqu'au résultat.
//!
//! Contrats :
//! - recevoir() est synchrone : un appui à la fois, aucun travail de fond.
//! - L'expression en attente est vide ou [operande, opérateur] ; "=" ne
//!   réduit QUE cet état-là. (Deux opérateurs d'affilée l'allongent par
//!   paires et gèlent "=" jusqu'à AC.)
//! - Seule erreur possible : division par l'affichage textuel "0" -> ERREUR.
//!   Tout le reste dégrade en silence (opérande illisible = 0.0).
//! - La vue LIT l'affichage, jamais en écriture : champs privés.

use super::bouton::{Bouton, Categorie};
use super::nombre::{format_nombre, parse_ou_zero};

/// Sentinel d'erreur (chaîne fixe, non localisée).
pub const ERREUR: &str = "Erreur";

#[derive(Clone, Debug)]
pub struct Moteur {
    affichage: String,
    expression: Vec<String>,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            expression: Vec::new(),
        }
    }
}

impl Moteur {
    /// Texte courant de l'affichage (opérande en saisie, résultat, ou ERREUR).
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    /// Jetons en attente, en lecture seule : vide ou [operande, opérateur].
    pub fn en_attente(&self) -> &[String] {
        &self.expression
    }

    /// Point d'entrée unique : applique un appui de touche.
    pub fn recevoir(&mut self, bouton: Bouton) {
        match bouton.categorie() {
            Categorie::Remise => {
                self.expression.clear();
                self.affichage.clear();
            }

            Categorie::Operateur => {
                let operande = std::mem::take(&mut self.affichage);
                self.expression.push(operande);
                self.expression.push(bouton.titre().to_string());
            }

            Categorie::Egal => self.evaluer(),

            Categorie::Chiffre => {
                // "0" et ERREUR se REMPLACENT (chiffre OU point, le zéro de
                // tête est perdu) ; sinon on concatène.
                if self.affichage == "0" || self.affichage == ERREUR {
                    self.affichage = bouton.titre().to_string();
                } else {
                    self.affichage.push_str(bouton.titre());
                }
            }
        }
    }

    /// Réduit [operande, opérateur] + affichage courant en un résultat.
    /// No-op si l'expression en attente n'a pas exactement deux jetons.
    fn evaluer(&mut self) {
        if self.expression.len() != 2 {
            return;
        }
        let Some(operateur) = self.expression.pop() else {
            return;
        };
        let Some(operande) = self.expression.pop() else {
            return;
        };

        let a = parse_ou_zero(&operande);
        self.affichage = match operateur.as_str() {
            "-" => format_nombre(a - parse_ou_zero(&self.affichage)),
            "×" => format_nombre(a * parse_ou_zero(&self.affichage)),
            "÷" => {
                // Garde TEXTUELLE : seul l'affichage exactement "0" déclenche
                // l'erreur ; ".0" passe et divise normalement (-> inf).
                if self.affichage == "0" {
                    ERREUR.to_string()
                } else {
                    format_nombre(a / parse_ou_zero(&self.affichage))
                }
            }
            // "+" et tout jeton d'opérateur non reconnu : addition.
            _ => format_nombre(a + parse_ou_zero(&self.affichage)),
        };
    }
}
