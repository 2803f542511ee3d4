//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le moteur d'expression — injecté par valeur dans l'app,
//! pas de singleton global — et relayer les appuis de touches.
//!
//! Contrats (version UI) :
//! - Aucune arithmétique ici : tout passe par Moteur::recevoir.
//! - La vue LIT l'affichage via texte_affichage(), jamais en écriture.

use crate::noyau::{Bouton, Moteur};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    moteur: Moteur,
}

impl AppCalc {
    /// Relaye un appui de touche au moteur.
    pub fn appuyer(&mut self, bouton: Bouton) {
        self.moteur.recevoir(bouton);
    }

    /// AC : remise à zéro totale (affichage + expression en attente).
    pub fn remise_a_zero(&mut self) {
        self.moteur.recevoir(Bouton::Ac);
    }

    /// Texte à rendre dans le bandeau d'affichage.
    pub fn texte_affichage(&self) -> &str {
        self.moteur.affichage()
    }

    /// Rappel de l'expression en attente ("12 +") ; vide hors attente.
    pub fn texte_attente(&self) -> String {
        self.moteur.en_attente().join(" ")
    }
}
