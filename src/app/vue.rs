// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Bandeau d'affichage : gros texte monospace, aligné à droite
// - Pavé 5 rangées (disposition RANGEES), le "0" sur deux colonnes
// - Couleurs par rôle : remise en gris clair, opérateurs en gris foncé,
//   chiffres en vert
// - Clavier : Enter = "=" (Échap est géré dans app.rs, au niveau global)

use eframe::egui;

use crate::noyau::bouton::RANGEES;
use crate::noyau::{Bouton, Categorie};

use super::etat::AppCalc;

/// Dimensions d'une touche (tactile : gros boutons).
const LARGEUR_TOUCHE: f32 = 92.0;
const HAUTEUR_TOUCHE: f32 = 64.0;
const ESPACEMENT: f32 = 12.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACEMENT, ESPACEMENT);

        // Enter = "=" (clavier PC ; pas de champ texte, donc pas de focus à gérer)
        if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.appuyer(Bouton::Egal);
        }

        self.ui_affichage(ui);
        ui.add_space(ESPACEMENT);
        self.ui_pave(ui);
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // rappel discret de l'expression en attente ("12 +")
        let attente = self.texte_attente();
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(egui::Label::new(
                egui::RichText::new(attente)
                    .monospace()
                    .size(18.0)
                    .color(egui::Color32::GRAY),
            ));
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(self.texte_affichage())
                        .monospace()
                        .size(56.0)
                        .color(egui::Color32::WHITE),
                )
                .truncate(),
            );
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        for rangee in RANGEES {
            ui.horizontal(|ui| {
                for &bouton in rangee {
                    self.touche(ui, bouton);
                }
            });
        }
    }

    fn touche(&mut self, ui: &mut egui::Ui, bouton: Bouton) {
        // le "0" prend deux colonnes (largeur double + un espacement)
        let largeur = if bouton == Bouton::Zero {
            LARGEUR_TOUCHE * 2.0 + ESPACEMENT
        } else {
            LARGEUR_TOUCHE
        };

        let resp = ui.add_sized(
            [largeur, HAUTEUR_TOUCHE],
            egui::Button::new(
                egui::RichText::new(bouton.titre())
                    .size(28.0)
                    .color(egui::Color32::WHITE),
            )
            .fill(couleur_touche(bouton))
            .corner_radius(egui::CornerRadius::same(32)),
        );

        if resp.clicked() {
            self.appuyer(bouton);
        }
    }
}

/// Couleurs du pavé, par rôle.
fn couleur_touche(bouton: Bouton) -> egui::Color32 {
    match bouton.categorie() {
        Categorie::Remise => egui::Color32::from_gray(170),
        Categorie::Operateur | Categorie::Egal => egui::Color32::from_gray(64),
        Categorie::Chiffre => egui::Color32::from_rgb(52, 130, 70),
    }
}
