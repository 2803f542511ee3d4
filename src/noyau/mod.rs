//! Noyau calculatrice (sans UI)
//!
//! Organisation interne :
//! - bouton.rs : touches + classification (titre, catégorie, disposition)
//! - nombre.rs : texte -> f32 -> texte (repli zéro explicite)
//! - moteur.rs : machine à états (affichage + expression en attente)

pub mod bouton;
pub mod moteur;
pub mod nombre;

#[cfg(test)]
mod tests_sequences;


// API publique minimale
pub use bouton::{Bouton, Categorie};
pub use moteur::{Moteur, ERREUR};
