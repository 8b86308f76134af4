// Fichier principal de la bibliothèque SRPA
// Expose tous les modules pour utilisation externe (par le binaire et les tests)

pub mod types;      // Types de base (Colour, Direction, InitPattern)
pub mod error;      // Erreurs fatales de la simulation
pub mod config;     // Lecture et validation des paramètres
pub mod floor;      // Gestion du sol et motifs d'initialisation
pub mod robot;      // Logique des robots peintres
pub mod simulation; // Boucle de simulation et instantanés

// Ré-exportation des types principaux pour faciliter l'importation
pub use types::*;
pub use error::SimulationError;
pub use config::Params;
pub use floor::Floor;
pub use robot::{Robot, RobotSet};
pub use simulation::Simulation;
