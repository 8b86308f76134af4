// SRPA - Simulation de Robots Peintres Autonomes
// Lit les paramètres, initialise le sol et les robots, puis exécute la
// boucle de peinture et écrit les instantanés dans le fichier de sortie

use srpa::config::Params;
use srpa::simulation::Simulation;

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🎨 SRPA - Simulation de Robots Peintres Autonomes");
    println!("==================================================");

    // NOTE - Input file path from argv, robots_input.txt otherwise
    let input_path = env::args().nth(1).unwrap_or_else(|| "robots_input.txt".to_string());

    // === PHASE 1: LECTURE DES PARAMÈTRES ===

    println!("📋 Étape 1: Lecture des paramètres depuis {}...", input_path);
    let params = match Params::from_file(&input_path) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("❌ ERREUR: {}", e);
            eprintln!("💡 Format attendu: lignes/colonnes/robots/motif/graine/itérations/intervalle/sortie");
            return Err(e.into());
        }
    };
    println!(
        "✅ Paramètres valides: sol {}x{}, {} robots, motif {:?}, graine {}.",
        params.rows, params.cols, params.robot_count, params.init_pattern, params.seed
    );

    // === PHASE 2: INITIALISATION DE LA SIMULATION ===

    println!("🏗️  Étape 2: Initialisation du sol et des robots...");
    let mut simulation = match Simulation::new(&params) {
        Ok(simulation) => simulation,
        Err(e) => {
            eprintln!("❌ ERREUR: {}", e);
            return Err(e.into());
        }
    };
    println!("✅ Sol initialisé, {} robots déployés.", simulation.robots.len());

    // === PHASE 3: EXÉCUTION DE LA BOUCLE DE PEINTURE ===

    println!("🖌️  Étape 3: Exécution de {} itérations...", params.iterations);
    let output = match File::create(&params.output_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("❌ ERREUR: impossible de créer le fichier de sortie {}: {}", params.output_path, e);
            return Err(e.into());
        }
    };
    let mut writer = BufWriter::new(output);

    if let Err(e) = simulation.run(&mut writer) {
        eprintln!("❌ ERREUR: {}", e);
        return Err(e.into());
    }
    writer.flush()?;

    println!("✅ Simulation terminée. Instantanés écrits dans {}.", params.output_path);
    Ok(())
}
