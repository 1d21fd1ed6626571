use genomelab::analysis::ProtParamAnalyzer;
use genomelab::config::ConfigManager;
use genomelab::engines::generation::{ConsoleProgressCallback, EvolutionConfig, EvolutionEngine};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut config_path = None;
    let mut emit_json = false;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            emit_json = true;
        } else {
            config_path = Some(arg);
        }
    }

    let manager = ConfigManager::new();
    if let Some(path) = &config_path {
        manager.load_from_file(path)?;
    }
    let app_config = manager.get();

    let analyzer = Arc::new(ProtParamAnalyzer::new());
    let mut engine = EvolutionEngine::new(EvolutionConfig::from(&app_config), analyzer)?;
    let result = engine.run(ConsoleProgressCallback)?;

    println!("\nFinal champion protein:");
    println!("{}", result.champion.protein);
    println!("Fitness: {:.4}", result.champion.fitness);
    if let Some(profile) = &result.champion.profile {
        println!("Molecular weight: {:.1} kDa", profile.weight_kda);
        println!("Isoelectric point: {:.2} pI", profile.isoelectric_point);
        println!("Alpha helix content: {:.1}%", profile.helix_pct);
    }

    if emit_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
