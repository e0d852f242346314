//! The `bqnexus init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("bqnexus.toml").exists() {
        println!("bqnexus.toml already exists, skipping.");
    } else {
        std::fs::write("bqnexus.toml", SAMPLE_CONFIG)?;
        println!("Created bqnexus.toml");
    }

    std::fs::create_dir_all("data")?;
    let bank_path = std::path::Path::new("data/questoes.json");
    if bank_path.exists() {
        println!("data/questoes.json already exists, skipping.");
    } else {
        std::fs::write(bank_path, SAMPLE_BANK)?;
        println!("Created data/questoes.json");
    }

    println!("\nNext steps:");
    println!("  1. Replace data/questoes.json with your question bank");
    println!("  2. Run: bqnexus validate");
    println!("  3. Run: bqnexus summary --errors true");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# bqnexus configuration

[source]
type = "file"
path = "data/questoes.json"
# type = "http"
# url = "${BQNEXUS_BANK_URL}"

[defaults]
cycle = "Ciclo Básico"
modality = "PBL"
quantity = 20
unanswered = true
errors = false
"#;

const SAMPLE_BANK: &str = include_str!("../../assets/questoes.json");
