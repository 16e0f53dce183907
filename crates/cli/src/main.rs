use stockledger_inventory::InventoryConfig;
use stockledger_observability::LogConfig;

fn main() -> anyhow::Result<()> {
    stockledger_observability::init(&LogConfig::default())?;

    let config = InventoryConfig::default();
    let stdout = std::io::stdout();
    stockledger_cli::run_demo(&config, &mut stdout.lock())?;
    Ok(())
}
