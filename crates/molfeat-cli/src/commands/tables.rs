use crate::cli::TablesArgs;
use crate::config;
use crate::error::Result;
use molfeat::core::reference::elements::ElementTable;
use molfeat::core::reference::states::ValenceStateTable;
use tracing::info;

/// Forces a parse of both reference tables and reports their sizes, so a
/// broken data directory surfaces before any long load.
pub fn run(args: TablesArgs) -> Result<()> {
    let (elements_path, states_path) = config::resolve_tables(&args)?;

    let elements = ElementTable::new(&elements_path);
    let element_count = elements.len()?;
    info!("Element table '{}' parsed", elements_path.display());

    let states = ValenceStateTable::new(&states_path);
    let state_count = states.len()?;
    info!("Valence-state table '{}' parsed", states_path.display());

    println!(
        "{}: {} element(s)",
        elements_path.display(),
        element_count
    );
    println!(
        "{}: {} valence-state entr{}",
        states_path.display(),
        state_count,
        if state_count == 1 { "y" } else { "ies" }
    );
    Ok(())
}
