use std::panic;

use color_eyre::eyre::Result;

use crate::ui::tui::restore_terminal;

/// Installs color-eyre reports. Panics restore the terminal before printing,
/// so the report is readable outside the alternate screen.
pub fn install_hooks() -> Result<()> {
    let hook_builder = color_eyre::config::HookBuilder::default().display_env_section(false);
    let (panic_hook, eyre_hook) = hook_builder.into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        tracing::error!(panic = %panic_info, "application panicked");
        eprintln!("{}", panic_hook.panic_report(panic_info));
    }));

    Ok(())
}
