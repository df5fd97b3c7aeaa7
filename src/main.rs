pub mod args;
pub mod core;
pub mod custom;
pub mod help;
pub mod mode;
pub mod namespaces;
pub mod reference;
pub mod setup;
pub mod store;
pub mod tour;
pub mod ui;

use {
    anyhow::{Context, Result},
    args::ManualFormat,
    store::JsonFileStore,
};

fn main() -> Result<()> {
    let cmd = crate::args::ClapArgumentLoader::load()?;

    match cmd.command {
        | crate::args::Command::Manual { path, format } => {
            std::fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            match format {
                | ManualFormat::Manpages => {
                    reference::build_manpages(&path)?;
                },
                | ManualFormat::Markdown => {
                    reference::build_markdown(&path)?;
                },
            }
            Ok(())
        },
        | crate::args::Command::Autocomplete { path, shell } => {
            std::fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            reference::build_shell_completion(&path, &shell)?;
            Ok(())
        },
        | crate::args::Command::Tool { namespace, words } => {
            let store = JsonFileStore::default_location();
            namespaces::execute(namespace, &words, &store)
        },
        | crate::args::Command::CustomPackage { package, words } => {
            let store = JsonFileStore::default_location();
            if !custom::run_package(&package, &words, &store) {
                println!();
                ui::print_warning(&format!("Unknown tool: {}", package));
                println!();
                println!("  Run \"plainterm help\" to see supported tools, or define your own:");
                println!(
                    "    plainterm custom {} \"<friendly command>\" : \"<actual command>\"",
                    package
                );
                println!();
            }
            Ok(())
        },
        | crate::args::Command::Custom { words } => {
            let store = JsonFileStore::default_location();
            custom::handle(&words, &store)
        },
        | crate::args::Command::Mode { mode } => mode::handle(mode.as_deref()),
        | crate::args::Command::Learn { tool } => {
            help::learn(tool.as_deref());
            Ok(())
        },
        | crate::args::Command::Tour { quick } => {
            if quick {
                tour::run_quick();
                Ok(())
            } else {
                tour::run()
            }
        },
        | crate::args::Command::Setup => setup::run(),
        | crate::args::Command::MainHelp => {
            help::main_help();
            Ok(())
        },
    }
}
