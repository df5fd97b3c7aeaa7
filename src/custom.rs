use {
    anyhow::Result,
    comfy_table::{
        modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, Color,
        ContentArrangement, Table,
    },
    crossterm::style::Stylize,
    fancy_regex::Regex,
};

use crate::{
    core::exec::{self, Platform},
    store::{CustomCommand, CustomStore},
    ui,
};

/// A parsed `custom <package> "<friendly>" : "<actual>"` definition.
#[derive(Debug, PartialEq, Eq)]
struct AddSpec {
    package: String,
    friendly: String,
    actual: String,
}

/// Accepts the colon form, the colon-less two-quote form, and as a
/// last resort any input whose first word is the package and which
/// carries at least two quoted substrings.
fn parse_add(args: &str) -> Option<AddSpec> {
    let colon_form = Regex::new(r#"^(\S+)\s+"([^"]+)"\s*:\s*"([^"]+)"$"#).ok()?;
    if let Some(caps) = colon_form.captures(args).ok()? {
        return Some(AddSpec {
            package: caps.get(1)?.as_str().to_string(),
            friendly: caps.get(2)?.as_str().to_string(),
            actual: caps.get(3)?.as_str().to_string(),
        });
    }

    let space_form = Regex::new(r#"^(\S+)\s+"([^"]+)"\s+"([^"]+)"$"#).ok()?;
    if let Some(caps) = space_form.captures(args).ok()? {
        return Some(AddSpec {
            package: caps.get(1)?.as_str().to_string(),
            friendly: caps.get(2)?.as_str().to_string(),
            actual: caps.get(3)?.as_str().to_string(),
        });
    }

    if args.split_whitespace().count() >= 3 {
        let package = args.split_whitespace().next()?.to_string();
        let quoted = Regex::new(r#""[^"]+""#).ok()?;
        let mut found = quoted
            .find_iter(args)
            .filter_map(|m| m.ok())
            .map(|m| m.as_str().trim_matches('"').to_string());
        let friendly = found.next()?;
        let actual = found.next()?;
        return Some(AddSpec {
            package,
            friendly,
            actual,
        });
    }

    None
}

fn add(spec: AddSpec, store: &dyn CustomStore) -> Result<()> {
    let mut map = store.read();
    map.entry(spec.package.clone()).or_default().insert(
        spec.friendly.clone(),
        CustomCommand {
            cmd: spec.actual.clone(),
            desc: format!("Custom: {}", spec.actual),
        },
    );
    store.write(&map)?;

    println!();
    ui::print_success("Custom command added successfully!");
    println!();
    println!("    Package:  {}", spec.package.as_str().cyan());
    println!("    Friendly: {}", spec.friendly.as_str().green());
    println!("    Runs:     {}", spec.actual.as_str().white());
    println!();
    println!(
        "{}{}",
        "  Usage: ".dark_grey(),
        format!("plainterm {} {}", spec.package, spec.friendly).cyan()
    );
    println!();
    Ok(())
}

fn remove(package: &str, friendly: &str, store: &dyn CustomStore) -> Result<()> {
    let mut map = store.read();
    let removed = match map.get_mut(package) {
        Some(entries) => entries.remove(friendly).is_some(),
        None => false,
    };

    if removed {
        // Drop the package key once its last command is gone.
        if map.get(package).is_some_and(|entries| entries.is_empty()) {
            map.remove(package);
        }
        store.write(&map)?;
        println!();
        ui::print_success(&format!("Removed: {} \"{}\"", package, friendly));
        println!();
    } else {
        println!();
        ui::print_warning(&format!("Command not found: {} \"{}\"", package, friendly));
        println!();
    }
    Ok(())
}

fn list(store: &dyn CustomStore) {
    let map = store.read();

    println!();
    if map.is_empty() {
        println!("{}", "  No custom commands defined yet.".yellow());
        println!();
        println!("  Add one with:");
        println!(
            "{}",
            "    plainterm custom <package> \"<friendly command>\" : \"<actual command>\"".cyan()
        );
        println!();
        println!("  Examples:");
        println!(
            "{}",
            "    plainterm custom deploy \"push\" : \"git push origin main && npm run build\""
                .green()
        );
        println!(
            "{}",
            "    plainterm custom npm \"quick test\" : \"npm run test -- --watch\"".green()
        );
        println!();
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Package", "Friendly Command", "Actual Command"]);

    for (package, entries) in &map {
        table.add_row(vec![
            Cell::new(package.to_uppercase())
                .add_attribute(Attribute::Bold)
                .fg(Color::Yellow),
            Cell::new(""),
            Cell::new(""),
        ]);
        for (friendly, entry) in entries {
            table.add_row(vec![
                Cell::new(""),
                Cell::new(format!("{} {}", package, friendly)).fg(Color::Green),
                Cell::new(truncate(&entry.cmd, 53)),
            ]);
        }
    }

    println!("  {}", "YOUR CUSTOM COMMANDS".cyan().bold());
    println!("{table}");
    println!();
    if let Some(path) = store.location() {
        println!("{}", format!("  Config file: {}", path.display()).dark_grey());
        println!();
    }
}

fn truncate(cmd: &str, max: usize) -> String {
    if cmd.chars().count() > max {
        let kept: String = cmd.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        cmd.to_string()
    }
}

fn edit(store: &dyn CustomStore) -> Result<()> {
    let Some(path) = store.location() else {
        ui::print_error("This store has no editable file");
        return Ok(());
    };
    let path = path.to_path_buf();

    if !path.exists() {
        store.write(&store.read())?;
    }

    let fallback = match Platform::current() {
        Platform::Unix => "nano",
        Platform::Windows => "notepad",
    };
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| fallback.to_string());

    println!();
    println!("{}", format!("  Opening {}...", path.display()).dark_grey());
    println!();
    let status = std::process::Command::new(&editor).arg(&path).status();
    if status.is_err() {
        ui::print_error("Could not open editor");
    }
    Ok(())
}

fn clear(store: &dyn CustomStore) -> Result<()> {
    store.write(&Default::default())?;
    println!();
    ui::print_success("All custom commands cleared");
    println!();
    Ok(())
}

/// Entry point for `plainterm custom ...`.
pub fn handle(words: &[String], store: &dyn CustomStore) -> Result<()> {
    let first = words.first().map(String::as_str);

    match first {
        None | Some("help") => {
            print_custom_help(store);
            Ok(())
        }
        Some("list") | Some("show") => {
            list(store);
            Ok(())
        }
        Some("remove") | Some("delete") => {
            let package = words.get(1);
            let friendly = words.get(2..).filter(|rest| !rest.is_empty());
            match (package, friendly) {
                (Some(package), Some(rest)) => remove(package, &rest.join(" "), store),
                _ => {
                    println!();
                    ui::print_error("Usage: plainterm custom remove <package> \"<command>\"");
                    println!();
                    println!("  Example:");
                    println!("{}", "    plainterm custom remove npm \"quick test\"".cyan());
                    println!();
                    Ok(())
                }
            }
        }
        Some("edit") => edit(store),
        Some("clear") => clear(store),
        Some(_) => {
            let joined = words.join(" ");
            match parse_add(&joined) {
                Some(spec) => add(spec, store),
                None => {
                    println!();
                    ui::print_error("Could not parse command");
                    println!();
                    println!("  Format:");
                    println!(
                        "{}",
                        "    plainterm custom <package> \"<friendly command>\" : \"<actual command>\""
                            .cyan()
                    );
                    println!();
                    println!("  Examples:");
                    println!(
                        "{}",
                        "    plainterm custom deploy \"push\" : \"git push origin main\"".green()
                    );
                    println!(
                        "{}",
                        "    plainterm custom npm \"quick test\" : \"npm run test --watch\"".green()
                    );
                    println!();
                    Ok(())
                }
            }
        }
    }
}

/// Dispatches `plainterm <package> <phrase...>` for a user-defined
/// package. Returns false when the package has no custom commands at
/// all, so the caller can print its unknown-tool advisory.
pub fn run_package(package: &str, words: &[String], store: &dyn CustomStore) -> bool {
    let map = store.read();
    let Some(entries) = map.get(package).filter(|entries| !entries.is_empty()) else {
        return false;
    };

    let input = words.join(" ");
    let input = input.trim();

    if input.is_empty() || input == "help" {
        print_package_help(package, entries);
        return true;
    }

    match entries.get(input) {
        Some(entry) => exec::run_command(&entry.cmd),
        None => {
            println!();
            ui::print_warning(&format!("No custom command \"{}\" in {}", input, package));
            print_package_help(package, entries);
        }
    }
    true
}

fn print_package_help(
    package: &str,
    entries: &std::collections::BTreeMap<String, CustomCommand>,
) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Friendly Command", "Actual Command", "What It Does"]);

    for (friendly, entry) in entries {
        table.add_row(vec![
            Cell::new(format!("{} {}", package, friendly)).fg(Color::Green),
            Cell::new(truncate(&entry.cmd, 43)).fg(Color::White),
            Cell::new("Custom command"),
        ]);
    }

    println!();
    println!("  {}", format!("{} (CUSTOM)", package.to_uppercase()).cyan().bold());
    println!("{table}");
    println!();
}

fn print_custom_help(store: &dyn CustomStore) {
    println!();
    println!(
        "{}",
        r#"  ╔════════════════════════════════════════════════════════════╗
  ║                                                            ║
  ║   Custom Commands - Create Your Own Shortcuts              ║
  ║                                                            ║
  ╚════════════════════════════════════════════════════════════╝"#
            .green()
    );
    println!();

    println!("{}", "  Adding Commands:\n".magenta());
    println!(
        "{}",
        "    Format: plainterm custom <package> \"<friendly>\" : \"<actual>\"".white()
    );
    println!();
    println!("{}", "    Create a new package:".dark_grey());
    println!(
        "      {}",
        "plainterm custom deploy \"push\" : \"git push origin main && npm run build\"".green()
    );
    println!(
        "      {}{}",
        "-> Now use: ".dark_grey(),
        "plainterm deploy push".cyan()
    );
    println!();
    println!("{}", "    Extend existing tools (npm, git, etc):".dark_grey());
    println!(
        "      {}",
        "plainterm custom npm \"quick test\" : \"npm run test -- --watch\"".green()
    );
    println!(
        "      {}{}",
        "-> Now use: ".dark_grey(),
        "plainterm npm quick test".cyan()
    );
    println!();

    println!("{}", "  Managing Commands:\n".magenta());
    println!(
        "    {}                    {}",
        "plainterm custom list".green(),
        "See all custom commands".white()
    );
    println!(
        "    {}    {}",
        "plainterm custom remove <pkg> \"<cmd>\"".green(),
        "Remove a command".white()
    );
    println!(
        "    {}                    {}",
        "plainterm custom edit".green(),
        "Edit config file directly".white()
    );
    println!(
        "    {}                   {}",
        "plainterm custom clear".green(),
        "Remove all custom commands".white()
    );
    println!();

    println!("{}", "  How It Works:\n".magenta());
    println!(
        "{}",
        "    Custom commands are checked FIRST before built-in commands.".white()
    );
    println!(
        "{}",
        "    This means you can override existing commands if needed!".white()
    );
    println!();
    println!(
        "{}",
        "    Example: Override \"git show changes\" to do something different:".dark_grey()
    );
    println!(
        "      {}",
        "plainterm custom git \"show changes\" : \"git status --short\"".green()
    );
    println!();

    if let Some(path) = store.location() {
        println!("{}", "  Config Location:\n".magenta());
        println!("{}", format!("    {}", path.display()).dark_grey());
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_accepts_the_colon_form() {
        let spec = parse_add(r#"deploy "push" : "git push origin main && npm run build""#).unwrap();
        assert_eq!(spec.package, "deploy");
        assert_eq!(spec.friendly, "push");
        assert_eq!(spec.actual, "git push origin main && npm run build");
    }

    #[test]
    fn parse_accepts_a_tight_colon() {
        let spec = parse_add(r#"npm "quick test":"npm run test -- --watch""#).unwrap();
        assert_eq!(spec.friendly, "quick test");
        assert_eq!(spec.actual, "npm run test -- --watch");
    }

    #[test]
    fn parse_accepts_the_colonless_form() {
        let spec = parse_add(r#"git "yolo" "git add . && git commit -m 'update'""#).unwrap();
        assert_eq!(spec.package, "git");
        assert_eq!(spec.friendly, "yolo");
        assert_eq!(spec.actual, "git add . && git commit -m 'update'");
    }

    #[test]
    fn parse_falls_back_to_first_two_quoted_substrings() {
        let spec = parse_add(r#"deploy please add "push" as "git push" thanks"#).unwrap();
        assert_eq!(spec.package, "deploy");
        assert_eq!(spec.friendly, "push");
        assert_eq!(spec.actual, "git push");
    }

    #[test]
    fn parse_rejects_unquoted_input() {
        assert!(parse_add("deploy push git push").is_none());
        assert!(parse_add(r#"deploy "push""#).is_none());
    }

    #[test]
    fn add_then_dispatch_under_the_custom_package() {
        let store = MemStore::empty();
        handle(
            &words(&["deploy", "\"push\"", ":", "\"git push origin main && npm run build\""]),
            &store,
        )
        .unwrap();

        let map = store.read();
        assert_eq!(
            map["deploy"]["push"].cmd,
            "git push origin main && npm run build"
        );
        assert_eq!(
            map["deploy"]["push"].desc,
            "Custom: git push origin main && npm run build"
        );
    }

    #[test]
    fn remove_prunes_an_emptied_package() {
        let store = MemStore::empty();
        handle(&words(&["deploy", "\"push\"", ":", "\"git push\""]), &store).unwrap();
        handle(&words(&["remove", "deploy", "push"]), &store).unwrap();
        assert!(store.read().get("deploy").is_none());
    }

    #[test]
    fn remove_with_a_multi_word_phrase_joins_the_tail() {
        let store = MemStore::empty();
        handle(&words(&["npm", "\"quick test\"", ":", "\"npm run test -- --watch\""]), &store)
            .unwrap();
        handle(&words(&["remove", "npm", "quick", "test"]), &store).unwrap();
        assert!(store.read().get("npm").is_none());
    }

    #[test]
    fn clear_empties_the_store() {
        let store = MemStore::empty();
        handle(&words(&["deploy", "\"push\"", ":", "\"git push\""]), &store).unwrap();
        handle(&words(&["clear"]), &store).unwrap();
        assert!(store.read().is_empty());
    }

    #[test]
    fn unparseable_add_leaves_the_store_untouched() {
        let store = MemStore::empty();
        handle(&words(&["deploy", "push", "git", "push"]), &store).unwrap();
        assert!(store.read().is_empty());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let wide = "好".repeat(20);
        assert_eq!(truncate(&wide, 53), wide);
        let long_wide = "好".repeat(60);
        assert_eq!(truncate(&long_wide, 53), format!("{}...", "好".repeat(50)));
        let accented = truncate("déploiement très très long vers le serveur de préproduction", 53);
        assert!(accented.ends_with("..."));
        assert_eq!(accented.chars().count(), 53);
        let long_ascii = "x".repeat(60);
        assert_eq!(truncate(&long_ascii, 53), format!("{}...", "x".repeat(50)));
    }

    #[test]
    fn unknown_package_is_not_claimed() {
        let store = MemStore::empty();
        assert!(!run_package("deploy", &words(&["push"]), &store));
    }
}
