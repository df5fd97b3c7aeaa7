use {
    comfy_table::{
        modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, Color,
        ContentArrangement, Table,
    },
    crossterm::style::Stylize,
};

use crate::{namespaces::Namespace, ui};

/// One titled block of help rows. `key` is the `help <topic>` name.
pub struct HelpSection {
    pub key: &'static str,
    pub title: &'static str,
    pub rows: &'static [[&'static str; 3]],
}

/// A namespace's full reference table.
pub struct HelpTable {
    pub title: &'static str,
    pub sections: &'static [HelpSection],
    /// Trailing plain-text tips, one line each. Empty for most tools.
    pub tips: &'static [&'static str],
}

const HEADERS: [&str; 3] = ["Friendly Command", "Actual Command", "What It Does"];

/// Renders a namespace help table, optionally narrowed to one topic.
/// An unknown topic falls back to the full table, like an omitted one.
pub fn print_help(help: &HelpTable, topic: Option<&str>) {
    if let Some(section) = topic.and_then(|t| help.sections.iter().find(|s| s.key == t)) {
        println!();
        render_table(section.title, std::slice::from_ref(section), false);
        println!();
        return;
    }

    println!();
    render_table(help.title, help.sections, true);
    if help.sections.len() > 1 {
        let topics: Vec<&str> = help.sections.iter().map(|s| s.key).collect();
        println!();
        println!(
            "  Type 'help <topic>' after the tool name for details. Topics: {}",
            topics.join(", ")
        );
    }
    for tip in help.tips {
        println!("{}", tip);
    }
    println!();
}

fn render_table(title: &str, sections: &[HelpSection], with_section_headers: bool) {
    println!("  {}", title.cyan().bold());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(HEADERS.iter().map(|h| Cell::new(h)).collect::<Vec<_>>());

    for section in sections {
        if with_section_headers {
            table.add_row(vec![
                Cell::new(section.title)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Yellow),
                Cell::new(""),
                Cell::new(""),
            ]);
        }
        for row in section.rows {
            table.add_row(vec![
                Cell::new(row[0]).fg(Color::Green),
                Cell::new(row[1]).fg(Color::White),
                Cell::new(row[2]),
            ]);
        }
    }

    println!("{table}");
}

/// The `learn` cheat-sheet view: a menu, one tool, or everything.
pub fn learn(tool: Option<&str>) {
    ui::print_logo();

    let Some(tool) = tool else {
        learn_menu();
        return;
    };

    if tool == "all" {
        print_learn_header("All Commands", "Complete reference for all tools");
        for ns in Namespace::ALL {
            println!();
            println!(
                "{}",
                format!("  ═══ {} ═══", ns.title().to_uppercase())
                    .yellow()
                    .bold()
            );
            print_help(ns.help(), None);
        }
        print_learn_footer();
        return;
    }

    match Namespace::from_name(tool) {
        Some(ns) => {
            print_learn_header(ns.title(), ns.blurb());
            print_help(ns.help(), None);
            print_learn_footer();
        }
        None => {
            println!("  Unknown tool: {}", tool);
            let names: Vec<&str> = Namespace::ALL.iter().map(|ns| ns.name()).collect();
            println!("  Available: {}, all", names.join(", "));
        }
    }
}

fn learn_menu() {
    println!(
        "{}",
        r#"  ╔════════════════════════════════════════════════════════════╗
  ║                                                            ║
  ║   Learn Mode - Browse commands without installing          ║
  ║                                                            ║
  ║   See what each tool can do, then use the traditional      ║
  ║   commands directly. No setup required!                    ║
  ║                                                            ║
  ╚════════════════════════════════════════════════════════════╝"#
            .green()
    );
    println!();
    println!("  Available command references:\n");

    let width = Namespace::ALL
        .iter()
        .map(|ns| ns.name().len())
        .max()
        .unwrap_or(0);
    for ns in Namespace::ALL {
        println!(
            "    {}{}  {}",
            format!("plainterm learn {}", ns.name()).green(),
            " ".repeat(width - ns.name().len()),
            ns.blurb().white()
        );
    }
    println!(
        "    {}{}  {}",
        "plainterm learn all".green(),
        " ".repeat(width.saturating_sub(3)),
        "Show everything".white()
    );
    println!();
    println!(
        "{}",
        "  Tip: You can use the traditional commands shown in the tables.".dark_grey()
    );
    println!(
        "{}",
        "       No need to install anything - just learn and use!".dark_grey()
    );
    println!();
}

fn print_learn_header(tool: &str, description: &str) {
    println!();
    println!("  {} {}", "LEARN:".bold(), tool.white().bold());
    println!("  {}", description.dark_grey());
}

fn print_learn_footer() {
    println!();
    println!(
        "{}",
        "  Tip: Use the \"Actual Command\" column directly in your terminal.".dark_grey()
    );
    println!(
        "{}",
        "       No installation needed - these are standard commands!".dark_grey()
    );
    println!();
    println!(
        "{}{}",
        "  Want the friendly shortcuts? Run: ".dark_grey(),
        "plainterm setup".cyan()
    );
    println!();
}

/// The top-level help screen shown for bare `plainterm` or
/// `plainterm help`.
pub fn main_help() {
    ui::print_logo();
    ui::print_welcome();

    println!("{}", "  What is plainterm?\n".magenta());
    println!("{}", "    Tired of googling \"how to undo git commit\" every time?".white());
    println!("{}", "    plainterm lets you type readable commands like:".white());
    println!();
    println!(
        "      {}{}{}",
        "git rewind 1 commit".green(),
        "     instead of   ".dark_grey(),
        "git reset --soft HEAD~1".white()
    );
    println!(
        "      {}{}{}",
        "git show changes".green(),
        "        instead of   ".dark_grey(),
        "git status".white()
    );
    println!(
        "      {}{}{}",
        "npm add lodash --dev".green(),
        "    instead of   ".dark_grey(),
        "npm install lodash --save-dev".white()
    );
    println!();
    println!("{}", "    We translate them for you AND show what's running, so you learn!".white());
    println!();

    println!("{}", "  Supported Tools:\n".magenta());
    let width = Namespace::ALL
        .iter()
        .map(|ns| ns.name().len())
        .max()
        .unwrap_or(0);
    for ns in Namespace::ALL {
        println!(
            "    {}{}   {}",
            ns.name().green(),
            " ".repeat(width - ns.name().len()),
            ns.blurb().white()
        );
    }
    println!();

    println!("{}", "  Getting Started:\n".magenta());
    println!(
        "    {}         {}",
        "plainterm setup".green(),
        "Add friendly commands to your shell (one-time setup)".white()
    );
    println!(
        "    {}          {}",
        "plainterm tour".green(),
        "Take a 2-minute guided walkthrough of all features".white()
    );
    println!(
        "    {}         {}",
        "plainterm learn".green(),
        "Browse all commands as a cheat sheet (no setup needed)".white()
    );
    println!();

    println!("{}", "  Two Modes:\n".magenta());
    println!("{}", "    After setup, you can switch between two modes anytime:\n".white());
    println!(
        "    {}{}",
        "Friendly Mode".white().bold(),
        " - Commands are translated for you".white()
    );
    println!("{}", "      \"git show changes\" becomes \"git status\"".dark_grey());
    println!();
    println!(
        "    {}{}",
        "Traditional Mode".white().bold(),
        " - Commands pass through unchanged".white()
    );
    println!(
        "{}",
        "      \"git status\" stays \"git status\" (help & learn still work!)".dark_grey()
    );
    println!();
    println!(
        "    {}              {}",
        "plainterm mode".green(),
        "Check which mode you're in".white()
    );
    println!(
        "    {}  {}",
        "plainterm mode traditional".green(),
        "Switch to traditional commands".white()
    );
    println!(
        "    {}     {}",
        "plainterm mode friendly".green(),
        "Switch back to friendly commands".white()
    );
    println!();

    println!("{}", "  Try These Now:\n".magenta());
    println!(
        "    {}          {}",
        "plainterm git help".green(),
        "See all friendly git commands".white()
    );
    println!(
        "    {}         {}",
        "plainterm learn git".green(),
        "Browse git commands as a reference".white()
    );
    println!(
        "    {}        {}",
        "plainterm tour quick".green(),
        "Quick summary of features".white()
    );
    println!();
}
