use {
    anyhow::Result,
    crossterm::style::Stylize,
    std::{thread, time::Duration},
};

use crate::ui;

const RULE: &str =
    "  ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

fn pause(secs: u64) {
    thread::sleep(Duration::from_secs(secs));
}

fn step(title: &str) {
    println!();
    println!("{}", RULE.yellow().bold());
    println!("  {}", title.yellow().bold());
    println!("{}", RULE.yellow().bold());
    println!();
}

/// The full paced walkthrough. Each step sleeps a few seconds so the
/// reader can keep up.
pub fn run() -> Result<()> {
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
        crossterm::cursor::MoveTo(0, 0)
    )?;
    ui::print_logo();

    println!(
        "{}",
        r#"  ╔════════════════════════════════════════════════════════════╗
  ║                                                            ║
  ║   Welcome! Let me show you around.                         ║
  ║                                                            ║
  ║   This will take about 2 minutes.                          ║
  ║   (Or run "plainterm tour quick" for the short version)    ║
  ║                                                            ║
  ╚════════════════════════════════════════════════════════════╝"#
            .green()
    );
    println!();
    pause(3);

    step("STEP 1: THE PROBLEM");
    println!("  Terminal commands are hard to remember. Look at these:\n");
    println!("{}", "    git reset --soft HEAD~1".dark_grey());
    println!("{}", "    ^ What does this do? Who knows!\n".red());
    println!("{}", "    docker ps -a".dark_grey());
    println!("{}", "    ^ What is \"ps\"? What is \"-a\"?\n".red());
    println!("{}", "    npm install --save-dev".dark_grey());
    println!("{}", "    ^ So many flags to remember...\n".red());
    println!("  You end up googling the same commands over and over.");
    println!();
    pause(4);

    step("STEP 2: THE SOLUTION");
    println!("  What if you could just type what you want to do?\n");
    println!("{}", "    git rewind 1 commit".cyan());
    println!("{}", "    ^ Undo my last commit. Makes sense!\n".green());
    println!("{}", "    docker show all containers".cyan());
    println!("{}", "    ^ Show all containers. Easy to understand!\n".green());
    println!("{}", "    npm add lodash --dev".cyan());
    println!("{}", "    ^ Add lodash as a dev dependency. Clear!\n".green());
    println!("  That's what plainterm does.");
    println!("  You type readable commands, we translate them for you.");
    println!();
    pause(4);

    step("STEP 3: YOU STILL LEARN THE REAL COMMANDS");
    println!("  Here's the cool part. Every time you run a command,");
    println!("  we show you what's actually happening:\n");
    println!("{}", "    $ git save \"fixed the bug\"".white());
    println!(
        "{}",
        "      Running: git add . && git commit -m \"fixed the bug\"".dark_grey()
    );
    println!("{}", "      ✓ Saved 3 files\n".green());
    println!("  See that \"Running:\" line? That's the real command.");
    println!("  Over time, you'll start recognizing them.");
    println!();
    println!("  {}", "plainterm is a learning tool, not a crutch.".bold());
    println!();
    pause(5);

    step("STEP 4: TRY SOME COMMANDS");
    println!("  Here are some commands you can try right now:\n");
    println!("{}", "    git show changes".cyan());
    println!("{}", "    See what files you've modified\n".dark_grey());
    println!("{}", "    git show history".cyan());
    println!("{}", "    See your recent commits\n".dark_grey());
    println!("{}", "    git show branches".cyan());
    println!("{}", "    See all your branches\n".dark_grey());
    println!("  Go ahead, try one after this tour!");
    println!();
    pause(4);

    step("STEP 5: SEE ALL AVAILABLE COMMANDS");
    println!("  Don't know what commands are available?");
    println!("  There are two ways to find out:\n");
    println!("  {}", "Option A: Built-in help".bold());
    println!(
        "{}{}",
        "    git help           ".cyan(),
        "See all git commands".dark_grey()
    );
    println!(
        "{}{}",
        "    npm help           ".cyan(),
        "See all npm commands".dark_grey()
    );
    println!(
        "{}{}",
        "    docker help        ".cyan(),
        "See all docker commands".dark_grey()
    );
    println!();
    println!(
        "  {}",
        "Option B: Learn mode (browse without using plain commands)".bold()
    );
    println!(
        "{}{}",
        "    plainterm learn git ".cyan(),
        "Browse git commands".dark_grey()
    );
    println!(
        "{}{}",
        "    plainterm learn all ".cyan(),
        "Browse everything".dark_grey()
    );
    println!();
    println!("  Both show you nice tables with:");
    println!("    - The plain command");
    println!("    - The traditional command");
    println!("    - What it does");
    println!();
    pause(5);

    step("STEP 6: LEARN MODE - USE IT AS A CHEAT SHEET");
    println!("  Maybe you don't want to use plain commands.");
    println!("  Maybe you just want to see what commands exist.");
    println!();
    println!("  {}", "That's totally fine!".bold());
    println!();
    println!("  Learn mode is like a cheat sheet built into your terminal.");
    println!("  Run it, look up the traditional command, and use that directly.\n");
    println!("{}", "    $ plainterm learn git".cyan());
    println!();
    println!(
        "    {}",
        "┌─────────────────────┬─────────────────────┬──────────────┐".dark_grey()
    );
    println!(
        "    {}",
        "│ Plain Command       │ Actual Command      │ What It Does │".dark_grey()
    );
    println!(
        "    {}",
        "├─────────────────────┼─────────────────────┼──────────────┤".dark_grey()
    );
    println!(
        "    {}",
        "│ git show changes    │ git status          │ Show changes │".dark_grey()
    );
    println!(
        "    {}",
        "│ git sync upload     │ git push            │ Upload code  │".dark_grey()
    );
    println!(
        "    {}",
        "└─────────────────────┴─────────────────────┴──────────────┘".dark_grey()
    );
    println!();
    println!("  Now you know: \"git status\" shows changes.");
    println!("  Use \"git status\" directly if you prefer!");
    println!();
    pause(5);

    step("STEP 7: SWITCH BETWEEN FRIENDLY AND TRADITIONAL");
    println!("  You can switch modes anytime. No need to uninstall.\n");
    println!(
        "  {}{}",
        "Friendly Mode".bold(),
        " (what you have now)".dark_grey()
    );
    println!("    - \"git show changes\" becomes \"git status\"");
    println!("    - Commands are translated for you");
    println!();
    println!("  {}", "Traditional Mode".bold());
    println!("    - \"git status\" stays \"git status\"");
    println!("    - Commands pass through unchanged");
    println!("    - Help and learn still work!");
    println!();
    println!("  To switch:\n");
    println!(
        "{}{}",
        "    plainterm mode              ".cyan(),
        "See current mode".dark_grey()
    );
    println!(
        "{}{}",
        "    plainterm mode traditional  ".cyan(),
        "Switch to traditional".dark_grey()
    );
    println!(
        "{}{}",
        "    plainterm mode friendly     ".cyan(),
        "Switch back to friendly".dark_grey()
    );
    println!();
    println!("  {}", "Why switch to traditional?".bold());
    println!("    - Working on someone else's computer");
    println!("    - Pair programming with someone who prefers traditional");
    println!("    - Practicing for a job interview");
    println!("    - You just want the cheat sheet, not the translations");
    println!();
    pause(5);

    step("STEP 8: WHAT TOOLS ARE SUPPORTED?");
    println!("  plainterm works with these tools:\n");
    println!("{}{}", "    git      ".cyan(), "Version control".dark_grey());
    println!(
        "{}",
        "             Track changes, collaborate with your team".dark_grey()
    );
    println!();
    println!(
        "{}{}",
        "    npm      ".cyan(),
        "Node.js package manager".dark_grey()
    );
    println!("{}", "             Install libraries, run scripts".dark_grey());
    println!();
    println!(
        "{}{}",
        "    gradle   ".cyan(),
        "Java/Android build tool".dark_grey()
    );
    println!(
        "{}",
        "             Build and run Java/Android apps".dark_grey()
    );
    println!();
    println!("{}{}", "    maven    ".cyan(), "Java build tool".dark_grey());
    println!(
        "{}",
        "             Another way to build Java projects".dark_grey()
    );
    println!();
    println!(
        "{}{}",
        "    docker   ".cyan(),
        "Container platform".dark_grey()
    );
    println!(
        "{}",
        "             Run apps in isolated containers".dark_grey()
    );
    println!();
    println!("{}{}", "    files    ".cyan(), "File operations".dark_grey());
    println!("{}", "             Search and view files".dark_grey());
    println!();
    pause(4);

    step("YOU'RE READY!");
    println!("  Here's what to try next:\n");
    println!(
        "{}{}",
        "    git show changes        ".cyan(),
        "See what files you changed".dark_grey()
    );
    println!(
        "{}{}",
        "    git help                ".cyan(),
        "See all git commands".dark_grey()
    );
    println!(
        "{}{}",
        "    plainterm learn git     ".cyan(),
        "Browse the cheat sheet".dark_grey()
    );
    println!(
        "{}{}",
        "    plainterm mode          ".cyan(),
        "Check your current mode".dark_grey()
    );
    println!();
    println!("  {}", "Remember:".bold());
    println!("    - Every command shows what it's really running");
    println!("    - Use \"git help\" or \"plainterm learn git\" when you forget");
    println!("    - Switch to traditional mode anytime with \"plainterm mode traditional\"");
    println!();

    println!(
        "{}",
        r#"  ╔════════════════════════════════════════════════════════════╗
  ║                                                            ║
  ║   Tour complete! Happy coding!                             ║
  ║                                                            ║
  ║   Run "plainterm tour" anytime to see this again.          ║
  ║                                                            ║
  ╚════════════════════════════════════════════════════════════╝"#
            .green()
    );
    println!();
    Ok(())
}

/// The quick version, no pacing delays.
pub fn run_quick() {
    ui::print_logo();

    println!(
        "{}",
        r#"  ╔════════════════════════════════════════════════════════════╗
  ║                                                            ║
  ║   plainterm - Quick Start                                  ║
  ║                                                            ║
  ╚════════════════════════════════════════════════════════════╝"#
            .green()
    );
    println!();

    println!("{}", "  WHAT IS THIS?\n".yellow().bold());
    println!("  Type readable commands. We translate them for you.");
    println!("  And we show you the real command, so you learn!\n");
    println!(
        "    {}  →  {}",
        "git show changes".cyan(),
        "git status".dark_grey()
    );
    println!(
        "    {}    →  {}",
        "git save \"msg\"".cyan(),
        "git add . && git commit -m \"msg\"".dark_grey()
    );
    println!(
        "    {}   →  {}",
        "git sync upload".cyan(),
        "git push".dark_grey()
    );
    println!(
        "    {}         →  {}",
        "npm setup".cyan(),
        "npm install".dark_grey()
    );
    println!();

    println!("{}", "  SEE ALL COMMANDS\n".yellow().bold());
    println!(
        "    {}              All git commands in a table",
        "git help".cyan()
    );
    println!("    {}              All npm commands", "npm help".cyan());
    println!(
        "    {}    Browse git as a cheat sheet",
        "plainterm learn git".cyan()
    );
    println!("    {}    Browse everything", "plainterm learn all".cyan());
    println!();

    println!("{}", "  SWITCH MODES\n".yellow().bold());
    println!("  Don't want plain commands? Switch to traditional:\n");
    println!(
        "    {}               See current mode",
        "plainterm mode".cyan()
    );
    println!(
        "    {}   Commands pass through unchanged",
        "plainterm mode traditional".cyan()
    );
    println!(
        "    {}      Back to plain commands",
        "plainterm mode friendly".cyan()
    );
    println!();
    println!(
        "  {}",
        "In traditional mode, help and learn still work!".dark_grey()
    );
    println!();

    println!("{}", "  SUPPORTED TOOLS\n".yellow().bold());
    println!("    {}       Version control", "git".cyan());
    println!("    {}       Node.js packages", "npm".cyan());
    println!("    {}    Java/Android builds", "gradle".cyan());
    println!("    {}     Java builds", "maven".cyan());
    println!("    {}    Containers", "docker".cyan());
    println!("    {}     File search", "files".cyan());
    println!();

    println!("{}", "  TRY NOW\n".yellow().bold());
    println!("    {}     See modified files", "git show changes".cyan());
    println!("    {}             See all commands", "git help".cyan());
    println!(
        "    {}        Full interactive tour",
        "plainterm tour".cyan()
    );
    println!();
}
