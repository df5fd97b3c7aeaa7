use crate::{
    core::{
        exec::Platform,
        pattern::{CommandSpec, Registry},
    },
    help::{HelpSection, HelpTable},
};

pub fn register(r: &mut Registry) {
    // Showing information
    r.exact("show changes", "git status", "Shows which files you have modified");
    r.exact("show diff", "git diff", "Shows line-by-line changes in your files");
    r.exact("show diff staged", "git diff --staged", "Shows changes that are staged for commit");
    r.exact("show history", "git log --oneline -10", "Shows your last 10 commits");
    r.exact("show history all", "git log --oneline", "Shows full commit history");
    r.exact("show history detailed", "git log", "Shows commits with full details and messages");
    r.exact("show branches", "git branch -a", "Shows all local and remote branches");
    r.exact("show branches local", "git branch", "Shows only local branches");
    r.exact("show branches remote", "git branch -r", "Shows only remote branches");
    r.exact("show remote", "git remote -v", "Shows remote repository URLs");
    r.exact("show tags", "git tag", "Shows all tags");
    r.exact("show drafts", "git stash list", "Shows all saved drafts (stashed changes)");

    // Syncing
    r.exact("sync upload", "git push", "Uploads your commits to the remote repository");
    r.exact("sync upload force", "git push --force", "Force uploads (overwrites remote history)");
    r.exact("sync upload tags", "git push --tags", "Uploads all tags to remote");
    r.exact("sync download", "git pull", "Downloads latest changes from remote repository");
    r.exact("sync download rebase", "git pull --rebase", "Downloads and replays your commits on top");
    r.exact("sync", "git pull && git push", "Downloads then uploads (full sync)");
    r.exact("fetch", "git fetch", "Downloads remote changes without merging");
    r.exact("fetch all", "git fetch --all", "Downloads from all remotes");

    // Staging
    r.exact("add all", "git add .", "Stages all changed files");
    r.exact("remove all", "git reset HEAD", "Removes all files from staging area");

    // Discarding
    r.exact("discard changes", "git checkout .", "Discards all uncommitted changes in files");
    r.exact("discard all", "git reset --hard HEAD", "Discards ALL uncommitted changes (staged + unstaged)");

    // Drafts (stashing)
    r.exact("draft", "git stash", "Saves your uncommitted work as a draft so you can switch tasks");
    r.exact("draft save", "git stash", "Saves current changes as a draft to work on later");
    r.exact("draft restore", "git stash apply", "Brings back your draft changes (keeps the draft saved)");
    r.exact("draft restore and delete", "git stash pop", "Brings back your draft and removes it from drafts");
    r.exact("draft delete", "git stash drop", "Deletes the most recent draft");
    r.exact("draft delete all", "git stash clear", "Deletes all saved drafts");

    // Branch shortcuts
    r.exact("switch -", "git checkout -", "Switches to the previous branch");

    // Rehome (rebase)
    r.exact("rehome cancel", "git rebase --abort", "Cancels rehome and goes back to how things were before");
    r.exact("rehome continue", "git rebase --continue", "Continues rehome after you fixed the conflicts");
    r.exact("rehome skip", "git rebase --skip", "Skips the current commit and continues rehome");

    // Undoing
    r.exact("revert last", "git revert HEAD", "Reverts the most recent commit");
    r.exact("clean", "git clean -fd", "Removes untracked files and directories");
    r.exact("clean preview", "git clean -fd --dry-run", "Shows what would be removed (without doing it)");

    // Config
    r.exact("config list", "git config --list", "Shows all git configuration");

    r.arg("show blame", show_blame);
    r.arg("show commit", show_commit);
    r.arg("save", save);
    r.arg("commit", commit);
    r.arg("add", add);
    r.arg("remove", remove);
    r.arg("discard", discard);
    r.arg("rewind", rewind);
    r.arg("draft with message", draft_with_message);
    r.arg("switch", switch);
    r.arg("create", create);
    r.arg("delete", delete);
    r.arg("delete force", delete_force);
    r.arg("delete remote", delete_remote);
    r.arg("rename branch", rename_branch);
    r.arg("merge", merge);
    r.arg("merge squash", merge_squash);
    r.arg("rehome", rehome);
    r.arg("rehome onto", rehome);
    r.arg("create tag", create_tag);
    r.arg("delete tag", delete_tag);
    r.arg("delete remote tag", delete_remote_tag);
    r.arg("download", download);
    r.arg("download shallow", download_shallow);
    r.arg("remote add", remote_add);
    r.arg("remote remove", remote_remove);
    r.arg("remote rename", remote_rename);
    r.arg("revert", revert);
    r.arg("cherry-pick", cherry_pick);
    r.arg("config name", config_name);
    r.arg("config email", config_email);
}

fn show_blame(file: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git blame {file}"),
        format!("Shows who wrote each line of {file}"),
    ))
}

fn show_commit(hash: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git show {hash}"),
        format!("Shows details of commit {hash}"),
    ))
}

fn save(msg: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git add . && git commit -m \"{msg}\""),
        "Saves all your changes with a description",
    ))
}

fn commit(msg: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git add . && git commit -m \"{msg}\""),
        "Commits all your changes with a description",
    ))
}

fn add(file: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git add {file}"),
        format!("Stages {file} for the next commit"),
    ))
}

fn remove(file: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git reset HEAD {file}"),
        format!("Removes {file} from staging area"),
    ))
}

fn discard(file: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git checkout {file}"),
        format!("Discards changes in {file}"),
    ))
}

/// Rewind grammar:
///
///   rewind <n> commit(s) [to staged|files|trash]
///   rewind to <hash> [destroy]
///
/// A non-numeric count falls back to 1. `rewind to` without a hash
/// does not resolve.
fn rewind(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let parts: Vec<&str> = args.split_whitespace().collect();

    if parts.first() == Some(&"to") {
        let hash = *parts.get(1)?;
        if parts.contains(&"destroy") {
            return Some(CommandSpec::new(
                format!("git reset --hard {hash}"),
                format!("Rewinds to {hash} and deletes all changes"),
            ));
        }
        return Some(CommandSpec::new(
            format!("git reset --soft {hash}"),
            format!("Rewinds to {hash}, keeps changes staged"),
        ));
    }

    let count: u32 = parts
        .first()
        .and_then(|p| p.parse().ok())
        .filter(|&n| n != 0)
        .unwrap_or(1);

    if let Some(to) = parts.iter().position(|&p| p == "to") {
        match parts.get(to + 1) {
            Some(&"staged") => {
                return Some(CommandSpec::new(
                    format!("git reset --soft HEAD~{count}"),
                    format!("Undoes {count} commit(s), keeps changes staged"),
                ));
            }
            Some(&"files") => {
                return Some(CommandSpec::new(
                    format!("git reset --mixed HEAD~{count}"),
                    format!("Undoes {count} commit(s), keeps changes in files"),
                ));
            }
            Some(&"trash") => {
                return Some(CommandSpec::new(
                    format!("git reset --hard HEAD~{count}"),
                    format!("Undoes {count} commit(s) and deletes all changes"),
                ));
            }
            _ => {}
        }
    }

    Some(CommandSpec::new(
        format!("git reset --soft HEAD~{count}"),
        format!("Undoes {count} commit(s), keeps changes staged"),
    ))
}

fn draft_with_message(msg: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git stash save \"{msg}\""),
        "Saves draft with a name so you can find it later",
    ))
}

fn switch(branch: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git checkout {branch}"),
        format!("Switches to {branch} branch"),
    ))
}

fn create(branch: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git checkout -b {branch}"),
        format!("Creates {branch} branch and switches to it"),
    ))
}

fn delete(branch: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git branch -d {branch}"),
        format!("Deletes {branch} branch (safe)"),
    ))
}

fn delete_force(branch: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git branch -D {branch}"),
        format!("Force deletes {branch} branch"),
    ))
}

fn delete_remote(branch: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git push origin --delete {branch}"),
        format!("Deletes {branch} from remote"),
    ))
}

fn rename_branch(name: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git branch -m {name}"),
        format!("Renames current branch to {name}"),
    ))
}

fn merge(branch: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git merge {branch}"),
        format!("Merges {branch} into current branch"),
    ))
}

fn merge_squash(branch: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git merge --squash {branch}"),
        format!("Merges {branch} as a single commit"),
    ))
}

fn rehome(branch: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git rebase {branch}"),
        format!("Moves your commits on top of {branch}"),
    ))
}

fn create_tag(tag: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git tag {tag}"),
        format!("Creates a bookmark named {tag} at current commit"),
    ))
}

fn delete_tag(tag: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git tag -d {tag}"),
        format!("Deletes local tag {tag}"),
    ))
}

fn delete_remote_tag(tag: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git push origin --delete {tag}"),
        format!("Deletes tag {tag} from remote"),
    ))
}

fn download(url: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git clone {url}"),
        "Downloads a copy of a remote repository",
    ))
}

fn download_shallow(url: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git clone --depth 1 {url}"),
        "Clones only the latest commit (faster)",
    ))
}

fn remote_add(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let mut parts = args.split_whitespace();
    let name = parts.next()?;
    let url = parts.next()?;
    Some(CommandSpec::new(
        format!("git remote add {name} {url}"),
        format!("Adds remote {name}"),
    ))
}

fn remote_remove(name: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git remote remove {name}"),
        format!("Removes remote {name}"),
    ))
}

fn remote_rename(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let mut parts = args.split_whitespace();
    let old = parts.next()?;
    let new = parts.next()?;
    Some(CommandSpec::new(
        format!("git remote rename {old} {new}"),
        format!("Renames remote {old} to {new}"),
    ))
}

fn revert(hash: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git revert {hash}"),
        format!("Creates a commit that undoes {hash}"),
    ))
}

fn cherry_pick(hash: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git cherry-pick {hash}"),
        format!("Copies commit {hash} to current branch"),
    ))
}

fn config_name(name: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git config user.name \"{name}\""),
        "Sets your name for commits",
    ))
}

fn config_email(email: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("git config user.email \"{email}\""),
        "Sets your email for commits",
    ))
}

pub static HELP: HelpTable = HelpTable {
    title: "GIT COMMANDS",
    sections: &[
        HelpSection {
            key: "show",
            title: "SHOWING INFORMATION",
            rows: &[
                ["git show changes", "git status", "Shows which files you have modified"],
                ["git show diff", "git diff", "Shows line-by-line changes in your files"],
                ["git show diff staged", "git diff --staged", "Shows changes that are staged for commit"],
                ["git show history", "git log --oneline -10", "Shows your last 10 commits"],
                ["git show history all", "git log --oneline", "Shows full commit history"],
                ["git show history detailed", "git log", "Shows commits with full details and messages"],
                ["git show branches", "git branch -a", "Shows all local and remote branches"],
                ["git show branches local", "git branch", "Shows only local branches"],
                ["git show branches remote", "git branch -r", "Shows only remote branches"],
                ["git show blame <file>", "git blame <file>", "Shows who wrote each line of a file"],
                ["git show remote", "git remote -v", "Shows remote repository URLs"],
                ["git show tags", "git tag", "Shows all tags"],
                ["git show drafts", "git stash list", "Shows all saved drafts"],
                ["git show commit <hash>", "git show <hash>", "Shows details of a specific commit"],
            ],
        },
        HelpSection {
            key: "save",
            title: "SAVING CHANGES",
            rows: &[
                ["git save \"message\"", "git add . && git commit -m \"msg\"", "Saves all your changes with a description"],
                ["git commit \"message\"", "git add . && git commit -m \"msg\"", "Commits all your changes with a description"],
                ["git add <file>", "git add <file>", "Stages a file for the next commit"],
                ["git add all", "git add .", "Stages all changed files"],
                ["git remove <file>", "git reset HEAD <file>", "Removes a file from staging area"],
                ["git remove all", "git reset HEAD", "Removes all files from staging area"],
            ],
        },
        HelpSection {
            key: "sync",
            title: "SYNCING WITH REMOTE",
            rows: &[
                ["git sync upload", "git push", "Uploads your commits to the remote repository"],
                ["git sync upload force", "git push --force", "Force uploads (overwrites remote history)"],
                ["git sync upload tags", "git push --tags", "Uploads all tags to remote"],
                ["git sync download", "git pull", "Downloads latest changes from remote repository"],
                ["git sync download rebase", "git pull --rebase", "Downloads and replays your commits on top"],
                ["git sync", "git pull && git push", "Downloads then uploads (full sync)"],
                ["git fetch", "git fetch", "Downloads remote changes without merging"],
                ["git fetch all", "git fetch --all", "Downloads from all remotes"],
            ],
        },
        HelpSection {
            key: "rewind",
            title: "REWINDING (UNDOING COMMITS)",
            rows: &[
                ["git rewind 1 commit", "git reset --soft HEAD~1", "Undoes last commit, keeps changes staged"],
                ["git rewind 3 commits", "git reset --soft HEAD~3", "Undoes last 3 commits, keeps changes staged"],
                ["git rewind 1 commit to staged", "git reset --soft HEAD~1", "Undoes commit, keeps changes staged"],
                ["git rewind 1 commit to files", "git reset --mixed HEAD~1", "Undoes commit, keeps changes in files"],
                ["git rewind 1 commit to trash", "git reset --hard HEAD~1", "Undoes commit AND deletes all changes"],
                ["git rewind to <hash>", "git reset --soft <hash>", "Rewinds to specific commit, keeps changes"],
                ["git rewind to <hash> destroy", "git reset --hard <hash>", "Rewinds to specific commit, deletes changes"],
            ],
        },
        HelpSection {
            key: "discard",
            title: "DISCARDING CHANGES",
            rows: &[
                ["git discard <file>", "git checkout <file>", "Discards changes in one specific file"],
                ["git discard changes", "git checkout .", "Discards all uncommitted changes in files"],
                ["git discard all", "git reset --hard HEAD", "Discards ALL uncommitted changes (staged + unstaged)"],
            ],
        },
        HelpSection {
            key: "draft",
            title: "DRAFTS (Save Work-in-Progress)",
            rows: &[
                ["git draft", "git stash", "Saves your uncommitted work as a draft"],
                ["git draft save", "git stash", "Saves current changes to work on later"],
                ["git draft with message \"WIP\"", "git stash save \"WIP\"", "Saves draft with a name to find it later"],
                ["git draft restore", "git stash apply", "Brings back draft changes (keeps draft)"],
                ["git draft restore and delete", "git stash pop", "Brings back draft and removes it"],
                ["git draft delete", "git stash drop", "Deletes the most recent draft"],
                ["git draft delete all", "git stash clear", "Deletes all saved drafts"],
                ["git show drafts", "git stash list", "Shows all your saved drafts"],
            ],
        },
        HelpSection {
            key: "branches",
            title: "BRANCHES",
            rows: &[
                ["git switch <branch>", "git checkout <branch>", "Switches to a different branch"],
                ["git switch -", "git checkout -", "Switches to the previous branch"],
                ["git create <branch>", "git checkout -b <branch>", "Creates a new branch and switches to it"],
                ["git delete <branch>", "git branch -d <branch>", "Deletes a local branch (safe)"],
                ["git delete force <branch>", "git branch -D <branch>", "Force deletes a local branch"],
                ["git delete remote <branch>", "git push origin --delete <branch>", "Deletes a branch from remote"],
                ["git rename branch <name>", "git branch -m <name>", "Renames the current branch"],
                ["git merge <branch>", "git merge <branch>", "Combines another branch into current branch"],
                ["git merge squash <branch>", "git merge --squash <branch>", "Merges as a single commit"],
                ["git rehome <branch>", "git rebase <branch>", "Moves your commits on top of another branch"],
                ["git rehome cancel", "git rebase --abort", "Cancels rehome, goes back to before"],
                ["git rehome continue", "git rebase --continue", "Continues after fixing conflicts"],
                ["git rehome skip", "git rebase --skip", "Skips current commit, continues rehome"],
            ],
        },
        HelpSection {
            key: "tags",
            title: "TAGS",
            rows: &[
                ["git create tag <name>", "git tag <name>", "Creates a bookmark at current commit"],
                ["git create tag v1.0.0", "git tag v1.0.0", "Example: marks this as version 1.0.0"],
                ["git delete tag <name>", "git tag -d <name>", "Deletes a local tag"],
                ["git delete remote tag <name>", "git push origin --delete <name>", "Deletes a tag from remote"],
                ["git show tags", "git tag", "Shows all tags/bookmarks"],
                ["git sync upload tags", "git push --tags", "Uploads all tags to remote"],
            ],
        },
        HelpSection {
            key: "remote",
            title: "REMOTE REPOSITORIES",
            rows: &[
                ["git download <url>", "git clone <url>", "Downloads a copy of a remote repository"],
                ["git download shallow <url>", "git clone --depth 1 <url>", "Clones only the latest commit (faster)"],
                ["git remote add <name> <url>", "git remote add <name> <url>", "Adds a new remote repository"],
                ["git remote remove <name>", "git remote remove <name>", "Removes a remote repository"],
                ["git remote rename <old> <new>", "git remote rename <old> <new>", "Renames a remote"],
                ["git show remote", "git remote -v", "Shows remote repository URLs"],
            ],
        },
    ],
    tips: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pattern::Resolution;

    fn cmd(input: &str) -> String {
        let mut r = Registry::new();
        register(&mut r);
        r.finalize();
        match r.dispatch(None, input, Platform::Unix) {
            Resolution::Run(spec) => spec.cmd,
            other => panic!("{input:?}: {other:?}"),
        }
    }

    fn not_found(input: &str) -> bool {
        let mut r = Registry::new();
        register(&mut r);
        r.finalize();
        r.dispatch(None, input, Platform::Unix) == Resolution::NotFound
    }

    fn desc(input: &str) -> String {
        let mut r = Registry::new();
        register(&mut r);
        r.finalize();
        match r.dispatch(None, input, Platform::Unix) {
            Resolution::Run(spec) => spec.desc,
            other => panic!("{input:?}: {other:?}"),
        }
    }

    #[test]
    fn rewind_counts_and_destinations() {
        assert_eq!(cmd("rewind 1 commit"), "git reset --soft HEAD~1");
        assert_eq!(cmd("rewind 3 commits"), "git reset --soft HEAD~3");
        assert_eq!(cmd("rewind 1 commit to staged"), "git reset --soft HEAD~1");
        assert_eq!(cmd("rewind 2 commits to files"), "git reset --mixed HEAD~2");
        assert_eq!(cmd("rewind 2 commits to trash"), "git reset --hard HEAD~2");
    }

    #[test]
    fn rewind_to_hash() {
        assert_eq!(cmd("rewind to abc123"), "git reset --soft abc123");
        assert_eq!(cmd("rewind to abc123 destroy"), "git reset --hard abc123");
    }

    #[test]
    fn rewind_to_without_hash_does_not_resolve() {
        assert!(not_found("rewind to"));
    }

    #[test]
    fn rewind_non_numeric_count_defaults_to_one() {
        assert_eq!(cmd("rewind some commits"), "git reset --soft HEAD~1");
    }

    #[test]
    fn save_and_commit_quote_the_message() {
        assert_eq!(
            cmd("save fix the login bug"),
            "git add . && git commit -m \"fix the login bug\""
        );
        assert_eq!(
            cmd("commit fix the login bug"),
            "git add . && git commit -m \"fix the login bug\""
        );
        assert_eq!(
            desc("save fix the login bug"),
            "Saves all your changes with a description"
        );
        assert_eq!(
            desc("commit fix the login bug"),
            "Commits all your changes with a description"
        );
    }

    #[test]
    fn branch_deletes_pick_the_most_specific_pattern() {
        assert_eq!(cmd("delete feature-x"), "git branch -d feature-x");
        assert_eq!(cmd("delete force feature-x"), "git branch -D feature-x");
        assert_eq!(
            cmd("delete remote feature-x"),
            "git push origin --delete feature-x"
        );
        assert_eq!(cmd("delete remote tag v1.0"), "git push origin --delete v1.0");
    }

    #[test]
    fn remote_add_requires_name_and_url() {
        assert_eq!(
            cmd("remote add origin git@host:repo.git"),
            "git remote add origin git@host:repo.git"
        );
        // One token fails the precondition; nothing shorter matches.
        assert!(not_found("remote add origin"));
    }

    #[test]
    fn remote_rename_requires_both_names() {
        assert_eq!(cmd("remote rename origin upstream"), "git remote rename origin upstream");
        assert!(not_found("remote rename origin"));
    }

    #[test]
    fn exact_show_entries_beat_the_show_blame_pattern() {
        assert_eq!(cmd("show changes"), "git status");
        assert_eq!(cmd("show drafts"), "git stash list");
        assert_eq!(cmd("show blame src/main.rs"), "git blame src/main.rs");
        assert_eq!(cmd("show commit abc123"), "git show abc123");
    }

    #[test]
    fn draft_with_message_beats_bare_draft_exact() {
        assert_eq!(cmd("draft"), "git stash");
        assert_eq!(
            cmd("draft with message WIP refactor"),
            "git stash save \"WIP refactor\""
        );
    }

    #[test]
    fn unknown_input_is_not_found() {
        assert!(not_found("bisect start"));
    }
}
