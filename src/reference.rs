use {
    crate::args::ClapArgumentLoader,
    anyhow::{Context, Result},
    clap_complete::{generate_to, Shell},
    std::path::Path,
};

pub fn build_manpages(outdir: &Path) -> Result<()> {
    let cmd = ClapArgumentLoader::root_command();
    clap_mangen::generate_to(cmd, outdir)
        .with_context(|| format!("Failed to generate manpages to: {}", outdir.display()))?;
    Ok(())
}

pub fn build_markdown(outdir: &Path) -> Result<()> {
    let cmd = ClapArgumentLoader::root_command();
    let markdown = clap_markdown::help_markdown_command(&cmd);
    let path = outdir.join("plainterm.md");
    std::fs::write(&path, markdown)
        .with_context(|| format!("Failed to write markdown reference to: {}", path.display()))?;
    Ok(())
}

pub fn build_shell_completion(outdir: &Path, shell: &Shell) -> Result<()> {
    let mut cmd = ClapArgumentLoader::root_command();
    generate_to(*shell, &mut cmd, "plainterm", outdir)
        .with_context(|| format!("Failed to generate completions to: {}", outdir.display()))?;
    Ok(())
}
