use crate::answers::Answers;
use crate::cli::Cli;
use crate::error::{Result, SetupError};
use crate::git::GitConfig;
use crate::manifest;
use crate::prompt::Prompter;
use crate::readme;
use crate::report::Reporter;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// The whole run: resolve root, prompt, generate README, patch manifests.
///
/// The template is checked before any question is asked, so a mis-aimed
/// invocation fails fast instead of after the questionnaire.
pub fn run(cli: Cli) -> Result<()> {
    let color = !cli.no_color && io::stdout().is_terminal();
    let reporter = Reporter::new(color);

    let project_root = resolve_project_root(cli.path)?;

    if !project_root.join(readme::TEMPLATE_FILE).exists() {
        return Err(SetupError::TemplateMissing(project_root));
    }

    reporter.banner("=== PHP project setup ===");
    reporter.blank_line();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), &reporter);
    let answers = Answers::gather(&mut prompter, &GitConfig, &reporter, &project_root);

    reporter.blank_line();
    readme::generate(&project_root, &answers, &reporter)?;
    manifest::update_composer(&project_root, &answers, &reporter);
    manifest::update_package(&project_root, &answers, &reporter);

    reporter.done("Done.");
    Ok(())
}

fn resolve_project_root(path: Option<PathBuf>) -> Result<PathBuf> {
    let candidate = match path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    fs::canonicalize(&candidate).map_err(|_| SetupError::ProjectRoot(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_project_root_canonicalizes() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("sub/..");
        fs::create_dir_all(dir.path().join("sub")).unwrap();

        let resolved = resolve_project_root(Some(nested)).unwrap();
        assert_eq!(resolved, fs::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn test_resolve_project_root_missing_path_fails() {
        let result = resolve_project_root(Some(PathBuf::from("/no/such/directory")));
        assert!(matches!(result, Err(SetupError::ProjectRoot(_))));
    }
}
