use crate::answers::Answers;
use crate::error::{Result, SetupError};
use crate::report::Reporter;
use crate::template;
use std::fs;
use std::path::Path;

pub const TEMPLATE_FILE: &str = "README.template.md";
pub const README_FILE: &str = "README.md";
pub const BACKUP_FILE: &str = "README.original.md";

/// Generate `README.md` from the template.
///
/// An existing README is renamed to `README.original.md` first, but only if
/// no backup exists yet; once a backup is on disk it is never touched again.
/// A failed rename is a warning, a missing/unreadable template or unwritable
/// destination is fatal.
pub fn generate(project_root: &Path, answers: &Answers, reporter: &Reporter) -> Result<()> {
    let template_path = project_root.join(TEMPLATE_FILE);
    let readme_path = project_root.join(README_FILE);
    let backup_path = project_root.join(BACKUP_FILE);

    if readme_path.exists() && !backup_path.exists() {
        match fs::rename(&readme_path, &backup_path) {
            Ok(()) => reporter.ok("README.md backed up to README.original.md"),
            Err(_) => reporter.warn("Could not back up README.md to README.original.md"),
        }
    }

    let template_text =
        fs::read_to_string(&template_path).map_err(|source| SetupError::TemplateRead {
            path: template_path,
            source,
        })?;

    let rendered = template::render(&template_text, &answers.replacements());

    fs::write(&readme_path, rendered).map_err(|source| SetupError::ReadmeWrite {
        path: readme_path.clone(),
        source,
    })?;

    reporter.ok("README.md generated successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Author;
    use crate::license;
    use tempfile::TempDir;

    fn sample_answers() -> Answers {
        Answers {
            title: "My Title".to_string(),
            vendor: "acme".to_string(),
            package_name: "myapp".to_string(),
            description: "Short description".to_string(),
            php_version: "8.2".to_string(),
            license: license::resolve("1"),
            author: Author {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            },
            year: 2026,
        }
    }

    #[test]
    fn test_generate_renders_template() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(TEMPLATE_FILE),
            "# {{TITLE}}\n\n{{DESCRIPTION}} ({{LICENSE}}, {{YEAR}})\n",
        )
        .unwrap();

        generate(dir.path(), &sample_answers(), &Reporter::new(false)).unwrap();

        let readme = fs::read_to_string(dir.path().join(README_FILE)).unwrap();
        assert_eq!(readme, "# My Title\n\nShort description (MIT, 2026)\n");
        assert!(!readme.contains("{{"));
    }

    #[test]
    fn test_generate_backs_up_existing_readme_once() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(TEMPLATE_FILE), "# {{TITLE}}\n").unwrap();
        fs::write(dir.path().join(README_FILE), "original").unwrap();

        let reporter = Reporter::new(false);
        generate(dir.path(), &sample_answers(), &reporter).unwrap();

        let backup = fs::read_to_string(dir.path().join(BACKUP_FILE)).unwrap();
        assert_eq!(backup, "original");

        // Second run: the generated README must not displace the backup.
        generate(dir.path(), &sample_answers(), &reporter).unwrap();
        let backup = fs::read_to_string(dir.path().join(BACKUP_FILE)).unwrap();
        assert_eq!(backup, "original");
    }

    #[test]
    fn test_generate_without_existing_readme_makes_no_backup() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(TEMPLATE_FILE), "# {{TITLE}}\n").unwrap();

        generate(dir.path(), &sample_answers(), &Reporter::new(false)).unwrap();

        assert!(dir.path().join(README_FILE).exists());
        assert!(!dir.path().join(BACKUP_FILE).exists());
    }

    #[test]
    fn test_generate_missing_template_is_fatal() {
        let dir = TempDir::new().unwrap();
        let result = generate(dir.path(), &sample_answers(), &Reporter::new(false));
        assert!(matches!(result, Err(SetupError::TemplateRead { .. })));
    }
}
