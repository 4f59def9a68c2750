use crate::git::IdentitySource;
use crate::license::{self, License};
use crate::prompt::Prompter;
use crate::report::Reporter;
use chrono::{Datelike, Local};
use serde::Serialize;
use std::io::BufRead;
use std::path::Path;

const DEFAULT_TITLE: &str = "PHP Template";
const DEFAULT_VENDOR: &str = "salsan";
const DEFAULT_DESCRIPTION: &str = "A minimal and flexible PHP template to kickstart your PHP \
projects, including development tools for linting, testing, and ensuring code quality.";
const DEFAULT_PHP_VERSION: &str = "8.1.10";
const DEFAULT_LICENSE: &str = "MIT";
const DEFAULT_AUTHOR_NAME: &str = "PHP Developer";
const DEFAULT_AUTHOR_EMAIL: &str = "php@localhost";

/// Package author identity.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    /// npm-style author string: `Name <email>`
    pub fn formatted(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

/// Everything gathered during the prompt phase. Immutable afterwards.
#[derive(Debug, Clone)]
pub struct Answers {
    pub title: String,
    pub vendor: String,
    pub package_name: String,
    pub description: String,
    pub php_version: String,
    pub license: License,
    pub author: Author,
    pub year: i32,
}

impl Answers {
    /// Run the questionnaire.
    ///
    /// The package name defaults to the project root's basename; the author
    /// defaults come from the git identity when available.
    pub fn gather<R: BufRead>(
        prompter: &mut Prompter<R>,
        identity: &dyn IdentitySource,
        reporter: &Reporter,
        project_root: &Path,
    ) -> Answers {
        let default_name = project_root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("php-project")
            .to_string();

        let title = prompter.ask("Project title", Some(DEFAULT_TITLE));
        let vendor = prompter.ask("Vendor / GitHub user or org", Some(DEFAULT_VENDOR));
        let package_name = prompter.ask("Repository / package name", Some(&default_name));
        let description = prompter.ask("Short description", Some(DEFAULT_DESCRIPTION));
        let php_version = prompter.ask("Minimum PHP version", Some(DEFAULT_PHP_VERSION));

        reporter.blank_line();
        reporter.section("Available Licenses:");
        for (i, (id, url)) in license::CATALOG.iter().enumerate() {
            reporter.catalog_entry(i + 1, id, url);
        }
        reporter.blank_line();

        let license_input = prompter.ask("Select license by number or SPDX id", Some(DEFAULT_LICENSE));
        let license = license::resolve(&license_input);

        let git_name = identity.lookup("user.name");
        let git_email = identity.lookup("user.email");

        let author_name = prompter.ask(
            "Author (full name)",
            Some(git_name.as_deref().unwrap_or(DEFAULT_AUTHOR_NAME)),
        );
        let author_email = prompter.ask(
            "Author email",
            Some(git_email.as_deref().unwrap_or(DEFAULT_AUTHOR_EMAIL)),
        );

        Answers {
            title,
            vendor,
            package_name,
            description,
            php_version,
            license,
            author: Author {
                name: author_name,
                email: author_email,
            },
            year: Local::now().year(),
        }
    }

    /// The literal placeholder tokens and their substitution values.
    pub fn replacements(&self) -> Vec<(&'static str, String)> {
        vec![
            ("{{TITLE}}", self.title.clone()),
            ("{{VENDOR}}", self.vendor.clone()),
            ("{{NAME}}", self.package_name.clone()),
            ("{{DESCRIPTION}}", self.description.clone()),
            ("{{PHP_VERSION}}", self.php_version.clone()),
            ("{{LICENSE}}", self.license.id.clone()),
            ("{{LICENSE_URL}}", self.license.url.clone()),
            ("{{LICENSE_BADGE}}", self.license.badge()),
            ("{{LICENSE_BADGE_SIMPLE}}", self.license.badge_label()),
            ("{{AUTHOR_NAME}}", self.author.name.clone()),
            ("{{AUTHOR_EMAIL}}", self.author.email.clone()),
            ("{{YEAR}}", self.year.to_string()),
        ]
    }
}
