use crate::answers::Answers;
use crate::report::Reporter;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

pub const COMPOSER_FILE: &str = "composer.json";
pub const PACKAGE_FILE: &str = "package.json";

/// How a script entry behaves when the manifest already has that key.
#[derive(Debug, PartialEq)]
enum MergeRule {
    Overwrite,
    PreserveExisting,
}

struct ScriptEntry {
    key: &'static str,
    command: &'static str,
    rule: MergeRule,
}

/// Command table merged into package.json `scripts`.
///
/// Quality tooling is re-asserted on every run; the platform setup dispatch
/// keeps whatever the template user wired up.
const SCRIPT_TABLE: [ScriptEntry; 7] = [
    ScriptEntry {
        key: "test",
        command: "vendor/bin/phpunit --colors=always",
        rule: MergeRule::Overwrite,
    },
    ScriptEntry {
        key: "lint",
        command: "vendor/bin/phpcs --standard=PSR12 src tests",
        rule: MergeRule::Overwrite,
    },
    ScriptEntry {
        key: "lint:fix",
        command: "vendor/bin/phpcbf --standard=PSR12 src tests",
        rule: MergeRule::Overwrite,
    },
    ScriptEntry {
        key: "analyze",
        command: "vendor/bin/phpstan analyse src --level=max",
        rule: MergeRule::Overwrite,
    },
    ScriptEntry {
        key: "bench",
        command: "vendor/bin/phpbench run --report=aggregate",
        rule: MergeRule::Overwrite,
    },
    ScriptEntry {
        key: "setup",
        command: "bash scripts/setup.sh",
        rule: MergeRule::PreserveExisting,
    },
    ScriptEntry {
        key: "setup:windows",
        command: "powershell -ExecutionPolicy Bypass -File scripts/setup.ps1",
        rule: MergeRule::PreserveExisting,
    },
];

/// Patch composer.json in place.
///
/// Every failure mode is non-fatal: an absent manifest is skipped with an
/// informational message, anything else is a warning. Fields not listed in
/// the update set survive verbatim.
pub fn update_composer(project_root: &Path, answers: &Answers, reporter: &Reporter) {
    let path = project_root.join(COMPOSER_FILE);
    let Some(mut doc) = load(&path, COMPOSER_FILE, reporter) else {
        return;
    };

    let repo_url = github_url(answers);

    doc.insert(
        "name".to_string(),
        json!(format!("{}/{}", answers.vendor, answers.package_name)),
    );
    doc.insert("description".to_string(), json!(answers.description));
    doc.insert("license".to_string(), json!(answers.license.id));
    doc.insert("authors".to_string(), json!([answers.author]));
    doc.insert("homepage".to_string(), json!(repo_url));

    entry_object(&mut doc, "require").insert(
        "php".to_string(),
        json!(format!(">={}", answers.php_version)),
    );

    let support = entry_object(&mut doc, "support");
    support.insert("issues".to_string(), json!(format!("{}/issues", repo_url)));
    support.insert("source".to_string(), json!(repo_url));

    let namespace = php_namespace(&answers.vendor, &answers.package_name);
    entry_object(entry_object(&mut doc, "autoload"), "psr-4")
        .entry(namespace)
        .or_insert(json!("src/"));
    entry_object(entry_object(&mut doc, "autoload-dev"), "psr-4")
        .entry("Tests\\".to_string())
        .or_insert(json!("tests/"));

    save(&path, doc, COMPOSER_FILE, reporter);
}

/// Patch package.json in place. Same failure policy as composer.json.
pub fn update_package(project_root: &Path, answers: &Answers, reporter: &Reporter) {
    let path = project_root.join(PACKAGE_FILE);
    let Some(mut doc) = load(&path, PACKAGE_FILE, reporter) else {
        return;
    };

    let repo_url = github_url(answers);

    doc.insert("name".to_string(), json!(answers.package_name));
    doc.insert("description".to_string(), json!(answers.description));
    doc.insert("author".to_string(), json!(answers.author.formatted()));
    doc.insert("license".to_string(), json!(answers.license.id));
    doc.insert("homepage".to_string(), json!(format!("{}#readme", repo_url)));

    // An existing repository type (e.g. a non-git mirror) survives.
    let repository = entry_object(&mut doc, "repository");
    if !repository.contains_key("type") {
        repository.insert("type".to_string(), json!("git"));
    }
    repository.insert("url".to_string(), json!(format!("git+{}.git", repo_url)));

    entry_object(&mut doc, "bugs")
        .insert("url".to_string(), json!(format!("{}/issues", repo_url)));

    let scripts = entry_object(&mut doc, "scripts");
    for entry in &SCRIPT_TABLE {
        if entry.rule == MergeRule::PreserveExisting && scripts.contains_key(entry.key) {
            continue;
        }
        scripts.insert(entry.key.to_string(), json!(entry.command));
    }

    save(&path, doc, PACKAGE_FILE, reporter);
}

fn github_url(answers: &Answers) -> String {
    format!(
        "https://github.com/{}/{}",
        answers.vendor, answers.package_name
    )
}

/// PSR-4 namespace prefix for vendor + package, e.g. `Acme\Myapp\`.
fn php_namespace(vendor: &str, package_name: &str) -> String {
    format!(
        "{}\\{}\\",
        pascal_segment(vendor),
        pascal_segment(package_name)
    )
}

/// `my-app` → `MyApp`, `myapp` → `Myapp`. Splits on `-`, `_` and `.`,
/// capitalizes the first letter of each piece and keeps the rest untouched.
fn pascal_segment(input: &str) -> String {
    input
        .split(['-', '_', '.'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Load a manifest as a JSON object, or explain why it is being skipped.
fn load(path: &Path, label: &str, reporter: &Reporter) -> Option<Map<String, Value>> {
    if !path.exists() {
        reporter.info(&format!("{} not found, skipping", label));
        return None;
    }

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            reporter.warn(&format!("Could not read {} ({}), skipping", label, e));
            return None;
        }
    };

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => {
            reporter.warn(&format!(
                "{} does not contain a JSON object, skipping",
                label
            ));
            None
        }
        Err(e) => {
            reporter.warn(&format!("{} is not valid JSON ({}), skipping", label, e));
            None
        }
    }
}

/// Serialize a manifest back, pretty-printed with a trailing newline.
fn save(path: &Path, doc: Map<String, Value>, label: &str, reporter: &Reporter) {
    let text = match serde_json::to_string_pretty(&Value::Object(doc)) {
        Ok(text) => text,
        Err(e) => {
            reporter.warn(&format!("Could not serialize {} ({})", label, e));
            return;
        }
    };

    match fs::write(path, text + "\n") {
        Ok(()) => reporter.ok(&format!("{} updated", label)),
        Err(e) => reporter.warn(&format!("Could not write {} ({})", label, e)),
    }
}

/// Get `map[key]` as a mutable object, inserting or replacing as needed.
///
/// Manifests serialized from empty PHP arrays can hold `[]` where an object
/// belongs; those are swapped for a fresh object before patching.
fn entry_object<'a>(map: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    let slot = map
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(object) => object,
        _ => unreachable!(),
    }
}
