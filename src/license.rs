/// Ordered license catalog shown during the prompt phase.
///
/// Selection accepts either the 1-based position or the SPDX id itself.
pub const CATALOG: [(&str, &str); 8] = [
    ("MIT", "https://opensource.org/licenses/MIT"),
    ("Apache-2.0", "https://www.apache.org/licenses/LICENSE-2.0"),
    ("GPL-3.0", "https://www.gnu.org/licenses/gpl-3.0.en.html"),
    ("LGPL-3.0", "https://www.gnu.org/licenses/lgpl-3.0.en.html"),
    ("BSD-3-Clause", "https://opensource.org/licenses/BSD-3-Clause"),
    ("BSD-2-Clause", "https://opensource.org/licenses/BSD-2-Clause"),
    ("MPL-2.0", "https://www.mozilla.org/en-US/MPL/2.0/"),
    ("Unlicense", "https://unlicense.org/"),
];

/// A resolved license: SPDX id plus its reference URL.
#[derive(Debug, Clone, PartialEq)]
pub struct License {
    pub id: String,
    pub url: String,
}

impl License {
    /// Shields.io path segment: internal hyphens doubled (`GPL-3.0` → `GPL--3.0`).
    pub fn badge(&self) -> String {
        self.id.replace('-', "--")
    }

    /// Short badge label: ASCII letters only (`GPL-3.0` → `GPL`).
    pub fn badge_label(&self) -> String {
        self.id.chars().filter(|c| c.is_ascii_alphabetic()).collect()
    }
}

/// Resolve user input into a license.
///
/// All-digit input within `1..=8` selects the catalog entry at that position.
/// Anything else is treated as a literal SPDX id, with the catalog URL when
/// known and a constructed spdx.org URL otherwise.
pub fn resolve(input: &str) -> License {
    let input = input.trim();

    if let Some(number) = numeric_choice(input) {
        if number >= 1 && number <= CATALOG.len() {
            let (id, url) = CATALOG[number - 1];
            return License {
                id: id.to_string(),
                url: url.to_string(),
            };
        }
    }

    let url = CATALOG
        .iter()
        .find(|(id, _)| *id == input)
        .map(|(_, url)| (*url).to_string())
        .unwrap_or_else(|| format!("https://spdx.org/licenses/{}.html", input));

    License {
        id: input.to_string(),
        url,
    }
}

fn numeric_choice(input: &str) -> Option<usize> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_number() {
        for (i, (id, url)) in CATALOG.iter().enumerate() {
            let license = resolve(&(i + 1).to_string());
            assert_eq!(license.id, *id);
            assert_eq!(license.url, *url);
        }
    }

    #[test]
    fn test_resolve_by_id() {
        let license = resolve("BSD-3-Clause");
        assert_eq!(license.id, "BSD-3-Clause");
        assert_eq!(license.url, "https://opensource.org/licenses/BSD-3-Clause");
    }

    #[test]
    fn test_resolve_unknown_id_builds_spdx_url() {
        let license = resolve("WTFPL");
        assert_eq!(license.id, "WTFPL");
        assert_eq!(license.url, "https://spdx.org/licenses/WTFPL.html");
    }

    #[test]
    fn test_resolve_number_out_of_range_is_literal() {
        let license = resolve("9");
        assert_eq!(license.id, "9");
        assert_eq!(license.url, "https://spdx.org/licenses/9.html");

        let license = resolve("0");
        assert_eq!(license.id, "0");
    }

    #[test]
    fn test_resolve_trims_input() {
        assert_eq!(resolve("  MIT  ").id, "MIT");
        assert_eq!(resolve(" 2 ").id, "Apache-2.0");
    }

    #[test]
    fn test_badge_doubles_hyphens() {
        assert_eq!(resolve("GPL-3.0").badge(), "GPL--3.0");
        assert_eq!(resolve("MIT").badge(), "MIT");
    }

    #[test]
    fn test_badge_label_keeps_letters_only() {
        assert_eq!(resolve("GPL-3.0").badge_label(), "GPL");
        assert_eq!(resolve("BSD-3-Clause").badge_label(), "BSDClause");
        assert_eq!(resolve("Unlicense").badge_label(), "Unlicense");
    }
}
