/// Replace every occurrence of every placeholder token with its value.
///
/// Substitution is literal, not regex. No token's value may contain another
/// token's `{{...}}` syntax, so the replacement order cannot change the
/// result.
pub fn render(template: &str, replacements: &[(&str, String)]) -> String {
    let mut output = template.to_string();
    for (token, value) in replacements {
        output = output.replace(token, value);
    }
    output
}
