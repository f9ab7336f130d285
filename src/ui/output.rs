use mcpcheck::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

pub fn render_config_warnings(warnings: &[ConfigWarning], supports_unicode: bool) -> String {
    let icon = Icon::Warning.render(supports_unicode);
    let mut out = String::new();
    for w in warnings {
        match w.line {
            Some(line) => out.push_str(&format!(
                "{} Unknown config key '{}' in {}:{}\n",
                icon,
                w.key,
                w.file.display(),
                line
            )),
            None => out.push_str(&format!(
                "{} Unknown config key '{}' in {}\n",
                icon,
                w.key,
                w.file.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

pub fn print_config_warnings(warnings: &[ConfigWarning], supports_unicode: bool) {
    eprint!("{}", render_config_warnings(warnings, supports_unicode));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn renders_line_and_suggestion() {
        let warnings = vec![ConfigWarning {
            key: "comands".to_string(),
            file: PathBuf::from("mcpcheck.toml"),
            line: Some(2),
            suggestion: Some("commands".to_string()),
        }];
        let rendered = render_config_warnings(&warnings, false);
        assert_eq!(
            rendered,
            "[WARN] Unknown config key 'comands' in mcpcheck.toml:2\n   Did you mean 'commands'?\n"
        );
    }
}
