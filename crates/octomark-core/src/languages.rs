//! GitHub's conventional language colors, for terminal swatches

/// Hex color for a language, if it's one of the usual suspects
pub fn language_color(language: &str) -> Option<&'static str> {
    let color = match language {
        "JavaScript" => "#f1e05a",
        "TypeScript" => "#3178c6",
        "HTML" => "#e34c26",
        "CSS" => "#563d7c",
        "Python" => "#3572A5",
        "Java" => "#b07219",
        "Ruby" => "#701516",
        "PHP" => "#4F5D95",
        "Go" => "#00ADD8",
        "C" => "#555555",
        "C++" => "#f34b7d",
        "C#" => "#178600",
        "Shell" => "#89e051",
        "Swift" => "#ffac45",
        "Kotlin" => "#A97BFF",
        "Rust" => "#dea584",
        "Dart" => "#00B4AB",
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_languages() {
        assert_eq!(language_color("Rust"), Some("#dea584"));
        assert_eq!(language_color("Befunge"), None);
    }
}
