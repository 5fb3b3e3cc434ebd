use std::fs;

use serde::Deserialize;

/// JSON fixture loaded from disk, with `${key}` placeholders substituted
/// before parsing.
pub struct TestCase<T> {
    pub case: T,
}

impl<T> TestCase<T>
where
    T: for<'de> Deserialize<'de>,
{
    pub fn load(file_path: String, replacements: Vec<(impl ToString, impl ToString)>) -> Self {
        let text = fs::read_to_string(&file_path)
            .unwrap_or_else(|e| panic!("Unable to read {}: {}", file_path, e));
        Self::parse(&text, replacements)
    }

    pub fn parse(text: &str, replacements: Vec<(impl ToString, impl ToString)>) -> Self {
        let mut text = text.to_owned();
        for (from, to) in replacements {
            let from = &format!("${{{}}}", from.to_string());
            text = text.replace(from, &to.to_string());
        }
        let case: T = serde_json::from_str(&text).expect("Could not parse test case");
        TestCase { case }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Greeting {
        name: String,
        rounds: u32,
    }

    #[test]
    fn substitutes_placeholders() {
        let test_case = TestCase::<Greeting>::parse(
            r#"{ "name": "${player}", "rounds": ${rounds} }"#,
            vec![("player", "Ada"), ("rounds", "3")],
        );
        assert_eq!(
            test_case.case,
            Greeting {
                name: "Ada".to_owned(),
                rounds: 3
            }
        );
    }

    #[test]
    fn no_replacements() {
        let none: Vec<(String, String)> = vec![];
        let test_case = TestCase::<Greeting>::parse(r#"{ "name": "x", "rounds": 0 }"#, none);
        assert_eq!(test_case.case.rounds, 0);
    }
}
