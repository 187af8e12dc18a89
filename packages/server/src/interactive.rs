//! Prompt-driven server startup.
//!
//! Asks on the terminal where to listen, which definition file to load and
//! which seed to generate mock data from, exports the answers as the
//! environment [`super::run_server`] reads, then starts it.

use dialoguer::{Confirm, Input};

/// Answers collected from the startup prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Answers {
    bind_addr: String,
    port: String,
    definition_file: String,
    seed: String,
}

impl Answers {
    /// Environment updates for these answers. A blank answer maps to
    /// `None`, which unsets the variable so the server default applies.
    fn env_updates(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("BIND_ADDR", non_blank(&self.bind_addr)),
            ("PORT", non_blank(&self.port)),
            ("SUBDIVISION_FILE", non_blank(&self.definition_file)),
            ("SUBDIVISION_SEED", non_blank(&self.seed)),
        ]
    }
}

fn non_blank(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}

/// Reads one line of input, pre-filled with `default`.
fn ask(label: &str, default: String) -> String {
    Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .default(default.clone())
        .show_default(!default.is_empty())
        .interact_text()
        .unwrap_or(default)
}

fn current(key: &str, fallback: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| fallback.to_string())
}

/// Prompts for the server settings and starts the server.
///
/// Each prompt is pre-filled from the current environment. Declining the
/// final confirmation returns without starting anything.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the server fails to start.
#[allow(clippy::future_not_send)]
pub async fn run() -> std::io::Result<()> {
    println!("Subdivision Map Server");
    println!();

    let answers = Answers {
        bind_addr: ask("Bind address", current("BIND_ADDR", "127.0.0.1")),
        port: ask("Port", current("PORT", "8080")),
        definition_file: ask(
            "Subdivision definition file (blank for the built-in one)",
            current("SUBDIVISION_FILE", ""),
        ),
        seed: ask(
            "Mock data seed (blank for random)",
            current("SUBDIVISION_SEED", ""),
        ),
    };

    let serve = Confirm::new()
        .with_prompt(format!(
            "Serve on {}:{}?",
            answers.bind_addr.trim(),
            answers.port.trim()
        ))
        .default(true)
        .interact()
        .unwrap_or(true);
    if !serve {
        println!("Cancelled.");
        return Ok(());
    }

    for (key, value) in answers.env_updates() {
        // SAFETY: the server has not started and nothing else touches the
        // environment while the prompts run.
        unsafe {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }

    super::run_server().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_are_trimmed() {
        let answers = Answers {
            bind_addr: " 0.0.0.0 ".to_string(),
            port: "9000\n".to_string(),
            definition_file: "defs/subdivision.toml".to_string(),
            seed: "42".to_string(),
        };

        assert_eq!(
            answers.env_updates(),
            [
                ("BIND_ADDR", Some("0.0.0.0")),
                ("PORT", Some("9000")),
                ("SUBDIVISION_FILE", Some("defs/subdivision.toml")),
                ("SUBDIVISION_SEED", Some("42")),
            ]
        );
    }

    #[test]
    fn blank_answers_unset_variables() {
        let answers = Answers {
            bind_addr: "127.0.0.1".to_string(),
            port: "8080".to_string(),
            definition_file: "   ".to_string(),
            seed: String::new(),
        };

        let updates = answers.env_updates();
        assert_eq!(updates[2], ("SUBDIVISION_FILE", None));
        assert_eq!(updates[3], ("SUBDIVISION_SEED", None));
    }
}
