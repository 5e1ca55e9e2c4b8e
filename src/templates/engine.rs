//! Startup-compiled template set.

use std::path::Path;

use tera::{Context, Tera};
use thiserror::Error;

/// The fixed, ordered fragment set making up the UI. Base first, since the
/// page fragments inherit from it.
const FRAGMENTS: &[&str] = &["base.html", "partials/nav.html", "pages/home.html"];

/// Name of the home page fragment within the set.
pub const HOME_PAGE: &str = "pages/home.html";

/// Error type for template compilation and rendering.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to compile templates under {dir:?}: {source}")]
    Compile {
        dir: String,
        #[source]
        source: tera::Error,
    },

    #[error("failed to render template {name:?}: {source}")]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },
}

/// An immutable template set, compiled once at startup and shared across
/// requests.
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Compile the fragment set found under `root`.
    ///
    /// Fragments missing from disk are skipped with a warning; their absence
    /// shows up later as a render error. Fragments that exist but fail to
    /// parse (including a page whose parent fragment is missing) are fatal.
    pub fn load(root: &Path) -> Result<Self, TemplateError> {
        let mut files = Vec::with_capacity(FRAGMENTS.len());
        for fragment in FRAGMENTS {
            let path = root.join(fragment);
            if path.is_file() {
                files.push((path, Some(*fragment)));
            } else {
                tracing::warn!(fragment, path = %path.display(), "Template fragment not found");
            }
        }

        let mut tera = Tera::default();
        tera.add_template_files(files)
            .map_err(|source| TemplateError::Compile {
                dir: root.display().to_string(),
                source,
            })?;

        Ok(Self { tera })
    }

    /// Render a page fragment with no input data.
    pub fn render_page(&self, name: &str) -> Result<String, TemplateError> {
        self.tera
            .render(name, &Context::new())
            .map_err(|source| TemplateError::Render {
                name: name.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const BASE: &str = r#"<!doctype html>
<html>
<head><title>{% block title %}Home{% endblock title %}</title></head>
<body>{% include "partials/nav.html" %}<main>{% block main %}{% endblock main %}</main></body>
</html>"#;

    const NAV: &str = r#"<nav><a href="/">Home</a></nav>"#;

    const HOME: &str = r#"{% extends "base.html" %}
{% block main %}<h2>Latest Snippets</h2>{% endblock main %}"#;

    fn write_fragments(dir: &Path, fragments: &[(&str, &str)]) {
        for (name, content) in fragments {
            let path = dir.join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
    }

    #[test]
    fn full_set_renders_home_page() {
        let dir = tempfile::tempdir().unwrap();
        write_fragments(
            dir.path(),
            &[
                ("base.html", BASE),
                ("partials/nav.html", NAV),
                ("pages/home.html", HOME),
            ],
        );

        let engine = TemplateEngine::load(dir.path()).unwrap();
        let html = engine.render_page(HOME_PAGE).unwrap();
        assert!(html.contains("Latest Snippets"));
        assert!(html.contains("<nav>"));
    }

    #[test]
    fn missing_page_fragment_fails_at_render_time() {
        let dir = tempfile::tempdir().unwrap();
        write_fragments(dir.path(), &[("base.html", BASE), ("partials/nav.html", NAV)]);

        let engine = TemplateEngine::load(dir.path()).unwrap();
        let err = engine.render_page(HOME_PAGE).unwrap_err();
        assert!(matches!(err, TemplateError::Render { .. }));
    }

    #[test]
    fn missing_nav_partial_fails_at_render_time() {
        let dir = tempfile::tempdir().unwrap();
        write_fragments(dir.path(), &[("base.html", BASE), ("pages/home.html", HOME)]);

        let engine = TemplateEngine::load(dir.path()).unwrap();
        let err = engine.render_page(HOME_PAGE).unwrap_err();
        assert!(matches!(err, TemplateError::Render { .. }));
    }

    #[test]
    fn missing_base_fragment_fails_at_load_time() {
        let dir = tempfile::tempdir().unwrap();
        write_fragments(
            dir.path(),
            &[("partials/nav.html", NAV), ("pages/home.html", HOME)],
        );

        // home.html extends base.html, which breaks inheritance resolution.
        let err = TemplateEngine::load(dir.path()).unwrap_err();
        assert!(matches!(err, TemplateError::Compile { .. }));
    }

    #[test]
    fn parse_error_fails_at_load_time() {
        let dir = tempfile::tempdir().unwrap();
        write_fragments(
            dir.path(),
            &[
                ("base.html", "{% block main %}never closed"),
                ("partials/nav.html", NAV),
                ("pages/home.html", HOME),
            ],
        );

        let err = TemplateEngine::load(dir.path()).unwrap_err();
        assert!(matches!(err, TemplateError::Compile { .. }));
    }
}
